use ply_core::Score;

/// Outcome of one completed search.
///
/// Only `best_move` matters for playing; the rest describes the search
/// that produced it and feeds logging and tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchResult<M> {
    /// The chosen move, or `None` when the side to move has no legal move
    /// (the search never found anything to play).
    pub best_move: Option<M>,

    /// Backed-up score of `best_move` from the searching player's
    /// perspective. `Score::LOST` when there is no move at all.
    pub score: Score,

    /// Depth of the search that produced this result. The iterative
    /// driver reports the deepest fully completed depth here; zero means
    /// not even a depth-1 search finished.
    pub depth: u32,

    /// States visited by the search that produced this result.
    pub nodes: u64,
}

impl<M> SearchResult<M> {
    /// The result of a search that never ran: no move, a lost score,
    /// depth zero.
    pub(crate) fn sentinel() -> Self {
        SearchResult {
            best_move: None,
            score: Score::LOST,
            depth: 0,
            nodes: 0,
        }
    }
}

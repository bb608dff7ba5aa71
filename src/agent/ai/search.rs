// Root Move Selection
//
// Drives the minimax searches across every legal root move and keeps the
// best one. Root moves are tried in the rules engine's order and a later
// move must score strictly better to replace an earlier one, so ties go to
// the first move enumerated. A root move that mates on the spot is returned
// immediately without looking at the rest.

use crate::game_repr::Rules;
use super::minimax::{SearchStatistics, Searcher};

/// Result of a move decision
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<M> {
    pub best_move: Option<M>,
    /// Score of `best_move` from the mover's perspective. `+inf` for an
    /// immediate mate, `-inf` when nothing was searched.
    pub score: f64,
    pub depth: u8,
    pub stats: SearchStatistics,
}

impl<M> SearchResult<M> {
    pub fn minimax_nodes(&self) -> u64 {
        self.stats.minimax_nodes
    }

    pub fn alpha_beta_nodes(&self) -> u64 {
        self.stats.alpha_beta_nodes
    }
}

/// Choose a move for the side to move in `pos`.
///
/// # Arguments
/// * `pos` - Position to search; it is returned unchanged
/// * `depth` - Plies to search, including the root move (at least 1)
/// * `use_pruning` - Alpha-beta when true, plain minimax otherwise
///
/// # Returns
/// SearchResult with the chosen move and the node counts of this decision
pub fn choose_move<R: Rules>(pos: &mut R, depth: u8, use_pruning: bool) -> SearchResult<R::Move> {
    // Ensure we search at least depth 1
    let depth = depth.max(1);
    let mut searcher = Searcher::new(pos.side_to_move());

    let mut best: Option<(R::Move, f64)> = None;
    let mut alpha = f64::NEG_INFINITY;
    let beta = f64::INFINITY;

    for mv in pos.legal_moves() {
        let mut child = pos.apply(mv);

        if child.is_checkmate() {
            log::debug!("{:?} mates immediately", mv);
            return SearchResult {
                best_move: Some(mv),
                score: f64::INFINITY,
                depth,
                stats: searcher.stats(),
            };
        }

        let score = if use_pruning {
            searcher.minimax_alpha_beta(&mut *child, depth - 1, alpha, beta, false)
        } else {
            searcher.minimax(&mut *child, depth - 1, false)
        };
        drop(child);

        log::trace!("root move {:?} scored {}", mv, score);

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }

        if use_pruning {
            alpha = alpha.max(score);
        }
    }

    let stats = searcher.stats();
    log::debug!(
        "depth {} search done: minimax nodes {}, alpha-beta nodes {}",
        depth,
        stats.minimax_nodes,
        stats.alpha_beta_nodes
    );

    match best {
        Some((mv, score)) => SearchResult {
            best_move: Some(mv),
            score,
            depth,
            stats,
        },
        // Only reachable with no legal root moves; callers check for game
        // over first, so this is a last-resort default.
        None => SearchResult {
            best_move: pos.legal_moves().first().copied(),
            score: f64::NEG_INFINITY,
            depth,
            stats,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::ChessGame;

    #[test]
    fn test_search_starting_position() {
        let mut pos = ChessGame::new();
        let before = pos.fen();
        let result = choose_move(&mut pos, 2, true);

        assert!(result.best_move.is_some());
        assert_eq!(result.depth, 2);
        assert!(result.alpha_beta_nodes() > 0);
        assert_eq!(result.minimax_nodes(), 0);
        assert_eq!(pos.fen(), before);
    }

    #[test]
    fn test_search_mate_in_one() {
        // Back rank mate: Ra8#
        let mut pos = ChessGame::from_fen("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1").unwrap();
        let result = choose_move(&mut pos, 3, true);

        assert_eq!(result.best_move.map(|mv| mv.to_string()), Some("a1a8".to_string()));
        assert_eq!(result.score, f64::INFINITY);
    }

    #[test]
    fn test_search_no_legal_moves_checkmate() {
        let mut pos =
            ChessGame::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
                .unwrap();
        let result = choose_move(&mut pos, 3, true);

        assert!(result.best_move.is_none());
        assert_eq!(result.stats, SearchStatistics::default());
    }

    #[test]
    fn test_search_no_legal_moves_stalemate() {
        let mut pos = ChessGame::from_fen("k7/8/1Q6/8/8/8/8/K7 b - - 0 1").unwrap();
        let result = choose_move(&mut pos, 3, false);

        assert!(result.best_move.is_none());
    }

    #[test]
    fn test_depth_zero_is_clamped() {
        let mut pos = ChessGame::new();
        let result = choose_move(&mut pos, 0, false);

        assert_eq!(result.depth, 1);
        // One leaf per root move
        assert_eq!(result.minimax_nodes(), 20);
    }
}

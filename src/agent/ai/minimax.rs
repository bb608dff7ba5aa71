// Minimax Search, with and without Alpha-Beta Pruning
//
// Both searches score positions from one fixed side (the side that started
// the decision). Maximizing plies belong to that side, minimizing plies to
// the opponent. Scores are f64 so that checkmate can be a true infinity.
//
// Every explored move goes through `Rules::apply`, whose guard takes the
// move back when it leaves scope, so the shared position is restored on
// every return path including alpha-beta cutoffs.
//
// Each search counts the nodes it visits in its own counter, which is how
// the two variants are compared.

use crate::game_repr::{Rules, Side};
use super::evaluation::evaluate;

/// Node counters for one move decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Nodes visited by plain minimax
    pub minimax_nodes: u64,
    /// Nodes visited by alpha-beta minimax
    pub alpha_beta_nodes: u64,
}

impl SearchStatistics {
    /// Percentage of plain-minimax nodes that alpha-beta avoided.
    /// `None` unless both searches have run.
    pub fn pruning_reduction(&self) -> Option<f64> {
        if self.minimax_nodes == 0 || self.alpha_beta_nodes == 0 {
            return None;
        }
        Some((1.0 - self.alpha_beta_nodes as f64 / self.minimax_nodes as f64) * 100.0)
    }
}

/// State shared by the recursive calls of one search.
#[derive(Debug, Clone)]
pub struct Searcher {
    perspective: Side,
    stats: SearchStatistics,
}

impl Searcher {
    pub fn new(perspective: Side) -> Self {
        Self {
            perspective,
            stats: SearchStatistics::default(),
        }
    }

    pub fn perspective(&self) -> Side {
        self.perspective
    }

    pub fn stats(&self) -> SearchStatistics {
        self.stats
    }

    /// Plain minimax to `depth` plies.
    ///
    /// Leaves and finished games are scored with [`evaluate`] from the
    /// searcher's perspective.
    pub fn minimax<R: Rules>(&mut self, pos: &mut R, depth: u8, maximizing: bool) -> f64 {
        self.stats.minimax_nodes += 1;

        if depth == 0 || pos.is_game_over() {
            return evaluate(pos, self.perspective);
        }

        let moves = pos.legal_moves();
        // The rules engine flags every move-less position as game over;
        // if one slips through, score it statically rather than as +-inf.
        if moves.is_empty() {
            return evaluate(pos, self.perspective);
        }

        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for mv in moves {
            let mut child = pos.apply(mv);
            let score = self.minimax(&mut *child, depth - 1, !maximizing);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }

    /// Minimax with alpha-beta pruning.
    ///
    /// Returns the same score as [`Searcher::minimax`] when called with the
    /// full `(-inf, +inf)` window. Siblings after a cutoff are never visited.
    pub fn minimax_alpha_beta<R: Rules>(
        &mut self,
        pos: &mut R,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> f64 {
        self.stats.alpha_beta_nodes += 1;

        if depth == 0 || pos.is_game_over() {
            return evaluate(pos, self.perspective);
        }

        let moves = pos.legal_moves();
        if moves.is_empty() {
            return evaluate(pos, self.perspective);
        }

        if maximizing {
            let mut best = f64::NEG_INFINITY;
            for mv in moves {
                let score = {
                    let mut child = pos.apply(mv);
                    self.minimax_alpha_beta(&mut *child, depth - 1, alpha, beta, false)
                };
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break; // Beta cutoff
                }
            }
            best
        } else {
            let mut best = f64::INFINITY;
            for mv in moves {
                let score = {
                    let mut child = pos.apply(mv);
                    self.minimax_alpha_beta(&mut *child, depth - 1, alpha, beta, true)
                };
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break; // Alpha cutoff
                }
            }
            best
        }
    }
}

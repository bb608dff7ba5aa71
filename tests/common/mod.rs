//! Scripted game trees for driving the search without a chess board.
//!
//! A [`ScriptedGame`] is an explicit tree: every node knows its children, who
//! is to move, whether it is checkmate or stalemate, and how much material
//! sits on the board. A move is simply the index of the child node it leads
//! to. Material is expressed in pawns placed on the first and eighth ranks,
//! where every pawn table entry is zero, so a node holding `n` pawns scores
//! exactly `10 * n` for the first side.

#![allow(dead_code)]

use minimax_chess::game_repr::{MoveList, Piece, PieceKind, Rules, Side, Square};

pub type NodeId = usize;

pub const ROOT: NodeId = 0;

#[derive(Debug, Clone)]
struct Node {
    children: Vec<NodeId>,
    side: Side,
    /// Positive: first-side pawns, negative: second-side pawns
    pawns: i8,
    checkmate: bool,
    stalemate: bool,
}

#[derive(Debug, Clone)]
pub struct ScriptedGame {
    nodes: Vec<Node>,
    path: Vec<NodeId>,
    /// Every node entered through `push`, in order
    pushed: Vec<NodeId>,
}

impl ScriptedGame {
    pub fn new(root_side: Side) -> Self {
        Self {
            nodes: vec![Node {
                children: Vec::new(),
                side: root_side,
                pawns: 0,
                checkmate: false,
                stalemate: false,
            }],
            path: vec![ROOT],
            pushed: Vec::new(),
        }
    }

    fn add_node(&mut self, parent: NodeId, pawns: i8) -> NodeId {
        assert!(pawns.unsigned_abs() <= 16, "at most 16 pawns fit");
        let id = self.nodes.len();
        let side = self.nodes[parent].side.opposite();
        self.nodes.push(Node {
            children: Vec::new(),
            side,
            pawns,
            checkmate: false,
            stalemate: false,
        });
        self.nodes[parent].children.push(id);
        id
    }

    /// Adds a child of `parent` worth `pawns` pawns for the first side.
    pub fn child(&mut self, parent: NodeId, pawns: i8) -> NodeId {
        self.add_node(parent, pawns)
    }

    /// Adds a child in which the side to move is checkmated.
    pub fn mate(&mut self, parent: NodeId) -> NodeId {
        let id = self.add_node(parent, 0);
        self.nodes[id].checkmate = true;
        id
    }

    /// Adds a stalemated child that still carries `pawns` of material.
    pub fn stalemate(&mut self, parent: NodeId, pawns: i8) -> NodeId {
        let id = self.add_node(parent, pawns);
        self.nodes[id].stalemate = true;
        id
    }

    /// Adds one leaf child per entry of `values`.
    pub fn leaves(&mut self, parent: NodeId, values: &[i8]) -> Vec<NodeId> {
        values.iter().map(|&v| self.child(parent, v)).collect()
    }

    pub fn current(&self) -> NodeId {
        *self.path.last().unwrap()
    }

    pub fn pushed(&self) -> &[NodeId] {
        &self.pushed
    }

    pub fn was_visited(&self, node: NodeId) -> bool {
        self.pushed.contains(&node)
    }

    pub fn clear_log(&mut self) {
        self.pushed.clear();
    }

    fn node(&self) -> &Node {
        &self.nodes[self.current()]
    }
}

impl Rules for ScriptedGame {
    type Move = NodeId;

    fn legal_moves(&self) -> MoveList<NodeId> {
        self.node().children.iter().copied().collect()
    }

    fn push(&mut self, mv: NodeId) {
        assert!(
            self.node().children.contains(&mv),
            "{} is not a child of {}",
            mv,
            self.current()
        );
        self.path.push(mv);
        self.pushed.push(mv);
    }

    fn pop(&mut self) {
        assert!(self.path.len() > 1, "pop without a matching push");
        self.path.pop();
    }

    fn is_checkmate(&self) -> bool {
        self.node().checkmate
    }

    fn is_stalemate(&self) -> bool {
        self.node().stalemate
    }

    fn is_insufficient_material(&self) -> bool {
        false
    }

    fn piece_at(&self, square: Square) -> Option<Piece> {
        let slot = match square.rank() {
            0 => square.file(),
            7 => 8 + square.file(),
            _ => return None,
        };
        let pawns = self.node().pawns;
        if slot >= pawns.unsigned_abs() {
            return None;
        }
        let side = if pawns > 0 { Side::First } else { Side::Second };
        Some(Piece::new(side, PieceKind::Pawn))
    }

    fn side_to_move(&self) -> Side {
        self.node().side
    }
}

/// Small deterministic generator for building varied trees.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1)
    }

    pub fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    pub fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

/// A tree of the given height with up to `branching` children per node.
/// Some nodes are checkmates, stalemates or dead ends with no moves.
pub fn random_tree(seed: u64, height: u8, branching: u64) -> ScriptedGame {
    let mut rng = Lcg::new(seed);
    let root_side = if rng.below(2) == 0 {
        Side::First
    } else {
        Side::Second
    };
    let mut game = ScriptedGame::new(root_side);
    grow(&mut game, &mut rng, ROOT, height, branching);
    game
}

fn grow(game: &mut ScriptedGame, rng: &mut Lcg, parent: NodeId, height: u8, branching: u64) {
    if height == 0 {
        return;
    }
    let count = 1 + rng.below(branching);
    for _ in 0..count {
        let roll = rng.below(20);
        let pawns = rng.below(17) as i8 - 8;
        match roll {
            0 | 1 => {
                game.mate(parent);
            }
            2 => {
                game.stalemate(parent, pawns);
            }
            3 => {
                // Dead end: no moves but not flagged as finished
                game.child(parent, pawns);
            }
            _ => {
                let id = game.child(parent, pawns);
                grow(game, rng, id, height - 1, branching);
            }
        }
    }
}

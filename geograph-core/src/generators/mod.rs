//! Generator implementations, one module per topology family.
//!
//! The helpers below are the shared building blocks: consecutive pairs along
//! an id range, all pairs within an id range, and the pendant path used by
//! the tadpole and lollipop graphs.

mod barbell;
mod chain;
mod grid;
mod hex;
mod line;
mod lollipop;
mod star;
mod tadpole;

pub use self::{
    barbell::Barbell,
    chain::Chain,
    grid::SquareGrid2D,
    hex::{HexLabels, HexagonalGrid2D, hex_grid_rows},
    line::{Circle, Line},
    lollipop::Lollipop,
    star::{Star, Wheel},
    tadpole::Tadpole,
};

use crate::triple::Triple;

/// Relation used by tadpole and lollipop pendant paths.
const PATH_RELATION: usize = 1;

/// Consecutive `(i, i + 1)` pairs for `i` in `start..end - 1`.
fn consecutive_pairs(start: usize, end: usize) -> impl Iterator<Item = (usize, usize)> {
    (start..end).zip(start.saturating_add(1)..end)
}

/// Every `(a, b)` with `start <= a < b < end`, in lexicographic order.
fn clique_pairs(start: usize, end: usize) -> impl Iterator<Item = (usize, usize)> {
    (start..end).flat_map(move |head| (head.saturating_add(1)..end).map(move |tail| (head, tail)))
}

/// Number of unordered pairs drawn from `n` items.
const fn choose_two(n: usize) -> usize {
    n.saturating_mul(n.saturating_sub(1)) / 2
}

/// Path of `length` edges hanging off `anchor`, pointing away from it unless
/// `sink` is set.
fn pendant_path(anchor: usize, length: usize, sink: bool) -> impl Iterator<Item = Triple> {
    consecutive_pairs(anchor, anchor.saturating_add(length).saturating_add(1)).map(
        move |(head, tail)| {
            if sink {
                Triple::new(tail, PATH_RELATION, head)
            } else {
                Triple::new(head, PATH_RELATION, tail)
            }
        },
    )
}

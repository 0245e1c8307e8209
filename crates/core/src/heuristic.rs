//! Distance estimate used to rank frontier nodes.
//! Manhattan distance never overestimates the remaining cost under
//! 4-directional unit-cost movement, and it satisfies the triangle inequality,
//! so the first time the goal is popped its cost is optimal.

use crate::types::Pos;

pub fn manhattan(a: Pos, b: Pos) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

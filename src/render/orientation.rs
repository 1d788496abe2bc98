//! Which picture to draw for each snake segment.
//!
//! Purely a function of a segment and its neighbours in body order; nothing
//! here feeds back into the simulation.

use crate::game::{Direction, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    /// Joins the cell to the left and the cell above
    TopLeft,
    /// Joins the cell to the right and the cell above
    TopRight,
    /// Joins the cell to the left and the cell below
    BottomLeft,
    /// Joins the cell to the right and the cell below
    BottomRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    /// Head, facing the way the snake travels
    Head(Direction),
    /// Tail, pointing away from the rest of the body
    Tail(Direction),
    Horizontal,
    Vertical,
    Corner(Corner),
}

/// Pick the sprite for `cell`.
///
/// `toward_head` is the neighbour one step closer to the head (`None` for the
/// head itself), `toward_tail` the one closer to the tail (`None` for the tail).
pub fn segment_sprite(
    toward_head: Option<Position>,
    cell: Position,
    toward_tail: Option<Position>,
) -> Sprite {
    match (toward_head, toward_tail) {
        (None, Some(next)) => Sprite::Head(away_from(cell, next)),
        (Some(prev), None) => Sprite::Tail(away_from(cell, prev)),
        (Some(prev), Some(next)) => body_sprite(cell.delta_to(prev), cell.delta_to(next)),
        (None, None) => Sprite::Head(Direction::Right),
    }
}

/// Sprites for a whole body, head first
pub fn body_sprites(body: &[Position]) -> Vec<Sprite> {
    (0..body.len())
        .map(|i| {
            let prev = i.checked_sub(1).map(|j| body[j]);
            segment_sprite(prev, body[i], body.get(i + 1).copied())
        })
        .collect()
}

/// Direction from `neighbour` through `cell`
fn away_from(cell: Position, neighbour: Position) -> Direction {
    Direction::from_delta(neighbour.delta_to(cell)).unwrap_or(Direction::Right)
}

fn body_sprite(a: (i32, i32), b: (i32, i32)) -> Sprite {
    if a.0 == b.0 {
        return Sprite::Vertical;
    }
    if a.1 == b.1 {
        return Sprite::Horizontal;
    }
    // One neighbour is horizontal, the other vertical
    let dx = if a.0 != 0 { a.0 } else { b.0 };
    let dy = if a.1 != 0 { a.1 } else { b.1 };
    Sprite::Corner(match (dx < 0, dy < 0) {
        (true, true) => Corner::TopLeft,
        (false, true) => Corner::TopRight,
        (true, false) => Corner::BottomLeft,
        (false, false) => Corner::BottomRight,
    })
}

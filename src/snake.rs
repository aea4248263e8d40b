use std::collections::HashMap;

use crate::coords::{Coordinate, Direction};
use MoveResult::*;

pub const INITIAL_LENGTH: u32 = 3;

#[derive(Debug, PartialEq, Eq)]
pub enum MoveResult {
    Moved { new_head: Coordinate },
    Crashed
}

/// The snake body is stored as a map from occupied cell to the number of
/// ticks that cell stays occupied. The head is written with the full length,
/// and every move counts all cells down by one, so the tail vacates on its own
/// and growing only means writing later heads with a larger value.
#[derive(Debug, Clone)]
pub struct Snake {
    head: Coordinate,
    direction: Direction,
    fields: HashMap<Coordinate, u32>,
    length: u32,
}

impl Snake {
    /// A straight snake ending at `head`, trailing behind it opposite to `direction`.
    pub fn new(head: Coordinate, length: u32, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();

        let fields = (0..length)
            .map(|i| {
                let back = i as i32;
                (Coordinate::new(head.x - dx * back, head.y - dy * back), length - i)
            })
            .collect();

        Snake { head, direction, fields, length }
    }

    pub fn head(&self) -> Coordinate {
        self.head
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn fields(&self) -> &HashMap<Coordinate, u32> {
        &self.fields
    }

    pub fn is_occupied(&self, coord: Coordinate) -> bool {
        self.fields.contains_key(&coord)
    }

    /// Lengthens the snake; the effect shows as the following heads living longer.
    pub fn grow(&mut self) {
        self.length += 1;
    }

    /// Advances the snake one cell. `turn` is only honoured when it is
    /// perpendicular to the current heading. On `Crashed` nothing is changed.
    pub fn move_step(&mut self, turn: Option<Direction>, width: i32, height: i32) -> MoveResult {
        let direction = match turn {
            Some(dir) if dir.is_perpendicular_to(self.direction) => dir,
            _ => self.direction,
        };

        let new_head = self.head.step(direction);

        if !new_head.within(width, height) || self.is_occupied(new_head) {
            return Crashed;
        }

        self.direction = direction;
        self.head = new_head;

        self.fields.retain(|_, ttl| {
            *ttl -= 1;
            *ttl > 0
        });
        self.fields.insert(new_head, self.length);

        Moved { new_head }
    }
}

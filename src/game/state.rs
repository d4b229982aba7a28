use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// Wrap a coordinate onto [0, size). Deltas are unit-length, so adding
/// `size` once is enough to keep the dividend non-negative.
fn wrap(v: i32, size: i32) -> i32 {
    (v + size) % size
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighboring cell in `direction` on a toroidal grid: stepping off
    /// one edge re-enters from the opposite edge.
    pub fn step(&self, direction: Direction, grid_size: usize) -> Self {
        let (dx, dy) = direction.delta();
        let size = grid_size as i32;
        Self {
            x: wrap(self.x + dx, size),
            y: wrap(self.y + dy, size),
        }
    }
}

/// The snake's body, head at index 0. Never empty while a game is live.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    pub body: Vec<Position>,
}

impl Snake {
    /// A newborn snake is a single head cell
    pub fn new(head: Position) -> Self {
        Self { body: vec![head] }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// True if `pos` lies on any current segment, tail included. The tail
    /// counts even when it is about to move away this tick.
    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Prepend `new_head`, keeping every existing cell (food was eaten)
    pub fn grow(&mut self, new_head: Position) {
        self.body.insert(0, new_head);
    }

    /// Prepend `new_head` and drop the tail cell (plain movement)
    pub fn advance(&mut self, new_head: Position) {
        self.body.insert(0, new_head);
        self.body.pop();
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Complete game state, exclusively owned by the engine. Readers get
/// snapshots; only `GameEngine::tick` and `restart` replace its contents.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub direction: Direction,
    pub grid_size: usize,
    pub score: u32,
    pub game_over: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_stays_in_bounds() {
        let size = 20;
        let corners = [
            Position::new(0, 0),
            Position::new(19, 0),
            Position::new(0, 19),
            Position::new(19, 19),
        ];
        let directions = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ];

        for pos in corners {
            for dir in directions {
                let next = pos.step(dir, size);
                assert!(next.x >= 0 && next.x < 20, "{next:?} out of bounds");
                assert!(next.y >= 0 && next.y < 20, "{next:?} out of bounds");
            }
        }
    }

    #[test]
    fn test_step_wraps_at_edges() {
        let size = 20;
        assert_eq!(
            Position::new(19, 10).step(Direction::Right, size),
            Position::new(0, 10)
        );
        assert_eq!(
            Position::new(0, 10).step(Direction::Left, size),
            Position::new(19, 10)
        );
        assert_eq!(
            Position::new(10, 0).step(Direction::Up, size),
            Position::new(10, 19)
        );
        assert_eq!(
            Position::new(10, 19).step(Direction::Down, size),
            Position::new(10, 0)
        );
    }

    #[test]
    fn test_step_in_the_open() {
        let size = 20;
        assert_eq!(
            Position::new(5, 5).step(Direction::Right, size),
            Position::new(6, 5)
        );
        assert_eq!(
            Position::new(5, 5).step(Direction::Up, size),
            Position::new(5, 4)
        );
    }

    #[test]
    fn test_snake_advance_keeps_length() {
        let mut snake = Snake::new(Position::new(5, 5));
        snake.advance(Position::new(6, 5));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::new(6, 5));

        snake.grow(Position::new(7, 5));
        snake.advance(Position::new(8, 5));
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.body, vec![Position::new(8, 5), Position::new(7, 5)]);
    }

    #[test]
    fn test_snake_grow_extends() {
        let mut snake = Snake::new(Position::new(5, 5));
        snake.grow(Position::new(6, 5));
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Position::new(6, 5));
        assert_eq!(snake.body, vec![Position::new(6, 5), Position::new(5, 5)]);
    }

    #[test]
    fn test_contains_covers_head_and_tail() {
        let snake = Snake {
            body: vec![
                Position::new(5, 5),
                Position::new(4, 5),
                Position::new(3, 5),
            ],
        };
        assert!(snake.contains(Position::new(5, 5)));
        assert!(snake.contains(Position::new(4, 5)));
        assert!(snake.contains(Position::new(3, 5)));
        assert!(!snake.contains(Position::new(2, 5)));
    }
}

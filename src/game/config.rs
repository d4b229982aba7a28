use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::state::Position;

/// Fixed parameters of a game session. The core never reads these from the
/// environment; it is handed an immutable config at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square grid
    pub grid_size: usize,
    /// Milliseconds between movement ticks
    pub tick_ms: u64,
    /// Cell the snake starts on
    pub initial_head: Position,
    /// Cell the first food appears on
    pub initial_food: Position,
    /// Direction the snake starts moving in
    pub initial_direction: Direction,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            tick_ms: 200,
            initial_head: Position::new(10, 10),
            initial_food: Position::new(15, 15),
            initial_direction: Direction::Right,
        }
    }
}

impl GameConfig {
    /// Config for a custom grid size: head at the center, food in the
    /// lower-right quadrant. Size 20 reproduces the defaults exactly.
    pub fn new(grid_size: usize) -> Self {
        let half = (grid_size / 2) as i32;
        let three_quarters = (grid_size * 3 / 4) as i32;
        Self {
            grid_size,
            initial_head: Position::new(half, half),
            initial_food: Position::new(three_quarters, three_quarters),
            ..Default::default()
        }
    }

    /// Small grid for tests
    pub fn small() -> Self {
        Self::new(10)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.tick_ms, 200);
        assert_eq!(config.initial_head, Position::new(10, 10));
        assert_eq!(config.initial_food, Position::new(15, 15));
        assert_eq!(config.initial_direction, Direction::Right);
    }

    #[test]
    fn test_custom_size_recenters() {
        let config = GameConfig::small();
        assert_eq!(config.grid_size, 10);
        assert_eq!(config.initial_head, Position::new(5, 5));
        assert_eq!(config.initial_food, Position::new(7, 7));
    }

    #[test]
    fn test_size_twenty_matches_default() {
        let config = GameConfig::new(20);
        assert_eq!(config.initial_head, GameConfig::default().initial_head);
        assert_eq!(config.initial_food, GameConfig::default().initial_food);
    }

    #[test]
    fn test_tick_interval() {
        let config = GameConfig::default();
        assert_eq!(config.tick_interval(), Duration::from_millis(200));
    }
}

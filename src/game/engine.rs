use rand::Rng;

use super::{
    config::GameConfig,
    direction::Direction,
    state::{GameState, Position, Snake},
};

/// What a single tick did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Snake moved one cell
    Moved,
    /// Snake moved onto food and grew
    Ate,
    /// Snake ran into itself; the game is over
    Died,
    /// Tick arrived after game over and was ignored
    Ignored,
}

/// Owns the single game state and advances it one tick at a time.
///
/// Callers interact through `tick`, `set_direction`, and `restart`, and
/// observe the game through the read-only `state` snapshot.
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        let state = Self::initial_state(&config);
        Self {
            config,
            state,
            rng: rand::thread_rng(),
        }
    }

    /// Read-only snapshot of the current state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Advance the game by one movement step.
    ///
    /// In the terminal state this is a guarded no-op. Otherwise the head
    /// advances one wrapped cell; running into the body ends the game with
    /// the pre-collision state left on display, and landing on food grows
    /// the snake and respawns food off the grown body.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.game_over {
            return TickOutcome::Ignored;
        }

        let new_head = self
            .state
            .snake
            .head()
            .step(self.state.direction, self.config.grid_size);

        // Collision runs against the pre-shift body, tail included: moving
        // the head into the cell the tail is about to vacate still loses.
        if self.state.snake.contains(new_head) {
            self.state.game_over = true;
            return TickOutcome::Died;
        }

        if new_head == self.state.food {
            self.state.snake.grow(new_head);
            self.state.score += 1;
            self.state.food = place_food(&mut self.rng, &self.state.snake, self.config.grid_size);
            TickOutcome::Ate
        } else {
            self.state.snake.advance(new_head);
            TickOutcome::Moved
        }
    }

    /// Apply a direction change, unless it is the exact opposite of the
    /// current direction. Re-submitting the current direction and 90-degree
    /// turns are always accepted.
    pub fn set_direction(&mut self, candidate: Direction) {
        if !self.state.direction.is_opposite(candidate) {
            self.state.direction = candidate;
        }
    }

    /// Throw the current game away and start over from the initial state.
    /// Valid from any state, including mid-game.
    pub fn restart(&mut self) {
        self.state = Self::initial_state(&self.config);
    }

    fn initial_state(config: &GameConfig) -> GameState {
        GameState {
            snake: Snake::new(config.initial_head),
            food: config.initial_food,
            direction: config.initial_direction,
            grid_size: config.grid_size,
            score: 0,
            game_over: false,
        }
    }
}

#[cfg(test)]
impl GameEngine {
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}

/// Pick a uniformly random cell the snake does not occupy.
///
/// Rejection-samples without bound: the snake must leave at least one free
/// cell on the grid. A fully covered board is an accepted, unhandled
/// limitation.
fn place_food(rng: &mut impl Rng, snake: &Snake, grid_size: usize) -> Position {
    loop {
        let x = rng.gen_range(0..grid_size) as i32;
        let y = rng.gen_range(0..grid_size) as i32;
        let pos = Position::new(x, y);

        if !snake.contains(pos) {
            return pos;
        }
    }
}

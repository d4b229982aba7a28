use std::time::{Duration, Instant};

/// In-memory statistics for one play session. Nothing here is persisted;
/// it all dies with the process.
pub struct SessionStats {
    started: Instant,
    elapsed: Duration,
    pub games_played: u32,
    pub best_score: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            elapsed: Duration::ZERO,
            games_played: 0,
            best_score: 0,
        }
    }

    /// Recompute elapsed time; called once per rendered frame
    pub fn refresh(&mut self) {
        self.elapsed = self.started.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.started = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        if final_score > self.best_score {
            self.best_score = final_score;
        }
    }

    /// Elapsed time as mm:ss for the header line
    pub fn clock(&self) -> String {
        let total_secs = self.elapsed.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

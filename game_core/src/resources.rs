use std::time::{Duration, Instant};

/// Frame timing - seconds since the clock started
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameTime {
    pub last_frame_time: f32, // Timestamp of the previous frame
    pub delta_time: f32,      // Seconds elapsed between the last two frames
}

impl FrameTime {
    pub fn new(now: f32) -> Self {
        Self {
            last_frame_time: now,
            delta_time: 0.0,
        }
    }

    /// Start a new frame at `now`
    pub fn tick(&mut self, now: f32) {
        self.delta_time = now - self.last_frame_time;
        self.last_frame_time = now;
    }

    /// Move the baseline forward so a deliberate pause is not counted as frame time
    pub fn skip(&mut self, pause: Duration) {
        self.last_frame_time += pause.as_secs_f32();
    }
}

/// Source of wall-clock time for the game loop
pub trait Clock {
    /// Seconds since the clock started
    fn now(&self) -> f32;
    /// Block the loop for `duration`
    fn pause(&mut self, duration: Duration);
}

/// Real clock backed by `Instant` and `thread::sleep`
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub left: u32,  // Player 1
    pub right: u32, // Player 2
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }
}

/// Per-round flags driving the score / reset sequence.
///
/// `p1_scored` means player 1 won the point (ball got past the right
/// paddle); `p2_scored` the mirror case.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundState {
    pub p1_scored: bool,
    pub p2_scored: bool,
    pub should_reset_ball: bool,
    pub ball_out_of_bounds: bool,
}

impl RoundState {
    pub fn new() -> Self {
        Self::default()
    }

    /// No point decided yet, paddles are live
    pub fn in_play(&self) -> bool {
        !self.p1_scored && !self.p2_scored
    }

    pub fn clear(&mut self) {
        self.p1_scored = false;
        self.p2_scored = false;
        self.should_reset_ball = false;
        self.ball_out_of_bounds = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_time_tick() {
        let mut time = FrameTime::new(1.0);
        time.tick(1.25);
        assert_eq!(time.delta_time, 0.25);
        assert_eq!(time.last_frame_time, 1.25);
    }

    #[test]
    fn test_frame_time_skip_hides_pause() {
        let mut time = FrameTime::new(0.0);
        time.tick(2.0);
        time.skip(Duration::from_secs(1));
        time.tick(3.5);
        assert_eq!(time.delta_time, 0.5, "Pause should not count as frame time");
    }

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment_left();
        score.increment_left();
        score.increment_right();
        assert_eq!(score.left, 2);
        assert_eq!(score.right, 1);
    }

    #[test]
    fn test_round_state_clear() {
        let mut round = RoundState::new();
        round.p1_scored = true;
        round.should_reset_ball = true;
        round.ball_out_of_bounds = true;
        assert!(!round.in_play());

        round.clear();

        assert!(round.in_play());
        assert!(!round.should_reset_ball);
        assert!(!round.ball_out_of_bounds);
    }
}

/// Simulation clock. Game time advances one tick per step, never by
/// wall-clock elapsed time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Time {
    pub tick: u64, // Ticks completed so far
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub user: u32, // Left paddle
    pub ai: u32,   // Right paddle
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_user(&mut self) {
        self.user = self.user.saturating_add(1);
    }

    pub fn increment_ai(&mut self) {
        self.ai = self.ai.saturating_add(1);
    }
}

/// Sound cue requested by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    WallHit,
    Win,  // user scored
    Lose, // AI scored
    PaddleHit,
}

impl Cue {
    pub const ALL: [Cue; 4] = [Cue::WallHit, Cue::Win, Cue::Lose, Cue::PaddleHit];
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub user_scored: bool,
    pub ai_scored: bool,
    pub ball_hit_paddle: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.user_scored = false;
        self.ai_scored = false;
        self.ball_hit_paddle = false;
    }

    /// Cues to play for this tick, at most one of each
    pub fn cues(&self) -> impl Iterator<Item = Cue> + '_ {
        Cue::ALL.into_iter().filter(move |cue| match cue {
            Cue::WallHit => self.ball_hit_wall,
            Cue::Win => self.user_scored,
            Cue::Lose => self.ai_scored,
            Cue::PaddleHit => self.ball_hit_paddle,
        })
    }
}

/// Latched directional input for the user paddle. Key and touch handlers
/// flip these flags; the simulation reads them once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputLatch {
    pub move_up: bool,
    pub move_down: bool,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_move_up(&mut self, held: bool) {
        self.move_up = held;
    }

    pub fn set_move_down(&mut self, held: bool) {
        self.move_down = held;
    }

    pub fn begin_move_up(&mut self) {
        self.move_up = true;
    }

    pub fn begin_move_down(&mut self) {
        self.move_down = true;
    }

    pub fn clear_move(&mut self) {
        self.move_up = false;
        self.move_down = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment_user();
        score.increment_user();
        score.increment_ai();
        assert_eq!(score.user, 2);
        assert_eq!(score.ai, 1);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events {
            ball_hit_wall: true,
            user_scored: true,
            ai_scored: true,
            ball_hit_paddle: true,
        };
        assert_eq!(events.cues().count(), 4);

        events.clear();

        assert_eq!(events, Events::new());
        assert_eq!(events.cues().count(), 0);
    }

    #[test]
    fn test_events_cues_in_order() {
        let events = Events {
            ball_hit_wall: true,
            user_scored: false,
            ai_scored: true,
            ball_hit_paddle: true,
        };
        let cues: Vec<Cue> = events.cues().collect();
        assert_eq!(cues, vec![Cue::WallHit, Cue::Lose, Cue::PaddleHit]);
    }

    #[test]
    fn test_input_latch_flags_are_independent() {
        let mut input = InputLatch::new();

        input.set_move_down(true);
        input.begin_move_up();
        assert!(input.move_up && input.move_down, "Both can be held at once");

        input.set_move_up(false);
        assert!(!input.move_up);
        assert!(input.move_down, "Releasing up leaves down held");

        input.clear_move();
        assert_eq!(input, InputLatch::new());
    }
}

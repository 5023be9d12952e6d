//! Fixed-rate loop driver
//!
//! The driver runs one simulation step per timer callback, then hands the
//! tick's cues to the audio sink and a fresh snapshot to the render sink.
//! It never looks at elapsed wall-clock time to decide how far to advance:
//! a host that fires late simply gets a slower game.

use crate::{Config, Cue, Events, Game, RenderSnapshot, SimError, SinkError};

/// Ticks between heartbeat log lines (10s at 60 Hz)
const HEARTBEAT_TICKS: u64 = 600;

/// Clock gap, in periods, after which a late tick is logged
const LATE_TICK_PERIODS: f64 = 3.0;

// Abstract environment (Time, Logging)
pub trait Environment {
    fn now(&self) -> f64; // ms
    fn log(&self, msg: String);
}

/// Draws a frame
pub trait RenderSink {
    fn render(&mut self, snapshot: &RenderSnapshot) -> Result<(), SinkError>;
}

/// Plays a sound cue without waiting for it to finish
pub trait AudioSink {
    fn play(&mut self, cue: Cue) -> Result<(), SinkError>;
}

/// Tick cadence. Only built from a config that passed `Config::validate`,
/// so the rate is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSchedule {
    rate_hz: u32,
}

impl TickSchedule {
    fn from_config(config: &Config) -> Self {
        Self {
            rate_hz: config.tick_rate_hz,
        }
    }

    pub fn rate_hz(&self) -> u32 {
        self.rate_hz
    }

    /// Milliseconds between ticks
    pub fn period_ms(&self) -> f64 {
        1000.0 / self.rate_hz as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Ran,
    Halted,
}

pub struct LoopDriver {
    game: Game,
    renderer: Box<dyn RenderSink>,
    audio: Box<dyn AudioSink>,
    env: Box<dyn Environment>,
    schedule: TickSchedule,
    last_tick_time: Option<f64>,
    fault: Option<SimError>,
}

impl LoopDriver {
    pub fn new(
        game: Game,
        renderer: Box<dyn RenderSink>,
        audio: Box<dyn AudioSink>,
        env: Box<dyn Environment>,
    ) -> Self {
        let schedule = TickSchedule::from_config(game.config());
        env.log(format!(
            "Loop: ready, {}x{} field at {} Hz",
            game.map().width,
            game.map().height,
            schedule.rate_hz
        ));
        Self {
            game,
            renderer,
            audio,
            env,
            schedule,
            last_tick_time: None,
            fault: None,
        }
    }

    pub fn schedule(&self) -> TickSchedule {
        self.schedule
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    /// The invariant violation that stopped the loop, if any
    pub fn fault(&self) -> Option<&SimError> {
        self.fault.as_ref()
    }

    pub fn is_halted(&self) -> bool {
        self.fault.is_some()
    }

    /// Run one simulation step, play its cues, then draw
    pub fn tick(&mut self) -> TickOutcome {
        if self.fault.is_some() {
            return TickOutcome::Halted;
        }

        self.note_clock();

        let events: Events = match self.game.tick().cloned() {
            Ok(events) => events,
            Err(err) => {
                self.env.log(format!("Loop: fatal, halting: {err}"));
                self.fault = Some(err);
                self.render_only();
                return TickOutcome::Halted;
            }
        };

        for cue in events.cues() {
            if let Err(err) = self.audio.play(cue) {
                self.env.log(format!("Loop: {cue:?} cue dropped: {err}"));
            }
        }

        self.render_only();

        let tick = self.game.time().tick;
        if tick % HEARTBEAT_TICKS == 0 {
            let score = self.game.score();
            self.env.log(format!(
                "Loop: tick={tick}, score user={} ai={}",
                score.user, score.ai
            ));
        }

        TickOutcome::Ran
    }

    /// Run `count` ticks back to back, stopping early if the loop halts
    pub fn run_ticks(&mut self, count: u64) -> TickOutcome {
        for _ in 0..count {
            if self.tick() == TickOutcome::Halted {
                return TickOutcome::Halted;
            }
        }
        TickOutcome::Ran
    }

    /// Draw the current state without advancing the game
    pub fn render_only(&mut self) {
        let snapshot = self.game.snapshot();
        if let Err(err) = self.renderer.render(&snapshot) {
            self.env.log(format!("Loop: frame dropped: {err}"));
        }
    }

    fn note_clock(&mut self) {
        let now = self.env.now();
        if let Some(last) = self.last_tick_time {
            let gap = now - last;
            if gap > self.schedule.period_ms() * LATE_TICK_PERIODS {
                self.env.log(format!(
                    "Loop: host clock stalled {gap:.1}ms before tick {}",
                    self.game.time().tick + 1
                ));
            }
        }
        self.last_tick_time = Some(now);
    }
}

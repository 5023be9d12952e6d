use glam::Vec2;
use std::fmt;

/// Rejected configuration values
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonFinite { name: &'static str, value: f32 },
    NonPositive { name: &'static str, value: f32 },
    Negative { name: &'static str, value: f32 },
    PaddleTallerThanField { paddle_height: f32, field_height: f32 },
    PaddlesOverlap { field_width: f32, required: f32 },
    ZeroTickRate,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { name, value } => write!(f, "{name} must be finite, got {value}"),
            Self::NonPositive { name, value } => {
                write!(f, "{name} must be greater than zero, got {value}")
            }
            Self::Negative { name, value } => write!(f, "{name} must not be negative, got {value}"),
            Self::PaddleTallerThanField {
                paddle_height,
                field_height,
            } => write!(
                f,
                "paddle height {paddle_height} does not fit in field height {field_height}"
            ),
            Self::PaddlesOverlap {
                field_width,
                required,
            } => write!(
                f,
                "field width {field_width} too narrow for both paddles (need more than {required})"
            ),
            Self::ZeroTickRate => write!(f, "tick rate must be at least 1 Hz"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Internal invariant violations detected by the simulation step
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    NonFiniteBall {
        tick: u64,
        pos: Vec2,
        vel: Vec2,
        speed: f32,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteBall {
                tick,
                pos,
                vel,
                speed,
            } => write!(
                f,
                "ball state became non-finite at tick {tick}: pos={pos}, vel={vel}, speed={speed}"
            ),
        }
    }
}

impl std::error::Error for SimError {}

/// Failure reported by a render or audio adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkError {
    pub sink: &'static str,
    pub message: String,
}

impl SinkError {
    pub fn new(sink: &'static str, message: impl Into<String>) -> Self {
        Self {
            sink,
            message: message.into(),
        }
    }
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} sink failed: {}", self.sink, self.message)
    }
}

impl std::error::Error for SinkError {}

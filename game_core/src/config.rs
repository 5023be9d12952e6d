use crate::{ConfigError, Params, Side};
use glam::Vec2;

/// CSS colors and font used by the render adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub net: &'static str,
    pub user_paddle: &'static str,
    pub ai_paddle: &'static str,
    pub ball: &'static str,
    pub score: &'static str,
    pub score_font: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "#2aac2a",
            net: "#fff",
            user_paddle: "#fff",
            ai_paddle: "#000",
            ball: "#f6ee0e",
            score: "#fff",
            score_font: "60px Verdana sans-serif",
        }
    }
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub net_width: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_step: f32,
    pub ball_radius: f32,
    pub ball_speed_base: f32,
    pub ball_speed_increment: f32,
    pub ball_velocity_initial: Vec2,
    pub deflection_angle: f32,
    pub ai_tracking_gain: f32,
    /// Keep the AI paddle inside the field. Off by default: the AI paddle
    /// is free to overshoot the walls while chasing the ball.
    pub clamp_ai_paddle: bool,
    pub tick_rate_hz: u32,
    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            net_width: Params::NET_WIDTH,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_step: Params::PADDLE_STEP,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_base: Params::BALL_SPEED_BASE,
            ball_speed_increment: Params::BALL_SPEED_INCREMENT,
            ball_velocity_initial: Vec2::new(Params::BALL_VELOCITY_X, Params::BALL_VELOCITY_Y),
            deflection_angle: Params::DEFLECTION_ANGLE,
            ai_tracking_gain: Params::AI_TRACKING_GAIN,
            clamp_ai_paddle: false,
            tick_rate_hz: Params::TICK_RATE_HZ,
            palette: Palette::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the left edge X of a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.field_width - (self.paddle_width + self.paddle_margin),
        }
    }

    /// Top-left corner of a paddle at startup (vertically centered)
    pub fn paddle_spawn(&self, side: Side) -> Vec2 {
        Vec2::new(
            self.paddle_x(side),
            self.field_height / 2.0 - self.paddle_height / 2.0,
        )
    }

    pub fn paddle_size(&self) -> Vec2 {
        Vec2::new(self.paddle_width, self.paddle_height)
    }

    pub fn field_center(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("net_width", self.net_width),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_step", self.paddle_step),
            ("ball_radius", self.ball_radius),
            ("ai_tracking_gain", self.ai_tracking_gain),
        ];
        let non_negative = [
            ("paddle_margin", self.paddle_margin),
            ("ball_speed_base", self.ball_speed_base),
            ("ball_speed_increment", self.ball_speed_increment),
        ];
        let finite_only = [
            ("ball_velocity_initial.x", self.ball_velocity_initial.x),
            ("ball_velocity_initial.y", self.ball_velocity_initial.y),
            ("deflection_angle", self.deflection_angle),
        ];

        for (name, value) in positive.iter().chain(&non_negative).chain(&finite_only) {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite {
                    name: *name,
                    value: *value,
                });
            }
        }
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        for (name, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
        }

        if self.paddle_height > self.field_height {
            return Err(ConfigError::PaddleTallerThanField {
                paddle_height: self.paddle_height,
                field_height: self.field_height,
            });
        }

        let required = 2.0 * (self.paddle_margin + self.paddle_width);
        if self.field_width <= required {
            return Err(ConfigError::PaddlesOverlap {
                field_width: self.field_width,
                required,
            });
        }

        if self.tick_rate_hz == 0 {
            return Err(ConfigError::ZeroTickRate);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), 10.0, "User paddle X position");
        assert_eq!(config.paddle_x(Side::Right), 605.0, "AI paddle X position");
    }

    #[test]
    fn test_config_paddle_spawn_is_vertically_centered() {
        let config = Config::new();
        let spawn = config.paddle_spawn(Side::Left);
        assert_eq!(spawn.y, 137.5);
        assert_eq!(spawn.y + config.paddle_height / 2.0, config.field_height / 2.0);
    }

    #[test]
    fn test_config_field_center() {
        let config = Config::new();
        assert_eq!(config.field_center(), Vec2::new(312.5, 187.5));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_tall_paddle() {
        let config = Config {
            paddle_height: 400.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleTallerThanField { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite_and_non_positive() {
        let config = Config {
            ball_radius: f32::NAN,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite {
                name: "ball_radius",
                ..
            })
        ));

        let config = Config {
            field_width: 0.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                name: "field_width",
                ..
            })
        ));

        let config = Config {
            ball_speed_increment: -0.2,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_narrow_field_and_zero_rate() {
        let config = Config {
            field_width: 30.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddlesOverlap { .. })
        ));

        let config = Config {
            tick_rate_hz: 0,
            ..Config::new()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTickRate));
    }
}

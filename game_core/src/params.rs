/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 625.0;
    pub const FIELD_HEIGHT: f32 = 375.0;
    pub const NET_WIDTH: f32 = 4.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 10.0; // gap between paddle and its goal line
    pub const PADDLE_STEP: f32 = 8.0; // units per tick

    // Ball
    pub const BALL_RADIUS: f32 = 7.0;
    pub const BALL_SPEED_BASE: f32 = 9.0;
    pub const BALL_SPEED_INCREMENT: f32 = 0.2; // added on every paddle hit
    pub const BALL_VELOCITY_X: f32 = 5.0;
    pub const BALL_VELOCITY_Y: f32 = 5.0;
    pub const DEFLECTION_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    // AI
    pub const AI_TRACKING_GAIN: f32 = 0.2;

    // Loop
    pub const TICK_RATE_HZ: u32 = 60;
}

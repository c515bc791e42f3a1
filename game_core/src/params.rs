/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Projection plane (orthographic view volume)
    pub const PROJ_UP: f32 = 2.0;
    pub const PROJ_DOWN: f32 = -2.0;
    pub const PROJ_RIGHT: f32 = 2.0;
    pub const PROJ_LEFT: f32 = -2.0;
    pub const PROJ_NEAR: f32 = -1.0;
    pub const PROJ_FAR: f32 = 1.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 0.1;
    pub const PADDLE_HEIGHT: f32 = 0.5;
    pub const PADDLE_SPEED: f32 = 2.5;
    pub const PLAYER_1_POS_INITIAL: [f32; 2] = [-1.5, 0.5];
    pub const PLAYER_2_POS_INITIAL: [f32; 2] = [1.5, 0.5];

    // Ball
    pub const BALL_WIDTH: f32 = 0.1;
    pub const BALL_HEIGHT: f32 = 0.1;
    pub const BALL_SPEED_INITIAL: f32 = 1.5;
    pub const BALL_SPEED_REFLECT: f32 = 2.5; // magnitude right after a paddle hit
    pub const BALL_POS_INITIAL: [f32; 2] = [0.0, 0.5];
    pub const BALL_MAX_DEFLECTION_DEG: f32 = 75.0;

    // Score
    pub const BALL_PASS_THROUGH_LIMIT: f32 = 0.6; // fraction of paddle width past its center
    pub const RESPAWN_PAUSE_SECS: u64 = 1;

    // Divider lines
    pub const LINES_WIDTH: f32 = 0.05;
    pub const LINES_HEIGHT: f32 = 0.2;
    pub const LINES_GAP: f32 = 0.2;
    pub const NUM_LINES: usize = 20;

    // Window
    pub const WINDOW_WIDTH: u32 = 1000;
    pub const WINDOW_HEIGHT: u32 = 800;
    pub const WINDOW_TITLE: &'static str = "Simple Pong";
}

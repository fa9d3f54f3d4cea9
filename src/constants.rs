// World geometry (logical pixels, origin top-left, y grows downward)
pub const SCREEN_WIDTH: f64 = 600.0;
pub const SCREEN_HEIGHT: f64 = 768.0;
pub const DEFAULT_SCALE_FACTOR: f64 = 1.5;

/// Horizontal scroll speed shared by pipes and ground tiles (px/s).
pub const DEFAULT_SCROLL_SPEED: f64 = 250.0;
/// Fastest accepted configured scroll speed in px/s.
pub const MAX_SCROLL_SPEED: f64 = 2000.0;

/// Top of the ground strip. Touching it ends the run.
pub const GROUND_Y: f64 = 568.0;
/// Unscaled width of one ground tile.
pub const GROUND_TILE_WIDTH: f64 = 336.0;

// Bird physics
pub const BIRD_START_X: f64 = 100.0;
pub const BIRD_START_Y: f64 = 300.0;
pub const BIRD_SPRITE_WIDTH: f64 = 34.0;
pub const BIRD_SPRITE_HEIGHT: f64 = 24.0;
pub const GRAVITY: f64 = 1500.0; // px/s²
pub const FLAP_IMPULSE: f64 = -450.0; // px/s, negative = upward
pub const MAX_FALL_SPEED: f64 = 600.0; // px/s
pub const MAX_NOSE_UP_DEGREES: f64 = 25.0;
pub const MAX_NOSE_DOWN_DEGREES: f64 = -90.0;

// Pipes
pub const PIPE_SPRITE_WIDTH: f64 = 52.0;
pub const PIPE_SPRITE_HEIGHT: f64 = 320.0;
pub const PIPE_GAP: f64 = 130.0;
pub const LOWER_PIPE_MIN_TOP: i32 = 250;
pub const LOWER_PIPE_MAX_TOP: i32 = 520;
/// Scroll distance between consecutive pipe spawns (≈ 71 frames at 60 fps).
pub const PIPE_SPAWN_SPACING: f64 = 296.0;

// Scoring
pub const NIGHT_TOGGLE_EVERY: u32 = 10;

// Restart control (x, y, width, height) shown on the game-over overlay
pub const RESTART_BUTTON: (f64, f64, f64, f64) = (200.0, 420.0, 200.0, 60.0);

// Frame pacing
pub const DEFAULT_TARGET_FPS: u32 = 60;
/// Longest frame fed to the simulation; longer stalls are truncated.
pub const MAX_FRAME_DT: f64 = 0.1;

// Save files (inside ~/.flappy/)
pub const HIGH_SCORE_FILE: &str = "highscore.json";
pub const CONFIG_FILE: &str = "config.json";
pub const LOG_FILE: &str = "flappy.log";

// Board geometry. The board is 900x900 px of 25 px cells, stored in cell units.
pub const SCREEN_WIDTH_PX: i16 = 900;
pub const SCREEN_HEIGHT_PX: i16 = 900;
pub const UNIT_SIZE_PX: i16 = 25;
pub const BOARD_WIDTH: i16 = SCREEN_WIDTH_PX / UNIT_SIZE_PX;
pub const BOARD_HEIGHT: i16 = SCREEN_HEIGHT_PX / UNIT_SIZE_PX;

// Game timing constants
pub const TICK_INTERVAL_MS: u64 = 75;
/// Upper bound on elapsed time credited to the tick driver in one call.
pub const MAX_FRAME_DELTA_MS: u64 = 500;
/// Input poll timeout once the game is over and no tick is pending.
pub const IDLE_POLL_MS: u64 = 250;

// Snake constants
pub const INITIAL_BODY_PARTS: usize = 6;

// Logging
pub const LOG_FILE_NAME: &str = "snake.log";

pub mod game_common;
pub mod snake_scene;

use crate::game::Snapshot;
use ratatui::Frame;

/// Main UI drawing function. Draws one frame from a game snapshot.
pub fn draw_ui(frame: &mut Frame, snapshot: &Snapshot) {
    let size = frame.size();
    snake_scene::render_snake_scene(frame, size, snapshot);
}

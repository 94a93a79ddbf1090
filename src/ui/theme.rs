//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(245, 245, 240);
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 62, 66);

// Mark colors
pub const X_MARK: Color32 = Color32::from_rgb(220, 70, 70);
pub const O_MARK: Color32 = Color32::from_rgb(60, 110, 210);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(255, 180, 50);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 200, 90);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 40)
}

pub fn win_cell_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(50, 200, 90, 60)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(32, 34, 37);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_THINKING: Color32 = Color32::from_rgb(255, 180, 50);
pub const STATUS_MESSAGE: Color32 = Color32::from_rgb(255, 110, 90);

// Sizes
pub const BOARD_MARGIN: f32 = 12.0;
pub const MARK_SIZE_RATIO: f32 = 0.30;
pub const MARK_STROKE_WIDTH: f32 = 6.0;
pub const GRID_LINE_WIDTH: f32 = 3.0;
pub const MENU_BUTTON_SIZE: [f32; 2] = [200.0, 40.0];

pub fn mark_color(mark: crate::Mark) -> Color32 {
    match mark {
        crate::Mark::X => X_MARK,
        crate::Mark::O => O_MARK,
    }
}

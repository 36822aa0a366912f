//! Confetti overlay drawn on top of the current screen.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ConfettiCell;

/// Prints every cell that falls inside the pane.
pub fn render_confetti(cells: &[ConfettiCell], rows: usize, cols: usize) {
    for cell in cells.iter().filter(|c| c.row >= 1 && c.row <= rows && c.col >= 1 && c.col <= cols) {
        position_cursor(cell.row, cell.col);
        print!("{}{}{}{}", Theme::bold(), Theme::fg(&cell.color), cell.glyph, Theme::reset());
    }
}

//! Mood rating widget.
//!
//! ```text
//!        ¿Cómo te sientes ahora?
//!         ◀  😐  5 / 10  ▶
//!      ██████████░░░░░░░░░░░░░░░░░░░░
//!    Muy mal     Regular     Excelente
//! ```

use crate::domain::mood::MOOD_MAX;
use crate::ui::helpers::{bar, center_offset, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::MoodWidget;

/// Cells per rating step on the slider.
const CELLS_PER_STEP: usize = 3;

const LEGEND: &str = "Muy mal      Regular      Excelente";

/// Renders the widget starting at `row`. Returns the next free row.
pub fn render_mood(row: usize, widget: &MoodWidget, theme: &Theme, cols: usize) -> usize {
    let mut row = row;
    let dim = if widget.disabled { Theme::dim() } else { "" };

    if let Some(label) = &widget.label {
        position_cursor(row, 1 + center_offset(text_width(label), cols));
        print!("{dim}{}{label}{}", Theme::fg(&theme.colors.text_normal), Theme::reset());
        row += 1;
    }

    let value = format!("{} / {MOOD_MAX}", widget.value);
    let (left, right) = if widget.disabled { ("   ", "   ") } else { ("◀  ", "  ▶") };
    // emoji is two cells wide
    let width = text_width(left) + 2 + 2 + text_width(&value) + text_width(right);
    position_cursor(row, 1 + center_offset(width, cols));
    print!("{dim}{}{left}{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
    print!("{dim}{}  ", widget.emoji);
    print!("{dim}{}{}{value}{}", Theme::bold(), Theme::fg(&widget.color), Theme::reset());
    print!("{dim}{}{right}{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
    row += 1;

    let slider_width = usize::from(MOOD_MAX) * CELLS_PER_STEP;
    let slider = bar(usize::from(widget.value) * CELLS_PER_STEP, slider_width);
    position_cursor(row, 1 + center_offset(slider_width, cols));
    print!("{dim}{}{slider}{}", Theme::fg(&widget.color), Theme::reset());
    row += 1;

    position_cursor(row, 1 + center_offset(text_width(LEGEND), cols));
    print!("{}{LEGEND}{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
    row + 1
}

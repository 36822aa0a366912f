//! Header component renderer.

use crate::ui::helpers::{center_offset, position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the centered title bar, with the subtitle dimmed after it.
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Layout
///
/// ```text
/// [left padding] TITLE · subtitle [right padding]
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let subtitle = header
        .subtitle
        .as_ref()
        .map(|s| format!(" · {s}"))
        .unwrap_or_default();
    let title = truncate(&header.title, cols);
    let subtitle = truncate(&subtitle, cols.saturating_sub(text_width(&title)));
    let width = text_width(&title) + text_width(&subtitle);
    let padding = center_offset(width, cols);

    position_cursor(row, 1);
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", " ".repeat(padding));
    print!("{}{}{title}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    print!("{}", Theme::reset());
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}{subtitle}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(cols.saturating_sub(padding + width)));
    print!("{}", Theme::reset());
    row + 1
}

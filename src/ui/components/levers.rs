//! Lever cards on the home screen.
//!
//! Each card takes three rows:
//!
//! ```text
//!  ▌ 1  Fisiología · Cambia tu cuerpo
//!  ▌    Respiración, postura, movimiento
//!
//! ```
//!
//! The selected card is drawn on the selection background.

use crate::ui::helpers::{position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::LeverCard;

const CARD_MARGIN: usize = 2;

/// Renders all cards from `row`. Returns the next free row.
pub fn render_cards(row: usize, cards: &[LeverCard], theme: &Theme, cols: usize) -> usize {
    cards
        .iter()
        .fold(row, |row, card| render_card(row, card, theme, cols) + 1)
}

fn render_card(row: usize, card: &LeverCard, theme: &Theme, cols: usize) -> usize {
    let inner = cols.saturating_sub(CARD_MARGIN * 2 + 2);
    let title = truncate(&format!("{}  {} · {}", card.index, card.title, card.subtitle), inner);
    let description = truncate(&format!("   {}", card.description), inner);

    for (offset, (text, bold)) in [(title, true), (description, false)].into_iter().enumerate() {
        position_cursor(row + offset, 1 + CARD_MARGIN);
        print!("{}▌ {}", Theme::fg(&card.color), Theme::reset());
        if card.is_selected {
            print!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg));
        } else if bold {
            print!("{}", Theme::fg(&card.color));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        if bold {
            print!("{}", Theme::bold());
        }
        print!("{text}");
        print!("{}", " ".repeat(inner.saturating_sub(text_width(&text))));
        print!("{}", Theme::reset());
    }
    row + 2
}

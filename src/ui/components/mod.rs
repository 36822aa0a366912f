//! Composable UI component renderers.
//!
//! Every component prints at absolute positions and returns the next free
//! row, so screens are assembled by threading a row counter through them.
//!
//! # Components
//!
//! - [`header`]: Title bar with subtitle
//! - [`footer`]: Keybinding hints
//! - [`mood`]: Mood rating widget
//! - [`levers`]: Lever cards of the home screen
//! - [`exercise`]: Exercise step panel
//! - [`chart`]: Trend line chart
//! - [`history`]: Stats, chart and session list
//! - [`confetti`]: Celebration overlay
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Screen body]
//! [Border]
//! [Footer]
//! ```

pub mod chart;
mod confetti;
mod exercise;
mod footer;
mod header;
mod history;
mod levers;
mod mood;

use crate::ui::helpers::{center_offset, position_cursor, text_width, wrap};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{HomeScreen, PostCheckScreen, Screen, UIViewModel};

use confetti::render_confetti;
use exercise::render_exercise;
use footer::render_footer;
use header::render_header;
use history::render_history;
use levers::render_cards;
use mood::render_mood;

/// Renders a horizontal border line at `row`. Returns `row + 1`.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

fn render_centered(row: usize, text: &str, style: &str, cols: usize) -> usize {
    wrap(text, cols.saturating_sub(4)).iter().fold(row, |row, line| {
        position_cursor(row, 1 + center_offset(text_width(line), cols));
        print!("{style}{line}{}", Theme::reset());
        row + 1
    })
}

/// Renders a full frame: chrome, the current screen and the confetti overlay.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // row 1 stays blank

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);
    let last_body_row = border_row.saturating_sub(1);
    let body_row = current_row + 1;

    match &vm.screen {
        Screen::Home(home) => {
            render_home(body_row, home, theme, cols);
        }
        Screen::Exercise(screen) => {
            render_exercise(body_row, screen, theme, cols, last_body_row);
        }
        Screen::PostCheck(post) => {
            render_post_check(body_row, post, theme, cols);
        }
        Screen::History(history) => {
            render_history(body_row, history, theme, cols, last_body_row);
        }
    }

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);

    render_confetti(&vm.confetti, rows, cols);
}

fn render_home(row: usize, home: &HomeScreen, theme: &Theme, cols: usize) -> usize {
    let mut row = render_mood(row, &home.mood, theme, cols) + 1;
    row = render_centered(row, &home.prompt, &Theme::fg(&theme.colors.text_normal), cols) + 1;
    row = render_cards(row, &home.cards, theme, cols);
    let style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    render_centered(row, &home.tagline, &style, cols)
}

fn render_post_check(row: usize, post: &PostCheckScreen, theme: &Theme, cols: usize) -> usize {
    let exercise = format!("Completaste: {}", post.exercise_name);
    let mut row = render_centered(row, &exercise, &Theme::fg(&theme.colors.text_dim), cols) + 1;
    row = render_mood(row, &post.before, theme, cols) + 1;
    row = render_mood(row, &post.mood, theme, cols) + 1;

    let color = if post.improved { &theme.colors.positive } else { &theme.colors.text_normal };
    row = render_centered(row, &post.message, &format!("{}{}", Theme::bold(), Theme::fg(color)), cols) + 1;

    let primary = format!(
        "{}{}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.selection_fg),
        Theme::bg(&theme.colors.selection_bg)
    );
    row = render_centered(row, "[ Terminar y Guardar ]", &primary, cols);
    if post.can_try_another {
        row = render_centered(row, "[ Probar otra palanca ]", &Theme::fg(&theme.colors.accent), cols);
    }
    row
}

//! History screen: summary figures, trend chart and the session list.

use super::chart::render_trend;
use crate::ui::helpers::{position_cursor, signed_delta, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{HistoryRow, HistoryScreen};

const EMPTY_MESSAGE: &str = "No hay sesiones registradas.";
const CHART_HEIGHT: usize = 7;
/// Rows below the chart kept for at least a few list entries.
const MIN_LIST_ROWS: usize = 4;

/// Renders the history body between `row` and `last_row`.
pub fn render_history(row: usize, screen: &HistoryScreen, theme: &Theme, cols: usize, last_row: usize) -> usize {
    let mut row = render_stats(row, screen, theme, cols) + 1;

    if let Some(trend) = &screen.trend {
        let needed = 1 + CHART_HEIGHT + 1 + 1 + MIN_LIST_ROWS;
        if row + needed <= last_row {
            position_cursor(row, 3);
            print!("{}{}Tendencia{}", Theme::bold(), Theme::fg(&theme.colors.text_normal), Theme::reset());
            row = render_trend(row + 1, trend, theme, cols, CHART_HEIGHT) + 1;
        }
    }

    position_cursor(row, 3);
    print!("{}{}Sesiones{}", Theme::bold(), Theme::fg(&theme.colors.text_normal), Theme::reset());
    row += 1;

    if screen.rows.is_empty() {
        position_cursor(row, 3);
        print!("{}{EMPTY_MESSAGE}{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
        return row + 1;
    }

    let visible = (last_row + 1).saturating_sub(row);
    for entry in screen.rows.iter().skip(screen.offset).take(visible) {
        row = render_row(row, entry, theme, cols);
    }
    row
}

fn render_stats(row: usize, screen: &HistoryScreen, theme: &Theme, cols: usize) -> usize {
    let stats = [
        ("Sesiones", screen.rows.len().to_string()),
        ("Mejora promedio", screen.average.clone()),
        ("Palanca favorita", screen.favorite.clone()),
    ];
    let cell = (cols.saturating_sub(4) / stats.len()).max(8);

    for (i, (label, value)) in stats.iter().enumerate() {
        let col = 3 + i * cell;
        position_cursor(row, col);
        print!("{}{}{}", Theme::fg(&theme.colors.text_dim), truncate(label, cell - 1), Theme::reset());
        position_cursor(row + 1, col);
        print!(
            "{}{}{}{}",
            Theme::bold(),
            Theme::fg(&theme.colors.accent),
            truncate(value, cell - 1),
            Theme::reset()
        );
    }
    row + 2
}

fn render_row(row: usize, entry: &HistoryRow, theme: &Theme, cols: usize) -> usize {
    const LEVER_WIDTH: usize = 12;
    const DATE_WIDTH: usize = 11;

    let moods = format!("{} → {}", entry.before, entry.after);
    let delta = signed_delta(entry.delta);
    let fixed = 2 + LEVER_WIDTH + DATE_WIDTH + text_width(&moods) + 2 + text_width(&delta) + 6;
    let exercise_width = cols.saturating_sub(fixed).max(4);

    position_cursor(row, 3);
    print!(
        "{}▌ {:<width$}",
        Theme::fg(&entry.lever_color),
        truncate(&entry.lever, LEVER_WIDTH - 1),
        width = LEVER_WIDTH
    );
    print!("{}{:<width$}", Theme::fg(&theme.colors.text_dim), entry.date, width = DATE_WIDTH);
    print!(
        "{}{:<exercise_width$} ",
        Theme::fg(&theme.colors.text_normal),
        truncate(&entry.exercise, exercise_width)
    );
    print!("{moods}  ");
    print!("{}{}{delta}{}", Theme::bold(), Theme::fg(theme.delta_color(entry.delta)), Theme::reset());
    row + 1
}

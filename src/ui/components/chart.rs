//! Trend line chart on a fixed 0–10 scale.
//!
//! [`plot`] lays the chart out as plain text so it can be tested without a
//! terminal; [`render_trend`] colors and prints it.
//!
//! ```text
//! 10 ┤
//!    │        ●·····●
//!  5 ┤  ●·····
//!    │ ·
//!  0 ┤●
//!     01/05  03/05  07/05
//! ```

use crate::history::TrendPoint;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;

const AXIS_WIDTH: usize = 4;
const SCALE_MAX: f32 = 10.0;
const POINT: char = '●';
const LINE: char = '·';

/// Text rows of the chart: `height` plot rows followed by one label row.
///
/// Each plot row starts with a four-char axis (`10 ┤`, ` 5 ┤`, ` 0 ┤` or
/// `   │`). Points are spread evenly over `width` columns and joined by dots.
/// Date labels are written left to right and skipped where they would overlap.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn plot(points: &[TrendPoint], width: usize, height: usize) -> Vec<String> {
    let height = height.max(3);
    let width = width.saturating_sub(AXIS_WIDTH).max(2);
    let mut grid = vec![vec![' '; width]; height];

    let row_of = |mood: f32| -> usize {
        let r = ((SCALE_MAX - mood) / SCALE_MAX * (height - 1) as f32).round();
        (r.max(0.0) as usize).min(height - 1)
    };
    let col_of = |i: usize| -> usize {
        if points.len() < 2 {
            0
        } else {
            i * (width - 1) / (points.len() - 1)
        }
    };

    for (i, pair) in points.windows(2).enumerate() {
        let (x0, x1) = (col_of(i), col_of(i + 1));
        let (y0, y1) = (f32::from(pair[0].mood.value()), f32::from(pair[1].mood.value()));
        for x in x0..=x1 {
            let t = if x1 == x0 { 0.0 } else { (x - x0) as f32 / (x1 - x0) as f32 };
            grid[row_of(y0 + (y1 - y0) * t)][x] = LINE;
        }
    }
    for (i, point) in points.iter().enumerate() {
        grid[row_of(f32::from(point.mood.value()))][col_of(i)] = POINT;
    }

    let mut lines: Vec<String> = grid
        .into_iter()
        .enumerate()
        .map(|(r, cells)| {
            let axis = if r == 0 {
                "10 ┤"
            } else if r == height - 1 {
                " 0 ┤"
            } else if r == row_of(SCALE_MAX / 2.0) {
                " 5 ┤"
            } else {
                "   │"
            };
            format!("{axis}{}", cells.into_iter().collect::<String>())
        })
        .collect();

    let mut labels = vec![' '; width];
    let mut free_from = 0;
    for (i, point) in points.iter().enumerate() {
        let len = point.label.chars().count();
        let start = col_of(i).saturating_sub(len / 2).min(width.saturating_sub(len));
        if start < free_from || start + len > width {
            continue;
        }
        for (offset, c) in point.label.chars().enumerate() {
            labels[start + offset] = c;
        }
        free_from = start + len + 1;
    }
    lines.push(format!("{}{}", " ".repeat(AXIS_WIDTH), labels.into_iter().collect::<String>()));
    lines
}

/// Prints the chart at `row`. Returns the next free row.
pub fn render_trend(row: usize, points: &[TrendPoint], theme: &Theme, cols: usize, height: usize) -> usize {
    let lines = plot(points, cols.saturating_sub(4), height);
    let last = lines.len().saturating_sub(1);

    for (i, line) in lines.iter().enumerate() {
        position_cursor(row + i, 3);
        if i == last {
            print!("{}{line}{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
            continue;
        }
        let (axis, body) = line.split_at(line.char_indices().nth(AXIS_WIDTH).map_or(line.len(), |(b, _)| b));
        print!("{}{axis}", Theme::fg(&theme.colors.border));
        print!("{}{body}{}", Theme::fg(&theme.colors.chart_line), Theme::reset());
    }
    row + lines.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Mood;

    fn point(label: &str, mood: u8) -> TrendPoint {
        TrendPoint {
            label: label.to_string(),
            mood: Mood::new(mood).unwrap(),
        }
    }

    fn body(line: &str) -> String {
        line.chars().skip(AXIS_WIDTH).collect()
    }

    #[test]
    fn extremes_land_on_top_and_bottom_rows() {
        let lines = plot(&[point("01/05", 10), point("02/05", 1)], 24, 11);
        assert_eq!(lines.len(), 12);

        assert!(lines[0].starts_with("10 ┤"));
        assert_eq!(body(&lines[0]).chars().next(), Some(POINT));
        // mood 1 sits one step above the 0 baseline
        assert_eq!(body(&lines[9]).chars().last(), Some(POINT));
        assert!(lines[10].starts_with(" 0 ┤"));
    }

    #[test]
    fn points_are_joined() {
        let lines = plot(&[point("a", 5), point("b", 5)], 14, 11);
        let row = body(&lines[5]);
        assert!(lines[5].starts_with(" 5 ┤"));
        assert_eq!(row, format!("{POINT}{}{POINT}", LINE.to_string().repeat(8)));
    }

    #[test]
    fn overlapping_labels_are_skipped() {
        let points: Vec<_> = (1..=10).map(|d| point(&format!("{d:02}/05"), 5)).collect();
        let lines = plot(&points, 24, 5);
        let labels = lines.last().unwrap();

        assert!(labels.contains("01/05"));
        assert!(!labels.contains("02/05"));
        assert!(labels.trim_end().chars().count() <= 24);
    }
}

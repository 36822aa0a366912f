//! Exercise panel: draws the blocks an exercise step describes.

use crate::exercises::{Block, OptionItem};
use crate::ui::helpers::{bar, center_offset, position_cursor, proportion, text_width, truncate, wrap};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ExerciseScreen;

const MARGIN: usize = 4;
const PROGRESS_WIDTH: usize = 28;

/// Renders the panel from `row`, never drawing past `last_row`.
///
/// Returns the next free row.
pub fn render_exercise(row: usize, screen: &ExerciseScreen, theme: &Theme, cols: usize, last_row: usize) -> usize {
    let view = &screen.view;
    let width = cols.saturating_sub(MARGIN * 2).max(10);
    let mut out = Panel {
        row,
        last_row,
        width,
        cols,
        theme,
        accent: &screen.accent,
    };

    out.line(|| {
        print!("{}{}{}{}", Theme::bold(), Theme::fg(&screen.accent), view.title, Theme::reset());
    });
    if let Some((step, of)) = view.progress {
        out.line(|| {
            let filled = proportion(step, of, PROGRESS_WIDTH);
            print!("{}{}{}", Theme::fg(&screen.accent), bar(filled, PROGRESS_WIDTH), Theme::reset());
            print!("{}  Paso {step} de {of}{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
        });
    }
    out.row += 1;

    for block in &view.blocks {
        if out.row > out.last_row {
            break;
        }
        out.block(block);
    }
    out.row
}

struct Panel<'a> {
    row: usize,
    last_row: usize,
    width: usize,
    cols: usize,
    theme: &'a Theme,
    accent: &'a str,
}

impl Panel<'_> {
    /// Positions at the margin of the current row, draws, and moves down.
    fn line(&mut self, draw: impl FnOnce()) {
        if self.row > self.last_row {
            return;
        }
        position_cursor(self.row, 1 + MARGIN);
        draw();
        self.row += 1;
    }

    fn centered(&mut self, text: &str, style: &str) {
        if self.row > self.last_row {
            return;
        }
        let text = truncate(text, self.width);
        position_cursor(self.row, 1 + center_offset(text_width(&text), self.cols));
        print!("{style}{text}{}", Theme::reset());
        self.row += 1;
    }

    fn paragraph(&mut self, text: &str, style: &str) {
        for line in wrap(text, self.width) {
            self.line(|| print!("{style}{line}{}", Theme::reset()));
        }
    }

    fn block(&mut self, block: &Block) {
        let theme = self.theme;
        match block {
            Block::Heading(text) => {
                let style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.text_normal));
                self.paragraph(text, &style);
            }
            Block::Text(text) => self.paragraph(text, &Theme::fg(&theme.colors.text_normal)),
            Block::Muted(text) => self.paragraph(text, &Theme::fg(&theme.colors.text_dim)),
            Block::Quote(text) => {
                let style = Theme::fg(&theme.colors.text_normal);
                self.paragraph(&format!("\u{201c}{text}\u{201d}"), &style);
            }
            Block::Struck(text) => {
                let style = format!("{}{}", Theme::strikethrough(), Theme::fg(&theme.colors.negative));
                self.paragraph(text, &style);
            }
            Block::Highlight(text) => {
                let style = format!("{}{}", Theme::bold(), Theme::fg(self.accent));
                for line in wrap(text, self.width) {
                    self.centered(&line, &style);
                }
            }
            Block::Rewrite { from, to } => {
                let (negative, positive) = (&theme.colors.negative, &theme.colors.positive);
                let width = self.width;
                self.line(|| {
                    let text = truncate(&format!("{from} → {to}"), width);
                    let split = text.find('→').unwrap_or(text.len());
                    let (left, right) = text.split_at(split);
                    print!("{}{left}{}{right}{}", Theme::fg(negative), Theme::fg(positive), Theme::reset());
                });
            }
            Block::Input { value, placeholder } => self.input(value, placeholder),
            Block::Options { items, selected } => {
                for (i, item) in items.iter().enumerate() {
                    self.option(item, *selected == Some(i));
                }
            }
            Block::Countdown { remaining, total } => self.countdown(*remaining, *total),
            Block::Bubble { expanded } => self.bubble(*expanded),
            Block::Button { label, enabled } => {
                self.row += 1;
                let style = if *enabled {
                    format!(
                        "{}{}{}",
                        Theme::bold(),
                        Theme::fg(&theme.colors.selection_fg),
                        Theme::bg(&theme.colors.selection_bg)
                    )
                } else {
                    format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim))
                };
                self.centered(&format!("[ {label} ]"), &style);
            }
            Block::Spacer => self.row += 1,
        }
    }

    fn input(&mut self, value: &str, placeholder: &str) {
        let theme = self.theme;
        let inner = self.width.saturating_sub(4);
        self.line(|| print!("{}┌{}┐{}", Theme::fg(&theme.colors.border), "─".repeat(inner + 2), Theme::reset()));
        self.line(|| {
            print!("{}│ {}", Theme::fg(&theme.colors.border), Theme::reset());
            let shown = if value.is_empty() {
                print!("{}{}", Theme::fg(&theme.colors.text_dim), truncate(placeholder, inner));
                text_width(&truncate(placeholder, inner))
            } else {
                // keep the end of long input visible
                let skip = text_width(value).saturating_sub(inner.saturating_sub(1));
                let tail: String = value.chars().skip(skip).collect();
                print!("{}{tail}▏", Theme::fg(&theme.colors.accent));
                text_width(&tail) + 1
            };
            print!("{}", " ".repeat(inner.saturating_sub(shown)));
            print!("{} │{}", Theme::fg(&theme.colors.border), Theme::reset());
        });
        self.line(|| print!("{}└{}┘{}", Theme::fg(&theme.colors.border), "─".repeat(inner + 2), Theme::reset()));
    }

    fn option(&mut self, item: &OptionItem, selected: bool) {
        let theme = self.theme;
        let width = self.width;
        self.line(|| {
            let marker = if selected { "▶ " } else { "  " };
            let label = truncate(&item.label, width.saturating_sub(2));
            if selected {
                print!(
                    "{}{}{}{marker}{label}",
                    Theme::bold(),
                    Theme::fg(&theme.colors.selection_fg),
                    Theme::bg(&theme.colors.selection_bg)
                );
            } else {
                print!("{}{marker}{label}", Theme::fg(&theme.colors.text_normal));
            }
            print!("{}", Theme::reset());
        });
        if let Some(detail) = &item.detail {
            let detail = truncate(detail, width.saturating_sub(2));
            self.line(|| print!("  {}{detail}{}", Theme::fg(&theme.colors.text_dim), Theme::reset()));
        }
    }

    fn countdown(&mut self, remaining: u32, total: u32) {
        let clock = format!("{:02}:{:02}", remaining / 60, remaining % 60);
        let style = format!("{}{}", Theme::bold(), Theme::fg(self.accent));
        self.centered(&clock, &style);

        let bar_width = self.width.min(40);
        let elapsed = total.saturating_sub(remaining) as usize;
        let filled = proportion(elapsed, total as usize, bar_width);
        self.centered(&bar(filled, bar_width), &Theme::fg(self.accent));
    }

    fn bubble(&mut self, expanded: bool) {
        let shape: &[&str] = if expanded {
            &["  ▄██████▄  ", " ██████████ ", " ██████████ ", "  ▀██████▀  "]
        } else {
            &["", "    ▄██▄    ", "    ▀██▀    ", ""]
        };
        let style = Theme::fg(self.accent);
        for line in shape {
            self.centered(line, &style);
        }
    }
}

//! Display description of an exercise step.
//!
//! Step machines describe what they want shown as a flat list of [`Block`]s.
//! The UI layer decides how each block looks; the machines never deal with
//! colors or cursor positions.

/// Everything needed to draw the exercise panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseView {
    /// Panel title, e.g. `Palanca de Enfoque`.
    pub title: String,
    /// `(step, of)` when the exercise shows a progress indicator.
    pub progress: Option<(usize, usize)>,
    pub blocks: Vec<Block>,
}

impl ExerciseView {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            progress: None,
            blocks: Vec::new(),
        }
    }

    #[must_use]
    pub fn progress(mut self, step: usize, of: usize) -> Self {
        self.progress = Some((step, of));
        self
    }

    #[must_use]
    pub fn block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    /// The primary button, if the step has one.
    #[must_use]
    pub fn button(&self) -> Option<(&'static str, bool)> {
        self.blocks.iter().find_map(|b| match b {
            Block::Button { label, enabled } => Some((*label, *enabled)),
            _ => None,
        })
    }
}

/// One selectable entry of an option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionItem {
    pub label: String,
    pub detail: Option<String>,
}

impl OptionItem {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: None,
        }
    }

    #[must_use]
    pub fn with_detail(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: Some(detail.into()),
        }
    }
}

/// A renderable piece of an exercise step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(String),
    Text(String),
    /// Secondary text, drawn dimmed.
    Muted(String),
    /// User-written text echoed back in quotes.
    Quote(String),
    /// Text that has been discarded, drawn struck through.
    Struck(String),
    /// Large emphasized statement.
    Highlight(String),
    /// A before/after re-labeling pair.
    Rewrite { from: String, to: String },
    Input {
        value: String,
        placeholder: &'static str,
    },
    Options {
        items: Vec<OptionItem>,
        selected: Option<usize>,
    },
    Countdown { remaining: u32, total: u32 },
    /// Breathing guide bubble.
    Bubble { expanded: bool },
    Button {
        label: &'static str,
        enabled: bool,
    },
    Spacer,
}

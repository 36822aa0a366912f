//! Single-line text entry used by the free-text exercise steps.

/// An editable text buffer.
///
/// Control characters are ignored so that stray key codes never end up in a
/// recorded answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
}

impl TextField {
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }

    pub fn push(&mut self, c: char) {
        if !c.is_control() {
            self.value.push(c);
        }
    }

    pub fn pop(&mut self) {
        self.value.pop();
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// `true` when the field is empty after trimming whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_is_blank() {
        let mut field = TextField::default();
        assert!(field.is_blank());
        field.push(' ');
        field.push('\t');
        assert!(field.is_blank());
        field.push('a');
        assert!(!field.is_blank());
    }

    #[test]
    fn ignores_control_characters() {
        let mut field = TextField::default();
        field.push('\n');
        field.push('\u{7f}');
        field.push('ñ');
        assert_eq!(field.as_str(), "ñ");
    }

    #[test]
    fn pop_removes_whole_characters() {
        let mut field = TextField::with_value("Sé");
        field.pop();
        assert_eq!(field.as_str(), "S");
    }
}

//! The four levers a user can pull to change their state.
//!
//! Each lever maps to one exercise family. The serialized form is the lowercase
//! English identifier (`physiology`, `focus`, ...) while display strings are the
//! Spanish titles shown on the home screen.

use serde::{Deserialize, Serialize};

/// One of the four exercise categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lever {
    /// Change the body: breathing, posture, movement.
    Physiology,
    /// Change what the mind is pointed at.
    Focus,
    /// Change the words used to label an experience.
    Language,
    /// Rehearse success mentally.
    Imagination,
}

impl Lever {
    /// All levers in home screen order.
    pub const ALL: [Self; 4] = [
        Self::Physiology,
        Self::Focus,
        Self::Language,
        Self::Imagination,
    ];

    /// Stable identifier, identical to the serialized form.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Physiology => "physiology",
            Self::Focus => "focus",
            Self::Language => "language",
            Self::Imagination => "imagination",
        }
    }

    /// Display title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Physiology => "Fisiología",
            Self::Focus => "Enfoque",
            Self::Language => "Lenguaje",
            Self::Imagination => "Imaginación",
        }
    }

    #[must_use]
    pub const fn subtitle(self) -> &'static str {
        match self {
            Self::Physiology => "Cambia tu cuerpo",
            Self::Focus => "Cambia tu atención",
            Self::Language => "Cambia tus palabras",
            Self::Imagination => "Cambia tu visualización",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Physiology => "Respiración, postura, movimiento",
            Self::Focus => "Dirige hacia dónde mira tu mente",
            Self::Language => "Re-etiqueta tu experiencia",
            Self::Imagination => "Ensaya el éxito en tu mente",
        }
    }

    /// Position of this lever in [`Lever::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|l| *l == self).unwrap_or(0)
    }
}

impl std::fmt::Display for Lever {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_lowercase_identifier() {
        let json = serde_json::to_string(&Lever::Imagination).unwrap();
        assert_eq!(json, "\"imagination\"");

        let lever: Lever = serde_json::from_str("\"focus\"").unwrap();
        assert_eq!(lever, Lever::Focus);
    }

    #[test]
    fn rejects_unknown_lever() {
        assert!(serde_json::from_str::<Lever>("\"music\"").is_err());
    }

    #[test]
    fn index_matches_home_order() {
        for (i, lever) in Lever::ALL.iter().enumerate() {
            assert_eq!(lever.index(), i);
        }
    }
}

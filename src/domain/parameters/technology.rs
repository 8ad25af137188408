//! Treatment technologies covered by the sizing engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary solids-separation technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Technology {
    /// Dissolved air flotation.
    Daf,
    /// Gravity clarifier.
    Clarifier,
}

impl Technology {
    /// Both technologies, flotation first.
    pub fn all() -> &'static [Technology] {
        &[Technology::Daf, Technology::Clarifier]
    }

    /// Wire identifier (`daf` / `clarifier`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Technology::Daf => "daf",
            Technology::Clarifier => "clarifier",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Technology::Daf => "DAF",
            Technology::Clarifier => "Clarifier",
        }
    }

    /// The other technology, used as the comparison baseline.
    pub fn alternative(&self) -> Technology {
        match self {
            Technology::Daf => Technology::Clarifier,
            Technology::Clarifier => Technology::Daf,
        }
    }
}

impl fmt::Display for Technology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternative_is_involution() {
        for tech in Technology::all() {
            assert_eq!(tech.alternative().alternative(), *tech);
        }
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Technology::Daf).unwrap(), "\"daf\"");
        assert_eq!(
            serde_json::to_string(&Technology::Clarifier).unwrap(),
            "\"clarifier\""
        );
    }

    #[test]
    fn as_str_matches_serde() {
        for tech in Technology::all() {
            let json = serde_json::to_string(tech).unwrap();
            assert_eq!(json, format!("\"{}\"", tech.as_str()));
        }
    }
}

//! Enumerated option vocabularies
//!
//! Small fixed sets of literal strings on the wire, explicit enums in
//! memory. Parsing is strict; an unrecognized literal is a decode failure
//! that the registry answers with the field's own default.

use serde::{Deserialize, Serialize};

/// Where an opening brace goes relative to its construct's header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BracePosition {
    /// At the end of the header line.
    EndOfLine,
    /// Alone on the next line, at the header's indentation.
    NextLine,
    /// Alone on the next line, one level deeper.
    NextLineShifted,
    /// At the end of the header line, unless the header itself wrapped.
    NextLineOnWrap,
}

impl BracePosition {
    pub fn from_literal(raw: &str) -> Option<BracePosition> {
        match raw {
            "end_of_line" => Some(BracePosition::EndOfLine),
            "next_line" => Some(BracePosition::NextLine),
            "next_line_shifted" => Some(BracePosition::NextLineShifted),
            "next_line_on_wrap" => Some(BracePosition::NextLineOnWrap),
            _ => None,
        }
    }

    pub fn as_literal(self) -> &'static str {
        match self {
            BracePosition::EndOfLine => "end_of_line",
            BracePosition::NextLine => "next_line",
            BracePosition::NextLineShifted => "next_line_shifted",
            BracePosition::NextLineOnWrap => "next_line_on_wrap",
        }
    }
}

/// What indentation is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabPolicy {
    Tab,
    Space,
    /// Tabs up to whole tab stops, spaces for the remainder.
    Mixed,
}

impl TabPolicy {
    pub fn from_literal(raw: &str) -> Option<TabPolicy> {
        match raw {
            "tab" => Some(TabPolicy::Tab),
            "space" => Some(TabPolicy::Space),
            "mixed" => Some(TabPolicy::Mixed),
            _ => None,
        }
    }

    pub fn as_literal(self) -> &'static str {
        match self {
            TabPolicy::Tab => "tab",
            TabPolicy::Space => "space",
            TabPolicy::Mixed => "mixed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brace_literals_round_trip() {
        for pos in [
            BracePosition::EndOfLine,
            BracePosition::NextLine,
            BracePosition::NextLineShifted,
            BracePosition::NextLineOnWrap,
        ] {
            assert_eq!(BracePosition::from_literal(pos.as_literal()), Some(pos));
        }
        assert_eq!(BracePosition::from_literal("sideways"), None);
    }

    #[test]
    fn tab_literals_round_trip() {
        for policy in [TabPolicy::Tab, TabPolicy::Space, TabPolicy::Mixed] {
            assert_eq!(TabPolicy::from_literal(policy.as_literal()), Some(policy));
        }
        assert_eq!(TabPolicy::from_literal("TAB"), None);
    }
}

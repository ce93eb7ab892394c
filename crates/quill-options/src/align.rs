//! Fragment alignment modes
//!
//! How a syntactic fragment (argument list, binary chain, array initializer,
//! ...) is broken across lines when it does not fit, plus the modifiers that
//! adjust continuation indentation. The wire map carries the packed numeric
//! form; in memory the strategy is an explicit enum so every dispatch over it
//! is checked for exhaustiveness.

use serde::{Deserialize, Serialize};

/// Split strategy for one alignable fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitStrategy {
    /// Keep everything on the current line; overflow is accepted.
    NoAlignment,
    /// Pack greedily, breaking only where the next element would overflow.
    Compact,
    /// As `Compact`, but once any break occurs the first break moves to
    /// just after the fragment's opening token.
    CompactFirstBreak,
    /// Break before every element unconditionally.
    OnePerLine,
    /// Break before the fragment, continuation one level deeper than the
    /// enclosing header.
    NextShifted,
    /// Break before the fragment, then pack the rest compactly.
    NextPerLine,
}

// Packed layout: modifier bits 0..2, strategy selector in bits 4..6.
const FORCE_SPLIT: u32 = 1;
const INDENT_ON_COLUMN: u32 = 1 << 1;
const INDENT_BY_ONE: u32 = 1 << 2;
const STRATEGY_MASK: u32 = 0x70;
const MODIFIER_MASK: u32 = FORCE_SPLIT | INDENT_ON_COLUMN | INDENT_BY_ONE;

impl SplitStrategy {
    fn packed(self) -> u32 {
        match self {
            SplitStrategy::NoAlignment => 0,
            SplitStrategy::Compact => 1 << 4,
            SplitStrategy::CompactFirstBreak => 2 << 4,
            SplitStrategy::OnePerLine => 3 << 4,
            SplitStrategy::NextShifted => 4 << 4,
            SplitStrategy::NextPerLine => 5 << 4,
        }
    }

    fn from_packed(bits: u32) -> Option<SplitStrategy> {
        match bits >> 4 {
            0 => Some(SplitStrategy::NoAlignment),
            1 => Some(SplitStrategy::Compact),
            2 => Some(SplitStrategy::CompactFirstBreak),
            3 => Some(SplitStrategy::OnePerLine),
            4 => Some(SplitStrategy::NextShifted),
            5 => Some(SplitStrategy::NextPerLine),
            _ => None,
        }
    }
}

/// One fragment's complete alignment setting: a strategy plus independent
/// modifiers. Strategy and modifiers never collapse into combined states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignMode {
    pub strategy: SplitStrategy,
    /// Apply the strategy's break behavior even when the fragment fits.
    pub force_split: bool,
    /// One extra indentation unit on every continuation line.
    pub indent_by_one: bool,
    /// Align continuation lines on the fragment's starting column.
    pub indent_on_column: bool,
}

impl AlignMode {
    pub const NONE: AlignMode = AlignMode::new(SplitStrategy::NoAlignment);
    pub const COMPACT: AlignMode = AlignMode::new(SplitStrategy::Compact);
    pub const NEXT_PER_LINE: AlignMode = AlignMode::new(SplitStrategy::NextPerLine);
    pub const ONE_PER_LINE: AlignMode = AlignMode::new(SplitStrategy::OnePerLine);

    pub const fn new(strategy: SplitStrategy) -> AlignMode {
        AlignMode {
            strategy,
            force_split: false,
            indent_by_one: false,
            indent_on_column: false,
        }
    }

    pub const fn with_force_split(mut self) -> AlignMode {
        self.force_split = true;
        self
    }

    pub const fn with_indent_by_one(mut self) -> AlignMode {
        self.indent_by_one = true;
        self
    }

    pub const fn with_indent_on_column(mut self) -> AlignMode {
        self.indent_on_column = true;
        self
    }

    /// The packed numeric wire form.
    pub fn packed(self) -> u32 {
        let mut bits = self.strategy.packed();
        if self.force_split {
            bits |= FORCE_SPLIT;
        }
        if self.indent_on_column {
            bits |= INDENT_ON_COLUMN;
        }
        if self.indent_by_one {
            bits |= INDENT_BY_ONE;
        }
        bits
    }

    /// Decode the packed wire form. `None` when the strategy selector or
    /// any stray bit is unrecognized.
    pub fn from_packed(raw: u32) -> Option<AlignMode> {
        if raw & !(STRATEGY_MASK | MODIFIER_MASK) != 0 {
            return None;
        }
        let strategy = SplitStrategy::from_packed(raw & STRATEGY_MASK)?;
        Some(AlignMode {
            strategy,
            force_split: raw & FORCE_SPLIT != 0,
            indent_by_one: raw & INDENT_BY_ONE != 0,
            indent_on_column: raw & INDENT_ON_COLUMN != 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pack_round_trips_every_strategy_and_modifier_combination() {
        let strategies = [
            SplitStrategy::NoAlignment,
            SplitStrategy::Compact,
            SplitStrategy::CompactFirstBreak,
            SplitStrategy::OnePerLine,
            SplitStrategy::NextShifted,
            SplitStrategy::NextPerLine,
        ];
        for strategy in strategies {
            for bits in 0u32..8 {
                let mode = AlignMode {
                    strategy,
                    force_split: bits & 1 != 0,
                    indent_on_column: bits & 2 != 0,
                    indent_by_one: bits & 4 != 0,
                };
                assert_eq!(AlignMode::from_packed(mode.packed()), Some(mode));
            }
        }
    }

    #[test]
    fn compact_packs_to_sixteen() {
        assert_eq!(AlignMode::COMPACT.packed(), 16);
        assert_eq!(AlignMode::COMPACT.with_force_split().packed(), 17);
    }

    #[test]
    fn unknown_strategy_selector_is_rejected() {
        assert_eq!(AlignMode::from_packed(6 << 4), None);
        assert_eq!(AlignMode::from_packed(7 << 4), None);
    }

    #[test]
    fn stray_bits_are_rejected() {
        // Bit 3 is unassigned; anything past the strategy field is noise.
        assert_eq!(AlignMode::from_packed(8), None);
        assert_eq!(AlignMode::from_packed(16 | 128), None);
    }
}

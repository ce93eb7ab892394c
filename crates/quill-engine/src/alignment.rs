//! Alignment resolution
//!
//! Turns one fragment (an ordered list of measured sub-elements) plus an
//! [`AlignMode`] and a width constraint into a layout: which continuation
//! line each element starts on and at which column. The result is a pure
//! function of its inputs; the caller re-runs it freely and gets the same
//! answer.

use quill_options::{AlignMode, SplitStrategy};
use tracing::trace;

/// One measured sub-element of a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    /// Width of the element rendered flat (its widest line if the element
    /// already contains a forced break).
    pub width: usize,
    /// The element's own rendering already spans several lines.
    pub already_broken: bool,
}

/// Where one piece landed: continuation line index (0 = the fragment's
/// first line) and starting column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub line: usize,
    pub column: usize,
}

/// The resolved layout, one slot per piece in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub slots: Vec<Slot>,
}

impl Layout {
    pub fn is_split(&self) -> bool {
        self.slots.iter().any(|slot| slot.line > 0)
    }
}

/// Geometry of the fragment being resolved.
#[derive(Debug, Clone, Copy)]
pub struct FragmentMetrics {
    /// Column where the first piece would begin on the current line.
    pub start_column: usize,
    /// Column where continuation lines begin, before mode modifiers.
    pub continuation_column: usize,
    pub page_width: usize,
    /// Width a separator adds when the next piece stays on the same line.
    pub separator_width: usize,
    /// Width of separator text carried onto a continuation line (non-zero
    /// when the separator wraps before the piece, e.g. a leading operator).
    pub continuation_lead_width: usize,
    /// Column width of one indentation unit.
    pub indent_unit_width: usize,
}

pub fn resolve(pieces: &[Piece], mode: AlignMode, metrics: &FragmentMetrics) -> Layout {
    if pieces.is_empty() {
        return Layout { slots: Vec::new() };
    }
    let continuation = continuation_column(mode, metrics);
    let fits = fits_on_current_line(pieces, metrics);
    let layout = match mode.strategy {
        SplitStrategy::NoAlignment => unsplit(pieces, metrics),
        SplitStrategy::Compact => {
            let forced = if mode.force_split && pieces.len() > 1 {
                Some(1)
            } else {
                None
            };
            pack(pieces, metrics, continuation, false, forced)
        }
        SplitStrategy::CompactFirstBreak => {
            let broken_piece = pieces.iter().any(|piece| piece.already_broken);
            if fits && !broken_piece && !mode.force_split {
                unsplit(pieces, metrics)
            } else {
                pack(pieces, metrics, continuation, true, None)
            }
        }
        SplitStrategy::OnePerLine => one_per_line(pieces, metrics, continuation),
        SplitStrategy::NextPerLine | SplitStrategy::NextShifted => {
            if fits && !mode.force_split {
                unsplit(pieces, metrics)
            } else {
                pack(pieces, metrics, continuation, true, None)
            }
        }
    };
    if layout.is_split() {
        trace!(
            pieces = pieces.len(),
            strategy = ?mode.strategy,
            "fragment split across lines"
        );
    }
    layout
}

fn continuation_column(mode: AlignMode, metrics: &FragmentMetrics) -> usize {
    let mut column = if mode.indent_on_column {
        metrics.start_column
    } else {
        metrics.continuation_column
    };
    if mode.indent_by_one {
        column += metrics.indent_unit_width;
    }
    if mode.strategy == SplitStrategy::NextShifted {
        column += metrics.indent_unit_width;
    }
    column
}

fn fits_on_current_line(pieces: &[Piece], metrics: &FragmentMetrics) -> bool {
    let total: usize = pieces.iter().map(|piece| piece.width).sum::<usize>()
        + metrics.separator_width * (pieces.len() - 1);
    metrics.start_column + total <= metrics.page_width
}

/// Everything on the current line; overflow is the caller's accepted cost.
fn unsplit(pieces: &[Piece], metrics: &FragmentMetrics) -> Layout {
    let mut slots = Vec::with_capacity(pieces.len());
    let mut column = metrics.start_column;
    for (index, piece) in pieces.iter().enumerate() {
        if index > 0 {
            column += metrics.separator_width;
        }
        slots.push(Slot { line: 0, column });
        column += piece.width;
    }
    Layout { slots }
}

/// Greedy packing: break before a piece when it (plus its separator) would
/// cross the page width. `break_first` opens with a break before piece 0;
/// `forced` demands a break before one specific piece.
fn pack(
    pieces: &[Piece],
    metrics: &FragmentMetrics,
    continuation: usize,
    break_first: bool,
    forced: Option<usize>,
) -> Layout {
    let mut slots = Vec::with_capacity(pieces.len());
    let mut line = 0usize;
    let mut column = metrics.start_column;
    for (index, piece) in pieces.iter().enumerate() {
        if index == 0 {
            if break_first {
                line += 1;
                column = continuation;
            }
            slots.push(Slot { line, column });
            column += piece.width;
            continue;
        }
        let needed = metrics.separator_width + piece.width;
        if forced == Some(index) || column + needed > metrics.page_width {
            line += 1;
            column = continuation + metrics.continuation_lead_width;
            slots.push(Slot { line, column });
            column += piece.width;
        } else {
            column += metrics.separator_width;
            slots.push(Slot { line, column });
            column += piece.width;
        }
    }
    Layout { slots }
}

/// Every piece on its own continuation line, width notwithstanding.
fn one_per_line(pieces: &[Piece], metrics: &FragmentMetrics, continuation: usize) -> Layout {
    let slots = pieces
        .iter()
        .enumerate()
        .map(|(index, _)| Slot {
            line: index + 1,
            column: if index == 0 {
                continuation
            } else {
                continuation + metrics.continuation_lead_width
            },
        })
        .collect();
    Layout { slots }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn metrics(start: usize, width: usize) -> FragmentMetrics {
        FragmentMetrics {
            start_column: start,
            continuation_column: 8,
            page_width: width,
            separator_width: 2,
            continuation_lead_width: 0,
            indent_unit_width: 4,
        }
    }

    fn pieces(widths: &[usize]) -> Vec<Piece> {
        widths
            .iter()
            .map(|&width| Piece {
                width,
                already_broken: false,
            })
            .collect()
    }

    #[test]
    fn empty_fragment_resolves_to_nothing() {
        let layout = resolve(&[], AlignMode::COMPACT, &metrics(0, 80));
        assert!(layout.slots.is_empty());
        assert!(!layout.is_split());
    }

    #[test]
    fn compact_keeps_a_fitting_fragment_on_one_line() {
        let layout = resolve(&pieces(&[5, 5, 5]), AlignMode::COMPACT, &metrics(10, 80));
        assert_eq!(
            layout.slots,
            vec![
                Slot { line: 0, column: 10 },
                Slot { line: 0, column: 17 },
                Slot { line: 0, column: 24 },
            ]
        );
    }

    #[test]
    fn compact_breaks_at_the_first_overflowing_piece() {
        // 10 + 10 = 20, second piece would end at 32 > 30.
        let layout = resolve(&pieces(&[10, 10, 4]), AlignMode::COMPACT, &metrics(10, 30));
        assert_eq!(
            layout.slots,
            vec![
                Slot { line: 0, column: 10 },
                Slot { line: 1, column: 8 },
                Slot { line: 1, column: 20 },
            ]
        );
    }

    #[test]
    fn compact_packs_continuation_lines_greedily() {
        let layout = resolve(
            &pieces(&[10, 10, 10, 10]),
            AlignMode::COMPACT,
            &metrics(10, 30),
        );
        let lines: Vec<usize> = layout.slots.iter().map(|slot| slot.line).collect();
        assert_eq!(lines, vec![0, 1, 1, 2]);
    }

    #[test]
    fn no_alignment_accepts_overflow() {
        let layout = resolve(&pieces(&[40, 40]), AlignMode::NONE, &metrics(10, 30));
        assert_eq!(
            layout.slots,
            vec![
                Slot { line: 0, column: 10 },
                Slot { line: 0, column: 52 },
            ]
        );
    }

    #[test]
    fn one_per_line_splits_even_with_room_to_spare() {
        let layout = resolve(&pieces(&[1, 1, 1]), AlignMode::ONE_PER_LINE, &metrics(4, 200));
        assert_eq!(
            layout.slots,
            vec![
                Slot { line: 1, column: 8 },
                Slot { line: 2, column: 8 },
                Slot { line: 3, column: 8 },
            ]
        );
    }

    #[test]
    fn compact_first_break_moves_the_break_to_the_front() {
        let mode = AlignMode::new(SplitStrategy::CompactFirstBreak);
        // Fits: no break at all.
        let layout = resolve(&pieces(&[5, 5]), mode, &metrics(10, 80));
        assert!(!layout.is_split());
        // Overflows: the first break lands before piece 0.
        let layout = resolve(&pieces(&[10, 10, 10]), mode, &metrics(10, 35));
        assert_eq!(layout.slots[0], Slot { line: 1, column: 8 });
        assert_eq!(layout.slots[1].line, 1);
    }

    #[test]
    fn an_internally_broken_piece_triggers_the_first_break() {
        let mode = AlignMode::new(SplitStrategy::CompactFirstBreak);
        let fragment = [
            Piece {
                width: 5,
                already_broken: false,
            },
            Piece {
                width: 5,
                already_broken: true,
            },
        ];
        let layout = resolve(&fragment, mode, &metrics(10, 80));
        assert_eq!(layout.slots[0].line, 1);
    }

    #[test]
    fn next_per_line_breaks_before_the_fragment_then_packs() {
        let mode = AlignMode::NEXT_PER_LINE;
        let layout = resolve(&pieces(&[10, 10, 10]), mode, &metrics(60, 70));
        assert_eq!(layout.slots[0], Slot { line: 1, column: 8 });
        assert_eq!(layout.slots[1].line, 1);
        assert_eq!(layout.slots[2].line, 1);
    }

    #[test]
    fn next_shifted_indents_one_level_deeper() {
        let mode = AlignMode::new(SplitStrategy::NextShifted);
        let layout = resolve(&pieces(&[10, 10]), mode, &metrics(60, 70));
        assert_eq!(layout.slots[0], Slot { line: 1, column: 12 });
    }

    #[test]
    fn force_split_overrides_a_fitting_compact_fragment() {
        let mode = AlignMode::COMPACT.with_force_split();
        let layout = resolve(&pieces(&[2, 2, 2]), mode, &metrics(0, 80));
        assert_eq!(
            layout.slots.iter().map(|slot| slot.line).collect::<Vec<_>>(),
            vec![0, 1, 1]
        );
    }

    #[test]
    fn force_split_overrides_a_fitting_next_per_line_fragment() {
        let mode = AlignMode::NEXT_PER_LINE.with_force_split();
        let layout = resolve(&pieces(&[2, 2]), mode, &metrics(0, 80));
        assert_eq!(layout.slots[0].line, 1);
    }

    #[test]
    fn indent_by_one_deepens_continuation_lines() {
        let plain = resolve(&pieces(&[10, 10]), AlignMode::ONE_PER_LINE, &metrics(0, 80));
        let deeper = resolve(
            &pieces(&[10, 10]),
            AlignMode::ONE_PER_LINE.with_indent_by_one(),
            &metrics(0, 80),
        );
        assert_eq!(plain.slots[0].column + 4, deeper.slots[0].column);
    }

    #[test]
    fn indent_on_column_aligns_on_the_fragment_start() {
        let mode = AlignMode::ONE_PER_LINE.with_indent_on_column();
        let layout = resolve(&pieces(&[10, 10]), mode, &metrics(23, 80));
        assert_eq!(layout.slots[0].column, 23);
    }

    #[test]
    fn continuation_lead_shifts_wrapped_pieces() {
        let mut m = metrics(10, 30);
        m.continuation_lead_width = 3;
        let layout = resolve(&pieces(&[10, 10]), AlignMode::COMPACT, &m);
        assert_eq!(layout.slots[1], Slot { line: 1, column: 11 });
    }

    #[test]
    fn resolution_is_deterministic() {
        let fragment = pieces(&[7, 13, 5, 29, 3]);
        let mode = AlignMode::COMPACT.with_indent_by_one();
        let first = resolve(&fragment, mode, &metrics(17, 40));
        let second = resolve(&fragment, mode, &metrics(17, 40));
        assert_eq!(first, second);
    }
}

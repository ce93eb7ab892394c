//! Output assembly
//!
//! A column-tracking buffer that knows how the profile spells indentation
//! (tabs, spaces, or tabs-then-spaces) and how wide a tab stop is. The
//! walker writes tokens and asks for indentation in units or columns; the
//! writer owns every raw character that reaches the output.

use quill_options::{FormatProfile, TabPolicy};

pub(crate) struct Writer {
    out: String,
    column: usize,
    at_line_start: bool,
    tab_policy: TabPolicy,
    tab_size: usize,
    indent_size: usize,
    use_tabs_only_for_leading: bool,
    line_separator: String,
}

impl Writer {
    pub(crate) fn new(profile: &FormatProfile) -> Writer {
        Writer::new_at(profile, 0)
    }

    /// A writer whose first line notionally begins at `column`; used by the
    /// measuring pass to render a sub-expression as if in place.
    pub(crate) fn new_at(profile: &FormatProfile, column: usize) -> Writer {
        Writer {
            out: String::new(),
            column,
            at_line_start: column == 0,
            tab_policy: profile.tab_char,
            tab_size: profile.tab_size.max(1) as usize,
            indent_size: profile.indentation_size as usize,
            use_tabs_only_for_leading: profile.use_tabs_only_for_leading_indentations,
            line_separator: profile.line_separator.clone(),
        }
    }

    pub(crate) fn column(&self) -> usize {
        self.column
    }

    /// Nothing but indentation has been written on the current line.
    pub(crate) fn at_line_start(&self) -> bool {
        self.at_line_start
    }

    /// Column width of one indentation unit.
    pub(crate) fn indent_unit_width(&self) -> usize {
        self.indent_size
    }

    /// Raw text; embedded newlines and tabs are tracked, not reinterpreted.
    pub(crate) fn write(&mut self, text: &str) {
        for ch in text.chars() {
            match ch {
                '\n' => {
                    self.column = 0;
                    self.at_line_start = true;
                }
                '\t' => {
                    self.column = (self.column / self.tab_size + 1) * self.tab_size;
                    self.at_line_start = false;
                }
                _ => {
                    self.column += 1;
                    self.at_line_start = false;
                }
            }
        }
        self.out.push_str(text);
    }

    pub(crate) fn space(&mut self) {
        self.write(" ");
    }

    pub(crate) fn newline(&mut self) {
        let separator = self.line_separator.clone();
        self.out.push_str(&separator);
        self.column = 0;
        self.at_line_start = true;
    }

    /// Break the line unless nothing has been written on it yet.
    pub(crate) fn ensure_new_line(&mut self) {
        if !self.at_line_start {
            self.newline();
        }
    }

    /// `count` empty lines beyond the structural line break.
    pub(crate) fn blank_lines(&mut self, count: u32) {
        self.ensure_new_line();
        for _ in 0..count {
            self.newline();
        }
    }

    /// Leading indentation for `units` indentation units. Only valid at the
    /// start of a line.
    pub(crate) fn write_indent(&mut self, units: u32) {
        let target = units as usize * self.indent_size;
        self.indent_to_column(target);
    }

    /// Leading indentation out to an arbitrary column (continuation lines).
    /// Indentation does not count as line content.
    pub(crate) fn indent_to_column(&mut self, target: usize) {
        debug_assert!(self.at_line_start);
        let text = self.indentation_text(target);
        self.write(&text);
        self.at_line_start = true;
    }

    /// Alignment padding in the middle of a line (column fillers); always
    /// spaces under `use_tabs_only_for_leading_indentations`, otherwise it
    /// follows the tab policy from the current column.
    pub(crate) fn pad_to_column(&mut self, target: usize) {
        while self.column < target {
            if self.tab_policy == TabPolicy::Tab && !self.use_tabs_only_for_leading {
                let next_stop = (self.column / self.tab_size + 1) * self.tab_size;
                if next_stop <= target {
                    self.write("\t");
                    continue;
                }
            }
            self.space();
        }
    }

    fn indentation_text(&self, target: usize) -> String {
        match self.tab_policy {
            TabPolicy::Space => " ".repeat(target),
            TabPolicy::Tab | TabPolicy::Mixed => {
                let tabs = target / self.tab_size;
                let rest = target % self.tab_size;
                let mut text = "\t".repeat(tabs);
                text.push_str(&" ".repeat(rest));
                text
            }
        }
    }

    pub(crate) fn ends_with(&self, suffix: &str) -> bool {
        self.out.ends_with(suffix)
    }

    /// Undo the line break just written (used to pull a token back onto the
    /// previous line).
    pub(crate) fn retract_newline(&mut self) {
        let separator = self.line_separator.clone();
        if self.out.ends_with(&separator) {
            self.out.truncate(self.out.len() - separator.len());
            self.column = self
                .out
                .rfind('\n')
                .map(|pos| self.out.len() - pos - 1)
                .unwrap_or(self.out.len());
            self.at_line_start = false;
        }
    }

    pub(crate) fn into_string(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn spaces_profile() -> FormatProfile {
        let mut profile = FormatProfile::default();
        profile.tab_char = TabPolicy::Space;
        profile
    }

    #[test]
    fn tracks_columns_across_writes() {
        let mut writer = Writer::new(&spaces_profile());
        writer.write("abc");
        assert_eq!(writer.column(), 3);
        writer.newline();
        assert_eq!(writer.column(), 0);
        assert!(writer.at_line_start());
    }

    #[test]
    fn tab_indentation_reaches_the_requested_column() {
        let mut writer = Writer::new(&FormatProfile::default());
        writer.write_indent(2);
        // Two units of four columns, tab size four: two tabs.
        assert_eq!(writer.column(), 8);
        writer.write("x");
        assert_eq!(writer.into_string(), "\t\tx");
    }

    #[test]
    fn space_indentation_spells_out_columns() {
        let mut writer = Writer::new(&spaces_profile());
        writer.write_indent(2);
        writer.write("x");
        assert_eq!(writer.into_string(), "        x");
    }

    #[test]
    fn mixed_indentation_pads_the_remainder_with_spaces() {
        let mut profile = FormatProfile::default();
        profile.tab_char = TabPolicy::Mixed;
        let mut writer = Writer::new(&profile);
        writer.indent_to_column(10);
        // Tab size four: two tabs then two spaces.
        assert_eq!(writer.into_string(), "\t\t  ");
    }

    #[test]
    fn tab_characters_advance_to_the_next_stop() {
        let mut writer = Writer::new(&FormatProfile::default());
        writer.write("ab\tc");
        assert_eq!(writer.column(), 5);
    }

    #[test]
    fn blank_lines_follow_a_structural_break() {
        let mut writer = Writer::new(&spaces_profile());
        writer.write("a");
        writer.blank_lines(2);
        writer.write("b");
        assert_eq!(writer.into_string(), "a\n\n\nb");
    }

    #[test]
    fn retract_newline_restores_the_previous_column() {
        let mut writer = Writer::new(&spaces_profile());
        writer.write("abc");
        writer.newline();
        writer.retract_newline();
        assert_eq!(writer.column(), 3);
        writer.write("d");
        assert_eq!(writer.into_string(), "abcd");
    }

    #[test]
    fn padding_stops_at_the_target_column() {
        let mut writer = Writer::new(&spaces_profile());
        writer.write("ab");
        writer.pad_to_column(6);
        writer.write("=");
        assert_eq!(writer.into_string(), "ab    =");
    }
}

//! Brace and indentation policy
//!
//! Table dispatch only: which brace placement a construct uses, and which
//! enclosing scope a nested line's indentation is measured against. The
//! walker consumes these while laying lines out; nothing here computes.

use quill_options::{BracePosition, FormatProfile};

/// Constructs that own a braced body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BraceConstruct {
    ArrayInitializer,
    Block,
    BlockInCase,
    Constructor,
    Method,
    Namespace,
    Switch,
    Type,
}

pub fn brace_position(profile: &FormatProfile, construct: BraceConstruct) -> BracePosition {
    match construct {
        BraceConstruct::ArrayInitializer => profile.brace_position_for_array_initializer,
        BraceConstruct::Block => profile.brace_position_for_block,
        BraceConstruct::BlockInCase => profile.brace_position_for_block_in_case,
        BraceConstruct::Constructor => profile.brace_position_for_constructor_declaration,
        BraceConstruct::Method => profile.brace_position_for_method_declaration,
        BraceConstruct::Namespace => profile.brace_position_for_namespace_declaration,
        BraceConstruct::Switch => profile.brace_position_for_switch,
        BraceConstruct::Type => profile.brace_position_for_type_declaration,
    }
}

/// `next_line_on_wrap` collapses to one of the unconditional placements once
/// the header's fate is known.
pub fn effective_brace_position(
    profile: &FormatProfile,
    construct: BraceConstruct,
    header_wrapped: bool,
) -> BracePosition {
    match brace_position(profile, construct) {
        BracePosition::NextLineOnWrap if header_wrapped => BracePosition::NextLine,
        BracePosition::NextLineOnWrap => BracePosition::EndOfLine,
        position => position,
    }
}

/// Extra indentation units for statements inside a plain block.
pub fn block_statement_indent(profile: &FormatProfile) -> u32 {
    profile.indent_statements_compare_to_block as u32
}

/// Extra indentation units for statements inside a method body.
pub fn body_statement_indent(profile: &FormatProfile) -> u32 {
    profile.indent_statements_compare_to_body as u32
}

/// Extra indentation units for members inside a type body.
pub fn type_body_indent(profile: &FormatProfile) -> u32 {
    profile.indent_body_declarations_compare_to_type_header as u32
}

/// Extra indentation units for declarations inside a namespace body.
pub fn namespace_body_indent(profile: &FormatProfile) -> u32 {
    profile.indent_body_declarations_compare_to_namespace as u32
}

/// Extra indentation units for `case` labels relative to the switch header.
pub fn switch_case_indent(profile: &FormatProfile) -> u32 {
    profile.indent_switchstatements_compare_to_switch as u32
}

/// Extra indentation units for statements under a `case` label.
pub fn case_statement_indent(profile: &FormatProfile) -> u32 {
    profile.indent_switchstatements_compare_to_cases as u32
}

/// Extra indentation units for `break` relative to its `case` label.
pub fn break_statement_indent(profile: &FormatProfile) -> u32 {
    profile.indent_breaks_compare_to_cases as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn each_construct_reads_its_own_field() {
        let mut profile = FormatProfile::default();
        profile.brace_position_for_block = BracePosition::NextLine;
        assert_eq!(
            brace_position(&profile, BraceConstruct::Block),
            BracePosition::NextLine
        );
        assert_eq!(
            brace_position(&profile, BraceConstruct::Method),
            BracePosition::EndOfLine
        );
    }

    #[test]
    fn next_line_on_wrap_depends_on_the_header() {
        let mut profile = FormatProfile::default();
        profile.brace_position_for_method_declaration = BracePosition::NextLineOnWrap;
        assert_eq!(
            effective_brace_position(&profile, BraceConstruct::Method, false),
            BracePosition::EndOfLine
        );
        assert_eq!(
            effective_brace_position(&profile, BraceConstruct::Method, true),
            BracePosition::NextLine
        );
    }

    #[test]
    fn switch_indentation_compounds_from_both_toggles() {
        let profile = FormatProfile::default();
        assert_eq!(switch_case_indent(&profile), 0);
        assert_eq!(case_statement_indent(&profile), 1);
        assert_eq!(break_statement_indent(&profile), 1);
    }
}

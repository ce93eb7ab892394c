//! The format profile
//!
//! One flat struct holding every style option the engine reads. Constructed
//! with the compiled-in defaults; [`FormatProfile::load`] applies overrides
//! from the wire map. The struct stays plain data on purpose: a format call
//! takes `&FormatProfile` and the caller owns sharing.
//!
//! Field names are the stable wire identifiers minus the `quill.formatter.`
//! prefix; the registry module derives the full keys from them.

use crate::align::AlignMode;
use crate::vocab::{BracePosition, TabPolicy};

/// Every style option, fully populated.
///
/// `line_separator` and `initial_indentation_level` are formatting-context
/// inputs set directly by the caller; they do not travel through the wire
/// map.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatProfile {
    pub alignment_for_arguments_in_allocation_expression: AlignMode,
    pub alignment_for_arguments_in_explicit_constructor_call: AlignMode,
    pub alignment_for_arguments_in_method_invocation: AlignMode,
    pub alignment_for_arguments_in_qualified_allocation_expression: AlignMode,
    pub alignment_for_assignment: AlignMode,
    pub alignment_for_binary_expression: AlignMode,
    pub alignment_for_compact_if: AlignMode,
    pub alignment_for_concat_expression: AlignMode,
    pub alignment_for_conditional_expression: AlignMode,
    pub alignment_for_expressions_in_array_initializer: AlignMode,
    pub alignment_for_method_declaration: AlignMode,
    pub alignment_for_multiple_fields: AlignMode,
    pub alignment_for_parameters_in_constructor_declaration: AlignMode,
    pub alignment_for_parameters_in_method_declaration: AlignMode,
    pub alignment_for_selector_in_method_invocation: AlignMode,
    pub alignment_for_superclass_in_type_declaration: AlignMode,
    pub alignment_for_superinterfaces_in_type_declaration: AlignMode,
    pub alignment_for_throws_clause_in_constructor_declaration: AlignMode,
    pub alignment_for_throws_clause_in_method_declaration: AlignMode,
    pub align_type_members_on_columns: bool,
    pub brace_position_for_anonymous_type_declaration: BracePosition,
    pub brace_position_for_array_initializer: BracePosition,
    pub brace_position_for_block: BracePosition,
    pub brace_position_for_block_in_case: BracePosition,
    pub brace_position_for_constructor_declaration: BracePosition,
    pub brace_position_for_method_declaration: BracePosition,
    pub brace_position_for_namespace_declaration: BracePosition,
    pub brace_position_for_switch: BracePosition,
    pub brace_position_for_type_declaration: BracePosition,
    pub continuation_indentation: u32,
    pub continuation_indentation_for_array_initializer: u32,
    pub blank_lines_after_imports: u32,
    pub blank_lines_after_package: u32,
    pub blank_lines_at_beginning_of_method_body: u32,
    pub blank_lines_before_field: u32,
    pub blank_lines_before_first_class_body_declaration: u32,
    pub blank_lines_before_imports: u32,
    pub blank_lines_before_member_type: u32,
    pub blank_lines_before_method: u32,
    pub blank_lines_before_new_chunk: u32,
    pub blank_lines_before_package: u32,
    pub blank_lines_between_import_groups: u32,
    pub blank_lines_between_type_declarations: u32,
    pub indent_statements_compare_to_block: bool,
    pub indent_statements_compare_to_body: bool,
    pub indent_body_declarations_compare_to_type_header: bool,
    pub indent_body_declarations_compare_to_namespace: bool,
    pub indent_breaks_compare_to_cases: bool,
    pub indent_empty_lines: bool,
    pub indent_switchstatements_compare_to_cases: bool,
    pub indent_switchstatements_compare_to_switch: bool,
    pub indentation_size: u32,
    pub insert_new_line_after_label: bool,
    pub insert_new_line_after_namespace_declaration: bool,
    pub insert_new_line_after_opening_brace_in_array_initializer: bool,
    pub insert_new_line_after_opening_brace_in_array_initializer_in_arguments: bool,
    pub insert_new_line_at_end_of_file_if_missing: bool,
    pub insert_new_line_before_catch_in_try_statement: bool,
    pub insert_new_line_before_closing_brace_in_array_initializer: bool,
    pub insert_new_line_before_else_in_if_statement: bool,
    pub insert_new_line_before_finally_in_try_statement: bool,
    pub insert_new_line_before_while_in_do_statement: bool,
    pub insert_new_line_in_empty_anonymous_type_declaration: bool,
    pub insert_new_line_in_empty_block: bool,
    pub insert_new_line_in_empty_method_body: bool,
    pub insert_new_line_in_empty_type_declaration: bool,
    pub insert_space_after_and_in_type_parameter: bool,
    pub insert_space_after_assignment_operator: bool,
    pub insert_space_after_binary_operator: bool,
    pub insert_space_after_closing_angle_bracket_in_type_arguments: bool,
    pub insert_space_after_closing_angle_bracket_in_type_parameters: bool,
    pub insert_space_after_closing_brace_in_block: bool,
    pub insert_space_after_closing_paren_in_cast: bool,
    pub insert_space_after_colon_in_assert: bool,
    pub insert_space_after_colon_in_case: bool,
    pub insert_space_after_colon_in_conditional: bool,
    pub insert_space_after_colon_in_for: bool,
    pub insert_space_after_colon_in_labeled_statement: bool,
    pub insert_space_after_comma_in_allocation_expression: bool,
    pub insert_space_after_comma_in_array_initializer: bool,
    pub insert_space_after_comma_in_constructor_declaration_parameters: bool,
    pub insert_space_after_comma_in_constructor_declaration_throws: bool,
    pub insert_space_after_comma_in_explicit_constructor_call_arguments: bool,
    pub insert_space_after_comma_in_for_increments: bool,
    pub insert_space_after_comma_in_for_inits: bool,
    pub insert_space_after_comma_in_method_declaration_parameters: bool,
    pub insert_space_after_comma_in_method_declaration_throws: bool,
    pub insert_space_after_comma_in_method_invocation_arguments: bool,
    pub insert_space_after_comma_in_multiple_field_declarations: bool,
    pub insert_space_after_comma_in_multiple_local_declarations: bool,
    pub insert_space_after_comma_in_parameterized_type_reference: bool,
    pub insert_space_after_comma_in_superinterfaces: bool,
    pub insert_space_after_comma_in_type_arguments: bool,
    pub insert_space_after_comma_in_type_parameters: bool,
    pub insert_space_after_concat_operator: bool,
    pub insert_space_after_double_arrow_operator: bool,
    pub insert_space_after_double_colon_operator: bool,
    pub insert_space_after_ellipsis: bool,
    pub insert_space_after_object_operator: bool,
    pub insert_space_after_opening_angle_bracket_in_parameterized_type_reference: bool,
    pub insert_space_after_opening_angle_bracket_in_type_arguments: bool,
    pub insert_space_after_opening_angle_bracket_in_type_parameters: bool,
    pub insert_space_after_opening_brace_in_array_initializer: bool,
    pub insert_space_after_opening_bracket_in_array_allocation_expression: bool,
    pub insert_space_after_opening_bracket_in_array_reference: bool,
    pub insert_space_after_opening_paren_in_cast: bool,
    pub insert_space_after_opening_paren_in_catch: bool,
    pub insert_space_after_opening_paren_in_constructor_declaration: bool,
    pub insert_space_after_opening_paren_in_for: bool,
    pub insert_space_after_opening_paren_in_if: bool,
    pub insert_space_after_opening_paren_in_method_declaration: bool,
    pub insert_space_after_opening_paren_in_method_invocation: bool,
    pub insert_space_after_opening_paren_in_parenthesized_expression: bool,
    pub insert_space_after_opening_paren_in_switch: bool,
    pub insert_space_after_opening_paren_in_synchronized: bool,
    pub insert_space_after_opening_paren_in_while: bool,
    pub insert_space_after_postfix_operator: bool,
    pub insert_space_after_prefix_operator: bool,
    pub insert_space_after_question_in_conditional: bool,
    pub insert_space_after_question_in_wildcard: bool,
    pub insert_space_after_semicolon_in_for: bool,
    pub insert_space_after_unary_operator: bool,
    pub insert_space_before_and_in_type_parameter: bool,
    pub insert_space_before_assignment_operator: bool,
    pub insert_space_before_binary_operator: bool,
    pub insert_space_before_closing_angle_bracket_in_parameterized_type_reference: bool,
    pub insert_space_before_closing_angle_bracket_in_type_arguments: bool,
    pub insert_space_before_closing_angle_bracket_in_type_parameters: bool,
    pub insert_space_before_closing_brace_in_array_initializer: bool,
    pub insert_space_before_closing_bracket_in_array_allocation_expression: bool,
    pub insert_space_before_closing_bracket_in_array_reference: bool,
    pub insert_space_before_closing_paren_in_cast: bool,
    pub insert_space_before_closing_paren_in_catch: bool,
    pub insert_space_before_closing_paren_in_constructor_declaration: bool,
    pub insert_space_before_closing_paren_in_for: bool,
    pub insert_space_before_closing_paren_in_if: bool,
    pub insert_space_before_closing_paren_in_method_declaration: bool,
    pub insert_space_before_closing_paren_in_method_invocation: bool,
    pub insert_space_before_closing_paren_in_parenthesized_expression: bool,
    pub insert_space_before_closing_paren_in_switch: bool,
    pub insert_space_before_closing_paren_in_synchronized: bool,
    pub insert_space_before_closing_paren_in_while: bool,
    pub insert_space_before_colon_in_assert: bool,
    pub insert_space_before_colon_in_case: bool,
    pub insert_space_before_colon_in_conditional: bool,
    pub insert_space_before_colon_in_default: bool,
    pub insert_space_before_colon_in_for: bool,
    pub insert_space_before_colon_in_labeled_statement: bool,
    pub insert_space_before_comma_in_allocation_expression: bool,
    pub insert_space_before_comma_in_array_initializer: bool,
    pub insert_space_before_comma_in_constructor_declaration_parameters: bool,
    pub insert_space_before_comma_in_constructor_declaration_throws: bool,
    pub insert_space_before_comma_in_explicit_constructor_call_arguments: bool,
    pub insert_space_before_comma_in_for_increments: bool,
    pub insert_space_before_comma_in_for_inits: bool,
    pub insert_space_before_comma_in_method_declaration_parameters: bool,
    pub insert_space_before_comma_in_method_declaration_throws: bool,
    pub insert_space_before_comma_in_method_invocation_arguments: bool,
    pub insert_space_before_comma_in_multiple_field_declarations: bool,
    pub insert_space_before_comma_in_multiple_local_declarations: bool,
    pub insert_space_before_comma_in_parameterized_type_reference: bool,
    pub insert_space_before_comma_in_superinterfaces: bool,
    pub insert_space_before_comma_in_type_arguments: bool,
    pub insert_space_before_comma_in_type_parameters: bool,
    pub insert_space_before_concat_operator: bool,
    pub insert_space_before_double_arrow_operator: bool,
    pub insert_space_before_double_arrow_operator_with_filler: bool,
    pub insert_space_before_double_colon_operator: bool,
    pub insert_space_before_ellipsis: bool,
    pub insert_space_before_object_operator: bool,
    pub insert_space_before_opening_angle_bracket_in_parameterized_type_reference: bool,
    pub insert_space_before_opening_angle_bracket_in_type_arguments: bool,
    pub insert_space_before_opening_angle_bracket_in_type_parameters: bool,
    pub insert_space_before_opening_brace_in_anonymous_type_declaration: bool,
    pub insert_space_before_opening_brace_in_array_initializer: bool,
    pub insert_space_before_opening_brace_in_block: bool,
    pub insert_space_before_opening_brace_in_constructor_declaration: bool,
    pub insert_space_before_opening_brace_in_method_declaration: bool,
    pub insert_space_before_opening_brace_in_namespace_declaration: bool,
    pub insert_space_before_opening_brace_in_switch: bool,
    pub insert_space_before_opening_brace_in_type_declaration: bool,
    pub insert_space_before_opening_bracket_in_array_allocation_expression: bool,
    pub insert_space_before_opening_bracket_in_array_reference: bool,
    pub insert_space_before_opening_bracket_in_array_type_reference: bool,
    pub insert_space_before_opening_paren_in_catch: bool,
    pub insert_space_before_opening_paren_in_constructor_declaration: bool,
    pub insert_space_before_opening_paren_in_for: bool,
    pub insert_space_before_opening_paren_in_if: bool,
    pub insert_space_before_opening_paren_in_method_declaration: bool,
    pub insert_space_before_opening_paren_in_method_invocation: bool,
    pub insert_space_before_opening_paren_in_parenthesized_expression: bool,
    pub insert_space_before_opening_paren_in_switch: bool,
    pub insert_space_before_opening_paren_in_synchronized: bool,
    pub insert_space_before_opening_paren_in_while: bool,
    pub insert_space_before_parenthesized_expression_in_echo: bool,
    pub insert_space_before_parenthesized_expression_in_return: bool,
    pub insert_space_before_parenthesized_expression_in_throw: bool,
    pub insert_space_before_postfix_operator: bool,
    pub insert_space_before_prefix_operator: bool,
    pub insert_space_before_question_in_conditional: bool,
    pub insert_space_before_question_in_wildcard: bool,
    pub insert_space_before_semicolon: bool,
    pub insert_space_before_semicolon_in_for: bool,
    pub insert_space_before_unary_operator: bool,
    pub insert_space_between_brackets_in_array_type_reference: bool,
    pub insert_space_between_empty_braces_in_array_initializer: bool,
    pub insert_space_between_empty_brackets_in_array_allocation_expression: bool,
    pub insert_space_between_empty_parens_in_constructor_declaration: bool,
    pub insert_space_between_empty_parens_in_method_declaration: bool,
    pub insert_space_between_empty_parens_in_method_invocation: bool,
    pub compact_else_if: bool,
    pub keep_else_statement_on_same_line: bool,
    pub keep_empty_array_initializer_on_one_line: bool,
    pub keep_guardian_clause_on_one_line: bool,
    pub keep_simple_if_on_one_line: bool,
    pub keep_then_statement_on_same_line: bool,
    pub never_indent_block_comments_on_first_column: bool,
    pub never_indent_line_comments_on_first_column: bool,
    pub number_of_empty_lines_to_preserve: u32,
    pub join_lines_in_comments: bool,
    pub join_wrapped_lines: bool,
    pub put_empty_statement_on_new_line: bool,
    pub page_width: u32,
    pub tab_char: TabPolicy,
    pub tab_size: u32,
    pub use_tabs_only_for_leading_indentations: bool,
    pub wrap_array_in_arguments: bool,
    pub wrap_before_binary_operator: bool,
    pub wrap_before_concat_operator: bool,
    pub wrap_outer_expressions_when_nested: bool,
    pub line_separator: String,
    pub initial_indentation_level: u32,
}

impl Default for FormatProfile {
    fn default() -> FormatProfile {
        FormatProfile {
            alignment_for_arguments_in_allocation_expression: AlignMode::COMPACT,
            alignment_for_arguments_in_explicit_constructor_call: AlignMode::COMPACT,
            alignment_for_arguments_in_method_invocation: AlignMode::COMPACT,
            alignment_for_arguments_in_qualified_allocation_expression: AlignMode::COMPACT,
            alignment_for_assignment: AlignMode::NONE,
            alignment_for_binary_expression: AlignMode::COMPACT,
            alignment_for_compact_if: AlignMode::COMPACT,
            alignment_for_concat_expression: AlignMode::COMPACT,
            alignment_for_conditional_expression: AlignMode::NEXT_PER_LINE,
            alignment_for_expressions_in_array_initializer: AlignMode::COMPACT,
            alignment_for_method_declaration: AlignMode::NONE,
            alignment_for_multiple_fields: AlignMode::COMPACT,
            alignment_for_parameters_in_constructor_declaration: AlignMode::COMPACT,
            alignment_for_parameters_in_method_declaration: AlignMode::COMPACT,
            alignment_for_selector_in_method_invocation: AlignMode::COMPACT,
            alignment_for_superclass_in_type_declaration: AlignMode::COMPACT,
            alignment_for_superinterfaces_in_type_declaration: AlignMode::COMPACT,
            alignment_for_throws_clause_in_constructor_declaration: AlignMode::COMPACT,
            alignment_for_throws_clause_in_method_declaration: AlignMode::COMPACT,
            align_type_members_on_columns: false,
            brace_position_for_anonymous_type_declaration: BracePosition::EndOfLine,
            brace_position_for_array_initializer: BracePosition::EndOfLine,
            brace_position_for_block: BracePosition::EndOfLine,
            brace_position_for_block_in_case: BracePosition::EndOfLine,
            brace_position_for_constructor_declaration: BracePosition::EndOfLine,
            brace_position_for_method_declaration: BracePosition::EndOfLine,
            brace_position_for_namespace_declaration: BracePosition::EndOfLine,
            brace_position_for_switch: BracePosition::EndOfLine,
            brace_position_for_type_declaration: BracePosition::EndOfLine,
            continuation_indentation: 2,
            continuation_indentation_for_array_initializer: 2,
            blank_lines_after_imports: 1,
            blank_lines_after_package: 1,
            blank_lines_at_beginning_of_method_body: 0,
            blank_lines_before_field: 0,
            blank_lines_before_first_class_body_declaration: 0,
            blank_lines_before_imports: 1,
            blank_lines_before_member_type: 1,
            blank_lines_before_method: 0,
            blank_lines_before_new_chunk: 1,
            blank_lines_before_package: 0,
            blank_lines_between_import_groups: 1,
            blank_lines_between_type_declarations: 1,
            indent_statements_compare_to_block: true,
            indent_statements_compare_to_body: true,
            indent_body_declarations_compare_to_type_header: true,
            indent_body_declarations_compare_to_namespace: false,
            indent_breaks_compare_to_cases: true,
            indent_empty_lines: false,
            indent_switchstatements_compare_to_cases: true,
            indent_switchstatements_compare_to_switch: false,
            indentation_size: 4,
            insert_new_line_after_label: false,
            insert_new_line_after_namespace_declaration: true,
            insert_new_line_after_opening_brace_in_array_initializer: false,
            insert_new_line_after_opening_brace_in_array_initializer_in_arguments: true,
            insert_new_line_at_end_of_file_if_missing: false,
            insert_new_line_before_catch_in_try_statement: false,
            insert_new_line_before_closing_brace_in_array_initializer: false,
            insert_new_line_before_else_in_if_statement: false,
            insert_new_line_before_finally_in_try_statement: false,
            insert_new_line_before_while_in_do_statement: false,
            insert_new_line_in_empty_anonymous_type_declaration: true,
            insert_new_line_in_empty_block: true,
            insert_new_line_in_empty_method_body: true,
            insert_new_line_in_empty_type_declaration: true,
            insert_space_after_and_in_type_parameter: true,
            insert_space_after_assignment_operator: true,
            insert_space_after_binary_operator: true,
            insert_space_after_closing_angle_bracket_in_type_arguments: true,
            insert_space_after_closing_angle_bracket_in_type_parameters: true,
            insert_space_after_closing_brace_in_block: true,
            insert_space_after_closing_paren_in_cast: true,
            insert_space_after_colon_in_assert: true,
            insert_space_after_colon_in_case: true,
            insert_space_after_colon_in_conditional: true,
            insert_space_after_colon_in_for: true,
            insert_space_after_colon_in_labeled_statement: true,
            insert_space_after_comma_in_allocation_expression: true,
            insert_space_after_comma_in_array_initializer: true,
            insert_space_after_comma_in_constructor_declaration_parameters: true,
            insert_space_after_comma_in_constructor_declaration_throws: true,
            insert_space_after_comma_in_explicit_constructor_call_arguments: true,
            insert_space_after_comma_in_for_increments: true,
            insert_space_after_comma_in_for_inits: true,
            insert_space_after_comma_in_method_declaration_parameters: true,
            insert_space_after_comma_in_method_declaration_throws: true,
            insert_space_after_comma_in_method_invocation_arguments: true,
            insert_space_after_comma_in_multiple_field_declarations: true,
            insert_space_after_comma_in_multiple_local_declarations: true,
            insert_space_after_comma_in_parameterized_type_reference: true,
            insert_space_after_comma_in_superinterfaces: true,
            insert_space_after_comma_in_type_arguments: true,
            insert_space_after_comma_in_type_parameters: true,
            insert_space_after_concat_operator: true,
            insert_space_after_double_arrow_operator: true,
            insert_space_after_double_colon_operator: false,
            insert_space_after_ellipsis: true,
            insert_space_after_object_operator: false,
            insert_space_after_opening_angle_bracket_in_parameterized_type_reference: false,
            insert_space_after_opening_angle_bracket_in_type_arguments: false,
            insert_space_after_opening_angle_bracket_in_type_parameters: false,
            insert_space_after_opening_brace_in_array_initializer: false,
            insert_space_after_opening_bracket_in_array_allocation_expression: false,
            insert_space_after_opening_bracket_in_array_reference: false,
            insert_space_after_opening_paren_in_cast: false,
            insert_space_after_opening_paren_in_catch: false,
            insert_space_after_opening_paren_in_constructor_declaration: false,
            insert_space_after_opening_paren_in_for: false,
            insert_space_after_opening_paren_in_if: false,
            insert_space_after_opening_paren_in_method_declaration: false,
            insert_space_after_opening_paren_in_method_invocation: false,
            insert_space_after_opening_paren_in_parenthesized_expression: false,
            insert_space_after_opening_paren_in_switch: false,
            insert_space_after_opening_paren_in_synchronized: false,
            insert_space_after_opening_paren_in_while: false,
            insert_space_after_postfix_operator: false,
            insert_space_after_prefix_operator: false,
            insert_space_after_question_in_conditional: true,
            insert_space_after_question_in_wildcard: false,
            insert_space_after_semicolon_in_for: true,
            insert_space_after_unary_operator: false,
            insert_space_before_and_in_type_parameter: true,
            insert_space_before_assignment_operator: true,
            insert_space_before_binary_operator: true,
            insert_space_before_closing_angle_bracket_in_parameterized_type_reference: false,
            insert_space_before_closing_angle_bracket_in_type_arguments: false,
            insert_space_before_closing_angle_bracket_in_type_parameters: false,
            insert_space_before_closing_brace_in_array_initializer: false,
            insert_space_before_closing_bracket_in_array_allocation_expression: false,
            insert_space_before_closing_bracket_in_array_reference: false,
            insert_space_before_closing_paren_in_cast: false,
            insert_space_before_closing_paren_in_catch: false,
            insert_space_before_closing_paren_in_constructor_declaration: false,
            insert_space_before_closing_paren_in_for: false,
            insert_space_before_closing_paren_in_if: false,
            insert_space_before_closing_paren_in_method_declaration: false,
            insert_space_before_closing_paren_in_method_invocation: false,
            insert_space_before_closing_paren_in_parenthesized_expression: false,
            insert_space_before_closing_paren_in_switch: false,
            insert_space_before_closing_paren_in_synchronized: false,
            insert_space_before_closing_paren_in_while: false,
            insert_space_before_colon_in_assert: true,
            insert_space_before_colon_in_case: false,
            insert_space_before_colon_in_conditional: true,
            insert_space_before_colon_in_default: false,
            insert_space_before_colon_in_for: true,
            insert_space_before_colon_in_labeled_statement: false,
            insert_space_before_comma_in_allocation_expression: false,
            insert_space_before_comma_in_array_initializer: false,
            insert_space_before_comma_in_constructor_declaration_parameters: false,
            insert_space_before_comma_in_constructor_declaration_throws: false,
            insert_space_before_comma_in_explicit_constructor_call_arguments: false,
            insert_space_before_comma_in_for_increments: false,
            insert_space_before_comma_in_for_inits: false,
            insert_space_before_comma_in_method_declaration_parameters: false,
            insert_space_before_comma_in_method_declaration_throws: false,
            insert_space_before_comma_in_method_invocation_arguments: false,
            insert_space_before_comma_in_multiple_field_declarations: false,
            insert_space_before_comma_in_multiple_local_declarations: false,
            insert_space_before_comma_in_parameterized_type_reference: false,
            insert_space_before_comma_in_superinterfaces: false,
            insert_space_before_comma_in_type_arguments: false,
            insert_space_before_comma_in_type_parameters: false,
            insert_space_before_concat_operator: true,
            insert_space_before_double_arrow_operator: true,
            insert_space_before_double_arrow_operator_with_filler: false,
            insert_space_before_double_colon_operator: false,
            insert_space_before_ellipsis: false,
            insert_space_before_object_operator: false,
            insert_space_before_opening_angle_bracket_in_parameterized_type_reference: false,
            insert_space_before_opening_angle_bracket_in_type_arguments: false,
            insert_space_before_opening_angle_bracket_in_type_parameters: false,
            insert_space_before_opening_brace_in_anonymous_type_declaration: true,
            insert_space_before_opening_brace_in_array_initializer: false,
            insert_space_before_opening_brace_in_block: true,
            insert_space_before_opening_brace_in_constructor_declaration: true,
            insert_space_before_opening_brace_in_method_declaration: true,
            insert_space_before_opening_brace_in_namespace_declaration: true,
            insert_space_before_opening_brace_in_switch: true,
            insert_space_before_opening_brace_in_type_declaration: true,
            insert_space_before_opening_bracket_in_array_allocation_expression: false,
            insert_space_before_opening_bracket_in_array_reference: false,
            insert_space_before_opening_bracket_in_array_type_reference: false,
            insert_space_before_opening_paren_in_catch: true,
            insert_space_before_opening_paren_in_constructor_declaration: false,
            insert_space_before_opening_paren_in_for: true,
            insert_space_before_opening_paren_in_if: true,
            insert_space_before_opening_paren_in_method_declaration: false,
            insert_space_before_opening_paren_in_method_invocation: false,
            insert_space_before_opening_paren_in_parenthesized_expression: false,
            insert_space_before_opening_paren_in_switch: true,
            insert_space_before_opening_paren_in_synchronized: true,
            insert_space_before_opening_paren_in_while: true,
            insert_space_before_parenthesized_expression_in_echo: true,
            insert_space_before_parenthesized_expression_in_return: true,
            insert_space_before_parenthesized_expression_in_throw: true,
            insert_space_before_postfix_operator: false,
            insert_space_before_prefix_operator: false,
            insert_space_before_question_in_conditional: true,
            insert_space_before_question_in_wildcard: false,
            insert_space_before_semicolon: false,
            insert_space_before_semicolon_in_for: false,
            insert_space_before_unary_operator: false,
            insert_space_between_brackets_in_array_type_reference: false,
            insert_space_between_empty_braces_in_array_initializer: false,
            insert_space_between_empty_brackets_in_array_allocation_expression: false,
            insert_space_between_empty_parens_in_constructor_declaration: false,
            insert_space_between_empty_parens_in_method_declaration: false,
            insert_space_between_empty_parens_in_method_invocation: false,
            compact_else_if: true,
            keep_else_statement_on_same_line: false,
            keep_empty_array_initializer_on_one_line: false,
            keep_guardian_clause_on_one_line: false,
            keep_simple_if_on_one_line: false,
            keep_then_statement_on_same_line: false,
            never_indent_block_comments_on_first_column: false,
            never_indent_line_comments_on_first_column: false,
            number_of_empty_lines_to_preserve: 1,
            join_lines_in_comments: true,
            join_wrapped_lines: true,
            put_empty_statement_on_new_line: true,
            page_width: 80,
            tab_char: TabPolicy::Tab,
            tab_size: 4,
            use_tabs_only_for_leading_indentations: false,
            wrap_array_in_arguments: true,
            wrap_before_binary_operator: true,
            wrap_before_concat_operator: true,
            wrap_outer_expressions_when_nested: true,
            line_separator: "\n".to_string(),
            initial_indentation_level: 0,
        }
    }
}

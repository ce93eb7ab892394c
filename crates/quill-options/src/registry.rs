//! The option registry
//!
//! One descriptor per option drives decoding, encoding, and fallback
//! uniformly; the per-field behavior lives in the table, not in repeated
//! parse blocks. Loading is tolerant by contract: a malformed value restores
//! that field's own compiled-in default and never disturbs another field.

use std::collections::BTreeMap;

use crate::align::AlignMode;
use crate::profile::FormatProfile;
use crate::vocab::{BracePosition, TabPolicy};
use crate::{ProfileError, DO_NOT_INSERT, INSERT};

/// Wire prefix shared by every option key.
pub const KEY_PREFIX: &str = "quill.formatter.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    /// Whitespace/newline decision carried as the insert sentinels.
    Space,
    /// Plain boolean carried as `true`/`false`.
    Flag,
    /// Non-negative integer carried as a decimal string.
    Uint,
    /// Alignment mode carried as the decimal string of its packed form.
    Align,
    /// Brace position literal.
    Brace,
    /// Tab policy literal.
    Tab,
}

#[derive(Debug, Clone, Copy)]
enum Value {
    Space(bool),
    Flag(bool),
    Uint(u32),
    Align(AlignMode),
    Brace(BracePosition),
    Tab(TabPolicy),
}

struct Descriptor {
    key: &'static str,
    kind: Kind,
    get: fn(&FormatProfile) -> Value,
    set: fn(&mut FormatProfile, Value),
}

impl Kind {
    fn decode(self, raw: &str) -> Option<Value> {
        match self {
            Kind::Space => match raw {
                INSERT => Some(Value::Space(true)),
                DO_NOT_INSERT => Some(Value::Space(false)),
                _ => None,
            },
            Kind::Flag => match raw {
                "true" => Some(Value::Flag(true)),
                "false" => Some(Value::Flag(false)),
                _ => None,
            },
            Kind::Uint => raw.parse::<u32>().ok().map(Value::Uint),
            Kind::Align => raw
                .parse::<u32>()
                .ok()
                .and_then(AlignMode::from_packed)
                .map(Value::Align),
            Kind::Brace => BracePosition::from_literal(raw).map(Value::Brace),
            Kind::Tab => TabPolicy::from_literal(raw).map(Value::Tab),
        }
    }
}

fn encode(value: Value) -> String {
    match value {
        Value::Space(true) => INSERT.to_string(),
        Value::Space(false) => DO_NOT_INSERT.to_string(),
        Value::Flag(flag) => flag.to_string(),
        Value::Uint(n) => n.to_string(),
        Value::Align(mode) => mode.packed().to_string(),
        Value::Brace(position) => position.as_literal().to_string(),
        Value::Tab(policy) => policy.as_literal().to_string(),
    }
}

macro_rules! descriptors {
    ($($kind:ident $field:ident,)*) => {
        static DESCRIPTORS: &[Descriptor] = &[
            $(Descriptor {
                key: concat!("quill.formatter.", stringify!($field)),
                kind: Kind::$kind,
                get: |profile| Value::$kind(profile.$field),
                set: |profile, value| {
                    if let Value::$kind(v) = value {
                        profile.$field = v;
                    }
                },
            },)*
        ];
    };
}

descriptors! {
    Align alignment_for_arguments_in_allocation_expression,
    Align alignment_for_arguments_in_explicit_constructor_call,
    Align alignment_for_arguments_in_method_invocation,
    Align alignment_for_arguments_in_qualified_allocation_expression,
    Align alignment_for_assignment,
    Align alignment_for_binary_expression,
    Align alignment_for_compact_if,
    Align alignment_for_concat_expression,
    Align alignment_for_conditional_expression,
    Align alignment_for_expressions_in_array_initializer,
    Align alignment_for_method_declaration,
    Align alignment_for_multiple_fields,
    Align alignment_for_parameters_in_constructor_declaration,
    Align alignment_for_parameters_in_method_declaration,
    Align alignment_for_selector_in_method_invocation,
    Align alignment_for_superclass_in_type_declaration,
    Align alignment_for_superinterfaces_in_type_declaration,
    Align alignment_for_throws_clause_in_constructor_declaration,
    Align alignment_for_throws_clause_in_method_declaration,
    Flag align_type_members_on_columns,
    Brace brace_position_for_anonymous_type_declaration,
    Brace brace_position_for_array_initializer,
    Brace brace_position_for_block,
    Brace brace_position_for_block_in_case,
    Brace brace_position_for_constructor_declaration,
    Brace brace_position_for_method_declaration,
    Brace brace_position_for_namespace_declaration,
    Brace brace_position_for_switch,
    Brace brace_position_for_type_declaration,
    Uint continuation_indentation,
    Uint continuation_indentation_for_array_initializer,
    Uint blank_lines_after_imports,
    Uint blank_lines_after_package,
    Uint blank_lines_at_beginning_of_method_body,
    Uint blank_lines_before_field,
    Uint blank_lines_before_first_class_body_declaration,
    Uint blank_lines_before_imports,
    Uint blank_lines_before_member_type,
    Uint blank_lines_before_method,
    Uint blank_lines_before_new_chunk,
    Uint blank_lines_before_package,
    Uint blank_lines_between_import_groups,
    Uint blank_lines_between_type_declarations,
    Flag indent_statements_compare_to_block,
    Flag indent_statements_compare_to_body,
    Flag indent_body_declarations_compare_to_type_header,
    Flag indent_body_declarations_compare_to_namespace,
    Flag indent_breaks_compare_to_cases,
    Flag indent_empty_lines,
    Flag indent_switchstatements_compare_to_cases,
    Flag indent_switchstatements_compare_to_switch,
    Uint indentation_size,
    Space insert_new_line_after_label,
    Space insert_new_line_after_namespace_declaration,
    Space insert_new_line_after_opening_brace_in_array_initializer,
    Space insert_new_line_after_opening_brace_in_array_initializer_in_arguments,
    Space insert_new_line_at_end_of_file_if_missing,
    Space insert_new_line_before_catch_in_try_statement,
    Space insert_new_line_before_closing_brace_in_array_initializer,
    Space insert_new_line_before_else_in_if_statement,
    Space insert_new_line_before_finally_in_try_statement,
    Space insert_new_line_before_while_in_do_statement,
    Space insert_new_line_in_empty_anonymous_type_declaration,
    Space insert_new_line_in_empty_block,
    Space insert_new_line_in_empty_method_body,
    Space insert_new_line_in_empty_type_declaration,
    Space insert_space_after_and_in_type_parameter,
    Space insert_space_after_assignment_operator,
    Space insert_space_after_binary_operator,
    Space insert_space_after_closing_angle_bracket_in_type_arguments,
    Space insert_space_after_closing_angle_bracket_in_type_parameters,
    Space insert_space_after_closing_brace_in_block,
    Space insert_space_after_closing_paren_in_cast,
    Space insert_space_after_colon_in_assert,
    Space insert_space_after_colon_in_case,
    Space insert_space_after_colon_in_conditional,
    Space insert_space_after_colon_in_for,
    Space insert_space_after_colon_in_labeled_statement,
    Space insert_space_after_comma_in_allocation_expression,
    Space insert_space_after_comma_in_array_initializer,
    Space insert_space_after_comma_in_constructor_declaration_parameters,
    Space insert_space_after_comma_in_constructor_declaration_throws,
    Space insert_space_after_comma_in_explicit_constructor_call_arguments,
    Space insert_space_after_comma_in_for_increments,
    Space insert_space_after_comma_in_for_inits,
    Space insert_space_after_comma_in_method_declaration_parameters,
    Space insert_space_after_comma_in_method_declaration_throws,
    Space insert_space_after_comma_in_method_invocation_arguments,
    Space insert_space_after_comma_in_multiple_field_declarations,
    Space insert_space_after_comma_in_multiple_local_declarations,
    Space insert_space_after_comma_in_parameterized_type_reference,
    Space insert_space_after_comma_in_superinterfaces,
    Space insert_space_after_comma_in_type_arguments,
    Space insert_space_after_comma_in_type_parameters,
    Space insert_space_after_concat_operator,
    Space insert_space_after_double_arrow_operator,
    Space insert_space_after_double_colon_operator,
    Space insert_space_after_ellipsis,
    Space insert_space_after_object_operator,
    Space insert_space_after_opening_angle_bracket_in_parameterized_type_reference,
    Space insert_space_after_opening_angle_bracket_in_type_arguments,
    Space insert_space_after_opening_angle_bracket_in_type_parameters,
    Space insert_space_after_opening_brace_in_array_initializer,
    Space insert_space_after_opening_bracket_in_array_allocation_expression,
    Space insert_space_after_opening_bracket_in_array_reference,
    Space insert_space_after_opening_paren_in_cast,
    Space insert_space_after_opening_paren_in_catch,
    Space insert_space_after_opening_paren_in_constructor_declaration,
    Space insert_space_after_opening_paren_in_for,
    Space insert_space_after_opening_paren_in_if,
    Space insert_space_after_opening_paren_in_method_declaration,
    Space insert_space_after_opening_paren_in_method_invocation,
    Space insert_space_after_opening_paren_in_parenthesized_expression,
    Space insert_space_after_opening_paren_in_switch,
    Space insert_space_after_opening_paren_in_synchronized,
    Space insert_space_after_opening_paren_in_while,
    Space insert_space_after_postfix_operator,
    Space insert_space_after_prefix_operator,
    Space insert_space_after_question_in_conditional,
    Space insert_space_after_question_in_wildcard,
    Space insert_space_after_semicolon_in_for,
    Space insert_space_after_unary_operator,
    Space insert_space_before_and_in_type_parameter,
    Space insert_space_before_assignment_operator,
    Space insert_space_before_binary_operator,
    Space insert_space_before_closing_angle_bracket_in_parameterized_type_reference,
    Space insert_space_before_closing_angle_bracket_in_type_arguments,
    Space insert_space_before_closing_angle_bracket_in_type_parameters,
    Space insert_space_before_closing_brace_in_array_initializer,
    Space insert_space_before_closing_bracket_in_array_allocation_expression,
    Space insert_space_before_closing_bracket_in_array_reference,
    Space insert_space_before_closing_paren_in_cast,
    Space insert_space_before_closing_paren_in_catch,
    Space insert_space_before_closing_paren_in_constructor_declaration,
    Space insert_space_before_closing_paren_in_for,
    Space insert_space_before_closing_paren_in_if,
    Space insert_space_before_closing_paren_in_method_declaration,
    Space insert_space_before_closing_paren_in_method_invocation,
    Space insert_space_before_closing_paren_in_parenthesized_expression,
    Space insert_space_before_closing_paren_in_switch,
    Space insert_space_before_closing_paren_in_synchronized,
    Space insert_space_before_closing_paren_in_while,
    Space insert_space_before_colon_in_assert,
    Space insert_space_before_colon_in_case,
    Space insert_space_before_colon_in_conditional,
    Space insert_space_before_colon_in_default,
    Space insert_space_before_colon_in_for,
    Space insert_space_before_colon_in_labeled_statement,
    Space insert_space_before_comma_in_allocation_expression,
    Space insert_space_before_comma_in_array_initializer,
    Space insert_space_before_comma_in_constructor_declaration_parameters,
    Space insert_space_before_comma_in_constructor_declaration_throws,
    Space insert_space_before_comma_in_explicit_constructor_call_arguments,
    Space insert_space_before_comma_in_for_increments,
    Space insert_space_before_comma_in_for_inits,
    Space insert_space_before_comma_in_method_declaration_parameters,
    Space insert_space_before_comma_in_method_declaration_throws,
    Space insert_space_before_comma_in_method_invocation_arguments,
    Space insert_space_before_comma_in_multiple_field_declarations,
    Space insert_space_before_comma_in_multiple_local_declarations,
    Space insert_space_before_comma_in_parameterized_type_reference,
    Space insert_space_before_comma_in_superinterfaces,
    Space insert_space_before_comma_in_type_arguments,
    Space insert_space_before_comma_in_type_parameters,
    Space insert_space_before_concat_operator,
    Space insert_space_before_double_arrow_operator,
    Space insert_space_before_double_arrow_operator_with_filler,
    Space insert_space_before_double_colon_operator,
    Space insert_space_before_ellipsis,
    Space insert_space_before_object_operator,
    Space insert_space_before_opening_angle_bracket_in_parameterized_type_reference,
    Space insert_space_before_opening_angle_bracket_in_type_arguments,
    Space insert_space_before_opening_angle_bracket_in_type_parameters,
    Space insert_space_before_opening_brace_in_anonymous_type_declaration,
    Space insert_space_before_opening_brace_in_array_initializer,
    Space insert_space_before_opening_brace_in_block,
    Space insert_space_before_opening_brace_in_constructor_declaration,
    Space insert_space_before_opening_brace_in_method_declaration,
    Space insert_space_before_opening_brace_in_namespace_declaration,
    Space insert_space_before_opening_brace_in_switch,
    Space insert_space_before_opening_brace_in_type_declaration,
    Space insert_space_before_opening_bracket_in_array_allocation_expression,
    Space insert_space_before_opening_bracket_in_array_reference,
    Space insert_space_before_opening_bracket_in_array_type_reference,
    Space insert_space_before_opening_paren_in_catch,
    Space insert_space_before_opening_paren_in_constructor_declaration,
    Space insert_space_before_opening_paren_in_for,
    Space insert_space_before_opening_paren_in_if,
    Space insert_space_before_opening_paren_in_method_declaration,
    Space insert_space_before_opening_paren_in_method_invocation,
    Space insert_space_before_opening_paren_in_parenthesized_expression,
    Space insert_space_before_opening_paren_in_switch,
    Space insert_space_before_opening_paren_in_synchronized,
    Space insert_space_before_opening_paren_in_while,
    Space insert_space_before_parenthesized_expression_in_echo,
    Space insert_space_before_parenthesized_expression_in_return,
    Space insert_space_before_parenthesized_expression_in_throw,
    Space insert_space_before_postfix_operator,
    Space insert_space_before_prefix_operator,
    Space insert_space_before_question_in_conditional,
    Space insert_space_before_question_in_wildcard,
    Space insert_space_before_semicolon,
    Space insert_space_before_semicolon_in_for,
    Space insert_space_before_unary_operator,
    Space insert_space_between_brackets_in_array_type_reference,
    Space insert_space_between_empty_braces_in_array_initializer,
    Space insert_space_between_empty_brackets_in_array_allocation_expression,
    Space insert_space_between_empty_parens_in_constructor_declaration,
    Space insert_space_between_empty_parens_in_method_declaration,
    Space insert_space_between_empty_parens_in_method_invocation,
    Flag compact_else_if,
    Flag keep_else_statement_on_same_line,
    Flag keep_empty_array_initializer_on_one_line,
    Flag keep_guardian_clause_on_one_line,
    Flag keep_simple_if_on_one_line,
    Flag keep_then_statement_on_same_line,
    Flag never_indent_block_comments_on_first_column,
    Flag never_indent_line_comments_on_first_column,
    Uint number_of_empty_lines_to_preserve,
    Flag join_lines_in_comments,
    Flag join_wrapped_lines,
    Flag put_empty_statement_on_new_line,
    Uint page_width,
    Tab tab_char,
    Uint tab_size,
    Flag use_tabs_only_for_leading_indentations,
    Flag wrap_array_in_arguments,
    Flag wrap_before_binary_operator,
    Flag wrap_before_concat_operator,
    Flag wrap_outer_expressions_when_nested,
}

/// The stable wire identifiers of every registered option, in declaration
/// order.
pub fn option_keys() -> impl Iterator<Item = &'static str> {
    DESCRIPTORS.iter().map(|descriptor| descriptor.key)
}

impl FormatProfile {
    /// Apply overrides from a flat wire map.
    ///
    /// Tolerant per key: a missing key changes nothing, a malformed value
    /// restores that field's compiled-in default. Other keys are unaffected
    /// either way.
    pub fn load(&mut self, overrides: &BTreeMap<String, String>) {
        let _ = self.load_impl(overrides);
    }

    /// Exactly [`FormatProfile::load`], but reports which entries were
    /// unknown or had to fall back so a settings surface can show them.
    pub fn try_load(
        &mut self,
        overrides: &BTreeMap<String, String>,
    ) -> Result<(), Vec<ProfileError>> {
        let problems = self.load_impl(overrides);
        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }

    fn load_impl(&mut self, overrides: &BTreeMap<String, String>) -> Vec<ProfileError> {
        let defaults = FormatProfile::default();
        let mut problems = Vec::new();
        for descriptor in DESCRIPTORS {
            let Some(raw) = overrides.get(descriptor.key) else {
                continue;
            };
            match descriptor.kind.decode(raw) {
                Some(value) => (descriptor.set)(self, value),
                None => {
                    (descriptor.set)(self, (descriptor.get)(&defaults));
                    problems.push(ProfileError::InvalidValue {
                        key: descriptor.key.to_string(),
                        value: raw.clone(),
                    });
                }
            }
        }
        for key in overrides.keys() {
            if !DESCRIPTORS.iter().any(|descriptor| descriptor.key == key) {
                problems.push(ProfileError::UnknownKey(key.clone()));
            }
        }
        problems
    }

    /// Encode the profile into the flat wire map (sorted by key).
    pub fn to_map(&self) -> BTreeMap<String, String> {
        DESCRIPTORS
            .iter()
            .map(|descriptor| (descriptor.key.to_string(), encode((descriptor.get)(self))))
            .collect()
    }
}

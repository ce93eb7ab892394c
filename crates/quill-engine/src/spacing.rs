//! Whitespace decision table
//!
//! Every punctuation/operator decision the walker makes goes through one of
//! the closed context enums below, so the same mark in different grammatical
//! roles never shares a knob. Both dispatch functions match exhaustively: a
//! context added to the grammar without a decision here fails to compile,
//! which is the whole point.

use quill_options::FormatProfile;

/// A fully qualified whitespace context: punctuation kind plus grammatical
/// role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceContext {
    Comma(CommaIn),
    OpeningParen(ParenIn),
    ClosingParen(ParenIn),
    OpeningBrace(BraceIn),
    ClosingBrace(BraceIn),
    OpeningBracket(BracketIn),
    ClosingBracket(BracketIn),
    Colon(ColonIn),
    QuestionInConditional,
    Semicolon(SemicolonIn),
    AssignmentOperator,
    BinaryOperator,
    UnaryOperator,
    PrefixOperator,
    PostfixOperator,
    ConcatOperator,
    ObjectOperator,
    ScopeOperator,
    DoubleArrow,
    /// A parenthesized expression directly after `return`/`throw`/`echo`.
    ParenthesizedAfter(KeywordBefore),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommaIn {
    AllocationExpression,
    ArrayInitializer,
    CallArguments,
    ConstructorCallArguments,
    ConstructorParams,
    ConstructorThrows,
    EchoExpressions,
    ForIncrements,
    ForInits,
    MethodParams,
    MethodThrows,
    MultipleFieldDeclarations,
    MultipleLocalDeclarations,
    Superinterfaces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParenIn {
    Cast,
    ConstructorDeclaration,
    For,
    If,
    MethodDeclaration,
    MethodInvocation,
    ParenthesizedExpression,
    Switch,
    While,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BraceIn {
    ArrayInitializer,
    Block,
    ConstructorDeclaration,
    MethodDeclaration,
    NamespaceDeclaration,
    Switch,
    TypeDeclaration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketIn {
    ArrayReference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColonIn {
    Case,
    Conditional,
    Default,
    LabeledStatement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemicolonIn {
    Statement,
    For,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordBefore {
    Echo,
    Return,
    Throw,
}

/// Whether a space goes immediately before the context's token.
pub fn space_before(profile: &FormatProfile, context: SpaceContext) -> bool {
    match context {
        SpaceContext::Comma(role) => match role {
            CommaIn::AllocationExpression => profile.insert_space_before_comma_in_allocation_expression,
            CommaIn::ArrayInitializer => profile.insert_space_before_comma_in_array_initializer,
            CommaIn::CallArguments => {
                profile.insert_space_before_comma_in_method_invocation_arguments
            }
            CommaIn::ConstructorCallArguments => {
                profile.insert_space_before_comma_in_explicit_constructor_call_arguments
            }
            CommaIn::ConstructorParams => {
                profile.insert_space_before_comma_in_constructor_declaration_parameters
            }
            CommaIn::ConstructorThrows => {
                profile.insert_space_before_comma_in_constructor_declaration_throws
            }
            // The echo list has no knob of its own.
            CommaIn::EchoExpressions => false,
            CommaIn::ForIncrements => profile.insert_space_before_comma_in_for_increments,
            CommaIn::ForInits => profile.insert_space_before_comma_in_for_inits,
            CommaIn::MethodParams => {
                profile.insert_space_before_comma_in_method_declaration_parameters
            }
            CommaIn::MethodThrows => profile.insert_space_before_comma_in_method_declaration_throws,
            CommaIn::MultipleFieldDeclarations => {
                profile.insert_space_before_comma_in_multiple_field_declarations
            }
            CommaIn::MultipleLocalDeclarations => {
                profile.insert_space_before_comma_in_multiple_local_declarations
            }
            CommaIn::Superinterfaces => profile.insert_space_before_comma_in_superinterfaces,
        },
        SpaceContext::OpeningParen(role) => match role {
            // No knob: a cast hugs its parenthesis.
            ParenIn::Cast => false,
            ParenIn::ConstructorDeclaration => {
                profile.insert_space_before_opening_paren_in_constructor_declaration
            }
            ParenIn::For => profile.insert_space_before_opening_paren_in_for,
            ParenIn::If => profile.insert_space_before_opening_paren_in_if,
            ParenIn::MethodDeclaration => {
                profile.insert_space_before_opening_paren_in_method_declaration
            }
            ParenIn::MethodInvocation => {
                profile.insert_space_before_opening_paren_in_method_invocation
            }
            ParenIn::ParenthesizedExpression => {
                profile.insert_space_before_opening_paren_in_parenthesized_expression
            }
            ParenIn::Switch => profile.insert_space_before_opening_paren_in_switch,
            ParenIn::While => profile.insert_space_before_opening_paren_in_while,
        },
        SpaceContext::ClosingParen(role) => match role {
            ParenIn::Cast => profile.insert_space_before_closing_paren_in_cast,
            ParenIn::ConstructorDeclaration => {
                profile.insert_space_before_closing_paren_in_constructor_declaration
            }
            ParenIn::For => profile.insert_space_before_closing_paren_in_for,
            ParenIn::If => profile.insert_space_before_closing_paren_in_if,
            ParenIn::MethodDeclaration => {
                profile.insert_space_before_closing_paren_in_method_declaration
            }
            ParenIn::MethodInvocation => {
                profile.insert_space_before_closing_paren_in_method_invocation
            }
            ParenIn::ParenthesizedExpression => {
                profile.insert_space_before_closing_paren_in_parenthesized_expression
            }
            ParenIn::Switch => profile.insert_space_before_closing_paren_in_switch,
            ParenIn::While => profile.insert_space_before_closing_paren_in_while,
        },
        SpaceContext::OpeningBrace(role) => match role {
            BraceIn::ArrayInitializer => {
                profile.insert_space_before_opening_brace_in_array_initializer
            }
            BraceIn::Block => profile.insert_space_before_opening_brace_in_block,
            BraceIn::ConstructorDeclaration => {
                profile.insert_space_before_opening_brace_in_constructor_declaration
            }
            BraceIn::MethodDeclaration => {
                profile.insert_space_before_opening_brace_in_method_declaration
            }
            BraceIn::NamespaceDeclaration => {
                profile.insert_space_before_opening_brace_in_namespace_declaration
            }
            BraceIn::Switch => profile.insert_space_before_opening_brace_in_switch,
            BraceIn::TypeDeclaration => {
                profile.insert_space_before_opening_brace_in_type_declaration
            }
        },
        SpaceContext::ClosingBrace(role) => match role {
            BraceIn::ArrayInitializer => {
                profile.insert_space_before_closing_brace_in_array_initializer
            }
            // Statement braces close at the start of their own line.
            BraceIn::Block
            | BraceIn::ConstructorDeclaration
            | BraceIn::MethodDeclaration
            | BraceIn::NamespaceDeclaration
            | BraceIn::Switch
            | BraceIn::TypeDeclaration => false,
        },
        SpaceContext::OpeningBracket(role) => match role {
            BracketIn::ArrayReference => {
                profile.insert_space_before_opening_bracket_in_array_reference
            }
        },
        SpaceContext::ClosingBracket(role) => match role {
            BracketIn::ArrayReference => {
                profile.insert_space_before_closing_bracket_in_array_reference
            }
        },
        SpaceContext::Colon(role) => match role {
            ColonIn::Case => profile.insert_space_before_colon_in_case,
            ColonIn::Conditional => profile.insert_space_before_colon_in_conditional,
            ColonIn::Default => profile.insert_space_before_colon_in_default,
            ColonIn::LabeledStatement => profile.insert_space_before_colon_in_labeled_statement,
        },
        SpaceContext::QuestionInConditional => profile.insert_space_before_question_in_conditional,
        SpaceContext::Semicolon(role) => match role {
            SemicolonIn::Statement => profile.insert_space_before_semicolon,
            SemicolonIn::For => profile.insert_space_before_semicolon_in_for,
        },
        SpaceContext::AssignmentOperator => profile.insert_space_before_assignment_operator,
        SpaceContext::BinaryOperator => profile.insert_space_before_binary_operator,
        SpaceContext::UnaryOperator => profile.insert_space_before_unary_operator,
        SpaceContext::PrefixOperator => profile.insert_space_before_prefix_operator,
        SpaceContext::PostfixOperator => profile.insert_space_before_postfix_operator,
        SpaceContext::ConcatOperator => profile.insert_space_before_concat_operator,
        SpaceContext::ObjectOperator => profile.insert_space_before_object_operator,
        SpaceContext::ScopeOperator => profile.insert_space_before_double_colon_operator,
        SpaceContext::DoubleArrow => profile.insert_space_before_double_arrow_operator,
        SpaceContext::ParenthesizedAfter(keyword) => match keyword {
            KeywordBefore::Echo => profile.insert_space_before_parenthesized_expression_in_echo,
            KeywordBefore::Return => profile.insert_space_before_parenthesized_expression_in_return,
            KeywordBefore::Throw => profile.insert_space_before_parenthesized_expression_in_throw,
        },
    }
}

/// Whether a space goes immediately after the context's token.
pub fn space_after(profile: &FormatProfile, context: SpaceContext) -> bool {
    match context {
        SpaceContext::Comma(role) => match role {
            CommaIn::AllocationExpression => profile.insert_space_after_comma_in_allocation_expression,
            CommaIn::ArrayInitializer => profile.insert_space_after_comma_in_array_initializer,
            CommaIn::CallArguments => {
                profile.insert_space_after_comma_in_method_invocation_arguments
            }
            CommaIn::ConstructorCallArguments => {
                profile.insert_space_after_comma_in_explicit_constructor_call_arguments
            }
            CommaIn::ConstructorParams => {
                profile.insert_space_after_comma_in_constructor_declaration_parameters
            }
            CommaIn::ConstructorThrows => {
                profile.insert_space_after_comma_in_constructor_declaration_throws
            }
            CommaIn::EchoExpressions => true,
            CommaIn::ForIncrements => profile.insert_space_after_comma_in_for_increments,
            CommaIn::ForInits => profile.insert_space_after_comma_in_for_inits,
            CommaIn::MethodParams => {
                profile.insert_space_after_comma_in_method_declaration_parameters
            }
            CommaIn::MethodThrows => profile.insert_space_after_comma_in_method_declaration_throws,
            CommaIn::MultipleFieldDeclarations => {
                profile.insert_space_after_comma_in_multiple_field_declarations
            }
            CommaIn::MultipleLocalDeclarations => {
                profile.insert_space_after_comma_in_multiple_local_declarations
            }
            CommaIn::Superinterfaces => profile.insert_space_after_comma_in_superinterfaces,
        },
        SpaceContext::OpeningParen(role) => match role {
            ParenIn::Cast => profile.insert_space_after_opening_paren_in_cast,
            ParenIn::ConstructorDeclaration => {
                profile.insert_space_after_opening_paren_in_constructor_declaration
            }
            ParenIn::For => profile.insert_space_after_opening_paren_in_for,
            ParenIn::If => profile.insert_space_after_opening_paren_in_if,
            ParenIn::MethodDeclaration => {
                profile.insert_space_after_opening_paren_in_method_declaration
            }
            ParenIn::MethodInvocation => {
                profile.insert_space_after_opening_paren_in_method_invocation
            }
            ParenIn::ParenthesizedExpression => {
                profile.insert_space_after_opening_paren_in_parenthesized_expression
            }
            ParenIn::Switch => profile.insert_space_after_opening_paren_in_switch,
            ParenIn::While => profile.insert_space_after_opening_paren_in_while,
        },
        SpaceContext::ClosingParen(role) => match role {
            ParenIn::Cast => profile.insert_space_after_closing_paren_in_cast,
            // What follows a closing parenthesis owns the decision.
            ParenIn::ConstructorDeclaration
            | ParenIn::For
            | ParenIn::If
            | ParenIn::MethodDeclaration
            | ParenIn::MethodInvocation
            | ParenIn::ParenthesizedExpression
            | ParenIn::Switch
            | ParenIn::While => false,
        },
        SpaceContext::OpeningBrace(role) => match role {
            BraceIn::ArrayInitializer => {
                profile.insert_space_after_opening_brace_in_array_initializer
            }
            BraceIn::Block
            | BraceIn::ConstructorDeclaration
            | BraceIn::MethodDeclaration
            | BraceIn::NamespaceDeclaration
            | BraceIn::Switch
            | BraceIn::TypeDeclaration => false,
        },
        SpaceContext::ClosingBrace(role) => match role {
            BraceIn::Block => profile.insert_space_after_closing_brace_in_block,
            BraceIn::ArrayInitializer
            | BraceIn::ConstructorDeclaration
            | BraceIn::MethodDeclaration
            | BraceIn::NamespaceDeclaration
            | BraceIn::Switch
            | BraceIn::TypeDeclaration => false,
        },
        SpaceContext::OpeningBracket(role) => match role {
            BracketIn::ArrayReference => {
                profile.insert_space_after_opening_bracket_in_array_reference
            }
        },
        SpaceContext::ClosingBracket(role) => match role {
            BracketIn::ArrayReference => false,
        },
        SpaceContext::Colon(role) => match role {
            ColonIn::Case => profile.insert_space_after_colon_in_case,
            ColonIn::Conditional => profile.insert_space_after_colon_in_conditional,
            // The case body starts on its own line.
            ColonIn::Default => false,
            ColonIn::LabeledStatement => profile.insert_space_after_colon_in_labeled_statement,
        },
        SpaceContext::QuestionInConditional => profile.insert_space_after_question_in_conditional,
        SpaceContext::Semicolon(role) => match role {
            // End of the statement's line.
            SemicolonIn::Statement => false,
            SemicolonIn::For => profile.insert_space_after_semicolon_in_for,
        },
        SpaceContext::AssignmentOperator => profile.insert_space_after_assignment_operator,
        SpaceContext::BinaryOperator => profile.insert_space_after_binary_operator,
        SpaceContext::UnaryOperator => profile.insert_space_after_unary_operator,
        SpaceContext::PrefixOperator => profile.insert_space_after_prefix_operator,
        SpaceContext::PostfixOperator => profile.insert_space_after_postfix_operator,
        SpaceContext::ConcatOperator => profile.insert_space_after_concat_operator,
        SpaceContext::ObjectOperator => profile.insert_space_after_object_operator,
        SpaceContext::ScopeOperator => profile.insert_space_after_double_colon_operator,
        SpaceContext::DoubleArrow => profile.insert_space_after_double_arrow_operator,
        SpaceContext::ParenthesizedAfter(_) => false,
    }
}

#[cfg(test)]
pub(crate) fn all_contexts() -> Vec<SpaceContext> {
    let mut contexts = Vec::new();
    for role in [
        CommaIn::AllocationExpression,
        CommaIn::ArrayInitializer,
        CommaIn::CallArguments,
        CommaIn::ConstructorCallArguments,
        CommaIn::ConstructorParams,
        CommaIn::ConstructorThrows,
        CommaIn::EchoExpressions,
        CommaIn::ForIncrements,
        CommaIn::ForInits,
        CommaIn::MethodParams,
        CommaIn::MethodThrows,
        CommaIn::MultipleFieldDeclarations,
        CommaIn::MultipleLocalDeclarations,
        CommaIn::Superinterfaces,
    ] {
        contexts.push(SpaceContext::Comma(role));
    }
    for role in [
        ParenIn::Cast,
        ParenIn::ConstructorDeclaration,
        ParenIn::For,
        ParenIn::If,
        ParenIn::MethodDeclaration,
        ParenIn::MethodInvocation,
        ParenIn::ParenthesizedExpression,
        ParenIn::Switch,
        ParenIn::While,
    ] {
        contexts.push(SpaceContext::OpeningParen(role));
        contexts.push(SpaceContext::ClosingParen(role));
    }
    for role in [
        BraceIn::ArrayInitializer,
        BraceIn::Block,
        BraceIn::ConstructorDeclaration,
        BraceIn::MethodDeclaration,
        BraceIn::NamespaceDeclaration,
        BraceIn::Switch,
        BraceIn::TypeDeclaration,
    ] {
        contexts.push(SpaceContext::OpeningBrace(role));
        contexts.push(SpaceContext::ClosingBrace(role));
    }
    contexts.push(SpaceContext::OpeningBracket(BracketIn::ArrayReference));
    contexts.push(SpaceContext::ClosingBracket(BracketIn::ArrayReference));
    for role in [
        ColonIn::Case,
        ColonIn::Conditional,
        ColonIn::Default,
        ColonIn::LabeledStatement,
    ] {
        contexts.push(SpaceContext::Colon(role));
    }
    contexts.push(SpaceContext::QuestionInConditional);
    contexts.push(SpaceContext::Semicolon(SemicolonIn::Statement));
    contexts.push(SpaceContext::Semicolon(SemicolonIn::For));
    contexts.extend([
        SpaceContext::AssignmentOperator,
        SpaceContext::BinaryOperator,
        SpaceContext::UnaryOperator,
        SpaceContext::PrefixOperator,
        SpaceContext::PostfixOperator,
        SpaceContext::ConcatOperator,
        SpaceContext::ObjectOperator,
        SpaceContext::ScopeOperator,
        SpaceContext::DoubleArrow,
        SpaceContext::ParenthesizedAfter(KeywordBefore::Echo),
        SpaceContext::ParenthesizedAfter(KeywordBefore::Return),
        SpaceContext::ParenthesizedAfter(KeywordBefore::Throw),
    ]);
    contexts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_context_has_a_before_and_after_decision() {
        let profile = FormatProfile::default();
        let contexts = all_contexts();
        assert!(contexts.len() > 60);
        for context in contexts {
            // Totality is enforced at compile time; this exercises every arm
            // so a panic or a debug assertion in either table would surface.
            let _ = space_before(&profile, context);
            let _ = space_after(&profile, context);
        }
    }

    #[test]
    fn same_punctuation_in_different_roles_is_independent() {
        let mut profile = FormatProfile::default();
        profile.insert_space_after_comma_in_array_initializer = false;
        assert!(!space_after(
            &profile,
            SpaceContext::Comma(CommaIn::ArrayInitializer)
        ));
        assert!(space_after(
            &profile,
            SpaceContext::Comma(CommaIn::CallArguments)
        ));
        assert!(space_after(
            &profile,
            SpaceContext::Comma(CommaIn::MethodParams)
        ));
    }

    #[test]
    fn default_comma_spacing_matches_the_compiled_in_style() {
        let profile = FormatProfile::default();
        let context = SpaceContext::Comma(CommaIn::CallArguments);
        assert!(!space_before(&profile, context));
        assert!(space_after(&profile, context));
    }
}

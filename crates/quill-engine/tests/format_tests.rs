//! Formatting engine tests - profile-driven layout over hand-built trees

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use quill_engine::{format, format_edits, is_formatted};
use quill_options::{
    AlignMode, BracePosition, FormatProfile, TabPolicy, DO_NOT_INSERT, INSERT,
};
use quill_syntax::*;
use rstest::rstest;

/// Default style, spelled with spaces so expectations read plainly.
fn profile() -> FormatProfile {
    let mut profile = FormatProfile::default();
    profile.tab_char = TabPolicy::Space;
    profile
}

fn unit_of(statements: Vec<Stmt>) -> SourceUnit {
    SourceUnit {
        items: statements.into_iter().map(Item::Stmt).collect(),
    }
}

fn fmt_stmts(statements: Vec<Stmt>, profile: &FormatProfile) -> String {
    format(&unit_of(statements), profile)
}

fn call_stmt(name: &str, args: Vec<Expr>) -> Stmt {
    Stmt::Expr(Expr::call(name, args))
}

fn block_of(statements: Vec<Stmt>) -> Stmt {
    Stmt::Block(Block { statements })
}

fn if_stmt(cond: Expr, then_branch: Stmt, else_branch: Option<Stmt>) -> Stmt {
    Stmt::If(IfStmt {
        cond,
        then_branch: Box::new(then_branch),
        else_branch: else_branch.map(Box::new),
    })
}

// === Whitespace decisions ===

#[test]
fn comma_spacing_in_call_arguments() {
    let out = fmt_stmts(
        vec![call_stmt("foo", vec![Expr::lit("1"), Expr::lit("2"), Expr::lit("3")])],
        &profile(),
    );
    assert_eq!(out, "foo(1, 2, 3);\n");
}

#[test]
fn comma_spacing_follows_overrides_loaded_from_the_wire() {
    let mut overrides = BTreeMap::new();
    overrides.insert(
        "quill.formatter.insert_space_before_comma_in_method_invocation_arguments".to_string(),
        INSERT.to_string(),
    );
    overrides.insert(
        "quill.formatter.insert_space_after_comma_in_method_invocation_arguments".to_string(),
        DO_NOT_INSERT.to_string(),
    );
    let mut style = profile();
    style.load(&overrides);
    let out = fmt_stmts(
        vec![call_stmt("foo", vec![Expr::lit("1"), Expr::lit("2"), Expr::lit("3")])],
        &style,
    );
    assert_eq!(out, "foo(1 ,2 ,3);\n");
}

#[test]
fn empty_invocation_parens_stay_tight_by_default() {
    let out = fmt_stmts(vec![call_stmt("foo", vec![])], &profile());
    assert_eq!(out, "foo();\n");
}

#[test]
fn empty_invocation_parens_can_hold_a_space() {
    let mut style = profile();
    style.insert_space_between_empty_parens_in_method_invocation = true;
    let out = fmt_stmts(vec![call_stmt("foo", vec![])], &style);
    assert_eq!(out, "foo( );\n");
}

#[test]
fn invocation_paren_spacing_is_independent_of_if_paren_spacing() {
    let mut style = profile();
    style.insert_space_before_opening_paren_in_method_invocation = true;
    style.insert_space_before_opening_paren_in_if = false;
    let out = fmt_stmts(
        vec![if_stmt(
            Expr::ident("x"),
            block_of(vec![call_stmt("y", vec![])]),
            None,
        )],
        &style,
    );
    assert_eq!(out, "if(x) {\n    y ();\n}\n");
}

#[test]
fn cast_spacing() {
    let out = fmt_stmts(
        vec![Stmt::Expr(Expr::Cast {
            ty: "int".to_string(),
            operand: Box::new(Expr::ident("x")),
        })],
        &profile(),
    );
    assert_eq!(out, "(int) x;\n");
}

#[test]
fn scope_operator_spacing() {
    let mut style = profile();
    style.insert_space_before_double_colon_operator = true;
    style.insert_space_after_double_colon_operator = true;
    let out = fmt_stmts(
        vec![Stmt::Expr(Expr::StaticCall {
            scope: "Foo".to_string(),
            method: "bar".to_string(),
            args: vec![Expr::lit("1")],
        })],
        &style,
    );
    assert_eq!(out, "Foo :: bar(1);\n");
}

#[test]
fn array_reference_spacing() {
    let mut style = profile();
    style.insert_space_after_opening_bracket_in_array_reference = true;
    style.insert_space_before_closing_bracket_in_array_reference = true;
    let out = fmt_stmts(
        vec![Stmt::Expr(Expr::Index {
            target: Box::new(Expr::ident("rows")),
            index: Box::new(Expr::lit("0")),
        })],
        &style,
    );
    assert_eq!(out, "rows[ 0 ];\n");
}

#[rstest]
#[case(true, "echo (x);\n")]
#[case(false, "echo(x);\n")]
fn echo_spacing_before_a_parenthesized_expression(#[case] insert: bool, #[case] expected: &str) {
    let mut style = profile();
    style.insert_space_before_parenthesized_expression_in_echo = insert;
    let out = fmt_stmts(
        vec![Stmt::Echo(vec![Expr::Paren(Box::new(Expr::ident("x")))])],
        &style,
    );
    assert_eq!(out, expected);
}

#[test]
fn echo_renders_its_expression_list() {
    let out = fmt_stmts(
        vec![Stmt::Echo(vec![Expr::lit("'a'"), Expr::ident("b")])],
        &profile(),
    );
    assert_eq!(out, "echo 'a', b;\n");
}

#[test]
fn double_arrow_spacing_in_array_entries() {
    let out = fmt_stmts(
        vec![Stmt::Expr(Expr::ArrayLit {
            entries: vec![
                ArrayEntry {
                    key: Some(Expr::lit("'a'")),
                    value: Expr::lit("1"),
                },
                ArrayEntry {
                    key: Some(Expr::lit("'b'")),
                    value: Expr::lit("2"),
                },
            ],
        })],
        &profile(),
    );
    assert_eq!(out, "{'a' => 1, 'b' => 2};\n");
}

// === Alignment ===

#[test]
fn one_per_line_arguments_split_despite_ample_width() {
    let mut style = profile();
    style.alignment_for_arguments_in_method_invocation = AlignMode::ONE_PER_LINE;
    let out = fmt_stmts(
        vec![call_stmt("foo", vec![Expr::lit("1"), Expr::lit("2"), Expr::lit("3")])],
        &style,
    );
    assert_eq!(out, "foo(\n        1,\n        2,\n        3);\n");
}

#[test]
fn compact_arguments_wrap_at_the_page_width() {
    let mut style = profile();
    style.page_width = 24;
    let out = fmt_stmts(
        vec![call_stmt(
            "process",
            vec![
                Expr::ident("alpha"),
                Expr::ident("beta"),
                Expr::ident("gamma"),
            ],
        )],
        &style,
    );
    // "process(alpha, beta," is 20 columns; gamma overflows and wraps to
    // the continuation indent of two units.
    assert_eq!(out, "process(alpha, beta,\n        gamma);\n");
}

#[test]
fn binary_chains_wrap_before_the_operator() {
    let mut style = profile();
    style.page_width = 15;
    let out = fmt_stmts(
        vec![Stmt::Expr(Expr::Binary {
            op: BinaryOp::Add,
            operands: vec![
                Expr::ident("alpha"),
                Expr::ident("beta"),
                Expr::ident("gamma"),
            ],
        })],
        &style,
    );
    assert_eq!(out, "alpha + beta\n        + gamma;\n");
}

#[test]
fn binary_chains_can_leave_the_operator_behind() {
    let mut style = profile();
    style.page_width = 15;
    style.wrap_before_binary_operator = false;
    let out = fmt_stmts(
        vec![Stmt::Expr(Expr::Binary {
            op: BinaryOp::Add,
            operands: vec![
                Expr::ident("alpha"),
                Expr::ident("beta"),
                Expr::ident("gamma"),
            ],
        })],
        &style,
    );
    assert_eq!(out, "alpha + beta +\n        gamma;\n");
}

#[test]
fn concat_chains_use_their_own_spacing_and_mode() {
    let mut style = profile();
    style.insert_space_before_concat_operator = false;
    style.insert_space_after_concat_operator = false;
    let out = fmt_stmts(
        vec![Stmt::Expr(Expr::Concat {
            operands: vec![Expr::lit("'a'"), Expr::ident("b")],
        })],
        &style,
    );
    assert_eq!(out, "'a'.b;\n");
}

#[test]
fn conditional_branches_fit_inline() {
    let out = fmt_stmts(
        vec![Stmt::Expr(Expr::Conditional {
            cond: Box::new(Expr::ident("a")),
            then_value: Box::new(Expr::ident("b")),
            else_value: Box::new(Expr::ident("c")),
        })],
        &profile(),
    );
    assert_eq!(out, "a ? b : c;\n");
}

#[test]
fn conditional_branches_align_when_split() {
    let mut style = profile();
    style.page_width = 20;
    let out = fmt_stmts(
        vec![Stmt::Expr(Expr::Conditional {
            cond: Box::new(Expr::ident("verylongcondition")),
            then_value: Box::new(Expr::ident("second")),
            else_value: Box::new(Expr::ident("third")),
        })],
        &style,
    );
    assert_eq!(out, "verylongcondition\n        ? second\n        : third;\n");
}

#[test]
fn forced_conditional_split_ignores_available_room() {
    let mut style = profile();
    style.alignment_for_conditional_expression = AlignMode::NEXT_PER_LINE.with_force_split();
    let out = fmt_stmts(
        vec![Stmt::Expr(Expr::Conditional {
            cond: Box::new(Expr::ident("a")),
            then_value: Box::new(Expr::ident("b")),
            else_value: Box::new(Expr::ident("c")),
        })],
        &style,
    );
    // The forced break lands before the fragment; the branches then pack
    // compactly on the continuation line.
    assert_eq!(out, "a\n        ? b : c;\n");
}

#[test]
fn assignment_accepts_overflow_by_default() {
    let mut style = profile();
    style.page_width = 10;
    let out = fmt_stmts(
        vec![Stmt::Expr(Expr::Assign {
            target: Box::new(Expr::ident("x")),
            op: AssignOp::Assign,
            value: Box::new(Expr::ident("a_rather_long_right_hand_side")),
        })],
        &style,
    );
    assert_eq!(out, "x = a_rather_long_right_hand_side;\n");
}

#[test]
fn assignment_can_break_before_its_value() {
    let mut style = profile();
    style.page_width = 10;
    style.alignment_for_assignment = AlignMode::NEXT_PER_LINE;
    let out = fmt_stmts(
        vec![Stmt::Expr(Expr::Assign {
            target: Box::new(Expr::ident("x")),
            op: AssignOp::Assign,
            value: Box::new(Expr::ident("a_rather_long_right_hand_side")),
        })],
        &style,
    );
    assert_eq!(out, "x =\n        a_rather_long_right_hand_side;\n");
}

#[test]
fn selector_chains_wrap_as_one_fragment() {
    let mut style = profile();
    style.page_width = 12;
    let chain = Expr::MethodCall {
        receiver: Box::new(Expr::MethodCall {
            receiver: Box::new(Expr::ident("obj")),
            method: "alpha".to_string(),
            args: vec![],
        }),
        method: "beta".to_string(),
        args: vec![],
    };
    let out = fmt_stmts(vec![Stmt::Expr(chain)], &style);
    assert_eq!(out, "obj->alpha()\n        ->beta();\n");
}

#[test]
fn explicit_constructor_calls_use_their_own_alignment() {
    let mut style = profile();
    style.alignment_for_arguments_in_explicit_constructor_call = AlignMode::ONE_PER_LINE;
    let out = fmt_stmts(
        vec![Stmt::Expr(Expr::StaticCall {
            scope: "parent".to_string(),
            method: "__construct".to_string(),
            args: vec![Expr::lit("1"), Expr::lit("2")],
        })],
        &style,
    );
    assert_eq!(
        out,
        "parent::__construct(\n        1,\n        2);\n"
    );
}

#[test]
fn allocation_arguments_have_their_own_comma_context() {
    let mut style = profile();
    style.insert_space_before_comma_in_allocation_expression = true;
    let out = fmt_stmts(
        vec![Stmt::Expr(Expr::New {
            class: Box::new(Expr::ident("Foo")),
            args: vec![Expr::lit("1"), Expr::lit("2")],
        })],
        &style,
    );
    assert_eq!(out, "new Foo(1 , 2);\n");
}

#[test]
fn overlong_tokens_are_never_truncated() {
    let mut style = profile();
    style.page_width = 8;
    let name = "an_identifier_much_wider_than_any_page";
    let out = fmt_stmts(vec![Stmt::Expr(Expr::ident(name))], &style);
    assert_eq!(out, format!("{name};\n"));
}

// === Braces and statement shapes ===

#[test]
fn block_braces_default_to_the_header_line() {
    let out = fmt_stmts(
        vec![if_stmt(
            Expr::ident("x"),
            block_of(vec![call_stmt("y", vec![])]),
            None,
        )],
        &profile(),
    );
    assert_eq!(out, "if (x) {\n    y();\n}\n");
}

#[test]
fn block_braces_can_move_to_their_own_line() {
    let mut style = profile();
    style.brace_position_for_block = BracePosition::NextLine;
    let out = fmt_stmts(
        vec![if_stmt(
            Expr::ident("x"),
            block_of(vec![call_stmt("y", vec![])]),
            None,
        )],
        &style,
    );
    assert_eq!(out, "if (x)\n{\n    y();\n}\n");
}

#[test]
fn shifted_braces_indent_the_whole_block() {
    let mut style = profile();
    style.brace_position_for_block = BracePosition::NextLineShifted;
    let out = fmt_stmts(
        vec![if_stmt(
            Expr::ident("x"),
            block_of(vec![call_stmt("y", vec![])]),
            None,
        )],
        &style,
    );
    assert_eq!(out, "if (x)\n    {\n        y();\n    }\n");
}

#[test]
fn else_cuddles_by_default() {
    let out = fmt_stmts(
        vec![if_stmt(
            Expr::ident("x"),
            block_of(vec![call_stmt("y", vec![])]),
            Some(block_of(vec![call_stmt("z", vec![])])),
        )],
        &profile(),
    );
    assert_eq!(out, "if (x) {\n    y();\n} else {\n    z();\n}\n");
}

#[test]
fn else_moves_to_its_own_line_on_request() {
    let mut style = profile();
    style.insert_new_line_before_else_in_if_statement = true;
    let out = fmt_stmts(
        vec![if_stmt(
            Expr::ident("x"),
            block_of(vec![call_stmt("y", vec![])]),
            Some(block_of(vec![call_stmt("z", vec![])])),
        )],
        &style,
    );
    assert_eq!(out, "if (x) {\n    y();\n}\nelse {\n    z();\n}\n");
}

#[test]
fn else_if_chains_stay_compact() {
    let out = fmt_stmts(
        vec![if_stmt(
            Expr::ident("x"),
            block_of(vec![call_stmt("y", vec![])]),
            Some(if_stmt(
                Expr::ident("w"),
                block_of(vec![call_stmt("z", vec![])]),
                None,
            )),
        )],
        &profile(),
    );
    assert_eq!(out, "if (x) {\n    y();\n} else if (w) {\n    z();\n}\n");
}

#[test]
fn guardian_clauses_stay_on_the_header_line() {
    let mut style = profile();
    style.keep_guardian_clause_on_one_line = true;
    let out = fmt_stmts(
        vec![if_stmt(
            Expr::ident("x"),
            block_of(vec![Stmt::Return(Some(Expr::ident("y")))]),
            None,
        )],
        &style,
    );
    assert_eq!(out, "if (x) { return y; }\n");
}

#[test]
fn simple_ifs_can_keep_their_statement_inline() {
    let mut style = profile();
    style.keep_simple_if_on_one_line = true;
    let out = fmt_stmts(
        vec![if_stmt(
            Expr::ident("x"),
            call_stmt("y", vec![]),
            None,
        )],
        &style,
    );
    assert_eq!(out, "if (x) y();\n");
}

#[test]
fn a_lone_then_statement_gets_its_own_indented_line() {
    let out = fmt_stmts(
        vec![if_stmt(Expr::ident("x"), call_stmt("y", vec![]), None)],
        &profile(),
    );
    assert_eq!(out, "if (x)\n    y();\n");
}

#[test]
fn empty_blocks_break_by_default() {
    let out = fmt_stmts(vec![block_of(vec![])], &profile());
    assert_eq!(out, "{\n}\n");
}

#[test]
fn empty_blocks_can_stay_closed() {
    let mut style = profile();
    style.insert_new_line_in_empty_block = false;
    let out = fmt_stmts(vec![block_of(vec![])], &style);
    assert_eq!(out, "{}\n");
}

#[test]
fn do_while_cuddles_its_condition() {
    let out = fmt_stmts(
        vec![Stmt::DoWhile(DoWhileStmt {
            body: Box::new(block_of(vec![call_stmt("x", vec![])])),
            cond: Expr::ident("y"),
        })],
        &profile(),
    );
    assert_eq!(out, "do {\n    x();\n} while (y);\n");
}

#[test]
fn do_while_condition_moves_down_on_request() {
    let mut style = profile();
    style.insert_new_line_before_while_in_do_statement = true;
    let out = fmt_stmts(
        vec![Stmt::DoWhile(DoWhileStmt {
            body: Box::new(block_of(vec![call_stmt("x", vec![])])),
            cond: Expr::ident("y"),
        })],
        &style,
    );
    assert_eq!(out, "do {\n    x();\n}\nwhile (y);\n");
}

#[test]
fn for_statement_spacing() {
    let out = fmt_stmts(
        vec![Stmt::For(ForStmt {
            inits: vec![Expr::Assign {
                target: Box::new(Expr::ident("i")),
                op: AssignOp::Assign,
                value: Box::new(Expr::lit("0")),
            }],
            cond: Some(Expr::Binary {
                op: BinaryOp::Lt,
                operands: vec![Expr::ident("i"), Expr::lit("10")],
            }),
            updates: vec![Expr::Postfix {
                target: Box::new(Expr::ident("i")),
                op: StepOp::Inc,
            }],
            body: Box::new(block_of(vec![call_stmt("x", vec![])])),
        })],
        &profile(),
    );
    assert_eq!(out, "for (i = 0; i < 10; i++) {\n    x();\n}\n");
}

#[test]
fn switch_cases_follow_the_indentation_toggles() {
    let switch = Stmt::Switch(SwitchStmt {
        scrutinee: Expr::ident("x"),
        cases: vec![
            SwitchCase {
                label: CaseLabel::Case(Expr::lit("1")),
                body: vec![call_stmt("foo", vec![]), Stmt::Break(None)],
            },
            SwitchCase {
                label: CaseLabel::Default,
                body: vec![call_stmt("bar", vec![])],
            },
        ],
    });
    let out = fmt_stmts(vec![switch.clone()], &profile());
    assert_eq!(
        out,
        "switch (x) {\ncase 1:\n    foo();\n    break;\ndefault:\n    bar();\n}\n"
    );

    let mut style = profile();
    style.indent_switchstatements_compare_to_switch = true;
    let out = fmt_stmts(vec![switch], &style);
    assert_eq!(
        out,
        "switch (x) {\n    case 1:\n        foo();\n        break;\n    default:\n        bar();\n}\n"
    );
}

#[test]
fn labels_keep_their_statement_unless_told_otherwise() {
    let labeled = Stmt::Labeled {
        label: "retry".to_string(),
        body: Box::new(call_stmt("x", vec![])),
    };
    assert_eq!(fmt_stmts(vec![labeled.clone()], &profile()), "retry: x();\n");

    let mut style = profile();
    style.insert_new_line_after_label = true;
    assert_eq!(fmt_stmts(vec![labeled], &style), "retry:\nx();\n");
}

// === Array initializers ===

#[test]
fn array_initializers_wrap_with_their_own_continuation_width() {
    let mut style = profile();
    style.page_width = 16;
    style.continuation_indentation_for_array_initializer = 1;
    let entries = ["alpha", "beta", "gamma"]
        .iter()
        .map(|name| ArrayEntry {
            key: None,
            value: Expr::ident(name),
        })
        .collect();
    let out = fmt_stmts(vec![Stmt::Expr(Expr::ArrayLit { entries })], &style);
    assert_eq!(out, "{alpha, beta,\n    gamma};\n");
}

#[test]
fn split_array_initializers_can_break_around_the_braces() {
    let mut style = profile();
    style.page_width = 16;
    style.insert_new_line_after_opening_brace_in_array_initializer = true;
    style.insert_new_line_before_closing_brace_in_array_initializer = true;
    let entries = ["alpha", "beta", "gamma"]
        .iter()
        .map(|name| ArrayEntry {
            key: None,
            value: Expr::ident(name),
        })
        .collect();
    let out = fmt_stmts(vec![Stmt::Expr(Expr::ArrayLit { entries })], &style);
    // Once the brace break engages, the narrow page fits one entry per
    // continuation line.
    assert_eq!(out, "{\n        alpha,\n        beta,\n        gamma\n};\n");
}

#[test]
fn column_filler_aligns_double_arrows() {
    let mut style = profile();
    style.alignment_for_expressions_in_array_initializer = AlignMode::ONE_PER_LINE;
    style.insert_space_before_double_arrow_operator_with_filler = true;
    let out = fmt_stmts(
        vec![Stmt::Expr(Expr::ArrayLit {
            entries: vec![
                ArrayEntry {
                    key: Some(Expr::lit("'id'")),
                    value: Expr::lit("1"),
                },
                ArrayEntry {
                    key: Some(Expr::lit("'created'")),
                    value: Expr::lit("2"),
                },
            ],
        })],
        &style,
    );
    assert_eq!(
        out,
        "{\n        'id'      => 1,\n        'created' => 2};\n"
    );
}

#[test]
fn empty_array_initializers() {
    let empty = Stmt::Expr(Expr::ArrayLit { entries: vec![] });
    assert_eq!(fmt_stmts(vec![empty.clone()], &profile()), "{};\n");

    let mut style = profile();
    style.insert_space_between_empty_braces_in_array_initializer = true;
    assert_eq!(fmt_stmts(vec![empty], &style), "{ };\n");
}

// === Declarations ===

#[test]
fn method_declaration_with_parameters() {
    let method = Item::Method(MethodDecl {
        modifiers: vec!["public".to_string()],
        name: "sum".to_string(),
        params: vec![
            Param {
                ty: Some("int".to_string()),
                name: "a".to_string(),
                default: None,
            },
            Param {
                ty: Some("int".to_string()),
                name: "b".to_string(),
                default: Some(Expr::lit("0")),
            },
        ],
        throws: vec![],
        body: Some(Block {
            statements: vec![Stmt::Return(Some(Expr::Binary {
                op: BinaryOp::Add,
                operands: vec![Expr::ident("a"), Expr::ident("b")],
            }))],
        }),
        ctor: false,
    });
    let out = format(&SourceUnit { items: vec![method] }, &profile());
    assert_eq!(
        out,
        "public function sum(int a, int b = 0) {\n    return a + b;\n}\n"
    );
}

#[test]
fn abstract_methods_end_with_a_semicolon() {
    let method = Item::Method(MethodDecl {
        modifiers: vec!["abstract".to_string()],
        name: "run".to_string(),
        params: vec![],
        throws: vec![],
        body: None,
        ctor: false,
    });
    let out = format(&SourceUnit { items: vec![method] }, &profile());
    assert_eq!(out, "abstract function run();\n");
}

#[test]
fn method_throws_clause_wraps_under_its_own_mode() {
    let mut style = profile();
    style.alignment_for_throws_clause_in_method_declaration = AlignMode::ONE_PER_LINE;
    let method = Item::Method(MethodDecl {
        modifiers: vec![],
        name: "load".to_string(),
        params: vec![],
        throws: vec!["IoFailure".to_string(), "BadState".to_string()],
        body: Some(Block { statements: vec![] }),
        ctor: false,
    });
    let out = format(&SourceUnit { items: vec![method] }, &style);
    assert_eq!(
        out,
        "function load() throws\n        IoFailure,\n        BadState {\n}\n"
    );
}

#[test]
fn type_declaration_with_supertypes_and_members() {
    let decl = Item::Type(TypeDecl {
        modifiers: vec![],
        name: "Point".to_string(),
        superclass: Some("Shape".to_string()),
        interfaces: vec!["Comparable".to_string(), "Printable".to_string()],
        members: vec![
            Member::Field(FieldDecl {
                modifiers: vec!["public".to_string()],
                declarators: vec![Declarator {
                    name: "x".to_string(),
                    init: Some(Expr::lit("0")),
                }],
            }),
            Member::Method(MethodDecl {
                modifiers: vec!["public".to_string()],
                name: "origin".to_string(),
                params: vec![],
                throws: vec![],
                body: Some(Block { statements: vec![] }),
                ctor: false,
            }),
        ],
    });
    let out = format(&SourceUnit { items: vec![decl] }, &profile());
    assert_eq!(
        out,
        "class Point extends Shape implements Comparable, Printable {\n    public x = 0;\n    public function origin() {\n    }\n}\n"
    );
}

#[test]
fn multiple_field_declarators_wrap_compactly() {
    let mut style = profile();
    style.page_width = 20;
    let decl = Item::Type(TypeDecl {
        modifiers: vec![],
        name: "C".to_string(),
        superclass: None,
        interfaces: vec![],
        members: vec![Member::Field(FieldDecl {
            modifiers: vec!["public".to_string()],
            declarators: vec![
                Declarator {
                    name: "aaaa".to_string(),
                    init: Some(Expr::lit("1")),
                },
                Declarator {
                    name: "bbbb".to_string(),
                    init: Some(Expr::lit("2")),
                },
            ],
        })],
    });
    let out = format(&SourceUnit { items: vec![decl] }, &style);
    assert_eq!(
        out,
        "class C {\n    public aaaa = 1,\n            bbbb = 2;\n}\n"
    );
}

#[test]
fn blank_lines_between_members_follow_the_counts() {
    let mut style = profile();
    style.blank_lines_before_method = 1;
    let decl = Item::Type(TypeDecl {
        modifiers: vec![],
        name: "C".to_string(),
        superclass: None,
        interfaces: vec![],
        members: vec![
            Member::Field(FieldDecl {
                modifiers: vec![],
                declarators: vec![Declarator {
                    name: "x".to_string(),
                    init: None,
                }],
            }),
            Member::Method(MethodDecl {
                modifiers: vec![],
                name: "m".to_string(),
                params: vec![],
                throws: vec![],
                body: Some(Block { statements: vec![] }),
                ctor: false,
            }),
        ],
    });
    let out = format(&SourceUnit { items: vec![decl] }, &style);
    assert_eq!(
        out,
        "class C {\n    x;\n\n    function m() {\n    }\n}\n"
    );
}

#[test]
fn namespaces_brace_and_indent_their_body() {
    let mut style = profile();
    style.indent_body_declarations_compare_to_namespace = true;
    let unit = SourceUnit {
        items: vec![Item::Namespace(NamespaceDecl {
            name: "App".to_string(),
            items: vec![Item::Stmt(call_stmt("boot", vec![]))],
        })],
    };
    let out = format(&unit, &style);
    assert_eq!(out, "namespace App {\n    boot();\n}\n");
}

// === Indentation texture ===

#[test]
fn tabs_are_the_default_indentation() {
    let out = fmt_stmts(
        vec![if_stmt(
            Expr::ident("x"),
            block_of(vec![call_stmt("y", vec![])]),
            None,
        )],
        &FormatProfile::default(),
    );
    assert_eq!(out, "if (x) {\n\ty();\n}\n");
}

// === Determinism and edits ===

#[test]
fn formatting_is_deterministic() {
    let unit = unit_of(vec![
        call_stmt("foo", vec![Expr::lit("1"), Expr::lit("2")]),
        if_stmt(
            Expr::ident("x"),
            block_of(vec![Stmt::Return(Some(Expr::ident("y")))]),
            None,
        ),
    ]);
    let style = profile();
    let first = format(&unit, &style);
    let second = format(&unit, &style);
    assert_eq!(first, second);
}

#[test]
fn formatted_output_is_a_fixed_point() {
    // Formatting structurally identical input reproduces the same text, so
    // a second pass over the engine's own output changes nothing.
    let unit = unit_of(vec![call_stmt("foo", vec![Expr::lit("1"), Expr::lit("2")])]);
    let style = profile();
    let formatted = format(&unit, &style);
    assert!(is_formatted(&formatted, &unit, &style));
    assert!(format_edits(&formatted, &unit, &style).is_empty());
}

#[test]
fn edits_cover_only_the_changed_region() {
    let unit = unit_of(vec![call_stmt("foo", vec![Expr::lit("1"), Expr::lit("2")])]);
    let style = profile();
    let original = "foo(1,2);\n";
    let edits = format_edits(original, &unit, &style);
    assert_eq!(edits.len(), 1);
    let edit = &edits[0];
    let mut applied = original.to_string();
    applied.replace_range(edit.start..edit.end, &edit.replacement);
    assert_eq!(applied, "foo(1, 2);\n");
}

#[test]
fn a_small_program_reads_whole() {
    let unit = SourceUnit {
        items: vec![Item::Type(TypeDecl {
            modifiers: vec![],
            name: "Greeter".to_string(),
            superclass: None,
            interfaces: vec![],
            members: vec![Member::Method(MethodDecl {
                modifiers: vec!["public".to_string()],
                name: "greet".to_string(),
                params: vec![Param {
                    ty: Some("string".to_string()),
                    name: "name".to_string(),
                    default: None,
                }],
                throws: vec![],
                body: Some(Block {
                    statements: vec![
                        if_stmt(
                            Expr::Binary {
                                op: BinaryOp::Eq,
                                operands: vec![Expr::ident("name"), Expr::lit("''")],
                            },
                            block_of(vec![Stmt::Return(Some(Expr::lit("'Hello, world'")))]),
                            None,
                        ),
                        Stmt::Return(Some(Expr::Concat {
                            operands: vec![Expr::lit("'Hello, '"), Expr::ident("name")],
                        })),
                    ],
                }),
                ctor: false,
            })],
        })],
    };
    insta::assert_snapshot!(format(&unit, &profile()).trim_end(), @r###"
    class Greeter {
        public function greet(string name) {
            if (name == '') {
                return 'Hello, world';
            }
            return 'Hello, ' . name;
        }
    }
    "###);
}

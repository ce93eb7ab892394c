//! The tree walker
//!
//! Renders a source unit using the profile-driven decision tables: spacing
//! per token context, brace placement per construct, and fragment layout
//! through the alignment resolver. Fragments are measured with a scratch
//! walker first, resolved, then committed; a sub-element that lands on a
//! continuation line is re-rendered at its actual column unless
//! `wrap_outer_expressions_when_nested` says to keep its measured layout.

use quill_options::{AlignMode, BracePosition, FormatProfile, SplitStrategy};
use quill_syntax::*;
use tracing::debug;

use crate::alignment::{self, FragmentMetrics, Layout, Piece};
use crate::policy::{self, BraceConstruct};
use crate::spacing::{
    space_after, space_before, BraceIn, BracketIn, ColonIn, CommaIn, KeywordBefore, ParenIn,
    SemicolonIn, SpaceContext,
};
use crate::writer::Writer;

pub(crate) fn format_unit(unit: &SourceUnit, profile: &FormatProfile) -> String {
    let mut visitor = FormatVisitor {
        profile,
        writer: Writer::new(profile),
        indent: profile.initial_indentation_level,
        in_arguments: false,
    };
    visitor.visit_unit(unit);
    visitor.finish()
}

struct FormatVisitor<'a> {
    profile: &'a FormatProfile,
    writer: Writer,
    /// Current indentation in units.
    indent: u32,
    /// Inside an invocation's argument list (array initializers care).
    in_arguments: bool,
}

impl<'a> FormatVisitor<'a> {
    fn finish(mut self) -> String {
        if self.profile.insert_new_line_at_end_of_file_if_missing {
            self.writer.ensure_new_line();
        }
        self.writer.into_string()
    }

    // === Shared plumbing ===

    fn space_if(&mut self, insert: bool) {
        if insert {
            self.writer.space();
        }
    }

    /// Space before a token, suppressed at the start of a line.
    fn joining_space(&mut self, insert: bool) {
        if insert && !self.writer.at_line_start() {
            self.writer.space();
        }
    }

    /// Render a sub-tree with a scratch walker starting at `column`.
    fn measure<F>(&self, column: usize, render: F) -> String
    where
        F: FnOnce(&mut FormatVisitor<'_>),
    {
        let mut scratch = FormatVisitor {
            profile: self.profile,
            writer: Writer::new_at(self.profile, column),
            indent: self.indent,
            in_arguments: self.in_arguments,
        };
        render(&mut scratch);
        scratch.writer.into_string()
    }

    fn piece_of(text: &str) -> Piece {
        match text.find('\n') {
            Some(first_line_end) => Piece {
                width: text[..first_line_end].chars().count(),
                already_broken: true,
            },
            None => Piece {
                width: text.chars().count(),
                already_broken: false,
            },
        }
    }

    fn metrics(
        &self,
        start_column: usize,
        continuation_units: u32,
        separator_width: usize,
        continuation_lead_width: usize,
    ) -> FragmentMetrics {
        let unit = self.writer.indent_unit_width();
        FragmentMetrics {
            start_column,
            continuation_column: (self.indent + continuation_units) as usize * unit,
            page_width: self.profile.page_width as usize,
            separator_width,
            continuation_lead_width,
            indent_unit_width: unit,
        }
    }

    /// Commit one resolved piece: re-render at the committed column, or
    /// paste the measured text when nested re-wrapping is disabled.
    fn commit_piece<F>(&mut self, rendered: &str, piece: &Piece, on_continuation: bool, render: F)
    where
        F: FnOnce(&mut FormatVisitor<'_>),
    {
        if on_continuation && piece.already_broken && !self.profile.wrap_outer_expressions_when_nested
        {
            debug!("keeping nested fragment layout, re-wrap disabled");
            self.writer.write(rendered);
        } else {
            render(self);
        }
    }

    // === Comma-separated fragments ===

    /// Lay out and emit a comma-separated expression list. Returns true when
    /// the fragment split across lines. `leading_space` is the pending
    /// space after the opening token, owed only if the first element stays
    /// on the opening line.
    fn emit_comma_list(
        &mut self,
        items: &[Expr],
        comma: CommaIn,
        mode: AlignMode,
        continuation_units: u32,
        leading_space: bool,
    ) -> bool {
        if items.is_empty() {
            return false;
        }
        let context = SpaceContext::Comma(comma);
        let before = space_before(self.profile, context);
        let after = space_after(self.profile, context);
        let start_column = self.writer.column() + leading_space as usize;
        let rendered: Vec<String> = items
            .iter()
            .map(|item| self.measure(start_column, |v| v.visit_expr(item)))
            .collect();
        let pieces: Vec<Piece> = rendered.iter().map(|text| Self::piece_of(text)).collect();
        let separator_width = 1 + before as usize + after as usize;
        let metrics = self.metrics(start_column, continuation_units, separator_width, 0);
        let layout = alignment::resolve(&pieces, mode, &metrics);
        self.commit_comma_list(items, &rendered, &pieces, &layout, context, leading_space);
        layout.is_split()
    }

    fn commit_comma_list(
        &mut self,
        items: &[Expr],
        rendered: &[String],
        pieces: &[Piece],
        layout: &Layout,
        context: SpaceContext,
        leading_space: bool,
    ) {
        let before = space_before(self.profile, context);
        let after = space_after(self.profile, context);
        let mut line = 0usize;
        for (index, item) in items.iter().enumerate() {
            let slot = layout.slots[index];
            if index > 0 {
                self.space_if(before);
                self.writer.write(",");
            }
            if slot.line > line {
                self.writer.newline();
                self.writer.indent_to_column(slot.column);
                line = slot.line;
            } else if index > 0 {
                self.space_if(after);
            } else {
                self.space_if(leading_space);
            }
            let on_continuation = slot.line > 0;
            self.commit_piece(&rendered[index], &pieces[index], on_continuation, |v| {
                v.visit_expr(item)
            });
        }
    }

    // === Operator chains ===

    fn emit_operator_chain(
        &mut self,
        operands: &[Expr],
        operator: &str,
        context: SpaceContext,
        mode: AlignMode,
        wrap_before_operator: bool,
    ) {
        if operands.len() == 1 {
            self.visit_expr(&operands[0]);
            return;
        }
        let before = space_before(self.profile, context);
        let after = space_after(self.profile, context);
        let operator_width = operator.chars().count();
        let separator_width = operator_width + before as usize + after as usize;
        let lead = if wrap_before_operator {
            operator_width + after as usize
        } else {
            0
        };
        let start_column = self.writer.column();
        let rendered: Vec<String> = operands
            .iter()
            .map(|operand| self.measure(start_column, |v| v.visit_expr(operand)))
            .collect();
        let pieces: Vec<Piece> = rendered.iter().map(|text| Self::piece_of(text)).collect();
        let metrics = self.metrics(
            start_column,
            self.profile.continuation_indentation,
            separator_width,
            lead,
        );
        let layout = alignment::resolve(&pieces, mode, &metrics);
        let mut line = 0usize;
        for (index, operand) in operands.iter().enumerate() {
            let slot = layout.slots[index];
            if index > 0 {
                if slot.line > line {
                    if wrap_before_operator {
                        self.writer.newline();
                        self.writer.indent_to_column(slot.column - lead);
                        self.writer.write(operator);
                        self.space_if(after);
                    } else {
                        self.space_if(before);
                        self.writer.write(operator);
                        self.writer.newline();
                        self.writer.indent_to_column(slot.column);
                    }
                    line = slot.line;
                } else {
                    self.space_if(before);
                    self.writer.write(operator);
                    self.space_if(after);
                }
            } else if slot.line > line {
                self.writer.newline();
                self.writer.indent_to_column(slot.column);
                line = slot.line;
            }
            let on_continuation = slot.line > 0;
            self.commit_piece(&rendered[index], &pieces[index], on_continuation, |v| {
                v.visit_expr(operand)
            });
        }
    }

    // === Conditional expressions ===

    fn emit_conditional(&mut self, cond: &Expr, then_value: &Expr, else_value: &Expr) {
        self.visit_expr(cond);
        let question = SpaceContext::QuestionInConditional;
        let colon = SpaceContext::Colon(ColonIn::Conditional);
        let question_width = 1
            + space_before(self.profile, question) as usize
            + space_after(self.profile, question) as usize;
        let colon_width = 1
            + space_before(self.profile, colon) as usize
            + space_after(self.profile, colon) as usize;
        let start_column = self.writer.column() + question_width;
        let branches = [then_value, else_value];
        let rendered: Vec<String> = branches
            .iter()
            .map(|branch| self.measure(start_column, |v| v.visit_expr(branch)))
            .collect();
        let pieces: Vec<Piece> = rendered.iter().map(|text| Self::piece_of(text)).collect();
        let lead = 1 + space_after(self.profile, question) as usize;
        let metrics = self.metrics(
            start_column,
            self.profile.continuation_indentation,
            question_width.max(colon_width),
            lead,
        );
        let mode = self.profile.alignment_for_conditional_expression;
        let layout = alignment::resolve(&pieces, mode, &metrics);
        let mut line = 0usize;
        for (index, branch) in branches.iter().enumerate() {
            let (token, context) = if index == 0 { ("?", question) } else { (":", colon) };
            let slot = layout.slots[index];
            if slot.line > line {
                // Both operators land on the continuation column so the
                // branches line up under each other.
                let operator_column = if index == 0 {
                    slot.column
                } else {
                    slot.column.saturating_sub(lead)
                };
                self.writer.newline();
                self.writer.indent_to_column(operator_column);
                self.writer.write(token);
                self.space_if(space_after(self.profile, context));
                line = slot.line;
            } else {
                self.space_if(space_before(self.profile, context));
                self.writer.write(token);
                self.space_if(space_after(self.profile, context));
            }
            let on_continuation = slot.line > 0;
            self.commit_piece(&rendered[index], &pieces[index], on_continuation, |v| {
                v.visit_expr(branch)
            });
        }
    }

    // === Invocations ===

    fn empty_parens_space(&self, paren: ParenIn) -> bool {
        match paren {
            ParenIn::MethodInvocation => {
                self.profile.insert_space_between_empty_parens_in_method_invocation
            }
            ParenIn::MethodDeclaration => {
                self.profile.insert_space_between_empty_parens_in_method_declaration
            }
            ParenIn::ConstructorDeclaration => {
                self.profile.insert_space_between_empty_parens_in_constructor_declaration
            }
            _ => false,
        }
    }

    /// `(...)` of a call or declaration. Returns true when the argument
    /// fragment split.
    fn emit_paren_list(
        &mut self,
        items: &[Expr],
        paren: ParenIn,
        comma: CommaIn,
        mode: AlignMode,
    ) -> bool {
        self.joining_space(space_before(self.profile, SpaceContext::OpeningParen(paren)));
        self.writer.write("(");
        if items.is_empty() {
            self.space_if(self.empty_parens_space(paren));
            self.writer.write(")");
            return false;
        }
        let leading = space_after(self.profile, SpaceContext::OpeningParen(paren));
        let was_in_arguments = self.in_arguments;
        self.in_arguments = true;
        let split = self.emit_comma_list(
            items,
            comma,
            mode,
            self.profile.continuation_indentation,
            leading,
        );
        self.in_arguments = was_in_arguments;
        self.space_if(space_before(self.profile, SpaceContext::ClosingParen(paren)));
        self.writer.write(")");
        split
    }

    fn invocation_comma_and_mode(&self, scope_call: Option<&str>) -> (CommaIn, AlignMode) {
        // The explicit constructor-call forms carry their own settings.
        if scope_call == Some("__construct") {
            (
                CommaIn::ConstructorCallArguments,
                self.profile.alignment_for_arguments_in_explicit_constructor_call,
            )
        } else {
            (
                CommaIn::CallArguments,
                self.profile.alignment_for_arguments_in_method_invocation,
            )
        }
    }

    /// Flattened `->` chain so the whole spine wraps as one fragment.
    fn emit_selector_chain(&mut self, receiver: &Expr, segments: &[(&str, &[Expr])]) {
        self.visit_expr(receiver);
        let before = space_before(self.profile, SpaceContext::ObjectOperator);
        let start_column = self.writer.column() + before as usize;
        let rendered: Vec<String> = segments
            .iter()
            .map(|(method, args)| self.measure(start_column, |v| v.emit_selector_segment(method, args)))
            .collect();
        let pieces: Vec<Piece> = rendered.iter().map(|text| Self::piece_of(text)).collect();
        let metrics = self.metrics(
            start_column,
            self.profile.continuation_indentation,
            before as usize,
            0,
        );
        let mode = self.profile.alignment_for_selector_in_method_invocation;
        let layout = alignment::resolve(&pieces, mode, &metrics);
        let mut line = 0usize;
        for (index, (method, args)) in segments.iter().enumerate() {
            let slot = layout.slots[index];
            if slot.line > line {
                self.writer.newline();
                self.writer.indent_to_column(slot.column);
                line = slot.line;
            } else {
                self.space_if(before);
            }
            let on_continuation = slot.line > 0;
            self.commit_piece(&rendered[index], &pieces[index], on_continuation, |v| {
                v.emit_selector_segment(method, args)
            });
        }
    }

    fn emit_selector_segment(&mut self, method: &str, args: &[Expr]) {
        self.writer.write("->");
        self.space_if(space_after(self.profile, SpaceContext::ObjectOperator));
        self.writer.write(method);
        let (comma, mode) = self.invocation_comma_and_mode(None);
        self.emit_paren_list(args, ParenIn::MethodInvocation, comma, mode);
    }

    // === Array initializers ===

    fn emit_array_literal(&mut self, entries: &[ArrayEntry]) {
        let open_brace = SpaceContext::OpeningBrace(BraceIn::ArrayInitializer);
        let close_brace = SpaceContext::ClosingBrace(BraceIn::ArrayInitializer);
        if entries.is_empty() {
            self.joining_space(space_before(self.profile, open_brace));
            self.writer.write("{");
            if !self.profile.keep_empty_array_initializer_on_one_line
                && self.profile.insert_new_line_before_closing_brace_in_array_initializer
            {
                self.writer.newline();
                self.writer.write_indent(self.indent);
            } else {
                self.space_if(
                    self.profile.insert_space_between_empty_braces_in_array_initializer,
                );
            }
            self.writer.write("}");
            return;
        }

        let brace_indent = self.open_brace(
            BraceConstruct::ArrayInitializer,
            BraceIn::ArrayInitializer,
            false,
        );

        let leading = space_after(self.profile, open_brace);
        let continuation_units = self.profile.continuation_indentation_for_array_initializer;
        let mut mode = self.profile.alignment_for_expressions_in_array_initializer;
        let context = SpaceContext::Comma(CommaIn::ArrayInitializer);
        let before = space_before(self.profile, context);
        let after = space_after(self.profile, context);
        let start_column = self.writer.column() + leading as usize;
        let rendered: Vec<String> = entries
            .iter()
            .map(|entry| self.measure(start_column, |v| v.emit_array_entry(entry, None)))
            .collect();
        let pieces: Vec<Piece> = rendered.iter().map(|text| Self::piece_of(text)).collect();
        let separator_width = 1 + before as usize + after as usize;
        let metrics = self.metrics(start_column, continuation_units, separator_width, 0);
        let mut layout = alignment::resolve(&pieces, mode, &metrics);

        let break_after_open = self.profile.insert_new_line_after_opening_brace_in_array_initializer
            || (self.in_arguments
                && self
                    .profile
                    .insert_new_line_after_opening_brace_in_array_initializer_in_arguments);
        if layout.is_split() && break_after_open && layout.slots[0].line == 0 {
            mode = AlignMode {
                strategy: SplitStrategy::NextPerLine,
                force_split: true,
                ..mode
            };
            layout = alignment::resolve(&pieces, mode, &metrics);
        }

        // Column-aligned double arrows: pad every key to the widest one.
        let one_entry_per_line = layout
            .slots
            .windows(2)
            .all(|pair| pair[1].line > pair[0].line);
        let filler = if layout.is_split()
            && one_entry_per_line
            && self.profile.insert_space_before_double_arrow_operator_with_filler
            && entries.iter().all(|entry| entry.key.is_some())
        {
            entries
                .iter()
                .map(|entry| {
                    let key = entry.key.as_ref().expect("checked above");
                    self.measure(0, |v| v.visit_expr(key)).chars().count()
                })
                .max()
        } else {
            None
        };

        let mut line = 0usize;
        for (index, entry) in entries.iter().enumerate() {
            let slot = layout.slots[index];
            if index > 0 {
                self.space_if(before);
                self.writer.write(",");
            }
            if slot.line > line {
                self.writer.newline();
                self.writer.indent_to_column(slot.column);
                line = slot.line;
            } else if index > 0 {
                self.space_if(after);
            } else {
                self.space_if(leading);
            }
            let on_continuation = slot.line > 0;
            self.commit_piece(&rendered[index], &pieces[index], on_continuation, |v| {
                v.emit_array_entry(entry, filler)
            });
        }

        if layout.is_split()
            && self.profile.insert_new_line_before_closing_brace_in_array_initializer
        {
            self.writer.newline();
            self.writer.write_indent(brace_indent);
        } else {
            self.space_if(space_before(self.profile, close_brace));
        }
        self.writer.write("}");
    }

    fn emit_array_entry(&mut self, entry: &ArrayEntry, key_filler: Option<usize>) {
        let Some(key) = &entry.key else {
            self.visit_expr(&entry.value);
            return;
        };
        let key_start = self.writer.column();
        self.visit_expr(key);
        match key_filler {
            Some(widest) => {
                // Pad to the common arrow column; one space is guaranteed.
                self.writer.pad_to_column(key_start + widest + 1);
            }
            None => {
                self.space_if(space_before(self.profile, SpaceContext::DoubleArrow));
            }
        }
        self.writer.write("=>");
        self.space_if(space_after(self.profile, SpaceContext::DoubleArrow));
        self.visit_expr(&entry.value);
    }

    // === Expressions ===

    fn visit_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Literal(text) | Expr::Ident(text) => self.writer.write(text),
            Expr::Unary { op, operand } => {
                self.space_if(space_before(self.profile, SpaceContext::UnaryOperator));
                self.writer.write(op.symbol());
                self.space_if(space_after(self.profile, SpaceContext::UnaryOperator));
                self.visit_expr(operand);
            }
            Expr::Prefix { op, target } => {
                self.space_if(space_before(self.profile, SpaceContext::PrefixOperator));
                self.writer.write(op.symbol());
                self.space_if(space_after(self.profile, SpaceContext::PrefixOperator));
                self.visit_expr(target);
            }
            Expr::Postfix { target, op } => {
                self.visit_expr(target);
                self.space_if(space_before(self.profile, SpaceContext::PostfixOperator));
                self.writer.write(op.symbol());
                self.space_if(space_after(self.profile, SpaceContext::PostfixOperator));
            }
            Expr::Binary { op, operands } => self.emit_operator_chain(
                operands,
                op.symbol(),
                SpaceContext::BinaryOperator,
                self.profile.alignment_for_binary_expression,
                self.profile.wrap_before_binary_operator,
            ),
            Expr::Concat { operands } => self.emit_operator_chain(
                operands,
                ".",
                SpaceContext::ConcatOperator,
                self.profile.alignment_for_concat_expression,
                self.profile.wrap_before_concat_operator,
            ),
            Expr::Assign { target, op, value } => {
                self.visit_expr(target);
                self.space_if(space_before(self.profile, SpaceContext::AssignmentOperator));
                self.writer.write(op.symbol());
                self.emit_assigned_value(value);
            }
            Expr::Conditional {
                cond,
                then_value,
                else_value,
            } => self.emit_conditional(cond, then_value, else_value),
            Expr::Call { callee, args } => {
                self.visit_expr(callee);
                let (comma, mode) = self.invocation_comma_and_mode(None);
                self.emit_paren_list(args, ParenIn::MethodInvocation, comma, mode);
            }
            Expr::MethodCall { .. } => {
                let (receiver, segments) = flatten_selector_chain(expr);
                self.emit_selector_chain(receiver, &segments);
            }
            Expr::StaticCall {
                scope,
                method,
                args,
            } => {
                self.writer.write(scope);
                self.space_if(space_before(self.profile, SpaceContext::ScopeOperator));
                self.writer.write("::");
                self.space_if(space_after(self.profile, SpaceContext::ScopeOperator));
                self.writer.write(method);
                let (comma, mode) = self.invocation_comma_and_mode(Some(method));
                self.emit_paren_list(args, ParenIn::MethodInvocation, comma, mode);
            }
            Expr::New { class, args } => {
                self.writer.write("new ");
                self.visit_expr(class);
                let mode = if matches!(**class, Expr::Ident(_)) {
                    self.profile.alignment_for_arguments_in_allocation_expression
                } else {
                    self.profile
                        .alignment_for_arguments_in_qualified_allocation_expression
                };
                self.emit_paren_list(
                    args,
                    ParenIn::MethodInvocation,
                    CommaIn::AllocationExpression,
                    mode,
                );
            }
            Expr::ArrayLit { entries } => self.emit_array_literal(entries),
            Expr::Index { target, index } => {
                self.visit_expr(target);
                let open = SpaceContext::OpeningBracket(BracketIn::ArrayReference);
                let close = SpaceContext::ClosingBracket(BracketIn::ArrayReference);
                self.space_if(space_before(self.profile, open));
                self.writer.write("[");
                self.space_if(space_after(self.profile, open));
                self.visit_expr(index);
                self.space_if(space_before(self.profile, close));
                self.writer.write("]");
            }
            Expr::Paren(inner) => {
                let paren = ParenIn::ParenthesizedExpression;
                self.joining_space(space_before(
                    self.profile,
                    SpaceContext::OpeningParen(paren),
                ));
                self.writer.write("(");
                self.space_if(space_after(self.profile, SpaceContext::OpeningParen(paren)));
                self.visit_expr(inner);
                self.space_if(space_before(self.profile, SpaceContext::ClosingParen(paren)));
                self.writer.write(")");
            }
            Expr::Cast { ty, operand } => {
                self.writer.write("(");
                self.space_if(space_after(
                    self.profile,
                    SpaceContext::OpeningParen(ParenIn::Cast),
                ));
                self.writer.write(ty);
                self.space_if(space_before(
                    self.profile,
                    SpaceContext::ClosingParen(ParenIn::Cast),
                ));
                self.writer.write(")");
                self.space_if(space_after(
                    self.profile,
                    SpaceContext::ClosingParen(ParenIn::Cast),
                ));
                self.visit_expr(operand);
            }
        }
    }

    /// Right-hand side of an assignment, laid out under its own mode. The
    /// default mode accepts overflow: breaking an assignment
    /// unconditionally reads worse than a long line.
    fn emit_assigned_value(&mut self, value: &Expr) {
        let after = space_after(self.profile, SpaceContext::AssignmentOperator);
        let mode = self.profile.alignment_for_assignment;
        let start_column = self.writer.column() + after as usize;
        let rendered = self.measure(start_column, |v| v.visit_expr(value));
        let piece = Self::piece_of(&rendered);
        let metrics = self.metrics(
            start_column,
            self.profile.continuation_indentation,
            after as usize,
            0,
        );
        let layout = alignment::resolve(&[piece], mode, &metrics);
        let slot = layout.slots[0];
        if slot.line > 0 {
            self.writer.newline();
            self.writer.indent_to_column(slot.column);
        } else {
            self.space_if(after);
        }
        self.commit_piece(&rendered, &piece, slot.line > 0, |v| v.visit_expr(value));
    }

    // === Statements ===

    fn visit_statements(&mut self, statements: &[Stmt]) {
        for statement in statements {
            if matches!(statement, Stmt::Empty)
                && !self.profile.put_empty_statement_on_new_line
                && self.writer.at_line_start()
            {
                self.writer.retract_newline();
                self.writer.write(";");
                self.writer.newline();
                continue;
            }
            self.visit_statement(statement);
        }
    }

    fn visit_statement(&mut self, statement: &Stmt) {
        match statement {
            Stmt::Block(block) => {
                self.writer.write_indent(self.indent);
                self.visit_braced_block(block, BraceConstruct::Block, false);
                self.writer.newline();
            }
            Stmt::Local(local) => {
                self.writer.write_indent(self.indent);
                self.emit_declarators(&local.declarators, CommaIn::MultipleLocalDeclarations, None);
                self.end_statement();
            }
            Stmt::Expr(expr) => {
                self.writer.write_indent(self.indent);
                self.visit_expr(expr);
                self.end_statement();
            }
            Stmt::If(if_stmt) => {
                self.writer.write_indent(self.indent);
                self.visit_if(if_stmt);
                self.writer.newline();
            }
            Stmt::While(while_stmt) => {
                self.writer.write_indent(self.indent);
                self.writer.write("while");
                self.emit_condition_parens(ParenIn::While, &while_stmt.cond);
                self.visit_attached_body(&while_stmt.body);
                self.writer.newline();
            }
            Stmt::DoWhile(do_stmt) => {
                self.writer.write_indent(self.indent);
                self.writer.write("do");
                self.visit_attached_body(&do_stmt.body);
                if self.profile.insert_new_line_before_while_in_do_statement {
                    self.writer.ensure_new_line();
                    self.writer.write_indent(self.indent);
                } else {
                    self.joining_space(space_after(
                        self.profile,
                        SpaceContext::ClosingBrace(BraceIn::Block),
                    ));
                }
                self.writer.write("while");
                self.emit_condition_parens(ParenIn::While, &do_stmt.cond);
                self.end_statement();
            }
            Stmt::For(for_stmt) => self.visit_for(for_stmt),
            Stmt::Switch(switch) => self.visit_switch(switch),
            Stmt::Return(value) => {
                self.writer.write_indent(self.indent);
                self.emit_keyword_expr_statement("return", value.as_ref(), KeywordBefore::Return);
            }
            Stmt::Throw(value) => {
                self.writer.write_indent(self.indent);
                self.emit_keyword_expr_statement("throw", Some(value), KeywordBefore::Throw);
            }
            Stmt::Echo(values) => {
                self.writer.write_indent(self.indent);
                self.writer.write("echo");
                let leading = if let [Expr::Paren(_)] = values.as_slice() {
                    space_before(
                        self.profile,
                        SpaceContext::ParenthesizedAfter(KeywordBefore::Echo),
                    )
                } else {
                    true
                };
                self.emit_comma_list(
                    values,
                    CommaIn::EchoExpressions,
                    self.profile.alignment_for_arguments_in_method_invocation,
                    self.profile.continuation_indentation,
                    leading,
                );
                self.end_statement();
            }
            Stmt::Labeled { label, body } => {
                self.writer.write_indent(self.indent);
                self.writer.write(label);
                self.space_if(space_before(
                    self.profile,
                    SpaceContext::Colon(ColonIn::LabeledStatement),
                ));
                self.writer.write(":");
                if self.profile.insert_new_line_after_label {
                    self.writer.newline();
                    self.visit_statement(body);
                } else {
                    self.space_if(space_after(
                        self.profile,
                        SpaceContext::Colon(ColonIn::LabeledStatement),
                    ));
                    self.visit_statement_after_label(body);
                }
            }
            Stmt::Break(label) => {
                self.writer.write_indent(self.indent);
                self.writer.write("break");
                if let Some(label) = label {
                    self.writer.space();
                    self.writer.write(label);
                }
                self.end_statement();
            }
            Stmt::Continue(label) => {
                self.writer.write_indent(self.indent);
                self.writer.write("continue");
                if let Some(label) = label {
                    self.writer.space();
                    self.writer.write(label);
                }
                self.end_statement();
            }
            Stmt::Empty => {
                self.writer.write_indent(self.indent);
                self.end_statement();
            }
        }
    }

    fn end_statement(&mut self) {
        self.space_if(space_before(
            self.profile,
            SpaceContext::Semicolon(SemicolonIn::Statement),
        ));
        self.writer.write(";");
        self.writer.newline();
    }

    /// Statement body continuing on the label's line; statements that need
    /// their own line still get one.
    fn visit_statement_after_label(&mut self, body: &Stmt) {
        if statement_is_inlinable(body) {
            self.emit_statement_inline(body);
            self.writer.newline();
        } else {
            self.writer.newline();
            self.visit_statement(body);
        }
    }

    fn emit_keyword_expr_statement(
        &mut self,
        keyword: &str,
        value: Option<&Expr>,
        context: KeywordBefore,
    ) {
        self.writer.write(keyword);
        if let Some(value) = value {
            if matches!(value, Expr::Paren(_)) {
                self.space_if(space_before(
                    self.profile,
                    SpaceContext::ParenthesizedAfter(context),
                ));
            } else {
                self.writer.space();
            }
            self.visit_expr(value);
        }
        self.end_statement();
    }

    fn emit_condition_parens(&mut self, paren: ParenIn, cond: &Expr) {
        self.joining_space(space_before(self.profile, SpaceContext::OpeningParen(paren)));
        self.writer.write("(");
        self.space_if(space_after(self.profile, SpaceContext::OpeningParen(paren)));
        self.visit_expr(cond);
        self.space_if(space_before(self.profile, SpaceContext::ClosingParen(paren)));
        self.writer.write(")");
    }

    /// A loop or conditional body: braced inline, or a lone statement on
    /// its own indented line.
    fn visit_attached_body(&mut self, body: &Stmt) {
        match body {
            Stmt::Block(block) => {
                self.visit_braced_block(block, BraceConstruct::Block, false);
            }
            other => {
                self.writer.newline();
                self.indent += 1;
                self.visit_statement(other);
                self.indent -= 1;
                // The caller finishes the line; land on a fresh one.
                self.writer.retract_newline();
            }
        }
    }

    fn visit_if(&mut self, if_stmt: &IfStmt) {
        self.writer.write("if");
        self.emit_condition_parens(ParenIn::If, &if_stmt.cond);

        // Guardian clause: a brief braced exit stays on the header line.
        if if_stmt.else_branch.is_none() && self.profile.keep_guardian_clause_on_one_line {
            if let Stmt::Block(block) = &*if_stmt.then_branch {
                if let [guard @ (Stmt::Return(_) | Stmt::Throw(_))] = block.statements.as_slice() {
                    self.joining_space(space_before(
                        self.profile,
                        SpaceContext::OpeningBrace(BraceIn::Block),
                    ));
                    self.writer.write("{ ");
                    self.emit_statement_inline(guard);
                    self.writer.write(" }");
                    return;
                }
            }
        }

        match &*if_stmt.then_branch {
            Stmt::Block(block) => {
                self.visit_braced_block(block, BraceConstruct::Block, false);
            }
            simple if statement_is_inlinable(simple)
                && (self.profile.keep_then_statement_on_same_line
                    || (self.profile.keep_simple_if_on_one_line
                        && if_stmt.else_branch.is_none())) =>
            {
                self.emit_compact_then(simple);
            }
            other => {
                self.writer.newline();
                self.indent += 1;
                self.visit_statement(other);
                self.indent -= 1;
                self.writer.retract_newline();
            }
        }

        if let Some(else_branch) = &if_stmt.else_branch {
            if matches!(&*if_stmt.then_branch, Stmt::Block(_))
                && !self.profile.insert_new_line_before_else_in_if_statement
            {
                self.joining_space(space_after(
                    self.profile,
                    SpaceContext::ClosingBrace(BraceIn::Block),
                ));
            } else {
                self.writer.ensure_new_line();
                self.writer.write_indent(self.indent);
            }
            self.writer.write("else");
            match &**else_branch {
                Stmt::If(chained) if self.profile.compact_else_if => {
                    self.writer.space();
                    self.visit_if(chained);
                }
                Stmt::Block(block) => {
                    self.visit_braced_block(block, BraceConstruct::Block, false);
                }
                simple
                    if statement_is_inlinable(simple)
                        && self.profile.keep_else_statement_on_same_line =>
                {
                    self.writer.space();
                    self.emit_statement_inline(simple);
                }
                other => {
                    self.writer.newline();
                    self.indent += 1;
                    self.visit_statement(other);
                    self.indent -= 1;
                    self.writer.retract_newline();
                }
            }
        }
    }

    /// A kept-on-the-header-line then-statement, wrapped under the compact
    /// if alignment when it does not fit.
    fn emit_compact_then(&mut self, simple: &Stmt) {
        let start_column = self.writer.column() + 1;
        let rendered = self.measure(start_column, |v| v.emit_statement_inline(simple));
        let piece = Self::piece_of(&rendered);
        let mode = self.profile.alignment_for_compact_if;
        let metrics = self.metrics(start_column, self.profile.continuation_indentation, 1, 0);
        let layout = alignment::resolve(&[piece], mode, &metrics);
        if layout.is_split() {
            self.writer.newline();
            self.writer.indent_to_column(layout.slots[0].column);
        } else {
            self.writer.space();
        }
        self.emit_statement_inline(simple);
    }

    /// Single-line rendering of a statement, indentation-free.
    fn emit_statement_inline(&mut self, statement: &Stmt) {
        match statement {
            Stmt::Expr(expr) => {
                self.visit_expr(expr);
                self.emit_semicolon_inline();
            }
            Stmt::Local(local) => {
                self.emit_declarators(&local.declarators, CommaIn::MultipleLocalDeclarations, None);
                self.emit_semicolon_inline();
            }
            Stmt::Return(value) => {
                self.writer.write("return");
                if let Some(value) = value {
                    if matches!(value, Expr::Paren(_)) {
                        self.space_if(space_before(
                            self.profile,
                            SpaceContext::ParenthesizedAfter(KeywordBefore::Return),
                        ));
                    } else {
                        self.writer.space();
                    }
                    self.visit_expr(value);
                }
                self.emit_semicolon_inline();
            }
            Stmt::Throw(value) => {
                self.writer.write("throw");
                if matches!(value, Expr::Paren(_)) {
                    self.space_if(space_before(
                        self.profile,
                        SpaceContext::ParenthesizedAfter(KeywordBefore::Throw),
                    ));
                } else {
                    self.writer.space();
                }
                self.visit_expr(value);
                self.emit_semicolon_inline();
            }
            Stmt::Break(label) => {
                self.writer.write("break");
                if let Some(label) = label {
                    self.writer.space();
                    self.writer.write(label);
                }
                self.emit_semicolon_inline();
            }
            Stmt::Continue(label) => {
                self.writer.write("continue");
                if let Some(label) = label {
                    self.writer.space();
                    self.writer.write(label);
                }
                self.emit_semicolon_inline();
            }
            Stmt::Empty => self.emit_semicolon_inline(),
            // Not inlinable; callers check first.
            other => {
                debug_assert!(!statement_is_inlinable(other));
                self.visit_statement(other);
            }
        }
    }

    fn emit_semicolon_inline(&mut self) {
        self.space_if(space_before(
            self.profile,
            SpaceContext::Semicolon(SemicolonIn::Statement),
        ));
        self.writer.write(";");
    }

    fn visit_for(&mut self, for_stmt: &ForStmt) {
        self.writer.write_indent(self.indent);
        self.writer.write("for");
        let paren = ParenIn::For;
        self.joining_space(space_before(self.profile, SpaceContext::OpeningParen(paren)));
        self.writer.write("(");
        self.space_if(space_after(self.profile, SpaceContext::OpeningParen(paren)));
        self.emit_comma_list(
            &for_stmt.inits,
            CommaIn::ForInits,
            AlignMode::NONE,
            self.profile.continuation_indentation,
            false,
        );
        self.emit_for_semicolon();
        if let Some(cond) = &for_stmt.cond {
            self.visit_expr(cond);
        }
        self.emit_for_semicolon();
        self.emit_comma_list(
            &for_stmt.updates,
            CommaIn::ForIncrements,
            AlignMode::NONE,
            self.profile.continuation_indentation,
            false,
        );
        self.space_if(space_before(self.profile, SpaceContext::ClosingParen(paren)));
        self.writer.write(")");
        self.visit_attached_body(&for_stmt.body);
        self.writer.newline();
    }

    fn emit_for_semicolon(&mut self) {
        self.space_if(space_before(
            self.profile,
            SpaceContext::Semicolon(SemicolonIn::For),
        ));
        self.writer.write(";");
        self.space_if(space_after(
            self.profile,
            SpaceContext::Semicolon(SemicolonIn::For),
        ));
    }

    fn visit_switch(&mut self, switch: &SwitchStmt) {
        self.writer.write_indent(self.indent);
        self.writer.write("switch");
        self.emit_condition_parens(ParenIn::Switch, &switch.scrutinee);
        let brace_indent = self.open_brace(BraceConstruct::Switch, BraceIn::Switch, false);
        self.writer.newline();

        let case_indent = brace_indent + policy::switch_case_indent(self.profile);
        for case in &switch.cases {
            self.writer.write_indent(case_indent);
            match &case.label {
                CaseLabel::Case(value) => {
                    self.writer.write("case ");
                    self.visit_expr(value);
                    self.space_if(space_before(
                        self.profile,
                        SpaceContext::Colon(ColonIn::Case),
                    ));
                    self.writer.write(":");
                }
                CaseLabel::Default => {
                    self.writer.write("default");
                    self.space_if(space_before(
                        self.profile,
                        SpaceContext::Colon(ColonIn::Default),
                    ));
                    self.writer.write(":");
                }
            }
            // A lone block after the label cuddles per its own setting; the
            // brace's own spacing supplies the gap.
            if let [Stmt::Block(block)] = case.body.as_slice() {
                let saved = self.indent;
                self.indent = case_indent;
                self.visit_braced_block(block, BraceConstruct::BlockInCase, false);
                self.indent = saved;
                self.writer.newline();
                continue;
            }
            self.writer.newline();
            let saved = self.indent;
            for statement in &case.body {
                self.indent = case_indent
                    + if matches!(statement, Stmt::Break(_)) {
                        policy::break_statement_indent(self.profile)
                    } else {
                        policy::case_statement_indent(self.profile)
                    };
                self.visit_statement(statement);
            }
            self.indent = saved;
        }
        self.writer.write_indent(brace_indent);
        self.writer.write("}");
        self.writer.newline();
    }

    /// Opening brace of a braced construct, honoring its configured
    /// position. Returns the indentation the closing brace should use.
    fn open_brace(&mut self, construct: BraceConstruct, brace: BraceIn, header_wrapped: bool) -> u32 {
        match policy::effective_brace_position(self.profile, construct, header_wrapped) {
            BracePosition::EndOfLine | BracePosition::NextLineOnWrap => {
                self.joining_space(space_before(self.profile, SpaceContext::OpeningBrace(brace)));
                self.writer.write("{");
                self.indent
            }
            BracePosition::NextLine => {
                self.writer.ensure_new_line();
                self.writer.write_indent(self.indent);
                self.writer.write("{");
                self.indent
            }
            BracePosition::NextLineShifted => {
                self.writer.ensure_new_line();
                self.writer.write_indent(self.indent + 1);
                self.writer.write("{");
                self.indent + 1
            }
        }
    }

    /// A braced statement block in statement position.
    fn visit_braced_block(&mut self, block: &Block, construct: BraceConstruct, header_wrapped: bool) {
        let brace = match construct {
            BraceConstruct::Switch => BraceIn::Switch,
            _ => BraceIn::Block,
        };
        let brace_indent = self.open_brace(construct, brace, header_wrapped);
        if block.statements.is_empty() {
            if self.profile.insert_new_line_in_empty_block {
                self.writer.newline();
                self.writer.write_indent(brace_indent);
            }
            self.writer.write("}");
            return;
        }
        self.writer.newline();
        let saved = self.indent;
        self.indent = brace_indent + policy::block_statement_indent(self.profile);
        self.visit_statements(&block.statements);
        self.indent = saved;
        self.writer.write_indent(brace_indent);
        self.writer.write("}");
    }

    // === Declarations ===

    fn emit_declarators(
        &mut self,
        declarators: &[Declarator],
        comma: CommaIn,
        mode: Option<AlignMode>,
    ) {
        let context = SpaceContext::Comma(comma);
        let before = space_before(self.profile, context);
        let after = space_after(self.profile, context);
        match mode {
            Some(mode) if declarators.len() > 1 => {
                let start_column = self.writer.column();
                let rendered: Vec<String> = declarators
                    .iter()
                    .map(|declarator| {
                        self.measure(start_column, |v| v.emit_declarator(declarator))
                    })
                    .collect();
                let pieces: Vec<Piece> =
                    rendered.iter().map(|text| Self::piece_of(text)).collect();
                let separator_width = 1 + before as usize + after as usize;
                let metrics = self.metrics(
                    start_column,
                    self.profile.continuation_indentation,
                    separator_width,
                    0,
                );
                let layout = alignment::resolve(&pieces, mode, &metrics);
                let mut line = 0usize;
                for (index, declarator) in declarators.iter().enumerate() {
                    let slot = layout.slots[index];
                    if index > 0 {
                        self.space_if(before);
                        self.writer.write(",");
                    }
                    if slot.line > line {
                        self.writer.newline();
                        self.writer.indent_to_column(slot.column);
                        line = slot.line;
                    } else if index > 0 {
                        self.space_if(after);
                    }
                    self.commit_piece(&rendered[index], &pieces[index], slot.line > 0, |v| {
                        v.emit_declarator(declarator)
                    });
                }
            }
            _ => {
                for (index, declarator) in declarators.iter().enumerate() {
                    if index > 0 {
                        self.space_if(before);
                        self.writer.write(",");
                        self.space_if(after);
                    }
                    self.emit_declarator(declarator);
                }
            }
        }
    }

    fn emit_declarator(&mut self, declarator: &Declarator) {
        self.writer.write(&declarator.name);
        if let Some(init) = &declarator.init {
            self.space_if(space_before(self.profile, SpaceContext::AssignmentOperator));
            self.writer.write("=");
            self.space_if(space_after(self.profile, SpaceContext::AssignmentOperator));
            self.visit_expr(init);
        }
    }

    fn emit_modifiers(&mut self, modifiers: &[String]) {
        for modifier in modifiers {
            self.writer.write(modifier);
            self.writer.space();
        }
    }

    fn visit_method(&mut self, method: &MethodDecl) {
        self.writer.write_indent(self.indent);
        self.emit_modifiers(&method.modifiers);
        self.writer.write("function ");
        self.writer.write(&method.name);

        let (paren, comma, mode) = if method.ctor {
            (
                ParenIn::ConstructorDeclaration,
                CommaIn::ConstructorParams,
                self.profile.alignment_for_parameters_in_constructor_declaration,
            )
        } else {
            (
                ParenIn::MethodDeclaration,
                CommaIn::MethodParams,
                self.profile.alignment_for_parameters_in_method_declaration,
            )
        };
        let params: Vec<Expr> = method.params.iter().map(param_as_expr).collect();
        let mut header_wrapped = self.emit_paren_list(&params, paren, comma, mode);

        if !method.throws.is_empty() {
            let throws_comma = if method.ctor {
                CommaIn::ConstructorThrows
            } else {
                CommaIn::MethodThrows
            };
            let throws_mode = if method.ctor {
                self.profile.alignment_for_throws_clause_in_constructor_declaration
            } else {
                self.profile.alignment_for_throws_clause_in_method_declaration
            };
            self.writer.write(" throws");
            let names: Vec<Expr> = method.throws.iter().map(|name| Expr::ident(name)).collect();
            header_wrapped |= self.emit_comma_list(
                &names,
                throws_comma,
                throws_mode,
                self.profile.continuation_indentation,
                true,
            );
        }

        let Some(body) = &method.body else {
            self.end_statement();
            return;
        };

        let construct = if method.ctor {
            BraceConstruct::Constructor
        } else {
            BraceConstruct::Method
        };
        let brace = if method.ctor {
            BraceIn::ConstructorDeclaration
        } else {
            BraceIn::MethodDeclaration
        };
        let brace_indent = self.open_brace(construct, brace, header_wrapped);
        if body.statements.is_empty() {
            if self.profile.insert_new_line_in_empty_method_body {
                self.writer.newline();
                self.writer.write_indent(brace_indent);
            }
            self.writer.write("}");
            self.writer.newline();
            return;
        }
        self.writer.newline();
        if self.profile.blank_lines_at_beginning_of_method_body > 0 {
            for _ in 0..self.profile.blank_lines_at_beginning_of_method_body {
                self.writer.newline();
            }
        }
        let saved = self.indent;
        self.indent = brace_indent + policy::body_statement_indent(self.profile);
        self.visit_statements(&body.statements);
        self.indent = saved;
        self.writer.write_indent(brace_indent);
        self.writer.write("}");
        self.writer.newline();
    }

    fn visit_type(&mut self, decl: &TypeDecl) {
        self.writer.write_indent(self.indent);
        self.emit_modifiers(&decl.modifiers);
        self.writer.write("class ");
        self.writer.write(&decl.name);

        if let Some(superclass) = &decl.superclass {
            let text = format!("extends {superclass}");
            let piece = Self::piece_of(&text);
            let metrics = self.metrics(
                self.writer.column() + 1,
                self.profile.continuation_indentation,
                1,
                0,
            );
            let layout = alignment::resolve(
                &[piece],
                self.profile.alignment_for_superclass_in_type_declaration,
                &metrics,
            );
            if layout.is_split() {
                self.writer.newline();
                self.writer.indent_to_column(layout.slots[0].column);
            } else {
                self.writer.space();
            }
            self.writer.write(&text);
        }

        if !decl.interfaces.is_empty() {
            self.writer.write(" implements");
            let names: Vec<Expr> = decl.interfaces.iter().map(|name| Expr::ident(name)).collect();
            self.emit_comma_list(
                &names,
                CommaIn::Superinterfaces,
                self.profile.alignment_for_superinterfaces_in_type_declaration,
                self.profile.continuation_indentation,
                true,
            );
        }

        let brace_indent =
            self.open_brace(BraceConstruct::Type, BraceIn::TypeDeclaration, false);
        if decl.members.is_empty() {
            if self.profile.insert_new_line_in_empty_type_declaration {
                self.writer.newline();
                self.writer.write_indent(brace_indent);
            }
            self.writer.write("}");
            self.writer.newline();
            return;
        }
        self.writer.newline();

        let saved = self.indent;
        self.indent = brace_indent + policy::type_body_indent(self.profile);
        for (index, member) in decl.members.iter().enumerate() {
            let blanks = if index == 0 {
                self.profile.blank_lines_before_first_class_body_declaration
            } else {
                match member {
                    Member::Field(_) => self.profile.blank_lines_before_field,
                    Member::Method(_) => self.profile.blank_lines_before_method,
                    Member::Type(_) => self.profile.blank_lines_before_member_type,
                }
            };
            if blanks > 0 {
                self.writer.blank_lines(blanks);
            }
            match member {
                Member::Field(field) => self.visit_field(field),
                Member::Method(method) => self.visit_method(method),
                Member::Type(nested) => self.visit_type(nested),
            }
        }
        self.indent = saved;
        self.writer.write_indent(brace_indent);
        self.writer.write("}");
        self.writer.newline();
    }

    fn visit_field(&mut self, field: &FieldDecl) {
        self.writer.write_indent(self.indent);
        self.emit_modifiers(&field.modifiers);
        self.emit_declarators(
            &field.declarators,
            CommaIn::MultipleFieldDeclarations,
            Some(self.profile.alignment_for_multiple_fields),
        );
        self.end_statement();
    }

    fn visit_namespace(&mut self, namespace: &NamespaceDecl) {
        self.writer.write_indent(self.indent);
        self.writer.write("namespace ");
        self.writer.write(&namespace.name);
        let brace_indent =
            self.open_brace(BraceConstruct::Namespace, BraceIn::NamespaceDeclaration, false);
        self.writer.newline();
        let saved = self.indent;
        self.indent = brace_indent + policy::namespace_body_indent(self.profile);
        self.visit_items(&namespace.items);
        self.indent = saved;
        self.writer.write_indent(brace_indent);
        self.writer.write("}");
        self.writer.newline();
    }

    // === Source units ===

    fn visit_unit(&mut self, unit: &SourceUnit) {
        self.visit_items(&unit.items);
    }

    fn visit_items(&mut self, items: &[Item]) {
        for (index, item) in items.iter().enumerate() {
            if index > 0 {
                let blanks = match item {
                    Item::Type(_) => self.profile.blank_lines_between_type_declarations,
                    Item::Method(_) => self.profile.blank_lines_before_method,
                    Item::Namespace(_) => self.profile.blank_lines_before_new_chunk,
                    Item::Stmt(_) => 0,
                };
                if blanks > 0 {
                    self.writer.blank_lines(blanks);
                }
            }
            match item {
                Item::Namespace(namespace) => self.visit_namespace(namespace),
                Item::Type(decl) => self.visit_type(decl),
                Item::Method(method) => self.visit_method(method),
                Item::Stmt(statement) => self.visit_statement(statement),
            }
        }
    }
}

fn statement_is_inlinable(statement: &Stmt) -> bool {
    matches!(
        statement,
        Stmt::Expr(_)
            | Stmt::Local(_)
            | Stmt::Return(_)
            | Stmt::Throw(_)
            | Stmt::Break(_)
            | Stmt::Continue(_)
            | Stmt::Empty
    )
}

/// Peel a `->` spine into its base receiver and ordered segments.
fn flatten_selector_chain(expr: &Expr) -> (&Expr, Vec<(&str, &[Expr])>) {
    let mut segments = Vec::new();
    let mut current = expr;
    while let Expr::MethodCall {
        receiver,
        method,
        args,
    } = current
    {
        segments.push((method.as_str(), args.as_slice()));
        current = receiver;
    }
    segments.reverse();
    (current, segments)
}

fn param_as_expr(param: &Param) -> Expr {
    let name = match &param.ty {
        Some(ty) => format!("{ty} {}", param.name),
        None => param.name.clone(),
    };
    match &param.default {
        Some(default) => Expr::Assign {
            target: Box::new(Expr::Ident(name)),
            op: AssignOp::Assign,
            value: Box::new(default.clone()),
        },
        None => Expr::Ident(name),
    }
}

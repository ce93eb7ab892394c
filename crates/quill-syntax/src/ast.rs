//! Structural tree definitions
//!
//! Plain data, supplied by an external parser. Expression chains that the
//! engine may wrap (binary operators, string concatenation) arrive flattened
//! into operand lists so a whole chain lays out as one fragment.

use serde::{Deserialize, Serialize};

/// One parsed source unit (a single file's worth of structure).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceUnit {
    pub items: Vec<Item>,
}

/// Top-level item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Item {
    Namespace(NamespaceDecl),
    Type(TypeDecl),
    Method(MethodDecl),
    Stmt(Stmt),
}

/// Namespace declaration with a braced body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamespaceDecl {
    pub name: String,
    pub items: Vec<Item>,
}

/// Type (class) declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub modifiers: Vec<String>,
    pub name: String,
    pub superclass: Option<String>,
    pub interfaces: Vec<String>,
    pub members: Vec<Member>,
}

/// Class body member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Member {
    Field(FieldDecl),
    Method(MethodDecl),
    /// Nested member type
    Type(TypeDecl),
}

/// Field declaration; several declarators may share one statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDecl {
    pub modifiers: Vec<String>,
    pub declarators: Vec<Declarator>,
}

/// One `name` or `name = init` in a field or local declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declarator {
    pub name: String,
    pub init: Option<Expr>,
}

/// Method or constructor declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDecl {
    pub modifiers: Vec<String>,
    pub name: String,
    pub params: Vec<Param>,
    pub throws: Vec<String>,
    /// `None` renders an abstract declaration terminated by a semicolon.
    pub body: Option<Block>,
    /// Constructors carry their own spacing, brace, and alignment settings.
    pub ctor: bool,
}

/// Formal parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub ty: Option<String>,
    pub name: String,
    pub default: Option<Expr>,
}

/// Statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    Block(Block),
    Local(LocalDecl),
    Expr(Expr),
    If(IfStmt),
    While(WhileStmt),
    DoWhile(DoWhileStmt),
    For(ForStmt),
    Switch(SwitchStmt),
    Return(Option<Expr>),
    Throw(Expr),
    Echo(Vec<Expr>),
    Labeled { label: String, body: Box<Stmt> },
    Break(Option<String>),
    Continue(Option<String>),
    Empty,
}

/// Braced statement list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

/// Local variable declaration; several declarators may share one statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalDecl {
    pub declarators: Vec<Declarator>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStmt {
    pub cond: Expr,
    pub then_branch: Box<Stmt>,
    pub else_branch: Option<Box<Stmt>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhileStmt {
    pub cond: Expr,
    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoWhileStmt {
    pub body: Box<Stmt>,
    pub cond: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForStmt {
    pub inits: Vec<Expr>,
    pub cond: Option<Expr>,
    pub updates: Vec<Expr>,
    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchStmt {
    pub scrutinee: Expr,
    pub cases: Vec<SwitchCase>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchCase {
    pub label: CaseLabel,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CaseLabel {
    Case(Expr),
    Default,
}

/// Expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Pre-rendered literal token text (`1`, `"a"`, `true`); the engine is
    /// not semantic and never reinterprets it.
    Literal(String),
    Ident(String),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Prefix {
        op: StepOp,
        target: Box<Expr>,
    },
    Postfix {
        target: Box<Expr>,
        op: StepOp,
    },
    /// Same-operator chain, flattened: `a + b + c` has three operands.
    Binary {
        op: BinaryOp,
        operands: Vec<Expr>,
    },
    /// String concatenation chain
    Concat {
        operands: Vec<Expr>,
    },
    Assign {
        target: Box<Expr>,
        op: AssignOp,
        value: Box<Expr>,
    },
    Conditional {
        cond: Box<Expr>,
        then_value: Box<Expr>,
        else_value: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    /// Member invocation through the object operator
    MethodCall {
        receiver: Box<Expr>,
        method: String,
        args: Vec<Expr>,
    },
    /// Invocation through the scope operator
    StaticCall {
        scope: String,
        method: String,
        args: Vec<Expr>,
    },
    /// Allocation expression; a non-identifier class expression makes it a
    /// qualified allocation.
    New {
        class: Box<Expr>,
        args: Vec<Expr>,
    },
    ArrayLit {
        entries: Vec<ArrayEntry>,
    },
    Index {
        target: Box<Expr>,
        index: Box<Expr>,
    },
    Paren(Box<Expr>),
    Cast {
        ty: String,
        operand: Box<Expr>,
    },
}

/// Array-initializer entry; `key` present renders the double-arrow form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayEntry {
    pub key: Option<Expr>,
    pub value: Expr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Shl,
    Shr,
    BitAnd,
    BitOr,
    BitXor,
    And,
    Or,
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    Neg,
    Plus,
    Not,
    BitNot,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Plus => "+",
            UnaryOp::Not => "!",
            UnaryOp::BitNot => "~",
        }
    }
}

/// Increment/decrement, usable prefix or postfix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOp {
    Inc,
    Dec,
}

impl StepOp {
    pub fn symbol(self) -> &'static str {
        match self {
            StepOp::Inc => "++",
            StepOp::Dec => "--",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignOp {
    Assign,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Concat,
}

impl AssignOp {
    pub fn symbol(self) -> &'static str {
        match self {
            AssignOp::Assign => "=",
            AssignOp::Add => "+=",
            AssignOp::Sub => "-=",
            AssignOp::Mul => "*=",
            AssignOp::Div => "/=",
            AssignOp::Mod => "%=",
            AssignOp::Concat => ".=",
        }
    }
}

impl Expr {
    /// Shorthand for an identifier expression.
    pub fn ident(name: &str) -> Expr {
        Expr::Ident(name.to_string())
    }

    /// Shorthand for a literal expression.
    pub fn lit(text: &str) -> Expr {
        Expr::Literal(text.to_string())
    }

    /// Plain call with an identifier callee.
    pub fn call(name: &str, args: Vec<Expr>) -> Expr {
        Expr::Call {
            callee: Box::new(Expr::ident(name)),
            args,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn call_shorthand_builds_ident_callee() {
        let e = Expr::call("foo", vec![Expr::lit("1")]);
        match e {
            Expr::Call { callee, args } => {
                assert_eq!(*callee, Expr::Ident("foo".to_string()));
                assert_eq!(args.len(), 1);
            }
            other => panic!("expected call, got {:?}", other),
        }
    }

    #[test]
    fn operator_symbols() {
        assert_eq!(BinaryOp::Shl.symbol(), "<<");
        assert_eq!(AssignOp::Concat.symbol(), ".=");
        assert_eq!(StepOp::Dec.symbol(), "--");
    }
}

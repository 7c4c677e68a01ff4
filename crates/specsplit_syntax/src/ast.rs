//! Syntax tree definitions for JavaScript spec files
//!
//! The tree is an arena: every statement lives in one `Vec<Stmt>` and is addressed by a [`StmtId`].
//! Statement lists (the program itself and each parsed function body) are [`Body`] records holding the
//! ids of their direct children. Consumers that want a modified tree do not copy it; they describe the
//! modification as a list of retained statement ids over the shared arena.

use std::fmt;

use specsplit_core::lang::keywords::KeywordId;

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Identifier (plain name)
pub type Ident = String;

/// Index of a statement in [`SyntaxTree`]'s arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StmtId(pub(crate) usize);

impl StmtId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Index of a statement list in [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub(crate) usize);

impl BodyId {
    /// The program's top-level statement list.
    pub const ROOT: BodyId = BodyId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// A parsed source file.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxTree {
    pub(crate) source: String,
    pub(crate) stmts: Vec<Stmt>,
    pub(crate) bodies: Vec<Body>,
}

impl SyntaxTree {
    /// The source text the tree was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The program's top-level statements.
    pub fn root(&self) -> &Body {
        self.body(BodyId::ROOT)
    }

    pub fn body(&self, id: BodyId) -> &Body {
        &self.bodies[id.0]
    }

    pub fn stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.0]
    }

    /// Source text covered by `span`.
    pub fn text(&self, span: Span) -> &str {
        &self.source[span.start..span.end]
    }

    /// Total number of statements in the arena (all bodies).
    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }

    /// Direct children of `body`, paired with their position in the body.
    pub fn children(&self, body: BodyId) -> impl Iterator<Item = (usize, StmtId, &Stmt)> + '_ {
        self.body(body)
            .stmts
            .iter()
            .enumerate()
            .map(move |(index, &id)| (index, id, self.stmt(id)))
    }

    /// Indented statement outline, one line per statement and call argument.
    ///
    /// ```text
    /// 0: call describe [0, 42)
    ///   arg 0: "A"
    ///   arg 1: function
    ///     0: call it [24, 38)
    /// ```
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.outline_body(BodyId::ROOT, 0, &mut out);
        out
    }

    fn outline_body(&self, body: BodyId, depth: usize, out: &mut String) {
        use std::fmt::Write as _;

        let indent = "  ".repeat(depth);
        for (index, _, stmt) in self.children(body) {
            let _ = writeln!(out, "{}{}: {} [{}, {})", indent, index, stmt.kind, stmt.span.start, stmt.span.end);
            let Some(call) = stmt.kind.as_call() else {
                continue;
            };
            for (arg_index, arg) in call.args.iter().enumerate() {
                match (&arg.string, arg.function_body) {
                    (Some(value), _) => {
                        let _ = writeln!(out, "{}  arg {}: {:?}", indent, arg_index, value);
                    }
                    (None, Some(inner)) => {
                        let _ = writeln!(out, "{}  arg {}: function", indent, arg_index);
                        self.outline_body(inner, depth + 2, out);
                    }
                    (None, None) => {
                        let _ = writeln!(out, "{}  arg {}: {}", indent, arg_index, self.text(arg.span));
                    }
                }
            }
        }
    }
}

/// An ordered statement list: the program, or the block body of a function argument.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub stmts: Vec<StmtId>,
    /// Bytes between the braces (or the whole file for the program).
    pub content: Span,
}

/// A statement and the source it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    /// First token start to last token end.
    pub span: Span,
    /// `span` plus leading trivia since the previous sibling and trailing same-line comments.
    /// The full spans of a body's children tile the body contents.
    pub full: Span,
}

/// Statement shapes the structural parser distinguishes.
#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    /// An expression statement.
    Expression(Expr),
    /// `{ ... }`
    Block,
    /// `;`
    Empty,
    /// `if`, `for`, `while`, `do`, `with`, `try`, `switch`.
    Control(KeywordId),
    /// `function`, `class`, `const`, `let`, `var`.
    Declaration(KeywordId),
    /// `import`, `export`.
    Module(KeywordId),
    /// `return`, `throw`, `break`, `continue`.
    Jump(KeywordId),
    /// `label: statement`
    Labeled(Ident),
}

impl StmtKind {
    /// Return the call expression if this is a call statement.
    pub fn as_call(&self) -> Option<&CallExpr> {
        match self {
            StmtKind::Expression(Expr::Call(call)) => Some(call),
            _ => None,
        }
    }
}

/// Expression statement contents.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `callee(args...)` as the whole statement.
    Call(CallExpr),
    /// Anything else; only its span is known.
    Other,
}

/// A call statement.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Callee,
    pub callee_span: Span,
    pub args: Vec<Argument>,
}

impl CallExpr {
    /// The callee name if it is a plain identifier.
    pub fn callee_name(&self) -> Option<&str> {
        match &self.callee {
            Callee::Name(name) => Some(name),
            Callee::Member(_) => None,
        }
    }
}

/// What a call statement calls.
#[derive(Debug, Clone, PartialEq)]
pub enum Callee {
    /// `describe(...)`
    Name(Ident),
    /// `describe.skip(...)`
    Member(Vec<Ident>),
}

impl fmt::Display for Callee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callee::Name(name) => write!(f, "{}", name),
            Callee::Member(path) => write!(f, "{}", path.join(".")),
        }
    }
}

/// A call argument.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub span: Span,
    /// Leading string literal contents, for titles like `'does a thing'`.
    pub string: Option<String>,
    /// Block body when the argument is a function expression or arrow function with braces.
    pub function_body: Option<BodyId>,
}

impl fmt::Display for StmtKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use specsplit_core::lang::keywords;
        match self {
            StmtKind::Expression(Expr::Call(call)) => write!(f, "call {}", call.callee),
            StmtKind::Expression(Expr::Other) => write!(f, "expression"),
            StmtKind::Block => write!(f, "block"),
            StmtKind::Empty => write!(f, "empty"),
            StmtKind::Control(k) | StmtKind::Declaration(k) | StmtKind::Module(k) | StmtKind::Jump(k) => {
                write!(f, "{}", keywords::as_str(*k))
            }
            StmtKind::Labeled(label) => write!(f, "label {}", label),
        }
    }
}

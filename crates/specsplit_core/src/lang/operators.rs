//! Operator vocabulary.
//!
//! This module defines the canonical symbol-operator set along with the one piece of metadata the
//! structural parser needs: fixity, which decides whether a token on a new line continues the previous
//! expression.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Word operators (`typeof`, `instanceof`, ...) live in [`crate::lang::keywords`].
//! - [`MAX_LEN`] is the longest spelling; the lexer uses it for longest-match scanning.
//!
//! ## Examples
//! ```rust
//! use specsplit_core::lang::operators::{self, Fixity, OperatorId};
//!
//! assert_eq!(operators::from_str("==="), Some(OperatorId::EqEqEq));
//! assert_eq!(operators::info_for(OperatorId::Bang).fixity, Fixity::Prefix);
//! ```

/// Define where an operator may appear relative to its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    /// Binary only (`*`, `===`, `=`).
    Infix,
    /// Unary prefix only (`!`, `~`).
    Prefix,
    /// Binary or unary prefix (`+`, `-`).
    InfixOrPrefix,
    /// Increment/decrement (`++`, `--`): prefix or postfix, never continues across a line break.
    Update,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    StarStar,
    Slash,
    Percent,
    PlusPlus,
    MinusMinus,

    // Comparison
    EqEq,
    EqEqEq,
    NotEq,
    NotEqEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    AndAnd,
    OrOr,
    QuestionQuestion,
    Bang,

    // Bitwise
    Amp,
    Pipe,
    Caret,
    Tilde,
    Shl,
    Shr,
    UShr,

    // Assignment
    Eq,
    PlusEq,
    MinusEq,
    StarEq,
    StarStarEq,
    SlashEq,
    PercentEq,
    AmpEq,
    PipeEq,
    CaretEq,
    ShlEq,
    ShrEq,
    UShrEq,
    AndAndEq,
    OrOrEq,
    QuestionQuestionEq,

    // Decorators
    At,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub fixity: Fixity,
}

/// Length in bytes of the longest operator spelling.
pub const MAX_LEN: usize = 4;

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    op(OperatorId::Plus, "+", Fixity::InfixOrPrefix),
    op(OperatorId::Minus, "-", Fixity::InfixOrPrefix),
    op(OperatorId::Star, "*", Fixity::Infix),
    op(OperatorId::StarStar, "**", Fixity::Infix),
    op(OperatorId::Slash, "/", Fixity::Infix),
    op(OperatorId::Percent, "%", Fixity::Infix),
    op(OperatorId::PlusPlus, "++", Fixity::Update),
    op(OperatorId::MinusMinus, "--", Fixity::Update),
    op(OperatorId::EqEq, "==", Fixity::Infix),
    op(OperatorId::EqEqEq, "===", Fixity::Infix),
    op(OperatorId::NotEq, "!=", Fixity::Infix),
    op(OperatorId::NotEqEq, "!==", Fixity::Infix),
    op(OperatorId::Lt, "<", Fixity::Infix),
    op(OperatorId::LtEq, "<=", Fixity::Infix),
    op(OperatorId::Gt, ">", Fixity::Infix),
    op(OperatorId::GtEq, ">=", Fixity::Infix),
    op(OperatorId::AndAnd, "&&", Fixity::Infix),
    op(OperatorId::OrOr, "||", Fixity::Infix),
    op(OperatorId::QuestionQuestion, "??", Fixity::Infix),
    op(OperatorId::Bang, "!", Fixity::Prefix),
    op(OperatorId::Amp, "&", Fixity::Infix),
    op(OperatorId::Pipe, "|", Fixity::Infix),
    op(OperatorId::Caret, "^", Fixity::Infix),
    op(OperatorId::Tilde, "~", Fixity::Prefix),
    op(OperatorId::Shl, "<<", Fixity::Infix),
    op(OperatorId::Shr, ">>", Fixity::Infix),
    op(OperatorId::UShr, ">>>", Fixity::Infix),
    op(OperatorId::Eq, "=", Fixity::Infix),
    op(OperatorId::PlusEq, "+=", Fixity::Infix),
    op(OperatorId::MinusEq, "-=", Fixity::Infix),
    op(OperatorId::StarEq, "*=", Fixity::Infix),
    op(OperatorId::StarStarEq, "**=", Fixity::Infix),
    op(OperatorId::SlashEq, "/=", Fixity::Infix),
    op(OperatorId::PercentEq, "%=", Fixity::Infix),
    op(OperatorId::AmpEq, "&=", Fixity::Infix),
    op(OperatorId::PipeEq, "|=", Fixity::Infix),
    op(OperatorId::CaretEq, "^=", Fixity::Infix),
    op(OperatorId::ShlEq, "<<=", Fixity::Infix),
    op(OperatorId::ShrEq, ">>=", Fixity::Infix),
    op(OperatorId::UShrEq, ">>>=", Fixity::Infix),
    op(OperatorId::AndAndEq, "&&=", Fixity::Infix),
    op(OperatorId::OrOrEq, "||=", Fixity::Infix),
    op(OperatorId::QuestionQuestionEq, "??=", Fixity::Infix),
    op(OperatorId::At, "@", Fixity::Prefix),
];

/// Return the spelling for an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Resolve an operator spelling to its identifier.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

/// Return `true` if an operator at the start of a line continues the previous expression.
pub fn continues_expression(id: OperatorId) -> bool {
    matches!(info_for(id).fixity, Fixity::Infix | Fixity::InfixOrPrefix)
}

const fn op(id: OperatorId, spelling: &'static str, fixity: Fixity) -> OperatorInfo {
    OperatorInfo { id, spelling, fixity }
}

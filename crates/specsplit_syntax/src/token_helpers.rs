//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with ID-based tokens.

use crate::lexer::{Token, TokenKind};
use specsplit_core::lang::keywords::{self, KeywordId};
use specsplit_core::lang::operators::{self, OperatorId};
use specsplit_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return the punctuation id, if this is a punctuation token.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        match self {
            TokenKind::Punctuation(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Return `true` if a statement may end right after this token.
    ///
    /// Used for automatic semicolon insertion: a line break only ends a statement after a token
    /// that can close an expression.
    pub fn can_end_expression(&self) -> bool {
        match self {
            TokenKind::Ident(_)
            | TokenKind::Number
            | TokenKind::String(_)
            | TokenKind::Template
            | TokenKind::Regex => true,
            TokenKind::Punctuation(p) => matches!(
                p,
                PunctuationId::RParen | PunctuationId::RBracket | PunctuationId::RBrace
            ),
            TokenKind::Operator(o) => matches!(o, OperatorId::PlusPlus | OperatorId::MinusMinus),
            // `return`, `break` etc. are handled as restricted productions by the parser.
            TokenKind::Keyword(_) | TokenKind::Eof => false,
        }
    }

    /// Return `true` if this token, at the start of a line, continues the previous expression.
    pub fn continues_expression(&self) -> bool {
        match self {
            TokenKind::Punctuation(p) => matches!(
                p,
                PunctuationId::Dot
                    | PunctuationId::QuestionDot
                    | PunctuationId::LParen
                    | PunctuationId::LBracket
                    | PunctuationId::Comma
                    | PunctuationId::FatArrow
                    | PunctuationId::Question
                    | PunctuationId::Colon
            ),
            TokenKind::Operator(o) => operators::continues_expression(*o),
            TokenKind::Keyword(k) => keywords::info_for(*k).continues_expression,
            TokenKind::Template => true,
            _ => false,
        }
    }

    /// Return `true` for the end-of-input marker.
    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.operator_id()`.
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind.operator_id()
    }

    /// Convenience wrapper for `self.kind.punctuation_id()`.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        self.kind.punctuation_id()
    }
}

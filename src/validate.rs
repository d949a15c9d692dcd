//! # Validation Hand-Off
//!
//! Semantic checking lives outside this crate. A node participates by
//! forwarding itself (or selected children) to an external [`Validator`]
//! through `Node::validate`; the validator and its [`Scope`] are opaque
//! capability objects from the tree's point of view.
//!
//! Failures travel back as [`ValidationError`]: a message key for the
//! external diagnostic catalog plus the source span of the offending node,
//! so tooling can point at the SQL text. Nodes never recover from a
//! validation failure locally.

use crate::node::{Call, Identifier, Literal};
use crate::span::Span;
use std::fmt;

/// Name-resolution context supplied by the external validator. Opaque to
/// the tree; `describe` exists only for diagnostics.
pub trait Scope {
    fn describe(&self) -> &str {
        "statement"
    }
}

/// The external semantic checker. Leaf hooks default to accepting, so a
/// validator implements only the checks it performs; `validate_query` has no
/// default because forwarding a sub-query somewhere is the one hand-off
/// every validator must support.
pub trait Validator {
    fn validate_identifier(
        &mut self,
        _id: &Identifier,
        _scope: &dyn Scope,
    ) -> Result<(), ValidationError> {
        Ok(())
    }

    fn validate_literal(
        &mut self,
        _lit: &Literal,
        _scope: &dyn Scope,
    ) -> Result<(), ValidationError> {
        Ok(())
    }

    fn validate_call(&mut self, _call: &Call, _scope: &dyn Scope) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Validate a complete query operand (e.g. the source of TRAIN MODEL).
    fn validate_query(
        &mut self,
        query: &crate::node::Node,
        scope: &dyn Scope,
    ) -> Result<(), ValidationError>;
}

/// A semantic failure, keyed into the external message catalog and pinned
/// to the source location it arose from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub span: Span,
    pub key: &'static str,
    pub detail: String,
}

impl ValidationError {
    pub fn new(span: Span, key: &'static str, detail: impl Into<String>) -> ValidationError {
        ValidationError {
            span,
            key,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} at {}", self.key, self.detail, self.span)
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_carries_key_and_position() {
        let err = ValidationError::new(Span::point(4, 11), "unknownColumn", "no column `gold`");
        assert_eq!(
            err.to_string(),
            "unknownColumn: no column `gold` at line 4 column 11"
        );
    }
}

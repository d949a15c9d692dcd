//! # Visitor Protocol
//!
//! External passes (relational conversion, analysis, rewrites) walk trees
//! through the [`Visitor`] trait. Every method defaults to
//! [`Visited::Unhandled`], so a visitor implements only the cases it cares
//! about and new node kinds can exist before every consumer learns about
//! them. Callers decide whether `Unhandled` is an error; the dispatch layer
//! never raises one.

use crate::node::{Call, Identifier, Literal, NodeList, StatementNode};

/// Outcome of offering a node to a visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visited<R> {
    Handled(R),
    /// The visitor has no case for this node kind.
    Unhandled,
}

impl<R> Visited<R> {
    pub fn is_handled(&self) -> bool {
        matches!(self, Visited::Handled(_))
    }

    pub fn handled(self) -> Option<R> {
        match self {
            Visited::Handled(r) => Some(r),
            Visited::Unhandled => None,
        }
    }

    pub fn unwrap_or(self, default: R) -> R {
        match self {
            Visited::Handled(r) => r,
            Visited::Unhandled => default,
        }
    }

    pub fn map<T>(self, f: impl FnOnce(R) -> T) -> Visited<T> {
        match self {
            Visited::Handled(r) => Visited::Handled(f(r)),
            Visited::Unhandled => Visited::Unhandled,
        }
    }
}

/// A tree walker with per-kind cases. All cases are optional.
pub trait Visitor {
    type Output;

    fn visit_identifier(&mut self, _id: &Identifier) -> Visited<Self::Output> {
        Visited::Unhandled
    }

    fn visit_literal(&mut self, _lit: &Literal) -> Visited<Self::Output> {
        Visited::Unhandled
    }

    fn visit_list(&mut self, _list: &NodeList) -> Visited<Self::Output> {
        Visited::Unhandled
    }

    fn visit_call(&mut self, _call: &Call) -> Visited<Self::Output> {
        Visited::Unhandled
    }

    fn visit_statement(&mut self, _stmt: &StatementNode) -> Visited<Self::Output> {
        Visited::Unhandled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unhandled_maps_to_unhandled() {
        let v: Visited<u32> = Visited::Unhandled;
        assert!(!v.is_handled());
        assert_eq!(v.map(|n| n + 1), Visited::Unhandled);
        assert_eq!(Visited::Unhandled.unwrap_or(7u32), 7);
    }

    #[test]
    fn handled_carries_its_value() {
        let v = Visited::Handled(41u32);
        assert!(v.is_handled());
        assert_eq!(v.map(|n| n + 1).handled(), Some(42));
    }
}

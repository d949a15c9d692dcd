//! # sqltree - SQL AST with Precedence-Aware Unparsing
//!
//! This crate is the tree layer of a SQL front end: the node model a parser
//! produces, the operator/precedence metadata that governs how trees render
//! back to text, and the dispatch protocol that lets validators, visitors,
//! and rewrite passes consume trees without knowing every statement kind.
//!
//! ## Design Goals
//!
//! 1. **Minimal parentheses, provably placed**: rendering decisions come
//!    from one rule over two-sided precedence pairs, so `a + b * c` and
//!    `(a + b) * c` both come back exactly as written
//! 2. **Open statement set**: new commands plug in as `'static` statement
//!    definitions; no dispatch site enumerates the catalog
//! 3. **Owned, single-writer trees**: cloning is independence, rewriting
//!    requires `&mut`, and the operator registry is immutable static data
//!    shared freely across threads
//!
//! ## Module Structure
//!
//! - `span`: line/column source positions
//! - `operator`: operator descriptors, precedence pairs, registry
//! - `node`: node variants and the dispatch protocol
//! - `unparse`: frame-based text rendering
//! - `visit`: visitor protocol with an explicit unhandled sentinel
//! - `validate`: hand-off hooks for the external semantic checker
//! - `stmt`: the statement catalog (DDL, model lifecycle, SHOW)
//!
//! ## Usage Example
//!
//! ```ignore
//! use sqltree::stmt::AlterTableRename;
//! use sqltree::{Identifier, Span};
//!
//! let stmt = AlterTableRename::build(
//!     Span::ZERO,
//!     Identifier::simple(Span::ZERO, "t"),
//!     Identifier::simple(Span::ZERO, "u"),
//! )?;
//! assert_eq!(stmt.unparse(), "ALTER TABLE t RENAME TO u");
//! ```
//!
//! ## Processing Pipeline
//!
//! ```text
//! SQL text → (external parser) → Node tree
//!     → validate(validator, scope)   external semantic check
//!     → accept(visitor)              external conversion/analysis
//!     → unparse()                    canonical SQL text
//! ```
//!
//! Trees are built and consumed on one logical thread; concurrency lives at
//! the statement level, each worker owning its own tree.

pub mod node;
pub mod operator;
pub mod span;
pub mod stmt;
pub mod unparse;
pub mod validate;
pub mod visit;

pub use node::{
    Call, Identifier, Literal, LiteralKind, LiteralValue, Node, NodeKind, NodeList, StatementDef,
    StatementNode,
};
pub use operator::{registry, OperandCount, Operator, Shape, MAX_PRECEDENCE};
pub use span::Span;
pub use unparse::{unparse, FrameKind, Unparser};
pub use validate::{Scope, ValidationError, Validator};
pub use visit::{Visited, Visitor};

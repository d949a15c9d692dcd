//! # Unparser Engine
//!
//! Turns a tree back into canonical SQL text. The engine has two layers:
//!
//! 1. **Writer**: a token stream with automatic spacing and a stack of
//!    [frames](FrameKind). A frame groups a run of emitted tokens under one
//!    delimiter/separator policy: a parenthesized comma list, a bare comma
//!    list, a function-call argument list, or a keyword clause such as
//!    `OFFSET <n> ROWS`.
//! 2. **Precedence walk**: [`Unparser::node`] renders a node under an
//!    ambient precedence context `(left, right)` inherited from its operand
//!    position. A call whose operator binds more weakly than the ambient
//!    bound on either side is wrapped in a parenthesis frame; everything
//!    else flattens.
//!
//! ## Ambient Context
//!
//! When rendering operand `i` of an operator with precedence pair `(L, R)`:
//! the first operand inherits `L` as its right bound, the last inherits `R`
//! as its left bound, and interior operands are bounded by the operator on
//! both sides. Identifiers and literals bind maximally and are never
//! parenthesized; a list supplies its own delimiters and is exempt from
//! precedence entirely.
//!
//! ## Guarantees
//!
//! For any well-formed tree, re-parsing the rendered text produces a tree
//! that is `deep_eq` to the original, modulo numeric literal normalization.
//! Rendering `a + b * c` emits no parentheses; rendering `(a + b) * c`
//! parenthesizes the addition and nothing else.

use crate::node::{Call, Identifier, Literal, LiteralValue, Node, NodeList};
use crate::operator::Shape;
use smallvec::SmallVec;

/// Render a tree to SQL text under a top-level (unbounded) context.
pub fn unparse(node: &Node) -> String {
    let mut writer = Unparser::new();
    writer.node(node, 0, 0);
    writer.finish()
}

/// Delimiter/separator policy for a run of emitted tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// `(a, b, c)` with a space before the opening parenthesis.
    List,
    /// `a, b, c` with no delimiters (SELECT columns, SORT BY keys).
    BareList,
    /// `(a, b, c)` glued to the function name.
    FunctionArgs,
    /// Keyword run with plain spacing, e.g. `OFFSET 10 ROWS`.
    Clause,
    /// Precedence parentheses around a nested call.
    Paren,
}

/// Frame-based SQL text writer. Statement definitions drive it directly;
/// expression rendering goes through [`Unparser::node`].
pub struct Unparser {
    out: String,
    frames: SmallVec<[FrameKind; 8]>,
}

impl Unparser {
    pub fn new() -> Unparser {
        Unparser {
            out: String::new(),
            frames: SmallVec::new(),
        }
    }

    pub fn finish(self) -> String {
        debug_assert!(self.frames.is_empty(), "unbalanced unparser frames");
        self.out
    }

    /// Emit a keyword (or any word token) with automatic spacing.
    pub fn keyword(&mut self, kw: &str) {
        self.word(kw);
    }

    fn word(&mut self, s: &str) {
        if !self.out.is_empty() && !self.out.ends_with('(') {
            self.out.push(' ');
        }
        self.out.push_str(s);
    }

    fn glue(&mut self, s: &str) {
        self.out.push_str(s);
    }

    pub fn start_frame(&mut self, kind: FrameKind) {
        match kind {
            FrameKind::List | FrameKind::Paren => self.word("("),
            FrameKind::FunctionArgs => self.glue("("),
            FrameKind::BareList | FrameKind::Clause => {}
        }
        self.frames.push(kind);
    }

    /// Separator between items of the current frame. Comma for list-like
    /// frames, nothing for clauses (spacing alone separates them).
    pub fn sep(&mut self) {
        match self.frames.last() {
            Some(FrameKind::Clause) => {}
            _ => self.glue(","),
        }
    }

    pub fn end_frame(&mut self) {
        let kind = self.frames.pop();
        debug_assert!(kind.is_some(), "end_frame without start_frame");
        match kind {
            Some(FrameKind::List | FrameKind::FunctionArgs | FrameKind::Paren) => self.glue(")"),
            _ => {}
        }
    }

    /// Render `node` under the ambient precedence bounds `(left, right)`.
    pub fn node(&mut self, node: &Node, left: u32, right: u32) {
        match node {
            Node::Identifier(id) => self.identifier(id),
            Node::Literal(lit) => self.literal(lit),
            Node::List(list) => self.list(list),
            Node::Call(call) => self.call(call, left, right),
            Node::Statement(stmt) => stmt.def.unparse(stmt, self),
        }
    }

    fn identifier(&mut self, id: &Identifier) {
        if id.names.is_empty() {
            if id.star {
                self.word("*");
            }
            return;
        }
        let joined = id.names.join(".");
        self.word(&joined);
        if id.star {
            self.glue(".*");
        }
    }

    fn literal(&mut self, lit: &Literal) {
        match &lit.value {
            LiteralValue::Null => self.keyword("NULL"),
            LiteralValue::Boolean(true) => self.keyword("TRUE"),
            LiteralValue::Boolean(false) => self.keyword("FALSE"),
            LiteralValue::Number(text) => self.word(text),
            LiteralValue::String(text) => {
                let quoted = format!("'{}'", text.replace('\'', "''"));
                self.word(&quoted);
            }
        }
    }

    /// Default list rendering: parenthesized, comma-separated. Never
    /// subject to precedence.
    fn list(&mut self, list: &NodeList) {
        self.start_frame(FrameKind::List);
        for (i, item) in list.items.iter().enumerate() {
            if i > 0 {
                self.sep();
            }
            self.node(item, 0, 0);
        }
        self.end_frame();
    }

    /// Comma-separated list without delimiters, for clause positions that
    /// provide their own keywords (SELECT columns, SORT BY keys).
    pub fn bare_list(&mut self, list: &NodeList) {
        self.start_frame(FrameKind::BareList);
        for (i, item) in list.items.iter().enumerate() {
            if i > 0 {
                self.sep();
            }
            self.node(item, 0, 0);
        }
        self.end_frame();
    }

    fn call(&mut self, call: &Call, left: u32, right: u32) {
        if call.op.needs_parens(left, right) {
            self.start_frame(FrameKind::Paren);
            self.call_body(call, 0, 0);
            self.end_frame();
        } else {
            self.call_body(call, left, right);
        }
    }

    fn call_body(&mut self, call: &Call, left: u32, right: u32) {
        let op = call.op;
        match op.shape {
            Shape::Infix => {
                let last = call.operands.len() - 1;
                for (i, operand) in call.operands.iter().enumerate() {
                    if i > 0 {
                        self.keyword(op.name);
                    }
                    let ambient_left = if i == 0 { left } else { op.right_prec };
                    let ambient_right = if i == last { right } else { op.left_prec };
                    self.node(operand, ambient_left, ambient_right);
                }
            }
            Shape::Prefix => {
                self.keyword(op.name);
                self.node(&call.operands[0], op.right_prec, right);
            }
            Shape::Postfix => {
                self.node(&call.operands[0], left, op.left_prec);
                self.keyword(op.name);
            }
            // Special-syntax calls are rejected at construction; the
            // function form is the total fallback.
            Shape::Function | Shape::Special => {
                self.word(op.name);
                self.start_frame(FrameKind::FunctionArgs);
                for (i, operand) in call.operands.iter().enumerate() {
                    if i > 0 {
                        self.sep();
                    }
                    self.node(operand, 0, 0);
                }
                self.end_frame();
            }
        }
    }
}

impl Default for Unparser {
    fn default() -> Self {
        Unparser::new()
    }
}

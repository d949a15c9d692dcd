//! # AST Node Model
//!
//! This module defines the tree node variants a parsed SQL statement is made
//! of and the dispatch protocol every variant supports. The design goals:
//!
//! 1. **Owned trees**: a parent owns its operands by value; dropping a
//!    statement releases the whole tree, and cloning yields a fully
//!    independent copy
//! 2. **Closed core, open edge**: the expression kinds (identifier, literal,
//!    list, call) are a closed enum matched exhaustively; statements plug in
//!    through the [`StatementDef`] capability record without touching any
//!    dispatch site
//! 3. **Checked construction**: operand counts are verified against the
//!    operator's declared arity when a call is built, so a malformed shape
//!    is caught at the construction boundary rather than deep inside a
//!    rendering or validation pass
//!
//! ## Node Variants
//!
//! - [`Identifier`]: qualified name components plus a star flag (`t.*`)
//! - [`Literal`]: null, boolean, number, or string scalar
//! - [`NodeList`]: ordered children, insertion order significant
//! - [`Call`]: an operator applied to operands
//! - [`StatementNode`]: a top-level command whose operator has special
//!   syntax; behavior is supplied by a `'static` [`StatementDef`]
//!
//! ## Dispatch Protocol
//!
//! Every node supports four operations: `clone_with` (copy with a new root
//! span), `deep_eq` (structural equality, span-insensitive), `accept`
//! (visitor offer, `Unhandled` sentinel instead of failure), and `validate`
//! (hand-off to the external validator). Rewrite passes holding exclusive
//! ownership may additionally swap a child through `replace_operand` /
//! `replace_item`.

use crate::operator::{Operator, Shape};
use crate::span::Span;
use crate::unparse::Unparser;
use crate::validate::{Scope, ValidationError, Validator};
use crate::visit::{Visited, Visitor};
use eyre::{bail, Result};
use smallvec::SmallVec;
use std::fmt;

/// Discriminant for the node variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Identifier,
    Literal,
    List,
    Call,
    Statement,
}

/// A member of the AST. See the module docs for the variant catalog.
#[derive(Debug, Clone)]
pub enum Node {
    Identifier(Identifier),
    Literal(Literal),
    List(NodeList),
    Call(Call),
    Statement(StatementNode),
}

/// A simple or qualified name, optionally ending in `*`.
#[derive(Debug, Clone)]
pub struct Identifier {
    pub names: SmallVec<[String; 2]>,
    pub star: bool,
    pub span: Span,
}

impl Identifier {
    pub fn simple(span: Span, name: impl Into<String>) -> Identifier {
        let mut names = SmallVec::new();
        names.push(name.into());
        Identifier {
            names,
            star: false,
            span,
        }
    }

    pub fn qualified<S: Into<String>>(span: Span, parts: impl IntoIterator<Item = S>) -> Identifier {
        Identifier {
            names: parts.into_iter().map(Into::into).collect(),
            star: false,
            span,
        }
    }

    /// A bare `*`.
    pub fn star(span: Span) -> Identifier {
        Identifier {
            names: SmallVec::new(),
            star: true,
            span,
        }
    }

    /// `t.*` and friends.
    pub fn qualified_star<S: Into<String>>(
        span: Span,
        parts: impl IntoIterator<Item = S>,
    ) -> Identifier {
        Identifier {
            names: parts.into_iter().map(Into::into).collect(),
            star: true,
            span,
        }
    }

    pub fn is_simple(&self) -> bool {
        self.names.len() == 1 && !self.star
    }

    /// The last name component, if any.
    pub fn last(&self) -> Option<&str> {
        self.names.last().map(String::as_str)
    }
}

/// Source type tag of a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Null,
    Boolean,
    Number,
    String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Null,
    Boolean(bool),
    /// Numeric text. Integer text is normalized at construction, so `007`
    /// and `7` compare equal and render identically.
    Number(String),
    String(String),
}

/// A typed scalar constant.
#[derive(Debug, Clone)]
pub struct Literal {
    pub value: LiteralValue,
    pub span: Span,
}

impl Literal {
    pub fn null(span: Span) -> Literal {
        Literal {
            value: LiteralValue::Null,
            span,
        }
    }

    pub fn boolean(span: Span, value: bool) -> Literal {
        Literal {
            value: LiteralValue::Boolean(value),
            span,
        }
    }

    pub fn string(span: Span, value: impl Into<String>) -> Literal {
        Literal {
            value: LiteralValue::String(value.into()),
            span,
        }
    }

    /// Numeric literal from source text. Integer text is re-rendered in
    /// canonical form; non-numeric text is rejected.
    pub fn number(span: Span, text: impl Into<String>) -> Result<Literal> {
        let text = text.into();
        let value = if let Ok(int) = text.parse::<i128>() {
            int.to_string()
        } else if text.parse::<f64>().is_ok() {
            text
        } else {
            bail!("malformed numeric literal {:?} at {}", text, span);
        };
        Ok(Literal {
            value: LiteralValue::Number(value),
            span,
        })
    }

    pub fn kind(&self) -> LiteralKind {
        match self.value {
            LiteralValue::Null => LiteralKind::Null,
            LiteralValue::Boolean(_) => LiteralKind::Boolean,
            LiteralValue::Number(_) => LiteralKind::Number,
            LiteralValue::String(_) => LiteralKind::String,
        }
    }
}

/// An ordered sequence of child nodes.
#[derive(Debug, Clone)]
pub struct NodeList {
    pub items: Vec<Node>,
    pub span: Span,
}

impl NodeList {
    pub fn new(span: Span, items: Vec<Node>) -> NodeList {
        NodeList { items, span }
    }

    pub fn empty(span: Span) -> NodeList {
        NodeList {
            items: Vec::new(),
            span,
        }
    }

    pub fn single(span: Span, item: Node) -> NodeList {
        NodeList {
            items: vec![item],
            span,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, item: Node) {
        self.items.push(item);
    }

    /// Swap out one element during a rewrite pass. Returns the old child.
    pub fn replace_item(&mut self, index: usize, item: Node) -> Node {
        assert!(
            index < self.items.len(),
            "list index {} out of bounds ({} items)",
            index,
            self.items.len()
        );
        std::mem::replace(&mut self.items[index], item)
    }
}

/// An operator applied to an ordered operand sequence.
#[derive(Debug, Clone)]
pub struct Call {
    pub op: &'static Operator,
    pub operands: Vec<Node>,
    pub span: Span,
}

impl Call {
    /// Build a call, checking the operand count against the operator's
    /// declared arity. Operators with special syntax are rejected here;
    /// they are constructed through their statement definitions.
    pub fn new(op: &'static Operator, span: Span, operands: Vec<Node>) -> Result<Node> {
        if op.shape == Shape::Special {
            bail!(
                "operator {} has special syntax and must be built through its statement definition",
                op.name
            );
        }
        if !op.accepts(operands.len()) {
            bail!(
                "operator {} takes {} operands, got {} at {}",
                op.name,
                op.operands,
                operands.len(),
                span
            );
        }
        Ok(Node::Call(Call { op, operands, span }))
    }

    pub fn binary(op: &'static Operator, span: Span, left: Node, right: Node) -> Result<Node> {
        Call::new(op, span, vec![left, right])
    }

    pub fn unary(op: &'static Operator, span: Span, operand: Node) -> Result<Node> {
        Call::new(op, span, vec![operand])
    }

    pub fn operand(&self, index: usize) -> &Node {
        &self.operands[index]
    }

    /// Swap out one operand during a rewrite pass. Returns the old child.
    pub fn replace_operand(&mut self, index: usize, node: Node) -> Node {
        assert!(
            index < self.operands.len(),
            "operand index {} out of bounds for {} ({} operands)",
            index,
            self.op.name,
            self.operands.len()
        );
        std::mem::replace(&mut self.operands[index], node)
    }
}

/// Capability record for one statement kind. Implementations are `'static`
/// singletons; a [`StatementNode`] borrows one and routes unparsing and
/// validation through it, so adding a statement kind never touches the
/// dispatch sites in this module.
pub trait StatementDef: Sync {
    /// The statement's operator. Statement operators have special syntax
    /// and zero precedence.
    fn operator(&self) -> &'static Operator;

    /// Identity name of this kind. Distinct per definition even when
    /// several definitions share an operator (the ALTER TABLE family).
    fn name(&self) -> &'static str {
        self.operator().name
    }

    /// Declared operand count; defaults to the operator's.
    fn operand_count(&self) -> crate::operator::OperandCount {
        self.operator().operands
    }

    /// Emit this statement's keyword/operand sequence.
    fn unparse(&self, stmt: &StatementNode, writer: &mut Unparser);

    /// Semantic-check hand-off. The default accepts; kinds with semantic
    /// content forward the relevant child, not the whole statement.
    fn validate(
        &self,
        _stmt: &StatementNode,
        _validator: &mut dyn Validator,
        _scope: &dyn Scope,
    ) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// A top-level command: a statement definition applied to clause operands.
#[derive(Clone)]
pub struct StatementNode {
    pub def: &'static dyn StatementDef,
    pub operands: Vec<Node>,
    pub span: Span,
}

impl StatementNode {
    /// Build a statement node, checking the operand count declared by the
    /// definition.
    pub fn new(def: &'static dyn StatementDef, span: Span, operands: Vec<Node>) -> Result<Node> {
        if !def.operand_count().contains(operands.len()) {
            bail!(
                "{} takes {} operands, got {} at {}",
                def.name(),
                def.operand_count(),
                operands.len(),
                span
            );
        }
        Ok(Node::Statement(StatementNode { def, operands, span }))
    }

    pub fn operand(&self, index: usize) -> &Node {
        &self.operands[index]
    }

    /// Swap out one clause during a rewrite pass. Returns the old child.
    pub fn replace_operand(&mut self, index: usize, node: Node) -> Node {
        assert!(
            index < self.operands.len(),
            "operand index {} out of bounds for {} ({} operands)",
            index,
            self.def.name(),
            self.operands.len()
        );
        std::mem::replace(&mut self.operands[index], node)
    }

    /// Kind identity: same operator singleton and same definition name.
    fn same_def(&self, other: &StatementNode) -> bool {
        std::ptr::eq(self.def.operator(), other.def.operator())
            && self.def.name() == other.def.name()
    }
}

impl fmt::Debug for StatementNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatementNode")
            .field("def", &self.def.name())
            .field("operands", &self.operands)
            .field("span", &self.span)
            .finish()
    }
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Identifier(_) => NodeKind::Identifier,
            Node::Literal(_) => NodeKind::Literal,
            Node::List(_) => NodeKind::List,
            Node::Call(_) => NodeKind::Call,
            Node::Statement(_) => NodeKind::Statement,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Node::Identifier(id) => id.span,
            Node::Literal(lit) => lit.span,
            Node::List(list) => list.span,
            Node::Call(call) => call.span,
            Node::Statement(stmt) => stmt.span,
        }
    }

    /// Clone the subtree, stamping the copy's root with `span`. Child spans
    /// are preserved.
    pub fn clone_with(&self, span: Span) -> Node {
        let mut copy = self.clone();
        match &mut copy {
            Node::Identifier(id) => id.span = span,
            Node::Literal(lit) => lit.span = span,
            Node::List(list) => list.span = span,
            Node::Call(call) => call.span = span,
            Node::Statement(stmt) => stmt.span = span,
        }
        copy
    }

    /// Structural equality: kind, operator identity, then operand-wise deep
    /// comparison. Spans are ignored. Mismatched shapes short-circuit to
    /// unequal.
    pub fn deep_eq(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Identifier(a), Node::Identifier(b)) => a.names == b.names && a.star == b.star,
            (Node::Literal(a), Node::Literal(b)) => a.value == b.value,
            (Node::List(a), Node::List(b)) => deep_eq_slices(&a.items, &b.items),
            (Node::Call(a), Node::Call(b)) => {
                std::ptr::eq(a.op, b.op) && deep_eq_slices(&a.operands, &b.operands)
            }
            (Node::Statement(a), Node::Statement(b)) => {
                a.same_def(b) && deep_eq_slices(&a.operands, &b.operands)
            }
            _ => false,
        }
    }

    /// Offer this node to a visitor. A visitor without a case for the kind
    /// yields [`Visited::Unhandled`]; the caller decides what that means.
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> Visited<V::Output> {
        match self {
            Node::Identifier(id) => visitor.visit_identifier(id),
            Node::Literal(lit) => visitor.visit_literal(lit),
            Node::List(list) => visitor.visit_list(list),
            Node::Call(call) => visitor.visit_call(call),
            Node::Statement(stmt) => visitor.visit_statement(stmt),
        }
    }

    /// Hand this node to the external validator. Lists validate their
    /// elements; calls and leaves forward to the validator's hooks;
    /// statements route through their definition.
    pub fn validate(
        &self,
        validator: &mut dyn Validator,
        scope: &dyn Scope,
    ) -> Result<(), ValidationError> {
        match self {
            Node::Identifier(id) => validator.validate_identifier(id, scope),
            Node::Literal(lit) => validator.validate_literal(lit, scope),
            Node::List(list) => {
                for item in &list.items {
                    item.validate(validator, scope)?;
                }
                Ok(())
            }
            Node::Call(call) => validator.validate_call(call, scope),
            Node::Statement(stmt) => stmt.def.validate(stmt, validator, scope),
        }
    }

    /// Render this tree back to SQL text.
    pub fn unparse(&self) -> String {
        crate::unparse::unparse(self)
    }
}

fn deep_eq_slices(a: &[Node], b: &[Node]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.deep_eq(y))
}

//! Minimal `SELECT <columns> FROM <table> [WHERE <predicate>]`
//!
//! Enough of a query statement for the kinds that carry a sub-query (model
//! training, SORT BY wrapping). The column row is a bare comma list; the
//! optional predicate is an empty-or-singleton list so every operand slot
//! always holds a real node.

use crate::node::{Identifier, Node, NodeList, StatementDef, StatementNode};
use crate::operator::{OperandCount, Operator};
use crate::span::Span;
use crate::unparse::Unparser;
use eyre::Result;

static SELECT_OP: Operator = Operator::special("SELECT", OperandCount::Exact(3));

pub struct Select;

pub static SELECT: Select = Select;

impl Select {
    /// Operands: column list, source table, where list (empty or one
    /// predicate).
    pub fn build(
        span: Span,
        columns: NodeList,
        from: Identifier,
        where_clause: Option<Node>,
    ) -> Result<Node> {
        let where_list = match where_clause {
            Some(pred) => NodeList::single(Span::ZERO, pred),
            None => NodeList::empty(Span::ZERO),
        };
        StatementNode::new(
            &SELECT,
            span,
            vec![
                Node::List(columns),
                Node::Identifier(from),
                Node::List(where_list),
            ],
        )
    }
}

impl StatementDef for Select {
    fn operator(&self) -> &'static Operator {
        &SELECT_OP
    }

    fn unparse(&self, stmt: &StatementNode, writer: &mut Unparser) {
        writer.keyword("SELECT");
        match stmt.operand(0) {
            Node::List(columns) => writer.bare_list(columns),
            other => writer.node(other, 0, 0),
        }
        writer.keyword("FROM");
        writer.node(stmt.operand(1), 0, 0);
        if let Node::List(where_list) = stmt.operand(2) {
            if let Some(predicate) = where_list.items.first() {
                writer.keyword("WHERE");
                writer.node(predicate, 0, 0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Call, Literal};
    use crate::operator::registry;

    fn id(name: &str) -> Identifier {
        Identifier::simple(Span::ZERO, name)
    }

    #[test]
    fn select_columns_are_a_bare_list() {
        let stmt = Select::build(
            Span::ZERO,
            NodeList::new(
                Span::ZERO,
                vec![Node::Identifier(id("a")), Node::Identifier(id("b"))],
            ),
            id("t"),
            None,
        )
        .unwrap();
        assert_eq!(stmt.unparse(), "SELECT a, b FROM t");
    }

    #[test]
    fn select_star_and_where() {
        let predicate = Call::binary(
            &registry::GT,
            Span::ZERO,
            Node::Identifier(id("gold")),
            Node::Literal(Literal::number(Span::ZERO, "100").unwrap()),
        )
        .unwrap();
        let stmt = Select::build(
            Span::ZERO,
            NodeList::single(Span::ZERO, Node::Identifier(Identifier::star(Span::ZERO))),
            id("players"),
            Some(predicate),
        )
        .unwrap();
        assert_eq!(stmt.unparse(), "SELECT * FROM players WHERE gold > 100");
    }
}

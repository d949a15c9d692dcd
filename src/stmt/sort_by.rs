//! `<query> SORT BY <keys> [OFFSET <n> ROWS] [FETCH NEXT <n> ROWS ONLY]`
//!
//! A purely syntactic wrapper around a query; downstream rewrite passes
//! absorb it into the query's own ordering clauses through
//! `replace_operand`. Absent clauses are empty lists, so the operand shape
//! is always four slots: query, keys, offset, fetch.

use crate::node::{Node, NodeList, StatementDef, StatementNode};
use crate::operator::{OperandCount, Operator};
use crate::span::Span;
use crate::unparse::{FrameKind, Unparser};
use eyre::Result;

static SORT_BY_OP: Operator = Operator::special("SORT BY", OperandCount::Exact(4));

pub struct SortBy;

pub static SORT_BY: SortBy = SortBy;

impl SortBy {
    pub fn build(
        span: Span,
        query: Node,
        keys: NodeList,
        offset: Option<Node>,
        fetch: Option<Node>,
    ) -> Result<Node> {
        let offset_list = match offset {
            Some(n) => NodeList::single(Span::ZERO, n),
            None => NodeList::empty(Span::ZERO),
        };
        let fetch_list = match fetch {
            Some(n) => NodeList::single(Span::ZERO, n),
            None => NodeList::empty(Span::ZERO),
        };
        StatementNode::new(
            &SORT_BY,
            span,
            vec![
                query,
                Node::List(keys),
                Node::List(offset_list),
                Node::List(fetch_list),
            ],
        )
    }
}

impl StatementDef for SortBy {
    fn operator(&self) -> &'static Operator {
        &SORT_BY_OP
    }

    fn unparse(&self, stmt: &StatementNode, writer: &mut Unparser) {
        writer.node(stmt.operand(0), 0, 0);
        if let Node::List(keys) = stmt.operand(1) {
            if !keys.is_empty() {
                writer.keyword(self.operator().name);
                writer.bare_list(keys);
            }
        }
        if let Node::List(offset) = stmt.operand(2) {
            if let Some(count) = offset.items.first() {
                writer.start_frame(FrameKind::Clause);
                writer.keyword("OFFSET");
                writer.node(count, 0, 0);
                writer.keyword("ROWS");
                writer.end_frame();
            }
        }
        if let Node::List(fetch) = stmt.operand(3) {
            if let Some(count) = fetch.items.first() {
                writer.start_frame(FrameKind::Clause);
                writer.keyword("FETCH");
                writer.keyword("NEXT");
                writer.node(count, 0, 0);
                writer.keyword("ROWS");
                writer.keyword("ONLY");
                writer.end_frame();
            }
        }
    }
}

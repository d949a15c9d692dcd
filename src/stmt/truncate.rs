//! `TRUNCATE TABLE <table>`

use crate::node::{Identifier, Node, StatementDef, StatementNode};
use crate::operator::{OperandCount, Operator};
use crate::span::Span;
use crate::unparse::Unparser;
use eyre::Result;

static TRUNCATE_TABLE_OP: Operator = Operator::special("TRUNCATE TABLE", OperandCount::Exact(1));

pub struct TruncateTable;

pub static TRUNCATE_TABLE: TruncateTable = TruncateTable;

impl TruncateTable {
    pub fn build(span: Span, table: Identifier) -> Result<Node> {
        StatementNode::new(&TRUNCATE_TABLE, span, vec![Node::Identifier(table)])
    }
}

impl StatementDef for TruncateTable {
    fn operator(&self) -> &'static Operator {
        &TRUNCATE_TABLE_OP
    }

    fn unparse(&self, stmt: &StatementNode, writer: &mut Unparser) {
        writer.keyword("TRUNCATE");
        writer.keyword("TABLE");
        writer.node(stmt.operand(0), 0, 0);
    }
}

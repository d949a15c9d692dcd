//! # ALTER TABLE Family
//!
//! Three statement kinds share the `ALTER TABLE` operator and distinguish
//! themselves by definition name: rename table, rename column, and drop
//! column(s). Dropping several columns repeats the `DROP COLUMN` keyword
//! before every column rather than folding them into one comma list; that
//! is the dialect's observed surface form and is preserved literally.

use crate::node::{Identifier, Node, NodeList, StatementDef, StatementNode};
use crate::operator::{OperandCount, Operator};
use crate::span::Span;
use crate::unparse::Unparser;
use eyre::Result;

/// Operator shared by the ALTER TABLE family.
static ALTER_TABLE: Operator = Operator::special("ALTER TABLE", OperandCount::Range(2, 3));

/// `ALTER TABLE <table> RENAME TO <new_name>`
pub struct AlterTableRename;

pub static ALTER_TABLE_RENAME: AlterTableRename = AlterTableRename;

impl AlterTableRename {
    pub fn build(span: Span, table: Identifier, new_name: Identifier) -> Result<Node> {
        StatementNode::new(
            &ALTER_TABLE_RENAME,
            span,
            vec![Node::Identifier(table), Node::Identifier(new_name)],
        )
    }
}

impl StatementDef for AlterTableRename {
    fn operator(&self) -> &'static Operator {
        &ALTER_TABLE
    }

    fn name(&self) -> &'static str {
        "ALTER TABLE RENAME"
    }

    fn operand_count(&self) -> OperandCount {
        OperandCount::Exact(2)
    }

    fn unparse(&self, stmt: &StatementNode, writer: &mut Unparser) {
        writer.keyword(self.operator().name);
        writer.node(stmt.operand(0), 0, 0);
        writer.keyword("RENAME TO");
        writer.node(stmt.operand(1), 0, 0);
    }
}

/// `ALTER TABLE <table> RENAME COLUMN <old> TO <new>`
pub struct AlterTableRenameColumn;

pub static ALTER_TABLE_RENAME_COLUMN: AlterTableRenameColumn = AlterTableRenameColumn;

impl AlterTableRenameColumn {
    pub fn build(
        span: Span,
        table: Identifier,
        old_column: Identifier,
        new_column: Identifier,
    ) -> Result<Node> {
        StatementNode::new(
            &ALTER_TABLE_RENAME_COLUMN,
            span,
            vec![
                Node::Identifier(table),
                Node::Identifier(old_column),
                Node::Identifier(new_column),
            ],
        )
    }
}

impl StatementDef for AlterTableRenameColumn {
    fn operator(&self) -> &'static Operator {
        &ALTER_TABLE
    }

    fn name(&self) -> &'static str {
        "ALTER TABLE RENAME COLUMN"
    }

    fn operand_count(&self) -> OperandCount {
        OperandCount::Exact(3)
    }

    fn unparse(&self, stmt: &StatementNode, writer: &mut Unparser) {
        writer.keyword(self.operator().name);
        writer.node(stmt.operand(0), 0, 0);
        writer.keyword("RENAME COLUMN");
        writer.node(stmt.operand(1), 0, 0);
        writer.keyword("TO");
        writer.node(stmt.operand(2), 0, 0);
    }
}

/// `ALTER TABLE <table> DROP COLUMN <c>[, DROP COLUMN <c>...]`
pub struct AlterTableDropColumn;

pub static ALTER_TABLE_DROP_COLUMN: AlterTableDropColumn = AlterTableDropColumn;

impl AlterTableDropColumn {
    pub fn build(span: Span, table: Identifier, columns: NodeList) -> Result<Node> {
        StatementNode::new(
            &ALTER_TABLE_DROP_COLUMN,
            span,
            vec![Node::Identifier(table), Node::List(columns)],
        )
    }
}

impl StatementDef for AlterTableDropColumn {
    fn operator(&self) -> &'static Operator {
        &ALTER_TABLE
    }

    fn name(&self) -> &'static str {
        "ALTER TABLE DROP COLUMN"
    }

    fn operand_count(&self) -> OperandCount {
        OperandCount::Exact(2)
    }

    fn unparse(&self, stmt: &StatementNode, writer: &mut Unparser) {
        writer.keyword(self.operator().name);
        writer.node(stmt.operand(0), 0, 0);
        match stmt.operand(1) {
            Node::List(columns) => {
                for (i, column) in columns.items.iter().enumerate() {
                    if i > 0 {
                        writer.sep();
                    }
                    writer.keyword("DROP COLUMN");
                    writer.node(column, 0, 0);
                }
            }
            other => writer.node(other, 0, 0),
        }
    }
}

//! `DROP TABLE [IF EXISTS] <name>` and `DROP MODEL [IF EXISTS] <name>`
//!
//! One definition type with four singletons; the target kind and the
//! `IF EXISTS` flag are definition-level syntax, not child nodes.

use crate::node::{Identifier, Node, StatementDef, StatementNode};
use crate::operator::{OperandCount, Operator};
use crate::span::Span;
use crate::unparse::Unparser;
use eyre::Result;

static DROP_OP: Operator = Operator::special("DROP", OperandCount::Exact(1));

pub struct DropObject {
    models: bool,
    if_exists: bool,
}

pub static DROP_TABLE: DropObject = DropObject {
    models: false,
    if_exists: false,
};
pub static DROP_TABLE_IF_EXISTS: DropObject = DropObject {
    models: false,
    if_exists: true,
};
pub static DROP_MODEL: DropObject = DropObject {
    models: true,
    if_exists: false,
};
pub static DROP_MODEL_IF_EXISTS: DropObject = DropObject {
    models: true,
    if_exists: true,
};

impl DropObject {
    pub fn table(span: Span, name: Identifier, if_exists: bool) -> Result<Node> {
        let def = if if_exists {
            &DROP_TABLE_IF_EXISTS
        } else {
            &DROP_TABLE
        };
        StatementNode::new(def, span, vec![Node::Identifier(name)])
    }

    pub fn model(span: Span, name: Identifier, if_exists: bool) -> Result<Node> {
        let def = if if_exists {
            &DROP_MODEL_IF_EXISTS
        } else {
            &DROP_MODEL
        };
        StatementNode::new(def, span, vec![Node::Identifier(name)])
    }

    pub fn is_models(&self) -> bool {
        self.models
    }

    pub fn is_if_exists(&self) -> bool {
        self.if_exists
    }
}

impl StatementDef for DropObject {
    fn operator(&self) -> &'static Operator {
        &DROP_OP
    }

    fn name(&self) -> &'static str {
        match (self.models, self.if_exists) {
            (false, false) => "DROP TABLE",
            (false, true) => "DROP TABLE IF EXISTS",
            (true, false) => "DROP MODEL",
            (true, true) => "DROP MODEL IF EXISTS",
        }
    }

    fn unparse(&self, stmt: &StatementNode, writer: &mut Unparser) {
        writer.keyword("DROP");
        writer.keyword(if self.models { "MODEL" } else { "TABLE" });
        if self.if_exists {
            writer.keyword("IF EXISTS");
        }
        writer.node(stmt.operand(0), 0, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> Identifier {
        Identifier::simple(Span::ZERO, name)
    }

    #[test]
    fn drop_table_and_model_render_their_kind() {
        let table = DropObject::table(Span::ZERO, id("t"), false).unwrap();
        assert_eq!(table.unparse(), "DROP TABLE t");

        let model = DropObject::model(Span::ZERO, id("m"), false).unwrap();
        assert_eq!(model.unparse(), "DROP MODEL m");
    }

    #[test]
    fn if_exists_renders_between_kind_and_name() {
        let stmt = DropObject::table(Span::ZERO, id("t"), true).unwrap();
        assert_eq!(stmt.unparse(), "DROP TABLE IF EXISTS t");
    }

    #[test]
    fn flag_variants_are_distinct_kinds() {
        let plain = DropObject::table(Span::ZERO, id("t"), false).unwrap();
        let guarded = DropObject::table(Span::ZERO, id("t"), true).unwrap();
        assert!(!plain.deep_eq(&guarded));
    }
}

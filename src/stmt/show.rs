//! SHOW statements: catalog listings and definition dumps.
//!
//! `SHOW TABLES` and `SHOW MODELS` take no operands at all; `SHOW SQL` and
//! `SHOW TRAIN MODEL` name the object whose stored text is wanted.

use crate::node::{Identifier, Node, StatementDef, StatementNode};
use crate::operator::{OperandCount, Operator};
use crate::span::Span;
use crate::unparse::Unparser;
use eyre::Result;

static SHOW_OP: Operator = Operator::special("SHOW", OperandCount::Exact(0));

/// `SHOW TABLES` / `SHOW MODELS`
pub struct Show {
    models: bool,
}

pub static SHOW_TABLES: Show = Show { models: false };
pub static SHOW_MODELS: Show = Show { models: true };

impl Show {
    pub fn tables(span: Span) -> Result<Node> {
        StatementNode::new(&SHOW_TABLES, span, Vec::new())
    }

    pub fn models(span: Span) -> Result<Node> {
        StatementNode::new(&SHOW_MODELS, span, Vec::new())
    }

    pub fn is_models(&self) -> bool {
        self.models
    }
}

impl StatementDef for Show {
    fn operator(&self) -> &'static Operator {
        &SHOW_OP
    }

    fn name(&self) -> &'static str {
        if self.models {
            "SHOW MODELS"
        } else {
            "SHOW TABLES"
        }
    }

    fn unparse(&self, _stmt: &StatementNode, writer: &mut Unparser) {
        writer.keyword("SHOW");
        writer.keyword(if self.models { "MODELS" } else { "TABLES" });
    }
}

static SHOW_SQL_OP: Operator = Operator::special("SHOW SQL", OperandCount::Exact(1));

/// `SHOW SQL <name>`: dump the stored definition text of a table or model.
pub struct ShowSql;

pub static SHOW_SQL: ShowSql = ShowSql;

impl ShowSql {
    pub fn build(span: Span, name: Identifier) -> Result<Node> {
        StatementNode::new(&SHOW_SQL, span, vec![Node::Identifier(name)])
    }
}

impl StatementDef for ShowSql {
    fn operator(&self) -> &'static Operator {
        &SHOW_SQL_OP
    }

    fn unparse(&self, stmt: &StatementNode, writer: &mut Unparser) {
        writer.keyword(self.operator().name);
        writer.node(stmt.operand(0), 0, 0);
    }
}

static SHOW_TRAIN_MODEL_OP: Operator =
    Operator::special("SHOW TRAIN MODEL", OperandCount::Exact(1));

/// `SHOW TRAIN MODEL <name>`: dump the training setup of a model.
pub struct ShowTrainModel;

pub static SHOW_TRAIN_MODEL: ShowTrainModel = ShowTrainModel;

impl ShowTrainModel {
    pub fn build(span: Span, name: Identifier) -> Result<Node> {
        StatementNode::new(&SHOW_TRAIN_MODEL, span, vec![Node::Identifier(name)])
    }
}

impl StatementDef for ShowTrainModel {
    fn operator(&self) -> &'static Operator {
        &SHOW_TRAIN_MODEL_OP
    }

    fn unparse(&self, stmt: &StatementNode, writer: &mut Unparser) {
        writer.keyword(self.operator().name);
        writer.node(stmt.operand(0), 0, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_tables_and_models_have_no_operands() {
        assert_eq!(Show::tables(Span::ZERO).unwrap().unparse(), "SHOW TABLES");
        assert_eq!(Show::models(Span::ZERO).unwrap().unparse(), "SHOW MODELS");
    }

    #[test]
    fn show_variants_are_distinct_kinds() {
        let tables = Show::tables(Span::ZERO).unwrap();
        let models = Show::models(Span::ZERO).unwrap();
        assert!(!tables.deep_eq(&models));
        assert!(tables.deep_eq(&Show::tables(Span::point(3, 1)).unwrap()));
    }

    #[test]
    fn show_rejects_stray_operands() {
        let stray = StatementNode::new(
            &SHOW_TABLES,
            Span::ZERO,
            vec![Node::Identifier(Identifier::simple(Span::ZERO, "t"))],
        );
        assert!(stray.is_err());
    }

    #[test]
    fn show_sql_and_train_model_name_their_target() {
        let sql = ShowSql::build(Span::ZERO, Identifier::simple(Span::ZERO, "m")).unwrap();
        assert_eq!(sql.unparse(), "SHOW SQL m");

        let train =
            ShowTrainModel::build(Span::ZERO, Identifier::simple(Span::ZERO, "m")).unwrap();
        assert_eq!(train.unparse(), "SHOW TRAIN MODEL m");
    }
}

//! `TRAIN MODEL <name> (<option> <value>, ...) <select>`
//!
//! The training source is an ordinary query node; validation forwards that
//! sub-query to the external validator and nothing else, since the model
//! name and option pairs have no semantic content this layer can check.
//!
//! Options are [`ModelOption`] pairs, extension nodes in their own right:
//! they render as `name value` inside the parenthesized option list.

use crate::node::{Identifier, Node, NodeList, StatementDef, StatementNode};
use crate::operator::{OperandCount, Operator};
use crate::span::Span;
use crate::unparse::Unparser;
use crate::validate::{Scope, ValidationError, Validator};
use eyre::Result;

static TRAIN_OP: Operator = Operator::special("TRAIN", OperandCount::Exact(3));

pub struct TrainModel;

pub static TRAIN_MODEL: TrainModel = TrainModel;

impl TrainModel {
    /// Operands: model name, option list, training query.
    pub fn build(span: Span, model: Identifier, options: NodeList, query: Node) -> Result<Node> {
        StatementNode::new(
            &TRAIN_MODEL,
            span,
            vec![Node::Identifier(model), Node::List(options), query],
        )
    }
}

impl StatementDef for TrainModel {
    fn operator(&self) -> &'static Operator {
        &TRAIN_OP
    }

    fn name(&self) -> &'static str {
        "TRAIN MODEL"
    }

    fn unparse(&self, stmt: &StatementNode, writer: &mut Unparser) {
        writer.keyword("TRAIN");
        writer.keyword("MODEL");
        writer.node(stmt.operand(0), 0, 0);
        writer.node(stmt.operand(1), 0, 0);
        writer.node(stmt.operand(2), 0, 0);
    }

    fn validate(
        &self,
        stmt: &StatementNode,
        validator: &mut dyn Validator,
        scope: &dyn Scope,
    ) -> Result<(), ValidationError> {
        validator.validate_query(stmt.operand(2), scope)
    }
}

static MODEL_OPTION_OP: Operator = Operator::special("MODEL OPTION", OperandCount::Exact(2));

/// One `name value` pair in a training option list. An extension node that
/// is not a top-level statement.
pub struct ModelOption;

pub static MODEL_OPTION: ModelOption = ModelOption;

impl ModelOption {
    pub fn build(span: Span, name: Identifier, value: Node) -> Result<Node> {
        StatementNode::new(&MODEL_OPTION, span, vec![Node::Identifier(name), value])
    }
}

impl StatementDef for ModelOption {
    fn operator(&self) -> &'static Operator {
        &MODEL_OPTION_OP
    }

    fn unparse(&self, stmt: &StatementNode, writer: &mut Unparser) {
        writer.node(stmt.operand(0), 0, 0);
        writer.node(stmt.operand(1), 0, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Literal;
    use crate::stmt::Select;

    fn id(name: &str) -> Identifier {
        Identifier::simple(Span::ZERO, name)
    }

    fn option(name: &str, value: Node) -> Node {
        ModelOption::build(Span::ZERO, id(name), value).unwrap()
    }

    #[test]
    fn train_model_renders_name_options_and_query() {
        let options = NodeList::new(
            Span::ZERO,
            vec![
                option(
                    "alpha",
                    Node::Literal(Literal::number(Span::ZERO, "0.1").unwrap()),
                ),
                option(
                    "iterations",
                    Node::Literal(Literal::number(Span::ZERO, "100").unwrap()),
                ),
            ],
        );
        let query = Select::build(
            Span::ZERO,
            NodeList::new(
                Span::ZERO,
                vec![Node::Identifier(id("a")), Node::Identifier(id("b"))],
            ),
            id("t"),
            None,
        )
        .unwrap();
        let stmt = TrainModel::build(Span::ZERO, id("m"), options, query).unwrap();
        assert_eq!(
            stmt.unparse(),
            "TRAIN MODEL m (alpha 0.1, iterations 100) SELECT a, b FROM t"
        );
    }

    #[test]
    fn empty_option_list_still_renders() {
        let query = Select::build(
            Span::ZERO,
            NodeList::single(Span::ZERO, Node::Identifier(id("x"))),
            id("t"),
            None,
        )
        .unwrap();
        let stmt =
            TrainModel::build(Span::ZERO, id("m"), NodeList::empty(Span::ZERO), query).unwrap();
        assert_eq!(stmt.unparse(), "TRAIN MODEL m () SELECT x FROM t");
    }
}

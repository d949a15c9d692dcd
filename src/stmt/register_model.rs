//! `REGISTER MODEL <model> AS <function>`
//!
//! Publishes a trained model under a function name so queries can invoke it.

use crate::node::{Identifier, Node, StatementDef, StatementNode};
use crate::operator::{OperandCount, Operator};
use crate::span::Span;
use crate::unparse::Unparser;
use eyre::Result;

static REGISTER_MODEL_OP: Operator = Operator::special("REGISTER MODEL", OperandCount::Exact(2));

pub struct RegisterModel;

pub static REGISTER_MODEL: RegisterModel = RegisterModel;

impl RegisterModel {
    pub fn build(span: Span, model: Identifier, function: Identifier) -> Result<Node> {
        StatementNode::new(
            &REGISTER_MODEL,
            span,
            vec![Node::Identifier(model), Node::Identifier(function)],
        )
    }
}

impl StatementDef for RegisterModel {
    fn operator(&self) -> &'static Operator {
        &REGISTER_MODEL_OP
    }

    fn unparse(&self, stmt: &StatementNode, writer: &mut Unparser) {
        writer.keyword(self.operator().name);
        writer.node(stmt.operand(0), 0, 0);
        writer.keyword("AS");
        writer.node(stmt.operand(1), 0, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_model_renders_both_names() {
        let stmt = RegisterModel::build(
            Span::ZERO,
            Identifier::simple(Span::ZERO, "churn"),
            Identifier::simple(Span::ZERO, "predict_churn"),
        )
        .unwrap();
        assert_eq!(stmt.unparse(), "REGISTER MODEL churn AS predict_churn");
    }
}

//! JSON node to `ExprKind` lowering.
//!
//! Children are allocated before their parents, so ids within a subtree are
//! always smaller than the id of its root.

use inter_ir::{
    BinaryOp, Binding, ExprArena, ExprId, ExprKind, ExprRange, Literal, LogicalOp, Name, Program,
    StringInterner, UnaryOp,
};
use serde_json::Value;

use crate::node::Node;
use crate::FrontendError;

pub(crate) struct Lowerer<'i> {
    arena: ExprArena,
    interner: &'i StringInterner,
}

impl<'i> Lowerer<'i> {
    pub(crate) fn new(interner: &'i StringInterner) -> Self {
        Lowerer {
            arena: ExprArena::new(),
            interner,
        }
    }

    pub(crate) fn lower_program(mut self, root: Node<'_>) -> Result<Program, FrontendError> {
        if root.kind() != "Program" {
            return Err(FrontendError::NotAProgram(root.kind().to_string()));
        }
        let body = root.array("body")?;
        if body.is_empty() {
            return Err(FrontendError::EmptyProgram);
        }
        let body = self.lower_list(body)?;
        Ok(Program::new(self.arena, body))
    }

    fn lower_list(&mut self, items: &[Value]) -> Result<ExprRange, FrontendError> {
        let ids = items
            .iter()
            .map(|item| self.lower_value(item))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.arena.alloc_expr_list(ids))
    }

    fn lower_value(&mut self, value: &Value) -> Result<ExprId, FrontendError> {
        let node = Node::new(value)?;
        self.lower(node)
    }

    fn lower_child(
        &mut self,
        node: Node<'_>,
        field: &'static str,
    ) -> Result<ExprId, FrontendError> {
        let child = node.child(field)?;
        self.lower(child)
    }

    fn lower(&mut self, node: Node<'_>) -> Result<ExprId, FrontendError> {
        let kind = match node.kind() {
            "ExpressionStatement" => return self.lower_child(node, "expression"),
            "ReturnStatement" => return self.lower_child(node, "argument"),
            "VariableDeclaration" => self.lower_declaration(node)?,
            "BlockStatement" => {
                let body = node.array("body")?;
                if body.is_empty() {
                    return Err(FrontendError::EmptyBlock);
                }
                ExprKind::Block(self.lower_list(body)?)
            }
            "Literal" => ExprKind::Literal(lower_literal(node)?),
            "Identifier" => ExprKind::Ident(self.name(node)?),
            "UnaryExpression" => {
                let token = node.str_field("operator")?;
                match UnaryOp::from_symbol(token) {
                    Some(op) => ExprKind::Unary {
                        op,
                        operand: self.lower_child(node, "argument")?,
                    },
                    None => self.malformed(token),
                }
            }
            "BinaryExpression" => {
                let token = node.str_field("operator")?;
                match BinaryOp::from_symbol(token) {
                    Some(op) => ExprKind::Binary {
                        op,
                        left: self.lower_child(node, "left")?,
                        right: self.lower_child(node, "right")?,
                    },
                    None => self.malformed(token),
                }
            }
            "LogicalExpression" => {
                let token = node.str_field("operator")?;
                match LogicalOp::from_symbol(token) {
                    Some(op) => ExprKind::Logical {
                        op,
                        left: self.lower_child(node, "left")?,
                        right: self.lower_child(node, "right")?,
                    },
                    None => self.malformed(token),
                }
            }
            "ConditionalExpression" => ExprKind::Conditional {
                test: self.lower_child(node, "test")?,
                consequent: self.lower_child(node, "consequent")?,
                alternate: self.lower_child(node, "alternate")?,
            },
            "FunctionExpression" | "ArrowFunctionExpression" => self.lower_function(node)?,
            "CallExpression" => {
                let arguments = node.array("arguments")?;
                let [argument] = arguments else {
                    return Err(FrontendError::ArgumentCount(arguments.len()));
                };
                ExprKind::Call {
                    callee: self.lower_child(node, "callee")?,
                    argument: self.lower_value(argument)?,
                }
            }
            "AssignmentExpression" => self.lower_assignment(node)?,
            other => return Err(FrontendError::UnknownNodeType(other.to_string())),
        };
        Ok(self.arena.alloc_expr(kind))
    }

    fn lower_declaration(&mut self, node: Node<'_>) -> Result<ExprKind, FrontendError> {
        let mut bindings = Vec::new();
        for declarator in node.array("declarations")? {
            let declarator = Node::new(declarator)?;
            let id = declarator.child("id")?;
            if id.kind() != "Identifier" {
                return Err(declarator.wrong_type("id", "an identifier"));
            }
            let name = self.name(id)?;
            let init = self.lower_child(declarator, "init")?;
            bindings.push(Binding { name, init });
        }
        Ok(ExprKind::Bind(self.arena.alloc_bindings(bindings)))
    }

    fn lower_function(&mut self, node: Node<'_>) -> Result<ExprKind, FrontendError> {
        let param = match node.array("params")? {
            [] => Name::EMPTY,
            [param] => {
                let param = Node::new(param)?;
                if param.kind() != "Identifier" {
                    return Err(node.wrong_type("params", "a list of identifiers"));
                }
                self.name(param)?
            }
            params => return Err(FrontendError::TooManyParameters(params.len())),
        };
        let body = self.lower_child(node, "body")?;
        Ok(ExprKind::Function { param, body })
    }

    fn lower_assignment(&mut self, node: Node<'_>) -> Result<ExprKind, FrontendError> {
        let target = node.child("left")?;
        if target.kind() != "Identifier" {
            return Err(FrontendError::InvalidAssignmentTarget(
                target.kind().to_string(),
            ));
        }
        let token = node.str_field("operator")?;
        if token != "=" {
            return Ok(self.malformed(token));
        }
        Ok(ExprKind::Assign {
            target: self.name(target)?,
            value: self.lower_child(node, "right")?,
        })
    }

    fn name(&self, node: Node<'_>) -> Result<Name, FrontendError> {
        Ok(self.interner.intern(node.str_field("name")?))
    }

    fn malformed(&self, token: &str) -> ExprKind {
        tracing::debug!(token, "unrecognised operator");
        ExprKind::Malformed {
            token: self.interner.intern(token),
        }
    }
}

/// `value` wins when present; otherwise the `raw` source text is parsed.
fn lower_literal(node: Node<'_>) -> Result<Literal, FrontendError> {
    match node.optional("value") {
        Some(Value::Bool(b)) => Ok(Literal::Bool(*b)),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(Literal::Number)
            .ok_or_else(|| FrontendError::InvalidLiteral(n.to_string())),
        Some(other) => Err(FrontendError::InvalidLiteral(other.to_string())),
        None => {
            let raw = node.str_field("raw")?;
            match raw {
                "true" => Ok(Literal::Bool(true)),
                "false" => Ok(Literal::Bool(false)),
                _ => raw
                    .parse::<i64>()
                    .map(Literal::Number)
                    .map_err(|_| FrontendError::InvalidLiteral(raw.to_string())),
            }
        }
    }
}

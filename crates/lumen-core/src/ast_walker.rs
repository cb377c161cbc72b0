// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! AST traversal for analysis and debugging passes.
//!
//! Passes implement [`AstVisitor`] and drive the traversal with the free
//! `walk_*` functions. The walk functions own the recursion and match every
//! variant exhaustively, so adding a node variant is a compile error here
//! rather than a silently skipped subtree; visitors only override the hooks
//! they care about.
//!
//! Traversal is pre-order: each node's hook fires before its children are
//! walked. Visitors that need state threaded through the walk (scope
//! tracking, indentation) keep it in `self`.

use crate::ast::{
    CodeBlock, Entrypoint, Expression, PackageMember, Root, Statement, TypeDeclaration,
    VariableDeclaration,
};

/// Hooks called during an AST walk. All methods default to doing nothing.
pub trait AstVisitor {
    fn visit_root(&mut self, _root: &Root) {}
    fn visit_member(&mut self, _qualified_name: &str, _member: &PackageMember) {}
    fn visit_type(&mut self, _declaration: &TypeDeclaration) {}
    fn visit_entrypoint(&mut self, _entrypoint: &Entrypoint) {}
    fn visit_parameter(&mut self, _parameter: &VariableDeclaration) {}
    fn visit_code_block(&mut self, _block: &CodeBlock) {}
    fn visit_statement(&mut self, _statement: &Statement) {}
    fn visit_expression(&mut self, _expression: &Expression) {}
}

/// Walks an entire root in member insertion order.
pub fn walk_root<V: AstVisitor>(visitor: &mut V, root: &Root) {
    visitor.visit_root(root);
    for (qualified_name, member) in root.members() {
        walk_member(visitor, qualified_name, member);
    }
}

/// Walks one package member.
pub fn walk_member<V: AstVisitor>(visitor: &mut V, qualified_name: &str, member: &PackageMember) {
    visitor.visit_member(qualified_name, member);
    match member {
        PackageMember::Type(declaration) => {
            visitor.visit_type(declaration);
            for field in &declaration.fields {
                visitor.visit_parameter(&field.declaration);
                if let Some(initializer) = &field.declaration.initializer {
                    walk_expression(visitor, initializer);
                }
            }
            for method in &declaration.methods {
                for parameter in &method.parameters {
                    visitor.visit_parameter(parameter);
                }
                walk_code_block(visitor, &method.body);
            }
            for constant in &declaration.constants {
                if let Some(value) = &constant.value {
                    walk_expression(visitor, value);
                }
            }
        }
        PackageMember::Entrypoint(entrypoint) => {
            visitor.visit_entrypoint(entrypoint);
            for parameter in &entrypoint.parameters {
                visitor.visit_parameter(parameter);
                if let Some(initializer) = &parameter.initializer {
                    walk_expression(visitor, initializer);
                }
            }
            walk_code_block(visitor, &entrypoint.body);
        }
        PackageMember::PureFunctionSet(_)
        | PackageMember::GrammarSet(_)
        | PackageMember::CompileFunction(_) => {}
    }
}

/// Walks a code block and its statements.
pub fn walk_code_block<V: AstVisitor>(visitor: &mut V, block: &CodeBlock) {
    visitor.visit_code_block(block);
    for statement in &block.statements {
        walk_statement(visitor, statement);
    }
}

/// Walks one statement.
pub fn walk_statement<V: AstVisitor>(visitor: &mut V, statement: &Statement) {
    visitor.visit_statement(statement);
    match statement {
        Statement::DiscardExpression(expression) => walk_expression(visitor, expression),
        Statement::LocalDeclaration(declaration) => {
            visitor.visit_parameter(declaration);
            if let Some(initializer) = &declaration.initializer {
                walk_expression(visitor, initializer);
            }
        }
        // AutoCall arguments are raw token lists, not expression trees.
        Statement::AutoCall { .. } => {}
        Statement::Return(value) => {
            if let Some(expression) = value {
                walk_expression(visitor, expression);
            }
        }
    }
}

/// Recursively walks an expression tree in pre-order.
pub fn walk_expression<V: AstVisitor>(visitor: &mut V, expression: &Expression) {
    visitor.visit_expression(expression);
    match expression {
        Expression::Assignment { value, .. } => walk_expression(visitor, value),
        Expression::StaticFunctionCall { arguments, .. }
        | Expression::OptFunctionCall { arguments, .. } => {
            for argument in arguments {
                walk_expression(visitor, argument);
            }
        }
        Expression::MethodCall {
            receiver,
            arguments,
            ..
        } => {
            walk_expression(visitor, receiver);
            for argument in arguments {
                walk_expression(visitor, argument);
            }
        }
        Expression::StaticFieldCall { .. }
        | Expression::ReferenceCall { .. }
        | Expression::OptEmpty => {}
    }
}

#[cfg(test)]
mod tests {
    use camino::Utf8Path;

    use super::*;
    use crate::ast::{Access, MutabilityMode, ReferenceType};

    #[derive(Default)]
    struct CountingVisitor {
        members: usize,
        entrypoints: usize,
        parameters: usize,
        statements: usize,
        expressions: usize,
    }

    impl AstVisitor for CountingVisitor {
        fn visit_member(&mut self, _qualified_name: &str, _member: &PackageMember) {
            self.members += 1;
        }
        fn visit_entrypoint(&mut self, _entrypoint: &Entrypoint) {
            self.entrypoints += 1;
        }
        fn visit_parameter(&mut self, _parameter: &VariableDeclaration) {
            self.parameters += 1;
        }
        fn visit_statement(&mut self, _statement: &Statement) {
            self.statements += 1;
        }
        fn visit_expression(&mut self, _expression: &Expression) {
            self.expressions += 1;
        }
    }

    fn sample_root() -> Root {
        let mut root = Root::new();
        root.insert(
            Utf8Path::new("sample.lumen"),
            "main::main".into(),
            PackageMember::Entrypoint(Entrypoint {
                access: Access::Public,
                name: "main".into(),
                parameters: vec![VariableDeclaration {
                    reassignable: false,
                    reference_type: ReferenceType {
                        optional: false,
                        mutability_mode: MutabilityMode::Own,
                        mutable: false,
                        type_name: "string".into(),
                    },
                    name: "args".into(),
                    initializer: None,
                }],
                body: CodeBlock {
                    statements: vec![Statement::Return(Some(Expression::ReferenceCall {
                        name: "args".into(),
                    }))],
                },
            }),
        );
        root
    }

    #[test]
    fn walk_visits_every_node_once() {
        let root = sample_root();
        let mut visitor = CountingVisitor::default();
        walk_root(&mut visitor, &root);
        assert_eq!(visitor.members, 1);
        assert_eq!(visitor.entrypoints, 1);
        assert_eq!(visitor.parameters, 1);
        assert_eq!(visitor.statements, 1);
        assert_eq!(visitor.expressions, 1);
    }

    #[test]
    fn nested_expressions_are_walked_recursively() {
        let expression = Expression::MethodCall {
            receiver: Box::new(Expression::ReferenceCall {
                name: "list".into(),
            }),
            method: "append".into(),
            arguments: vec![Expression::OptEmpty],
        };
        let mut visitor = CountingVisitor::default();
        walk_expression(&mut visitor, &expression);
        assert_eq!(visitor.expressions, 3);
    }
}

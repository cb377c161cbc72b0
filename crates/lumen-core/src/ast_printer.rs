// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Debug printer for the AST.
//!
//! Renders a [`Root`] as an indented textual outline, one line per node.
//! Used by the CLI in verbose mode and by tests as a cheap way to assert
//! tree shapes.

use std::fmt::Write;

use crate::ast::{
    Access, Entrypoint, Expression, PackageMember, PatternKind, Root, Statement,
    VariableDeclaration,
};
use crate::ast_walker::{walk_root, AstVisitor};

/// Renders a root as an indented outline.
#[must_use]
pub fn print(root: &Root) -> String {
    let mut printer = AstPrinter::default();
    walk_root(&mut printer, root);
    printer.output
}

/// [`AstVisitor`] implementation accumulating the outline text.
#[derive(Debug, Default)]
pub struct AstPrinter {
    output: String,
}

impl AstPrinter {
    fn line(&mut self, indent: usize, text: &str) {
        for _ in 0..indent {
            self.output.push_str("  ");
        }
        self.output.push_str(text);
        self.output.push('\n');
    }
}

impl AstVisitor for AstPrinter {
    fn visit_member(&mut self, qualified_name: &str, member: &PackageMember) {
        let line = format!(
            "{} {} ({})",
            member.kind_name(),
            qualified_name,
            describe_access(member.access())
        );
        self.line(0, &line);
    }

    fn visit_entrypoint(&mut self, entrypoint: &Entrypoint) {
        let line = format!(
            "parameters: {}, statements: {}",
            entrypoint.parameters.len(),
            entrypoint.body.statements.len()
        );
        self.line(1, &line);
    }

    fn visit_parameter(&mut self, parameter: &VariableDeclaration) {
        let reference = &parameter.reference_type;
        let mut line = String::from("param ");
        if parameter.reassignable {
            line.push_str("var ");
        }
        if reference.optional {
            line.push_str("opt ");
        }
        if reference.mutable {
            line.push_str("mut ");
        }
        let _ = write!(line, "{} {}", reference.type_name, parameter.name);
        self.line(1, &line);
    }

    fn visit_statement(&mut self, statement: &Statement) {
        let text = match statement {
            Statement::DiscardExpression(_) => "discard-expression",
            Statement::LocalDeclaration(_) => "local-declaration",
            Statement::AutoCall { .. } => "auto-call",
            Statement::Return(Some(_)) => "return value",
            Statement::Return(None) => "return",
        };
        self.line(1, text);
    }

    fn visit_expression(&mut self, expression: &Expression) {
        let text = match expression {
            Expression::Assignment { .. } => "assignment".to_owned(),
            Expression::StaticFunctionCall { function, .. } => {
                format!("static-function-call {function}")
            }
            Expression::MethodCall { method, .. } => format!("method-call {method}"),
            Expression::StaticFieldCall { field } => format!("static-field-call {field}"),
            Expression::ReferenceCall { name } => format!("reference {name}"),
            Expression::OptFunctionCall { function, .. } => {
                format!("opt-function-call {function}")
            }
            Expression::OptEmpty => "opt-empty".to_owned(),
        };
        self.line(2, &text);
    }
}

fn describe_access(access: &Access) -> String {
    match access {
        Access::Public => "public".to_owned(),
        Access::Private => "private".to_owned(),
        Access::Protected => "protected".to_owned(),
        Access::Exclusive(patterns) => {
            let mut text = String::from("exclusive:");
            for pattern in patterns {
                text.push(' ');
                match pattern.kind {
                    PatternKind::PackageMember => {}
                    PatternKind::WithoutSubpackages => text.push('*'),
                    PatternKind::WithSubpackages => text.push_str("..."),
                    PatternKind::InheritanceOnly => {}
                }
                if let Some(identifier) = &pattern.identifier {
                    let _ = write!(text, "{identifier}");
                }
                if let Some(supertype) = &pattern.supertype {
                    let _ = write!(text, " extends {supertype}");
                }
            }
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use camino::Utf8Path;

    use super::*;
    use crate::ast::{CodeBlock, MutabilityMode, ReferenceType};

    #[test]
    fn prints_an_indented_outline() {
        let mut root = Root::new();
        root.insert(
            Utf8Path::new("sample.lumen"),
            "main::main".into(),
            PackageMember::Entrypoint(Entrypoint {
                access: Access::Public,
                name: "main".into(),
                parameters: vec![VariableDeclaration {
                    reassignable: true,
                    reference_type: ReferenceType {
                        optional: false,
                        mutability_mode: MutabilityMode::Own,
                        mutable: true,
                        type_name: "string".into(),
                    },
                    name: "args".into(),
                    initializer: None,
                }],
                body: CodeBlock {
                    statements: vec![Statement::Return(None)],
                },
            }),
        );

        let output = print(&root);
        let expected = "entrypoint main::main (public)\n  \
                        parameters: 1, statements: 1\n  \
                        param var mut string args\n  \
                        return\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn empty_root_prints_nothing() {
        assert_eq!(print(&Root::new()), "");
    }
}

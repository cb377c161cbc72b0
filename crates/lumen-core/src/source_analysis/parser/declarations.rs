// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Package-member declarations.
//!
//! Only `entrypoint` has a complete body grammar in this core. The other
//! member kinds (`pure_function_set`, `grammar_set`, `compile_function`,
//! `class`, `abstract class`, `interface`) are recognised — keyword consumed
//! and mirrored, a warning reported — and their declarations skipped up to
//! the next member boundary.
//!
//! Entrypoint grammar:
//!
//! ```text
//! entrypoint := "entrypoint" name [ "(" parameter ("," parameter)* ")" ] body
//! parameter  := ["var"] ["opt"] ["own" | "shared" | "borrow"] ["mut"] type name
//! body       := "{" statement* "}"
//! statement  := "ret" [identifier] ";"
//! ```

use ecow::EcoString;

use crate::analyse::AnalysisEntryKind;
use crate::ast::{
    Access, CodeBlock, Entrypoint, Expression, Identifier, MutabilityMode, PackageMember,
    ReferenceType, Statement, VariableDeclaration,
};

use super::super::token::TokenKind;
use super::{messages, Parser};

impl Parser<'_> {
    /// Parses an entrypoint declaration and inserts it into the root.
    pub(super) fn parse_entrypoint(&mut self, access: Access) {
        let keyword = self.cursor.consume(0);
        self.mirror(AnalysisEntryKind::Keyword, keyword);

        // Span the duplicate warning points at: the name when present, the
        // keyword otherwise.
        let mut span_token = keyword;
        let name: EcoString = if self.cursor.peek(0).kind() == TokenKind::Identifier {
            let token = self.cursor.consume(0);
            self.mirror(AnalysisEntryKind::Declaration, token);
            span_token = token;
            token.lexeme().unwrap_or(Identifier::PLACEHOLDER).into()
        } else {
            self.report_error(self.cursor.peek(0), messages::INVALID_DECLARATION_NAME);
            Identifier::PLACEHOLDER.into()
        };

        let mut parameters = Vec::new();
        if self.consume_symbol_if(TokenKind::RoundOpen) {
            self.parse_parameter_list(&mut parameters);
        }

        let mut body = CodeBlock::default();
        if self.consume_symbol_if(TokenKind::CurlyOpen) {
            self.parse_entrypoint_body(&mut body);
        } else {
            self.report_error(self.cursor.peek(0), messages::MISSING_BODY);
        }

        let qualified_name = if self.package.is_empty() {
            Identifier::single(name.clone())
        } else {
            self.package.child(name.clone())
        };
        let member = PackageMember::Entrypoint(Entrypoint {
            access,
            name,
            parameters,
            body,
        });
        if let Some(previous) =
            self.root
                .insert(self.file, qualified_name.qualified_name(), member)
        {
            self.report_warning(
                span_token,
                format!(
                    "duplicate declaration of `{qualified_name}`; the previous {} is replaced",
                    previous.kind_name()
                ),
            );
        }
    }

    /// Parses parameters up to and including the closing `)`.
    ///
    /// Invalid parameter declarations are individually reported and skipped
    /// without aborting the list.
    fn parse_parameter_list(&mut self, parameters: &mut Vec<VariableDeclaration>) {
        loop {
            match self.cursor.peek(0).kind() {
                TokenKind::RoundClose => {
                    let close = self.cursor.consume(0);
                    self.mirror(AnalysisEntryKind::Symbol, close);
                    return;
                }
                TokenKind::EndOfFile => {
                    self.report_error(
                        self.cursor.peek(0),
                        messages::UNTERMINATED_PARAMETER_LIST,
                    );
                    return;
                }
                TokenKind::Comma => {
                    let comma = self.cursor.consume(0);
                    self.mirror(AnalysisEntryKind::Symbol, comma);
                }
                _ => {
                    if let Some(declaration) = self.parse_parameter() {
                        parameters.push(declaration);
                    }
                }
            }
        }
    }

    /// Parses one `[var] [opt] [own|shared|borrow] [mut] type name`
    /// parameter, or skips to the next list boundary on a malformed one.
    fn parse_parameter(&mut self) -> Option<VariableDeclaration> {
        let reassignable = self.consume_keyword_if(TokenKind::VarDeclaration);
        let optional = self.consume_keyword_if(TokenKind::OptionalDeclaration);

        let mutability_mode = if self.consume_keyword_if(TokenKind::RefOwn) {
            MutabilityMode::Own
        } else if self.consume_keyword_if(TokenKind::RefShared) {
            MutabilityMode::Shared
        } else if self.consume_keyword_if(TokenKind::RefBorrow) {
            MutabilityMode::Borrow
        } else {
            MutabilityMode::default()
        };

        let mutable = self.consume_keyword_if(TokenKind::MutableDeclaration)
            || self.consume_keyword_if(TokenKind::MutableReference);

        if self.cursor.peek(0).kind() != TokenKind::Identifier
            || self.cursor.peek(1).kind() != TokenKind::Identifier
        {
            self.report_error(
                self.cursor.peek(0),
                messages::INVALID_PARAMETER_DECLARATION,
            );
            self.skip_to_parameter_boundary();
            return None;
        }

        let type_token = self.cursor.consume(0);
        self.mirror(AnalysisEntryKind::Reference, type_token);
        let name_token = self.cursor.consume(0);
        self.mirror(AnalysisEntryKind::Declaration, name_token);

        Some(VariableDeclaration {
            reassignable,
            reference_type: ReferenceType {
                optional,
                mutability_mode,
                mutable,
                type_name: type_token.lexeme().unwrap_or(Identifier::PLACEHOLDER).into(),
            },
            name: name_token.lexeme().unwrap_or(Identifier::PLACEHOLDER).into(),
            initializer: None,
        })
    }

    fn skip_to_parameter_boundary(&mut self) {
        loop {
            match self.cursor.peek(0).kind() {
                TokenKind::Comma | TokenKind::RoundClose | TokenKind::EndOfFile => return,
                _ => {
                    self.cursor.consume(0);
                }
            }
        }
    }

    /// Parses statements up to and including the closing `}`.
    ///
    /// The only recognised statement is `ret [identifier];`; anything else
    /// is reported once and skipped token by token to the next statement
    /// boundary.
    fn parse_entrypoint_body(&mut self, body: &mut CodeBlock) {
        loop {
            match self.cursor.peek(0).kind() {
                TokenKind::CurlyClose => {
                    let close = self.cursor.consume(0);
                    self.mirror(AnalysisEntryKind::Symbol, close);
                    return;
                }
                TokenKind::EndOfFile => {
                    self.report_error(self.cursor.peek(0), messages::UNTERMINATED_BODY);
                    return;
                }
                TokenKind::Return => {
                    let keyword = self.cursor.consume(0);
                    self.mirror(AnalysisEntryKind::Keyword, keyword);
                    self.parse_return_statement(body);
                }
                _ => {
                    self.report_error(self.cursor.peek(0), messages::UNEXPECTED_TOKEN_IN_BODY);
                    self.skip_to_next_statement();
                }
            }
        }
    }

    fn parse_return_statement(&mut self, body: &mut CodeBlock) {
        if self.consume_symbol_if(TokenKind::EndStatement) {
            body.statements.push(Statement::Return(None));
            return;
        }
        if self.cursor.peek(0).kind() == TokenKind::Identifier
            && self.cursor.peek(1).kind() == TokenKind::EndStatement
        {
            let reference = self.cursor.consume(0);
            self.mirror(AnalysisEntryKind::Reference, reference);
            let end = self.cursor.consume(0);
            self.mirror(AnalysisEntryKind::Symbol, end);
            body.statements.push(Statement::Return(Some(
                Expression::ReferenceCall {
                    name: reference.lexeme().unwrap_or(Identifier::PLACEHOLDER).into(),
                },
            )));
            return;
        }
        self.report_error(self.cursor.peek(0), messages::UNEXPECTED_TOKEN_IN_BODY);
        self.skip_to_next_statement();
    }

    /// Consumes tokens one at a time until a `;` (consumed), a `}` (left for
    /// the body loop), or end of file.
    fn skip_to_next_statement(&mut self) {
        loop {
            match self.cursor.peek(0).kind() {
                TokenKind::CurlyClose | TokenKind::EndOfFile => return,
                TokenKind::EndStatement => {
                    self.cursor.consume(0);
                    return;
                }
                _ => {
                    self.cursor.consume(0);
                }
            }
        }
    }

    /// Consumes the keyword of an unexpanded member kind, warns, and skips
    /// the declaration up to the next member boundary.
    pub(super) fn skip_unimplemented_member(&mut self) {
        let keyword = self.cursor.consume(0);
        self.mirror(AnalysisEntryKind::Keyword, keyword);

        let spelling = if keyword.kind() == TokenKind::Abstract
            && self.cursor.peek(0).kind() == TokenKind::Class
        {
            let class = self.cursor.consume(0);
            self.mirror(AnalysisEntryKind::Keyword, class);
            "abstract class"
        } else {
            member_kind_spelling(keyword.kind())
        };
        self.report_warning(
            keyword,
            format!("`{spelling}` declarations are not implemented yet; declaration skipped"),
        );

        // Skip the declaration without mirroring its tokens, tracking brace
        // depth so member-kind keywords inside the body don't end the skip.
        let mut depth = 0usize;
        loop {
            let kind = self.cursor.peek(0).kind();
            if kind == TokenKind::EndOfFile {
                return;
            }
            if depth == 0 {
                if is_member_boundary(kind) {
                    return;
                }
                if kind == TokenKind::CurlyClose {
                    // Consume the declaration's own closing brace and stop.
                    self.cursor.consume(0);
                    return;
                }
            }
            match kind {
                TokenKind::CurlyOpen => depth += 1,
                TokenKind::CurlyClose => depth -= 1,
                _ => {}
            }
            self.cursor.consume(0);
        }
    }
}

fn is_member_boundary(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Import
            | TokenKind::Public
            | TokenKind::Private
            | TokenKind::Protected
            | TokenKind::Exclusive
            | TokenKind::Entrypoint
            | TokenKind::PureFunctionSet
            | TokenKind::GrammarSet
            | TokenKind::CompileFunction
            | TokenKind::Class
            | TokenKind::Abstract
            | TokenKind::Interface
    )
}

fn member_kind_spelling(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::PureFunctionSet => "pure_function_set",
        TokenKind::GrammarSet => "grammar_set",
        TokenKind::CompileFunction => "compile_function",
        TokenKind::Class => "class",
        TokenKind::Abstract => "abstract",
        TokenKind::Interface => "interface",
        _ => "declaration",
    }
}

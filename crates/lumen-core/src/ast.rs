// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The Lumen AST node model.
//!
//! A closed set of node variants representing declarations, statements, and
//! expressions. Each family is a sum type matched exhaustively, so every
//! pass over the tree is checked by the compiler when a variant is added.
//!
//! [`Root`] owns all package members of a compilation, keyed by
//! fully-qualified name, and records which file declared which names so that
//! diagnostics and re-parsing can be attributed per file. Root is mutated
//! incrementally, once per parsed file, and is complete only after every
//! file of the compilation has been parsed.
//!
//! `GrammarSet`, `CompileFunction`, and the expression variants beyond
//! `ReferenceCall` are data shapes without parser productions; they exist so
//! later passes and the grammar-set machinery have a stable model to target.

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use ecow::EcoString;
use indexmap::IndexMap;

use crate::source_analysis::Token;

/// A possibly-qualified name: ordered parts printed joined with `::`.
///
/// Never empty when successfully parsed; the parser substitutes a
/// placeholder part when a name is missing so construction can proceed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Identifier {
    parts: Vec<EcoString>,
}

impl Identifier {
    /// The placeholder part substituted for unparseable names.
    pub const PLACEHOLDER: &'static str = "<error>";

    /// Creates an identifier from its parts.
    #[must_use]
    pub fn new(parts: Vec<EcoString>) -> Self {
        Self { parts }
    }

    /// Creates a single-part identifier.
    #[must_use]
    pub fn single(part: impl Into<EcoString>) -> Self {
        Self {
            parts: vec![part.into()],
        }
    }

    /// Creates the placeholder identifier used for invalid declarations.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::single(Self::PLACEHOLDER)
    }

    /// Appends a part.
    pub fn push(&mut self, part: impl Into<EcoString>) {
        self.parts.push(part.into());
    }

    /// Returns the ordered name parts.
    #[must_use]
    pub fn parts(&self) -> &[EcoString] {
        &self.parts
    }

    /// Returns `true` if no part has been parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Returns the fully-qualified spelling, parts joined with `::`.
    #[must_use]
    pub fn qualified_name(&self) -> EcoString {
        let mut name = EcoString::new();
        for (index, part) in self.parts.iter().enumerate() {
            if index > 0 {
                name.push_str("::");
            }
            name.push_str(part);
        }
        name
    }

    /// Returns a copy extended with `part` as a new trailing part.
    #[must_use]
    pub fn child(&self, part: impl Into<EcoString>) -> Self {
        let mut parts = self.parts.clone();
        parts.push(part.into());
        Self { parts }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified_name())
    }
}

/// How an exclusive-access pattern matches package members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// Matches the single named member.
    PackageMember,
    /// `*` — every member of the named package, excluding subpackages.
    WithoutSubpackages,
    /// `...` — every member of the named package and its subpackages.
    WithSubpackages,
    /// `extends` with no package part — every subtype of the supertype.
    InheritanceOnly,
}

/// One pattern inside an `exclusive { ... }` access specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMemberPattern {
    pub kind: PatternKind,
    /// The matched member or package; absent for inheritance-only patterns.
    pub identifier: Option<Identifier>,
    /// Narrows the match to subtypes of this supertype.
    pub supertype: Option<Identifier>,
}

/// Visibility of a package member.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Access {
    Public,
    /// The default when no specifier is written.
    #[default]
    Private,
    /// Valid on type members only; at package-member level the parser
    /// reports it and falls back to `Private`.
    Protected,
    /// Visible only to members matching one of the patterns.
    Exclusive(Vec<PackageMemberPattern>),
}

/// Reference discipline of a declared binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MutabilityMode {
    /// Unique ownership.
    #[default]
    Own,
    /// Shared ownership.
    Shared,
    /// Non-owning reference.
    Borrow,
}

/// The type of a declared binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceType {
    /// `opt` — the binding may be empty.
    pub optional: bool,
    pub mutability_mode: MutabilityMode,
    /// `mut` / `mut:` — the referenced value may be mutated.
    pub mutable: bool,
    pub type_name: EcoString,
}

/// A variable or parameter declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclaration {
    /// `var` — the binding itself may be reassigned.
    pub reassignable: bool,
    pub reference_type: ReferenceType,
    pub name: EcoString,
    pub initializer: Option<Expression>,
}

/// An ordered sequence of owned statements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeBlock {
    pub statements: Vec<Statement>,
}

/// A statement inside a code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// An expression evaluated for its effects, result discarded.
    DiscardExpression(Expression),
    LocalDeclaration(VariableDeclaration),
    /// A compile-function invocation: name plus raw token-list arguments,
    /// expanded at compile time. Data shape only.
    AutoCall {
        name: EcoString,
        arguments: Vec<Vec<Token>>,
    },
    Return(Option<Expression>),
}

/// An expression. Only [`Expression::ReferenceCall`] currently has a parser
/// production; the rest are data shapes for later passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Assignment {
        target: Identifier,
        value: Box<Expression>,
    },
    StaticFunctionCall {
        function: Identifier,
        arguments: Vec<Expression>,
    },
    MethodCall {
        receiver: Box<Expression>,
        method: EcoString,
        arguments: Vec<Expression>,
    },
    StaticFieldCall {
        field: Identifier,
    },
    /// A plain reference to a named binding.
    ReferenceCall {
        name: EcoString,
    },
    OptFunctionCall {
        function: Identifier,
        arguments: Vec<Expression>,
    },
    /// The empty optional value.
    OptEmpty,
}

/// A field of a type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub access: Access,
    pub declaration: VariableDeclaration,
}

/// A method of a type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub access: Access,
    pub name: EcoString,
    pub parameters: Vec<VariableDeclaration>,
    pub body: CodeBlock,
}

/// A constant of a type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant {
    pub access: Access,
    pub name: EcoString,
    pub value: Option<Expression>,
}

/// A class or interface declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    pub access: Access,
    pub name: EcoString,
    pub fields: Vec<Field>,
    pub methods: Vec<Method>,
    pub constants: Vec<Constant>,
}

/// A set of pure functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PureFunctionSet {
    pub access: Access,
    pub name: EcoString,
}

/// A user-defined expression-grammar extension. Data shape only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarSet {
    pub access: Access,
    pub name: EcoString,
}

/// A function executed at compile time. Data shape only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileFunction {
    pub access: Access,
    pub name: EcoString,
}

/// An executable procedure with a parameter list and a statement body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entrypoint {
    pub access: Access,
    pub name: EcoString,
    pub parameters: Vec<VariableDeclaration>,
    pub body: CodeBlock,
}

/// A top-level named declaration, addressed by fully-qualified name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageMember {
    Type(TypeDeclaration),
    PureFunctionSet(PureFunctionSet),
    GrammarSet(GrammarSet),
    CompileFunction(CompileFunction),
    Entrypoint(Entrypoint),
}

impl PackageMember {
    /// Returns the member's access specifier.
    #[must_use]
    pub fn access(&self) -> &Access {
        match self {
            Self::Type(member) => &member.access,
            Self::PureFunctionSet(member) => &member.access,
            Self::GrammarSet(member) => &member.access,
            Self::CompileFunction(member) => &member.access,
            Self::Entrypoint(member) => &member.access,
        }
    }

    /// Returns the member's unqualified name.
    #[must_use]
    pub fn name(&self) -> &EcoString {
        match self {
            Self::Type(member) => &member.name,
            Self::PureFunctionSet(member) => &member.name,
            Self::GrammarSet(member) => &member.name,
            Self::CompileFunction(member) => &member.name,
            Self::Entrypoint(member) => &member.name,
        }
    }

    /// Returns the member's kind as a display word.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Type(_) => "type",
            Self::PureFunctionSet(_) => "pure function set",
            Self::GrammarSet(_) => "grammar set",
            Self::CompileFunction(_) => "compile function",
            Self::Entrypoint(_) => "entrypoint",
        }
    }
}

/// The shared AST of one compilation.
///
/// Owns every package member, keyed by fully-qualified name, in insertion
/// order for deterministic traversal. A second index records which names
/// each source file declared.
#[derive(Debug, Default)]
pub struct Root {
    members: IndexMap<EcoString, PackageMember>,
    declared_by_file: IndexMap<Utf8PathBuf, Vec<EcoString>>,
}

impl Root {
    /// Creates an empty root.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a member under its fully-qualified name, attributing it to
    /// `file`.
    ///
    /// A colliding name overwrites the previous member; the displaced member
    /// is returned so the caller can report the conflict.
    pub fn insert(
        &mut self,
        file: &Utf8Path,
        qualified_name: EcoString,
        member: PackageMember,
    ) -> Option<PackageMember> {
        self.declared_by_file
            .entry(file.to_owned())
            .or_default()
            .push(qualified_name.clone());
        self.members.insert(qualified_name, member)
    }

    /// Looks up a member by fully-qualified name.
    #[must_use]
    pub fn member(&self, qualified_name: &str) -> Option<&PackageMember> {
        self.members.get(qualified_name)
    }

    /// Iterates all members in insertion order.
    pub fn members(&self) -> impl Iterator<Item = (&EcoString, &PackageMember)> {
        self.members.iter()
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if no member has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns the fully-qualified names declared by `file`, in declaration
    /// order.
    #[must_use]
    pub fn declared_in(&self, file: &Utf8Path) -> &[EcoString] {
        self.declared_by_file
            .get(file)
            .map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_prints_parts_joined_with_static_accessor() {
        let mut identifier = Identifier::single("main");
        identifier.push("sample");
        assert_eq!(identifier.to_string(), "main::sample");
        assert_eq!(identifier.parts().len(), 2);
    }

    #[test]
    fn placeholder_identifier() {
        let identifier = Identifier::placeholder();
        assert_eq!(identifier.to_string(), "<error>");
        assert!(!identifier.is_empty());
    }

    #[test]
    fn default_access_is_private() {
        assert_eq!(Access::default(), Access::Private);
    }

    #[test]
    fn root_insert_returns_displaced_member_on_collision() {
        let mut root = Root::new();
        let file = Utf8Path::new("sample.lumen");
        let first = PackageMember::Entrypoint(Entrypoint {
            access: Access::Public,
            name: "main".into(),
            parameters: Vec::new(),
            body: CodeBlock::default(),
        });
        let second = PackageMember::PureFunctionSet(PureFunctionSet {
            access: Access::Private,
            name: "main".into(),
        });

        assert!(root.insert(file, "main::main".into(), first).is_none());
        let displaced = root.insert(file, "main::main".into(), second);
        assert!(matches!(displaced, Some(PackageMember::Entrypoint(_))));
        assert_eq!(root.len(), 1);
        // Both declarations stay attributed to the file.
        assert_eq!(root.declared_in(file).len(), 2);
    }

    #[test]
    fn root_iterates_in_insertion_order() {
        let mut root = Root::new();
        let file = Utf8Path::new("sample.lumen");
        for name in ["p::c", "p::a", "p::b"] {
            root.insert(
                file,
                name.into(),
                PackageMember::PureFunctionSet(PureFunctionSet {
                    access: Access::default(),
                    name: name.into(),
                }),
            );
        }
        let order: Vec<_> = root.members().map(|(name, _)| name.as_str()).collect();
        assert_eq!(order, vec!["p::c", "p::a", "p::b"]);
    }
}

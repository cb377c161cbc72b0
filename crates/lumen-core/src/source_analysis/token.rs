// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Token types for Lumen lexical analysis.
//!
//! A [`Token`] is a [`TokenKind`] plus the [`SourcePosition`] and byte length
//! of its source span. Only literals, identifiers, and custom tokens carry a
//! lexeme; keywords and punctuation are fully described by their kind.

use ecow::EcoString;

use super::SourcePosition;

/// The kind of a token.
///
/// This is a closed enumeration covering structural punctuation, literal and
/// word classes, the Lumen keyword set, and the synthetic end-of-file marker.
/// Unrecognised single characters become [`TokenKind::CustomToken`] so that
/// user-defined grammar sets can consume them later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // === Lexeme-carrying classes ===
    /// A name that is not a keyword: `counter`, `main`.
    Identifier,
    /// A number literal in decimal, hexadecimal (`0x`), or binary (`0b`)
    /// notation. The lexeme has readability underscores stripped.
    LiteralNumber,
    /// A double-quoted string literal, escapes decoded, adjacent segments
    /// merged.
    LiteralString,
    /// A single-quoted character literal, escape decoded.
    LiteralCharacter,
    /// A single character with no other interpretation.
    CustomToken,

    // === Punctuation ===
    /// `{`
    CurlyOpen,
    /// `}`
    CurlyClose,
    /// `(`
    RoundOpen,
    /// `)`
    RoundClose,
    /// `<`
    SmallerThan,
    /// `>`
    GreaterThan,
    /// `;`
    EndStatement,
    /// `,`
    Comma,
    /// `::`
    StaticAccessor,

    // === Package structure ===
    /// `pkg`
    Package,
    /// `import`
    Import,

    // === Access specifiers ===
    /// `public`
    Public,
    /// `private`
    Private,
    /// `protected`
    Protected,
    /// `exclusive`
    Exclusive,

    // === Member markers ===
    /// `static`
    MemberStatic,
    /// `const`
    MemberConst,
    /// `external`
    MemberExternal,

    // === Mutability and ownership markers ===
    /// `var` — reassignable declaration
    VarDeclaration,
    /// `mut` — mutable declaration
    MutableDeclaration,
    /// `mut:` — mutable reference
    MutableReference,
    /// `opt` — optional declaration
    OptionalDeclaration,
    /// `opt:` — optional reference
    OptionalReference,
    /// `own`
    RefOwn,
    /// `shared`
    RefShared,
    /// `borrow`
    RefBorrow,

    // === Type declarations and inheritance ===
    /// `class`
    Class,
    /// `abstract`
    Abstract,
    /// `interface`
    Interface,
    /// `constructor`
    Constructor,
    /// `super`
    Super,
    /// `this`
    This,
    /// `impl`
    Implements,
    /// `extends`
    Extends,
    /// `extendable`
    Extendable,
    /// `final`
    Final,
    /// `override`
    Override,
    /// `copyable`
    Copyable,
    /// `serialisable`
    Serialisable,

    // === Literal keywords ===
    /// `true`
    True,
    /// `false`
    False,

    // === Package-member kinds ===
    /// `entrypoint`
    Entrypoint,
    /// `pure_function_set`
    PureFunctionSet,
    /// `grammar_set`
    GrammarSet,
    /// `compile_function`
    CompileFunction,
    /// `auto:` — compile-function invocation
    AutoCall,

    // === Statement keywords ===
    /// `void`
    Void,
    /// `if`
    If,
    /// `else`
    Else,
    /// `for`
    For,
    /// `for_each_in`
    ForEachIn,
    /// `while`
    While,
    /// `serialising`
    Serialising,
    /// `ret`
    Return,
    /// `move`
    Move,
    /// `pass`
    Pass,
    /// `copy`
    Copy,

    // === Special ===
    /// Synthetic end-of-file marker; always the last token of a sequence.
    EndOfFile,
}

impl TokenKind {
    /// Looks up a word (including trailing-colon spellings such as `mut:`)
    /// in the static keyword table.
    #[must_use]
    pub fn from_keyword(word: &str) -> Option<Self> {
        let kind = match word {
            "pkg" => Self::Package,
            "import" => Self::Import,
            "public" => Self::Public,
            "private" => Self::Private,
            "protected" => Self::Protected,
            "exclusive" => Self::Exclusive,
            "static" => Self::MemberStatic,
            "const" => Self::MemberConst,
            "external" => Self::MemberExternal,
            "var" => Self::VarDeclaration,
            "mut" => Self::MutableDeclaration,
            "mut:" => Self::MutableReference,
            "opt" => Self::OptionalDeclaration,
            "opt:" => Self::OptionalReference,
            "own" => Self::RefOwn,
            "shared" => Self::RefShared,
            "borrow" => Self::RefBorrow,
            "class" => Self::Class,
            "abstract" => Self::Abstract,
            "interface" => Self::Interface,
            "constructor" => Self::Constructor,
            "super" => Self::Super,
            "this" => Self::This,
            "impl" => Self::Implements,
            "extends" => Self::Extends,
            "extendable" => Self::Extendable,
            "final" => Self::Final,
            "override" => Self::Override,
            "copyable" => Self::Copyable,
            "serialisable" => Self::Serialisable,
            "true" => Self::True,
            "false" => Self::False,
            "entrypoint" => Self::Entrypoint,
            "pure_function_set" => Self::PureFunctionSet,
            "grammar_set" => Self::GrammarSet,
            "compile_function" => Self::CompileFunction,
            "auto:" => Self::AutoCall,
            "void" => Self::Void,
            "if" => Self::If,
            "else" => Self::Else,
            "for" => Self::For,
            "for_each_in" => Self::ForEachIn,
            "while" => Self::While,
            "serialising" => Self::Serialising,
            "ret" => Self::Return,
            "move" => Self::Move,
            "pass" => Self::Pass,
            "copy" => Self::Copy,
            _ => return None,
        };
        Some(kind)
    }

    /// Maps a structural single character to its token kind.
    #[must_use]
    pub fn from_single_char(byte: u8) -> Option<Self> {
        let kind = match byte {
            b'{' => Self::CurlyOpen,
            b'}' => Self::CurlyClose,
            b'(' => Self::RoundOpen,
            b')' => Self::RoundClose,
            b'<' => Self::SmallerThan,
            b'>' => Self::GreaterThan,
            b';' => Self::EndStatement,
            b',' => Self::Comma,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns `true` if this is the end-of-file marker.
    #[must_use]
    pub const fn is_end_of_file(self) -> bool {
        matches!(self, Self::EndOfFile)
    }

    /// Returns `true` if tokens of this kind carry a lexeme.
    #[must_use]
    pub const fn carries_lexeme(self) -> bool {
        matches!(
            self,
            Self::Identifier
                | Self::LiteralNumber
                | Self::LiteralString
                | Self::LiteralCharacter
                | Self::CustomToken
        )
    }
}

/// A token with its source position and span length.
///
/// Tokens are created once by the lexer and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use lumen_core::source_analysis::{SourcePosition, Token, TokenKind};
///
/// let token = Token::with_lexeme(
///     TokenKind::Identifier,
///     SourcePosition::new(0, 0, 0),
///     4,
///     "main",
/// );
/// assert_eq!(token.lexeme(), Some("main"));
/// assert_eq!(token.length(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    position: SourcePosition,
    length: u32,
    lexeme: Option<EcoString>,
}

impl Token {
    /// Creates a token without a lexeme.
    #[must_use]
    pub fn new(kind: TokenKind, position: SourcePosition, length: u32) -> Self {
        Self {
            kind,
            position,
            length,
            lexeme: None,
        }
    }

    /// Creates a token carrying a lexeme.
    #[must_use]
    pub fn with_lexeme(
        kind: TokenKind,
        position: SourcePosition,
        length: u32,
        lexeme: impl Into<EcoString>,
    ) -> Self {
        Self {
            kind,
            position,
            length,
            lexeme: Some(lexeme.into()),
        }
    }

    /// Returns the kind of this token.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the source position at which this token starts.
    #[must_use]
    pub fn position(&self) -> SourcePosition {
        self.position
    }

    /// Returns the byte length of this token's source span.
    #[must_use]
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Returns the lexeme, if this token carries one.
    #[must_use]
    pub fn lexeme(&self) -> Option<&str> {
        self.lexeme.as_deref()
    }

    /// Returns `true` if this token's lexeme equals the given text.
    #[must_use]
    pub fn lexeme_is(&self, text: &str) -> bool {
        self.lexeme.as_deref() == Some(text)
    }
}

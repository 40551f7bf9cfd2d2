//! Kind classification for analysis-engine raw types.
//!
//! The analysis engine tags names with an open vocabulary of raw types
//! (`"function"`, `"instance"`, `"xrange"`, ...). Two closed vocabularies
//! are projected from it:
//!
//! - [`SymbolKind`]: the finer symbol vocabulary, which keeps literal value
//!   subtypes (boolean, number, string, array) apart.
//! - [`CompletionKind`]: the coarser completion vocabulary, which folds
//!   those into generic values and classes.
//!
//! Each vocabulary is a static table of `(raw type, kind)` pairs, indexed
//! once per process. Raw types missing from a table classify to `None`.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Serialize, Serializer};

/// A closed kind vocabulary that raw types can be classified into.
pub trait KindVocabulary: Copy + Sized + 'static {
    /// Look up the kind for an engine raw type.
    fn classify(raw_type: &str) -> Option<Self>;
}

// ============================================================================
// Symbol kinds
// ============================================================================

/// Symbol kinds surfaced for used symbols.
///
/// Serialized as the LSP `SymbolKind` integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// A file
    File,
    /// A module or import
    Module,
    /// A class or class-like builtin type
    Class,
    /// A method
    Method,
    /// A property
    Property,
    /// A field
    Field,
    /// A function, lambda or generator
    Function,
    /// A variable or statement
    Variable,
    /// A constant
    Constant,
    /// A string literal
    String,
    /// A numeric literal
    Number,
    /// A boolean literal
    Boolean,
    /// A list or array-like value
    Array,
}

impl SymbolKind {
    /// The LSP protocol value for this kind.
    #[must_use]
    pub fn to_lsp(self) -> lsp_types::SymbolKind {
        match self {
            Self::File => lsp_types::SymbolKind::FILE,
            Self::Module => lsp_types::SymbolKind::MODULE,
            Self::Class => lsp_types::SymbolKind::CLASS,
            Self::Method => lsp_types::SymbolKind::METHOD,
            Self::Property => lsp_types::SymbolKind::PROPERTY,
            Self::Field => lsp_types::SymbolKind::FIELD,
            Self::Function => lsp_types::SymbolKind::FUNCTION,
            Self::Variable => lsp_types::SymbolKind::VARIABLE,
            Self::Constant => lsp_types::SymbolKind::CONSTANT,
            Self::String => lsp_types::SymbolKind::STRING,
            Self::Number => lsp_types::SymbolKind::NUMBER,
            Self::Boolean => lsp_types::SymbolKind::BOOLEAN,
            Self::Array => lsp_types::SymbolKind::ARRAY,
        }
    }
}

impl From<SymbolKind> for lsp_types::SymbolKind {
    fn from(kind: SymbolKind) -> Self {
        kind.to_lsp()
    }
}

impl Serialize for SymbolKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_lsp().serialize(serializer)
    }
}

/// Raw type to symbol kind.
static SYMBOL_KINDS: &[(&str, SymbolKind)] = &[
    ("none", SymbolKind::Variable),
    ("type", SymbolKind::Class),
    ("tuple", SymbolKind::Class),
    ("dict", SymbolKind::Class),
    ("dictionary", SymbolKind::Class),
    ("function", SymbolKind::Function),
    ("lambda", SymbolKind::Function),
    ("generator", SymbolKind::Function),
    ("class", SymbolKind::Class),
    ("instance", SymbolKind::Class),
    ("method", SymbolKind::Method),
    ("builtin", SymbolKind::Class),
    ("builtinfunction", SymbolKind::Function),
    ("module", SymbolKind::Module),
    ("file", SymbolKind::File),
    ("xrange", SymbolKind::Array),
    ("slice", SymbolKind::Class),
    ("traceback", SymbolKind::Class),
    ("frame", SymbolKind::Class),
    ("buffer", SymbolKind::Array),
    ("dictproxy", SymbolKind::Class),
    ("funcdef", SymbolKind::Function),
    ("property", SymbolKind::Property),
    ("import", SymbolKind::Module),
    ("keyword", SymbolKind::Variable),
    ("constant", SymbolKind::Constant),
    ("variable", SymbolKind::Variable),
    ("value", SymbolKind::Variable),
    ("param", SymbolKind::Variable),
    ("statement", SymbolKind::Variable),
    ("boolean", SymbolKind::Boolean),
    ("int", SymbolKind::Number),
    ("long", SymbolKind::Number),
    ("float", SymbolKind::Number),
    ("complex", SymbolKind::Number),
    ("string", SymbolKind::String),
    ("unicode", SymbolKind::String),
    ("list", SymbolKind::Array),
    ("field", SymbolKind::Field),
];

static SYMBOL_KIND_INDEX: LazyLock<HashMap<&'static str, SymbolKind>> =
    LazyLock::new(|| SYMBOL_KINDS.iter().copied().collect());

impl KindVocabulary for SymbolKind {
    fn classify(raw_type: &str) -> Option<Self> {
        SYMBOL_KIND_INDEX.get(raw_type).copied()
    }
}

// ============================================================================
// Completion kinds
// ============================================================================

/// Coarse kinds in the completion-item vocabulary.
///
/// Serialized as the LSP `CompletionItemKind` integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletionKind {
    /// A plain value
    Value,
    /// A class or class-like value
    Class,
    /// A function
    Function,
    /// An instance
    Reference,
    /// A method
    Method,
    /// A module or import
    Module,
    /// A file
    File,
    /// A property
    Property,
    /// A keyword
    Keyword,
    /// A variable
    Variable,
}

impl CompletionKind {
    /// The LSP protocol value for this kind.
    #[must_use]
    pub fn to_lsp(self) -> lsp_types::CompletionItemKind {
        match self {
            Self::Value => lsp_types::CompletionItemKind::VALUE,
            Self::Class => lsp_types::CompletionItemKind::CLASS,
            Self::Function => lsp_types::CompletionItemKind::FUNCTION,
            Self::Reference => lsp_types::CompletionItemKind::REFERENCE,
            Self::Method => lsp_types::CompletionItemKind::METHOD,
            Self::Module => lsp_types::CompletionItemKind::MODULE,
            Self::File => lsp_types::CompletionItemKind::FILE,
            Self::Property => lsp_types::CompletionItemKind::PROPERTY,
            Self::Keyword => lsp_types::CompletionItemKind::KEYWORD,
            Self::Variable => lsp_types::CompletionItemKind::VARIABLE,
        }
    }
}

impl From<CompletionKind> for lsp_types::CompletionItemKind {
    fn from(kind: CompletionKind) -> Self {
        kind.to_lsp()
    }
}

impl Serialize for CompletionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_lsp().serialize(serializer)
    }
}

/// Raw type to completion kind.
static COMPLETION_KINDS: &[(&str, CompletionKind)] = &[
    ("none", CompletionKind::Value),
    ("type", CompletionKind::Class),
    ("tuple", CompletionKind::Class),
    ("dict", CompletionKind::Class),
    ("dictionary", CompletionKind::Class),
    ("function", CompletionKind::Function),
    ("lambda", CompletionKind::Function),
    ("generator", CompletionKind::Function),
    ("class", CompletionKind::Class),
    ("instance", CompletionKind::Reference),
    ("method", CompletionKind::Method),
    ("builtin", CompletionKind::Class),
    ("builtinfunction", CompletionKind::Function),
    ("module", CompletionKind::Module),
    ("file", CompletionKind::File),
    ("xrange", CompletionKind::Class),
    ("slice", CompletionKind::Class),
    ("traceback", CompletionKind::Class),
    ("frame", CompletionKind::Class),
    ("buffer", CompletionKind::Class),
    ("dictproxy", CompletionKind::Class),
    ("funcdef", CompletionKind::Function),
    ("property", CompletionKind::Property),
    ("import", CompletionKind::Module),
    ("keyword", CompletionKind::Keyword),
    ("constant", CompletionKind::Variable),
    ("variable", CompletionKind::Variable),
    ("value", CompletionKind::Value),
    ("param", CompletionKind::Variable),
    ("statement", CompletionKind::Variable),
];

static COMPLETION_KIND_INDEX: LazyLock<HashMap<&'static str, CompletionKind>> =
    LazyLock::new(|| COMPLETION_KINDS.iter().copied().collect());

impl KindVocabulary for CompletionKind {
    fn classify(raw_type: &str) -> Option<Self> {
        COMPLETION_KIND_INDEX.get(raw_type).copied()
    }
}

//! # Nereus: Used-Symbol Resolution for Editors
//!
//! Nereus turns the raw name references an analysis engine finds in a
//! document into symbol records an editor can use: what each name is, where
//! it is defined, which scope encloses that definition, and where it is used.
//!
//! ## Design Philosophy
//!
//! - **Resolver, not analyzer** - The analysis engine parses and infers; Nereus
//!   filters, picks, and re-projects its answers
//! - **Best effort per reference** - One unresolvable name never hides the rest
//! - **Closed vocabularies** - Open-ended engine type tags map onto fixed kinds
//! - **Editor coordinates out** - Every range is 0-indexed on lines and columns
//!
//! ## Pipeline
//!
//! ```text
//! Document::list_references
//!   → filter::include          drop params, `_`, unknown types
//!   → resolver::resolve_primary first candidate wins
//!   → resolver::container_of   nearest named scope, never the module
//!   → range::to_range          1-indexed lines → 0-indexed
//!   → kinds::classify          raw type → SymbolKind
//!   → SymbolRecord             one per accepted reference, in order
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use nereus::{SymbolsConfig, document_symbols};
//! use nereus::snapshot::SnapshotDocument;
//!
//! let document = SnapshotDocument::from_json(r#"{
//!     "definitions": [
//!         {"name": "app", "type": "module", "module_path": "/src/app.py",
//!          "start": {"line": 1, "column": 0}, "end": {"line": 4, "column": 0}},
//!         {"name": "greet", "type": "function", "module_path": "/src/app.py",
//!          "start": {"line": 1, "column": 0}, "end": {"line": 2, "column": 16},
//!          "parent": 0}
//!     ],
//!     "references": [
//!         {"name": "greet", "type": "function",
//!          "start": {"line": 4, "column": 0}, "end": {"line": 4, "column": 5},
//!          "definitions": [1]}
//!     ]
//! }"#)?;
//!
//! let symbols = document_symbols(&document, &SymbolsConfig::default())?;
//! assert_eq!(symbols.len(), 1);
//! assert_eq!(symbols[0].name, "greet");
//! assert_eq!(symbols[0].container_name, None);
//! # Ok::<(), nereus::Error>(())
//! ```

mod completion;
mod config;
mod engine;
mod error;
mod filter;
mod kinds;
mod range;
mod resolver;
pub mod snapshot;
mod symbols;
mod types;
mod uri;
mod usage;

pub use completion::used_completion_items;
pub use config::{SETTINGS_SECTION, SymbolsConfig};
pub use engine::{Definition, Document, Reference};
pub use error::{DroppedReference, Error, ResolutionError, Result};
pub use filter::{DISCARD_NAME, PARAM_RAW_TYPE, include};
pub use kinds::{CompletionKind, KindVocabulary, SymbolKind};
pub use range::{definition_range, lines_within, to_position, to_range, usage_range};
pub use resolver::{container_of, resolve_primary};
pub use symbols::{build_record, document_symbols, document_symbols_report};
pub use types::{
    ScopeMode, SourcePosition, SourceSpan, SymbolLocation, SymbolRecord, SymbolReport,
    UsedCompletionItem,
};
pub use uri::path_to_uri;
pub use usage::symbols_used_in;

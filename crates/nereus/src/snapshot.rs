//! In-memory analysis engine backed by a JSON snapshot.
//!
//! A snapshot is a dump of what an analysis engine knows about one document:
//! its definitions (as a scope tree) and its name references (with the
//! definitions each resolves to). Hosts that run the engine out of process
//! can ship this dump instead of implementing the engine traits directly.
//!
//! ## Format
//!
//! ```json
//! {
//!   "definitions": [
//!     {"name": "app", "type": "module", "module_name": "app",
//!      "module_path": "/src/app.py",
//!      "start": {"line": 1, "column": 0}, "end": {"line": 9, "column": 0}},
//!     {"name": "Foo", "type": "class", "module_name": "app",
//!      "module_path": "/src/app.py",
//!      "start": {"line": 1, "column": 0}, "end": {"line": 3, "column": 17},
//!      "parent": 0}
//!   ],
//!   "references": [
//!     {"name": "Foo", "type": "class",
//!      "start": {"line": 5, "column": 0}, "end": {"line": 5, "column": 3},
//!      "definitions": [1]}
//!   ]
//! }
//! ```
//!
//! A definition's id is its index in `definitions`. Failures are modelled
//! with optional `error` fields: on the document (listing fails), on a
//! reference (resolution fails) and `parent_error` on a definition (ancestry
//! lookup fails). Entries whose span ends before it starts are rejected at
//! decode time.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::Error as _;

use crate::engine::{Definition, Document, Reference};
use crate::error::{Error, ResolutionError, Result};
use crate::types::{ScopeMode, SourcePosition, SourceSpan};

/// A decoded analysis snapshot for one document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnapshotDocument {
    /// Makes reference listing fail with this message
    #[serde(default)]
    pub error: Option<String>,
    /// Scope tree nodes; the index is the definition id
    #[serde(default)]
    pub definitions: Vec<DefinitionEntry>,
    /// Name references in source order
    #[serde(default)]
    pub references: Vec<ReferenceEntry>,
}

/// A definition node in a snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct DefinitionEntry {
    /// Defined name
    pub name: String,
    /// Engine raw type tag
    #[serde(rename = "type")]
    pub raw_type: String,
    /// Module holding the definition
    #[serde(default)]
    pub module_name: Option<String>,
    /// Path of that module; absent for builtins
    #[serde(default)]
    pub module_path: Option<PathBuf>,
    /// Start of the defining construct
    pub start: SourcePosition,
    /// End of the defining construct
    pub end: SourcePosition,
    /// Id of the enclosing scope
    #[serde(default)]
    pub parent: Option<usize>,
    /// Makes ancestry lookups fail with this message
    #[serde(default)]
    pub parent_error: Option<String>,
}

/// A name reference in a snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceEntry {
    /// Identifier text
    pub name: String,
    /// Engine raw type tag
    #[serde(rename = "type")]
    pub raw_type: String,
    /// Start of the occurrence
    pub start: SourcePosition,
    /// End of the occurrence
    pub end: SourcePosition,
    /// Id of the scope the occurrence sits in; absent means module level
    #[serde(default)]
    pub scope: Option<usize>,
    /// Candidate definition ids, most likely first
    #[serde(default)]
    pub definitions: Vec<usize>,
    /// Makes resolution fail with this message
    #[serde(default)]
    pub error: Option<String>,
}

impl SnapshotDocument {
    /// Decode a snapshot from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Snapshot`] if the text is not a valid snapshot.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str::<Self>(json)
            .map_err(Error::Snapshot)?
            .validated()
    }

    /// Decode a snapshot from an already parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Snapshot`] if the value is not a valid snapshot.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value::<Self>(value)
            .map_err(Error::Snapshot)?
            .validated()
    }

    /// Read and decode a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::Snapshot`] if it is not a valid snapshot.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Look up a definition by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::UnknownDefinition`] for a dangling id.
    pub fn definition(
        &self,
        id: usize,
    ) -> std::result::Result<SnapshotDefinition<'_>, ResolutionError> {
        let entry = self
            .definitions
            .get(id)
            .ok_or(ResolutionError::UnknownDefinition(id))?;
        Ok(SnapshotDefinition {
            document: self,
            entry,
        })
    }

    /// Reject entries whose span ends before it starts.
    fn validated(self) -> Result<Self> {
        let definitions = self
            .definitions
            .iter()
            .map(|d| ("definition", d.name.as_str(), d.start, d.end));
        let references = self
            .references
            .iter()
            .map(|r| ("reference", r.name.as_str(), r.start, r.end));
        for (entry, name, start, end) in definitions.chain(references) {
            if SourceSpan::new(start, end).is_none() {
                return Err(Error::Snapshot(serde_json::Error::custom(format!(
                    "{entry} `{name}` ends at {}:{} before it starts at {}:{}",
                    end.line, end.column, start.line, start.column
                ))));
            }
        }
        Ok(self)
    }

    fn is_top_level(&self, entry: &ReferenceEntry) -> std::result::Result<bool, ResolutionError> {
        let Some(scope) = entry.scope else {
            return Ok(true);
        };
        let scope = self
            .definitions
            .get(scope)
            .ok_or(ResolutionError::UnknownDefinition(scope))?;
        Ok(scope.parent.is_none())
    }
}

impl Document for SnapshotDocument {
    type Reference<'a> = SnapshotReference<'a>;

    fn list_references(
        &self,
        scope: ScopeMode,
    ) -> std::result::Result<Vec<SnapshotReference<'_>>, ResolutionError> {
        if let Some(message) = &self.error {
            return Err(ResolutionError::engine(message.clone()));
        }

        let mut references = Vec::with_capacity(self.references.len());
        for entry in &self.references {
            if scope == ScopeMode::TopLevel && !self.is_top_level(entry)? {
                continue;
            }
            references.push(SnapshotReference {
                document: self,
                entry,
            });
        }
        Ok(references)
    }
}

/// A reference handle borrowed from a [`SnapshotDocument`].
#[derive(Debug, Clone, Copy)]
pub struct SnapshotReference<'a> {
    document: &'a SnapshotDocument,
    entry: &'a ReferenceEntry,
}

impl<'a> Reference for SnapshotReference<'a> {
    type Definition = SnapshotDefinition<'a>;

    fn name(&self) -> &str {
        &self.entry.name
    }

    fn raw_type(&self) -> &str {
        &self.entry.raw_type
    }

    fn start_position(&self) -> SourcePosition {
        self.entry.start
    }

    fn end_position(&self) -> SourcePosition {
        self.entry.end
    }

    fn resolve_definitions(
        &self,
    ) -> std::result::Result<Vec<SnapshotDefinition<'a>>, ResolutionError> {
        if let Some(message) = &self.entry.error {
            return Err(ResolutionError::engine(message.clone()));
        }
        self.entry
            .definitions
            .iter()
            .map(|&id| self.document.definition(id))
            .collect()
    }
}

/// A definition handle borrowed from a [`SnapshotDocument`].
#[derive(Debug, Clone, Copy)]
pub struct SnapshotDefinition<'a> {
    document: &'a SnapshotDocument,
    entry: &'a DefinitionEntry,
}

impl Definition for SnapshotDefinition<'_> {
    fn name(&self) -> &str {
        &self.entry.name
    }

    fn raw_type(&self) -> &str {
        &self.entry.raw_type
    }

    fn module_name(&self) -> Option<&str> {
        self.entry.module_name.as_deref()
    }

    fn module_path(&self) -> Option<&Path> {
        self.entry.module_path.as_deref()
    }

    fn start_position(&self) -> SourcePosition {
        self.entry.start
    }

    fn end_position(&self) -> SourcePosition {
        self.entry.end
    }

    fn parent_scope(&self) -> std::result::Result<Option<Self>, ResolutionError> {
        if let Some(message) = &self.entry.parent_error {
            return Err(ResolutionError::engine(message.clone()));
        }
        self.entry
            .parent
            .map(|id| self.document.definition(id))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pos(line: u32, column: u32) -> serde_json::Value {
        json!({"line": line, "column": column})
    }

    fn scoped_document() -> SnapshotDocument {
        SnapshotDocument::from_value(json!({
            "definitions": [
                {"name": "app", "type": "module", "start": pos(1, 0), "end": pos(9, 0)},
                {"name": "run", "type": "function", "module_name": "app",
                 "start": pos(2, 0), "end": pos(4, 0), "parent": 0},
            ],
            "references": [
                {"name": "run", "type": "function", "start": pos(6, 0), "end": pos(6, 3),
                 "definitions": [1]},
                {"name": "total", "type": "statement", "start": pos(3, 4), "end": pos(3, 9),
                 "scope": 1},
                {"name": "run", "type": "function", "start": pos(7, 0), "end": pos(7, 3),
                 "scope": 0},
            ]
        }))
        .expect("valid snapshot")
    }

    #[test]
    fn empty_object_is_an_empty_document() {
        let doc = SnapshotDocument::from_json("{}").expect("valid snapshot");
        let refs = doc.list_references(ScopeMode::AllScopes).expect("listing");
        assert!(refs.is_empty());
    }

    #[test]
    fn malformed_json_is_a_snapshot_error() {
        let err = SnapshotDocument::from_json("{\"references\": 3}").expect_err("invalid");
        assert!(matches!(err, Error::Snapshot(_)));
    }

    #[test]
    fn inverted_span_is_a_snapshot_error() {
        let err = SnapshotDocument::from_value(json!({
            "references": [
                {"name": "late", "type": "statement", "start": pos(4, 6), "end": pos(4, 2)}
            ]
        }))
        .expect_err("inverted span");

        assert!(matches!(err, Error::Snapshot(_)));
        assert!(err.to_string().contains("reference `late` ends at 4:2"));
    }

    #[test]
    fn inverted_definition_span_is_rejected_from_text() {
        let json = r#"{"definitions": [
            {"name": "f", "type": "function",
             "start": {"line": 9, "column": 0}, "end": {"line": 3, "column": 0}}
        ]}"#;

        let err = SnapshotDocument::from_json(json).expect_err("inverted span");
        assert!(err.to_string().contains("definition `f`"));
    }

    #[test]
    fn handles_expose_entry_spans() {
        let doc = scoped_document();
        let refs = doc.list_references(ScopeMode::AllScopes).expect("listing");
        let run = doc.definition(1).expect("definition");

        assert_eq!(
            refs[1].span(),
            SourceSpan::new(SourcePosition::new(3, 4), SourcePosition::new(3, 9))
                .expect("valid span")
        );
        assert_eq!(run.span().start, SourcePosition::new(2, 0));
        assert_eq!(run.span().end, SourcePosition::new(4, 0));
    }

    #[test]
    fn all_scopes_lists_every_reference_in_order() {
        let doc = scoped_document();
        let refs = doc.list_references(ScopeMode::AllScopes).expect("listing");

        let names: Vec<_> = refs.iter().map(Reference::name).collect();
        assert_eq!(names, ["run", "total", "run"]);
    }

    #[test]
    fn top_level_skips_references_inside_nested_scopes() {
        let doc = scoped_document();
        let refs = doc.list_references(ScopeMode::TopLevel).expect("listing");

        let lines: Vec<_> = refs.iter().map(|r| r.start_position().line).collect();
        assert_eq!(lines, [6, 7]);
    }

    #[test]
    fn dangling_scope_fails_top_level_listing() {
        let mut doc = scoped_document();
        doc.references[1].scope = Some(42);

        let err = doc
            .list_references(ScopeMode::TopLevel)
            .expect_err("listing should fail");
        assert_eq!(err, ResolutionError::UnknownDefinition(42));
    }

    #[test]
    fn document_error_fails_listing() {
        let doc = SnapshotDocument {
            error: Some("invalid syntax".to_string()),
            ..SnapshotDocument::default()
        };

        let err = doc
            .list_references(ScopeMode::AllScopes)
            .expect_err("listing should fail");
        assert_eq!(err, ResolutionError::engine("invalid syntax"));
    }

    #[test]
    fn dangling_candidate_fails_resolution() {
        let mut doc = scoped_document();
        doc.references[0].definitions = vec![1, 9];
        let refs = doc.list_references(ScopeMode::AllScopes).expect("listing");

        let err = refs[0]
            .resolve_definitions()
            .expect_err("resolution should fail");
        assert_eq!(err, ResolutionError::UnknownDefinition(9));
    }

    #[test]
    fn definition_without_module_path_is_builtin() {
        let doc = scoped_document();
        let run = doc.definition(1).expect("definition");

        assert_eq!(run.module_name(), Some("app"));
        assert!(run.module_path().is_none());
        assert!(run.in_builtin_module());
        assert_eq!(
            run.parent_scope().expect("ancestry").map(|p| p.name().to_string()),
            Some("app".to_string())
        );
    }

    #[test]
    fn load_reads_snapshot_file() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("snapshot.json");
        std::fs::write(&path, r#"{"references": []}"#).expect("should write snapshot");

        let doc = SnapshotDocument::load(&path).expect("should load");
        assert!(doc.references.is_empty());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("should create temp dir");

        let err = SnapshotDocument::load(&dir.path().join("absent.json")).expect_err("missing");
        assert!(matches!(err, Error::Io(_)));
    }
}

//! Symbol record construction.
//!
//! Runs the filter, resolver, container lookup, range mapping and kind
//! classification for every reference of a document, in listing order.

use tracing::{debug, trace, warn};

use crate::config::SymbolsConfig;
use crate::engine::{Definition, Document, Reference};
use crate::error::{DroppedReference, Error, ResolutionError, Result};
use crate::filter::include;
use crate::kinds::{KindVocabulary, SymbolKind};
use crate::range::{definition_range, usage_range};
use crate::resolver::{container_of, resolve_primary};
use crate::types::{SymbolLocation, SymbolRecord, SymbolReport};
use crate::uri::path_to_uri;

/// Build the symbol record for one accepted reference.
///
/// Name and kind come from the primary definition when there is one,
/// otherwise from the reference itself.
///
/// # Errors
///
/// Returns the engine's [`ResolutionError`] if the reference's definitions
/// cannot be resolved. Container and URI failures never fail a record.
pub fn build_record<R: Reference>(
    reference: &R,
) -> std::result::Result<SymbolRecord, ResolutionError> {
    let definition = resolve_primary(reference)?;
    let container_name = container_of(definition.as_ref());
    let usage_range = usage_range(reference);

    let Some(definition) = definition else {
        return Ok(SymbolRecord {
            name: reference.name().to_string(),
            container_name,
            location: SymbolLocation::default(),
            kind: SymbolKind::classify(reference.raw_type()),
            usage_range,
            module: None,
            builtin: false,
        });
    };

    let uri = definition.module_path().and_then(|path| match path_to_uri(path) {
        Ok(uri) => Some(uri),
        Err(e) => {
            debug!(
                name = definition.name(),
                error = %e,
                "Module path has no URI, omitting it"
            );
            None
        }
    });

    Ok(SymbolRecord {
        name: definition.name().to_string(),
        container_name,
        location: SymbolLocation {
            uri,
            range: Some(definition_range(&definition)),
        },
        kind: SymbolKind::classify(definition.raw_type()),
        usage_range,
        module: definition.module_name().map(str::to_string),
        builtin: definition.in_builtin_module(),
    })
}

/// Resolve the used symbols of a document.
///
/// Returns one record per accepted reference, in listing order. References
/// whose resolution fails are logged and left out.
///
/// # Errors
///
/// Returns [`Error::Listing`] if the engine cannot list the document's
/// references; no partial result is produced in that case.
///
/// # Example
///
/// ```
/// use nereus::{SymbolsConfig, document_symbols};
/// use nereus::snapshot::SnapshotDocument;
///
/// let document = SnapshotDocument::from_json("{}")?;
/// let symbols = document_symbols(&document, &SymbolsConfig::default())?;
/// assert!(symbols.is_empty());
/// # Ok::<(), nereus::Error>(())
/// ```
pub fn document_symbols<D: Document>(
    document: &D,
    config: &SymbolsConfig,
) -> Result<Vec<SymbolRecord>> {
    document_symbols_report(document, config).map(|report| report.symbols)
}

/// Resolve the used symbols of a document, keeping diagnostics.
///
/// Same as [`document_symbols`], but also reports how many references were
/// seen and filtered, and which were dropped.
///
/// # Errors
///
/// Returns [`Error::Listing`] if the engine cannot list the document's
/// references.
pub fn document_symbols_report<D: Document>(
    document: &D,
    config: &SymbolsConfig,
) -> Result<SymbolReport> {
    let references = document
        .list_references(config.scope_mode())
        .map_err(|source| Error::Listing { source })?;

    let mut report = SymbolReport {
        references_seen: references.len(),
        ..SymbolReport::default()
    };

    for reference in &references {
        if !include::<SymbolKind, _>(reference) {
            report.references_filtered += 1;
            continue;
        }

        match build_record(reference) {
            Ok(record) => {
                trace!(
                    name = %record.name,
                    container = ?record.container_name,
                    kind = ?record.kind,
                    "Resolved used symbol"
                );
                report.symbols.push(record);
            }
            Err(e) => {
                let position = reference.start_position();
                warn!(
                    name = reference.name(),
                    line = position.line,
                    column = position.column,
                    error = %e,
                    "Failed to resolve reference, skipping"
                );
                report.dropped.push(DroppedReference::new(
                    reference.name(),
                    usage_range(reference),
                    e,
                ));
            }
        }
    }

    debug!(
        seen = report.references_seen,
        filtered = report.references_filtered,
        resolved = report.symbols.len(),
        dropped = report.dropped.len(),
        "Document symbol request completed"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::SnapshotDocument;
    use crate::ScopeMode;
    use lsp_types::{Position, Range};
    use serde_json::json;

    fn pos(line: u32, column: u32) -> serde_json::Value {
        json!({"line": line, "column": column})
    }

    fn document(references: serde_json::Value) -> SnapshotDocument {
        SnapshotDocument::from_value(json!({
            "definitions": [
                {"name": "app", "type": "module", "module_name": "app",
                 "module_path": "/src/app.py", "start": pos(1, 0), "end": pos(30, 0)},
                {"name": "compute", "type": "function", "module_name": "app",
                 "module_path": "/src/app.py", "start": pos(2, 0), "end": pos(4, 12), "parent": 0},
                {"name": "len", "type": "builtinfunction", "module_name": "builtins",
                 "start": pos(1, 0), "end": pos(1, 0)},
                {"name": "Weird", "type": "coroutine", "module_name": "app",
                 "module_path": "relative/app.py", "start": pos(6, 0), "end": pos(7, 0),
                 "parent": 0},
            ],
            "references": references,
        }))
        .expect("valid snapshot")
    }

    fn first_record(doc: &SnapshotDocument) -> std::result::Result<SymbolRecord, ResolutionError> {
        let refs = doc.list_references(ScopeMode::AllScopes).expect("listing");
        build_record(&refs[0])
    }

    #[test]
    fn resolved_record_takes_definition_name_kind_and_span() {
        let doc = document(json!([
            {"name": "compute", "type": "statement", "start": pos(9, 4), "end": pos(9, 11),
             "definitions": [1]}
        ]));

        let record = first_record(&doc).expect("record");

        assert_eq!(record.name, "compute");
        assert_eq!(record.kind, Some(SymbolKind::Function));
        assert_eq!(record.container_name, None);
        assert_eq!(record.module.as_deref(), Some("app"));
        assert!(!record.builtin);
        let range = record.location.range.expect("definition range");
        assert_eq!(range.start, Position::new(1, 0));
        assert_eq!(range.end, Position::new(3, 12));
        assert_eq!(
            record.location.uri.expect("uri").as_str(),
            "file:///src/app.py"
        );
        assert_eq!(record.usage_range.start, Position::new(8, 4));
        assert_eq!(record.usage_range.end, Position::new(8, 11));
    }

    #[test]
    fn unresolved_record_keeps_reference_name_and_kind() {
        let doc = document(json!([
            {"name": "mystery", "type": "instance", "start": pos(3, 0), "end": pos(3, 7)}
        ]));

        let record = first_record(&doc).expect("record");

        assert_eq!(record.name, "mystery");
        assert_eq!(record.kind, Some(SymbolKind::Class));
        assert_eq!(record.location, SymbolLocation::default());
        assert_eq!(record.module, None);
        assert_eq!(record.usage_range.start, Position::new(2, 0));
    }

    #[test]
    fn builtin_definition_has_range_but_no_uri() {
        let doc = document(json!([
            {"name": "len", "type": "function", "start": pos(3, 0), "end": pos(3, 3),
             "definitions": [2]}
        ]));

        let record = first_record(&doc).expect("record");

        assert!(record.builtin);
        assert!(record.location.uri.is_none());
        assert!(record.location.range.is_some());
        assert_eq!(record.module.as_deref(), Some("builtins"));
    }

    #[test]
    fn unmapped_definition_type_yields_record_without_kind() {
        let doc = document(json!([
            {"name": "Weird", "type": "function", "start": pos(9, 0), "end": pos(9, 5),
             "definitions": [3]}
        ]));

        let record = first_record(&doc).expect("record");

        assert_eq!(record.name, "Weird");
        assert_eq!(record.kind, None);
        // relative module paths cannot become URIs
        assert!(record.location.uri.is_none());
        assert!(record.location.is_resolved());
    }

    #[test]
    fn report_counts_filtered_and_dropped_references() {
        let doc = document(json!([
            {"name": "compute", "type": "function", "start": pos(9, 0), "end": pos(9, 7),
             "definitions": [1]},
            {"name": "x", "type": "param", "start": pos(2, 12), "end": pos(2, 13)},
            {"name": "_", "type": "statement", "start": pos(10, 0), "end": pos(10, 1)},
            {"name": "broken", "type": "function", "start": pos(11, 0), "end": pos(11, 6),
             "error": "parser gave up"},
            {"name": "thing", "type": "coroutine", "start": pos(12, 0), "end": pos(12, 5)},
        ]));

        let report =
            document_symbols_report(&doc, &SymbolsConfig::default()).expect("report");

        assert_eq!(report.references_seen, 5);
        assert_eq!(report.references_filtered, 3);
        assert_eq!(report.symbols.len(), 1);
        assert_eq!(report.dropped.len(), 1);
        assert_eq!(report.dropped[0].name, "broken");
        assert_eq!(
            report.dropped[0].usage_range,
            Range::new(Position::new(10, 0), Position::new(10, 6))
        );
        assert_eq!(
            report.dropped[0].error,
            ResolutionError::engine("parser gave up")
        );
    }

    #[test]
    fn listing_failure_fails_the_request() {
        let doc = SnapshotDocument {
            error: Some("tokenizer crashed".to_string()),
            ..SnapshotDocument::default()
        };

        let err = document_symbols(&doc, &SymbolsConfig::default()).expect_err("should fail");
        assert!(matches!(err, Error::Listing { .. }));
    }
}

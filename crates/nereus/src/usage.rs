//! Symbols used inside a scope.
//!
//! Given the records of a whole document, narrows them to the symbols a
//! single scope (a function body, a class) depends on.

use lsp_types::{Range, Uri};

use crate::range::lines_within;
use crate::types::SymbolRecord;

/// Records used within `scope` of the document at `document_uri`.
///
/// A record qualifies when its usage lies within the scope's lines and its
/// definition does not: symbols defined inside the scope itself are local,
/// not dependencies. Order is preserved.
#[must_use]
pub fn symbols_used_in<'a>(
    records: &'a [SymbolRecord],
    document_uri: &Uri,
    scope: &Range,
) -> Vec<&'a SymbolRecord> {
    records
        .iter()
        .filter(|record| lines_within(&record.usage_range, scope))
        .filter(|record| !defined_within(record, document_uri, scope))
        .collect()
}

fn defined_within(record: &SymbolRecord, document_uri: &Uri, scope: &Range) -> bool {
    match (&record.location.uri, &record.location.range) {
        (Some(uri), Some(range)) => uri == document_uri && lines_within(range, scope),
        _ => false,
    }
}

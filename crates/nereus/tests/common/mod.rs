//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use nereus::snapshot::SnapshotDocument;
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

/// Route `tracing` output through the test harness (set `RUST_LOG` to see it).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Path of a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Load a snapshot fixture.
pub fn load_fixture(name: &str) -> SnapshotDocument {
    SnapshotDocument::load(&fixture_path(name)).expect("fixture should load")
}

/// An engine position as snapshot JSON.
pub fn pos(line: u32, column: u32) -> Value {
    json!({"line": line, "column": column})
}

/// A single-line reference entry as snapshot JSON.
pub fn reference(name: &str, raw_type: &str, line: u32, column: u32) -> Value {
    let end = column + u32::try_from(name.len()).expect("short name");
    json!({
        "name": name,
        "type": raw_type,
        "start": pos(line, column),
        "end": pos(line, end),
    })
}

/// Build a snapshot from definition and reference entries.
pub fn snapshot(definitions: Value, references: Value) -> SnapshotDocument {
    SnapshotDocument::from_value(json!({
        "definitions": definitions,
        "references": references,
    }))
    .expect("valid snapshot")
}

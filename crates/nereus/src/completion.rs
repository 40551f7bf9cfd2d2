//! Used symbols in the completion-item shape.
//!
//! Older consumers ask for used symbols as completion items: only the
//! reference name and a coarse kind, with no resolution step.

use tracing::debug;

use crate::config::SymbolsConfig;
use crate::engine::{Document, Reference};
use crate::error::{Error, Result};
use crate::filter::include;
use crate::kinds::{CompletionKind, KindVocabulary};
use crate::types::UsedCompletionItem;

/// List the used symbols of a document as completion items.
///
/// References are filtered with the coarse completion vocabulary and are
/// never resolved, so a per-reference engine failure cannot occur here.
///
/// # Errors
///
/// Returns [`Error::Listing`] if the engine cannot list the document's
/// references.
pub fn used_completion_items<D: Document>(
    document: &D,
    config: &SymbolsConfig,
) -> Result<Vec<UsedCompletionItem>> {
    let references = document
        .list_references(config.scope_mode())
        .map_err(|source| Error::Listing { source })?;

    let items: Vec<_> = references
        .iter()
        .filter(|reference| include::<CompletionKind, _>(*reference))
        .map(|reference| {
            UsedCompletionItem::new(
                reference.name(),
                CompletionKind::classify(reference.raw_type()),
            )
        })
        .collect();

    debug!(
        seen = references.len(),
        items = items.len(),
        "Used completion items listed"
    );
    Ok(items)
}

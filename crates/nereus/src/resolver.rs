//! Definition and container resolution.
//!
//! Picks the primary definition for a reference and finds the nearest named
//! scope enclosing that definition.

use tracing::debug;

use crate::engine::{Definition, Reference};
use crate::error::ResolutionError;

/// Resolve the primary definition of a reference.
///
/// The first candidate reported by the engine wins; no secondary ranking is
/// applied. No candidates resolves to `Ok(None)`.
///
/// # Errors
///
/// Propagates the engine's [`ResolutionError`] when resolution fails.
pub fn resolve_primary<R: Reference>(
    reference: &R,
) -> Result<Option<R::Definition>, ResolutionError> {
    let candidates = reference.resolve_definitions()?;
    if candidates.len() > 1 {
        debug!(
            name = reference.name(),
            candidates = candidates.len(),
            "Multiple definitions, using the first"
        );
    }
    Ok(candidates.into_iter().next())
}

/// Name of the nearest named scope enclosing a definition.
///
/// Returns `None` when there is no definition, when the definition has no
/// parent, or when the parent is the module scope (a parent with no parent
/// of its own). Ancestry failures are logged and treated as no container.
#[must_use]
pub fn container_of<D: Definition>(definition: Option<&D>) -> Option<String> {
    let definition = definition?;
    match enclosing_scope(definition) {
        Ok(container) => container,
        Err(e) => {
            debug!(
                name = definition.name(),
                error = %e,
                "Ancestry lookup failed, omitting container"
            );
            None
        }
    }
}

fn enclosing_scope<D: Definition>(definition: &D) -> Result<Option<String>, ResolutionError> {
    let Some(parent) = definition.parent_scope()? else {
        return Ok(None);
    };
    // A parent without its own parent is the module itself.
    if parent.parent_scope()?.is_none() {
        return Ok(None);
    }
    Ok(Some(parent.name().to_string()))
}

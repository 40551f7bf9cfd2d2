//! Reference filtering.
//!
//! Decides which raw references are worth surfacing as symbols. The check
//! is cheap and runs before any resolution work.

use crate::engine::Reference;
use crate::kinds::KindVocabulary;

/// Raw type the engine gives to function parameters.
pub const PARAM_RAW_TYPE: &str = "param";

/// Conventional name of a discarded value.
pub const DISCARD_NAME: &str = "_";

/// Whether a reference should produce a symbol in vocabulary `K`.
///
/// A reference is excluded when any of these hold:
/// - it names a parameter (signatures would otherwise flood the output)
/// - it is the `_` placeholder
/// - its raw type has no kind in `K`
#[must_use]
pub fn include<K: KindVocabulary, R: Reference>(reference: &R) -> bool {
    reference.raw_type() != PARAM_RAW_TYPE
        && reference.name() != DISCARD_NAME
        && K::classify(reference.raw_type()).is_some()
}

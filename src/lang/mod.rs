//! Language identification for outline entries.
//!
//! Two-stage identification: a statistical trigram detector first, then a
//! Unicode script-range table when the detector cannot decide. Codes are
//! resolved to English display names. The whole subsystem is infallible —
//! unresolvable input yields the `("unknown", "Unknown")` sentinel pair.

pub mod identifier;
pub mod script;

// Re-export main types
pub use identifier::{display_name, LanguageIdentifier, LanguageTag, UNKNOWN_NAME};
pub use script::{classify_by_script, UNKNOWN_LANG};

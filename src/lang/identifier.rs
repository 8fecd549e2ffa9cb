//! Language identification for heading text.
//!
//! Wraps the statistical trigram detector with the script-range classifier
//! as fallback, then resolves codes to display names. Identification is
//! infallible by design: every failure mode collapses into the
//! `("unknown", "Unknown")` sentinel pair rather than surfacing an error.

use crate::lang::script::classify_by_script;
use whatlang::Detector;

/// Sentinel display name used when a code cannot be resolved.
pub const UNKNOWN_NAME: &str = "Unknown";

/// A resolved language: ISO code plus human-readable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTag {
    /// ISO 639-1 code where one exists, 639-3 otherwise, or `"unknown"`
    pub code: String,
    /// English display name, or `"Unknown"`
    pub name: String,
}

/// Identifies the language of short text runs.
///
/// The detector is configured once at construction, which is what makes
/// identification reproducible across runs and processes: the trigram
/// detector carries no per-call state, and the fallback table is static.
/// Construct one identifier per pipeline and reuse it for every line.
///
/// # Examples
///
/// ```
/// use outline_oxide::lang::LanguageIdentifier;
///
/// let identifier = LanguageIdentifier::new();
/// let tag = identifier.identify("The quick brown fox jumps over the lazy dog");
/// assert_eq!(tag.code, "en");
/// assert_eq!(tag.name, "English");
/// ```
pub struct LanguageIdentifier {
    detector: Detector,
}

impl LanguageIdentifier {
    /// Create an identifier with the default detector configuration.
    pub fn new() -> Self {
        Self {
            detector: Detector::new(),
        }
    }

    /// Identify the language of `text`.
    ///
    /// Tries the statistical detector first; when it cannot decide (empty or
    /// featureless input), falls back to Unicode script classification. The
    /// resulting code is resolved to an English name. Never fails: the worst
    /// case is the `("unknown", "Unknown")` pair.
    pub fn identify(&self, text: &str) -> LanguageTag {
        let code = match self.detector.detect_lang(text) {
            Some(lang) => normalize_code(lang.code()),
            None => classify_by_script(text).to_string(),
        };

        let name = display_name(&code);
        LanguageTag { code, name }
    }
}

impl Default for LanguageIdentifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Prefer the two-letter 639-1 form so the statistical path agrees with the
/// script-fallback table ("hi", "ja", ...). Codes without a 639-1 form pass
/// through as 639-3.
fn normalize_code(code_639_3: &str) -> String {
    isolang::Language::from_639_3(code_639_3)
        .and_then(|lang| lang.to_639_1())
        .unwrap_or(code_639_3)
        .to_string()
}

/// Resolve a language code to its English display name.
///
/// Accepts both 639-1 and 639-3 codes; anything unresolvable (including the
/// `"unknown"` sentinel) maps to [`UNKNOWN_NAME`].
pub fn display_name(code: &str) -> String {
    isolang::Language::from_639_1(code)
        .or_else(|| isolang::Language::from_639_3(code))
        .map(|lang| lang.to_name().to_string())
        .unwrap_or_else(|| UNKNOWN_NAME.to_string())
}

//! Symbol builder: chord-quality labels for the second voice.

use crate::model::{Duration, Justification, TextAnnotation};
use crate::text::beautify_accidentals;

/// Seventh-chord qualities, in display order.
pub const CHORD_QUALITY_SUFFIXES: [&str; 8] = ["o7", "ø7", "m7", "mM7", "7", "M7", "+7", "+M7"];

/// Staff line the symbols sit on (two lines above the top staff line).
pub const SYMBOL_LINE: i32 = -2;

/// One left-justified annotation per quality suffix, reading `key + suffix`.
/// An empty key still yields all eight, showing just the suffixes.
pub fn build_symbols(key: &str) -> Vec<TextAnnotation> {
    let root = beautify_accidentals(key);
    CHORD_QUALITY_SUFFIXES
        .iter()
        .map(|suffix| TextAnnotation {
            text: format!("{root}{suffix}"),
            line: SYMBOL_LINE,
            justification: Justification::Left,
            duration: Duration::Whole,
        })
        .collect()
}

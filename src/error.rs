//! Error types for chord translation and rendering.
//!
//! Chord-level errors (`InvalidAccidental`, `InvalidNote`, `MalformedChord`)
//! only ever cost the chord they occur in; the session records them and keeps
//! drawing. `MalformedPayload` collapses to the empty staff.

use thiserror::Error;

/// Result alias that carries [`ChordError`].
pub type Result<T> = std::result::Result<T, ChordError>;

#[derive(Error, Debug)]
pub enum ChordError {
    /// An accidental slot holds something other than `""`, `b`, `bb`, `#`, `##`.
    ///
    /// ```
    /// # use chordstaff::ChordError;
    /// let err = ChordError::InvalidAccidental { index: 2, value: "x".into() };
    /// assert_eq!(err.to_string(), "Invalid accidental 'x' in slot 2");
    /// ```
    #[error("Invalid accidental '{value}' in slot {index}")]
    InvalidAccidental { index: usize, value: String },

    /// A note slot is not one of the letters A–G.
    #[error("Invalid note letter '{value}' in slot {index}")]
    InvalidNote { index: usize, value: String },

    /// A chord spec string did not carry all 8 comma-separated fields.
    #[error("Chord '{name}' has {fields} fields, expected 8")]
    MalformedChord { name: String, fields: usize },

    /// The payload was not an object, or lacked the fields a render needs.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

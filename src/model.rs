//! Data model for chord payloads and the notation primitives built from them.
//!
//! Everything here is rebuilt from scratch on every payload; nothing is meant
//! to outlive a single render.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of note slots (and accidental slots) in every chord spec.
pub const CHORD_SIZE: usize = 4;

/// Octave given to the first note of every chord.
pub const BASE_OCTAVE: i32 = 4;

/// A decoded update from the host application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    /// Root label for the chord-quality symbols. `None` when the payload
    /// carries no key field at all; `Some("")` requests the empty staff.
    pub key: Option<String>,
    /// Chords in display order.
    pub chords: Vec<ChordSpec>,
}

/// One chord as it arrives in the payload: a display name plus a
/// comma-separated string of 4 note slots then 4 accidental slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChordSpec {
    /// Display name / role (e.g. "Dominant").
    pub name: String,
    /// e.g. `"A,C,E,G,,,,"` or `"B,D,F,A,,,,b"`.
    pub spec: String,
}

impl ChordSpec {
    pub fn new(name: impl Into<String>, spec: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spec: spec.into(),
        }
    }

    /// True when the spec string opens with three separators, i.e. carries no notes.
    pub fn is_blank(&self) -> bool {
        self.spec.starts_with(",,,")
    }

    /// Split into note slots and accidental slots. Fields past the eighth are
    /// ignored.
    pub fn slots(&self) -> Option<([&str; CHORD_SIZE], [&str; CHORD_SIZE])> {
        let fields: Vec<&str> = self.spec.split(',').map(str::trim).collect();
        if fields.len() < 2 * CHORD_SIZE {
            return None;
        }
        let notes = [fields[0], fields[1], fields[2], fields[3]];
        let accidentals = [fields[4], fields[5], fields[6], fields[7]];
        Some((notes, accidentals))
    }

    pub fn field_count(&self) -> usize {
        self.spec.split(',').count()
    }
}

/// Diatonic note letter, ordered C to B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Position in the scale C-D-E-F-G-A-B (C = 0).
    pub fn diatonic_index(self) -> i32 {
        self as i32
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Letter::C => "C",
            Letter::D => "D",
            Letter::E => "E",
            Letter::F => "F",
            Letter::G => "G",
            Letter::A => "A",
            Letter::B => "B",
        }
    }
}

impl FromStr for Letter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "C" => Ok(Letter::C),
            "D" => Ok(Letter::D),
            "E" => Ok(Letter::E),
            "F" => Ok(Letter::F),
            "G" => Ok(Letter::G),
            "A" => Ok(Letter::A),
            "B" => Ok(Letter::B),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accidental that can be attached to a stacked note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accidental {
    DoubleFlat,
    Flat,
    Sharp,
    DoubleSharp,
}

impl Accidental {
    /// The ASCII code used in chord specs (`bb`, `b`, `#`, `##`).
    pub fn code(self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "bb",
            Accidental::Flat => "b",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "##",
        }
    }

    /// Unicode notational glyph.
    pub fn glyph(self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "\u{1D12B}",
            Accidental::Flat => "\u{266D}",
            Accidental::Sharp => "\u{266F}",
            Accidental::DoubleSharp => "\u{1D12A}",
        }
    }
}

/// A note letter with its assigned octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedNote {
    pub letter: Letter,
    pub octave: i32,
}

impl NormalizedNote {
    pub fn new(letter: Letter, octave: i32) -> Self {
        Self { letter, octave }
    }

    /// Absolute diatonic height: octave * 7 + letter index.
    pub fn height(&self) -> i32 {
        self.octave * 7 + self.letter.diatonic_index()
    }

    /// Key string in `letter/octave` form, e.g. `C/4`.
    pub fn key(&self) -> String {
        format!("{}/{}", self.letter, self.octave)
    }
}

/// Rhythmic value of a primitive. Every primitive here is a whole note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Duration {
    #[default]
    Whole,
}

impl Duration {
    /// Beats consumed at beat value 4.
    pub fn beats(self) -> u32 {
        match self {
            Duration::Whole => 4,
        }
    }
}

/// A vertically stacked whole-note group ready for drawing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderableChord {
    pub name: String,
    /// Stacked pitches in input order (not sorted by height).
    pub keys: [NormalizedNote; CHORD_SIZE],
    /// Note index → accidental, sparse.
    pub accidentals: BTreeMap<usize, Accidental>,
    pub duration: Duration,
}

impl RenderableChord {
    pub fn accidental_at(&self, index: usize) -> Option<Accidental> {
        self.accidentals.get(&index).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justification {
    #[default]
    Left,
    Center,
}

/// A text primitive drawn on the staff (chord-quality symbols).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextAnnotation {
    pub text: String,
    /// Staff line the text sits on, counted from the top line (0) downward;
    /// negative lines are above the staff.
    pub line: i32,
    pub justification: Justification,
    pub duration: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Clef {
    #[default]
    Treble,
    Bass,
}

/// Time signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSignature {
    /// Numerator (e.g., 3 in 3/4)
    pub beats: u32,
    /// Denominator (e.g., 4 in 3/4)
    pub beat_type: u32,
}

impl Default for TimeSignature {
    fn default() -> Self {
        Self {
            beats: 4,
            beat_type: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_parsing_accepts_either_case() {
        assert_eq!("c".parse::<Letter>(), Ok(Letter::C));
        assert_eq!(" B ".parse::<Letter>(), Ok(Letter::B));
        assert!("H".parse::<Letter>().is_err());
        assert!("".parse::<Letter>().is_err());
    }

    #[test]
    fn chord_spec_slots() {
        let spec = ChordSpec::new("Minor", "A, C,E,G,,b,, #,extra");
        let (notes, accs) = spec.slots().unwrap();
        assert_eq!(notes, ["A", "C", "E", "G"]);
        assert_eq!(accs, ["", "b", "", "#"]);
        assert!(!spec.is_blank());

        assert!(ChordSpec::new("Short", "C,E,G,B").slots().is_none());
        assert!(ChordSpec::new("Augmented", ",,,,,,,").is_blank());
    }

    #[test]
    fn note_key_and_height() {
        let a4 = NormalizedNote::new(Letter::A, 4);
        let c5 = NormalizedNote::new(Letter::C, 5);
        assert_eq!(a4.key(), "A/4");
        assert!(c5.height() > a4.height());
        assert_eq!(c5.height() - a4.height(), 2);
    }
}

//! Chord builder: turns one chord spec into a renderable whole-note chord.

use crate::accidental::bind_accidentals;
use crate::error::{ChordError, Result};
use crate::model::{ChordSpec, Duration, Letter, RenderableChord, CHORD_SIZE};
use crate::pitch::{normalize, WrapPolicy};

/// Build one chord. Note order is preserved; accidentals attach by slot index.
pub fn build_chord(spec: &ChordSpec, policy: WrapPolicy) -> Result<RenderableChord> {
    let (notes, accidental_slots) = spec.slots().ok_or_else(|| ChordError::MalformedChord {
        name: spec.name.clone(),
        fields: spec.field_count(),
    })?;

    let mut letters = [Letter::C; CHORD_SIZE];
    for (i, slot) in notes.iter().enumerate() {
        letters[i] = slot.parse().map_err(|_| ChordError::InvalidNote {
            index: i,
            value: slot.to_string(),
        })?;
    }

    let accidentals = bind_accidentals(&accidental_slots)?;

    Ok(RenderableChord {
        name: spec.name.clone(),
        keys: normalize(&letters, policy),
        accidentals,
        duration: Duration::Whole,
    })
}

/// Build every chord, keeping the good ones in order and collecting the rest.
pub fn build_chords(specs: &[ChordSpec], policy: WrapPolicy) -> (Vec<RenderableChord>, Vec<ChordError>) {
    let mut chords = Vec::with_capacity(specs.len());
    let mut skipped = Vec::new();

    for spec in specs {
        match build_chord(spec, policy) {
            Ok(chord) => {
                tracing::trace!(chord = %chord.name, keys = ?chord.keys.map(|k| k.key()), "built chord");
                chords.push(chord);
            }
            Err(err) => {
                tracing::warn!(chord = %spec.name, error = %err, "skipping chord");
                skipped.push(err);
            }
        }
    }

    (chords, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Accidental;
    use pretty_assertions::assert_eq;

    fn spec(name: &str, fields: &str) -> ChordSpec {
        ChordSpec::new(name, fields)
    }

    #[test]
    fn keys_follow_input_order() {
        let chord = build_chord(&spec("Minor", "A,C,E,G,,,,"), WrapPolicy::Threshold).unwrap();
        let keys: Vec<String> = chord.keys.iter().map(|k| k.key()).collect();
        assert_eq!(keys, vec!["A/4", "C/5", "E/5", "G/5"]);
        assert_eq!(chord.duration, Duration::Whole);
        assert_eq!(chord.name, "Minor");
    }

    #[test]
    fn accidental_is_positional() {
        // Two Bs; only the stacked note in slot 2 gets the double flat.
        let chord = build_chord(&spec("Dim", "B,D,B,A,,,bb,"), WrapPolicy::Continuous).unwrap();
        assert_eq!(chord.accidental_at(2), Some(Accidental::DoubleFlat));
        assert_eq!(chord.accidental_at(0), None);
        assert_eq!(chord.accidentals.len(), 1);
    }

    #[test]
    fn bad_letter_is_reported() {
        let err = build_chord(&spec("Odd", "C,X,G,B,,,,"), WrapPolicy::Continuous).unwrap_err();
        assert!(matches!(err, ChordError::InvalidNote { index: 1, .. }));
    }

    #[test]
    fn short_spec_is_malformed() {
        let err = build_chord(&spec("Triad", "C,E,G"), WrapPolicy::Continuous).unwrap_err();
        assert!(matches!(err, ChordError::MalformedChord { fields: 3, .. }));
    }

    #[test]
    fn blank_notes_are_invalid() {
        let err = build_chord(&spec("Augmented", ",,,,,,,"), WrapPolicy::Continuous).unwrap_err();
        assert!(matches!(err, ChordError::InvalidNote { index: 0, .. }));
    }

    #[test]
    fn invalid_accidental_skips_only_that_chord() {
        let specs = vec![
            spec("One", "C,E,G,B,,,,"),
            spec("Two", "D,F,A,C,,x,,"),
            spec("Three", "E,G,B,D,,,,#"),
        ];
        let (chords, skipped) = build_chords(&specs, WrapPolicy::Continuous);
        let names: Vec<&str> = chords.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["One", "Three"]);
        assert_eq!(skipped.len(), 1);
        assert!(matches!(skipped[0], ChordError::InvalidAccidental { index: 1, .. }));
    }
}

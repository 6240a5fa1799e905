//! Accidental binder: maps accidental slots onto stacked-note indices.

use std::collections::BTreeMap;

use crate::error::{ChordError, Result};
use crate::model::{Accidental, CHORD_SIZE};

/// Parse one accidental slot. `Ok(None)` means the slot is empty.
pub fn parse_accidental(index: usize, slot: &str) -> Result<Option<Accidental>> {
    match slot.trim() {
        "" => Ok(None),
        "b" => Ok(Some(Accidental::Flat)),
        "bb" => Ok(Some(Accidental::DoubleFlat)),
        "#" => Ok(Some(Accidental::Sharp)),
        "##" => Ok(Some(Accidental::DoubleSharp)),
        other => Err(ChordError::InvalidAccidental {
            index,
            value: other.to_string(),
        }),
    }
}

/// Bind the 4 accidental slots of a chord to note indices, skipping empty ones.
pub fn bind_accidentals<S: AsRef<str>>(slots: &[S; CHORD_SIZE]) -> Result<BTreeMap<usize, Accidental>> {
    let mut bound = BTreeMap::new();
    for (i, slot) in slots.iter().enumerate() {
        if let Some(acc) = parse_accidental(i, slot.as_ref())? {
            bound.insert(i, acc);
        }
    }
    Ok(bound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_slots_are_skipped() {
        let bound = bind_accidentals(&["", "", "", ""]).unwrap();
        assert!(bound.is_empty());
    }

    #[test]
    fn double_flat_binds_to_its_own_slot_only() {
        let bound = bind_accidentals(&["", "", "bb", ""]).unwrap();
        assert_eq!(bound.len(), 1);
        assert_eq!(bound.get(&2), Some(&Accidental::DoubleFlat));
        assert_eq!(bound.get(&0), None);
        assert_eq!(bound.get(&1), None);
        assert_eq!(bound.get(&3), None);
    }

    #[test]
    fn every_recognised_code_binds() {
        let bound = bind_accidentals(&["b", "bb", "#", "##"]).unwrap();
        let kinds: Vec<_> = bound.into_iter().collect();
        assert_eq!(
            kinds,
            vec![
                (0, Accidental::Flat),
                (1, Accidental::DoubleFlat),
                (2, Accidental::Sharp),
                (3, Accidental::DoubleSharp),
            ]
        );
    }

    #[test]
    fn unknown_code_is_rejected_with_its_slot() {
        let err = bind_accidentals(&["", "#", "n", ""]).unwrap_err();
        match err {
            ChordError::InvalidAccidental { index, value } => {
                assert_eq!(index, 2);
                assert_eq!(value, "n");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn triple_sharp_is_not_an_accidental() {
        assert!(parse_accidental(0, "###").is_err());
    }
}

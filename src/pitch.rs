//! Pitch normalizer: assigns octaves so a chord's letters stack upward.
//!
//! Every chord starts at octave 4. Whether a later note moves up an octave is
//! decided by a [`WrapPolicy`], chosen once in the render config.

use serde::{Deserialize, Serialize};

use crate::model::{Letter, NormalizedNote, BASE_OCTAVE, CHORD_SIZE};

/// Strategy deciding when a chord's letter sequence has cycled past B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WrapPolicy {
    /// Bump at most once, at the first slot where a stack of thirds built on
    /// the tonic would pass B. Later letters are not consulted.
    Threshold,
    /// Bump whenever a note's letter sits below the previously placed letter.
    /// A chord may bump more than once.
    #[default]
    Continuous,
}

impl WrapPolicy {
    /// Does the note at `index` wrap?
    ///
    /// `tonic` is the chord's first letter, `previous` the letter placed just
    /// before `index`, and `raised` whether this chord already bumped once.
    pub fn wraps(self, index: usize, letter: Letter, tonic: Letter, previous: Letter, raised: bool) -> bool {
        if index == 0 {
            return false;
        }
        match self {
            WrapPolicy::Threshold => !raised && tonic.diatonic_index() + 2 * index as i32 >= 7,
            WrapPolicy::Continuous => letter.diatonic_index() < previous.diatonic_index(),
        }
    }
}

/// Give each of a chord's letters an octave, keeping input order.
pub fn normalize(letters: &[Letter; CHORD_SIZE], policy: WrapPolicy) -> [NormalizedNote; CHORD_SIZE] {
    let tonic = letters[0];
    let mut octave = BASE_OCTAVE;
    let mut raised = false;
    let mut previous = tonic;

    let mut out = [NormalizedNote::new(tonic, BASE_OCTAVE); CHORD_SIZE];
    for (i, &letter) in letters.iter().enumerate() {
        if policy.wraps(i, letter, tonic, previous, raised) {
            octave += 1;
            raised = true;
        }
        out[i] = NormalizedNote::new(letter, octave);
        previous = letter;
    }
    out
}

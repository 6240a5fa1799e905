//! Voice layout: groups primitives into voices and justifies them jointly.
//!
//! Beat bookkeeping here only drives horizontal placement: every primitive
//! is a whole note (4 quarter beats) and every voice declares 32 beats at beat
//! value 4. Content past the capacity is placed past the justified width
//! rather than reflowed.

use crate::model::{RenderableChord, TextAnnotation};

/// Declared beats per voice.
pub const VOICE_BEATS: u32 = 32;

/// Beat value the capacity is counted in (4 = quarter notes).
pub const BEAT_VALUE: u32 = 4;

/// A primitive that occupies time in a voice.
#[derive(Debug, Clone, PartialEq)]
pub enum Tickable {
    Chord(RenderableChord),
    Text(TextAnnotation),
}

impl Tickable {
    /// Length in quarter beats.
    pub fn quarters(&self) -> u32 {
        match self {
            Tickable::Chord(chord) => chord.duration.beats(),
            Tickable::Text(text) => text.duration.beats(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Voice {
    pub num_beats: u32,
    pub beat_value: u32,
    pub tickables: Vec<Tickable>,
}

impl Default for Voice {
    fn default() -> Self {
        Self::new(VOICE_BEATS, BEAT_VALUE)
    }
}

impl Voice {
    pub fn new(num_beats: u32, beat_value: u32) -> Self {
        Self {
            num_beats,
            beat_value: beat_value.max(1),
            tickables: Vec::new(),
        }
    }

    pub fn with_tickables(mut self, tickables: impl IntoIterator<Item = Tickable>) -> Self {
        self.tickables.extend(tickables);
        self
    }

    /// Capacity expressed in quarter beats.
    pub fn capacity_quarters(&self) -> u32 {
        self.num_beats * 4 / self.beat_value
    }

    pub fn used_quarters(&self) -> u32 {
        self.tickables.iter().map(Tickable::quarters).sum()
    }

    pub fn is_overfull(&self) -> bool {
        self.used_quarters() > self.capacity_quarters()
    }

    /// Start offset (in quarter beats) of each primitive.
    pub fn offsets(&self) -> Vec<u32> {
        let mut at = 0;
        self.tickables
            .iter()
            .map(|t| {
                let start = at;
                at += t.quarters();
                start
            })
            .collect()
    }
}

/// Result of a joint justification pass.
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceLayout {
    pub start_x: f64,
    /// Right edge every voice is justified to.
    pub end_x: f64,
    /// Sorted beat offset → x position, shared by all voices.
    pub beat_x_map: Vec<(u32, f64)>,
    /// Per voice, per primitive x position.
    pub positions: Vec<Vec<f64>>,
}

/// Justify `voices` together across `width` pixels starting at `start_x`.
///
/// Primitives at the same beat offset share an x column, whichever voice
/// they belong to.
pub fn justify(voices: &[Voice], start_x: f64, width: f64) -> VoiceLayout {
    let capacity = voices
        .iter()
        .map(Voice::capacity_quarters)
        .max()
        .unwrap_or(VOICE_BEATS)
        .max(1);

    let all_offsets: Vec<Vec<u32>> = voices.iter().map(Voice::offsets).collect();

    let mut unique: Vec<u32> = all_offsets.iter().flatten().copied().collect();
    unique.sort_unstable();
    unique.dedup();

    let beat_x_map: Vec<(u32, f64)> = unique
        .iter()
        .map(|&beat| (beat, start_x + beat as f64 / capacity as f64 * width))
        .collect();

    let x_at = |beat: u32| -> f64 {
        beat_x_map
            .iter()
            .find(|(b, _)| *b == beat)
            .map_or(start_x, |&(_, x)| x)
    };

    for (i, voice) in voices.iter().enumerate() {
        if voice.is_overfull() {
            tracing::debug!(
                voice = i,
                used = voice.used_quarters(),
                capacity = voice.capacity_quarters(),
                "voice overflows the justified width"
            );
        }
    }

    let positions: Vec<Vec<f64>> = all_offsets
        .iter()
        .map(|offsets| offsets.iter().map(|&b| x_at(b)).collect::<Vec<f64>>())
        .collect();

    VoiceLayout {
        start_x,
        end_x: start_x + width,
        beat_x_map,
        positions,
    }
}

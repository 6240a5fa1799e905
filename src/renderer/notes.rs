//! Chord, accidental and ledger line rendering.

use crate::model::{Clef, Justification, NormalizedNote, RenderableChord, TextAnnotation};
use super::constants::*;
use super::svg_builder::SvgBuilder;

/// Vertical offset of a note from the top staff line.
pub(super) fn pitch_to_staff_y(note: &NormalizedNote, clef: Clef) -> f64 {
    // Reference pitch and its offset from the top line.
    let (ref_height, ref_y) = match clef {
        Clef::Treble => (4 * 7 + 4, 3.0 * STAFF_LINE_SPACING), // G4, second line from bottom
        Clef::Bass => (3 * 7 + 3, STAFF_LINE_SPACING),         // F3, second line from top
    };
    let staff_steps = note.height() - ref_height;
    ref_y - staff_steps as f64 * (STAFF_LINE_SPACING / 2.0)
}

/// Per stacked note: notehead x offset, so seconds don't sit on top of each
/// other. Returned in input order.
fn notehead_offsets(keys: &[NormalizedNote]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by_key(|&i| keys[i].height());

    let mut offsets = vec![0.0; keys.len()];
    let mut prev: Option<(i32, bool)> = None;
    for &i in &order {
        let h = keys[i].height();
        let displaced = matches!(prev, Some((ph, false)) if h - ph == 1);
        if displaced {
            offsets[i] = 2.0 * NOTEHEAD_RX - 1.0;
        }
        prev = Some((h, displaced));
    }
    offsets
}

/// Accidental column per note index (0 = nearest the notehead), top down,
/// moving to a new column when the previous glyph is too close vertically.
fn accidental_columns(chord: &RenderableChord) -> Vec<(usize, usize)> {
    let mut marked: Vec<usize> = chord.accidentals.keys().copied().collect();
    marked.sort_by_key(|&i| std::cmp::Reverse(chord.keys[i].height()));

    let mut placed: Vec<(usize, usize)> = Vec::with_capacity(marked.len());
    for &i in &marked {
        let h = chord.keys[i].height();
        let mut column = 0;
        while placed.iter().any(|&(j, c)| {
            c == column && (chord.keys[j].height() - h).abs() < ACCIDENTAL_MIN_SEPARATION
        }) {
            column += 1;
        }
        placed.push((i, column));
    }
    placed
}

pub(super) fn render_chord(svg: &mut SvgBuilder, x: f64, staff_y: f64, clef: Clef, chord: &RenderableChord) {
    svg.open_group("data-chord", &chord.name);

    let offsets = notehead_offsets(&chord.keys);

    for (i, key) in chord.keys.iter().enumerate() {
        let nx = x + offsets[i];
        let ny = staff_y + pitch_to_staff_y(key, clef);
        render_ledger_lines(svg, nx, ny, staff_y);
        svg.whole_notehead(nx, ny, &key.key());
    }

    for (i, column) in accidental_columns(chord) {
        if let Some(acc) = chord.accidental_at(i) {
            let ny = staff_y + pitch_to_staff_y(&chord.keys[i], clef);
            let ax = x - NOTEHEAD_RX - ACCIDENTAL_GAP - column as f64 * ACCIDENTAL_COLUMN_WIDTH;
            svg.accidental_glyph(ax, ny, acc.glyph(), i);
        }
    }

    svg.close_group();
}

pub(super) fn render_annotation(svg: &mut SvgBuilder, x: f64, staff_y: f64, annotation: &TextAnnotation) {
    let y = staff_y + annotation.line as f64 * STAFF_LINE_SPACING;
    let anchor = match annotation.justification {
        Justification::Left => "start",
        Justification::Center => "middle",
    };
    svg.annotation_text(x, y, &annotation.text, anchor);
}

// ── Ledger lines ────────────────────────────────────────────────────

fn render_ledger_lines(svg: &mut SvgBuilder, x: f64, note_y: f64, staff_y: f64) {
    let top = staff_y;
    let bottom = staff_y + STAFF_HEIGHT;

    if note_y < top {
        let mut y = top - STAFF_LINE_SPACING;
        while y >= note_y - 1.0 {
            svg.line(
                x - NOTEHEAD_RX - LEDGER_LINE_EXTEND,
                y,
                x + NOTEHEAD_RX + LEDGER_LINE_EXTEND,
                y,
                STAFF_COLOR, LEDGER_LINE_WIDTH,
            );
            y -= STAFF_LINE_SPACING;
        }
    }

    if note_y > bottom {
        let mut y = bottom + STAFF_LINE_SPACING;
        while y <= note_y + 1.0 {
            svg.line(
                x - NOTEHEAD_RX - LEDGER_LINE_EXTEND,
                y,
                x + NOTEHEAD_RX + LEDGER_LINE_EXTEND,
                y,
                STAFF_COLOR, LEDGER_LINE_WIDTH,
            );
            y += STAFF_LINE_SPACING;
        }
    }
}

//! Staff lines, clef, time signature and barline rendering.

use crate::model::{Clef, TimeSignature};
use super::constants::*;
use super::svg_builder::SvgBuilder;

pub(super) fn render_staff_lines(svg: &mut SvgBuilder, x1: f64, x2: f64, staff_y: f64) {
    for i in 0..5 {
        let y = staff_y + i as f64 * STAFF_LINE_SPACING;
        svg.line(x1, y, x2, y, STAFF_COLOR, STAFF_LINE_WIDTH);
    }
}

pub(super) fn render_barline(svg: &mut SvgBuilder, x: f64, staff_y: f64) {
    svg.line(x, staff_y, x, staff_y + STAFF_HEIGHT, BARLINE_COLOR, BARLINE_WIDTH);
}

pub(super) fn render_clef(svg: &mut SvgBuilder, x: f64, staff_y: f64, clef: Clef) {
    match clef {
        // Treble clef curls around the G line, second from the bottom.
        Clef::Treble => svg.treble_clef(x + 10.0, staff_y + 30.0),
        // Bass clef dots straddle the F line, second from the top.
        Clef::Bass => svg.bass_clef(x + 10.0, staff_y + 10.0),
    }
}

pub(super) fn render_time_signature(svg: &mut SvgBuilder, x: f64, staff_y: f64, time: TimeSignature) {
    let center_x = x + TIME_SIG_SPACE / 2.0 - 2.0;
    // Numerator fills the upper half of the staff, denominator the lower.
    let top_y = staff_y + 2.0 * STAFF_LINE_SPACING - 1.0;
    let bot_y = staff_y + 4.0 * STAFF_LINE_SPACING - 1.0;
    svg.text(center_x, top_y, &time.beats.to_string(), TIME_SIG_FONT_SIZE, "bold", NOTE_COLOR, "middle");
    svg.text(center_x, bot_y, &time.beat_type.to_string(), TIME_SIG_FONT_SIZE, "bold", NOTE_COLOR, "middle");
}

/// X where the first note may be placed once decorations are drawn.
pub(super) fn note_start_x(stave_x: f64, has_clef: bool, time: Option<TimeSignature>) -> f64 {
    let mut x = stave_x + STAVE_PADDING;
    if has_clef {
        x += CLEF_SPACE;
    }
    if time.is_some() {
        x += TIME_SIG_SPACE;
    }
    x + NOTE_PADDING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_start_moves_right_with_decorations() {
        let bare = note_start_x(0.0, false, None);
        let clef = note_start_x(0.0, true, None);
        let both = note_start_x(0.0, true, Some(TimeSignature::default()));
        assert!(bare < clef && clef < both);
        assert_eq!(both - clef, TIME_SIG_SPACE);
    }
}

//! Shared constants for the staff renderer (all in SVG user units).

// ── Staff dimensions ────────────────────────────────────────────────
pub(super) const STAFF_TOP: f64 = 40.0; // y of the top staff line
pub(super) const STAFF_LINE_SPACING: f64 = 10.0; // distance between staff lines
pub(super) const STAFF_HEIGHT: f64 = 40.0; // 5 lines, 4 spaces
pub(super) const STAVE_PADDING: f64 = 10.0; // gap before the clef

// ── Prefix widths ───────────────────────────────────────────────────
pub(super) const CLEF_SPACE: f64 = 32.0; // horizontal space for clef at stave start
pub(super) const TIME_SIG_SPACE: f64 = 24.0;
pub(super) const NOTE_PADDING: f64 = 12.0; // gap between decorations and first note

// ── Note dimensions ─────────────────────────────────────────────────
pub(super) const NOTEHEAD_RX: f64 = 6.5; // whole-note ellipse x-radius
pub(super) const NOTEHEAD_RY: f64 = 4.5; // whole-note ellipse y-radius
pub(super) const NOTEHEAD_STROKE: f64 = 2.0;
pub(super) const STAFF_LINE_WIDTH: f64 = 0.8;
pub(super) const BARLINE_WIDTH: f64 = 1.0;
pub(super) const LEDGER_LINE_WIDTH: f64 = 0.8;
pub(super) const LEDGER_LINE_EXTEND: f64 = 4.0;

// ── Accidentals ─────────────────────────────────────────────────────
pub(super) const ACCIDENTAL_GAP: f64 = 3.0; // between notehead and first column
pub(super) const ACCIDENTAL_COLUMN_WIDTH: f64 = 10.0;
pub(super) const ACCIDENTAL_FONT_SIZE: f64 = 18.0;
pub(super) const ACCIDENTAL_MIN_SEPARATION: i32 = 6; // diatonic steps

// ── Text ────────────────────────────────────────────────────────────
pub(super) const ANNOTATION_FONT_SIZE: f64 = 14.0;
pub(super) const CAPTION_FONT_SIZE: f64 = 12.0;
pub(super) const TIME_SIG_FONT_SIZE: f64 = 22.0;

// ── Colors ──────────────────────────────────────────────────────────
pub(super) const NOTE_COLOR: &str = "#1a1a1a";
pub(super) const STAFF_COLOR: &str = "#555555";
pub(super) const BARLINE_COLOR: &str = "#333333";
pub(super) const CHORD_COLOR: &str = "#4a4a9a";
pub(super) const HEADER_COLOR: &str = "#1a1a1a";

//! Staff surface: the drawing collaborator the render session paints on.
//!
//! [`StaffSurface`] is the seam between the chord translation core and a
//! drawing backend. [`SvgSurface`] is the backend shipped with the crate: it
//! keeps a single stave and produces a self-contained SVG string.

mod constants;
mod notes;
mod staff;
mod svg_builder;

use crate::model::{Clef, RenderableChord, TextAnnotation, TimeSignature};
use constants::*;
use notes::{render_annotation, render_chord};
use staff::*;
use svg_builder::SvgBuilder;

/// A drawable single-stave surface.
///
/// A render clears the surface, decorates and draws the stave, then draws
/// primitives at x positions chosen by the voice layout.
pub trait StaffSurface {
    /// Set the surface dimensions. Implies [`clear`](Self::clear).
    fn resize(&mut self, width: f64, height: f64);

    /// Remove everything drawn so far, decorations included.
    fn clear(&mut self);

    fn add_clef(&mut self, clef: Clef);

    fn add_time_signature(&mut self, time: TimeSignature);

    /// Draw staff lines and the decorations added so far.
    fn draw_stave(&mut self);

    /// First x available to notes after the stave's decorations.
    fn note_start_x(&self) -> f64;

    fn draw_chord(&mut self, x: f64, chord: &RenderableChord);

    fn draw_text_annotation(&mut self, x: f64, annotation: &TextAnnotation);

    /// Label in the top-left corner, outside the stave.
    fn draw_caption(&mut self, text: &str);
}

/// SVG backend for [`StaffSurface`].
pub struct SvgSurface {
    svg: SvgBuilder,
    width: f64,
    height: f64,
    clef: Option<Clef>,
    time: Option<TimeSignature>,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            svg: SvgBuilder::new(width, height),
            width,
            height,
            clef: None,
            time: None,
        }
    }

    /// The SVG document as currently drawn.
    pub fn to_svg(&self) -> String {
        self.svg.build()
    }
}

impl StaffSurface for SvgSurface {
    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.clear();
    }

    fn clear(&mut self) {
        self.svg.reset(self.width, self.height);
        self.clef = None;
        self.time = None;
    }

    fn add_clef(&mut self, clef: Clef) {
        self.clef = Some(clef);
    }

    fn add_time_signature(&mut self, time: TimeSignature) {
        self.time = Some(time);
    }

    fn draw_stave(&mut self) {
        // The stave spans the surface minus a pixel so the end barline shows.
        let x1 = 0.0;
        let x2 = self.width - 1.0;
        render_staff_lines(&mut self.svg, x1, x2, STAFF_TOP);
        render_barline(&mut self.svg, x1, STAFF_TOP);
        render_barline(&mut self.svg, x2, STAFF_TOP);

        if let Some(clef) = self.clef {
            render_clef(&mut self.svg, x1 + STAVE_PADDING - 5.0, STAFF_TOP, clef);
        }
        if let Some(time) = self.time {
            let time_x = x1 + STAVE_PADDING + if self.clef.is_some() { CLEF_SPACE } else { 0.0 };
            render_time_signature(&mut self.svg, time_x, STAFF_TOP, time);
        }
    }

    fn note_start_x(&self) -> f64 {
        note_start_x(0.0, self.clef.is_some(), self.time)
    }

    fn draw_chord(&mut self, x: f64, chord: &RenderableChord) {
        tracing::trace!(chord = %chord.name, x, "drawing chord");
        render_chord(&mut self.svg, x, STAFF_TOP, self.clef.unwrap_or_default(), chord);
    }

    fn draw_text_annotation(&mut self, x: f64, annotation: &TextAnnotation) {
        tracing::trace!(text = %annotation.text, x, "drawing annotation");
        render_annotation(&mut self.svg, x, STAFF_TOP, annotation);
    }

    fn draw_caption(&mut self, text: &str) {
        self.svg.caption_text(STAVE_PADDING, CAPTION_FONT_SIZE + 2.0, text);
    }
}

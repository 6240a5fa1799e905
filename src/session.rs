//! Render session: owns the staff surface and repaints it once per payload.
//!
//! Each render starts from a cleared surface and uses only the payload and
//! the config, so rendering the same payload twice gives identical output.

use crate::chord::build_chords;
use crate::config::RenderConfig;
use crate::error::ChordError;
use crate::model::Payload;
use crate::parser::parse_payload;
use crate::renderer::{StaffSurface, SvgSurface};
use crate::symbols::build_symbols;
use crate::text::beautify_accidentals;
use crate::voice::{justify, Tickable, Voice};

/// What a render drew, for the caller's information.
#[derive(Debug, Default)]
pub struct RenderReport {
    pub chords_drawn: usize,
    pub symbols_drawn: usize,
    /// Chords left out, one error each.
    pub skipped: Vec<ChordError>,
    /// The payload asked for (or collapsed to) the bare staff.
    pub empty: bool,
}

pub struct RenderSession<S: StaffSurface = SvgSurface> {
    surface: S,
    config: RenderConfig,
}

impl RenderSession<SvgSurface> {
    /// Session drawing to an SVG surface sized from `config`.
    pub fn svg(config: RenderConfig) -> Self {
        let surface = SvgSurface::new(config.width, config.height);
        Self::new(surface, config)
    }

    pub fn to_svg(&self) -> String {
        self.surface.to_svg()
    }
}

impl<S: StaffSurface> RenderSession<S> {
    pub fn new(surface: S, config: RenderConfig) -> Self {
        Self { surface, config }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Update callback: parse a JSON payload and repaint. Never fails; a
    /// payload that can't be read leaves the bare staff.
    pub fn on_update(&mut self, json: &str) -> RenderReport {
        match parse_payload(json) {
            Ok(payload) => self.render(&payload),
            Err(err) => {
                tracing::debug!(error = %err, "unreadable payload, drawing empty staff");
                self.prepare_stave(false);
                RenderReport {
                    empty: true,
                    ..RenderReport::default()
                }
            }
        }
    }

    /// Clear the surface and draw `payload` on it.
    pub fn render(&mut self, payload: &Payload) -> RenderReport {
        let key = payload.key.as_deref();
        self.prepare_stave(key.is_some());

        if self.is_empty(payload) {
            tracing::debug!("nothing to draw");
            return RenderReport {
                empty: true,
                ..RenderReport::default()
            };
        }

        if let Some(key) = key.filter(|_| self.config.show_key_caption) {
            self.surface.draw_caption(&beautify_accidentals(key));
        }

        let (chords, skipped) = build_chords(&payload.chords, self.config.wrap_policy);
        let mut report = RenderReport {
            chords_drawn: chords.len(),
            skipped,
            ..RenderReport::default()
        };

        let mut voices = Vec::with_capacity(2);
        if !chords.is_empty() {
            voices.push(Voice::default().with_tickables(chords.into_iter().map(Tickable::Chord)));
        }
        if let Some(key) = key {
            let symbols = build_symbols(key);
            report.symbols_drawn = symbols.len();
            voices.push(Voice::default().with_tickables(symbols.into_iter().map(Tickable::Text)));
        }

        if voices.is_empty() {
            return report;
        }

        let layout = justify(&voices, self.surface.note_start_x(), self.config.justify_width);
        for (voice, xs) in voices.iter().zip(&layout.positions) {
            for (tickable, &x) in voice.tickables.iter().zip(xs) {
                match tickable {
                    Tickable::Chord(chord) => self.surface.draw_chord(x, chord),
                    Tickable::Text(annotation) => self.surface.draw_text_annotation(x, annotation),
                }
            }
        }

        tracing::debug!(
            chords = report.chords_drawn,
            symbols = report.symbols_drawn,
            skipped = report.skipped.len(),
            "rendered payload"
        );
        report
    }

    /// Clear, size and decorate the stave.
    fn prepare_stave(&mut self, with_symbols: bool) {
        let width = self.config.surface_width(with_symbols);
        self.surface.resize(width, self.config.height);
        self.surface.add_clef(self.config.clef);
        if let Some(time) = self.config.time_signature {
            self.surface.add_time_signature(time);
        }
        self.surface.draw_stave();
    }

    /// An empty key, or a blank sentinel chord, means "draw nothing".
    fn is_empty(&self, payload: &Payload) -> bool {
        if payload.key.as_deref() == Some("") {
            return true;
        }
        payload
            .chords
            .iter()
            .any(|c| c.name == self.config.sentinel_chord && c.is_blank())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChordSpec, Clef, RenderableChord, TextAnnotation, TimeSignature};
    use pretty_assertions::assert_eq;

    /// Records every call so draw order and positions can be checked.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl StaffSurface for Recorder {
        fn resize(&mut self, width: f64, height: f64) {
            self.clear();
            self.calls.push(format!("resize {width}x{height}"));
        }
        fn clear(&mut self) {
            self.calls.clear();
        }
        fn add_clef(&mut self, clef: Clef) {
            self.calls.push(format!("clef {clef:?}"));
        }
        fn add_time_signature(&mut self, time: TimeSignature) {
            self.calls.push(format!("time {}/{}", time.beats, time.beat_type));
        }
        fn draw_stave(&mut self) {
            self.calls.push("stave".into());
        }
        fn note_start_x(&self) -> f64 {
            100.0
        }
        fn draw_chord(&mut self, x: f64, chord: &RenderableChord) {
            self.calls.push(format!("chord {} @{x}", chord.name));
        }
        fn draw_text_annotation(&mut self, x: f64, annotation: &TextAnnotation) {
            self.calls.push(format!("text {} @{x}", annotation.text));
        }
        fn draw_caption(&mut self, text: &str) {
            self.calls.push(format!("caption {text}"));
        }
    }

    fn session() -> RenderSession<Recorder> {
        RenderSession::new(Recorder::default(), RenderConfig::default())
    }

    fn payload(key: Option<&str>, chords: &[(&str, &str)]) -> Payload {
        Payload {
            key: key.map(str::to_string),
            chords: chords.iter().map(|(n, s)| ChordSpec::new(*n, *s)).collect(),
        }
    }

    #[test]
    fn chords_then_symbols_in_shared_columns() {
        let mut s = session();
        let report = s.render(&payload(Some("C"), &[("Major", "C,E,G,B,,,,"), ("Minor", "C,E,G,B,,b,,b")]));
        assert_eq!(report.chords_drawn, 2);
        assert_eq!(report.symbols_drawn, 8);
        assert!(!report.empty);

        let calls = &s.surface().calls;
        assert_eq!(&calls[..4], &["resize 575x150", "clef Treble", "time 4/4", "stave"]);
        assert_eq!(calls[4], "chord Major @100");
        assert_eq!(calls[5], "chord Minor @162.5");
        assert_eq!(calls[6], "text Co7 @100");
        assert_eq!(calls[7], "text Cø7 @162.5");
        assert_eq!(calls.len(), 4 + 2 + 8);
    }

    #[test]
    fn empty_key_draws_bare_staff() {
        let mut s = session();
        let report = s.render(&payload(Some(""), &[("Major", "C,E,G,B,,,,")]));
        assert!(report.empty);
        assert_eq!(report.chords_drawn, 0);
        assert_eq!(s.surface().calls, vec!["resize 575x150", "clef Treble", "time 4/4", "stave"]);
    }

    #[test]
    fn blank_sentinel_draws_bare_staff() {
        let mut s = session();
        let report = s.render(&payload(None, &[("Major", "C,E,G,B,,,,"), ("Augmented", ",,,,,,,")]));
        assert!(report.empty);
        assert_eq!(s.surface().calls.len(), 4);
    }

    #[test]
    fn blank_chord_with_another_name_is_just_skipped() {
        let mut s = session();
        let report = s.render(&payload(None, &[("Major", "C,E,G,B,,,,"), ("Other", ",,,,,,,")]));
        assert!(!report.empty);
        assert_eq!(report.chords_drawn, 1);
        assert_eq!(report.skipped.len(), 1);
    }

    #[test]
    fn bad_chord_does_not_stop_the_rest() {
        let mut s = session();
        let report = s.render(&payload(None, &[("A", "C,E,G,B,,,,"), ("B", "D,F,A,C,?,,,"), ("C", "E,G,B,D,,,,")]));
        assert_eq!(report.chords_drawn, 2);
        assert!(matches!(report.skipped[0], ChordError::InvalidAccidental { index: 0, .. }));
        let chords: Vec<&String> = s.surface().calls.iter().filter(|c| c.starts_with("chord")).collect();
        assert_eq!(chords, vec!["chord A @100", "chord C @162.5"]);
    }

    #[test]
    fn unreadable_update_collapses_to_empty_staff() {
        let mut s = session();
        s.render(&payload(None, &[("A", "C,E,G,B,,,,")]));
        let report = s.on_update("not json");
        assert!(report.empty);
        assert_eq!(s.surface().calls.len(), 4);
    }

    #[test]
    fn symbol_width_used_without_time_signature() {
        let config = RenderConfig {
            time_signature: None,
            show_key_caption: true,
            ..RenderConfig::default()
        };
        let mut s = RenderSession::new(Recorder::default(), config);
        s.render(&payload(Some("F#"), &[]));
        let calls = &s.surface().calls;
        assert_eq!(calls[0], "resize 600x150");
        assert!(!calls.iter().any(|c| c.starts_with("time")));
        assert!(calls.contains(&"caption F♯".to_string()));
        assert_eq!(calls.iter().filter(|c| c.starts_with("text")).count(), 8);
    }
}

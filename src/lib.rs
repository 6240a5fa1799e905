//! chordstaff: renders chord payloads as whole-note chords on a single staff.
//!
//! A payload names a handful of chords, each as 4 note letters plus 4
//! accidental slots. The crate assigns octaves so every chord stacks upward,
//! binds accidentals to their notes, optionally adds a row of chord-quality
//! symbols for a key, and lays everything out across one stave.
//!
//! # Example
//! ```
//! use chordstaff::{render_payload_to_svg, RenderConfig};
//!
//! let payload = r#"{"key": "Bb", "chords": {"Dominant": "B,D,F,A,b,,,b"}}"#;
//! let svg = render_payload_to_svg(payload, &RenderConfig::default());
//! assert!(svg.contains("data-chord=\"Dominant\""));
//! assert!(svg.contains("B♭M7"));
//! ```

pub mod accidental;
pub mod chord;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod pitch;
pub mod renderer;
pub mod session;
pub mod symbols;
pub mod text;
pub mod voice;

#[cfg(target_os = "android")]
pub mod android;

pub use config::RenderConfig;
pub use error::{ChordError, Result};
pub use model::*;
pub use parser::parse_payload;
pub use pitch::WrapPolicy;
pub use renderer::{StaffSurface, SvgSurface};
pub use session::{RenderReport, RenderSession};

/// Render one JSON payload to a complete SVG string.
///
/// Never fails: an unreadable payload renders as the bare staff, and chords
/// that can't be built are left out.
pub fn render_payload_to_svg(json: &str, config: &RenderConfig) -> String {
    let mut session = RenderSession::svg(config.clone());
    session.on_update(json);
    session.to_svg()
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI: iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Render a JSON payload and return SVG as a C string.
/// The caller must free the returned string with `chordstaff_free_string`.
///
/// `config` may be null for the default configuration, or a JSON
/// [`RenderConfig`]. Returns null if either string is not valid UTF-8 or the
/// config can't be read.
///
/// # Safety
/// `payload` must be a valid null-terminated C string. `config` must be null
/// or a valid null-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn chordstaff_render_json(
    payload: *const c_char,
    config: *const c_char,
) -> *mut c_char {
    if payload.is_null() {
        return std::ptr::null_mut();
    }
    let payload = match unsafe { CStr::from_ptr(payload) }.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    let config = if config.is_null() {
        RenderConfig::default()
    } else {
        let parsed = unsafe { CStr::from_ptr(config) }
            .to_str()
            .ok()
            .and_then(|s| RenderConfig::from_json(s).ok());
        match parsed {
            Some(c) => c,
            None => return std::ptr::null_mut(),
        }
    };

    let svg = render_payload_to_svg(payload, &config);
    match CString::new(svg) {
        Ok(s) => s.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Free a string previously returned by chordstaff functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a chordstaff function, or null.
#[no_mangle]
pub unsafe extern "C" fn chordstaff_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ffi_round_trip() {
        let payload = CString::new(r#"{"Major": "C,E,G,B,,,,"}"#).unwrap();
        unsafe {
            let out = chordstaff_render_json(payload.as_ptr(), std::ptr::null());
            assert!(!out.is_null());
            let svg = CStr::from_ptr(out).to_str().unwrap().to_string();
            chordstaff_free_string(out);
            assert!(svg.starts_with("<svg"));
            assert!(svg.contains(r#"data-chord="Major""#));
        }
    }

    #[test]
    fn ffi_rejects_bad_config() {
        let payload = CString::new("{}").unwrap();
        let config = CString::new(r#"{"wrap_policy": 3}"#).unwrap();
        let out = unsafe { chordstaff_render_json(payload.as_ptr(), config.as_ptr()) };
        assert!(out.is_null());
    }

    #[test]
    fn ffi_keeps_chords_next_to_a_nul_name() {
        let payload = CString::new(r#"{"Maj\u0000or": "C,E,G,B,,,,", "Minor": "A,C,E,G,,,,"}"#).unwrap();
        unsafe {
            let out = chordstaff_render_json(payload.as_ptr(), std::ptr::null());
            assert!(!out.is_null());
            let svg = CStr::from_ptr(out).to_str().unwrap().to_string();
            chordstaff_free_string(out);
            assert!(svg.contains(r#"data-chord="Major""#));
            assert!(svg.contains(r#"data-chord="Minor""#));
        }
    }

    #[test]
    fn ffi_null_payload() {
        let out = unsafe { chordstaff_render_json(std::ptr::null(), std::ptr::null()) };
        assert!(out.is_null());
    }
}

//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::jstring;
use jni::JNIEnv;

use crate::{render_payload_to_svg, RenderConfig};

/// Render a chord payload (JSON) to SVG.
///
/// Called from Kotlin as:
///   external fun render(payload: String, config: String?): String?
#[no_mangle]
pub extern "system" fn Java_com_chordstaff_app_ChordStaff_render(
    mut env: JNIEnv,
    _class: JClass,
    payload: JString,
    config: JString,
) -> jstring {
    let payload: String = match env.get_string(&payload) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    let config = if config.is_null() {
        RenderConfig::default()
    } else {
        let json: Option<String> = env.get_string(&config).ok().map(|s| s.into());
        match json.and_then(|s| RenderConfig::from_json(&s).ok()) {
            Some(c) => c,
            None => return std::ptr::null_mut(),
        }
    };

    let svg = render_payload_to_svg(&payload, &config);
    match env.new_string(&svg) {
        Ok(js) => js.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

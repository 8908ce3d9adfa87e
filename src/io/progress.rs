//! Progress reporting handed to the engine while overviews are built.
//!
//! The engine calls back with a completion fraction in `[0.0, 1.0]` and an
//! optional status message. Sinks always ask to continue: the CLI has no
//! cancellation.
use std::ffi::{CStr, CString, c_char, c_int, c_void};
use std::ptr;

/// Receiver of engine progress ticks.
pub trait ProgressSink {
    /// Handle one tick. Returning `false` asks the engine to abort.
    fn report(&mut self, fraction: f64, message: Option<&str>) -> bool;
}

/// Renders the engine's stock `0...10...20...` terminal indicator on stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct TermProgress;

impl ProgressSink for TermProgress {
    fn report(&mut self, fraction: f64, message: Option<&str>) -> bool {
        let message = message.and_then(|m| CString::new(m).ok());
        let message_ptr = message.as_ref().map_or(ptr::null(), |m| m.as_ptr());
        unsafe {
            gdal_sys::GDALTermProgress(fraction, message_ptr, ptr::null_mut());
        }
        true
    }
}

/// Swallows every tick (`--quiet`).
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl ProgressSink for SilentProgress {
    fn report(&mut self, _fraction: f64, _message: Option<&str>) -> bool {
        true
    }
}

/// `GDALProgressFunc` adapter. `arg` must point at a live `&mut dyn ProgressSink`.
pub(crate) unsafe extern "C" fn forward_progress(
    complete: f64,
    message: *const c_char,
    arg: *mut c_void,
) -> c_int {
    if arg.is_null() {
        return 1;
    }
    let sink = unsafe { &mut *(arg as *mut &mut dyn ProgressSink) };
    let message = if message.is_null() {
        None
    } else {
        unsafe { CStr::from_ptr(message) }.to_str().ok()
    };
    sink.report(complete, message.filter(|m| !m.is_empty())) as c_int
}

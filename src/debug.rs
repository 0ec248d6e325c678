//! Driver error-queue checks for development builds.

use crate::error::GlError;
use crate::gpu::Gpu;

// a lost context can report the same error forever
const MAX_DRAINED: usize = 32;

pub fn gl_error_name(code: u32) -> &'static str {
    match code {
        glow::NO_ERROR => "NO_ERROR",
        glow::INVALID_ENUM => "INVALID_ENUM",
        glow::INVALID_VALUE => "INVALID_VALUE",
        glow::INVALID_OPERATION => "INVALID_OPERATION",
        glow::INVALID_FRAMEBUFFER_OPERATION => "INVALID_FRAMEBUFFER_OPERATION",
        glow::OUT_OF_MEMORY => "OUT_OF_MEMORY",
        glow::STACK_UNDERFLOW => "STACK_UNDERFLOW",
        glow::STACK_OVERFLOW => "STACK_OVERFLOW",
        _ => "UNKNOWN",
    }
}

fn drain<G: Gpu>(gl: &G) -> Vec<u32> {
    let mut codes = Vec::new();
    while codes.len() < MAX_DRAINED {
        match gl.get_error() {
            glow::NO_ERROR => break,
            code => codes.push(code),
        }
    }
    codes
}

/// Discard whatever earlier calls left in the queue.
pub fn clear_errors<G: Gpu>(gl: &G) {
    let stale = drain(gl);
    if !stale.is_empty() {
        log::debug!("discarded {} stale OpenGL error(s)", stale.len());
    }
}

pub fn check_errors<G: Gpu>(
    gl: &G,
    call: &'static str,
    file: &'static str,
    line: u32,
) -> Result<(), GlError> {
    let codes = drain(gl);
    if codes.is_empty() {
        Ok(())
    } else {
        Err(GlError {
            codes,
            call,
            file,
            line,
        })
    }
}

/// Stops a debug build at the failing call; release builds log and go on.
pub fn debug_break(err: &GlError) {
    log::error!("{err}");
    if cfg!(debug_assertions) {
        panic!("{err}");
    }
}

/// Evaluate a GPU call with the error queue checked on both sides.
#[macro_export]
macro_rules! gl_call {
    ($gl:expr, $call:expr) => {{
        $crate::debug::clear_errors($gl);
        let result = $call;
        if let Err(err) =
            $crate::debug::check_errors($gl, stringify!($call), file!(), line!())
        {
            $crate::debug::debug_break(&err);
        }
        result
    }};
}

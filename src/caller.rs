//! Names the function that called a public logging method, by walking the stack.
//!
//! The chain from user code down to the inspection point is fixed:
//!
//! ```text
//! user code -> Logger::info (or any public method) -> Logger::write_line -> caller::resolve
//! ```
//!
//! so the caller sits exactly [`CALLER_DEPTH`] logical frames above `resolve`.
//! Every function on that chain is `#[inline(never)]`; inlined symbols still
//! count as their own logical frames, as long as debug info is available.
//!
//! In optimized builds a direct method call in tail position loses its frame:
//!
//! ```text
//! fn serve(log: &Logger) {
//!     log.info(&[&"ready"]);   // compiled as a jump, `serve` is gone
//! }
//! ```
//!
//! and the column then names whoever called `serve`. The logging macros
//! (`info!`, `warnf!`, ...) place a barrier after the call so it is never the
//! last thing the function does; prefer them over the bare methods.

use regex::Regex;
use std::sync::LazyLock;

/// Returned whenever the frame cannot be found or has no symbol.
pub const UNKNOWN_CALLER: &str = "unknown caller";

/// Frames between [`resolve`] and the original caller of the public API.
pub const CALLER_DEPTH: usize = 3;

/// Symbol name of [`resolve`] itself, used to anchor the depth count.
const ANCHOR: &str = concat!(module_path!(), "::resolve");

/// Upper bound on the frames walked before giving up on finding the anchor.
const MAX_FRAMES: usize = 128;

/// `<Type as Trait>::method...`: shortened to the receiver-and-method suffix.
/// Plain paths like `app::Server::start` do not match and pass through.
static RECEIVER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<.*>::\w*.*?").expect("Invalid receiver regex"));

/// Identity of the function [`CALLER_DEPTH`] frames above this one.
#[inline(never)]
#[must_use]
pub fn resolve() -> String {
    let name = resolve_at(CALLER_DEPTH);
    // Keeps `resolve_at` from being tail-called, which would drop the anchor frame.
    std::hint::black_box(());
    name
}

/// Walks the stack and returns the name `depth` logical frames above the anchor.
fn resolve_at(depth: usize) -> String {
    let mut anchor: Option<usize> = None;
    let mut names: Vec<Option<String>> = Vec::new();

    backtrace::trace(|frame| {
        let mut symbols = 0;
        backtrace::resolve_frame(frame, |symbol| {
            symbols += 1;
            let name = symbol.name().map(|name| format!("{name:#}"));
            if anchor.is_none() && name.as_deref() == Some(ANCHOR) {
                anchor = Some(names.len());
            }
            names.push(name);
        });
        if symbols == 0 {
            names.push(None);
        }

        match anchor {
            Some(at) => names.len() <= at.saturating_add(depth),
            None => names.len() < MAX_FRAMES,
        }
    });

    anchor
        .and_then(|at| names.get(at.saturating_add(depth)).cloned().flatten())
        .map_or_else(|| UNKNOWN_CALLER.to_string(), |name| shorten(&name))
}

/// Keeps the `<Receiver as Trait>::method` part of a qualified name when there is one.
#[must_use]
pub fn shorten(name: &str) -> String {
    RECEIVER_PATTERN
        .find(name)
        .map_or_else(|| name.to_string(), |m| m.as_str().to_string())
}

//! Stack safety for deep recursion.
//!
//! Statement and expression evaluation recurse once per nesting level and
//! once per user-function call, so the host stack has to grow on demand for
//! the scope depth limit to be the only limit.

/// Ensure sufficient stack space is available before executing `f`.
///
/// On native targets, uses `stacker` to grow the stack if needed.
/// On WASM targets, just calls the closure directly.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Minimum stack space to keep available (100KB red zone).
    const RED_ZONE: usize = 100 * 1024;

    /// Stack space to allocate when growing (1MB).
    const STACK_PER_RECURSION: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

//! Call-frame tracking for backtraces.
//!
//! Every user-function call pushes its name on the `CallStack`; when an error
//! leaves a call, the stack is snapshotted into an `EvalBacktrace` stored on
//! the error.

use tern_ir::{Name, StringInterner};
use tern_value::{BacktraceFrame, EvalBacktrace, EvalError};

/// Frames kept in a captured backtrace; deeper frames are dropped.
const MAX_BACKTRACE_FRAMES: usize = 64;

/// Live stack of user-function calls.
#[derive(Clone, Debug, Default)]
pub struct CallStack {
    frames: Vec<Name>,
}

impl CallStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: Name) {
        self.frames.push(name);
    }

    pub fn pop(&mut self) {
        debug_assert!(
            !self.frames.is_empty(),
            "CallStack::pop() called on empty stack"
        );
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Snapshot of the most recent frames, most recent call first.
    pub fn capture(&self, interner: &StringInterner) -> EvalBacktrace {
        let frames = self
            .frames
            .iter()
            .rev()
            .take(MAX_BACKTRACE_FRAMES)
            .map(|&name| BacktraceFrame {
                name: interner.lookup(name).to_string(),
            })
            .collect();
        EvalBacktrace::new(frames)
    }

    /// Attach a backtrace to `err` unless the stack is empty or the error
    /// already carries one from a deeper call.
    pub fn attach_backtrace(&self, err: EvalError, interner: &StringInterner) -> EvalError {
        if self.frames.is_empty() || err.backtrace.is_some() {
            return err;
        }
        err.with_backtrace(self.capture(interner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tern_value::errors::division_by_zero;

    #[test]
    fn test_capture_orders_most_recent_first() {
        let mut interner = StringInterner::new();
        let outer = interner.intern("outer");
        let inner = interner.intern("inner");
        let mut stack = CallStack::new();
        stack.push(outer);
        stack.push(inner);

        let names: Vec<_> = stack
            .capture(&interner)
            .frames()
            .iter()
            .map(|f| f.name.clone())
            .collect();
        assert_eq!(names, vec!["inner".to_string(), "outer".to_string()]);
    }

    #[test]
    fn test_capture_is_bounded() {
        let mut interner = StringInterner::new();
        let f = interner.intern("f");
        let mut stack = CallStack::new();
        for _ in 0..1000 {
            stack.push(f);
        }
        assert_eq!(stack.capture(&interner).len(), MAX_BACKTRACE_FRAMES);
    }

    #[test]
    fn test_empty_stack_attaches_nothing() {
        let interner = StringInterner::new();
        let err = CallStack::new().attach_backtrace(division_by_zero(), &interner);
        assert_eq!(err.backtrace, None);
    }

    #[test]
    fn test_pop_restores_depth() {
        let mut interner = StringInterner::new();
        let f = interner.intern("f");
        let mut stack = CallStack::new();
        stack.push(f);
        assert_eq!(stack.depth(), 1);
        stack.pop();
        assert!(stack.is_empty());
    }
}

//! Variable storage: an arena of slots plus a bounded stack of scopes.
//!
//! A scope maps names to [`SlotId`]s. Several scopes may map a name to the
//! same slot; that is how a call sees (and mutates) global bindings. Slots
//! are owned by the scope that allocated them and are released when that
//! scope is popped.
//!
//! Name resolution looks at the current scope only. There is no chain of
//! enclosing scopes: a call scope starts from a snapshot of the global
//! bindings and never sees another call's locals.

use rustc_hash::FxHashMap;
use tracing::trace;

use tern_ir::Name;
use tern_value::errors::recursion_limit_exceeded;
use tern_value::{EvalResult, Value};

/// Default bound on the number of live scopes (global included).
pub const DEFAULT_MAX_DEPTH: usize = 20_000;

/// Index of a storage cell in the slot arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SlotId(usize);

#[derive(Default)]
struct Scope {
    bindings: FxHashMap<Name, SlotId>,
    /// Slots this scope allocated; released on pop.
    owned: Vec<SlotId>,
}

/// Scope store used by the interpreter.
pub struct Environment {
    slots: Vec<Value>,
    free: Vec<SlotId>,
    /// Never empty: index 0 is the global scope.
    scopes: Vec<Scope>,
    max_depth: usize,
}

impl Environment {
    /// Environment with only the global scope and the default depth bound.
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Environment {
            slots: Vec::new(),
            free: Vec::new(),
            scopes: vec![Scope::default()],
            max_depth: max_depth.max(1),
        }
    }

    /// Number of live scopes, the global scope included.
    #[inline]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Whether the current scope is the global one.
    #[inline]
    pub fn is_global(&self) -> bool {
        self.scopes.len() == 1
    }

    fn current(&self) -> &Scope {
        let last = self.scopes.len() - 1;
        &self.scopes[last]
    }

    fn current_mut(&mut self) -> &mut Scope {
        let last = self.scopes.len() - 1;
        &mut self.scopes[last]
    }

    /// Slot bound to `name` in the current scope.
    #[inline]
    pub fn binding_slot(&self, name: Name) -> Option<SlotId> {
        self.current().bindings.get(&name).copied()
    }

    /// Read `name` in the current scope.
    pub fn lookup(&self, name: Name) -> Option<&Value> {
        self.binding_slot(name).map(|SlotId(i)| &self.slots[i])
    }

    /// Mutable access to the value bound to `name` in the current scope.
    pub fn slot_mut(&mut self, name: Name) -> Option<&mut Value> {
        let SlotId(i) = self.binding_slot(name)?;
        Some(&mut self.slots[i])
    }

    /// Bind `name` in the current scope.
    ///
    /// An existing binding is overwritten in place, so every scope aliasing
    /// that slot observes the new value. Otherwise a fresh slot owned by the
    /// current scope is allocated.
    pub fn assign(&mut self, name: Name, value: Value) {
        if let Some(SlotId(i)) = self.binding_slot(name) {
            self.slots[i] = value;
            return;
        }
        let slot = self.alloc(value);
        let scope = self.current_mut();
        scope.bindings.insert(name, slot);
        scope.owned.push(slot);
    }

    /// Push the scope for a function call.
    ///
    /// The scope starts with every global binding (same slots), then each
    /// argument gets a fresh slot, replacing the global alias of that name.
    pub fn push_call_scope<I>(&mut self, args: I) -> EvalResult<()>
    where
        I: IntoIterator<Item = (Name, Value)>,
    {
        if self.scopes.len() >= self.max_depth {
            return Err(recursion_limit_exceeded(self.max_depth));
        }
        let mut scope = Scope {
            bindings: self.scopes[0].bindings.clone(),
            owned: Vec::new(),
        };
        for (name, value) in args {
            let slot = self.alloc(value);
            scope.bindings.insert(name, slot);
            scope.owned.push(slot);
        }
        self.scopes.push(scope);
        trace!(depth = self.scopes.len(), "push call scope");
        Ok(())
    }

    /// Pop the current scope and release its slots. The global scope is
    /// never popped.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() <= 1 {
            return;
        }
        if let Some(scope) = self.scopes.pop() {
            for slot in scope.owned {
                self.slots[slot.0] = Value::None;
                self.free.push(slot);
            }
        }
    }

    /// Number of slots currently holding a binding.
    pub fn live_slots(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    fn alloc(&mut self, value: Value) -> SlotId {
        if let Some(slot) = self.free.pop() {
            self.slots[slot.0] = value;
            slot
        } else {
            self.slots.push(value);
            SlotId(self.slots.len() - 1)
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#![forbid(unsafe_code)]

//! Post-measurement effects with explicit cancellation.
//!
//! Some overlay work can only happen after the host has measured a node
//! (for example writing a transform origin that depends on the node's
//! size). That work runs outside the declarative render output, so it must
//! not outlive the component that scheduled it.
//!
//! An [`EffectScope`] is owned by a mounted component. It hands out
//! [`EffectToken`]s to whoever will call back later (a positioning engine,
//! a layout pass). When the scope is unmounted or dropped, every token goes
//! dead.
//!
//! # Invariants
//!
//! 1. A dead token never runs its effect.
//! 2. Unmounting is idempotent; a scope never remounts.
//! 3. Everything is single-threaded (`Rc`/`Cell`); effects run on the UI loop.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Owner side of a set of post-measurement effects.
pub struct EffectScope {
    unmounted: Rc<Cell<bool>>,
}

impl EffectScope {
    /// Create a mounted scope.
    #[must_use]
    pub fn new() -> Self {
        Self {
            unmounted: Rc::new(Cell::new(false)),
        }
    }

    /// Hand out a token for a deferred callback.
    #[must_use]
    pub fn token(&self) -> EffectToken {
        EffectToken {
            unmounted: Rc::clone(&self.unmounted),
        }
    }

    /// Check whether the scope is still mounted.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        !self.unmounted.get()
    }

    /// Unmount: kill all tokens. Idempotent.
    pub fn unmount(&self) {
        if self.unmounted.replace(true) {
            return;
        }
        tracing::trace!(tokens = Rc::strong_count(&self.unmounted) - 1, "effect scope unmounted");
    }
}

impl Default for EffectScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EffectScope {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl fmt::Debug for EffectScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EffectScope")
            .field("mounted", &self.is_mounted())
            .finish()
    }
}

/// Callback side of an [`EffectScope`].
#[derive(Clone)]
pub struct EffectToken {
    unmounted: Rc<Cell<bool>>,
}

impl EffectToken {
    /// Check whether the owning scope is still mounted.
    #[must_use]
    pub fn is_live(&self) -> bool {
        !self.unmounted.get()
    }

    /// Run `effect` if the owning scope is still mounted.
    ///
    /// Returns `None` without calling `effect` once the scope is unmounted.
    pub fn run<R>(&self, effect: impl FnOnce() -> R) -> Option<R> {
        if !self.is_live() {
            tracing::trace!("skipping effect for unmounted scope");
            return None;
        }
        Some(effect())
    }
}

impl fmt::Debug for EffectToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EffectToken")
            .field("live", &self.is_live())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_runs_while_mounted() {
        let scope = EffectScope::new();
        let token = scope.token();
        assert!(scope.is_mounted());
        assert_eq!(token.run(|| 7), Some(7));
    }

    #[test]
    fn token_is_dead_after_unmount() {
        let scope = EffectScope::new();
        let token = scope.token();
        scope.unmount();
        let mut called = false;
        assert_eq!(token.run(|| called = true), None);
        assert!(!called);
        assert!(!token.is_live());
    }

    #[test]
    fn token_is_dead_after_drop() {
        let token = {
            let scope = EffectScope::new();
            scope.token()
        };
        assert!(!token.is_live());
        assert!(token.run(|| ()).is_none());
    }

    #[test]
    fn unmount_is_idempotent() {
        let scope = EffectScope::new();
        let token = scope.token();
        scope.unmount();
        scope.unmount();
        assert!(!scope.is_mounted());
        assert!(!token.clone().is_live());
    }
}

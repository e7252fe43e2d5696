//! Session-scoped "current project" pointer.
//!
//! One `SessionState` lives on each server instance and is cloned into every
//! tool call. The cell is a plain last-writer-wins register: two concurrent
//! switches race and whichever commits last is kept. The lock is only held
//! for the read or the write itself, never across a network call.

use std::sync::{Arc, PoisonError, RwLock};

/// Shared handle to the current project name.
#[derive(Debug, Clone)]
pub struct SessionState {
    current: Arc<RwLock<String>>,
}

impl SessionState {
    /// Creates a session whose current project is `initial`.
    #[must_use]
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            current: Arc::new(RwLock::new(initial.into())),
        }
    }

    /// Returns the current project name.
    #[must_use]
    pub fn current_project(&self) -> String {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Overwrites the current project. Callers validate the name first.
    pub fn set_current_project(&self, name: impl Into<String>) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = name.into();
    }

    /// Overwrites the current project only if `matches` accepts the value
    /// held at the time of the write. Returns the replaced name on success.
    pub fn replace_if(
        &self,
        matches: impl FnOnce(&str) -> bool,
        name: impl Into<String>,
    ) -> Option<String> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if matches(&guard) {
            Some(std::mem::replace(&mut *guard, name.into()))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let session = SessionState::new("main");
        assert_eq!(session.current_project(), "main");

        session.set_current_project("research");
        assert_eq!(session.current_project(), "research");
    }

    #[test]
    fn test_replace_if() {
        let session = SessionState::new("alpha");
        assert_eq!(session.replace_if(|c| c == "beta", "main"), None);
        assert_eq!(session.current_project(), "alpha");

        assert_eq!(session.replace_if(|c| c == "alpha", "main").as_deref(), Some("alpha"));
        assert_eq!(session.current_project(), "main");
    }

    #[test]
    fn test_clones_share_the_cell() {
        let session = SessionState::new("alpha");
        let other = session.clone();
        other.set_current_project("beta");
        assert_eq!(session.current_project(), "beta");
    }
}

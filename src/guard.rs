use crate::error::{Error, Result};

/// Fail-fast check against structural changes made behind a cursor's back.
///
/// A structure that wants this keeps a version counter bumped on every
/// structural mutation. Its cursor arms a guard with the counter at creation
/// and calls [`ModificationGuard::check`] before each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModificationGuard {
    expected: u64,
}

impl ModificationGuard {
    /// Arms the guard with the structure's version at cursor creation.
    pub fn new(version: u64) -> ModificationGuard {
        ModificationGuard { expected: version }
    }

    pub fn expected(&self) -> u64 {
        self.expected
    }

    /// Fails with [`Error::ConcurrentModification`] when `current` differs
    /// from the armed version.
    pub fn check(&self, current: u64) -> Result<()> {
        if current != self.expected {
            tracing::debug!(
                expected = self.expected,
                found = current,
                "concurrent modification detected"
            );
            return Err(Error::ConcurrentModification {
                expected: self.expected,
                found: current,
            });
        }
        Ok(())
    }

    /// Accepts `current` as the new baseline, after the cursor itself
    /// mutated the structure.
    pub fn sync(&mut self, current: u64) {
        self.expected = current;
    }
}

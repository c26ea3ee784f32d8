//! The single live configuration.

use std::sync::Arc;

use parking_lot::RwLock;

use super::edit::EditProcessor;
use crate::domain::{Configuration, EditOperation, ValidationError};

/// Holds the committed configuration and serializes edits against it.
///
/// Commits are atomic: the edit is applied to a private draft while the
/// write lock is held, and the draft replaces the current snapshot only if
/// every check passed. Readers hold an `Arc` to a complete version and
/// never observe a partially applied edit.
pub struct ConfigurationStore {
    current: RwLock<Arc<Configuration>>,
}

impl ConfigurationStore {
    #[must_use]
    pub fn new(initial: Configuration) -> Self {
        Self {
            current: RwLock::new(Arc::new(initial)),
        }
    }

    /// Latest committed configuration.
    #[must_use]
    pub fn current(&self) -> Arc<Configuration> {
        Arc::clone(&self.current.read())
    }

    /// Version of the latest committed configuration.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.current.read().version()
    }

    /// Validate and commit `op`, advancing the version by exactly one.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] from [`EditProcessor::apply`]; the
    /// current configuration is left untouched.
    pub fn apply(&self, op: &EditOperation) -> Result<Arc<Configuration>, ValidationError> {
        let mut current = self.current.write();
        let next = Arc::new(EditProcessor::apply(&current, op)?);
        *current = Arc::clone(&next);
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Day, DemandVector, StaffMember};
    use rust_decimal_macros::dec;
    use std::thread;

    fn store() -> ConfigurationStore {
        ConfigurationStore::new(
            Configuration::try_new(
                vec![StaffMember::try_new("A", dec!(10)).unwrap()],
                DemandVector::default(),
            )
            .unwrap(),
        )
    }

    #[test]
    fn failed_edit_leaves_version_unchanged() {
        let store = store();
        let before = store.current();
        let result = store.apply(&EditOperation::SetStaffCost {
            staff_id: "A".into(),
            cost: dec!(-1),
        });
        assert!(result.is_err());
        assert_eq!(store.version(), before.version());
        assert_eq!(*store.current(), *before);
    }

    #[test]
    fn readers_keep_their_snapshot_across_commits() {
        let store = store();
        let held = store.current();
        store
            .apply(&EditOperation::SetDayDemand {
                day: Day::Mon,
                value: 2,
            })
            .unwrap();
        assert_eq!(held.demand().get(Day::Mon), 0);
        assert_eq!(store.current().demand().get(Day::Mon), 2);
    }

    #[test]
    fn concurrent_edits_each_advance_version_once() {
        let store = Arc::new(store());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..25 {
                        store
                            .apply(&EditOperation::AdjustDayDemand {
                                day: Day::Tue,
                                delta: 1,
                            })
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let current = store.current();
        assert_eq!(current.version(), 1 + 200);
        assert_eq!(current.demand().get(Day::Tue), 200);
    }
}

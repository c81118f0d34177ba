//! Identifier generation for new messages and suggestions.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::conversations::core::ids::default_uuid;

/// Supplies a fresh, unique identifier on demand.
pub trait IdGenerator: Send + Sync {
    /// Next identifier. Never repeats for the lifetime of the generator.
    fn next_uuid(&self) -> Uuid;
}

/// Random (or, with `uuid_v7`, time-ordered) UUIDs.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_uuid(&self) -> Uuid {
        default_uuid()
    }
}

/// Counter-backed UUIDs (`00000000-...-0001`, `...-0002`, ...).
///
/// Deterministic, so fixtures and assertions can name ids up front.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    /// Start counting after `last`; the first id handed out is `last + 1`.
    #[must_use]
    pub const fn starting_after(last: u64) -> Self {
        Self {
            next: AtomicU64::new(last),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_uuid(&self) -> Uuid {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        Uuid::from_u128(u128::from(n))
    }
}

use std::sync::{Arc, PoisonError, RwLock};

use super::types::InvestmentInput;

/// Single slot holding the most recently submitted input.
///
/// Writers swap in a whole new value; readers copy out a snapshot, so a read
/// never observes a half-written input.
#[derive(Debug, Default)]
pub struct InputStore {
    slot: RwLock<Option<Arc<InvestmentInput>>>,
}

impl InputStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, input: InvestmentInput) {
        let next = Arc::new(input);
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(next);
    }

    pub fn get(&self) -> Option<InvestmentInput> {
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        slot.as_deref().copied()
    }

    pub fn clear(&self) {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        *slot = None;
    }

    pub fn is_empty(&self) -> bool {
        self.get().is_none()
    }
}

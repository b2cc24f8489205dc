//! Keyboard ownership shared between the inputs of one card.
//!
//! Only one input may consume key presses at a time. The owner is an explicit
//! value held by the parent and handed to every input, which cancels its own
//! editing session once it sees that it no longer owns the keyboard.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardOwner(Option<ControlId>);

impl KeyboardOwner {
    pub fn none() -> Self {
        Self(None)
    }

    /// Hand the keyboard to `id`, taking it from any previous owner.
    pub fn claim(self, id: ControlId) -> Self {
        Self(Some(id))
    }

    /// Give the keyboard up, if `id` still holds it.
    pub fn release(self, id: ControlId) -> Self {
        if self.is_owned_by(id) {
            Self(None)
        } else {
            self
        }
    }

    pub fn is_owned_by(&self, id: ControlId) -> bool {
        self.0 == Some(id)
    }

    pub fn owner(&self) -> Option<ControlId> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_moves_ownership() {
        let owner = KeyboardOwner::none().claim(ControlId(0)).claim(ControlId(2));
        assert!(owner.is_owned_by(ControlId(2)));
        assert!(!owner.is_owned_by(ControlId(0)));
    }

    #[test]
    fn release_by_non_owner_is_ignored() {
        let owner = KeyboardOwner::none().claim(ControlId(1));
        assert_eq!(owner.release(ControlId(0)), owner);
        assert_eq!(owner.release(ControlId(1)).owner(), None);
    }
}

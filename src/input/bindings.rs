//! Physical key to [`Action`] mapping.

use std::collections::HashMap;

use winit::keyboard::KeyCode;

use super::Action;

/// Maps physical key positions to movement actions.
///
/// Bindings use physical codes, so the default layout sits on the same keys
/// on QWERTY (W/A/S/D, Q/E) and AZERTY (Z/Q/S/D, A/E) keyboards.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyBindings {
    map: HashMap<KeyCode, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings
            .bind(KeyCode::KeyW, Action::MoveForward)
            .bind(KeyCode::KeyS, Action::MoveBackward)
            .bind(KeyCode::KeyA, Action::StrafeLeft)
            .bind(KeyCode::KeyD, Action::StrafeRight)
            .bind(KeyCode::KeyE, Action::MoveUp)
            .bind(KeyCode::Space, Action::MoveUp)
            .bind(KeyCode::KeyQ, Action::MoveDown);
        bindings
    }
}

impl KeyBindings {
    pub fn empty() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Binds `key` to `action`, replacing any previous binding of that key.
    pub fn bind(&mut self, key: KeyCode, action: Action) -> &mut Self {
        if let Some(previous) = self.map.insert(key, action) {
            log::debug!("Rebinding {:?}: {:?} -> {:?}", key, previous, action);
        }
        self
    }

    pub fn unbind(&mut self, key: KeyCode) -> Option<Action> {
        self.map.remove(&key)
    }

    pub fn action_for(&self, key: KeyCode) -> Option<Action> {
        self.map.get(&key).copied()
    }

    /// All keys currently bound to `action`.
    pub fn keys_for(&self, action: Action) -> impl Iterator<Item = KeyCode> + '_ {
        self.map
            .iter()
            .filter(move |(_, a)| **a == action)
            .map(|(k, _)| *k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let b = KeyBindings::default();
        assert_eq!(b.action_for(KeyCode::KeyW), Some(Action::MoveForward));
        assert_eq!(b.action_for(KeyCode::KeyA), Some(Action::StrafeLeft));
        assert_eq!(b.action_for(KeyCode::Space), Some(Action::MoveUp));
        assert_eq!(b.action_for(KeyCode::KeyQ), Some(Action::MoveDown));
        assert_eq!(b.action_for(KeyCode::Escape), None);
        assert_eq!(b.keys_for(Action::MoveUp).count(), 2);
    }

    #[test]
    fn test_rebind_and_unbind() {
        let mut b = KeyBindings::empty();
        b.bind(KeyCode::ArrowUp, Action::MoveForward);
        b.bind(KeyCode::ArrowUp, Action::MoveUp);
        assert_eq!(b.action_for(KeyCode::ArrowUp), Some(Action::MoveUp));

        assert_eq!(b.unbind(KeyCode::ArrowUp), Some(Action::MoveUp));
        assert_eq!(b.action_for(KeyCode::ArrowUp), None);
    }
}

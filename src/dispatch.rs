//! Dispatch: narrow each entity with the guards and run its behavior.

use crate::entity::{Entity, Staff};
use crate::guard;
use crate::report::Entry;

/// Text reported for entities whose tag is not listed.
pub const DEFAULT_UNKNOWN_MESSAGE: &str = "Not listed!!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatcher {
    unknown_message: String,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(DEFAULT_UNKNOWN_MESSAGE)
    }
}

impl Dispatcher {
    pub fn new(unknown_message: impl Into<String>) -> Self {
        Self {
            unknown_message: unknown_message.into(),
        }
    }

    /// Description line for `entity`. Never fails: unlisted entities get the
    /// configured unknown message.
    pub fn describe(&self, entity: &Entity) -> String {
        if let Some(device) = guard::as_device(entity) {
            return device.describe();
        }
        if let Some(employee) = guard::as_employee(entity) {
            return employee.describe();
        }
        if let Some(manager) = guard::as_manager(entity) {
            return manager.describe();
        }
        self.unknown_message.clone()
    }

    /// Output of the entity's capabilities, in order: every device connects,
    /// keyboards then light up, audio devices show what toggling mute does,
    /// managers manage. Employees and unknown entities have none.
    ///
    /// The mute toggle runs on a copy; registry entities are never mutated.
    pub fn capabilities(&self, entity: &Entity) -> Vec<String> {
        let mut out = Vec::new();

        if guard::is_device(entity) {
            if let Some(device) = guard::as_device(entity) {
                out.push(device.connect());
            }
            if let Some(keyboard) = guard::as_keyboard(entity) {
                out.push(keyboard.light());
            }
            if let Some(audio) = guard::as_audio(entity) {
                out.push(audio.clone().toggle_mute());
            }
        }
        if let Some(manager) = guard::as_manager(entity) {
            out.push(manager.manage());
        }

        out
    }

    /// Full dispatch of the entity at registry position `index`.
    pub fn dispatch(&self, index: usize, entity: &Entity) -> Entry {
        Entry {
            index,
            kind: guard::classify(entity),
            tag: entity.tag().to_string(),
            label: entity.label().to_string(),
            description: self.describe(entity),
            capabilities: self.capabilities(entity),
        }
    }
}

//! Type guards: predicates that narrow an [`Entity`] to one concrete variant.
//!
//! Guards are pure and total. For any entity exactly one of the `is_*`
//! predicates in [`GUARDS`] holds; entities with an unlisted tag satisfy only
//! [`is_unknown`].

use crate::entity::{
    AudioDevice, Device, Employee, Entity, ExternalStorageDevice, KeyboardDevice, Kind, Manager,
    StorageDevice, UnknownEntity,
};

pub type Guard = fn(&Entity) -> bool;

/// Guards in the order dispatch tries them. The unknown guard is last.
pub const GUARDS: [(Kind, Guard); 7] = [
    (Kind::Keyboard, is_keyboard as Guard),
    (Kind::Storage, is_storage as Guard),
    (Kind::ExternalStorage, is_external_storage as Guard),
    (Kind::Audio, is_audio as Guard),
    (Kind::Employee, is_employee as Guard),
    (Kind::Manager, is_manager as Guard),
    (Kind::Unknown, is_unknown as Guard),
];

pub fn is_keyboard(entity: &Entity) -> bool {
    as_keyboard(entity).is_some()
}

/// Plain storage only; external storage has its own guard.
pub fn is_storage(entity: &Entity) -> bool {
    as_storage(entity).is_some()
}

pub fn is_external_storage(entity: &Entity) -> bool {
    as_external_storage(entity).is_some()
}

pub fn is_audio(entity: &Entity) -> bool {
    as_audio(entity).is_some()
}

pub fn is_employee(entity: &Entity) -> bool {
    as_employee(entity).is_some()
}

pub fn is_manager(entity: &Entity) -> bool {
    as_manager(entity).is_some()
}

pub fn is_unknown(entity: &Entity) -> bool {
    as_unknown(entity).is_some()
}

/// True for any device kind.
pub fn is_device(entity: &Entity) -> bool {
    as_device(entity).is_some()
}

pub fn as_keyboard(entity: &Entity) -> Option<&KeyboardDevice> {
    match entity {
        Entity::Keyboard(d) => Some(d),
        _ => None,
    }
}

pub fn as_storage(entity: &Entity) -> Option<&StorageDevice> {
    match entity {
        Entity::Storage(d) => Some(d),
        _ => None,
    }
}

pub fn as_external_storage(entity: &Entity) -> Option<&ExternalStorageDevice> {
    match entity {
        Entity::ExternalStorage(d) => Some(d),
        _ => None,
    }
}

pub fn as_audio(entity: &Entity) -> Option<&AudioDevice> {
    match entity {
        Entity::Audio(d) => Some(d),
        _ => None,
    }
}

pub fn as_employee(entity: &Entity) -> Option<&Employee> {
    match entity {
        Entity::Employee(e) => Some(e.as_ref()),
        _ => None,
    }
}

pub fn as_manager(entity: &Entity) -> Option<&Manager> {
    match entity {
        Entity::Manager(m) => Some(m),
        _ => None,
    }
}

pub fn as_unknown(entity: &Entity) -> Option<&UnknownEntity> {
    match entity {
        Entity::Unknown(u) => Some(u),
        _ => None,
    }
}

/// Narrow to the shared device capability set.
pub fn as_device(entity: &Entity) -> Option<&dyn Device> {
    match entity {
        Entity::Keyboard(d) => Some(d),
        Entity::Storage(d) => Some(d),
        Entity::ExternalStorage(d) => Some(d),
        Entity::Audio(d) => Some(d),
        Entity::Employee(_) | Entity::Manager(_) | Entity::Unknown(_) => None,
    }
}

/// The kind of the first guard that accepts `entity`.
pub fn classify(entity: &Entity) -> Kind {
    GUARDS
        .iter()
        .find(|(_, guard)| guard(entity))
        .map(|(kind, _)| *kind)
        .unwrap_or(Kind::Unknown)
}

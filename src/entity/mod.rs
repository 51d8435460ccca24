//! Entity model: the tagged union held by the registry.

pub mod device;
pub mod kind;
pub mod staff;

pub use device::{
    AudioDevice, Device, ExternalStorageDevice, KeyboardDevice, KeyboardLayout, StorageDevice,
    StorageType,
};
pub use kind::Kind;
pub use staff::{Employee, Manager, Staff};

use serde_json::{Map, Value};
use std::rc::Rc;

/// A registry entry. The variant is the discriminant; an entity cannot exist
/// without one.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Keyboard(KeyboardDevice),
    Storage(StorageDevice),
    ExternalStorage(ExternalStorageDevice),
    Audio(AudioDevice),
    Employee(Rc<Employee>),
    Manager(Manager),
    Unknown(UnknownEntity),
}

/// An entity whose tag is not listed. Attributes are kept untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownEntity {
    pub tag: String,
    pub attributes: Map<String, Value>,
}

impl UnknownEntity {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Map::new(),
        }
    }
}

impl Entity {
    /// The discriminant as written: the kind name for listed entities, the
    /// raw tag for unknown ones.
    pub fn tag(&self) -> &str {
        match self {
            Entity::Keyboard(_) => Kind::Keyboard.as_str(),
            Entity::Storage(_) => Kind::Storage.as_str(),
            Entity::ExternalStorage(_) => Kind::ExternalStorage.as_str(),
            Entity::Audio(_) => Kind::Audio.as_str(),
            Entity::Employee(_) => Kind::Employee.as_str(),
            Entity::Manager(_) => Kind::Manager.as_str(),
            Entity::Unknown(u) => &u.tag,
        }
    }

    /// Short identifying text: device id, staff name, or the raw tag.
    pub fn label(&self) -> &str {
        match self {
            Entity::Keyboard(d) => d.id(),
            Entity::Storage(d) => d.id(),
            Entity::ExternalStorage(d) => d.id(),
            Entity::Audio(d) => d.id(),
            Entity::Employee(e) => e.name(),
            Entity::Manager(m) => m.name(),
            Entity::Unknown(u) => &u.tag,
        }
    }
}

impl From<KeyboardDevice> for Entity {
    fn from(d: KeyboardDevice) -> Self {
        Entity::Keyboard(d)
    }
}

impl From<StorageDevice> for Entity {
    fn from(d: StorageDevice) -> Self {
        Entity::Storage(d)
    }
}

impl From<ExternalStorageDevice> for Entity {
    fn from(d: ExternalStorageDevice) -> Self {
        Entity::ExternalStorage(d)
    }
}

impl From<AudioDevice> for Entity {
    fn from(d: AudioDevice) -> Self {
        Entity::Audio(d)
    }
}

impl From<Rc<Employee>> for Entity {
    fn from(e: Rc<Employee>) -> Self {
        Entity::Employee(e)
    }
}

impl From<Employee> for Entity {
    fn from(e: Employee) -> Self {
        Entity::Employee(Rc::new(e))
    }
}

impl From<Manager> for Entity {
    fn from(m: Manager) -> Self {
        Entity::Manager(m)
    }
}

impl From<UnknownEntity> for Entity {
    fn from(u: UnknownEntity) -> Self {
        Entity::Unknown(u)
    }
}

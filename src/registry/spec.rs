//! Registry file (registry.json) schema and validation.
//!
//! JSON shape:
//! {
//!   "unknown_message": "Not listed!!",   // optional
//!   "entities": [
//!     { "tag": "Keyboard", "id": "kbd-001", "brand": "RedDragon", "layout": "AZERTY" },
//!     { "tag": "Employee", "id": 1, "name": "aziz", "department": "Sys Operation" },
//!     { "tag": "Manager",  "id": 4, "name": "Tarek", "employees": [1] },
//!     ...
//!   ]
//! }
//!
//! Entities stay raw JSON objects until validation so that unlisted tags can
//! be kept as `Unknown` entities instead of failing the whole file.

use crate::Result;
use crate::diagnostics;
use crate::entity::{
    AudioDevice, Employee, Entity, ExternalStorageDevice, KeyboardDevice, Kind, Manager, Staff,
    StorageDevice, UnknownEntity,
};
use crate::registry::Registry;

use anyhow::{Context, anyhow, bail};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

#[derive(Debug, Clone, Deserialize)]
pub struct RegistrySpec {
    #[serde(default)]
    pub unknown_message: Option<String>,

    #[serde(default)]
    pub entities: Vec<Value>,
}

/// Manager row as it appears in the file: employees are referenced by id.
#[derive(Debug, Clone, Deserialize)]
struct RawManager {
    id: u32,

    #[serde(alias = "ManagerName")]
    name: String,

    #[serde(default)]
    employees: Vec<u32>,
}

/// An entity that still needs its references resolved.
enum Pending {
    Ready(Entity),
    Manager { index: usize, raw: RawManager },
}

#[derive(Debug, Clone)]
pub struct ValidatedRegistry {
    pub registry: Registry,
    pub unknown_message: Option<String>,
}

impl RegistrySpec {
    /// Build a registry from the raw file contents.
    ///
    /// 1) Read each entity's tag and deserialize its attribute set.
    /// 2) Check id uniqueness (devices and staff have separate id spaces).
    /// 3) Resolve manager -> employee references; forward references are fine.
    pub fn validate_and_build(&self) -> Result<ValidatedRegistry> {
        let unknown_message = self
            .unknown_message
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        // Phase 1: tags + attribute sets.
        let mut pending: Vec<Pending> = Vec::with_capacity(self.entities.len());
        for (index, value) in self.entities.iter().enumerate() {
            pending.push(parse_entity(index, value)?);
        }

        // Phase 2: id uniqueness.
        let mut device_ids: BTreeMap<String, usize> = BTreeMap::new();
        let mut employees: BTreeMap<u32, Rc<Employee>> = BTreeMap::new();
        let mut staff_ids: BTreeMap<u32, usize> = BTreeMap::new();
        for (index, p) in pending.iter().enumerate() {
            let (device_id, staff_id) = match p {
                Pending::Ready(Entity::Keyboard(d)) => (Some(d.id.as_str()), None),
                Pending::Ready(Entity::Storage(d)) => (Some(d.id.as_str()), None),
                Pending::Ready(Entity::ExternalStorage(d)) => (Some(d.storage.id.as_str()), None),
                Pending::Ready(Entity::Audio(d)) => (Some(d.id.as_str()), None),
                Pending::Ready(Entity::Employee(e)) => {
                    employees.insert(e.id(), e.clone());
                    (None, Some(e.id()))
                }
                Pending::Manager { raw, .. } => (None, Some(raw.id)),
                Pending::Ready(Entity::Manager(_)) | Pending::Ready(Entity::Unknown(_)) => {
                    (None, None)
                }
            };

            if let Some(id) = device_id {
                if let Some(prev) = device_ids.insert(id.to_string(), index) {
                    bail!(
                        "{}",
                        diagnostics::error_message(format!(
                            "duplicate device id '{}' (entities #{} and #{})",
                            id, prev, index
                        ))
                    );
                }
            }
            if let Some(id) = staff_id {
                if let Some(prev) = staff_ids.insert(id, index) {
                    bail!(
                        "{}",
                        diagnostics::error_message(format!(
                            "duplicate staff id {} (entities #{} and #{})",
                            id, prev, index
                        ))
                    );
                }
            }
        }

        // Phase 3: resolve manager teams.
        let mut entities: Vec<Entity> = Vec::with_capacity(pending.len());
        for p in pending {
            let entity = match p {
                Pending::Ready(entity) => entity,
                Pending::Manager { index, raw } => {
                    Entity::Manager(resolve_manager(index, raw, &employees, &staff_ids)?)
                }
            };
            entities.push(entity);
        }

        let registry = Registry::new(entities);
        if registry.is_empty() {
            bail!(
                "{}",
                diagnostics::error_message("registry contains no entities")
            );
        }

        Ok(ValidatedRegistry {
            registry,
            unknown_message,
        })
    }
}

fn parse_entity(index: usize, value: &Value) -> Result<Pending> {
    let obj = value.as_object().ok_or_else(|| {
        anyhow!(diagnostics::error_message(format!(
            "entity #{} is not a JSON object",
            index
        )))
    })?;

    let tag = match obj.get("tag") {
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        Some(other) => bail!(
            "{}",
            diagnostics::error_message(format!(
                "entity #{} has an invalid tag: {}",
                index, other
            ))
        ),
        None => bail!(
            "{}",
            diagnostics::error_message(format!("entity #{} has no tag", index))
        ),
    };

    let mut attributes: Map<String, Value> = obj.clone();
    attributes.remove("tag");

    let kind = Kind::from_tag(&tag);
    let pending = match kind {
        Kind::Keyboard => {
            let keyboard: KeyboardDevice = attrs(index, kind, attributes)?;
            Pending::Ready(Entity::Keyboard(keyboard))
        }
        Kind::Storage => {
            let storage: StorageDevice = attrs(index, kind, attributes)?;
            Pending::Ready(Entity::Storage(storage))
        }
        Kind::ExternalStorage => {
            let external: ExternalStorageDevice = attrs(index, kind, attributes)?;
            Pending::Ready(Entity::ExternalStorage(external))
        }
        Kind::Audio => {
            let audio: AudioDevice = attrs(index, kind, attributes)?;
            if audio.volume > 100 {
                bail!(
                    "{}",
                    diagnostics::error_message(format!(
                        "entity #{} ({}): volume {} is out of range 0..=100",
                        index, audio.id, audio.volume
                    ))
                );
            }
            Pending::Ready(Entity::Audio(audio))
        }
        Kind::Employee => {
            let employee: Employee = attrs(index, kind, attributes)?;
            Pending::Ready(Entity::Employee(Rc::new(employee)))
        }
        Kind::Manager => Pending::Manager {
            index,
            raw: attrs(index, kind, attributes)?,
        },
        Kind::Unknown => {
            diagnostics::warn(format!(
                "entity #{} has unlisted tag '{}', it will be reported as unknown",
                index, tag
            ));
            let mut unknown = UnknownEntity::new(tag);
            unknown.attributes = attributes;
            Pending::Ready(Entity::Unknown(unknown))
        }
    };

    Ok(pending)
}

fn attrs<T: DeserializeOwned>(
    index: usize,
    kind: Kind,
    attributes: Map<String, Value>,
) -> Result<T> {
    serde_json::from_value(Value::Object(attributes)).with_context(|| {
        diagnostics::error_message(format!("entity #{} ({}): bad attributes", index, kind))
    })
}

fn resolve_manager(
    index: usize,
    raw: RawManager,
    employees: &BTreeMap<u32, Rc<Employee>>,
    staff_ids: &BTreeMap<u32, usize>,
) -> Result<Manager> {
    let mut seen: BTreeSet<u32> = BTreeSet::new();
    let mut team: Vec<Rc<Employee>> = Vec::with_capacity(raw.employees.len());

    for id in &raw.employees {
        if !seen.insert(*id) {
            diagnostics::warn(format!(
                "manager '{}' (entity #{}) lists employee {} more than once",
                raw.name, index, id
            ));
            continue;
        }

        match employees.get(id) {
            Some(emp) => team.push(emp.clone()),
            None if staff_ids.contains_key(id) => bail!(
                "{}",
                diagnostics::error_message(format!(
                    "manager '{}' (entity #{}) lists staff id {} which is not an employee",
                    raw.name, index, id
                ))
            ),
            None => bail!(
                "{}",
                diagnostics::error_message(format!(
                    "manager '{}' (entity #{}) references missing employee id {}",
                    raw.name, index, id
                ))
            ),
        }
    }

    Ok(Manager::new(raw.id, raw.name, team))
}

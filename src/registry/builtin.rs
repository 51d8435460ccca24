//! The example registry used when no registry file is given.

use crate::entity::{
    AudioDevice, Employee, Entity, KeyboardDevice, KeyboardLayout, Manager, StorageDevice,
    StorageType,
};
use crate::registry::Registry;
use std::rc::Rc;

impl Registry {
    /// Three devices, three employees and the manager they report to.
    pub fn builtin() -> Self {
        let aziz = Rc::new(Employee::new(1, "aziz", "Sys Operation"));
        let bilel = Rc::new(Employee::new(2, "Bilel", "Medical"));
        let chedli = Rc::new(Employee::new(3, "Chedli", "Development"));

        let tarek = Manager::new(4, "Tarek", vec![aziz.clone(), bilel.clone(), chedli.clone()]);

        let entities: Vec<Entity> = vec![
            KeyboardDevice {
                id: "kbd-001".to_string(),
                brand: Some("RedDragon".to_string()),
                layout: KeyboardLayout::Azerty,
            }
            .into(),
            StorageDevice {
                id: "usb-007".to_string(),
                brand: None,
                capacity_gb: 128,
                storage_type: StorageType::Usb,
                read_speed: None,
                write_speed: None,
            }
            .into(),
            AudioDevice {
                id: "aud-004".to_string(),
                brand: None,
                volume: 50,
                bitrate: 320,
                muted: false,
            }
            .into(),
            aziz.into(),
            bilel.into(),
            chedli.into(),
            tarek.into(),
        ];

        Registry::new(entities)
    }
}

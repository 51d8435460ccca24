//! Hardware devices.
//!
//! Every device shares one capability set, the [`Device`] trait. Specialized
//! devices extend a base device by embedding it: an external storage device
//! *has* a storage device plus its port details.
//!
//! Field names follow the registry JSON; aliases accept the camelCase spelling
//! used by older registry files (`capacityInGB`, `portType`, ...).

use serde::Deserialize;
use std::fmt;

/// Brand shown for devices registered without one.
const GENERIC_BRAND: &str = "Generic";

/// Shared capability set of all devices.
pub trait Device {
    fn id(&self) -> &str;

    fn brand(&self) -> Option<&str>;

    /// Message printed when the device is plugged in.
    fn connect(&self) -> String;

    /// One-line human-readable description.
    fn describe(&self) -> String;

    fn display_brand(&self) -> &str {
        self.brand().unwrap_or(GENERIC_BRAND)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum KeyboardLayout {
    #[serde(rename = "QWERTY", alias = "qwerty")]
    Qwerty,
    #[serde(rename = "AZERTY", alias = "azerty")]
    Azerty,
    #[serde(rename = "QWERTZ", alias = "qwertz")]
    Qwertz,
    #[serde(rename = "DVORAK", alias = "dvorak", alias = "Dvorak")]
    Dvorak,
}

impl fmt::Display for KeyboardLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            KeyboardLayout::Qwerty => "QWERTY",
            KeyboardLayout::Azerty => "AZERTY",
            KeyboardLayout::Qwertz => "QWERTZ",
            KeyboardLayout::Dvorak => "DVORAK",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum StorageType {
    #[serde(rename = "HDD", alias = "hdd")]
    Hdd,
    #[serde(rename = "SSD", alias = "ssd")]
    Ssd,
    #[serde(rename = "NVMe", alias = "nvme", alias = "NVME")]
    Nvme,
    #[serde(rename = "USB", alias = "usb")]
    Usb,
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StorageType::Hdd => "HDD",
            StorageType::Ssd => "SSD",
            StorageType::Nvme => "NVMe",
            StorageType::Usb => "USB",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeyboardDevice {
    pub id: String,

    #[serde(default)]
    pub brand: Option<String>,

    pub layout: KeyboardLayout,
}

impl KeyboardDevice {
    pub fn light(&self) -> String {
        format!("Keyboard {} backlight on.", self.id)
    }
}

impl Device for KeyboardDevice {
    fn id(&self) -> &str {
        &self.id
    }

    fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    fn connect(&self) -> String {
        "Keyboard connected.".to_string()
    }

    fn describe(&self) -> String {
        format!(
            "{} keyboard {} uses the {} layout.",
            self.display_brand(),
            self.id,
            self.layout
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorageDevice {
    pub id: String,

    #[serde(default)]
    pub brand: Option<String>,

    #[serde(alias = "capacity", alias = "capacityInGB")]
    pub capacity_gb: u32,

    #[serde(alias = "StorageType", alias = "storageType")]
    pub storage_type: StorageType,

    /// MB/s.
    #[serde(default, alias = "readSpeed")]
    pub read_speed: Option<u32>,

    /// MB/s.
    #[serde(default, alias = "writeSpeed")]
    pub write_speed: Option<u32>,
}

impl StorageDevice {
    /// "holds 128 GB (read 450 MB/s, write 400 MB/s)", speeds omitted when unknown.
    fn capacity_summary(&self) -> String {
        let speeds: Vec<String> = [("read", self.read_speed), ("write", self.write_speed)]
            .into_iter()
            .filter_map(|(label, speed)| speed.map(|s| format!("{} {} MB/s", label, s)))
            .collect();

        if speeds.is_empty() {
            format!("holds {} GB", self.capacity_gb)
        } else {
            format!("holds {} GB ({})", self.capacity_gb, speeds.join(", "))
        }
    }
}

impl Device for StorageDevice {
    fn id(&self) -> &str {
        &self.id
    }

    fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    fn connect(&self) -> String {
        "Storage device mounted.".to_string()
    }

    fn describe(&self) -> String {
        format!(
            "{} {} storage {} {}.",
            self.display_brand(),
            self.storage_type,
            self.id,
            self.capacity_summary()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExternalStorageDevice {
    #[serde(flatten)]
    pub storage: StorageDevice,

    #[serde(alias = "portType")]
    pub port_type: String,

    #[serde(default, alias = "isHotSwappable")]
    pub hot_swappable: bool,
}

impl Device for ExternalStorageDevice {
    fn id(&self) -> &str {
        self.storage.id()
    }

    fn brand(&self) -> Option<&str> {
        self.storage.brand()
    }

    fn connect(&self) -> String {
        format!("External storage device mounted on {}.", self.port_type)
    }

    fn describe(&self) -> String {
        let swap = if self.hot_swappable {
            "hot-swappable"
        } else {
            "not hot-swappable"
        };
        format!(
            "{} {} external storage {} {} over {}, {}.",
            self.display_brand(),
            self.storage.storage_type,
            self.storage.id,
            self.storage.capacity_summary(),
            self.port_type,
            swap
        )
    }
}

fn default_volume() -> u32 {
    50
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AudioDevice {
    pub id: String,

    #[serde(default)]
    pub brand: Option<String>,

    /// 0..=100, checked by the registry loader.
    #[serde(default = "default_volume")]
    pub volume: u32,

    /// kbps.
    pub bitrate: u32,

    #[serde(default)]
    pub muted: bool,
}

impl AudioDevice {
    /// Mute the device. Returns the resulting state message.
    pub fn mute(&mut self) -> String {
        if self.muted {
            return format!("Audio device {} is already muted.", self.id);
        }
        self.muted = true;
        format!("Audio device {} muted.", self.id)
    }

    pub fn unmute(&mut self) -> String {
        if !self.muted {
            return format!("Audio device {} is already unmuted.", self.id);
        }
        self.muted = false;
        format!("Audio device {} unmuted at volume {}.", self.id, self.volume)
    }

    /// Flip the mute state: mute when playing, unmute when muted.
    pub fn toggle_mute(&mut self) -> String {
        if self.muted {
            self.unmute()
        } else {
            self.mute()
        }
    }
}

impl Device for AudioDevice {
    fn id(&self) -> &str {
        &self.id
    }

    fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    fn connect(&self) -> String {
        "Audio device ready.".to_string()
    }

    fn describe(&self) -> String {
        format!(
            "{} audio device {} streams at {} kbps, volume {}{}.",
            self.display_brand(),
            self.id,
            self.bitrate,
            self.volume,
            if self.muted { " (muted)" } else { "" }
        )
    }
}

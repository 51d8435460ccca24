//! Entity discriminants.

use serde::Serialize;
use std::fmt;

/// The discriminant carried by every entity in the registry.
///
/// `Unknown` is the explicit fallback for tags the classifier does not list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Kind {
    Keyboard,
    Storage,
    ExternalStorage,
    Audio,
    Employee,
    Manager,
    Unknown,
}

impl Kind {
    /// All listed kinds, in guard order. `Unknown` is not part of it.
    pub const KNOWN: [Kind; 6] = [
        Kind::Keyboard,
        Kind::Storage,
        Kind::ExternalStorage,
        Kind::Audio,
        Kind::Employee,
        Kind::Manager,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Keyboard => "Keyboard",
            Kind::Storage => "Storage",
            Kind::ExternalStorage => "ExternalStorage",
            Kind::Audio => "Audio",
            Kind::Employee => "Employee",
            Kind::Manager => "Manager",
            Kind::Unknown => "Unknown",
        }
    }

    /// Resolve a raw tag. Matching ignores case, surrounding whitespace and
    /// `-`/`_`/space separators, so `external-storage` and `keyboard` resolve.
    /// The literal tag `Unknown` is not listed and resolves to `Kind::Unknown`
    /// like any other unrecognized value.
    pub fn from_tag(tag: &str) -> Kind {
        let normalized: String = tag
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        Kind::KNOWN
            .into_iter()
            .find(|kind| kind.as_str().to_lowercase() == normalized)
            .unwrap_or(Kind::Unknown)
    }

    pub fn is_device(self) -> bool {
        matches!(
            self,
            Kind::Keyboard | Kind::Storage | Kind::ExternalStorage | Kind::Audio
        )
    }

    pub fn is_staff(self) -> bool {
        matches!(self, Kind::Employee | Kind::Manager)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_kinds_resolve_from_their_own_name() {
        for kind in Kind::KNOWN {
            assert_eq!(Kind::from_tag(kind.as_str()), kind);
        }
    }

    #[test]
    fn tag_matching_is_lenient_about_case_and_separators() {
        assert_eq!(Kind::from_tag("keyboard"), Kind::Keyboard);
        assert_eq!(Kind::from_tag("  STORAGE "), Kind::Storage);
        assert_eq!(Kind::from_tag("external-storage"), Kind::ExternalStorage);
        assert_eq!(Kind::from_tag("external_storage"), Kind::ExternalStorage);
        assert_eq!(Kind::from_tag("audio"), Kind::Audio);
    }

    #[test]
    fn unlisted_tags_fall_back_to_unknown() {
        assert_eq!(Kind::from_tag("Printer"), Kind::Unknown);
        assert_eq!(Kind::from_tag(""), Kind::Unknown);
        assert_eq!(Kind::from_tag("Unknown"), Kind::Unknown);
    }

    #[test]
    fn device_and_staff_partition_known_kinds() {
        for kind in Kind::KNOWN {
            assert!(kind.is_device() != kind.is_staff(), "{kind}");
        }
        assert!(!Kind::Unknown.is_device());
        assert!(!Kind::Unknown.is_staff());
    }
}

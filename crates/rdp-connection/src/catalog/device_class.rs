//! Well-known device setup classes.
//!
//! System-defined setup class GUIDs commonly used with
//! `usbdevicestoredirect`. Any other class can be built with
//! [`DeviceSetupClass::new`].

use std::fmt;

use uuid::Uuid;

/// A device setup class: a named GUID grouping devices by driver class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceSetupClass {
    pub display_name: &'static str,
    pub class_name: &'static str,
    pub guid: Uuid,
}

impl DeviceSetupClass {
    pub const fn new(display_name: &'static str, class_name: &'static str, guid: Uuid) -> Self {
        Self {
            display_name,
            class_name,
            guid,
        }
    }
}

impl fmt::Display for DeviceSetupClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.guid.hyphenated())
    }
}

// =============================================================================
// SYSTEM-DEFINED CLASSES
// =============================================================================

pub const BIOMETRIC: DeviceSetupClass = DeviceSetupClass::new(
    "Biometric Device",
    "Biometric",
    Uuid::from_u128(0x53d29ef7_377c_4d14_864b_eb3a85769359),
);

pub const BLUETOOTH: DeviceSetupClass = DeviceSetupClass::new(
    "Bluetooth Devices",
    "Bluetooth",
    Uuid::from_u128(0xe0cbf06c_cd8b_4647_bb8a_263b43f0f974),
);

pub const CAMERA: DeviceSetupClass = DeviceSetupClass::new(
    "Camera Device",
    "Camera",
    Uuid::from_u128(0xca3e7ab9_b4c3_4ae6_8251_579ef933890f),
);

pub const DISK_DRIVE: DeviceSetupClass = DeviceSetupClass::new(
    "Disk Drives",
    "DiskDrive",
    Uuid::from_u128(0x4d36e967_e325_11ce_bfc1_08002be10318),
);

pub const HID: DeviceSetupClass = DeviceSetupClass::new(
    "Human Interface Devices (HID)",
    "HIDClass",
    Uuid::from_u128(0x745a17a0_74d3_11d0_b6fe_00a0c90f57da),
);

pub const IMAGE: DeviceSetupClass = DeviceSetupClass::new(
    "Imaging Device",
    "Image",
    Uuid::from_u128(0x6bdd1fc6_810f_11d0_bec7_08002be2092f),
);

pub const KEYBOARD: DeviceSetupClass = DeviceSetupClass::new(
    "Keyboard",
    "Keyboard",
    Uuid::from_u128(0x4d36e96b_e325_11ce_bfc1_08002be10318),
);

pub const MEDIA: DeviceSetupClass = DeviceSetupClass::new(
    "Multimedia",
    "Media",
    Uuid::from_u128(0x4d36e96c_e325_11ce_bfc1_08002be10318),
);

pub const MOUSE: DeviceSetupClass = DeviceSetupClass::new(
    "Mouse",
    "Mouse",
    Uuid::from_u128(0x4d36e96f_e325_11ce_bfc1_08002be10318),
);

pub const PORTS: DeviceSetupClass = DeviceSetupClass::new(
    "Ports (COM & LPT ports)",
    "Ports",
    Uuid::from_u128(0x4d36e978_e325_11ce_bfc1_08002be10318),
);

pub const PRINTER: DeviceSetupClass = DeviceSetupClass::new(
    "Printers",
    "Printer",
    Uuid::from_u128(0x4d36e979_e325_11ce_bfc1_08002be10318),
);

pub const SMART_CARD_READER: DeviceSetupClass = DeviceSetupClass::new(
    "Smart Card Readers",
    "SmartCardReader",
    Uuid::from_u128(0x50dd5230_ba8a_11d1_bf5d_0000f805f530),
);

pub const WPD: DeviceSetupClass = DeviceSetupClass::new(
    "Windows Portable Devices (WPD)",
    "WPD",
    Uuid::from_u128(0xeec5ad98_8080_425f_922a_dabf3de3f69a),
);

/// All classes defined in this module.
pub const ALL: &[DeviceSetupClass] = &[
    BIOMETRIC,
    BLUETOOTH,
    CAMERA,
    DISK_DRIVE,
    HID,
    IMAGE,
    KEYBOARD,
    MEDIA,
    MOUSE,
    PORTS,
    PRINTER,
    SMART_CARD_READER,
    WPD,
];

/// Looks up a class by its class name, ignoring ASCII case.
pub fn by_class_name(name: &str) -> Option<&'static DeviceSetupClass> {
    ALL.iter().find(|c| c.class_name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_lowercase_hyphenated() {
        assert_eq!(
            SMART_CARD_READER.to_string(),
            "50dd5230-ba8a-11d1-bf5d-0000f805f530"
        );
        assert_eq!(
            BIOMETRIC.guid.braced().to_string(),
            "{53d29ef7-377c-4d14-864b-eb3a85769359}"
        );
    }

    #[test]
    fn test_lookup() {
        assert_eq!(by_class_name("hidclass"), Some(&HID));
        assert!(by_class_name("Nope").is_none());
    }

    #[test]
    fn test_guids_unique() {
        let mut guids: Vec<_> = ALL.iter().map(|c| c.guid).collect();
        guids.sort();
        guids.dedup();
        assert_eq!(guids.len(), ALL.len());
    }
}

//! Session behavior settings shared by every property-set kind.
//!
//! Connection, redirection, display and audio settings, plus the list
//! accessors for the semicolon- and comma-delimited redirection fields.

use uuid::Uuid;

use super::device_class::DeviceSetupClass;
use super::{
    MAX_DESKTOP_SIZE, MIN_DESKTOP_SIZE, SCREEN_MODES, ZERO_TO_FOUR, ZERO_TO_THREE, ZERO_TO_TWO,
};
use crate::limits::{COMMA_SEPARATOR, LIST_SEPARATOR, REDIRECT_ALL};
use crate::model::{BINARY_FLAG, FieldDescriptor, Literal, PropertySet, PropertySetKind, Value};

const SCALE_FACTORS: &[Literal] = &[
    Literal::Integer(100),
    Literal::Integer(125),
    Literal::Integer(150),
    Literal::Integer(175),
    Literal::Integer(200),
    Literal::Integer(250),
    Literal::Integer(300),
    Literal::Integer(400),
    Literal::Integer(500),
];

/// Redirects every device plugged in after the session starts.
pub const DYNAMIC_DEVICES: &str = "DynamicDevices";

/// Redirects every drive connected after the session starts.
pub const DYNAMIC_DRIVES: &str = "DynamicDrives";

pub(crate) const SESSION_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::integer("EnableRdsAzureAdAuth", "enablerdsaadauth").allowed(BINARY_FLAG),
    FieldDescriptor::integer("EnableCredSspSupport", "enablecredsspsupport").allowed(BINARY_FLAG),
    FieldDescriptor::text("AlternateShell", "alternate shell"),
    FieldDescriptor::integer("AutoReconnectionEnabled", "autoreconnection enabled")
        .allowed(BINARY_FLAG),
    FieldDescriptor::integer("BandwidthAutoDetect", "bandwidthautodetect").allowed(BINARY_FLAG),
    FieldDescriptor::integer("NetworkAutoDetect", "networkautodetect").allowed(BINARY_FLAG),
    FieldDescriptor::integer("Compression", "compression").allowed(BINARY_FLAG),
    FieldDescriptor::integer("VideoPlaybackMode", "videoplaybackmode").allowed(BINARY_FLAG),
    FieldDescriptor::integer("AudioCaptureMode", "audiocapturemode").allowed(BINARY_FLAG),
    FieldDescriptor::integer("EncodedRedirectedVideoCapture", "encode redirected video capture")
        .allowed(BINARY_FLAG),
    FieldDescriptor::integer("RedirectedVideoCaptureEncodingQuality", "redirected video capture encoding quality")
        .allowed(ZERO_TO_TWO),
    FieldDescriptor::integer("AudioMode", "audiomode").allowed(ZERO_TO_TWO),
    FieldDescriptor::text("CamerasToRedirect", "camerastoredirect"),
    FieldDescriptor::text("DevicesToRedirect", "devicestoredirect"),
    FieldDescriptor::text("DrivesToRedirect", "drivestoredirect"),
    FieldDescriptor::integer("KeyboardHook", "keyboardhook").allowed(ZERO_TO_THREE),
    FieldDescriptor::integer("RedirectClipboard", "redirectclipboard").allowed(BINARY_FLAG),
    FieldDescriptor::integer("RedirectComPorts", "redirectcomports").allowed(BINARY_FLAG),
    FieldDescriptor::integer("RedirectLocation", "redirectlocation").allowed(BINARY_FLAG),
    FieldDescriptor::integer("RedirectPrinters", "redirectprinters").allowed(BINARY_FLAG),
    FieldDescriptor::integer("RedirectSmartCards", "redirectsmartcards").allowed(BINARY_FLAG),
    FieldDescriptor::integer("RedirectWebAuthn", "redirectwebauthn").allowed(BINARY_FLAG),
    FieldDescriptor::text("UsbDevicesToRedirect", "usbdevicestoredirect"),
    FieldDescriptor::integer("UseMultipleMonitors", "use multimon").allowed(BINARY_FLAG),
    FieldDescriptor::text("SelectedMonitors", "selectedmonitors"),
    FieldDescriptor::integer("MaximizeToCurrentDisplays", "maximizetocurrentdisplays")
        .allowed(BINARY_FLAG),
    FieldDescriptor::integer("SingleMonitorInWindowedMode", "singlemoninwindowedmode")
        .allowed(BINARY_FLAG),
    FieldDescriptor::integer("ScreenModeId", "screen mode id").allowed(SCREEN_MODES),
    FieldDescriptor::integer("SmartSizing", "smart sizing").allowed(BINARY_FLAG),
    FieldDescriptor::integer("DynamicResolution", "dynamic resolution").allowed(BINARY_FLAG),
    FieldDescriptor::integer("DesktopSizeId", "desktop size id").allowed(ZERO_TO_FOUR),
    FieldDescriptor::integer("DesktopHeight", "desktopheight")
        .range(MIN_DESKTOP_SIZE, MAX_DESKTOP_SIZE),
    FieldDescriptor::integer("DesktopWidth", "desktopwidth")
        .range(MIN_DESKTOP_SIZE, MAX_DESKTOP_SIZE),
    FieldDescriptor::integer("DesktopScaleFactor", "desktopscalefactor").allowed(SCALE_FACTORS),
];

/// Session behavior settings only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RemoteDesktopSession;

impl PropertySetKind for RemoteDesktopSession {
    const NAME: &'static str = "RemoteDesktopSession";

    fn fields() -> Vec<FieldDescriptor> {
        SESSION_FIELDS.to_vec()
    }
}

/// Property-set kinds that carry the session behavior fields.
pub trait SessionFields: PropertySetKind {}

impl SessionFields for RemoteDesktopSession {}

// =============================================================================
// LIST ACCESSORS
// =============================================================================

impl<K: SessionFields> PropertySet<K> {
    /// Splits a delimited text field, dropping empty entries.
    fn list(&self, field: &str, separator: char) -> impl Iterator<Item = &str> {
        self.get_text(field)
            .into_iter()
            .flat_map(move |text| text.split(separator))
            .filter(|entry| !entry.is_empty())
    }

    /// Joins entries into a delimited text field. No entries clears it.
    fn set_list<I, S>(&mut self, field: &'static str, separator: char, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut joined = String::new();
        for (i, entry) in entries.into_iter().enumerate() {
            if i > 0 {
                joined.push(separator);
            }
            joined.push_str(entry.as_ref());
        }
        // Nothing to join clears the field
        let value = (!joined.is_empty()).then(|| Value::Text(joined));
        self.put(field, value);
    }

    fn text_is(&self, field: &str, expected: &str) -> bool {
        self.get_text(field)
            .is_some_and(|text| text.eq_ignore_ascii_case(expected))
    }

    pub fn cameras_to_redirect(&self) -> impl Iterator<Item = &str> {
        self.list("CamerasToRedirect", LIST_SEPARATOR)
    }

    pub fn set_cameras_to_redirect<I, S>(&mut self, cameras: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.set_list("CamerasToRedirect", LIST_SEPARATOR, cameras);
    }

    /// Returns true if `camerastoredirect` is `*`.
    pub fn redirects_all_cameras(&self) -> bool {
        self.text_is("CamerasToRedirect", REDIRECT_ALL)
    }

    pub fn redirect_all_cameras(&mut self) {
        self.put("CamerasToRedirect", Some(Value::from(REDIRECT_ALL)));
    }

    pub fn devices_to_redirect(&self) -> impl Iterator<Item = &str> {
        self.list("DevicesToRedirect", LIST_SEPARATOR)
    }

    pub fn set_devices_to_redirect<I, S>(&mut self, devices: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.set_list("DevicesToRedirect", LIST_SEPARATOR, devices);
    }

    pub fn redirects_all_devices(&self) -> bool {
        self.text_is("DevicesToRedirect", REDIRECT_ALL)
    }

    pub fn redirect_all_devices(&mut self) {
        self.put("DevicesToRedirect", Some(Value::from(REDIRECT_ALL)));
    }

    pub fn redirects_dynamic_devices(&self) -> bool {
        self.text_is("DevicesToRedirect", DYNAMIC_DEVICES)
    }

    pub fn redirect_dynamic_devices(&mut self) {
        self.put("DevicesToRedirect", Some(Value::from(DYNAMIC_DEVICES)));
    }

    pub fn drives_to_redirect(&self) -> impl Iterator<Item = &str> {
        self.list("DrivesToRedirect", LIST_SEPARATOR)
    }

    pub fn set_drives_to_redirect<I, S>(&mut self, drives: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.set_list("DrivesToRedirect", LIST_SEPARATOR, drives);
    }

    pub fn redirects_all_drives(&self) -> bool {
        self.text_is("DrivesToRedirect", REDIRECT_ALL)
    }

    pub fn redirect_all_drives(&mut self) {
        self.put("DrivesToRedirect", Some(Value::from(REDIRECT_ALL)));
    }

    pub fn redirects_dynamic_drives(&self) -> bool {
        self.text_is("DrivesToRedirect", DYNAMIC_DRIVES)
    }

    pub fn redirect_dynamic_drives(&mut self) {
        self.put("DrivesToRedirect", Some(Value::from(DYNAMIC_DRIVES)));
    }

    pub fn usb_devices_to_redirect(&self) -> impl Iterator<Item = &str> {
        self.list("UsbDevicesToRedirect", LIST_SEPARATOR)
    }

    pub fn set_usb_devices_to_redirect<I, S>(&mut self, devices: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.set_list("UsbDevicesToRedirect", LIST_SEPARATOR, devices);
    }

    /// Redirects USB devices by setup class, e.g. `{ca3e7ab9-b4c3-4ae6-8251-579ef933890f}`.
    pub fn set_usb_device_classes<'a, I>(&mut self, classes: I)
    where
        I: IntoIterator<Item = &'a DeviceSetupClass>,
    {
        let guids = classes.into_iter().map(|class| format_class_guid(&class.guid));
        self.set_list("UsbDevicesToRedirect", LIST_SEPARATOR, guids);
    }

    pub fn selected_monitors(&self) -> impl Iterator<Item = &str> {
        self.list("SelectedMonitors", COMMA_SEPARATOR)
    }

    pub fn set_selected_monitors<I, S>(&mut self, monitors: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.set_list("SelectedMonitors", COMMA_SEPARATOR, monitors);
    }
}

/// Braced lowercase GUID form used in `usbdevicestoredirect`.
pub fn format_class_guid(guid: &Uuid) -> String {
    guid.braced().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::device_class;
    use crate::model::schema_of;

    #[test]
    fn test_session_schema() {
        let schema = schema_of::<RemoteDesktopSession>().unwrap();
        assert_eq!(schema.fields().len(), SESSION_FIELDS.len());
        assert_eq!(schema.fields()[0].key, Some("enablerdsaadauth"));
        assert!(schema.field_by_key("desktopscalefactor").is_some());
        assert!(schema.field_by_key("full address").is_none());
    }

    #[test]
    fn test_semicolon_lists() {
        let mut set = PropertySet::<RemoteDesktopSession>::new();
        assert_eq!(set.drives_to_redirect().count(), 0);

        set.set_drives_to_redirect(["C:", "D:"]);
        assert_eq!(set.get_text("DrivesToRedirect"), Some("C:;D:"));
        assert_eq!(set.drives_to_redirect().collect::<Vec<_>>(), vec!["C:", "D:"]);

        set.set("DevicesToRedirect", ";a;;b;").unwrap();
        assert_eq!(set.devices_to_redirect().collect::<Vec<_>>(), vec!["a", "b"]);

        set.set_drives_to_redirect(Vec::<String>::new());
        assert!(!set.contains("DrivesToRedirect"));
    }

    #[test]
    fn test_comma_list() {
        let mut set = PropertySet::<RemoteDesktopSession>::new();
        set.set_selected_monitors(["0", "1"]);
        assert_eq!(set.get_text("SelectedMonitors"), Some("0,1"));
        assert_eq!(set.selected_monitors().collect::<Vec<_>>(), vec!["0", "1"]);
    }

    #[test]
    fn test_redirect_all_and_dynamic() {
        let mut set = PropertySet::<RemoteDesktopSession>::new();
        assert!(!set.redirects_all_cameras());

        set.redirect_all_cameras();
        assert!(set.redirects_all_cameras());
        assert_eq!(set.get_text("CamerasToRedirect"), Some("*"));

        set.redirect_dynamic_drives();
        assert!(set.redirects_dynamic_drives());
        assert!(!set.redirects_all_drives());
        assert_eq!(set.get_text("DrivesToRedirect"), Some("DynamicDrives"));

        set.set("DevicesToRedirect", "dynamicdevices").unwrap();
        assert!(set.redirects_dynamic_devices());
        set.redirect_all_devices();
        assert!(set.redirects_all_devices());
    }

    #[test]
    fn test_usb_device_classes() {
        let mut set = PropertySet::<RemoteDesktopSession>::new();
        set.set_usb_device_classes([&device_class::CAMERA, &device_class::KEYBOARD]);
        assert_eq!(
            set.get_text("UsbDevicesToRedirect"),
            Some("{ca3e7ab9-b4c3-4ae6-8251-579ef933890f};{4d36e96b-e325-11ce-bfc1-08002be10318}")
        );
        assert_eq!(set.usb_devices_to_redirect().count(), 2);
    }
}

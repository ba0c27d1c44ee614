//! Client-only settings and the terminal services client kind.

use super::service::SERVICE_FIELDS;
use super::session::{SESSION_FIELDS, SessionFields};
use super::{COLOR_DEPTHS, ZERO_TO_TWO};
use crate::limits::DEFAULT_WINDOW_POSITION;
use crate::model::{
    BINARY_FLAG, FieldDescriptor, Literal, PropertySet, PropertySetKind, Value, WindowPosition,
};

const CONNECTION_TYPES: &[Literal] = &[
    Literal::Integer(1),
    Literal::Integer(2),
    Literal::Integer(3),
    Literal::Integer(4),
    Literal::Integer(5),
    Literal::Integer(6),
    Literal::Integer(7),
];

pub(crate) const CLIENT_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::integer("AdministrativeSession", "administrative session")
        .allowed(BINARY_FLAG),
    FieldDescriptor::integer("AllowDesktopComposition", "allow desktop composition")
        .allowed(BINARY_FLAG),
    FieldDescriptor::integer("AllowFontSmoothing", "allow font smoothing").allowed(BINARY_FLAG),
    FieldDescriptor::integer("AudioQualityMode", "audioqualitymode").allowed(ZERO_TO_TWO),
    FieldDescriptor::integer("AutoReconnectMaxRetries", "autoreconnect max retries")
        .range(0, i32::MAX as i64),
    FieldDescriptor::integer("BitmapCachePersistEnable", "bitmapcachepersistenable")
        .allowed(BINARY_FLAG),
    FieldDescriptor::integer("ConnectionType", "connection type").allowed(CONNECTION_TYPES),
    FieldDescriptor::integer("DisableCtrlAltDel", "disable ctrl+alt+del").allowed(BINARY_FLAG),
    FieldDescriptor::integer("DisablePrinterRedirection", "disableprinterredirection")
        .allowed(BINARY_FLAG),
    FieldDescriptor::integer("DisableClipboardRedirection", "disableclipboardredirection")
        .allowed(BINARY_FLAG),
    FieldDescriptor::integer("DisableCursorSettings", "disable cursor setting")
        .allowed(BINARY_FLAG),
    FieldDescriptor::integer("DisableWallpaper", "disable wallpaper").allowed(BINARY_FLAG),
    FieldDescriptor::integer("DisableFullWindowDrag", "disable full window drag")
        .allowed(BINARY_FLAG),
    FieldDescriptor::integer("DisableMenuAnimations", "disable menu anims").allowed(BINARY_FLAG),
    FieldDescriptor::integer("DisableThemes", "disable themes").allowed(BINARY_FLAG),
    FieldDescriptor::integer("DisplayConnectionBar", "displayconnectionbar").allowed(BINARY_FLAG),
    FieldDescriptor::integer("EnableWorkspaceReconnect", "enableworkspacereconnect")
        .allowed(BINARY_FLAG),
    FieldDescriptor::integer("GatewayBrokeringType", "gatewaybrokeringtype"),
    FieldDescriptor::text("KdcProxyName", "kdcproxyname"),
    FieldDescriptor::text("LoadBalanceInfo", "loadbalanceinfo"),
    FieldDescriptor::integer("NegotiateSecurityLayer", "negotiate security layer")
        .allowed(BINARY_FLAG),
    FieldDescriptor::integer("PinConnectionBar", "pinconnectionbar").allowed(BINARY_FLAG),
    FieldDescriptor::integer("PromptForCredentials", "prompt for credentials").allowed(BINARY_FLAG),
    FieldDescriptor::integer("RdgIsKdcProxy", "rdgiskdcproxy").allowed(BINARY_FLAG),
    FieldDescriptor::integer("RedirectDrives", "redirectdrives").allowed(BINARY_FLAG),
    FieldDescriptor::integer("RedirectPosDevices", "redirectposdevices").allowed(BINARY_FLAG),
    FieldDescriptor::integer("ServerPort", "server port").range(0, 65535),
    FieldDescriptor::integer("SessionBpp", "session bpp").allowed(COLOR_DEPTHS),
    FieldDescriptor::text("ShellWorkingDirectory", "shell working directory"),
    FieldDescriptor::integer("SpanMonitors", "span monitors").allowed(BINARY_FLAG),
    FieldDescriptor::integer("UseRedirectionServerName", "use redirection server name")
        .allowed(BINARY_FLAG),
    FieldDescriptor::text("WindowPosition", "winposstr"),
    FieldDescriptor::text("WorkspaceId", "workspaceid"),
];

/// Encrypted password blob (`password 51`).
pub(crate) const PASSWORD_FIELD: FieldDescriptor = FieldDescriptor::bytes("Password", "password 51");

/// Full Remote Desktop Connection client settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RemoteDesktopClient;

impl PropertySetKind for RemoteDesktopClient {
    const NAME: &'static str = "RemoteDesktopClient";

    fn fields() -> Vec<FieldDescriptor> {
        [SESSION_FIELDS, SERVICE_FIELDS, CLIENT_FIELDS].concat()
    }
}

/// Client settings plus the protected password (`mstsc` style files).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TerminalServiceClient;

impl PropertySetKind for TerminalServiceClient {
    const NAME: &'static str = "TerminalServiceClient";

    fn fields() -> Vec<FieldDescriptor> {
        [SESSION_FIELDS, SERVICE_FIELDS, CLIENT_FIELDS, &[PASSWORD_FIELD][..]].concat()
    }
}

/// Property-set kinds that carry the client-only fields.
pub trait ClientFields: SessionFields {}

impl SessionFields for RemoteDesktopClient {}
impl SessionFields for TerminalServiceClient {}
impl ClientFields for RemoteDesktopClient {}
impl ClientFields for TerminalServiceClient {}

impl<K: ClientFields> PropertySet<K> {
    /// Returns the parsed `winposstr`, if set.
    pub fn window_position(&self) -> Option<WindowPosition> {
        self.get_text("WindowPosition").map(WindowPosition::parse)
    }

    pub fn set_window_position(&mut self, position: WindowPosition) {
        self.put("WindowPosition", Some(Value::Text(position.to_string())));
    }

    /// Resets `winposstr` to the client default, `0,3,0,0,800,600`.
    pub fn reset_window_position(&mut self) {
        self.put("WindowPosition", Some(Value::from(DEFAULT_WINDOW_POSITION)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{MarshalOptions, Marshaller, serialize_lines};
    use crate::error::{MarshalError, ValidationError};

    #[test]
    fn test_server_port_range() {
        let mut set = PropertySet::<RemoteDesktopClient>::new();
        set.set("ServerPort", 3389).unwrap();
        assert_eq!(
            serialize_lines(&set, MarshalOptions::strict()).unwrap(),
            vec!["server port:i:3389"]
        );

        set.set("ServerPort", 70000).unwrap();
        assert!(matches!(
            serialize_lines(&set, MarshalOptions::strict()),
            Err(MarshalError::InvalidValue(ValidationError::ValueOutOfRange { max: 65535, .. }))
        ));
    }

    #[test]
    fn test_session_bpp_allowed_values() {
        let marshaller = Marshaller::default();
        assert!(marshaller.deserialize::<RemoteDesktopClient, _, _>(["session bpp:i:24"]).is_ok());
        assert!(marshaller.deserialize::<RemoteDesktopClient, _, _>(["session bpp:i:12"]).is_err());
    }

    #[test]
    fn test_window_position() {
        let mut set = PropertySet::<RemoteDesktopClient>::new();
        assert_eq!(set.window_position(), None);

        set.reset_window_position();
        assert_eq!(set.get_text("WindowPosition"), Some("0,3,0,0,800,600"));

        let mut position = set.window_position().unwrap();
        position.right = 1024;
        position.bottom = 768;
        set.set_window_position(position);

        let lines = serialize_lines(&set, MarshalOptions::strict()).unwrap();
        assert_eq!(lines, vec!["winposstr:s:0,3,0,0,1024,768"]);
    }

    #[test]
    fn test_window_position_full_range_from_file() {
        let set = Marshaller::new(MarshalOptions::lenient())
            .deserialize::<RemoteDesktopClient, _, _>([
                "winposstr:s:0,3,-2147483648,-2147483648,2147483647,2147483647",
            ])
            .unwrap();
        let position = set.window_position().unwrap();
        assert_eq!(position.width(), 4_294_967_295);
        assert_eq!(position.height(), 4_294_967_295);
    }

    #[test]
    fn test_password_only_on_terminal_service_client() {
        let line = ["password 51:b:4100"];
        let marshaller = Marshaller::default();

        let set = marshaller.deserialize::<TerminalServiceClient, _, _>(line).unwrap();
        assert_eq!(set.get_bytes("Password"), Some(&[0x41u8, 0x00][..]));

        assert!(marshaller.deserialize::<RemoteDesktopClient, _, _>(line).is_err());
    }
}

//! Remote desktop service connection settings.
//!
//! Target host, credentials, gateway and RemoteApp settings on top of the
//! session fields.

use super::session::{SESSION_FIELDS, SessionFields};
use super::{ZERO_TO_FOUR, ZERO_TO_THREE};
use crate::model::{BINARY_FLAG, FieldDescriptor, Literal, PropertySetKind};

const GATEWAY_CREDENTIAL_SOURCES: &[Literal] = &[
    Literal::Integer(0),
    Literal::Integer(1),
    Literal::Integer(2),
    Literal::Integer(3),
    Literal::Integer(4),
    Literal::Integer(5),
];

pub(crate) const SERVICE_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::text("FullAddress", "full address").primary(),
    FieldDescriptor::text("AlternateFullAddress", "alternate full address"),
    FieldDescriptor::text("Username", "username"),
    FieldDescriptor::text("Domain", "domain"),
    FieldDescriptor::text("GatewayHostName", "gatewayhostname"),
    FieldDescriptor::integer("GatewayCredentialsSource", "gatewaycredentialssource")
        .allowed(GATEWAY_CREDENTIAL_SOURCES),
    FieldDescriptor::integer("GatewayProfileUsageMethod", "gatewayprofileusagemethod")
        .allowed(BINARY_FLAG),
    FieldDescriptor::integer("GatewayUsageMethod", "gatewayusagemethod").allowed(ZERO_TO_FOUR),
    FieldDescriptor::integer("PromptCredentialOnce", "promptcredentialonce").allowed(BINARY_FLAG),
    FieldDescriptor::integer("AuthenticationLevel", "authentication level").allowed(ZERO_TO_THREE),
    FieldDescriptor::integer("DisableConnectionSharing", "disableconnectionsharing")
        .allowed(BINARY_FLAG),
    FieldDescriptor::text("RemoteApplicationCommandLine", "remoteapplicationcmdline"),
    FieldDescriptor::integer("RemoteApplicationExpandCommandLine", "remoteapplicationexpandcmdline")
        .allowed(BINARY_FLAG),
    FieldDescriptor::integer("RemoteApplicationExpandWorkingDirectory", "remoteapplicationexpandworkingdir")
        .allowed(BINARY_FLAG),
    FieldDescriptor::text("RemoteApplicationFile", "remoteapplicationfile"),
    FieldDescriptor::text("RemoteApplicationIcon", "remoteapplicationicon"),
    FieldDescriptor::integer("RemoteApplicationMode", "remoteapplicationmode").allowed(BINARY_FLAG),
    FieldDescriptor::text("RemoteApplicationName", "remoteapplicationname"),
    FieldDescriptor::text("RemoteApplicationProgram", "remoteapplicationprogram"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RemoteDesktopService;

impl PropertySetKind for RemoteDesktopService {
    const NAME: &'static str = "RemoteDesktopService";

    fn fields() -> Vec<FieldDescriptor> {
        [SESSION_FIELDS, SERVICE_FIELDS].concat()
    }
}

impl SessionFields for RemoteDesktopService {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{MarshalOptions, Marshaller};
    use crate::model::PropertySet;

    #[test]
    fn test_remote_app_file() {
        let text = "full address:s:apps.example.com\r\n\
                    remoteapplicationmode:i:1\r\n\
                    remoteapplicationprogram:s:||calc\r\n\
                    remoteapplicationname:s:Calculator\r\n\
                    gatewayusagemethod:i:2\r\n";
        let marshaller = Marshaller::default();
        let set: PropertySet<RemoteDesktopService> = marshaller.deserialize_str(text).unwrap();

        assert_eq!(set.get_text("RemoteApplicationProgram"), Some("||calc"));
        assert_eq!(set.get_integer("GatewayUsageMethod"), Some(2));

        let written = marshaller.serialize_to_string(&set).unwrap();
        assert!(written.starts_with("full address:s:apps.example.com\r\ngatewayusagemethod:i:2\r\n"));
        assert_eq!(marshaller.deserialize_str::<RemoteDesktopService>(&written).unwrap(), set);
    }

    #[test]
    fn test_gateway_credentials_source() {
        let lines = ["gatewaycredentialssource:i:6"];
        assert!(Marshaller::default().deserialize::<RemoteDesktopService, _, _>(lines).is_err());

        let set: PropertySet<RemoteDesktopService> = Marshaller::new(MarshalOptions::lenient())
            .deserialize(lines)
            .unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_uri_puts_address_first() {
        let mut set = PropertySet::<RemoteDesktopService>::new();
        set.set("Compression", 1).unwrap();
        set.set("Username", "alice").unwrap();
        set.set("FullAddress", "host").unwrap();

        assert_eq!(
            Marshaller::default().serialize_uri(&set).unwrap(),
            "rdp://full%20address=s%3Ahost&compression=i%3A1&username=s%3Aalice"
        );
    }
}

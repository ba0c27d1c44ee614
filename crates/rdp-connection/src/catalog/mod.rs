//! Built-in property-set kinds.
//!
//! Field tables for the `.rdp` property sets, layered the same way the
//! settings themselves are: session behavior shared by every kind, then
//! service connection settings, then client-only settings. Each kind lists
//! inherited fields first, then its own.

pub mod azure;
pub mod client;
pub mod device_class;
pub mod protection;
pub mod service;
pub mod session;
pub mod uri;

pub use azure::AzureVirtualDesktop;
pub use client::{ClientFields, RemoteDesktopClient, TerminalServiceClient};
pub use device_class::DeviceSetupClass;
pub use protection::DataProtector;
pub use service::RemoteDesktopService;
pub use session::{RemoteDesktopSession, SessionFields};
pub use uri::RemoteDesktopUri;

use crate::model::Literal;

// =============================================================================
// ALLOWED VALUE SETS
// =============================================================================

pub(crate) const ZERO_TO_TWO: &[Literal] = &[
    Literal::Integer(0),
    Literal::Integer(1),
    Literal::Integer(2),
];

pub(crate) const ZERO_TO_THREE: &[Literal] = &[
    Literal::Integer(0),
    Literal::Integer(1),
    Literal::Integer(2),
    Literal::Integer(3),
];

pub(crate) const ZERO_TO_FOUR: &[Literal] = &[
    Literal::Integer(0),
    Literal::Integer(1),
    Literal::Integer(2),
    Literal::Integer(3),
    Literal::Integer(4),
];

pub(crate) const SCREEN_MODES: &[Literal] = &[Literal::Integer(1), Literal::Integer(2)];

pub(crate) const COLOR_DEPTHS: &[Literal] = &[
    Literal::Integer(8),
    Literal::Integer(15),
    Literal::Integer(16),
    Literal::Integer(24),
    Literal::Integer(32),
];

/// Desktop/screen size range in pixels.
pub(crate) const MIN_DESKTOP_SIZE: i64 = 200;
pub(crate) const MAX_DESKTOP_SIZE: i64 = 8192;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PropertySetKind, Schema, schema_of};

    fn keys(schema: &Schema) -> Vec<&'static str> {
        schema.fields().iter().filter_map(|f| f.key).collect()
    }

    #[test]
    fn test_all_kinds_build() {
        let schemas = [
            schema_of::<RemoteDesktopSession>().unwrap(),
            schema_of::<RemoteDesktopService>().unwrap(),
            schema_of::<RemoteDesktopClient>().unwrap(),
            schema_of::<TerminalServiceClient>().unwrap(),
            schema_of::<AzureVirtualDesktop>().unwrap(),
            schema_of::<RemoteDesktopUri>().unwrap(),
        ];
        for schema in schemas {
            assert!(!schema.fields().is_empty(), "{}", schema.name());
            assert!(schema.fields().iter().all(|f| f.key.is_some()));
        }
    }

    #[test]
    fn test_base_fields_come_first() {
        let session = keys(schema_of::<RemoteDesktopSession>().unwrap());
        let service = keys(schema_of::<RemoteDesktopService>().unwrap());
        let client = keys(schema_of::<RemoteDesktopClient>().unwrap());
        let ts_client = keys(schema_of::<TerminalServiceClient>().unwrap());
        let avd = keys(schema_of::<AzureVirtualDesktop>().unwrap());

        assert_eq!(&service[..session.len()], &session[..]);
        assert_eq!(&client[..service.len()], &service[..]);
        assert_eq!(&ts_client[..client.len()], &client[..]);
        assert_eq!(&avd[..session.len()], &session[..]);
        assert_eq!(ts_client.last(), Some(&"password 51"));
    }

    #[test]
    fn test_primary_fields() {
        for schema in [
            schema_of::<RemoteDesktopUri>().unwrap(),
            schema_of::<RemoteDesktopService>().unwrap(),
            schema_of::<TerminalServiceClient>().unwrap(),
        ] {
            assert_eq!(schema.primary_field().and_then(|f| f.key), Some("full address"));
        }
        assert!(schema_of::<RemoteDesktopSession>().unwrap().primary_field().is_none());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(TerminalServiceClient::NAME, "TerminalServiceClient");
        assert_eq!(RemoteDesktopUri::NAME, "RemoteDesktopUri");
    }
}

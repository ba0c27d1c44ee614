//! Azure Virtual Desktop settings.

use super::session::{SESSION_FIELDS, SessionFields};
use crate::model::{BINARY_FLAG, FieldDescriptor, PropertySetKind};

pub(crate) const AZURE_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::integer("TargetIsAadJoined", "targetisaadjoined").allowed(BINARY_FLAG),
    FieldDescriptor::text("KdcProxyName", "kdcproxyname"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AzureVirtualDesktop;

impl PropertySetKind for AzureVirtualDesktop {
    const NAME: &'static str = "AzureVirtualDesktop";

    fn fields() -> Vec<FieldDescriptor> {
        [SESSION_FIELDS, AZURE_FIELDS].concat()
    }
}

impl SessionFields for AzureVirtualDesktop {}

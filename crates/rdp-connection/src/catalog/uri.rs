//! Settings accepted by the `rdp://` URI scheme.
//!
//! A separate, smaller table: only the settings the URI handler understands.
//! `full address` is the primary field and is always written first.

use super::{COLOR_DEPTHS, MAX_DESKTOP_SIZE, MIN_DESKTOP_SIZE, SCREEN_MODES};
use super::{ZERO_TO_FOUR, ZERO_TO_THREE, ZERO_TO_TWO};
use crate::model::{BINARY_FLAG, FieldDescriptor, PropertySetKind};

pub(crate) const URI_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::integer("AllowDesktopComposition", "allow desktop composition")
        .allowed(BINARY_FLAG),
    FieldDescriptor::integer("AllowFontSmoothing", "allow font smoothing").allowed(BINARY_FLAG),
    FieldDescriptor::text("AlternateShell", "alternate shell"),
    FieldDescriptor::integer("AudioMode", "audiomode").allowed(ZERO_TO_TWO),
    FieldDescriptor::integer("AuthenticationLevel", "authentication level").allowed(ZERO_TO_THREE),
    FieldDescriptor::integer("ConnectToConsole", "connect to console").allowed(BINARY_FLAG),
    FieldDescriptor::integer("DisableCursorSettings", "disable cursor setting")
        .allowed(BINARY_FLAG),
    FieldDescriptor::integer("DisableFullWindowDrag", "disable full window drag")
        .allowed(BINARY_FLAG),
    FieldDescriptor::integer("DisableMenuAnimations", "disable menu anims").allowed(BINARY_FLAG),
    FieldDescriptor::integer("DisableThemes", "disable themes").allowed(BINARY_FLAG),
    FieldDescriptor::integer("DisableWallpaper", "disable wallpaper").allowed(BINARY_FLAG),
    FieldDescriptor::text("DrivesToRedirect", "drivestoredirect"),
    FieldDescriptor::integer("DesktopHeight", "desktopheight")
        .range(MIN_DESKTOP_SIZE, MAX_DESKTOP_SIZE),
    FieldDescriptor::integer("DesktopWidth", "desktopwidth")
        .range(MIN_DESKTOP_SIZE, MAX_DESKTOP_SIZE),
    FieldDescriptor::text("Domain", "domain"),
    FieldDescriptor::text("FullAddress", "full address").primary(),
    FieldDescriptor::text("GatewayHostName", "gatewayhostname"),
    FieldDescriptor::integer("GatewayUsageMethod", "gatewayusagemethod").allowed(ZERO_TO_FOUR),
    FieldDescriptor::integer("PromptForCredentialsOnClient", "prompt for credentials on client")
        .allowed(BINARY_FLAG),
    FieldDescriptor::text("LoadBalanceInfo", "loadbalanceinfo"),
    FieldDescriptor::integer("RedirectPrinters", "redirectprinters").allowed(BINARY_FLAG),
    FieldDescriptor::text("RemoteApplicationCommandLine", "remoteapplicationcmdline"),
    FieldDescriptor::integer("RemoteApplicationMode", "remoteapplicationmode").allowed(BINARY_FLAG),
    FieldDescriptor::text("ShellWorkingDirectory", "shell working directory"),
    FieldDescriptor::integer("UseRedirectionServerName", "Use redirection server name")
        .allowed(BINARY_FLAG),
    FieldDescriptor::text("Username", "username"),
    FieldDescriptor::integer("ScreenModeId", "screen mode id").allowed(SCREEN_MODES),
    FieldDescriptor::integer("SessionBpp", "session bpp").allowed(COLOR_DEPTHS),
    FieldDescriptor::integer("UseMultipleMonitors", "use multimon").allowed(BINARY_FLAG),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RemoteDesktopUri;

impl PropertySetKind for RemoteDesktopUri {
    const NAME: &'static str = "RemoteDesktopUri";

    fn fields() -> Vec<FieldDescriptor> {
        URI_FIELDS.to_vec()
    }
}

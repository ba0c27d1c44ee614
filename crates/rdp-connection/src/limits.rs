//! Wire-format constants for RDP files and `rdp://` URIs.

/// Type sign for integer values.
pub const TYPE_SIGN_INTEGER: &str = "i";

/// Type sign for text values.
pub const TYPE_SIGN_TEXT: &str = "s";

/// Type sign for byte-array values.
pub const TYPE_SIGN_BYTES: &str = "b";

/// Separator between key, type sign and value on a line.
pub const FIELD_SEPARATOR: char = ':';

/// Scheme prefix for the legacy `rdp://` URI form.
pub const RDP_URI_SCHEME: &str = "rdp://";

/// Separator between URI query fragments.
pub const URI_FRAGMENT_SEPARATOR: char = '&';

/// Line terminator used when writing `.rdp` file text.
pub const LINE_TERMINATOR: &str = "\r\n";

/// Separator for list-valued redirection properties.
pub const LIST_SEPARATOR: char = ';';

/// Separator for comma-delimited values (selected monitors, `winposstr`).
pub const COMMA_SEPARATOR: char = ',';

/// Value of a redirection list meaning "everything".
pub const REDIRECT_ALL: &str = "*";

/// `winposstr` written when no window position is supplied.
pub const DEFAULT_WINDOW_POSITION: &str = "0,3,0,0,800,600";

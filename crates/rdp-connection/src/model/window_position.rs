//! The `winposstr` window placement descriptor.
//!
//! Six comma-separated integers: handle, show state, left, top, right,
//! bottom. Parsing never fails; missing or unparsable parts read as 0.

use std::fmt;

use crate::limits::COMMA_SEPARATOR;

/// Placement of the client window (`WINDOWPOS`-like).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowPosition {
    pub handle: i32,
    /// `SetWindowPos` flag bits.
    pub window_state: i32,
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl WindowPosition {
    pub const NO_SIZE: i32 = 0x0001;
    pub const NO_MOVE: i32 = 0x0002;
    pub const NO_Z_ORDER: i32 = 0x0004;
    pub const NO_REDRAW: i32 = 0x0008;
    pub const NO_ACTIVATE: i32 = 0x0010;
    pub const FRAME_CHANGED: i32 = 0x0020;
    pub const SHOW_WINDOW: i32 = 0x0040;
    pub const HIDE_WINDOW: i32 = 0x0080;
    pub const NO_COPY_BITS: i32 = 0x0100;
    pub const NO_REPOSITION: i32 = 0x0200;
    pub const NO_SEND_CHANGING: i32 = 0x0400;

    /// Parses a `winposstr` expression.
    pub fn parse(expression: &str) -> Self {
        let mut parts = expression
            .split(COMMA_SEPARATOR)
            .filter(|s| !s.is_empty())
            .map(str::trim)
            .map(|s| s.parse::<i32>().unwrap_or(0));
        let mut next = || parts.next().unwrap_or(0);

        Self {
            handle: next(),
            window_state: next(),
            left: next(),
            top: next(),
            right: next(),
            bottom: next(),
        }
    }

    /// Widened to `i64`: any pair of `i32` edges has a representable span.
    pub fn width(&self) -> i64 {
        i64::from(self.right) - i64::from(self.left)
    }

    pub fn height(&self) -> i64 {
        i64::from(self.bottom) - i64::from(self.top)
    }
}

impl fmt::Display for WindowPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.handle, self.window_state, self.left, self.top, self.right, self.bottom
        )
    }
}

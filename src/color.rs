//! Terminal styling using ANSI escape codes.
//!
//! Provides style tokens for actor attribution, info/success lines, and
//! the banner, plus emoji constants used by the demo script.

/// ANSI escape codes
pub mod codes {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";

    // Bright colors (the demo's palette)
    pub const BRIGHT_RED: &str = "\x1b[91m";
    pub const BRIGHT_GREEN: &str = "\x1b[92m";
    pub const BRIGHT_YELLOW: &str = "\x1b[93m";
    pub const BRIGHT_BLUE: &str = "\x1b[94m";
    pub const BRIGHT_MAGENTA: &str = "\x1b[95m";
    pub const BRIGHT_CYAN: &str = "\x1b[96m";
}

use codes::*;

/// A display style token. Actors carry one of these; non-attributed lines
/// use fixed tokens (blue for file changes, green for external actions).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// No styling at all.
    Plain,
    Bold,
    Dim,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
}

impl Style {
    /// The ANSI code for this style. Empty for `Plain`.
    pub fn code(self) -> &'static str {
        match self {
            Self::Plain => "",
            Self::Bold => BOLD,
            Self::Dim => DIM,
            Self::Red => RED,
            Self::Green => GREEN,
            Self::Yellow => YELLOW,
            Self::Blue => BLUE,
            Self::Magenta => MAGENTA,
            Self::Cyan => CYAN,
            Self::BrightRed => BRIGHT_RED,
            Self::BrightGreen => BRIGHT_GREEN,
            Self::BrightYellow => BRIGHT_YELLOW,
            Self::BrightBlue => BRIGHT_BLUE,
            Self::BrightMagenta => BRIGHT_MAGENTA,
            Self::BrightCyan => BRIGHT_CYAN,
        }
    }
}

/// Wrap text in a style's escape codes. `Plain` text passes through.
pub fn paint(style: Style, text: &str) -> String {
    let code = style.code();
    if code.is_empty() {
        text.to_string()
    } else {
        format!("{}{}{}", code, text, RESET)
    }
}

/// Wrap text in bold plus a style's codes. `paint_bold(Style::Plain, _)`
/// gives bold only.
pub fn paint_bold(style: Style, text: &str) -> String {
    format!("{}{}{}{}", BOLD, style.code(), text, RESET)
}

/// Emoji constants for consistent usage
pub mod emoji {
    pub const ROBOT: &str = "🤖";
    pub const BRAIN: &str = "🧠";
    pub const PALETTE: &str = "🎨";
    pub const GEAR: &str = "⚙️";
    pub const SHIELD: &str = "🛡️";
    pub const PAGE: &str = "📄";
    pub const BULB: &str = "💡";
    pub const CHECK: &str = "✅";
}

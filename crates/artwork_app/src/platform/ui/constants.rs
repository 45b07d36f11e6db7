use std::time::Duration;

/// How long to wait for terminal input before polling the engine again.
pub const TICK: Duration = Duration::from_millis(75);

pub const APP_TITLE: &str = "Artwork Browser";

/// Column headers and their share of the table width, in percent.
pub const COLUMNS: [(&str, u16); 6] = [
    ("Title", 20),
    ("Place of Origin", 20),
    ("Artist", 20),
    ("Inscriptions", 20),
    ("Date Start", 10),
    ("Date End", 10),
];

pub const CHECKBOX_WIDTH: u16 = 3;
pub const OVERLAY_WIDTH: u16 = 44;
pub const OVERLAY_HEIGHT: u16 = 7;

pub const KEY_HINTS: [(&str, &str); 11] = [
    ("←/→", "page"),
    ("Home/End", "first/last"),
    ("↑/↓", "row"),
    ("Space", "check"),
    ("a", "check page"),
    ("n", "select records"),
    ("c", "clear"),
    ("m", "mode"),
    ("s", "rows"),
    ("r", "reload"),
    ("q", "quit"),
];

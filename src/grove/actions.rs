//! Semantic action IDs for Study Grove click targets.

// ── Character select overlay ─────────────────────────────────
pub const SELECT_CHARACTER_BASE: u16 = 10; // +index 0..3

// ── Main screen ──────────────────────────────────────────────
pub const START_STUDY: u16 = 20;
pub const MINUTES_UP: u16 = 21;
pub const MINUTES_DOWN: u16 = 22;
pub const OPEN_SHOP: u16 = 23;
pub const TOGGLE_VIEW: u16 = 24;
pub const FEED_PET: u16 = 25;
pub const ZOOM_IN: u16 = 26;
pub const ZOOM_OUT: u16 = 27;

// ── Shop overlay ─────────────────────────────────────────────
pub const BUY_ITEM_BASE: u16 = 40; // +catalog index 0..6
pub const CLOSE_SHOP: u16 = 60;

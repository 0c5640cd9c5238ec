//! Layout dimension constants for TUI rendering.

/// Height of the header bar in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the search box (border + text).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the filter row on the catalog screen.
pub const FILTER_ROW_HEIGHT: u16 = 1;

/// Lines per result card: title, description, chips and benefit, separator.
pub const CARD_HEIGHT: u16 = 4;

/// Placeholder cards drawn while a fresh search is loading.
pub const SKELETON_CARDS: usize = 3;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Event poll interval. Bounds how long a finished fetch waits before it is drawn.
pub const TICK_MILLIS: u64 = 100;

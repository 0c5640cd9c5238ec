//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Navigation between screens
    /// Home screen with the featured scholarships. Default: 1
    GoHome,
    /// Scholarship catalog. Default: 2
    GoScholarships,
    /// News headlines. Default: 3
    GoNews,
    /// About page. Default: 4
    GoAbout,
    /// Privacy policy. Default: 5
    GoPrivacy,
    /// Terms of service. Default: 6
    GoTerms,
    /// Cookie policy. Default: 7
    GoCookies,
    /// Leave the detail view or close the help overlay. Default: Esc
    Back,

    // Selection / scrolling
    /// Move selection or scroll up. Default: k/↑
    MoveUp,
    /// Move selection or scroll down. Default: j/↓
    MoveDown,
    /// Open the selected card. Default: Enter
    OpenSelected,

    // Catalog query
    /// Start editing the search text. Default: /
    StartSearch,
    /// Cycle the degree level filter. Default: d
    CycleDegree,
    /// Cycle the host country filter. Default: c
    CycleCountry,
    /// Cycle the financial benefit filter. Default: b
    CycleBenefit,
    /// Clear every filter. Default: x
    ClearFilters,
    /// Load the next page of results. Default: m
    LoadMore,
    /// Retry whatever failed on the current screen. Default: r
    Refresh,

    // Application
    /// Switch between dark and light palettes. Default: t
    ToggleTheme,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Screen-switching actions in number-key order.
    pub const SCREENS: [KeyAction; 7] = [
        KeyAction::GoHome,
        KeyAction::GoScholarships,
        KeyAction::GoNews,
        KeyAction::GoAbout,
        KeyAction::GoPrivacy,
        KeyAction::GoTerms,
        KeyAction::GoCookies,
    ];

    /// True for the filter actions that submit a new catalog search.
    pub fn changes_filters(self) -> bool {
        matches!(
            self,
            KeyAction::CycleDegree
                | KeyAction::CycleCountry
                | KeyAction::CycleBenefit
                | KeyAction::ClearFilters
        )
    }
}

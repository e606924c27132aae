use crate::domain::Earthquake;

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    NavigateUp,
    NavigateDown,
    NavigateTop,
    NavigateBottom,
    PageUp,
    PageDown,
    Select,
    Back,

    // Vim chord
    EnterPendingG,

    // UI
    ToggleHelp,

    // Data responses
    QuakesLoaded {
        request_id: u64,
        quakes: Vec<Earthquake>,
    },
    Offline {
        request_id: u64,
    },

    // App control
    Refresh,
    Quit,
    Tick,
    Error(String),
    ClearError,
}

use std::time::{Duration, Instant};

use ratatui::widgets::TableState;

use crate::action::Action;
use crate::domain::Earthquake;

const ERROR_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    PendingG,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    NotLoaded,
    Loading,
    Loaded(T),
    Offline,
}

impl<T> LoadState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadQuakes { request_id: u64 },
    OpenUrl(String),
    Quit,
}

pub struct App {
    pub input_mode: InputMode,
    pub overlay: Overlay,

    /// Human readable description of the active query.
    pub feed_label: String,

    pub quakes: LoadState<Vec<Earthquake>>,
    pub table_state: TableState,

    /// Id of the fetch whose result will be accepted; older ones are stale.
    pub pending_request: Option<u64>,
    next_request_id: u64,
    pub last_refresh: Option<Instant>,

    pub should_quit: bool,
    pub last_error: Option<(String, Instant)>,
}

impl App {
    pub fn new(feed_label: String) -> Self {
        Self {
            input_mode: InputMode::Normal,
            overlay: Overlay::None,

            feed_label,

            quakes: LoadState::NotLoaded,
            table_state: TableState::default(),

            pending_request: None,
            next_request_id: 1,
            last_refresh: None,

            should_quit: false,
            last_error: None,
        }
    }

    pub fn update(&mut self, action: Action) -> Vec<Effect> {
        if let Some((_, at)) = &self.last_error {
            if at.elapsed() > ERROR_TTL {
                self.last_error = None;
            }
        }

        match action {
            // Navigation
            Action::NavigateUp => {
                self.navigate_up();
                vec![]
            }
            Action::NavigateDown => {
                self.navigate_down();
                vec![]
            }
            Action::NavigateTop => {
                self.input_mode = InputMode::Normal;
                if self.quake_count() > 0 {
                    self.table_state.select_first();
                }
                vec![]
            }
            Action::NavigateBottom => {
                let len = self.quake_count();
                if len > 0 {
                    self.table_state.select(Some(len - 1));
                }
                vec![]
            }
            Action::PageUp => {
                for _ in 0..self.page_height() {
                    self.navigate_up();
                }
                vec![]
            }
            Action::PageDown => {
                for _ in 0..self.page_height() {
                    self.navigate_down();
                }
                vec![]
            }
            Action::Select => self.open_selected(),
            Action::Back => {
                self.input_mode = InputMode::Normal;
                vec![]
            }

            Action::EnterPendingG => {
                self.input_mode = InputMode::PendingG;
                vec![]
            }

            // UI
            Action::ToggleHelp => {
                self.overlay = if self.overlay == Overlay::Help {
                    Overlay::None
                } else {
                    Overlay::Help
                };
                vec![]
            }

            // Data responses
            Action::QuakesLoaded { request_id, quakes } => {
                if !self.accept(request_id) {
                    return vec![];
                }
                let len = quakes.len();
                self.quakes = LoadState::Loaded(quakes);
                self.last_refresh = Some(Instant::now());
                match self.table_state.selected() {
                    _ if len == 0 => self.table_state.select(None),
                    Some(idx) if idx >= len => self.table_state.select(Some(len - 1)),
                    Some(_) => {}
                    None => self.table_state.select_first(),
                }
                vec![]
            }
            Action::Offline { request_id } => {
                if !self.accept(request_id) {
                    return vec![];
                }
                self.quakes = LoadState::Offline;
                self.table_state.select(None);
                vec![]
            }

            // App control
            Action::Refresh => self.refresh(),
            Action::Quit => {
                self.should_quit = true;
                vec![Effect::Quit]
            }
            Action::Tick => vec![],
            Action::Error(msg) => {
                self.last_error = Some((msg, Instant::now()));
                vec![]
            }
            Action::ClearError => {
                self.last_error = None;
                vec![]
            }
        }
    }

    /// Issues a new load. Any fetch still in flight becomes stale.
    pub fn refresh(&mut self) -> Vec<Effect> {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.pending_request = Some(request_id);
        if !matches!(self.quakes, LoadState::Loaded(_)) {
            self.quakes = LoadState::Loading;
        }
        vec![Effect::LoadQuakes { request_id }]
    }

    pub fn is_refreshing(&self) -> bool {
        self.pending_request.is_some()
    }

    pub fn selected_quake(&self) -> Option<&Earthquake> {
        let idx = self.table_state.selected()?;
        self.quakes.data()?.get(idx)
    }

    pub fn quake_count(&self) -> usize {
        self.quakes.data().map(Vec::len).unwrap_or(0)
    }

    fn accept(&mut self, request_id: u64) -> bool {
        if self.pending_request != Some(request_id) {
            tracing::debug!(request_id, pending = ?self.pending_request, "dropping stale feed result");
            return false;
        }
        self.pending_request = None;
        true
    }

    fn open_selected(&mut self) -> Vec<Effect> {
        let Some(quake) = self.selected_quake() else {
            return vec![];
        };
        if quake.detail_url.is_empty() {
            self.last_error = Some((
                "no detail page for this event".to_string(),
                Instant::now(),
            ));
            return vec![];
        }
        vec![Effect::OpenUrl(quake.detail_url.clone())]
    }

    fn navigate_up(&mut self) {
        if let Some(selected) = self.table_state.selected() {
            if selected > 0 {
                self.table_state.select(Some(selected - 1));
            }
        }
    }

    fn navigate_down(&mut self) {
        let len = self.quake_count();
        if len == 0 {
            return;
        }
        match self.table_state.selected() {
            Some(selected) if selected + 1 < len => self.table_state.select(Some(selected + 1)),
            Some(_) => {}
            None => self.table_state.select_first(),
        }
    }

    fn page_height(&self) -> usize {
        10
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quake(place: &str, url: &str) -> Earthquake {
        Earthquake::new(6.2, place, 1_700_000_000_000, url)
    }

    fn loaded_app(count: usize) -> App {
        let mut app = App::new("M6+ · last 20".to_string());
        let effects = app.refresh();
        let Effect::LoadQuakes { request_id } = effects[0] else {
            panic!("expected load effect");
        };
        let quakes = (0..count)
            .map(|i| quake(&format!("{i}km N of Town"), &format!("https://example.test/{i}")))
            .collect();
        app.update(Action::QuakesLoaded { request_id, quakes });
        app
    }

    #[test]
    fn refresh_issues_increasing_request_ids() {
        let mut app = App::new(String::new());
        assert_eq!(app.refresh(), vec![Effect::LoadQuakes { request_id: 1 }]);
        assert!(app.quakes.is_loading());
        assert_eq!(app.refresh(), vec![Effect::LoadQuakes { request_id: 2 }]);
        assert_eq!(app.pending_request, Some(2));
    }

    #[test]
    fn loaded_result_replaces_list_and_selects_first() {
        let app = loaded_app(3);
        assert_eq!(app.quake_count(), 3);
        assert_eq!(app.table_state.selected(), Some(0));
        assert!(!app.is_refreshing());
        assert!(app.last_refresh.is_some());
    }

    #[test]
    fn stale_result_is_ignored() {
        let mut app = App::new(String::new());
        app.refresh();
        app.refresh();

        app.update(Action::QuakesLoaded {
            request_id: 1,
            quakes: vec![quake("old", "u")],
        });
        assert!(app.quakes.is_loading());

        app.update(Action::QuakesLoaded {
            request_id: 2,
            quakes: vec![quake("new", "u"), quake("newer", "u")],
        });
        assert_eq!(app.quake_count(), 2);
        assert_eq!(app.selected_quake().map(|q| q.location.as_str()), Some("new"));

        // A late duplicate of the accepted id changes nothing.
        app.update(Action::QuakesLoaded {
            request_id: 2,
            quakes: vec![],
        });
        assert_eq!(app.quake_count(), 2);
    }

    #[test]
    fn reload_keeps_list_visible_and_clamps_selection() {
        let mut app = loaded_app(5);
        app.update(Action::NavigateBottom);
        assert_eq!(app.table_state.selected(), Some(4));

        let Effect::LoadQuakes { request_id } = app.refresh()[0] else {
            panic!("expected load effect");
        };
        assert_eq!(app.quake_count(), 5);
        assert!(app.is_refreshing());

        app.update(Action::QuakesLoaded {
            request_id,
            quakes: vec![quake("a", "u"), quake("b", "u")],
        });
        assert_eq!(app.table_state.selected(), Some(1));
    }

    #[test]
    fn empty_result_clears_selection() {
        let mut app = loaded_app(2);
        let Effect::LoadQuakes { request_id } = app.refresh()[0] else {
            panic!("expected load effect");
        };
        app.update(Action::QuakesLoaded {
            request_id,
            quakes: vec![],
        });
        assert_eq!(app.quakes, LoadState::Loaded(vec![]));
        assert_eq!(app.table_state.selected(), None);
        assert!(app.update(Action::Select).is_empty());
    }

    #[test]
    fn offline_result_replaces_list() {
        let mut app = loaded_app(2);
        let Effect::LoadQuakes { request_id } = app.refresh()[0] else {
            panic!("expected load effect");
        };
        app.update(Action::Offline { request_id });
        assert_eq!(app.quakes, LoadState::Offline);
        assert_eq!(app.quake_count(), 0);
    }

    #[test]
    fn navigation_stays_in_bounds() {
        let mut app = loaded_app(3);
        app.update(Action::NavigateUp);
        assert_eq!(app.table_state.selected(), Some(0));
        app.update(Action::PageDown);
        assert_eq!(app.table_state.selected(), Some(2));
        app.update(Action::NavigateDown);
        assert_eq!(app.table_state.selected(), Some(2));
        app.update(Action::EnterPendingG);
        assert_eq!(app.input_mode, InputMode::PendingG);
        app.update(Action::NavigateTop);
        assert_eq!(app.table_state.selected(), Some(0));
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn select_opens_detail_url() {
        let mut app = loaded_app(2);
        app.update(Action::NavigateDown);
        assert_eq!(
            app.update(Action::Select),
            vec![Effect::OpenUrl("https://example.test/1".to_string())]
        );
    }

    #[test]
    fn select_without_url_reports_error() {
        let mut app = App::new(String::new());
        let Effect::LoadQuakes { request_id } = app.refresh()[0] else {
            panic!("expected load effect");
        };
        app.update(Action::QuakesLoaded {
            request_id,
            quakes: vec![quake("Example City", "")],
        });
        assert!(app.update(Action::Select).is_empty());
        assert!(app.last_error.is_some());
        app.update(Action::ClearError);
        assert!(app.last_error.is_none());
    }

    #[test]
    fn help_toggles_and_quit_sets_flag() {
        let mut app = App::new(String::new());
        app.update(Action::ToggleHelp);
        assert_eq!(app.overlay, Overlay::Help);
        app.update(Action::ToggleHelp);
        assert_eq!(app.overlay, Overlay::None);
        assert_eq!(app.update(Action::Quit), vec![Effect::Quit]);
        assert!(app.should_quit);
    }
}

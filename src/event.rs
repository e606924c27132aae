use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use tokio::sync::mpsc;

use crate::action::Action;
use crate::app::{InputMode, Overlay};

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
}

/// Forwards terminal key presses and a periodic tick over a channel.
pub struct RawEventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl RawEventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut tick = tokio::time::interval(tick_rate);

            loop {
                tokio::select! {
                    _ = tick.tick() => {
                        if tx.send(AppEvent::Tick).is_err() {
                            break;
                        }
                    }
                    event = reader.next() => {
                        match event {
                            Some(Ok(Event::Key(key))) if key.kind != KeyEventKind::Release => {
                                if tx.send(AppEvent::Key(key)).is_err() {
                                    break;
                                }
                            }
                            Some(Ok(_)) => {}
                            Some(Err(_)) | None => break,
                        }
                    }
                }
            }
        });

        Self { rx }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}

/// Map a key event to an action based on current app state
pub fn key_to_action(key: KeyEvent, input_mode: &InputMode, overlay: &Overlay) -> Option<Action> {
    if let Overlay::Help = overlay {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Some(Action::ToggleHelp),
            _ => None,
        };
    }

    if let InputMode::PendingG = input_mode {
        return match key.code {
            KeyCode::Char('g') => Some(Action::NavigateTop),
            _ => Some(Action::Back),
        };
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Refresh),
            KeyCode::Char('d') => Some(Action::PageDown),
            KeyCode::Char('u') => Some(Action::PageUp),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::NavigateDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::NavigateUp),
        KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::Home => Some(Action::NavigateTop),
        KeyCode::End | KeyCode::Char('G') => Some(Action::NavigateBottom),
        KeyCode::Char('g') => Some(Action::EnterPendingG),
        KeyCode::Enter | KeyCode::Char('o') => Some(Action::Select),
        KeyCode::Esc => Some(Action::ClearError),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn normal(event: KeyEvent) -> Option<Action> {
        key_to_action(event, &InputMode::Normal, &Overlay::None)
    }

    #[test]
    fn normal_mode_bindings() {
        assert!(matches!(normal(key(KeyCode::Char('j'))), Some(Action::NavigateDown)));
        assert!(matches!(normal(key(KeyCode::Up)), Some(Action::NavigateUp)));
        assert!(matches!(normal(key(KeyCode::Char('G'))), Some(Action::NavigateBottom)));
        assert!(matches!(normal(key(KeyCode::Char('g'))), Some(Action::EnterPendingG)));
        assert!(matches!(normal(key(KeyCode::Enter)), Some(Action::Select)));
        assert!(matches!(normal(key(KeyCode::Char('o'))), Some(Action::Select)));
        assert!(matches!(normal(key(KeyCode::Char('r'))), Some(Action::Refresh)));
        assert!(matches!(normal(key(KeyCode::Char('q'))), Some(Action::Quit)));
        assert!(normal(key(KeyCode::Char('x'))).is_none());
    }

    #[test]
    fn control_bindings() {
        assert!(matches!(normal(ctrl('c')), Some(Action::Quit)));
        assert!(matches!(normal(ctrl('r')), Some(Action::Refresh)));
        assert!(matches!(normal(ctrl('d')), Some(Action::PageDown)));
        assert!(normal(ctrl('x')).is_none());
    }

    #[test]
    fn pending_g_completes_or_cancels() {
        let pending = InputMode::PendingG;
        assert!(matches!(
            key_to_action(key(KeyCode::Char('g')), &pending, &Overlay::None),
            Some(Action::NavigateTop)
        ));
        assert!(matches!(
            key_to_action(key(KeyCode::Char('j')), &pending, &Overlay::None),
            Some(Action::Back)
        ));
    }

    #[test]
    fn help_overlay_swallows_other_keys() {
        let help = Overlay::Help;
        assert!(matches!(
            key_to_action(key(KeyCode::Esc), &InputMode::Normal, &help),
            Some(Action::ToggleHelp)
        ));
        assert!(key_to_action(key(KeyCode::Char('j')), &InputMode::Normal, &help).is_none());
    }
}

//! Key event handlers for each view
//!
//! Keys either mutate local-only state directly (text input, list cursor) or
//! translate into a semantic [`Message`] for `update()` to process.

use fguard_core::{SiteCategory, PRESET_CATEGORIES, TIMER_PRESETS};

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, BlocklistInput, Tab};

/// Translate a key press into an optional follow-up message.
pub(crate) fn handle_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    // Url editing captures everything except its own exit keys.
    if state.active_tab == Tab::Blocklist && state.blocklist.input == BlocklistInput::EditingUrl {
        return handle_url_input(state, key);
    }

    // Global keys
    match key {
        InputKey::CharCtrl('c') | InputKey::Char('q') => return Some(Message::Quit),
        InputKey::Tab | InputKey::Right => {
            return Some(Message::SwitchTab(state.active_tab.next()))
        }
        InputKey::BackTab | InputKey::Left => {
            return Some(Message::SwitchTab(state.active_tab.prev()))
        }
        _ => {}
    }

    match state.active_tab {
        Tab::Timer => handle_timer_key(state, key),
        Tab::Blocklist => handle_blocklist_key(state, key),
        Tab::Analytics => None,
    }
}

fn handle_timer_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    match key {
        // Preset selection only makes sense while idle; the buttons are
        // hidden during a session.
        InputKey::Char(c @ '1'..='9') if !state.timer.is_running() => {
            let index = (c as usize) - ('1' as usize);
            let preset = TIMER_PRESETS.get(index)?;
            Some(Message::StartSession {
                minutes: preset.minutes,
                mode: preset.mode.clone(),
            })
        }
        InputKey::Char('s') if state.timer.is_running() => {
            Some(Message::StopSession { completed: false })
        }
        _ => None,
    }
}

fn handle_blocklist_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('a') | InputKey::Char('/') => {
            state.blocklist.input = BlocklistInput::EditingUrl;
            None
        }
        InputKey::Up | InputKey::Char('k') => {
            state.blocklist.select_prev();
            None
        }
        InputKey::Down | InputKey::Char('j') => {
            state.blocklist.select_next();
            None
        }
        InputKey::Char('d') | InputKey::Delete => Some(Message::RemoveSelectedSite),
        InputKey::Char('r') => Some(Message::ReloadBlocklist),
        InputKey::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            let category: &SiteCategory = PRESET_CATEGORIES.get(index)?;
            Some(Message::AddPreset(category.clone()))
        }
        _ => None,
    }
}

fn handle_url_input(state: &mut AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) => {
            state.blocklist.url_buffer.push(c);
            None
        }
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Backspace => {
            state.blocklist.url_buffer.pop();
            None
        }
        InputKey::Enter => Some(Message::SubmitUrl),
        InputKey::Esc => {
            state.blocklist.input = BlocklistInput::Normal;
            None
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fguard_core::FocusMode;

    #[test]
    fn test_digit_starts_preset_when_idle() {
        let mut state = AppState::default();
        let msg = handle_key(&mut state, InputKey::Char('1'));
        assert!(matches!(
            msg,
            Some(Message::StartSession {
                minutes: 25,
                mode: FocusMode::Pomodoro
            })
        ));
        let msg = handle_key(&mut state, InputKey::Char('3'));
        assert!(matches!(
            msg,
            Some(Message::StartSession {
                minutes: 90,
                mode: FocusMode::Deepwork
            })
        ));
    }

    #[test]
    fn test_out_of_range_digit_is_ignored() {
        let mut state = AppState::default();
        assert!(handle_key(&mut state, InputKey::Char('7')).is_none());
    }

    #[test]
    fn test_stop_key_requires_running_session() {
        let mut state = AppState::default();
        assert!(handle_key(&mut state, InputKey::Char('s')).is_none());

        state.timer.phase = crate::state::TimerPhase::Running {
            mode: FocusMode::Quick,
            duration_secs: 900,
            remaining_secs: 900,
            stopping: false,
        };
        assert!(matches!(
            handle_key(&mut state, InputKey::Char('s')),
            Some(Message::StopSession { completed: false })
        ));
    }

    #[test]
    fn test_tab_key_cycles_tabs() {
        let mut state = AppState::default();
        assert!(matches!(
            handle_key(&mut state, InputKey::Tab),
            Some(Message::SwitchTab(Tab::Blocklist))
        ));
        assert!(matches!(
            handle_key(&mut state, InputKey::BackTab),
            Some(Message::SwitchTab(Tab::Analytics))
        ));
    }

    #[test]
    fn test_url_input_captures_characters() {
        let mut state = AppState::default();
        state.active_tab = Tab::Blocklist;
        handle_key(&mut state, InputKey::Char('a'));
        assert_eq!(state.blocklist.input, BlocklistInput::EditingUrl);

        for c in "x.com".chars() {
            handle_key(&mut state, InputKey::Char(c));
        }
        assert_eq!(state.blocklist.url_buffer, "x.com");

        handle_key(&mut state, InputKey::Backspace);
        assert_eq!(state.blocklist.url_buffer, "x.co");

        assert!(matches!(
            handle_key(&mut state, InputKey::Enter),
            Some(Message::SubmitUrl)
        ));
    }

    #[test]
    fn test_esc_leaves_url_input() {
        let mut state = AppState::default();
        state.active_tab = Tab::Blocklist;
        state.blocklist.input = BlocklistInput::EditingUrl;
        handle_key(&mut state, InputKey::Esc);
        assert_eq!(state.blocklist.input, BlocklistInput::Normal);
    }

    #[test]
    fn test_q_does_not_quit_while_typing() {
        let mut state = AppState::default();
        state.active_tab = Tab::Blocklist;
        state.blocklist.input = BlocklistInput::EditingUrl;
        assert!(handle_key(&mut state, InputKey::Char('q')).is_none());
        assert_eq!(state.blocklist.url_buffer, "q");
        // Ctrl+C still works
        assert!(matches!(
            handle_key(&mut state, InputKey::CharCtrl('c')),
            Some(Message::Quit)
        ));
    }

    #[test]
    fn test_blocklist_digits_map_to_preset_categories() {
        let mut state = AppState::default();
        state.active_tab = Tab::Blocklist;
        assert!(matches!(
            handle_key(&mut state, InputKey::Char('1')),
            Some(Message::AddPreset(SiteCategory::SocialMedia))
        ));
        assert!(matches!(
            handle_key(&mut state, InputKey::Char('3')),
            Some(Message::AddPreset(SiteCategory::Entertainment))
        ));
        assert!(handle_key(&mut state, InputKey::Char('4')).is_none());
    }
}

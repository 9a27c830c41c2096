//! Key-event to intent mapping.
//!
//! # Responsibility
//! - Route key presses by page state: modal first, then editor, then the
//!   focused widget.
//!
//! # Invariants
//! - While the confirmation prompt is shown, no key reaches the list or
//!   the editor.
//! - While an editor is open, list navigation keys are captured by the
//!   edit form.

use crate::app::{App, EditField, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use starbook_core::LoadPhase;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    if !matches!(app.store.phase(), LoadPhase::Ready) {
        // Loading and error pages only accept leaving.
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            app.quit();
        }
        return;
    }

    if app.coordinator.pending_delete().is_some() {
        handle_confirm_key(app, key);
        return;
    }

    if app.coordinator.is_editing() {
        handle_edit_key(app, key);
        return;
    }

    match app.focus {
        Focus::Search => handle_search_key(app, key),
        Focus::List => handle_list_key(app, key),
    }
}

fn handle_confirm_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('y') => app.confirm_delete(),
        KeyCode::Esc | KeyCode::Char('n') => app.cancel_delete(),
        _ => {}
    }
}

fn handle_edit_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
        app.save_edit();
        return;
    }

    match key.code {
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Tab => app.edit_field = app.edit_field.next(),
        _ => match app.edit_field {
            EditField::Gender => match key.code {
                KeyCode::Left => app.coordinator.cycle_gender(false),
                KeyCode::Right => app.coordinator.cycle_gender(true),
                _ => {}
            },
            EditField::Country => match key.code {
                KeyCode::Char(ch) => {
                    app.coordinator.country_input(ch);
                }
                KeyCode::Backspace => app.coordinator.country_backspace(),
                _ => {}
            },
            EditField::Description => match key.code {
                KeyCode::Char(ch) => app.coordinator.description_input(ch),
                KeyCode::Enter => app.coordinator.description_input('\n'),
                KeyCode::Backspace => app.coordinator.description_backspace(),
                _ => {}
            },
        },
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.focus = Focus::List,
        KeyCode::Backspace => app.search_backspace(),
        KeyCode::Char(ch) => app.search_input(ch),
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.move_up(),
        KeyCode::Down => app.move_down(),
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected(),
        KeyCode::Char('e') => app.begin_edit_selected(),
        KeyCode::Char('d') => app.request_delete_selected(),
        KeyCode::Char('/') => app.focus = Focus::Search,
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::handle_key;
    use crate::app::{App, Focus};
    use chrono::NaiveDate;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use starbook_core::{CelebritySeed, CelebritySource, FetchResult, Gender, PanelPhase};

    struct StaticSource(Vec<CelebritySeed>);

    impl CelebritySource for StaticSource {
        fn fetch(&self) -> FetchResult {
            Ok(self.0.clone())
        }
    }

    fn seed(id: i64, first: &str, dob_year: i32) -> CelebritySeed {
        CelebritySeed {
            id,
            first: first.to_string(),
            last: "Lee".to_string(),
            dob: NaiveDate::from_ymd_opt(dob_year, 1, 1).unwrap(),
            gender: Gender::Female,
            country: "USA".to_string(),
            description: "x".to_string(),
        }
    }

    fn loaded_app() -> App {
        let mut app = App::new();
        app.store.load(
            &StaticSource(vec![seed(1, "Ann", 1990), seed(2, "Kid", 2010)]),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        );
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn press_ctrl(app: &mut App, ch: char) {
        handle_key(app, KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL));
    }

    #[test]
    fn q_quits_from_the_list() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn slash_focuses_search_and_chars_feed_the_query() {
        let mut app = loaded_app();

        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.focus, Focus::Search);

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.search, "an");

        // `q` is query text while search is focused, not quit.
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.search, "anq");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focus, Focus::List);
    }

    #[test]
    fn enter_toggles_and_e_starts_editing_an_adult() {
        let mut app = loaded_app();

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.coordinator.panel_phase(1), PanelPhase::View);

        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.coordinator.panel_phase(1), PanelPhase::Edit);
    }

    #[test]
    fn e_is_a_noop_on_a_minor() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.coordinator.panel_phase(2), PanelPhase::View);
    }

    #[test]
    fn edit_keys_drive_the_draft_and_ctrl_s_saves() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('e'));

        // Gender field first; cycle once.
        press(&mut app, KeyCode::Right);
        assert!(app.coordinator.save_allowed(&app.store));

        press_ctrl(&mut app, 's');
        assert_eq!(app.coordinator.panel_phase(1), PanelPhase::View);
        assert_eq!(app.store.get(1).unwrap().gender, Gender::Transgender);
    }

    #[test]
    fn country_field_drops_rejected_characters() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Tab);

        press(&mut app, KeyCode::Char('7'));
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.coordinator.draft().unwrap().country, "USAx");
    }

    #[test]
    fn esc_cancels_the_editor_without_committing() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Right);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.coordinator.panel_phase(1), PanelPhase::View);
        assert_eq!(app.store.get(1).unwrap().gender, Gender::Female);
    }

    #[test]
    fn confirm_prompt_swallows_other_keys() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.coordinator.pending_delete(), Some(1));

        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.coordinator.pending_delete(), Some(1));
        assert_eq!(app.cursor, 0);

        press(&mut app, KeyCode::Enter);
        assert!(app.store.get(1).is_none());
        assert_eq!(app.coordinator.pending_delete(), None);
    }

    #[test]
    fn delete_can_be_dismissed_without_effect() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.coordinator.pending_delete(), None);
        assert_eq!(app.store.celebrities().len(), 2);
    }
}

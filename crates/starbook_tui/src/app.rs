//! Session state behind the terminal frontend.
//!
//! # Responsibility
//! - Own the store, the browse coordinator and the local input state
//!   (search text, list cursor, focused edit field).
//! - Apply intents as plain method calls so transitions stay testable
//!   without a terminal.
//!
//! # Invariants
//! - The startup load is attempted on the first tick only, so the loading
//!   frame is drawn at least once before any fetch work happens.
//! - The cursor always points into the currently visible subset.

use chrono::NaiveDate;
use starbook_core::{
    filter_by_name, BrowseCoordinator, Celebrity, CelebrityId, CelebrityStore, JsonFileSource,
    LoadPhase,
};

/// Which editable field receives input while an editor is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Gender,
    Country,
    Description,
}

impl EditField {
    /// Tab order: gender, country, description, wrap.
    pub fn next(self) -> Self {
        match self {
            Self::Gender => Self::Country,
            Self::Country => Self::Description,
            Self::Description => Self::Gender,
        }
    }
}

/// Input focus of the loaded page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Search,
}

/// Top-level application state.
pub struct App {
    pub store: CelebrityStore,
    pub coordinator: BrowseCoordinator,
    pub search: String,
    pub focus: Focus,
    pub cursor: usize,
    pub edit_field: EditField,
    pub should_quit: bool,
    load_attempted: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            store: CelebrityStore::new(),
            coordinator: BrowseCoordinator::new(),
            search: String::new(),
            focus: Focus::List,
            cursor: 0,
            edit_field: EditField::Gender,
            should_quit: false,
            load_attempted: false,
        }
    }

    /// Performs the one-time startup load on the first tick.
    pub fn tick(&mut self, today: NaiveDate) {
        if self.load_attempted || !matches!(self.store.phase(), LoadPhase::Loading) {
            return;
        }
        self.load_attempted = true;
        self.store.load(&JsonFileSource::default(), today);
    }

    /// The subset the search query keeps visible, in roster order.
    pub fn visible(&self) -> Vec<&Celebrity> {
        filter_by_name(self.store.celebrities(), &self.search)
    }

    /// Identifier under the cursor, if the visible subset is non-empty.
    pub fn selected_id(&self) -> Option<CelebrityId> {
        self.visible().get(self.cursor).map(|record| record.id)
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let len = self.visible().len();
        if len > 0 && self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Expands or collapses the panel under the cursor.
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.coordinator.toggle(id);
        }
    }

    /// Starts editing the record under the cursor, if permitted.
    pub fn begin_edit_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        if let Some(record) = self.store.get(id) {
            if self.coordinator.begin_edit(record) {
                self.edit_field = EditField::Gender;
            }
        }
    }

    /// Opens the delete confirmation for the record under the cursor.
    pub fn request_delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.coordinator.request_delete(id);
        }
    }

    pub fn save_edit(&mut self) {
        self.coordinator.save_edit(&mut self.store);
    }

    pub fn cancel_edit(&mut self) {
        self.coordinator.cancel_edit();
    }

    pub fn confirm_delete(&mut self) {
        self.coordinator.confirm_delete(&mut self.store);
        self.clamp_cursor();
    }

    pub fn cancel_delete(&mut self) {
        self.coordinator.cancel_delete();
    }

    pub fn search_input(&mut self, ch: char) {
        self.search.push(ch);
        self.cursor = 0;
    }

    pub fn search_backspace(&mut self) {
        self.search.pop();
        self.clamp_cursor();
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

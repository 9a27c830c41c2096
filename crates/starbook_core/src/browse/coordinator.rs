//! Panel, edit and delete-confirmation state machines.
//!
//! # Responsibility
//! - Track which panel is expanded, which record (if any) is being edited,
//!   and which delete is awaiting confirmation.
//! - Funnel every committed intent into the store's two operations.
//!
//! # Invariants
//! - The single optional `EditSession` is what makes "at most one editor"
//!   structurally true rather than a runtime check.
//! - `begin_edit` is refused for records with derived `age < 18`.
//! - Refused transitions are silent no-ops toward the caller; the refusal
//!   reason goes to the log.

use crate::model::celebrity::{
    is_valid_country, Celebrity, CelebrityId, CelebrityPatch, Gender,
};
use crate::store::celebrity_store::CelebrityStore;
use log::{debug, info};

/// Expansion/edit phase of one record's details panel.
///
/// Derived from coordinator fields on demand; no per-record state is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPhase {
    Collapsed,
    /// Expanded, read-only.
    View,
    /// Expanded with an uncommitted draft.
    Edit,
}

/// Transient uncommitted copy of the editable fields.
///
/// Discarded on cancel, turned into a [`CelebrityPatch`] on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub gender: Gender,
    pub country: String,
    pub description: String,
}

impl EditDraft {
    /// Seeds a draft from the stored record.
    pub fn from_record(record: &Celebrity) -> Self {
        Self {
            gender: record.gender,
            country: record.country.clone(),
            description: record.description.clone(),
        }
    }

    /// Whether any editable field differs from the stored record.
    pub fn differs_from(&self, record: &Celebrity) -> bool {
        self.gender != record.gender
            || self.country != record.country
            || self.description != record.description
    }

    /// Builds a patch naming exactly the fields that changed.
    pub fn as_patch(&self, record: &Celebrity) -> CelebrityPatch {
        CelebrityPatch {
            gender: (self.gender != record.gender).then_some(self.gender),
            country: (self.country != record.country).then(|| self.country.clone()),
            description: (self.description != record.description)
                .then(|| self.description.clone()),
        }
    }
}

#[derive(Debug)]
struct EditSession {
    id: CelebrityId,
    draft: EditDraft,
}

/// Session-wide browse state: open panel, editor, pending delete.
#[derive(Debug, Default)]
pub struct BrowseCoordinator {
    open: Option<CelebrityId>,
    editor: Option<EditSession>,
    pending_delete: Option<CelebrityId>,
}

impl BrowseCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently expanded panel, if any.
    pub fn open(&self) -> Option<CelebrityId> {
        self.open
    }

    /// The record currently being edited, if any.
    pub fn editing(&self) -> Option<CelebrityId> {
        self.editor.as_ref().map(|session| session.id)
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    /// The delete awaiting confirmation, if the prompt is shown.
    pub fn pending_delete(&self) -> Option<CelebrityId> {
        self.pending_delete
    }

    /// Current panel phase for one record.
    pub fn panel_phase(&self, id: CelebrityId) -> PanelPhase {
        if self.editing() == Some(id) {
            PanelPhase::Edit
        } else if self.open == Some(id) {
            PanelPhase::View
        } else {
            PanelPhase::Collapsed
        }
    }

    /// Read access to the live draft.
    pub fn draft(&self) -> Option<&EditDraft> {
        self.editor.as_ref().map(|session| &session.draft)
    }

    /// Opens a collapsed panel or closes an open one.
    ///
    /// Refused entirely while an editor is open anywhere in the roster.
    /// Opening a panel closes whichever other panel was open.
    pub fn toggle(&mut self, id: CelebrityId) {
        if self.is_editing() {
            debug!("event=panel_toggle module=browse status=refused reason=editor_open id={id}");
            return;
        }
        self.open = if self.open == Some(id) { None } else { Some(id) };
    }

    /// Whether the adult rule permits editing `record` right now.
    ///
    /// The frontend uses this to render the edit control disabled; the
    /// gate itself is enforced again inside [`Self::begin_edit`].
    pub fn can_edit(&self, record: &Celebrity) -> bool {
        record.is_adult() && !self.is_editing()
    }

    /// `View -> Edit`, seeding the draft from the stored record.
    ///
    /// Refused when the panel is not in `View`, when another editor is
    /// open, or when the record is a minor. Returns whether the edit
    /// session was entered.
    pub fn begin_edit(&mut self, record: &Celebrity) -> bool {
        let id = record.id;
        if self.panel_phase(id) != PanelPhase::View {
            debug!("event=edit_begin module=browse status=refused reason=not_in_view id={id}");
            return false;
        }
        if self.is_editing() {
            debug!("event=edit_begin module=browse status=refused reason=editor_open id={id}");
            return false;
        }
        if !record.is_adult() {
            info!(
                "event=edit_begin module=browse status=refused reason=minor id={id} age={}",
                record.age
            );
            return false;
        }

        self.editor = Some(EditSession {
            id,
            draft: EditDraft::from_record(record),
        });
        info!("event=edit_begin module=browse status=ok id={id}");
        true
    }

    /// Replaces the draft gender.
    pub fn set_gender(&mut self, gender: Gender) {
        if let Some(session) = &mut self.editor {
            session.draft.gender = gender;
        }
    }

    /// Cycles the draft gender through the fixed vocabulary.
    pub fn cycle_gender(&mut self, forward: bool) {
        if let Some(session) = &mut self.editor {
            session.draft.gender = if forward {
                session.draft.gender.next()
            } else {
                session.draft.gender.prev()
            };
        }
    }

    /// Appends one character to the draft country.
    ///
    /// Rejected (draft unchanged) unless the resulting text stays within
    /// the letters-and-whitespace rule. Returns whether the character was
    /// accepted.
    pub fn country_input(&mut self, ch: char) -> bool {
        let Some(session) = &mut self.editor else {
            return false;
        };
        let mut candidate = session.draft.country.clone();
        candidate.push(ch);
        if !is_valid_country(&candidate) {
            return false;
        }
        session.draft.country = candidate;
        true
    }

    /// Removes the last character of the draft country.
    pub fn country_backspace(&mut self) {
        if let Some(session) = &mut self.editor {
            session.draft.country.pop();
        }
    }

    /// Appends one character to the draft description. Free text.
    pub fn description_input(&mut self, ch: char) {
        if let Some(session) = &mut self.editor {
            session.draft.description.push(ch);
        }
    }

    /// Removes the last character of the draft description.
    pub fn description_backspace(&mut self) {
        if let Some(session) = &mut self.editor {
            session.draft.description.pop();
        }
    }

    /// Whether save would commit right now (editor open and draft dirty).
    pub fn save_allowed(&self, store: &CelebrityStore) -> bool {
        match &self.editor {
            Some(session) => store
                .get(session.id)
                .is_some_and(|record| session.draft.differs_from(record)),
            None => false,
        }
    }

    /// `Edit -> View`, committing the draft through the store.
    ///
    /// A clean draft is a silent no-op and keeps the editor open, matching
    /// the disabled save control. Returns whether a commit happened.
    pub fn save_edit(&mut self, store: &mut CelebrityStore) -> bool {
        if !self.save_allowed(store) {
            debug!("event=edit_save module=browse status=refused reason=clean_draft");
            return false;
        }
        let Some(session) = self.editor.take() else {
            return false;
        };
        if let Some(record) = store.get(session.id) {
            let patch = session.draft.as_patch(record);
            store.update(session.id, &patch);
        }
        info!("event=edit_save module=browse status=ok id={}", session.id);
        true
    }

    /// `Edit -> View`, discarding the draft.
    pub fn cancel_edit(&mut self) {
        if let Some(session) = self.editor.take() {
            info!("event=edit_cancel module=browse status=ok id={}", session.id);
        }
    }

    /// Opens the delete confirmation prompt for an expanded record.
    ///
    /// Only available from `View`; the panel phase itself is untouched.
    pub fn request_delete(&mut self, id: CelebrityId) {
        if self.panel_phase(id) != PanelPhase::View {
            debug!("event=delete_request module=browse status=refused reason=not_in_view id={id}");
            return;
        }
        self.pending_delete = Some(id);
    }

    /// Confirms the pending delete: removes the record, collapses its
    /// panel, hides the prompt.
    pub fn confirm_delete(&mut self, store: &mut CelebrityStore) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        store.delete(id);
        if self.open == Some(id) {
            self.open = None;
        }
        info!("event=delete_confirm module=browse status=ok id={id}");
    }

    /// Dismisses the prompt with no effect on the roster.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }
}

//! The student CRUD view, independent of how it is drawn.
//!
//! `StudentCrud` owns the record store (the last list fetched from the backend), the form draft, the
//! edit target and the displayed validation errors. The store is never patched locally: every
//! successful mutation and every delete is followed by a full refetch, at the cost of one extra
//! round trip per action.

use crate::{
    api::StudentApi,
    data::student::{Field, StudentDraft, StudentId, StudentRecord},
    error::RosterResult,
};
use validation::{ValidationErrors, validate};

pub mod validation;

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this student?";
pub const SUBMIT_FAILED: &str = "Error submitting data!";
pub const DELETE_FAILED: &str = "Error deleting student!";
pub const LOAD_FAILED: &str = "Error loading students!";

/// Blocking yes/no questions and notifications shown to whoever is driving the view.
pub trait Prompt {
    fn confirm(&mut self, message: &str) -> bool;
    fn alert(&mut self, message: &str);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditTarget {
    #[default]
    Creating,
    Editing(StudentId),
}

impl EditTarget {
    pub const fn id(&self) -> Option<&StudentId> {
        match self {
            Self::Creating => None,
            Self::Editing(id) => Some(id),
        }
    }

    pub const fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    pub const fn submit_label(&self) -> &'static str {
        match self {
            Self::Creating => "Add Student",
            Self::Editing(_) => "Update Student",
        }
    }
}

/// `Idle -> Submitting -> Done` on success, `Submitting -> Idle` on failure.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Done,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    Invalid,
    InFlight,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved,
    Invalid,
    InFlight,
    Failed,
}

impl From<SubmitRejected> for SubmitOutcome {
    fn from(rejected: SubmitRejected) -> Self {
        match rejected {
            SubmitRejected::Invalid => Self::Invalid,
            SubmitRejected::InFlight => Self::InFlight,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Declined,
    Deleted,
    Failed,
}

/// A validated snapshot of the form, taken when a submission starts.
#[derive(Debug, Clone)]
pub struct Submission {
    target: EditTarget,
    draft: StudentDraft,
}

impl Submission {
    pub async fn dispatch(&self, api: &dyn StudentApi) -> RosterResult<()> {
        match &self.target {
            EditTarget::Creating => api.create(&self.draft).await,
            EditTarget::Editing(id) => api.update(id, &self.draft).await,
        }
    }
}

#[derive(Debug, Default)]
pub struct StudentCrud {
    records: Vec<StudentRecord>,
    draft: StudentDraft,
    edit_target: EditTarget,
    errors: ValidationErrors,
    phase: SubmitPhase,
    store_is_current: bool,
}

impl StudentCrud {
    /// Rebuild the form half of the view from what the browser posted back.
    pub fn restore(mut draft: StudentDraft, edit_target: EditTarget) -> Self {
        draft.id = edit_target.id().cloned();
        Self {
            draft,
            edit_target,
            ..Self::default()
        }
    }

    pub async fn mount(api: &dyn StudentApi, prompt: &mut impl Prompt) -> Self {
        let mut crud = Self::default();
        crud.refresh(api, prompt).await;
        crud
    }

    /// Replace the record store with a fresh list. On failure the previous list stays.
    pub async fn refresh(&mut self, api: &dyn StudentApi, prompt: &mut impl Prompt) -> bool {
        match api.list().await {
            Ok(records) => {
                debug!(count = records.len(), "refreshed students");
                self.records = records;
                self.store_is_current = true;
                true
            }
            Err(e) => {
                error!(?e, "unable to load students");
                prompt.alert(LOAD_FAILED);
                self.store_is_current = false;
                false
            }
        }
    }

    /// Whether the most recent refresh succeeded. A store that was never fetched is not current.
    pub const fn store_is_current(&self) -> bool {
        self.store_is_current
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub const fn draft(&self) -> &StudentDraft {
        &self.draft
    }

    pub const fn edit_target(&self) -> &EditTarget {
        &self.edit_target
    }

    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub const fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }

    /// Errors are only written into the displayed state when there are some; a valid draft leaves
    /// the displayed errors alone until the submission succeeds.
    pub fn validate(&mut self) -> bool {
        let errors = validate(&self.draft);
        if errors.is_empty() {
            true
        } else {
            debug!(fields = ?errors.fields().collect::<Vec<_>>(), "draft failed validation");
            self.errors = errors;
            false
        }
    }

    pub fn begin_submit(&mut self) -> Result<Submission, SubmitRejected> {
        if self.phase == SubmitPhase::Submitting {
            return Err(SubmitRejected::InFlight);
        }
        if !self.validate() {
            return Err(SubmitRejected::Invalid);
        }

        self.phase = SubmitPhase::Submitting;
        Ok(Submission {
            target: self.edit_target.clone(),
            draft: self.draft.clone(),
        })
    }

    /// Returns whether the submission went through, in which case the form is back in create mode
    /// and the caller should refresh.
    pub fn finish_submit(&mut self, result: RosterResult<()>, prompt: &mut impl Prompt) -> bool {
        if self.phase != SubmitPhase::Submitting {
            warn!(phase = ?self.phase, "ignoring submission result with nothing in flight");
            return false;
        }

        match result {
            Ok(()) => {
                self.edit_target = EditTarget::Creating;
                self.draft = StudentDraft::default();
                self.errors.clear();
                self.phase = SubmitPhase::Done;
                true
            }
            Err(e) => {
                error!(?e, "unable to submit student");
                prompt.alert(SUBMIT_FAILED);
                self.phase = SubmitPhase::Idle;
                false
            }
        }
    }

    pub async fn submit(&mut self, api: &dyn StudentApi, prompt: &mut impl Prompt) -> SubmitOutcome {
        let submission = match self.begin_submit() {
            Ok(submission) => submission,
            Err(rejected) => return rejected.into(),
        };

        let result = submission.dispatch(api).await;
        if self.finish_submit(result, prompt) {
            self.refresh(api, prompt).await;
            SubmitOutcome::Saved
        } else {
            SubmitOutcome::Failed
        }
    }

    pub fn begin_edit(&mut self, record: &StudentRecord) {
        self.draft = StudentDraft::from(record);
        self.edit_target = EditTarget::Editing(record.id.clone());
    }

    pub async fn delete(
        &mut self,
        id: &StudentId,
        api: &dyn StudentApi,
        prompt: &mut impl Prompt,
    ) -> DeleteOutcome {
        if !prompt.confirm(DELETE_CONFIRMATION) {
            return DeleteOutcome::Declined;
        }

        let outcome = match api.delete(id).await {
            Ok(()) => {
                info!(%id, "deleted student");
                DeleteOutcome::Deleted
            }
            Err(e) => {
                error!(?e, %id, "unable to delete student");
                prompt.alert(DELETE_FAILED);
                DeleteOutcome::Failed
            }
        };

        self.refresh(api, prompt).await;
        outcome
    }
}

use crate::{
    crud::{DELETE_CONFIRMATION, EditTarget, Prompt, StudentCrud, SubmitOutcome},
    data::{
        IdForm,
        student::{Field, StudentDraft, StudentId, StudentRecord},
    },
    maud_conveniences::{alert, render_table, text_input, title},
    state::RosterState,
    theme,
};
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;
use serde_json::json;

/// Confirmation happens in the browser through `hx-confirm`, so by the time a request arrives the
/// user has already said yes. Alerts are collected and rendered into the returned fragment.
#[derive(Debug, Default)]
pub struct BrowserPrompt {
    confirmed: bool,
    alerts: Vec<String>,
}

impl BrowserPrompt {
    pub const fn confirmed() -> Self {
        Self {
            confirmed: true,
            alerts: Vec::new(),
        }
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

impl Prompt for BrowserPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        debug!(?message, confirmed = self.confirmed, "confirmation");
        self.confirmed
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

pub fn render_dashboard(crud: &StudentCrud, alerts: &[String]) -> Markup {
    html! {
        div class=(theme::CARD) {
            (title("Student Management Dashboard"))
            (render_form(crud, &[]))
            (render_alerts(alerts, false))
            (render_student_table(crud.records(), &[], false))
        }
    }
}

pub fn render_form(crud: &StudentCrud, alerts: &[String]) -> Markup {
    let draft = crud.draft();
    let errors = crud.errors();
    let target = crud.edit_target();

    html! {
        div id="student_form" {
            @for message in alerts {
                (alert(message))
            }
            form hx-post="/internal/students/submit" hx-target="#student_form" hx-swap="outerHTML" hx-disabled-elt="find button" {
                @for field in Field::ALL {
                    (text_input(field.key(), field.placeholder(), draft.field(field), errors.get(field)))
                }
                @if let Some(id) = target.id() {
                    input type="hidden" name="edit_target" value=(id.as_str());
                }
                button type="submit" class=(theme::submit_button(target.is_editing())) {
                    (target.submit_label())
                }
            }
        }
    }
}

fn row_actions(record: &StudentRecord) -> Markup {
    let edit_vals = json!({
        "id": record.id,
        "name": record.name,
        "email": record.email,
        "age": record.age,
    });
    let delete_vals = json!({ "id": record.id });

    html! {
        button class=(theme::EDIT_BUTTON) hx-post="/internal/students/edit" hx-vals=(edit_vals.to_string()) hx-target="#student_form" hx-swap="outerHTML" {
            "Edit"
        }
        button class=(theme::DELETE_BUTTON) hx-delete="/internal/students" hx-vals=(delete_vals.to_string()) hx-confirm=(DELETE_CONFIRMATION) hx-target="#student_table" hx-swap="outerHTML" {
            "Delete"
        }
    }
}

/// Notifications that are not tied to the form or to a freshly fetched table.
pub fn render_alerts(alerts: &[String], swap_oob: bool) -> Markup {
    html! {
        div id="student_alerts" hx-swap-oob=[swap_oob.then_some("true")] {
            @for message in alerts {
                (alert(message))
            }
        }
    }
}

pub fn render_student_table(records: &[StudentRecord], alerts: &[String], swap_oob: bool) -> Markup {
    let rows = records.iter().map(|record| {
        (
            format!("student-{}", record.id),
            [
                html! {(record.name)},
                html! {(record.email)},
                html! {(record.age)},
                row_actions(record),
            ],
        )
    });

    html! {
        div id="student_table" hx-swap-oob=[swap_oob.then_some("true")] {
            @for message in alerts {
                (alert(message))
            }
            (render_table(["Name", "Email", "Age", "Actions"], rows))
        }
    }
}

pub async fn internal_get_students_table(State(state): State<RosterState>) -> Markup {
    let mut prompt = BrowserPrompt::default();
    let crud = StudentCrud::mount(state.api(), &mut prompt).await;

    render_student_table(crud.records(), prompt.alerts(), false)
}

#[derive(Deserialize)]
pub struct StudentForm {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    age: String,
    edit_target: Option<StudentId>,
}

impl StudentForm {
    fn into_parts(self) -> (EditTarget, [(Field, String); 3]) {
        let edit_target = self
            .edit_target
            .map_or(EditTarget::Creating, EditTarget::Editing);
        (
            edit_target,
            [
                (Field::Name, self.name),
                (Field::Email, self.email),
                (Field::Age, self.age),
            ],
        )
    }
}

#[axum::debug_handler]
pub async fn internal_post_submit_student(
    State(state): State<RosterState>,
    Form(form): Form<StudentForm>,
) -> Markup {
    let (edit_target, values) = form.into_parts();
    let mut crud = StudentCrud::restore(StudentDraft::default(), edit_target);
    for (field, value) in values {
        crud.set_field(field, value);
    }

    let mut prompt = BrowserPrompt::default();
    let outcome = crud.submit(state.api(), &mut prompt).await;
    debug!(?outcome, phase = ?crud.phase(), "handled student submission");

    html! {
        (render_form(&crud, prompt.alerts()))
        @if outcome == SubmitOutcome::Saved && crud.store_is_current() {
            (render_student_table(crud.records(), &[], true))
        }
    }
}

pub async fn internal_post_begin_edit(Form(record): Form<StudentRecord>) -> Markup {
    let mut crud = StudentCrud::default();
    crud.begin_edit(&record);

    render_form(&crud, &[])
}

pub async fn internal_delete_student(
    State(state): State<RosterState>,
    Query(IdForm { id }): Query<IdForm>,
) -> Response {
    let mut crud = StudentCrud::default();
    let mut prompt = BrowserPrompt::confirmed();
    let outcome = crud.delete(&id, state.api(), &mut prompt).await;
    debug!(?outcome, %id, "handled student deletion");

    if crud.store_is_current() {
        render_student_table(crud.records(), prompt.alerts(), false).into_response()
    } else {
        // leave the table the browser already has; only the alerts go out
        (
            [("HX-Reswap", "none")],
            render_alerts(prompt.alerts(), true),
        )
            .into_response()
    }
}

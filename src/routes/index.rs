use crate::{
    crud::StudentCrud,
    routes::students::{BrowserPrompt, render_dashboard},
    state::RosterState,
};
use axum::extract::State;
use maud::Markup;

pub async fn get_index_route(State(state): State<RosterState>) -> Markup {
    let mut prompt = BrowserPrompt::default();
    let crud = StudentCrud::mount(state.api(), &mut prompt).await;

    state.render(render_dashboard(&crud, prompt.alerts()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::{
            ApiOperation,
            testing::{FakeApi, student},
        },
        crud::LOAD_FAILED,
    };
    use std::sync::Arc;

    #[tokio::test]
    async fn dashboard_starts_in_create_mode_with_the_fetched_list() {
        let api = Arc::new(FakeApi::with_records(vec![student(
            "1", "Ada", "ada@x.com", "30",
        )]));
        let state = RosterState::with_api(api);

        let html = get_index_route(State(state)).await.into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Student Management Dashboard"));
        assert!(html.contains("Add Student"));
        assert!(html.contains("student-1"));
        assert!(!html.contains(LOAD_FAILED));
    }

    #[tokio::test]
    async fn unreachable_backend_still_renders_the_form() {
        let api = Arc::new(FakeApi::default());
        api.fail(ApiOperation::List);
        let state = RosterState::with_api(api);

        let html = get_index_route(State(state)).await.into_string();

        assert!(html.contains(LOAD_FAILED));
        assert!(html.contains("id=\"student_form\""));
    }
}

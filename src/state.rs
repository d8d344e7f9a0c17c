use crate::{
    api::{StudentApi, http::HttpStudentApi},
    config::RuntimeConfiguration,
    error::RosterResult,
    theme,
};
use maud::{DOCTYPE, Markup, html};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct RosterState {
    api: Arc<dyn StudentApi>,
}

impl RosterState {
    pub fn new(config: &RuntimeConfiguration) -> RosterResult<Self> {
        let api = HttpStudentApi::new(config.api_config())?;
        Ok(Self::with_api(Arc::new(api)))
    }

    pub fn with_api(api: Arc<dyn StudentApi>) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &dyn StudentApi {
        self.api.as_ref()
    }

    #[allow(clippy::unused_self)] //in case self is ever needed :)
    pub fn render(&self, markup: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="UTF-8" {}
                    meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                    script src="https://unpkg.com/htmx.org@2.0.4" integrity="sha384-HGfztofotfshcF7+8n44JQL2oJmowVChPTg48S+jvZoztPfvwD79OC/LTtG6dMp+" crossorigin="anonymous" {}
                    script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                    title { "Student Management Dashboard" }
                }
                body class=(theme::PAGE) {
                    (markup)
                }
            }
        }
    }
}

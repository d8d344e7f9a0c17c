#![warn(clippy::pedantic, clippy::all, clippy::nursery)]
#![allow(clippy::single_match_else)]

use crate::{
    config::RuntimeConfiguration,
    routes::{
        index::get_index_route,
        students::{
            internal_delete_student, internal_get_students_table, internal_post_begin_edit,
            internal_post_submit_student,
        },
    },
    state::RosterState,
};
use axum::{
    Router,
    routing::{get, post},
};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[macro_use]
extern crate tracing;

mod api;
mod config;
mod crud;
mod data;
mod error;
mod maud_conveniences;
mod routes;
mod state;
mod theme;

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    warn!("signal received, starting graceful shutdown");
}

fn router(state: RosterState) -> Router {
    Router::new()
        .route("/", get(get_index_route))
        .route(
            "/internal/students",
            get(internal_get_students_table).delete(internal_delete_student),
        )
        .route(
            "/internal/students/submit",
            post(internal_post_submit_student),
        )
        .route("/internal/students/edit", post(internal_post_begin_edit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .finish(),
    )
    .expect("unable to set tracing subscriber");

    info!("`tracing` online");
    if let Err(e) = dotenv {
        debug!(?e, "no .env loaded");
    }

    let config = RuntimeConfiguration::new().expect("unable to create config");
    let state = RosterState::new(&config).expect("unable to create state");
    info!(api = %config.api_config().base_url(), "using students API");

    let server_ip = config.server_ip();
    let listener = TcpListener::bind(server_ip)
        .await
        .expect("unable to listen on server ip");

    info!(?server_ip, "Listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("unable to serve app");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::testing::{Call, FakeApi, student},
        data::student::{StudentDraft, StudentId},
    };
    use reqwest::{Client, StatusCode};
    use std::sync::Arc;

    #[tokio::test]
    async fn routes_decode_forms_and_queries() {
        let api = Arc::new(FakeApi::with_records(vec![student(
            "7", "Ada", "ada@x.com", "30",
        )]));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = router(RosterState::with_api(api.clone()));
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        let client = Client::new();
        let base = format!("http://{addr}");

        let page = client.get(format!("{base}/")).send().await.unwrap();
        assert_eq!(page.status(), StatusCode::OK);
        assert!(page.text().await.unwrap().contains("id=\"student-7\""));

        let edit = client
            .post(format!("{base}/internal/students/edit"))
            .form(&[("id", "7"), ("name", "Bo"), ("email", "bo@x.com"), ("age", "19")])
            .send()
            .await
            .unwrap();
        assert_eq!(edit.status(), StatusCode::OK);
        let edit = edit.text().await.unwrap();
        assert!(edit.contains("name=\"edit_target\" value=\"7\""));
        assert!(edit.contains("Update Student"));

        let submit = client
            .post(format!("{base}/internal/students/submit"))
            .form(&[
                ("name", "Bo"),
                ("email", "bo@x.com"),
                ("age", "19"),
                ("edit_target", "7"),
            ])
            .send()
            .await
            .unwrap();
        assert_eq!(submit.status(), StatusCode::OK);
        let submit = submit.text().await.unwrap();
        assert!(submit.contains("hx-swap-oob=\"true\""));
        assert!(submit.contains("Add Student"));

        let delete = client
            .delete(format!("{base}/internal/students"))
            .query(&[("id", "7")])
            .send()
            .await
            .unwrap();
        assert_eq!(delete.status(), StatusCode::OK);
        assert!(!delete.text().await.unwrap().contains("student-7"));

        let updated = StudentDraft {
            id: Some(StudentId::new("7")),
            name: "Bo".into(),
            email: "bo@x.com".into(),
            age: "19".into(),
        };
        assert_eq!(
            api.calls(),
            [
                Call::List,
                Call::Update(StudentId::new("7"), updated),
                Call::List,
                Call::Delete(StudentId::new("7")),
                Call::List,
            ]
        );
    }
}

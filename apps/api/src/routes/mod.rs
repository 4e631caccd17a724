pub mod health;
pub mod ui;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
    Router,
};

use crate::recruiter;
use crate::resume::handlers as resume_handlers;
use crate::state::AppState;
use crate::tracker::handlers as tracker_handlers;

pub fn build_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(ui::index_handler))
        .route("/health", get(health::health_handler))
        // Students
        .route(
            "/api/v1/resumes/evaluate",
            post(resume_handlers::handle_evaluate),
        )
        // Tracker sidebar
        .route(
            "/api/v1/applications",
            post(tracker_handlers::handle_add_application)
                .get(tracker_handlers::handle_list_applications),
        )
        .route(
            "/api/v1/applications/:id",
            patch(tracker_handlers::handle_update_application)
                .delete(tracker_handlers::handle_delete_application),
        )
        // Recruiters
        .route(
            "/api/v1/recruiter/matches",
            post(recruiter::handle_find_matches),
        )
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

//! Axum route handlers for the application tracker sidebar.

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::resume::prepare_resume;
use crate::resume::upload::FormFields;
use crate::state::AppState;
use crate::tracker::models::{ApplicationSummary, ApplicationUpdate, Stage, TrackedApplication};

#[derive(Deserialize)]
pub struct SessionQuery {
    pub session_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct AddApplicationResponse {
    pub application: ApplicationSummary,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ApplicationListResponse {
    pub applications: Vec<ApplicationSummary>,
    pub stages: [Stage; 4],
}

#[derive(Debug, Deserialize)]
pub struct UpdateApplicationRequest {
    pub session_id: Uuid,
    #[serde(flatten)]
    pub update: ApplicationUpdate,
}

fn parse_session_id(raw: Option<&str>) -> Result<Uuid, AppError> {
    let raw = raw.ok_or_else(|| AppError::Validation("session_id is required".to_string()))?;
    Uuid::parse_str(raw).map_err(|_| AppError::Validation(format!("Invalid session_id '{raw}'")))
}

/// Trims edited text and rejects values that would blank a field.
fn normalize_update(mut update: ApplicationUpdate) -> Result<ApplicationUpdate, AppError> {
    for (field, value) in [("name", &mut update.name), ("job_title", &mut update.job_title)] {
        if let Some(v) = value {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                return Err(AppError::Validation(format!("{field} cannot be empty")));
            }
            *v = trimmed.to_string();
        }
    }
    Ok(update)
}

/// POST /api/v1/applications
///
/// Multipart fields: `session_id`, `name`, `job_title`, `stage`, `resume`.
pub async fn handle_add_application(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<AddApplicationResponse>), AppError> {
    let mut form = FormFields::read(multipart).await?;

    let session_id = parse_session_id(form.text("session_id"))?;
    let name = form
        .text("name")
        .ok_or_else(|| AppError::Validation("Please enter your name.".to_string()))?
        .to_string();
    let job_title = form
        .text("job_title")
        .ok_or_else(|| AppError::Validation("Please enter the job you are applying to.".to_string()))?
        .to_string();
    let stage = match form.text("stage") {
        Some(raw) => raw.parse::<Stage>().map_err(AppError::Validation)?,
        None => Stage::default(),
    };
    let upload = form.take_resume()?;

    let resume = prepare_resume(state.rasterizer.clone(), upload.bytes).await?;

    let application = TrackedApplication::new(name, job_title, stage, resume);
    let summary = application.summary();
    state.tracker.add(session_id, application).await;

    info!("Tracked application {} for session {session_id}", summary.id);

    let message = format!("{}'s application for {} added!", summary.name, summary.job_title);
    Ok((
        StatusCode::CREATED,
        Json(AddApplicationResponse {
            application: summary,
            message,
        }),
    ))
}

/// GET /api/v1/applications?session_id=
pub async fn handle_list_applications(
    State(state): State<AppState>,
    Query(params): Query<SessionQuery>,
) -> Json<ApplicationListResponse> {
    let applications = state
        .tracker
        .list(params.session_id)
        .await
        .iter()
        .map(TrackedApplication::summary)
        .collect();

    Json(ApplicationListResponse {
        applications,
        stages: Stage::ALL,
    })
}

/// PATCH /api/v1/applications/:id
pub async fn handle_update_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateApplicationRequest>,
) -> Result<Json<ApplicationSummary>, AppError> {
    let update = normalize_update(req.update)?;

    let updated = state
        .tracker
        .update(req.session_id, id, update)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;

    info!("Updated application {id} → {}", updated.label());
    Ok(Json(updated.summary()))
}

/// DELETE /api/v1/applications/:id?session_id=
pub async fn handle_delete_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<SessionQuery>,
) -> Result<StatusCode, AppError> {
    if !state.tracker.delete(params.session_id, id).await {
        return Err(AppError::NotFound(format!("Application {id} not found")));
    }

    info!("Deleted application {id}");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_is_required() {
        assert!(matches!(parse_session_id(None), Err(AppError::Validation(_))));
        assert!(matches!(
            parse_session_id(Some("not-a-uuid")),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_update_trims_text() {
        let update = normalize_update(ApplicationUpdate {
            name: Some("  Ada ".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(update.name.as_deref(), Some("Ada"));
    }

    #[test]
    fn test_update_rejects_blank_job_title() {
        let result = normalize_update(ApplicationUpdate {
            job_title: Some("   ".to_string()),
            ..Default::default()
        });
        assert!(matches!(result, Err(AppError::Validation(m)) if m.contains("job_title")));
    }

    #[test]
    fn test_update_request_flattens_fields() {
        let req: UpdateApplicationRequest = serde_json::from_str(&format!(
            r#"{{"session_id": "{}", "stage": "Rejected"}}"#,
            Uuid::nil()
        ))
        .unwrap();
        assert_eq!(req.update.stage, Some(Stage::Rejected));
        assert!(req.update.name.is_none());
    }
}

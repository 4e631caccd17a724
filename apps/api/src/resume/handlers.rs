//! Axum route handlers for résumé evaluation.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::llm_client::prompts::PromptKind;
use crate::resume::prepare_resume;
use crate::resume::upload::FormFields;
use crate::state::AppState;

/// The two student-side feedback buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluateMode {
    #[default]
    Evaluation,
    MatchPercentage,
}

impl EvaluateMode {
    fn parse(raw: Option<&str>) -> Result<Self, AppError> {
        match raw {
            None | Some("evaluation") => Ok(EvaluateMode::Evaluation),
            Some("match_percentage") => Ok(EvaluateMode::MatchPercentage),
            Some(other) => Err(AppError::Validation(format!(
                "Unknown mode '{other}'. Expected 'evaluation' or 'match_percentage'."
            ))),
        }
    }

    fn prompt(self) -> PromptKind {
        match self {
            EvaluateMode::Evaluation => PromptKind::Evaluation,
            EvaluateMode::MatchPercentage => PromptKind::MatchPercentage,
        }
    }

    /// Heading shown above the feedback in the form.
    fn heading(self) -> &'static str {
        match self {
            EvaluateMode::Evaluation => "Evaluation Response",
            EvaluateMode::MatchPercentage => "Match Percentage Response",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub mode: EvaluateMode,
    pub heading: &'static str,
    pub feedback: String,
}

/// POST /api/v1/resumes/evaluate
///
/// Multipart fields: `resume` (PDF), `job_description`, `mode`.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<EvaluateResponse>, AppError> {
    let mut form = FormFields::read(multipart).await?;
    let mode = EvaluateMode::parse(form.text("mode"))?;
    let upload = form.take_resume()?;

    let resume = prepare_resume(state.rasterizer.clone(), upload.bytes).await?;

    let job_description = form
        .text("job_description")
        .ok_or_else(|| AppError::Validation("Please enter the job description.".to_string()))?;

    let generation = state
        .model
        .generate(mode.prompt().template(), &resume, job_description)
        .await?;

    Ok(Json(EvaluateResponse {
        mode,
        heading: mode.heading(),
        feedback: generation.text,
    }))
}

//! Recruiter portal: score every tracked candidate against one job description.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::prompts::PromptKind;
use crate::llm_client::GenerativeModel;
use crate::state::AppState;
use crate::tracker::models::TrackedApplication;

#[derive(Debug, Deserialize)]
pub struct FindMatchesRequest {
    pub session_id: Uuid,
    pub job_description: String,
}

/// One candidate's outcome. Exactly one of `match_score` / `error` is set.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateMatch {
    pub application_id: Uuid,
    pub name: String,
    pub job_title: String,
    pub match_score: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FindMatchesResponse {
    pub matches: Vec<CandidateMatch>,
}

/// Scores candidates in list order. A model failure is recorded on that
/// candidate and the loop moves on.
pub async fn score_candidates(
    model: &dyn GenerativeModel,
    candidates: &[TrackedApplication],
    job_description: &str,
) -> Vec<CandidateMatch> {
    let prompt = PromptKind::RecruiterMatch.template();
    let mut matches = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let (match_score, error) = match model
            .generate(prompt, &candidate.resume, job_description)
            .await
        {
            Ok(generation) => (Some(generation.text), None),
            Err(e) => {
                warn!("Scoring {} failed: {e}", candidate.label());
                (None, Some(format!("Error: {e}")))
            }
        };

        matches.push(CandidateMatch {
            application_id: candidate.id,
            name: candidate.name.clone(),
            job_title: candidate.job_title.clone(),
            match_score,
            error,
        });
    }

    matches
}

/// POST /api/v1/recruiter/matches
pub async fn handle_find_matches(
    State(state): State<AppState>,
    Json(req): Json<FindMatchesRequest>,
) -> Result<Json<FindMatchesResponse>, AppError> {
    let job_description = req.job_description.trim();
    if job_description.is_empty() {
        return Err(AppError::Validation(
            "Please enter the job description.".to_string(),
        ));
    }

    let candidates = state.tracker.list(req.session_id).await;
    info!("Scoring {} candidates for session {}", candidates.len(), req.session_id);

    let matches = score_candidates(state.model.as_ref(), &candidates, job_description).await;
    Ok(Json(FindMatchesResponse { matches }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::{Generation, LlmError};
    use crate::resume::ResumeImage;
    use crate::tracker::models::Stage;
    use async_trait::async_trait;

    /// Fails for résumés whose payload is "bad", echoes the prompt otherwise.
    struct FlakyModel;

    #[async_trait]
    impl GenerativeModel for FlakyModel {
        async fn generate(
            &self,
            prompt: &str,
            resume: &ResumeImage,
            job_description: &str,
        ) -> Result<Generation, LlmError> {
            if resume.data == "bad" {
                return Err(LlmError::EmptyContent);
            }
            Ok(Generation {
                text: format!("{} | {job_description}", &prompt[..10]),
                usage: None,
            })
        }
    }

    fn candidate(name: &str, payload: &str) -> TrackedApplication {
        TrackedApplication::new(
            name.to_string(),
            "ML Engineer".to_string(),
            Stage::Applied,
            ResumeImage::jpeg(payload.to_string()),
        )
    }

    #[tokio::test]
    async fn test_one_failure_does_not_abort_the_rest() {
        let candidates = vec![
            candidate("ok-1", "good"),
            candidate("broken", "bad"),
            candidate("ok-2", "good"),
        ];

        let matches = score_candidates(&FlakyModel, &candidates, "PyTorch").await;

        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].name, "ok-1");
        assert!(matches[0].match_score.as_deref().unwrap().ends_with("PyTorch"));
        assert!(matches[1].match_score.is_none());
        assert!(matches[1]
            .error
            .as_deref()
            .unwrap()
            .contains("No valid response"));
        assert!(matches[2].error.is_none());
    }

    #[tokio::test]
    async fn test_uses_recruiter_prompt() {
        let matches = score_candidates(&FlakyModel, &[candidate("a", "good")], "jd").await;
        let expected = &PromptKind::RecruiterMatch.template()[..10];
        assert!(matches[0].match_score.as_deref().unwrap().starts_with(expected));
    }

    #[tokio::test]
    async fn test_no_candidates_yields_empty_list() {
        assert!(score_candidates(&FlakyModel, &[], "jd").await.is_empty());
    }
}

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::resume::ResumeImage;

/// Pipeline stage of a tracked application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    #[default]
    Applied,
    Interview,
    Accepted,
    Rejected,
}

impl Stage {
    pub const ALL: [Stage; 4] = [
        Stage::Applied,
        Stage::Interview,
        Stage::Accepted,
        Stage::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Applied => "Applied",
            Stage::Interview => "Interview",
            Stage::Accepted => "Accepted",
            Stage::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stage::ALL
            .into_iter()
            .find(|stage| stage.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("Unknown stage '{s}'. Expected one of: Applied, Interview, Accepted, Rejected.")
            })
    }
}

/// One entry of the sidebar list. The résumé image is kept so recruiters can
/// score the candidate later without a re-upload.
#[derive(Debug, Clone)]
pub struct TrackedApplication {
    pub id: Uuid,
    pub name: String,
    pub job_title: String,
    pub stage: Stage,
    pub resume: ResumeImage,
    pub created_at: DateTime<Utc>,
}

impl TrackedApplication {
    pub fn new(name: String, job_title: String, stage: Stage, resume: ResumeImage) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            job_title,
            stage,
            resume,
            created_at: Utc::now(),
        }
    }

    /// "{name} - {job_title} ({stage})"
    pub fn label(&self) -> String {
        format!("{} - {} ({})", self.name, self.job_title, self.stage)
    }

    pub fn summary(&self) -> ApplicationSummary {
        ApplicationSummary {
            id: self.id,
            name: self.name.clone(),
            job_title: self.job_title.clone(),
            stage: self.stage,
            label: self.label(),
            created_at: self.created_at,
        }
    }
}

/// What the UI sees. The image payload stays server-side.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationSummary {
    pub id: Uuid,
    pub name: String,
    pub job_title: String,
    pub stage: Stage,
    pub label: String,
    pub created_at: DateTime<Utc>,
}

/// Partial edit; absent fields keep their value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationUpdate {
    pub name: Option<String>,
    pub job_title: Option<String>,
    pub stage: Option<Stage>,
}

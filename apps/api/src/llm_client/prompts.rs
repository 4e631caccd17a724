// Fixed prompt templates sent ahead of the résumé image and the job description.

/// Technical HR review: alignment with the role, strengths and weaknesses.
pub const EVALUATION_PROMPT: &str = "\
You are an experienced Technical Human Resource Manager. Review the provided resume against the job description. \
Evaluate whether the candidate's profile aligns with the role. Highlight strengths and weaknesses.";

/// ATS-style scan: match percentage, missing keywords, final thoughts.
pub const MATCH_PERCENTAGE_PROMPT: &str = "\
You are an ATS (Applicant Tracking System) scanner with expertise in data science. Evaluate the resume against the job description. \
Provide a match percentage, missing keywords, and final thoughts.";

/// Short recruiter-side score used when ranking tracked candidates.
pub const RECRUITER_MATCH_PROMPT: &str = "\
Provide a match percentage based on the job description. And provide list of keywords that matches. only few lines answer";

/// Which canned prompt accompanies a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Evaluation,
    MatchPercentage,
    RecruiterMatch,
}

impl PromptKind {
    pub fn template(self) -> &'static str {
        match self {
            PromptKind::Evaluation => EVALUATION_PROMPT,
            PromptKind::MatchPercentage => MATCH_PERCENTAGE_PROMPT,
            PromptKind::RecruiterMatch => RECRUITER_MATCH_PROMPT,
        }
    }
}

//! AI-assisted resume analysis: ATS scoring, job matching, and rewriting.
//!
//! Each operation is stateless per call. The LLM reply is parsed into the
//! typed report shape (or returned verbatim for rewrites); an upstream or
//! parse failure ends the request with the underlying message attached.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::resumes::prompts::{
    ATS_PROMPT_TEMPLATE, ATS_SYSTEM, MATCH_PROMPT_TEMPLATE, MATCH_SYSTEM,
    REWRITE_PROMPT_TEMPLATE, REWRITE_SYSTEM_TEMPLATE,
};

pub const DEFAULT_REWRITE_TONE: &str = "professional";

/// ATS compatibility report for a single resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsAnalysis {
    pub score: f64,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Resume-to-job-description match report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatchReport {
    pub match_percentage: f64,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Scores a resume for ATS compatibility.
pub async fn analyze_resume(
    llm: &LlmClient,
    resume_content: &str,
) -> Result<AtsAnalysis, AppError> {
    let prompt = ATS_PROMPT_TEMPLATE.replace("{resume_content}", resume_content);
    llm.call_json::<AtsAnalysis>(&prompt, ATS_SYSTEM)
        .await
        .map_err(|e| AppError::Upstream(format!("Analysis failed: {e}")))
}

/// Compares a resume against a job description.
pub async fn match_job(
    llm: &LlmClient,
    resume_content: &str,
    job_description: &str,
) -> Result<JobMatchReport, AppError> {
    let prompt = MATCH_PROMPT_TEMPLATE
        .replace("{resume_content}", resume_content)
        .replace("{job_description}", job_description);
    llm.call_json::<JobMatchReport>(&prompt, MATCH_SYSTEM)
        .await
        .map_err(|e| AppError::Upstream(format!("Matching failed: {e}")))
}

/// Rewrites a resume in the requested tone, returning the reply verbatim.
pub async fn rewrite_resume(
    llm: &LlmClient,
    resume_content: &str,
    tone: &str,
) -> Result<String, AppError> {
    let system = REWRITE_SYSTEM_TEMPLATE.replace("{tone}", tone);
    let prompt = REWRITE_PROMPT_TEMPLATE.replace("{resume_content}", resume_content);

    let response = llm
        .call(&prompt, &system)
        .await
        .map_err(|e| AppError::Upstream(format!("Rewrite failed: {e}")))?;

    let text = response
        .text()
        .ok_or_else(|| AppError::Upstream("Rewrite failed: model returned empty content".to_string()))?;

    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ats_prompt_embeds_resume() {
        let prompt = ATS_PROMPT_TEMPLATE.replace("{resume_content}", "worked at TechCorp");
        assert!(prompt.contains("worked at TechCorp"));
        assert!(!prompt.contains("{resume_content}"));
        // The model must be told the exact keys the report type expects
        assert!(prompt.contains("\"score\""));
        assert!(prompt.contains("\"strengths\""));
        assert!(prompt.contains("\"weaknesses\""));
        assert!(prompt.contains("\"suggestions\""));
    }

    #[test]
    fn test_match_prompt_embeds_both_inputs() {
        let prompt = MATCH_PROMPT_TEMPLATE
            .replace("{resume_content}", "my resume")
            .replace("{job_description}", "the job");
        assert!(prompt.contains("my resume"));
        assert!(prompt.contains("the job"));
        assert!(prompt.contains("\"match_percentage\""));
        assert!(prompt.contains("\"matching_skills\""));
        assert!(prompt.contains("\"missing_skills\""));
        assert!(prompt.contains("\"recommendations\""));
    }

    #[test]
    fn test_rewrite_system_embeds_tone() {
        let system = REWRITE_SYSTEM_TEMPLATE.replace("{tone}", "confident");
        assert!(system.contains("confident tone"));
    }

    #[test]
    fn test_ats_report_parses_from_model_json() {
        let json = r#"{
            "score": 82,
            "strengths": ["clear formatting"],
            "weaknesses": ["no metrics"],
            "suggestions": ["quantify achievements"]
        }"#;
        let report: AtsAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(report.score, 82.0);
        assert_eq!(report.strengths.len(), 1);
    }

    #[test]
    fn test_match_report_rejects_missing_keys() {
        let json = r#"{ "match_percentage": 50 }"#;
        assert!(serde_json::from_str::<JobMatchReport>(json).is_err());
    }
}

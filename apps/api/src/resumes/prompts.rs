// Resume analysis LLM prompt templates.
// All prompts for the resumes module are defined here.

pub const ATS_SYSTEM: &str = "\
You are an expert ATS (Applicant Tracking System) analyzer. \
Analyze resumes and provide detailed feedback. \
You MUST respond with valid JSON only, with no markdown fences and no \
explanations outside the JSON object.";

pub const ATS_PROMPT_TEMPLATE: &str = r#"Analyze this resume for ATS compatibility and provide a score from 0-100.

Resume Content:
{resume_content}

Provide your response in this JSON format:
{
    "score": <number between 0-100>,
    "strengths": ["list of strengths"],
    "weaknesses": ["list of weaknesses"],
    "suggestions": ["list of improvement suggestions"]
}"#;

pub const MATCH_SYSTEM: &str = "\
You are an expert job matching system. Compare resumes with job \
descriptions. You MUST respond with valid JSON only, with no markdown \
fences and no explanations outside the JSON object.";

pub const MATCH_PROMPT_TEMPLATE: &str = r#"Compare this resume with the job description and provide a match analysis.

Resume:
{resume_content}

Job Description:
{job_description}

Provide response in JSON format:
{
    "match_percentage": <number 0-100>,
    "matching_skills": ["skills that match"],
    "missing_skills": ["skills required but missing"],
    "recommendations": ["suggestions to improve match"]
}"#;

/// The `{tone}` placeholder is the caller-selected rewrite tone.
pub const REWRITE_SYSTEM_TEMPLATE: &str = "\
You are an expert resume writer. Rewrite resumes to be more impactful \
with a {tone} tone.";

pub const REWRITE_PROMPT_TEMPLATE: &str = r#"Rewrite this resume to make it more ATS-friendly and impactful. Maintain the same structure but improve the language, quantify achievements, and use strong action verbs.

Original Resume:
{resume_content}

Provide the rewritten resume in plain text format."#;

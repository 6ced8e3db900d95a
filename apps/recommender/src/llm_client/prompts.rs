// Prompt constants for the generative job-matching endpoint.

/// System prompt for resume-to-job matching. Output must be JSON only.
pub const JOB_MATCH_SYSTEM: &str = "You are an experienced career advisor and recruiter. \
    Read a resume and suggest the job titles it fits best. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Job-matching prompt template. Replace `{resume_text}` before sending.
pub const JOB_MATCH_PROMPT_TEMPLATE: &str = r#"Suggest the top 3 job titles for the resume below.

Return a JSON array with this EXACT schema (no extra fields):
[
  {"title": "Software Engineer", "reason": "One sentence citing skills from the resume."}
]

Resume:
{resume_text}"#;

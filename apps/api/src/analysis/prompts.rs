//! All LLM prompt constants for the analysis module.
//!
//! The analyze prompt is a single instruction+data block: role and hard
//! constraints, the exact output schema, both documents verbatim, and a
//! closing JSON-only instruction. Building it is a pure function of the two
//! documents.

/// ATS optimizer role, constraints, and required output schema.
pub const ANALYZE_SYSTEM: &str = r#"You are an expert ATS (Applicant Tracking System) resume optimizer. Your role is to help candidates tailor their existing resume to better match a specific job description.

## CRITICAL RULES:
1. **NEVER fabricate or invent** experiences, skills, or qualifications the candidate doesn't have
2. **ONLY reorganize, rephrase, and highlight** existing information
3. **Use keywords** from the job description naturally within existing experiences
4. **Quantify achievements** where possible using existing data
5. **Maintain truthfulness** - if a skill is missing, suggest adding it to a "Currently Learning" section

## YOUR TASKS:
1. Analyze the job description to extract required skills and keywords
2. Review the resume and identify matching skills and gaps
3. Optimize the resume by rephrasing to include keywords naturally

## OUTPUT FORMAT:
Return a valid JSON object with this EXACT structure:
{
  "matchScore": <number 0-100>,
  "keywordsFound": ["keyword1", "keyword2"],
  "keywordsMissing": ["keyword3", "keyword4"],
  "suggestions": [
    {
      "section": "Experience",
      "original": "Original text from resume",
      "improved": "Improved text with keywords",
      "reason": "Added relevant keywords"
    }
  ],
  "optimizedSections": {
    "summary": "Optimized professional summary",
    "experience": ["Bullet point 1", "Bullet point 2"],
    "skills": ["Skill 1", "Skill 2"],
    "education": ["Education entry"]
  },
  "warnings": ["Any concerns about gaps"],
  "learningRecommendations": ["Skills to develop"]
}"#;

/// Analyze prompt template. Replace `{resume_text}` and `{job_text}` before sending.
pub const ANALYZE_PROMPT_TEMPLATE: &str = r#"{system}

---
RESUME:
{resume_text}

---
JOB DESCRIPTION:
{job_text}

---
Analyze the resume against the job description and provide optimization suggestions. Return ONLY valid JSON."#;

/// Fills the analyze template with both documents.
pub fn build_analyze_prompt(resume_text: &str, job_text: &str) -> String {
    ANALYZE_PROMPT_TEMPLATE
        .replace("{system}", ANALYZE_SYSTEM)
        .replace("{resume_text}", resume_text)
        .replace("{job_text}", job_text)
}

//! Mock Report Builder — assembles a complete `AnalysisResult` without any
//! external call.
//!
//! The keyword overlap is real (heuristic matcher); suggestions and rewritten
//! sections come from fixed templates. Total over its input domain: given two
//! documents it always returns a structurally valid report, which is what
//! makes it safe as the demo-mode backend.

use crate::analysis::lexicon::Lexicon;
use crate::analysis::matcher::match_keywords;
use crate::analysis::models::{AnalysisResult, OptimizedSections, Suggestion};

/// Fixed illustrative suggestion and section content, built once at startup
/// and shared by reference. Not scattered through logic — one constructor.
#[derive(Debug, Clone)]
pub struct MockTemplates {
    suggestions: Vec<Suggestion>,
    optimized_sections: OptimizedSections,
    warnings: Vec<String>,
}

impl Default for MockTemplates {
    fn default() -> Self {
        Self {
            suggestions: vec![
                Suggestion {
                    section: "Professional Summary".to_string(),
                    original: "Experienced software developer with a passion for building applications."
                        .to_string(),
                    improved: "Results-driven Software Engineer with expertise in building scalable \
                               web applications using modern technologies. Proven track record of \
                               delivering high-quality solutions."
                        .to_string(),
                    reason: "Added stronger action words and specificity".to_string(),
                },
                Suggestion {
                    section: "Experience".to_string(),
                    original: "Worked on various projects and helped the team.".to_string(),
                    improved: "Led development of customer-facing features, resulting in 25% \
                               improvement in user engagement. Collaborated with cross-functional \
                               teams to deliver projects on schedule."
                        .to_string(),
                    reason: "Added quantifiable achievements and action verbs".to_string(),
                },
                Suggestion {
                    section: "Skills".to_string(),
                    original: "Good at programming".to_string(),
                    improved: "Technical Skills: JavaScript, TypeScript, React, Node.js, SQL, Git. \
                               Soft Skills: Team Leadership, Problem Solving, Communication"
                        .to_string(),
                    reason: "Made skills specific and categorized".to_string(),
                },
            ],
            optimized_sections: OptimizedSections {
                summary: "Dynamic and results-oriented professional with proven expertise in \
                          software development. Skilled in modern technologies with a track record \
                          of delivering impactful solutions that drive business growth."
                    .to_string(),
                experience: vec![
                    "Developed and maintained web applications using React and Node.js, improving \
                     performance by 30%"
                        .to_string(),
                    "Collaborated with product teams to define requirements and deliver features \
                     on schedule"
                        .to_string(),
                    "Implemented automated testing, reducing bug rates by 40%".to_string(),
                ],
                skills: vec![
                    "JavaScript".to_string(),
                    "TypeScript".to_string(),
                    "React".to_string(),
                    "Node.js".to_string(),
                    "SQL".to_string(),
                    "Git".to_string(),
                    "Agile".to_string(),
                    "Problem Solving".to_string(),
                ],
                education: vec!["Bachelor's in Computer Science".to_string()],
            },
            warnings: vec![
                "Consider adding more quantifiable achievements to your experience section"
                    .to_string(),
                "Your resume could benefit from ATS-friendly formatting".to_string(),
            ],
        }
    }
}

/// Builds a full report from the heuristic match plus canned templates.
pub fn build_mock_report(
    resume_text: &str,
    job_text: &str,
    lexicon: &Lexicon,
    templates: &MockTemplates,
) -> AnalysisResult {
    let outcome = match_keywords(resume_text, job_text, lexicon);

    let learning_recommendations = if outcome.missing_keywords.is_empty() {
        vec!["Your skills align well with this position".to_string()]
    } else {
        vec![format!(
            "Consider learning: {}",
            outcome.missing_keywords.join(", ")
        )]
    };

    AnalysisResult {
        match_score: outcome.match_score,
        keywords_found: outcome.found_keywords,
        keywords_missing: outcome.missing_keywords,
        suggestions: templates.suggestions.clone(),
        optimized_sections: templates.optimized_sections.clone(),
        warnings: templates.warnings.clone(),
        learning_recommendations,
    }
}

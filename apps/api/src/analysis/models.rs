//! Output contract of the analysis engine.
//!
//! Every analyzer backend — heuristic or LLM-backed — produces exactly this
//! shape. Wire names are camelCase so the JSON contract matches the schema
//! the LLM is prompted with; a response from either path deserializes and
//! serializes through the same types.

use serde::{Deserialize, Serialize};

/// One line-level rewrite recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub section: String,
    pub original: String,
    pub improved: String,
    pub reason: String,
}

/// Rewritten resume content grouped by section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizedSections {
    pub summary: String,
    pub experience: Vec<String>,
    pub skills: Vec<String>,
    pub education: Vec<String>,
}

/// Full optimization report returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// 0 – 100 (the heuristic backend stays within 45 – 95)
    pub match_score: u32,
    pub keywords_found: Vec<String>,
    pub keywords_missing: Vec<String>,
    pub suggestions: Vec<Suggestion>,
    pub optimized_sections: OptimizedSections,
    pub warnings: Vec<String>,
    pub learning_recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_result_full_deserializes_correctly() {
        let json = r#"{
            "matchScore": 72,
            "keywordsFound": ["python", "sql"],
            "keywordsMissing": ["docker", "kubernetes"],
            "suggestions": [
                {
                    "section": "Experience",
                    "original": "Worked on various projects",
                    "improved": "Led development of customer-facing features",
                    "reason": "Added action verbs and specificity"
                }
            ],
            "optimizedSections": {
                "summary": "Results-driven engineer",
                "experience": ["Built data pipelines in Python"],
                "skills": ["Python", "SQL"],
                "education": ["BSc Computer Science"]
            },
            "warnings": ["Consider quantifying achievements"],
            "learningRecommendations": ["Consider learning: docker, kubernetes"]
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.match_score, 72);
        assert_eq!(result.keywords_found, vec!["python", "sql"]);
        assert_eq!(result.keywords_missing.len(), 2);
        assert_eq!(result.suggestions[0].section, "Experience");
        assert_eq!(result.optimized_sections.experience.len(), 1);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.learning_recommendations.len(), 1);
    }

    #[test]
    fn test_analysis_result_serializes_camel_case() {
        let result = AnalysisResult {
            match_score: 45,
            keywords_found: vec![],
            keywords_missing: vec![],
            suggestions: vec![],
            optimized_sections: OptimizedSections {
                summary: String::new(),
                experience: vec![],
                skills: vec![],
                education: vec![],
            },
            warnings: vec![],
            learning_recommendations: vec![],
        };

        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("matchScore").is_some());
        assert!(value.get("keywordsFound").is_some());
        assert!(value.get("keywordsMissing").is_some());
        assert!(value.get("optimizedSections").is_some());
        assert!(value.get("learningRecommendations").is_some());
        // snake_case must not leak onto the wire
        assert!(value.get("match_score").is_none());
    }
}

//! Heuristic Matcher — pure keyword-overlap scoring of a resume against a JD.
//!
//! No I/O, no LLM call, fully deterministic: identical inputs always yield
//! an identical `MatchOutcome`. Callers validate input presence first —
//! empty documents are a contract violation handled at the API boundary.

use crate::analysis::lexicon::Lexicon;

/// Exposed found keywords are capped; the uncapped count still drives the score.
const FOUND_KEYWORDS_CAP: usize = 8;
const MISSING_KEYWORDS_CAP: usize = 5;

/// Score formula constants: base + per-keyword reward, clamped to a band
/// that keeps the result plausible (nonzero floor, never a perfect 100).
const SCORE_BASE: u32 = 50;
const SCORE_PER_KEYWORD: u32 = 8;
const SCORE_FLOOR: u32 = 45;
const SCORE_CEILING: u32 = 95;

/// Keyword-overlap result of comparing two documents.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    /// Lexicon terms present in both documents, lexicon order, first 8.
    pub found_keywords: Vec<String>,
    /// Lexicon terms in the JD but absent from the resume, lexicon order, first 5.
    pub missing_keywords: Vec<String>,
    /// 45 – 95, non-decreasing in the number of shared keywords.
    pub match_score: u32,
}

/// Compares resume and job description against the lexicon.
///
/// A term is "found" iff some resume token AND some job token contain it as
/// a substring; "missing" iff some job token contains it and no resume token
/// does. Substring containment (not token equality) lets "node.js" or
/// "(python)" still count for "node" / "python".
pub fn match_keywords(resume_text: &str, job_text: &str, lexicon: &Lexicon) -> MatchOutcome {
    let resume_tokens = tokenize(resume_text);
    let job_tokens = tokenize(job_text);

    let mut found_full: Vec<&str> = Vec::new();
    let mut missing: Vec<&str> = Vec::new();

    for term in lexicon.iter() {
        let in_resume = contains_term(&resume_tokens, term);
        let in_job = contains_term(&job_tokens, term);

        if in_resume && in_job {
            found_full.push(term);
        } else if in_job {
            missing.push(term);
        }
    }

    let match_score = (SCORE_BASE + SCORE_PER_KEYWORD * found_full.len() as u32)
        .clamp(SCORE_FLOOR, SCORE_CEILING);

    MatchOutcome {
        found_keywords: found_full
            .iter()
            .take(FOUND_KEYWORDS_CAP)
            .map(|t| t.to_string())
            .collect(),
        missing_keywords: missing
            .iter()
            .take(MISSING_KEYWORDS_CAP)
            .map(|t| t.to_string())
            .collect(),
        match_score,
    }
}

/// Lowercases and splits on whitespace. Duplicates are kept — membership
/// tests don't care, and collecting into a set buys nothing at this size.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn contains_term(tokens: &[String], term: &str) -> bool {
    tokens.iter().any(|token| token.contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Experienced Python developer with SQL and Git skills";
    const JOB: &str = "Looking for a Python engineer familiar with SQL, Docker, and Kubernetes";

    #[test]
    fn test_reference_scenario_found_missing_and_score() {
        let lexicon = Lexicon::curated();
        let outcome = match_keywords(RESUME, JOB, &lexicon);

        assert!(outcome.found_keywords.contains(&"python".to_string()));
        assert!(outcome.found_keywords.contains(&"sql".to_string()));
        assert!(outcome.missing_keywords.contains(&"docker".to_string()));
        assert!(outcome.missing_keywords.contains(&"kubernetes".to_string()));
        // 2 shared keywords: 50 + 8 * 2
        assert_eq!(outcome.match_score, 66);
    }

    #[test]
    fn test_no_overlap_scores_base() {
        let lexicon = Lexicon::curated();
        let outcome = match_keywords(
            "Accomplished pastry chef and chocolatier",
            "Seeking a pastry chef for our bakery",
            &lexicon,
        );
        assert!(outcome.found_keywords.is_empty());
        // clamp(50 + 0, 45, 95) = 50
        assert_eq!(outcome.match_score, 50);
    }

    #[test]
    fn test_score_stays_within_band() {
        let lexicon = Lexicon::curated();
        // Every lexicon term in both documents saturates the ceiling
        let all_terms = lexicon.iter().collect::<Vec<_>>().join(" ");
        let outcome = match_keywords(&all_terms, &all_terms, &lexicon);
        assert_eq!(outcome.match_score, 95);

        let empty_overlap = match_keywords("alpha beta", "gamma delta", &lexicon);
        assert!(empty_overlap.match_score >= 45);
        assert!(empty_overlap.match_score <= 95);
    }

    #[test]
    fn test_score_non_decreasing_as_keywords_added() {
        let lexicon = Lexicon::curated();
        let job = "python sql docker kubernetes react";

        let mut previous = 0;
        let mut resume = String::new();
        for term in ["python", "sql", "docker", "kubernetes", "react"] {
            resume.push(' ');
            resume.push_str(term);
            let outcome = match_keywords(&resume, job, &lexicon);
            assert!(
                outcome.match_score >= previous,
                "score decreased after adding {term}"
            );
            previous = outcome.match_score;
        }
    }

    #[test]
    fn test_found_and_missing_are_disjoint_lexicon_subsets() {
        let lexicon = Lexicon::curated();
        let outcome = match_keywords(RESUME, JOB, &lexicon);

        for term in &outcome.found_keywords {
            assert!(lexicon.contains(term));
            assert!(!outcome.missing_keywords.contains(term));
        }
        for term in &outcome.missing_keywords {
            assert!(lexicon.contains(term));
        }
    }

    #[test]
    fn test_caps_found_8_missing_5() {
        let lexicon = Lexicon::curated();
        let all_terms = lexicon.iter().collect::<Vec<_>>().join(" ");

        let saturated = match_keywords(&all_terms, &all_terms, &lexicon);
        assert_eq!(saturated.found_keywords.len(), 8);

        let all_missing = match_keywords("unrelated words only", &all_terms, &lexicon);
        assert_eq!(all_missing.missing_keywords.len(), 5);
    }

    #[test]
    fn test_missing_reported_in_lexicon_order() {
        let lexicon = Lexicon::curated();
        let outcome = match_keywords("nothing relevant", "kubernetes docker python", &lexicon);
        // lexicon order: python < docker < kubernetes
        assert_eq!(outcome.missing_keywords, vec!["python", "docker", "kubernetes"]);
    }

    #[test]
    fn test_substring_containment_matches_punctuated_tokens() {
        let lexicon = Lexicon::curated();
        let outcome = match_keywords(
            "Built services in Node.js and (Python)",
            "Node.js and Python required",
            &lexicon,
        );
        assert!(outcome.found_keywords.contains(&"node".to_string()));
        assert!(outcome.found_keywords.contains(&"python".to_string()));
    }

    #[test]
    fn test_matcher_is_deterministic() {
        let lexicon = Lexicon::curated();
        let first = match_keywords(RESUME, JOB, &lexicon);
        let second = match_keywords(RESUME, JOB, &lexicon);
        assert_eq!(first, second);
    }

    #[test]
    fn test_term_only_in_resume_is_neither_found_nor_missing() {
        let lexicon = Lexicon::curated();
        let outcome = match_keywords("python developer", "accountant wanted", &lexicon);
        assert!(outcome.found_keywords.is_empty());
        assert!(outcome.missing_keywords.is_empty());
    }
}

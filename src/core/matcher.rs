use crate::core::extractor::{extract, normalize_skill, SkillRecord};
use crate::models::Candidate;
use serde_json::Value;
use std::collections::HashSet;
use uuid::Uuid;

/// A candidate paired with their extracted skill set
#[derive(Debug, Clone)]
pub struct CandidateSkills {
    pub candidate: Candidate,
    pub skills: HashSet<String>,
}

impl CandidateSkills {
    /// Build from a candidate and their raw skill payload, if any
    pub fn new(candidate: Candidate, raw_skills: Option<&Value>) -> Self {
        let record = raw_skills.and_then(SkillRecord::from_value);
        Self {
            candidate,
            skills: extract(record.as_ref()),
        }
    }
}

/// Result of matching one job against the candidate pool
///
/// The two groups are disjoint: exact-match candidates are excluded from
/// the close-match pool.
#[derive(Debug)]
pub struct JobMatches {
    pub exact: Vec<Candidate>,
    pub close: Vec<Candidate>,
}

/// Matching orchestrator
///
/// Partitions candidates against a job's required skills into exact
/// (superset) and close (partial overlap) groups. No ranking is computed;
/// candidates come back in input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher;

impl Matcher {
    pub fn new() -> Self {
        Self
    }

    /// Match a job's required skills against the candidate pool
    pub fn match_job(&self, required_skills: &[String], candidates: &[CandidateSkills]) -> JobMatches {
        let exact = exact_matches(required_skills, candidates);
        let exclude_ids: HashSet<Uuid> = exact.iter().map(|c| c.id).collect();
        let close = close_matches(required_skills, candidates, &exclude_ids);
        JobMatches { exact, close }
    }
}

/// Lowercase and trim a job's required skill list
fn normalize_requirements(required_skills: &[String]) -> Vec<String> {
    required_skills.iter().map(|s| normalize_skill(s)).collect()
}

/// Candidates whose skill set covers every required skill
///
/// A job with an empty requirement list matches nobody: an unspecified
/// requirement cannot be deemed satisfied.
pub fn exact_matches(required_skills: &[String], candidates: &[CandidateSkills]) -> Vec<Candidate> {
    let required = normalize_requirements(required_skills);
    if required.is_empty() {
        return Vec::new();
    }

    candidates
        .iter()
        .filter(|entry| required.iter().all(|skill| entry.skills.contains(skill)))
        .map(|entry| entry.candidate.clone())
        .collect()
}

/// Candidates with partial skill overlap
///
/// Requires a non-empty intersection that is not a superset, and skips the
/// ids in `exclude_ids` (typically the exact-match group).
pub fn close_matches(
    required_skills: &[String],
    candidates: &[CandidateSkills],
    exclude_ids: &HashSet<Uuid>,
) -> Vec<Candidate> {
    let required = normalize_requirements(required_skills);
    if required.is_empty() {
        return Vec::new();
    }

    candidates
        .iter()
        .filter(|entry| !exclude_ids.contains(&entry.candidate.id))
        .filter(|entry| {
            let overlap = required.iter().any(|skill| entry.skills.contains(skill));
            let covers_all = required.iter().all(|skill| entry.skills.contains(skill));
            overlap && !covers_all
        })
        .map(|entry| entry.candidate.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn create_candidate(name: &str) -> Candidate {
        Candidate {
            id: Uuid::new_v4(),
            roll_number: format!("PM26{}", name.to_uppercase()),
            name: name.to_string(),
            email: format!("{}@example.com", name),
            phone: "9999900000".to_string(),
            city: "Chennai".to_string(),
            state: "Tamil Nadu".to_string(),
            degree: "B.Sc".to_string(),
            disability_type: "Hearing Impairment".to_string(),
            disability_percentage: 60,
            experience_type: "Fresher".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn with_skills(name: &str, skills: Value) -> CandidateSkills {
        CandidateSkills::new(create_candidate(name), Some(&skills))
    }

    fn required(skills: &[&str]) -> Vec<String> {
        skills.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_match_superset() {
        let candidates = vec![with_skills("asha", json!(["Python", "SQL", "Excel"]))];
        let exact = exact_matches(&required(&["Python", "SQL"]), &candidates);
        assert_eq!(exact.len(), 1);
        assert_eq!(exact[0].name, "asha");
    }

    #[test]
    fn test_close_match_partial_overlap() {
        let candidates = vec![with_skills("ravi", json!(["python"]))];
        let close = close_matches(&required(&["Python", "SQL"]), &candidates, &HashSet::new());
        assert_eq!(close.len(), 1);
        assert_eq!(close[0].name, "ravi");
    }

    #[test]
    fn test_no_overlap_in_neither_group() {
        let candidates = vec![with_skills("kumar", json!(["Java"]))];
        let result = Matcher::new().match_job(&required(&["Python", "SQL"]), &candidates);
        assert!(result.exact.is_empty());
        assert!(result.close.is_empty());
    }

    #[test]
    fn test_empty_requirements_match_nobody() {
        let candidates = vec![
            with_skills("asha", json!(["Python"])),
            with_skills("ravi", json!(["SQL"])),
        ];
        let result = Matcher::new().match_job(&[], &candidates);
        assert!(result.exact.is_empty());
        assert!(result.close.is_empty());
    }

    #[test]
    fn test_groups_are_disjoint() {
        let candidates = vec![
            with_skills("asha", json!({"Python": "Advanced", "SQL": "Intermediate"})),
            with_skills("ravi", json!(["python"])),
        ];
        let result = Matcher::new().match_job(&required(&["Python", "SQL"]), &candidates);

        assert_eq!(result.exact.len(), 1);
        assert_eq!(result.close.len(), 1);
        let exact_ids: HashSet<Uuid> = result.exact.iter().map(|c| c.id).collect();
        assert!(result.close.iter().all(|c| !exact_ids.contains(&c.id)));
    }

    #[test]
    fn test_requirements_case_insensitive() {
        let candidates = vec![with_skills("asha", json!(["python", "sql"]))];
        let exact = exact_matches(&required(&["PYTHON", " Sql "]), &candidates);
        assert_eq!(exact.len(), 1);
    }

    #[test]
    fn test_input_order_preserved() {
        let candidates = vec![
            with_skills("first", json!(["Python"])),
            with_skills("second", json!(["Python"])),
            with_skills("third", json!(["Python"])),
        ];
        let close = close_matches(&required(&["Python", "SQL"]), &candidates, &HashSet::new());
        let names: Vec<&str> = close.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_malformed_skill_payload_degrades_to_unmatched() {
        let candidates = vec![with_skills("broken", json!("{{not json"))];
        let result = Matcher::new().match_job(&required(&["Python"]), &candidates);
        assert!(result.exact.is_empty());
        assert!(result.close.is_empty());
    }
}

// Unit tests for Placematch

use chrono::Utc;
use placematch::core::{close_matches, exact_matches, extract, CandidateSkills, SkillRecord};
use placematch::models::Candidate;
use serde_json::json;
use std::collections::HashSet;
use uuid::Uuid;

fn create_candidate(name: &str) -> Candidate {
    Candidate {
        id: Uuid::new_v4(),
        roll_number: format!("PM26{}", &name.to_uppercase()[..name.len().min(5)]),
        name: name.to_string(),
        email: format!("{}@example.com", name),
        phone: "9999900000".to_string(),
        city: "Bengaluru".to_string(),
        state: "Karnataka".to_string(),
        degree: "B.Com".to_string(),
        disability_type: "Low Vision".to_string(),
        disability_percentage: 40,
        experience_type: "Fresher".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn with_skills(name: &str, skills: serde_json::Value) -> CandidateSkills {
    CandidateSkills::new(create_candidate(name), Some(&skills))
}

fn required(skills: &[&str]) -> Vec<String> {
    skills.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_extract_from_named_list() {
    let record = SkillRecord::from_value(&json!(["Python", "SQL"]));
    let skills = extract(record.as_ref());

    assert_eq!(skills.len(), 2);
    assert!(skills.contains("python"));
    assert!(skills.contains("sql"));
}

#[test]
fn test_extract_from_level_map() {
    let record = SkillRecord::from_value(&json!({
        "Python": "Advanced",
        "SQL": "Intermediate",
        "Excel": "Basic"
    }));
    let skills = extract(record.as_ref());

    assert_eq!(skills.len(), 3);
    assert!(skills.contains("excel"));
}

#[test]
fn test_extract_from_tagged_list() {
    let record = SkillRecord::from_value(&json!([
        {"skill": "Python", "level": "Advanced"},
        {"skill": "SQL", "level": "Basic"}
    ]));
    let skills = extract(record.as_ref());

    assert_eq!(skills.len(), 2);
}

#[test]
fn test_extract_case_insensitive() {
    let upper = SkillRecord::from_value(&json!(["Python"]));
    let lower = SkillRecord::from_value(&json!(["python"]));

    assert_eq!(extract(upper.as_ref()), extract(lower.as_ref()));
}

#[test]
fn test_extract_malformed_payload_is_empty() {
    let record = SkillRecord::from_value(&json!("{broken json"));
    assert!(record.is_none());
    assert!(extract(record.as_ref()).is_empty());
}

#[test]
fn test_exact_requires_full_coverage() {
    let candidates = vec![
        with_skills("full", json!(["Python", "SQL"])),
        with_skills("partial", json!(["Python"])),
    ];

    let exact = exact_matches(&required(&["Python", "SQL"]), &candidates);

    assert_eq!(exact.len(), 1);
    assert_eq!(exact[0].name, "full");
}

#[test]
fn test_close_excludes_exact_ids() {
    let candidates = vec![
        with_skills("full", json!(["Python", "SQL"])),
        with_skills("partial", json!(["Python"])),
    ];

    let exact = exact_matches(&required(&["Python", "SQL"]), &candidates);
    let exclude: HashSet<Uuid> = exact.iter().map(|c| c.id).collect();
    let close = close_matches(&required(&["Python", "SQL"]), &candidates, &exclude);

    assert_eq!(close.len(), 1);
    assert_eq!(close[0].name, "partial");
}

#[test]
fn test_empty_requirements_yield_no_matches() {
    let candidates = vec![with_skills("anyone", json!(["Python"]))];

    assert!(exact_matches(&[], &candidates).is_empty());
    assert!(close_matches(&[], &candidates, &HashSet::new()).is_empty());
}

#[test]
fn test_candidate_without_record_matches_nothing() {
    let candidates = vec![CandidateSkills::new(create_candidate("blank"), None)];

    assert!(exact_matches(&required(&["Python"]), &candidates).is_empty());
    assert!(close_matches(&required(&["Python"]), &candidates, &HashSet::new()).is_empty());
}

#[test]
fn test_no_ranking_within_close_group() {
    // 9/10 coverage ranks the same as 1/10: both land in close, input order
    let many: Vec<String> = (0..9).map(|i| format!("skill{}", i)).collect();
    let candidates = vec![
        with_skills("one_of_ten", json!(["skill0"])),
        with_skills("nine_of_ten", json!(many)),
    ];

    let mut job_skills: Vec<String> = (0..9).map(|i| format!("skill{}", i)).collect();
    job_skills.push("skill9".to_string());

    let close = close_matches(&job_skills, &candidates, &HashSet::new());

    assert_eq!(close.len(), 2);
    assert_eq!(close[0].name, "one_of_ten");
    assert_eq!(close[1].name, "nine_of_ten");
}

// Integration tests for Placematch

use chrono::Utc;
use placematch::core::{CandidateSkills, Matcher};
use placematch::models::Candidate;
use serde_json::json;
use std::collections::HashSet;
use uuid::Uuid;

fn create_candidate(name: &str) -> Candidate {
    Candidate {
        id: Uuid::new_v4(),
        roll_number: format!("PM26{:05}", name.len()),
        name: name.to_string(),
        email: format!("{}@example.com", name),
        phone: "9999900000".to_string(),
        city: "Chennai".to_string(),
        state: "Tamil Nadu".to_string(),
        degree: "B.Tech".to_string(),
        disability_type: "Locomotor Disability".to_string(),
        disability_percentage: 50,
        experience_type: "Fresher".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn with_skills(name: &str, skills: serde_json::Value) -> CandidateSkills {
    CandidateSkills::new(create_candidate(name), Some(&skills))
}

#[test]
fn test_documented_matching_scenario() {
    // Job requires Python + SQL.
    // A holds a level map covering both plus Excel -> exact.
    // B holds a name list with python only -> close.
    // C holds Java only -> neither.
    let matcher = Matcher::new();
    let job_skills = vec!["Python".to_string(), "SQL".to_string()];

    let candidates = vec![
        with_skills(
            "a",
            json!({"Python": "Advanced", "SQL": "Intermediate", "Excel": "Basic"}),
        ),
        with_skills("b", json!(["python"])),
        with_skills("c", json!(["Java"])),
    ];

    let result = matcher.match_job(&job_skills, &candidates);

    assert_eq!(result.exact.len(), 1);
    assert_eq!(result.exact[0].name, "a");

    assert_eq!(result.close.len(), 1);
    assert_eq!(result.close[0].name, "b");
}

#[test]
fn test_groups_always_disjoint() {
    let matcher = Matcher::new();
    let job_skills = vec!["Python".to_string(), "SQL".to_string()];

    let candidates: Vec<CandidateSkills> = (0..20)
        .map(|i| {
            let skills = match i % 3 {
                0 => json!(["Python", "SQL", "Excel"]),
                1 => json!(["Python"]),
                _ => json!(["Java"]),
            };
            with_skills(&format!("candidate{}", i), skills)
        })
        .collect();

    let result = matcher.match_job(&job_skills, &candidates);

    let exact_ids: HashSet<Uuid> = result.exact.iter().map(|c| c.id).collect();
    assert!(result.close.iter().all(|c| !exact_ids.contains(&c.id)));

    // 7 ids hit i % 3 == 0, 7 hit == 1, 6 hit == 2 over 0..20
    assert_eq!(result.exact.len(), 7);
    assert_eq!(result.close.len(), 7);
}

#[test]
fn test_mixed_record_shapes_in_one_pass() {
    let matcher = Matcher::new();
    let job_skills = vec!["Python".to_string()];

    let candidates = vec![
        with_skills("named", json!(["Python"])),
        with_skills("leveled", json!({"Python": "Basic"})),
        with_skills("tagged", json!([{"skill": "Python"}])),
        with_skills("double_encoded", json!("[\"Python\"]")),
        with_skills("broken", json!("not json at all")),
        CandidateSkills::new(create_candidate("absent"), None),
    ];

    let result = matcher.match_job(&job_skills, &candidates);

    let names: Vec<&str> = result.exact.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["named", "leveled", "tagged", "double_encoded"]);
    assert!(result.close.is_empty());
}

#[test]
fn test_malformed_record_never_aborts_the_pass() {
    let matcher = Matcher::new();
    let job_skills = vec!["Python".to_string(), "SQL".to_string()];

    let candidates = vec![
        with_skills("broken", json!(42)),
        with_skills("good", json!(["Python", "SQL"])),
    ];

    let result = matcher.match_job(&job_skills, &candidates);

    assert_eq!(result.exact.len(), 1);
    assert_eq!(result.exact[0].name, "good");
}

#[test]
fn test_whitespace_trimmed_on_both_sides() {
    let matcher = Matcher::new();
    let job_skills = vec!["  Python ".to_string()];

    let candidates = vec![with_skills("spacey", json!([" python  "]))];

    let result = matcher.match_job(&job_skills, &candidates);
    assert_eq!(result.exact.len(), 1);
}

#[test]
fn test_full_table_scan_scale() {
    let matcher = Matcher::new();
    let job_skills = vec!["Python".to_string(), "SQL".to_string()];

    let candidates: Vec<CandidateSkills> = (0..1000)
        .map(|i| {
            let skills = if i % 2 == 0 {
                json!(["Python", "SQL"])
            } else {
                json!(["SQL"])
            };
            with_skills(&format!("candidate{}", i), skills)
        })
        .collect();

    let result = matcher.match_job(&job_skills, &candidates);

    assert_eq!(result.exact.len(), 500);
    assert_eq!(result.close.len(), 500);
}

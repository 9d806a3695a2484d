// Criterion benchmarks for Placematch

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use placematch::core::{extract, CandidateSkills, Matcher, SkillRecord};
use placematch::models::Candidate;
use serde_json::json;
use uuid::Uuid;

fn create_candidate(id: usize) -> Candidate {
    Candidate {
        id: Uuid::new_v4(),
        roll_number: format!("PM26{:06}", id),
        name: format!("Candidate {}", id),
        email: format!("candidate{}@example.com", id),
        phone: "9999900000".to_string(),
        city: "Chennai".to_string(),
        state: "Tamil Nadu".to_string(),
        degree: "B.Sc".to_string(),
        disability_type: "Hearing Impairment".to_string(),
        disability_percentage: 50,
        experience_type: "Fresher".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn create_pool(count: usize) -> Vec<CandidateSkills> {
    (0..count)
        .map(|i| {
            let skills = match i % 4 {
                0 => json!(["Python", "SQL", "Excel"]),
                1 => json!({"Python": "Advanced"}),
                2 => json!([{"skill": "SQL", "level": "Basic"}]),
                _ => json!(["Java", "Communication"]),
            };
            CandidateSkills::new(create_candidate(i), Some(&skills))
        })
        .collect()
}

fn bench_extraction(c: &mut Criterion) {
    let named = json!(["Python", "SQL", "Excel", "Communication"]);
    let leveled = json!({"Python": "Advanced", "SQL": "Intermediate", "Excel": "Basic"});

    c.bench_function("extract_named_list", |b| {
        b.iter(|| {
            let record = SkillRecord::from_value(black_box(&named));
            extract(record.as_ref())
        });
    });

    c.bench_function("extract_level_map", |b| {
        b.iter(|| {
            let record = SkillRecord::from_value(black_box(&leveled));
            extract(record.as_ref())
        });
    });
}

fn bench_matching(c: &mut Criterion) {
    let matcher = Matcher::new();
    let job_skills = vec!["Python".to_string(), "SQL".to_string()];

    let mut group = c.benchmark_group("matching");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates = create_pool(*candidate_count);

        group.bench_with_input(
            BenchmarkId::new("match_job", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    matcher.match_job(black_box(&job_skills), black_box(&candidates))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_extraction, bench_matching);

criterion_main!(benches);

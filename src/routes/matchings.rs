use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::core::{CandidateSkills, Matcher};
use crate::models::{ErrorResponse, HealthResponse, JobMatching, MatchedCandidate, MatchingsResponse};
use crate::services::{AuthUser, PostgresClient};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub postgres: Arc<PostgresClient>,
    pub matcher: Matcher,
}

/// Configure matching-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matchings", web::get().to(get_matchings));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let pg_healthy = state.postgres.health_check().await.unwrap_or(false);

    let status = if pg_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Per-job match groups across the full candidate pool
///
/// GET /api/v1/matchings
///
/// Reads the job and candidate tables once, extracts every candidate's
/// skill set, and classifies candidates per job into exact and close
/// matches. Runs synchronously within the request.
async fn get_matchings(state: web::Data<AppState>, _user: AuthUser) -> impl Responder {
    let jobs = match state.postgres.list_jobs().await {
        Ok(jobs) => jobs,
        Err(e) => {
            tracing::error!("Failed to fetch jobs for matching: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch jobs".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let candidate_rows = match state.postgres.get_candidates_with_skills().await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("Failed to fetch candidates for matching: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch candidates".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    // Extract each candidate's skill set once; malformed payloads degrade
    // to empty sets and the candidate simply matches nothing.
    let candidates: Vec<CandidateSkills> = candidate_rows
        .into_iter()
        .map(|(candidate, raw)| CandidateSkills::new(candidate, raw.as_ref()))
        .collect();

    let total_jobs = jobs.len();
    let total_candidates = candidates.len();

    let matchings: Vec<JobMatching> = jobs
        .into_iter()
        .map(|entry| {
            let result = state.matcher.match_job(&entry.job.skills, &candidates);

            tracing::debug!(
                "Job {} ({}): {} exact, {} close",
                entry.job.id,
                entry.job.job_role,
                result.exact.len(),
                result.close.len()
            );

            JobMatching {
                job_id: entry.job.id,
                job_role: entry.job.job_role,
                company_name: entry.company_name,
                exact_match: result.exact.into_iter().map(to_matched).collect(),
                close_match: result.close.into_iter().map(to_matched).collect(),
            }
        })
        .collect();

    tracing::info!(
        "Computed matchings for {} jobs over {} candidates",
        total_jobs,
        total_candidates
    );

    HttpResponse::Ok().json(MatchingsResponse {
        matchings,
        total_jobs,
        total_candidates,
    })
}

fn to_matched(candidate: crate::models::Candidate) -> MatchedCandidate {
    MatchedCandidate {
        id: candidate.id,
        roll_number: candidate.roll_number,
        name: candidate.name,
    }
}

use actix_web::{web, HttpResponse, Responder, ResponseError};
use uuid::Uuid;
use validator::Validate;

use crate::core::SkillRecord;
use crate::models::{
    CandidateCreatedResponse, ErrorResponse, RegisterCandidateRequest, UpsertSkillsRequest,
};
use crate::routes::matchings::AppState;
use crate::services::AuthUser;

const CANDIDATE_WRITER_ROLES: &[&str] = &["admin", "sourcing"];
const SKILL_WRITER_ROLES: &[&str] = &["admin", "sourcing", "trainer"];

/// Configure candidate routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/candidates")
            .route("", web::post().to(register_candidate))
            .route("", web::get().to(list_candidates))
            .route("/{id}", web::get().to(get_candidate))
            .route("/{id}/skills", web::put().to(upsert_skills))
            .route("/{id}/skills", web::get().to(get_skills)),
    );
}

/// Register a candidate
///
/// POST /api/v1/candidates
async fn register_candidate(
    state: web::Data<AppState>,
    user: AuthUser,
    req: web::Json<RegisterCandidateRequest>,
) -> impl Responder {
    if let Err(e) = user.require_role(CANDIDATE_WRITER_ROLES) {
        return e.error_response();
    }

    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let created = state
        .postgres
        .create_candidate(
            &req.name,
            &req.email,
            &req.phone,
            &req.city,
            &req.state,
            &req.degree,
            &req.disability_type,
            req.disability_percentage,
            &req.experience_type,
        )
        .await;

    match created {
        Ok(candidate) => {
            tracing::info!(
                "Candidate {} registered with roll number {}",
                candidate.id,
                candidate.roll_number
            );
            HttpResponse::Created().json(CandidateCreatedResponse {
                id: candidate.id,
                roll_number: candidate.roll_number,
            })
        }
        Err(e) => {
            tracing::error!("Failed to register candidate: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to register candidate".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// List all candidates
///
/// GET /api/v1/candidates
async fn list_candidates(state: web::Data<AppState>, _user: AuthUser) -> impl Responder {
    match state.postgres.list_candidates().await {
        Ok(candidates) => HttpResponse::Ok().json(candidates),
        Err(e) => {
            tracing::error!("Failed to list candidates: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to list candidates".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Fetch one candidate
///
/// GET /api/v1/candidates/{id}
async fn get_candidate(
    state: web::Data<AppState>,
    _user: AuthUser,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();

    match state.postgres.get_candidate(id).await {
        Ok(Some(candidate)) => HttpResponse::Ok().json(candidate),
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Candidate not found".to_string(),
            message: format!("No candidate with id {}", id),
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Failed to fetch candidate {}: {}", id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch candidate".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Upsert a candidate's skill record
///
/// PUT /api/v1/candidates/{id}/skills
///
/// The payload is stored verbatim; the matching pass interprets the shape.
/// An unrecognized shape is accepted (the candidate will simply match
/// nothing) but logged, since it usually means a broken intake form.
async fn upsert_skills(
    state: web::Data<AppState>,
    user: AuthUser,
    path: web::Path<Uuid>,
    req: web::Json<UpsertSkillsRequest>,
) -> impl Responder {
    if let Err(e) = user.require_role(SKILL_WRITER_ROLES) {
        return e.error_response();
    }

    let candidate_id = path.into_inner();

    match state.postgres.get_candidate(candidate_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Candidate not found".to_string(),
                message: format!("No candidate with id {}", candidate_id),
                status_code: 404,
            });
        }
        Err(e) => {
            tracing::error!("Failed to fetch candidate {}: {}", candidate_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch candidate".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    }

    if SkillRecord::from_value(&req.skills).is_none() {
        tracing::warn!(
            "Skill payload for candidate {} has an unrecognized shape; it will extract to empty",
            candidate_id
        );
    }

    match state
        .postgres
        .upsert_skill_analysis(candidate_id, &req.skills, req.remarks.as_deref())
        .await
    {
        Ok(analysis) => HttpResponse::Ok().json(analysis),
        Err(e) => {
            tracing::error!("Failed to upsert skills for {}: {}", candidate_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to store skill record".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Fetch a candidate's skill record
///
/// GET /api/v1/candidates/{id}/skills
async fn get_skills(
    state: web::Data<AppState>,
    _user: AuthUser,
    path: web::Path<Uuid>,
) -> impl Responder {
    let candidate_id = path.into_inner();

    match state.postgres.get_skill_analysis(candidate_id).await {
        Ok(Some(analysis)) => HttpResponse::Ok().json(analysis),
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Skill record not found".to_string(),
            message: format!("No skill record for candidate {}", candidate_id),
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Failed to fetch skills for {}: {}", candidate_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch skill record".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

use actix_web::{web, HttpResponse, Responder, ResponseError};
use uuid::Uuid;

use crate::models::{
    AckResponse, CreateMappingRequest, CreatedResponse, ErrorResponse, MappingResponse,
    MappingStatus, UpdateMappingRequest,
};
use crate::routes::matchings::AppState;
use crate::services::AuthUser;

const MAPPING_WRITER_ROLES: &[&str] = &["admin", "placement"];

/// Configure mapping routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/mappings")
            .route("", web::post().to(create_mapping))
            .route("", web::get().to(list_mappings))
            .route("/{id}", web::get().to(get_mapping))
            .route("/{id}", web::put().to(update_mapping))
            .route("/{id}", web::delete().to(delete_mapping)),
    );
}

/// Map a candidate to a job opening
///
/// POST /api/v1/mappings
///
/// Both sides of the pair are FK-validated and duplicate pairs rejected.
async fn create_mapping(
    state: web::Data<AppState>,
    user: AuthUser,
    req: web::Json<CreateMappingRequest>,
) -> impl Responder {
    if let Err(e) = user.require_role(MAPPING_WRITER_ROLES) {
        return e.error_response();
    }

    match state.postgres.get_candidate(req.candidate_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Candidate not found".to_string(),
                message: format!("No candidate with id {}", req.candidate_id),
                status_code: 404,
            });
        }
        Err(e) => {
            return internal_error("Failed to fetch candidate", e);
        }
    }

    match state.postgres.get_job(req.job_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Job not found".to_string(),
                message: format!("No job with id {}", req.job_id),
                status_code: 404,
            });
        }
        Err(e) => {
            return internal_error("Failed to fetch job", e);
        }
    }

    match state.postgres.mapping_exists(req.candidate_id, req.job_id).await {
        Ok(true) => {
            return HttpResponse::Conflict().json(ErrorResponse {
                error: "Mapping already exists".to_string(),
                message: format!(
                    "Candidate {} is already mapped to job {}",
                    req.candidate_id, req.job_id
                ),
                status_code: 409,
            });
        }
        Ok(false) => {}
        Err(e) => {
            return internal_error("Failed to check existing mapping", e);
        }
    }

    match state.postgres.create_mapping(req.candidate_id, req.job_id).await {
        Ok(mapping) => {
            tracing::info!(
                "Mapped candidate {} to job {} as {}",
                req.candidate_id,
                req.job_id,
                mapping.id
            );
            HttpResponse::Created().json(CreatedResponse { id: mapping.id })
        }
        Err(e) => internal_error("Failed to create mapping", e),
    }
}

/// List all mappings with candidate and job context
///
/// GET /api/v1/mappings
async fn list_mappings(state: web::Data<AppState>, _user: AuthUser) -> impl Responder {
    match state.postgres.list_mappings().await {
        Ok(mappings) => {
            let result: Vec<MappingResponse> =
                mappings.into_iter().map(MappingResponse::from).collect();
            HttpResponse::Ok().json(result)
        }
        Err(e) => internal_error("Failed to list mappings", e),
    }
}

/// Fetch one mapping with candidate and job context
///
/// GET /api/v1/mappings/{id}
async fn get_mapping(
    state: web::Data<AppState>,
    _user: AuthUser,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();

    match state.postgres.get_mapping(id).await {
        Ok(Some(detail)) => HttpResponse::Ok().json(MappingResponse::from(detail)),
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Mapping not found".to_string(),
            message: format!("No mapping with id {}", id),
            status_code: 404,
        }),
        Err(e) => internal_error("Failed to fetch mapping", e),
    }
}

/// Transition a mapping's pipeline status
///
/// PUT /api/v1/mappings/{id}
async fn update_mapping(
    state: web::Data<AppState>,
    user: AuthUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateMappingRequest>,
) -> impl Responder {
    if let Err(e) = user.require_role(MAPPING_WRITER_ROLES) {
        return e.error_response();
    }

    let id = path.into_inner();

    let status = match MappingStatus::parse(&req.mapping_status) {
        Some(status) => status,
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid mapping status".to_string(),
                message: format!(
                    "'{}' is not one of: mapped, applied, shortlisted, rejected, selected",
                    req.mapping_status
                ),
                status_code: 400,
            });
        }
    };

    match state.postgres.update_mapping_status(id, status).await {
        Ok(true) => HttpResponse::Ok().json(AckResponse {
            success: true,
            message: "Mapping updated".to_string(),
        }),
        Ok(false) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Mapping not found".to_string(),
            message: format!("No mapping with id {}", id),
            status_code: 404,
        }),
        Err(e) => internal_error("Failed to update mapping", e),
    }
}

/// Remove a mapping
///
/// DELETE /api/v1/mappings/{id}
async fn delete_mapping(
    state: web::Data<AppState>,
    user: AuthUser,
    path: web::Path<Uuid>,
) -> impl Responder {
    if let Err(e) = user.require_role(MAPPING_WRITER_ROLES) {
        return e.error_response();
    }

    let id = path.into_inner();

    match state.postgres.delete_mapping(id).await {
        Ok(true) => HttpResponse::Ok().json(AckResponse {
            success: true,
            message: "Mapping deleted".to_string(),
        }),
        Ok(false) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Mapping not found".to_string(),
            message: format!("No mapping with id {}", id),
            status_code: 404,
        }),
        Err(e) => internal_error("Failed to delete mapping", e),
    }
}

fn internal_error(context: &str, e: crate::services::PostgresError) -> HttpResponse {
    tracing::error!("{}: {}", context, e);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: context.to_string(),
        message: e.to_string(),
        status_code: 500,
    })
}

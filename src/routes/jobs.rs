use actix_web::{web, HttpResponse, Responder, ResponseError};
use uuid::Uuid;
use validator::Validate;

use crate::models::{
    AckResponse, CreateJobRequest, CreatedResponse, ErrorResponse, JobResponse, UpdateJobRequest,
};
use crate::routes::matchings::AppState;
use crate::services::AuthUser;

const JOB_WRITER_ROLES: &[&str] = &["admin", "placement"];

/// Configure job routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/jobs")
            .route("", web::post().to(create_job))
            .route("", web::get().to(list_jobs))
            .route("/{id}", web::get().to(get_job))
            .route("/{id}", web::put().to(update_job))
            .route("/{id}", web::delete().to(delete_job)),
    );
}

/// Create a job opening
///
/// POST /api/v1/jobs
///
/// The owning company is resolved by name; unknown companies are rejected.
async fn create_job(
    state: web::Data<AppState>,
    user: AuthUser,
    req: web::Json<CreateJobRequest>,
) -> impl Responder {
    if let Err(e) = user.require_role(JOB_WRITER_ROLES) {
        return e.error_response();
    }

    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let company = match state.postgres.get_company_by_name(&req.company_name).await {
        Ok(Some(company)) => company,
        Ok(None) => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid company name".to_string(),
                message: format!("No registered company named '{}'", req.company_name),
                status_code: 400,
            });
        }
        Err(e) => {
            tracing::error!("Failed to look up company '{}': {}", req.company_name, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to look up company".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let job_status = req.job_status.as_deref().unwrap_or("Open");

    match state
        .postgres
        .create_job(
            company.id,
            &req.job_role,
            &req.skills,
            &req.experience_level,
            req.num_openings,
            &req.location,
            &req.description,
            job_status,
        )
        .await
    {
        Ok(job) => {
            tracing::info!("Job {} created for company {}", job.id, company.company_name);
            HttpResponse::Created().json(CreatedResponse { id: job.id })
        }
        Err(e) => {
            tracing::error!("Failed to create job: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to create job".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// List all job openings
///
/// GET /api/v1/jobs
async fn list_jobs(state: web::Data<AppState>, _user: AuthUser) -> impl Responder {
    match state.postgres.list_jobs().await {
        Ok(jobs) => {
            let result: Vec<JobResponse> = jobs.into_iter().map(JobResponse::from).collect();
            HttpResponse::Ok().json(result)
        }
        Err(e) => {
            tracing::error!("Failed to list jobs: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to list jobs".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Fetch one job opening
///
/// GET /api/v1/jobs/{id}
async fn get_job(
    state: web::Data<AppState>,
    _user: AuthUser,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();

    match state.postgres.get_job(id).await {
        Ok(Some(job)) => HttpResponse::Ok().json(JobResponse::from(job)),
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Job not found".to_string(),
            message: format!("No job with id {}", id),
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Failed to fetch job {}: {}", id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch job".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Partially update a job opening
///
/// PUT /api/v1/jobs/{id}
async fn update_job(
    state: web::Data<AppState>,
    user: AuthUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateJobRequest>,
) -> impl Responder {
    if let Err(e) = user.require_role(JOB_WRITER_ROLES) {
        return e.error_response();
    }

    let id = path.into_inner();

    let updated = state
        .postgres
        .update_job(
            id,
            req.job_role.as_deref(),
            req.skills.as_deref(),
            req.experience_level.as_deref(),
            req.num_openings,
            req.location.as_deref(),
            req.description.as_deref(),
            req.job_status.as_deref(),
        )
        .await;

    match updated {
        Ok(true) => HttpResponse::Ok().json(AckResponse {
            success: true,
            message: "Job updated".to_string(),
        }),
        Ok(false) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Job not found".to_string(),
            message: format!("No job with id {}", id),
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Failed to update job {}: {}", id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to update job".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Delete a job opening
///
/// DELETE /api/v1/jobs/{id}
async fn delete_job(
    state: web::Data<AppState>,
    user: AuthUser,
    path: web::Path<Uuid>,
) -> impl Responder {
    if let Err(e) = user.require_role(JOB_WRITER_ROLES) {
        return e.error_response();
    }

    let id = path.into_inner();

    match state.postgres.delete_job(id).await {
        Ok(true) => HttpResponse::Ok().json(AckResponse {
            success: true,
            message: "Job deleted".to_string(),
        }),
        Ok(false) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Job not found".to_string(),
            message: format!("No job with id {}", id),
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Failed to delete job {}: {}", id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to delete job".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

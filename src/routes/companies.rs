use actix_web::{web, HttpResponse, Responder, ResponseError};
use uuid::Uuid;
use validator::Validate;

use crate::models::{CreateCompanyRequest, CreatedResponse, ErrorResponse};
use crate::routes::matchings::AppState;
use crate::services::AuthUser;

/// Configure company routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/companies")
            .route("", web::post().to(create_company))
            .route("", web::get().to(list_companies))
            .route("/{id}", web::get().to(get_company)),
    );
}

/// Register a company
///
/// POST /api/v1/companies
async fn create_company(
    state: web::Data<AppState>,
    user: AuthUser,
    req: web::Json<CreateCompanyRequest>,
) -> impl Responder {
    if let Err(e) = user.require_role(&["admin"]) {
        return e.error_response();
    }

    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    // Company names double as the reference key on job postings
    match state.postgres.get_company_by_name(&req.company_name).await {
        Ok(Some(_)) => {
            return HttpResponse::Conflict().json(ErrorResponse {
                error: "Company already registered".to_string(),
                message: format!("A company named '{}' already exists", req.company_name),
                status_code: 409,
            });
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!("Failed to look up company '{}': {}", req.company_name, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to look up company".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    }

    let created = state
        .postgres
        .create_company(
            &req.company_name,
            &req.company_type,
            &req.contact_name,
            &req.contact_email,
            &req.contact_number,
        )
        .await;

    match created {
        Ok(company) => {
            tracing::info!("Company '{}' registered as {}", company.company_name, company.id);
            HttpResponse::Created().json(CreatedResponse { id: company.id })
        }
        Err(e) => {
            tracing::error!("Failed to register company: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to register company".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// List all companies
///
/// GET /api/v1/companies
async fn list_companies(state: web::Data<AppState>, _user: AuthUser) -> impl Responder {
    match state.postgres.list_companies().await {
        Ok(companies) => HttpResponse::Ok().json(companies),
        Err(e) => {
            tracing::error!("Failed to list companies: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to list companies".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Fetch one company
///
/// GET /api/v1/companies/{id}
async fn get_company(
    state: web::Data<AppState>,
    _user: AuthUser,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();

    match state.postgres.get_company(id).await {
        Ok(Some(company)) => HttpResponse::Ok().json(company),
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Company not found".to_string(),
            message: format!("No company with id {}", id),
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Failed to fetch company {}: {}", id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch company".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

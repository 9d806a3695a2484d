// Route exports
pub mod candidates;
pub mod companies;
pub mod jobs;
pub mod mappings;
pub mod matchings;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matchings::configure)
            .configure(jobs::configure)
            .configure(candidates::configure)
            .configure(companies::configure)
            .configure(mappings::configure),
    );
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request to register a company
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompanyRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "company_name")]
    pub company_name: String,
    #[validate(length(min = 1))]
    #[serde(alias = "company_type")]
    pub company_type: String,
    #[validate(length(min = 1))]
    #[serde(alias = "contact_name")]
    pub contact_name: String,
    #[validate(email)]
    #[serde(alias = "contact_email")]
    pub contact_email: String,
    #[validate(length(min = 5))]
    #[serde(alias = "contact_number")]
    pub contact_number: String,
}

/// Request to register a candidate
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterCandidateRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 5))]
    pub phone: String,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(length(min = 1))]
    pub state: String,
    #[validate(length(min = 1))]
    pub degree: String,
    #[validate(length(min = 1))]
    #[serde(alias = "disability_type")]
    pub disability_type: String,
    #[validate(range(min = 0, max = 100))]
    #[serde(alias = "disability_percentage")]
    pub disability_percentage: i32,
    /// "Fresher" or "Experienced"
    #[validate(length(min = 1))]
    #[serde(alias = "experience_type")]
    pub experience_type: String,
}

/// Request to create a job opening
///
/// The owning company is referenced by name, matching what placement staff
/// see in the posting form; the handler resolves it to an id.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "company_name")]
    pub company_name: String,
    #[validate(length(min = 1))]
    #[serde(alias = "job_role")]
    pub job_role: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[validate(length(min = 1))]
    #[serde(alias = "experience_level")]
    pub experience_level: String,
    #[validate(range(min = 1))]
    #[serde(alias = "num_openings")]
    pub num_openings: i32,
    #[validate(length(min = 1))]
    pub location: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[serde(default, alias = "job_status")]
    pub job_status: Option<String>,
}

/// Partial update of a job opening
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobRequest {
    #[serde(default, alias = "job_role")]
    pub job_role: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default, alias = "experience_level")]
    pub experience_level: Option<String>,
    #[serde(default, alias = "num_openings")]
    pub num_openings: Option<i32>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "job_status")]
    pub job_status: Option<String>,
}

/// Upsert of a candidate's skill record
///
/// `skills` is accepted in any of the three documented shapes (name list,
/// tagged list, name→level map) and stored verbatim; the extractor sorts
/// out the shape at matching time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertSkillsRequest {
    pub skills: serde_json::Value,
    #[serde(default)]
    pub remarks: Option<String>,
}

/// Request to map a candidate to a job
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMappingRequest {
    #[serde(alias = "candidate_id")]
    pub candidate_id: Uuid,
    #[serde(alias = "job_id")]
    pub job_id: Uuid,
}

/// Mapping status transition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMappingRequest {
    #[serde(alias = "mapping_status")]
    pub mapping_status: String,
}

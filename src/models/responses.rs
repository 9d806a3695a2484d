use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::{JobWithCompany, MappingDetail, MappingStatus};

/// One candidate inside a match group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedCandidate {
    pub id: Uuid,
    pub roll_number: String,
    pub name: String,
}

/// Match groups for a single job
///
/// Field names are part of the wire contract consumed by the placement
/// dashboard: `exact_match` and `close_match` are always disjoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatching {
    pub job_id: Uuid,
    pub job_role: String,
    pub company_name: Option<String>,
    pub exact_match: Vec<MatchedCandidate>,
    pub close_match: Vec<MatchedCandidate>,
}

/// Response for the matchings endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingsResponse {
    pub matchings: Vec<JobMatching>,
    pub total_jobs: usize,
    pub total_candidates: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Response for resource creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: Uuid,
}

/// Response for candidate registration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateCreatedResponse {
    pub id: Uuid,
    pub roll_number: String,
}

/// Generic acknowledgement for updates and deletes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AckResponse {
    pub success: bool,
    pub message: String,
}

/// Job opening as returned by the jobs endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    pub id: Uuid,
    pub company_id: Uuid,
    pub company_name: Option<String>,
    pub job_role: String,
    pub skills: Vec<String>,
    pub experience_level: String,
    pub num_openings: i32,
    pub location: String,
    pub job_status: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<JobWithCompany> for JobResponse {
    fn from(value: JobWithCompany) -> Self {
        let job = value.job;
        Self {
            id: job.id,
            company_id: job.company_id,
            company_name: value.company_name,
            job_role: job.job_role,
            skills: job.skills,
            experience_level: job.experience_level,
            num_openings: job.num_openings,
            location: job.location,
            job_status: job.job_status,
            description: job.description,
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}

/// Mapping as returned by the mappings endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingResponse {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub candidate_name: String,
    pub roll_number: String,
    pub job_id: Uuid,
    pub job_role: String,
    pub company_name: Option<String>,
    pub job_skills: Vec<String>,
    pub mapping_status: MappingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MappingDetail> for MappingResponse {
    fn from(value: MappingDetail) -> Self {
        Self {
            id: value.mapping.id,
            candidate_id: value.mapping.candidate_id,
            candidate_name: value.candidate_name,
            roll_number: value.roll_number,
            job_id: value.mapping.job_id,
            job_role: value.job_role,
            company_name: value.company_name,
            job_skills: value.job_skills,
            mapping_status: value.mapping.mapping_status,
            created_at: value.mapping.created_at,
            updated_at: value.mapping.updated_at,
        }
    }
}

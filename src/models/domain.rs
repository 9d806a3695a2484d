use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registered hiring company
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: Uuid,
    pub company_name: String,
    pub company_type: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Registered candidate
///
/// `roll_number` is the human-readable identifier printed on training
/// paperwork; `id` is the database key every foreign key points at.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: Uuid,
    pub roll_number: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub state: String,
    pub degree: String,
    pub disability_type: String,
    pub disability_percentage: i32,
    pub experience_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Job opening posted by a company
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    pub company_id: Uuid,
    pub job_role: String,
    /// Required skills as the client posted them; matching lowercases
    /// and trims them at entry.
    pub skills: Vec<String>,
    pub experience_level: String,
    pub num_openings: i32,
    pub location: String,
    pub job_status: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Job joined with its owning company's name
#[derive(Debug, Clone)]
pub struct JobWithCompany {
    pub job: Job,
    pub company_name: Option<String>,
}

/// Canonical per-candidate skill record
///
/// The `skills` payload is stored exactly as the client sent it; only the
/// extractor in `core` interprets the shape. Most recent write wins, no
/// versioning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillAnalysis {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub skills: serde_json::Value,
    pub remarks: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Placement pipeline states for a candidate/job pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "mapping_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MappingStatus {
    Mapped,
    Applied,
    Shortlisted,
    Rejected,
    Selected,
}

impl MappingStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "mapped" => Some(MappingStatus::Mapped),
            "applied" => Some(MappingStatus::Applied),
            "shortlisted" => Some(MappingStatus::Shortlisted),
            "rejected" => Some(MappingStatus::Rejected),
            "selected" => Some(MappingStatus::Selected),
            _ => None,
        }
    }
}

/// Candidate mapped to a job opening
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateJobMapping {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub job_id: Uuid,
    pub mapping_status: MappingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Mapping joined with candidate, job, and company context
#[derive(Debug, Clone)]
pub struct MappingDetail {
    pub mapping: CandidateJobMapping,
    pub candidate_name: String,
    pub roll_number: String,
    pub job_role: String,
    pub company_name: Option<String>,
    pub job_skills: Vec<String>,
}

// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Candidate, CandidateJobMapping, Company, Job, JobWithCompany, MappingDetail, MappingStatus, SkillAnalysis};
pub use requests::{CreateCompanyRequest, CreateJobRequest, CreateMappingRequest, RegisterCandidateRequest, UpdateJobRequest, UpdateMappingRequest, UpsertSkillsRequest};
pub use responses::{AckResponse, CandidateCreatedResponse, CreatedResponse, ErrorResponse, HealthResponse, JobMatching, JobResponse, MappingResponse, MatchedCandidate, MatchingsResponse};

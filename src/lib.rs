//! Placematch - matching backend for a disability-inclusive job placement platform
//!
//! This library stores companies, jobs, candidates, and skill analyses, and
//! classifies candidates against each job's required skills into exact and
//! close match groups.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{close_matches, exact_matches, extract, CandidateSkills, Matcher, SkillRecord};
pub use crate::models::{Candidate, Company, Job, JobMatching, MappingStatus, MatchingsResponse};

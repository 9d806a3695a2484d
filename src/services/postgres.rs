use crate::models::{
    Candidate, CandidateJobMapping, Company, Job, JobWithCompany, MappingDetail, MappingStatus,
    SkillAnalysis,
};
use chrono::Utc;
use serde_json::Value;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum PostgresError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// PostgreSQL client for the placement data model
///
/// All persistence goes through this client: companies, candidates, jobs,
/// skill analyses, and candidate/job mappings. The matchings endpoint reads
/// the full job and candidate tables through it on every request.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        _acquire_timeout_secs: Option<u64>,
        _idle_timeout_secs: Option<u64>,
    ) -> Result<Self, PostgresError> {
        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, PostgresError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }

    // ---- companies ----

    pub async fn create_company(
        &self,
        company_name: &str,
        company_type: &str,
        contact_name: &str,
        contact_email: &str,
        contact_number: &str,
    ) -> Result<Company, PostgresError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO company_registration
                (id, company_name, company_type, contact_name, contact_email, contact_number, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            "#,
        )
        .bind(id)
        .bind(company_name)
        .bind(company_type)
        .bind(contact_name)
        .bind(contact_email)
        .bind(contact_number)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Company {
            id,
            company_name: company_name.to_string(),
            company_type: company_type.to_string(),
            contact_name: contact_name.to_string(),
            contact_email: contact_email.to_string(),
            contact_number: contact_number.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn list_companies(&self) -> Result<Vec<Company>, PostgresError> {
        let rows = sqlx::query(
            "SELECT * FROM company_registration ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(company_from_row).collect())
    }

    pub async fn get_company(&self, id: Uuid) -> Result<Option<Company>, PostgresError> {
        let row = sqlx::query("SELECT * FROM company_registration WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(company_from_row))
    }

    pub async fn get_company_by_name(&self, name: &str) -> Result<Option<Company>, PostgresError> {
        let row = sqlx::query("SELECT * FROM company_registration WHERE company_name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(company_from_row))
    }

    // ---- candidates ----

    #[allow(clippy::too_many_arguments)]
    pub async fn create_candidate(
        &self,
        name: &str,
        email: &str,
        phone: &str,
        city: &str,
        state: &str,
        degree: &str,
        disability_type: &str,
        disability_percentage: i32,
        experience_type: &str,
    ) -> Result<Candidate, PostgresError> {
        let id = Uuid::new_v4();
        let roll_number = generate_roll_number();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO candidate_registration
                (id, roll_number, name, email, phone, city, state, degree,
                 disability_type, disability_percentage, experience_type, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $12)
            "#,
        )
        .bind(id)
        .bind(&roll_number)
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(city)
        .bind(state)
        .bind(degree)
        .bind(disability_type)
        .bind(disability_percentage)
        .bind(experience_type)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Candidate {
            id,
            roll_number,
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            degree: degree.to_string(),
            disability_type: disability_type.to_string(),
            disability_percentage,
            experience_type: experience_type.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn list_candidates(&self) -> Result<Vec<Candidate>, PostgresError> {
        let rows = sqlx::query("SELECT * FROM candidate_registration ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(candidate_from_row).collect())
    }

    pub async fn get_candidate(&self, id: Uuid) -> Result<Option<Candidate>, PostgresError> {
        let row = sqlx::query("SELECT * FROM candidate_registration WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(candidate_from_row))
    }

    /// Full candidate table joined with each candidate's skill payload
    ///
    /// One row per candidate, in insertion order; candidates without a
    /// skill analysis come back with `None`. This is the single full-table
    /// read the matchings endpoint runs per request.
    pub async fn get_candidates_with_skills(
        &self,
    ) -> Result<Vec<(Candidate, Option<Value>)>, PostgresError> {
        let rows = sqlx::query(
            r#"
            SELECT cr.*, sa.skills AS skill_payload
            FROM candidate_registration cr
            LEFT JOIN skill_analyses sa ON sa.candidate_id = cr.id
            ORDER BY cr.created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|row| (candidate_from_row(row), row.get("skill_payload")))
            .collect())
    }

    // ---- skill analyses ----

    /// Upsert a candidate's skill record; most recent write wins
    pub async fn upsert_skill_analysis(
        &self,
        candidate_id: Uuid,
        skills: &Value,
        remarks: Option<&str>,
    ) -> Result<SkillAnalysis, PostgresError> {
        let now = Utc::now();

        let row = sqlx::query(
            r#"
            INSERT INTO skill_analyses (id, candidate_id, skills, remarks, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            ON CONFLICT (candidate_id)
            DO UPDATE SET
                skills = EXCLUDED.skills,
                remarks = EXCLUDED.remarks,
                updated_at = EXCLUDED.updated_at
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(candidate_id)
        .bind(skills)
        .bind(remarks)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(skill_analysis_from_row(&row))
    }

    pub async fn get_skill_analysis(
        &self,
        candidate_id: Uuid,
    ) -> Result<Option<SkillAnalysis>, PostgresError> {
        let row = sqlx::query("SELECT * FROM skill_analyses WHERE candidate_id = $1")
            .bind(candidate_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(skill_analysis_from_row))
    }

    // ---- jobs ----

    #[allow(clippy::too_many_arguments)]
    pub async fn create_job(
        &self,
        company_id: Uuid,
        job_role: &str,
        skills: &[String],
        experience_level: &str,
        num_openings: i32,
        location: &str,
        description: &str,
        job_status: &str,
    ) -> Result<Job, PostgresError> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let skills_json = serde_json::to_value(skills)
            .map_err(|e| PostgresError::InvalidInput(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO jobs
                (id, company_id, job_role, skills, experience_level, num_openings,
                 location, description, job_status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10)
            "#,
        )
        .bind(id)
        .bind(company_id)
        .bind(job_role)
        .bind(&skills_json)
        .bind(experience_level)
        .bind(num_openings)
        .bind(location)
        .bind(description)
        .bind(job_status)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Job {
            id,
            company_id,
            job_role: job_role.to_string(),
            skills: skills.to_vec(),
            experience_level: experience_level.to_string(),
            num_openings,
            location: location.to_string(),
            job_status: job_status.to_string(),
            description: description.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    /// All jobs joined with their company names, in insertion order
    pub async fn list_jobs(&self) -> Result<Vec<JobWithCompany>, PostgresError> {
        let rows = sqlx::query(
            r#"
            SELECT j.*, c.company_name AS company_name
            FROM jobs j
            LEFT JOIN company_registration c ON c.id = j.company_id
            ORDER BY j.created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(job_with_company_from_row).collect())
    }

    pub async fn get_job(&self, id: Uuid) -> Result<Option<JobWithCompany>, PostgresError> {
        let row = sqlx::query(
            r#"
            SELECT j.*, c.company_name AS company_name
            FROM jobs j
            LEFT JOIN company_registration c ON c.id = j.company_id
            WHERE j.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(job_with_company_from_row))
    }

    /// Partial update of a job; absent fields keep their current value
    #[allow(clippy::too_many_arguments)]
    pub async fn update_job(
        &self,
        id: Uuid,
        job_role: Option<&str>,
        skills: Option<&[String]>,
        experience_level: Option<&str>,
        num_openings: Option<i32>,
        location: Option<&str>,
        description: Option<&str>,
        job_status: Option<&str>,
    ) -> Result<bool, PostgresError> {
        let skills_json = match skills {
            Some(list) => Some(
                serde_json::to_value(list)
                    .map_err(|e| PostgresError::InvalidInput(e.to_string()))?,
            ),
            None => None,
        };

        let result = sqlx::query(
            r#"
            UPDATE jobs SET
                job_role = COALESCE($2, job_role),
                skills = COALESCE($3, skills),
                experience_level = COALESCE($4, experience_level),
                num_openings = COALESCE($5, num_openings),
                location = COALESCE($6, location),
                description = COALESCE($7, description),
                job_status = COALESCE($8, job_status),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(job_role)
        .bind(skills_json)
        .bind(experience_level)
        .bind(num_openings)
        .bind(location)
        .bind(description)
        .bind(job_status)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_job(&self, id: Uuid) -> Result<bool, PostgresError> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ---- mappings ----

    pub async fn mapping_exists(
        &self,
        candidate_id: Uuid,
        job_id: Uuid,
    ) -> Result<bool, PostgresError> {
        let row = sqlx::query(
            "SELECT 1 AS present FROM candidate_job_mapping WHERE candidate_id = $1 AND job_id = $2",
        )
        .bind(candidate_id)
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.is_some())
    }

    pub async fn create_mapping(
        &self,
        candidate_id: Uuid,
        job_id: Uuid,
    ) -> Result<CandidateJobMapping, PostgresError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO candidate_job_mapping
                (id, candidate_id, job_id, mapping_status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            "#,
        )
        .bind(id)
        .bind(candidate_id)
        .bind(job_id)
        .bind(MappingStatus::Mapped)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(CandidateJobMapping {
            id,
            candidate_id,
            job_id,
            mapping_status: MappingStatus::Mapped,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn list_mappings(&self) -> Result<Vec<MappingDetail>, PostgresError> {
        let rows = sqlx::query(&mapping_detail_query(""))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(mapping_detail_from_row).collect())
    }

    pub async fn get_mapping(&self, id: Uuid) -> Result<Option<MappingDetail>, PostgresError> {
        let row = sqlx::query(&mapping_detail_query("WHERE m.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(mapping_detail_from_row))
    }

    pub async fn update_mapping_status(
        &self,
        id: Uuid,
        status: MappingStatus,
    ) -> Result<bool, PostgresError> {
        let result = sqlx::query(
            "UPDATE candidate_job_mapping SET mapping_status = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(status)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_mapping(&self, id: Uuid) -> Result<bool, PostgresError> {
        let result = sqlx::query("DELETE FROM candidate_job_mapping WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Roll numbers follow the paper format: prefix, 2-digit year, short
/// random suffix.
fn generate_roll_number() -> String {
    let year = Utc::now().format("%y");
    let suffix = Uuid::new_v4().simple().to_string()[..6].to_uppercase();
    format!("PM{}{}", year, suffix)
}

fn mapping_detail_query(filter: &str) -> String {
    format!(
        r#"
        SELECT m.id, m.candidate_id, m.job_id, m.mapping_status, m.created_at, m.updated_at,
               cr.name AS candidate_name, cr.roll_number AS roll_number,
               j.job_role AS job_role, j.skills AS job_skills,
               c.company_name AS company_name
        FROM candidate_job_mapping m
        JOIN candidate_registration cr ON cr.id = m.candidate_id
        JOIN jobs j ON j.id = m.job_id
        LEFT JOIN company_registration c ON c.id = j.company_id
        {}
        ORDER BY m.created_at
        "#,
        filter
    )
}

fn company_from_row(row: &PgRow) -> Company {
    Company {
        id: row.get("id"),
        company_name: row.get("company_name"),
        company_type: row.get("company_type"),
        contact_name: row.get("contact_name"),
        contact_email: row.get("contact_email"),
        contact_number: row.get("contact_number"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn candidate_from_row(row: &PgRow) -> Candidate {
    Candidate {
        id: row.get("id"),
        roll_number: row.get("roll_number"),
        name: row.get("name"),
        email: row.get("email"),
        phone: row.get("phone"),
        city: row.get("city"),
        state: row.get("state"),
        degree: row.get("degree"),
        disability_type: row.get("disability_type"),
        disability_percentage: row.get("disability_percentage"),
        experience_type: row.get("experience_type"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn skill_analysis_from_row(row: &PgRow) -> SkillAnalysis {
    SkillAnalysis {
        id: row.get("id"),
        candidate_id: row.get("candidate_id"),
        skills: row.get("skills"),
        remarks: row.get("remarks"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn job_with_company_from_row(row: &PgRow) -> JobWithCompany {
    JobWithCompany {
        job: Job {
            id: row.get("id"),
            company_id: row.get("company_id"),
            job_role: row.get("job_role"),
            skills: decode_skill_list(row.get("skills")),
            experience_level: row.get("experience_level"),
            num_openings: row.get("num_openings"),
            location: row.get("location"),
            job_status: row.get("job_status"),
            description: row.get("description"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        },
        company_name: row.get("company_name"),
    }
}

fn mapping_detail_from_row(row: &PgRow) -> MappingDetail {
    MappingDetail {
        mapping: CandidateJobMapping {
            id: row.get("id"),
            candidate_id: row.get("candidate_id"),
            job_id: row.get("job_id"),
            mapping_status: row.get("mapping_status"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        },
        candidate_name: row.get("candidate_name"),
        roll_number: row.get("roll_number"),
        job_role: row.get("job_role"),
        company_name: row.get("company_name"),
        job_skills: decode_skill_list(row.get("job_skills")),
    }
}

/// Job skill columns hold JSON written by older clients too; anything that
/// is not a plain string list decodes to empty rather than failing the row.
fn decode_skill_list(value: Value) -> Vec<String> {
    serde_json::from_value(value).unwrap_or_default()
}

// Core algorithm exports
pub mod extractor;
pub mod matcher;

pub use extractor::{extract, normalize_skill, SkillRecord, TaggedSkill};
pub use matcher::{close_matches, exact_matches, CandidateSkills, JobMatches, Matcher};

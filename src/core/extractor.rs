use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};

/// A candidate's stored skill representation
///
/// Skill records arrive from the intake forms in one of three shapes, and
/// the database keeps whatever the client sent. The shape is resolved once
/// here, at deserialization, instead of being re-sniffed on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillRecord {
    /// Mapping of skill name to proficiency level, e.g.
    /// `{"Python": "Advanced", "SQL": "Intermediate"}`
    Leveled(BTreeMap<String, Value>),
    /// List of tagged entries, e.g. `[{"skill": "Python", "level": "Advanced"}]`
    Tagged(Vec<TaggedSkill>),
    /// Flat list of skill names, e.g. `["Python", "SQL"]`
    Named(Vec<String>),
}

/// One entry of the tagged-list shape
///
/// `skill` is optional so that entries missing the field deserialize and
/// can be skipped silently rather than failing the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedSkill {
    #[serde(default)]
    pub skill: Option<String>,
    #[serde(default)]
    pub level: Option<Value>,
}

impl SkillRecord {
    /// Best-effort parse of a raw skill payload
    ///
    /// Legacy rows sometimes hold the payload double-encoded as a JSON
    /// string; one level of unwrapping is applied before shape matching.
    /// Anything that does not parse into a recognized shape yields `None`,
    /// never an error: one candidate's malformed data must not abort the
    /// matching pass for everyone else.
    pub fn from_value(value: &Value) -> Option<SkillRecord> {
        if let Value::String(raw) = value {
            let inner: Value = serde_json::from_str(raw).ok()?;
            return serde_json::from_value(inner).ok();
        }
        serde_json::from_value(value.clone()).ok()
    }
}

/// Lowercase and trim a skill name for comparison
#[inline]
pub fn normalize_skill(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Extract a flat, normalized skill set from a candidate's record
///
/// Absent record, or a record whose entries all lack a usable name,
/// yields the empty set.
pub fn extract(record: Option<&SkillRecord>) -> HashSet<String> {
    match record {
        None => HashSet::new(),
        Some(SkillRecord::Leveled(map)) => map.keys().map(|k| normalize_skill(k)).collect(),
        Some(SkillRecord::Tagged(entries)) => entries
            .iter()
            .filter_map(|entry| entry.skill.as_deref())
            .map(normalize_skill)
            .collect(),
        Some(SkillRecord::Named(names)) => names.iter().map(|n| normalize_skill(n)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn extract_value(value: Value) -> HashSet<String> {
        let record = SkillRecord::from_value(&value);
        extract(record.as_ref())
    }

    #[test]
    fn test_extract_named_list() {
        let skills = extract_value(json!(["Python", " SQL ", "python"]));
        assert_eq!(skills.len(), 2);
        assert!(skills.contains("python"));
        assert!(skills.contains("sql"));
    }

    #[test]
    fn test_extract_leveled_map() {
        let skills = extract_value(json!({"Python": "Advanced", "Excel": "Basic"}));
        assert_eq!(skills.len(), 2);
        assert!(skills.contains("python"));
        assert!(skills.contains("excel"));
    }

    #[test]
    fn test_extract_tagged_list_skips_missing_skill_field() {
        let skills = extract_value(json!([
            {"skill": "Python", "level": "Advanced"},
            {"level": "Basic"},
            {"skill": "SQL"}
        ]));
        assert_eq!(skills.len(), 2);
        assert!(skills.contains("python"));
        assert!(skills.contains("sql"));
    }

    #[test]
    fn test_extract_double_encoded_payload() {
        let skills = extract_value(json!("[\"Python\", \"SQL\"]"));
        assert_eq!(skills.len(), 2);
    }

    #[test]
    fn test_extract_malformed_string_is_empty() {
        let skills = extract_value(json!("not valid json"));
        assert!(skills.is_empty());
    }

    #[test]
    fn test_extract_unrecognized_shape_is_empty() {
        assert!(extract_value(json!(42)).is_empty());
        assert!(extract_value(json!([["nested"]])).is_empty());
        assert!(extract_value(json!(null)).is_empty());
    }

    #[test]
    fn test_extract_absent_record_is_empty() {
        assert!(extract(None).is_empty());
    }

    #[test]
    fn test_extraction_case_insensitive() {
        let upper = extract_value(json!(["Python"]));
        let lower = extract_value(json!(["python"]));
        assert_eq!(upper, lower);
    }
}

use crate::error::Result;
use crate::model::DocName;
use crate::store::DocumentStore;
use serde_json::Value;

/// Read a whole document (skills, profile, or settings).
pub fn get<S: DocumentStore>(store: &mut S, doc: DocName) -> Result<Value> {
    store.load(doc)
}

/// Replace a whole document. No per-item addressing, no diffing: clients
/// submit the full document on every write and it is persisted as-is.
pub fn replace<S: DocumentStore>(store: &mut S, doc: DocName, value: &Value) -> Result<()> {
    store.save(doc, value)
}

/// Sum of `subSkills` lengths across all skill entries. Entries that are
/// not objects, or lack a `subSkills` array, contribute zero.
pub fn total_skills(skills: &Value) -> usize {
    let Value::Array(entries) = skills else {
        return 0;
    };
    entries
        .iter()
        .filter_map(|entry| entry.get("subSkills"))
        .filter_map(Value::as_array)
        .map(Vec::len)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use serde_json::json;

    #[test]
    fn replace_then_get_round_trips() {
        let mut store = InMemoryStore::new();
        let skills = json!([{"category": "AI", "subSkills": ["ml", "cv"]}]);
        replace(&mut store, DocName::Skills, &skills).unwrap();
        assert_eq!(get(&mut store, DocName::Skills).unwrap(), skills);
    }

    #[test]
    fn missing_profile_yields_seed_default() {
        let mut store = InMemoryStore::new();
        let profile = get(&mut store, DocName::Profile).unwrap();
        assert_eq!(
            profile["personalInfo"]["fullName"],
            "Md Tanvir Ahmmed Rasel"
        );
    }

    #[test]
    fn total_skills_counts_sub_skills_only() {
        let skills = json!([
            {"category": "AI", "subSkills": ["a", "b", "c"]},
            {"category": "IoT", "subSkills": ["d", "e"]},
            {"category": "No subs"},
            "not an object",
            {"subSkills": "not an array"}
        ]);
        assert_eq!(total_skills(&skills), 5);
    }

    #[test]
    fn total_skills_of_non_array_is_zero() {
        assert_eq!(total_skills(&json!({"subSkills": ["a"]})), 0);
    }
}

use super::{documents, projects};
use crate::error::Result;
use crate::model::{DashboardStats, DocName};
use crate::store::DocumentStore;
use chrono::Local;

/// Aggregate the numbers the admin dashboard shows: project count, total
/// sub-skills, a freshness stamp, and projects grouped by type.
pub fn run<S: DocumentStore>(store: &mut S) -> Result<DashboardStats> {
    let project_list = projects::list(store)?;
    let skills = documents::get(store, DocName::Skills)?;

    Ok(DashboardStats {
        total_projects: project_list.len(),
        total_skills: documents::total_skills(&skills),
        last_updated: Local::now().format("%Y-%m-%d %H:%M").to_string(),
        project_types: projects::counts_by_type(&project_list),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use serde_json::json;

    #[test]
    fn stats_over_seeded_store() {
        let mut store = InMemoryStore::new();
        store
            .save(
                DocName::Projects,
                &json!([
                    {"id": "1", "type": "Web"},
                    {"id": "2", "type": "IoT"},
                    {"id": "3", "type": "Web"}
                ]),
            )
            .unwrap();
        store
            .save(
                DocName::Skills,
                &json!([
                    {"subSkills": ["a", "b", "c"]},
                    {"subSkills": ["d", "e"]}
                ]),
            )
            .unwrap();

        let stats = run(&mut store).unwrap();
        assert_eq!(stats.total_projects, 3);
        assert_eq!(stats.total_skills, 5);
        assert_eq!(stats.project_types["Web"], 2);
        assert_eq!(stats.project_types["IoT"], 1);
        // "YYYY-MM-DD HH:MM"
        assert_eq!(stats.last_updated.len(), 16);
    }

    #[test]
    fn stats_on_empty_store() {
        let mut store = InMemoryStore::new();
        let stats = run(&mut store).unwrap();
        assert_eq!(stats.total_projects, 0);
        assert_eq!(stats.total_skills, 0);
        assert!(stats.project_types.is_empty());
    }
}

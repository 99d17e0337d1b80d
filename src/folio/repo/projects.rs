use crate::error::{FolioError, Result};
use crate::model::DocName;
use crate::store::DocumentStore;
use chrono::Local;
use serde_json::Value;
use std::collections::BTreeMap;

/// All stored projects, or empty when the document is not an array.
pub fn list<S: DocumentStore>(store: &mut S) -> Result<Vec<Value>> {
    let doc = store.load(DocName::Projects)?;
    match doc {
        Value::Array(items) => Ok(items),
        _ => Ok(Vec::new()),
    }
}

/// Append a new project.
///
/// The id is server-assigned (max existing numeric id + 1, or 1 on an empty
/// list) and overwrites anything the client sent; `date` is stamped with
/// today. Returns the record as stored.
pub fn create<S: DocumentStore>(store: &mut S, partial: Value) -> Result<Value> {
    let Value::Object(mut record) = partial else {
        return Err(FolioError::InvalidInput(
            "Project payload must be a JSON object".to_string(),
        ));
    };

    let mut projects = list(store)?;
    let next_id = next_project_id(&projects)?;

    record.insert("id".to_string(), Value::String(next_id));
    record.insert(
        "date".to_string(),
        Value::String(Local::now().format("%Y-%m-%d").to_string()),
    );

    let stored = Value::Object(record);
    projects.push(stored.clone());
    store.save(DocName::Projects, &Value::Array(projects))?;
    Ok(stored)
}

/// Replace the first record whose id matches, keeping the path id over
/// whatever the payload carries. Unknown id is a not-found error and leaves
/// storage untouched. Duplicate ids: only the first is replaced.
pub fn update<S: DocumentStore>(store: &mut S, id: &str, replacement: Value) -> Result<Value> {
    let Value::Object(mut record) = replacement else {
        return Err(FolioError::InvalidInput(
            "Project payload must be a JSON object".to_string(),
        ));
    };

    let mut projects = list(store)?;
    let Some(pos) = projects.iter().position(|p| id_matches(p, id)) else {
        return Err(FolioError::ProjectNotFound(id.to_string()));
    };

    record.insert("id".to_string(), Value::String(id.to_string()));
    let stored = Value::Object(record);
    projects[pos] = stored.clone();
    store.save(DocName::Projects, &Value::Array(projects))?;
    Ok(stored)
}

/// Remove every record whose id matches. Succeeds even when nothing did.
pub fn delete<S: DocumentStore>(store: &mut S, id: &str) -> Result<()> {
    let mut projects = list(store)?;
    projects.retain(|p| !id_matches(p, id));
    store.save(DocName::Projects, &Value::Array(projects))
}

/// Group projects by their `type` field, defaulting to "Other".
pub fn counts_by_type(projects: &[Value]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for project in projects {
        let Value::Object(record) = project else {
            continue;
        };
        let ptype = record
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("Other");
        *counts.entry(ptype.to_string()).or_insert(0) += 1;
    }
    counts
}

fn id_matches(project: &Value, id: &str) -> bool {
    match project.get("id") {
        Some(Value::String(s)) => s == id,
        Some(Value::Number(n)) => n.to_string() == id,
        _ => false,
    }
}

fn next_project_id(projects: &[Value]) -> Result<String> {
    let mut max_id: u64 = 0;
    for project in projects {
        let parsed = match project.get("id") {
            Some(Value::String(s)) => s.parse::<u64>().ok(),
            Some(Value::Number(n)) => n.as_u64(),
            _ => None,
        };
        let id = parsed.ok_or_else(|| {
            FolioError::Store(format!(
                "Existing project id is not numeric: {:?}",
                project.get("id")
            ))
        })?;
        max_id = max_id.max(id);
    }
    Ok((max_id + 1).to_string())
}

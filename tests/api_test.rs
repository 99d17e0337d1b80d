use folio::api::FolioApi;
use folio::error::FolioError;
use folio::model::DocName;
use folio::store::memory::InMemoryStore;
use folio::store::DocumentStore;
use serde_json::json;

fn api() -> FolioApi<InMemoryStore> {
    FolioApi::new(InMemoryStore::new())
}

#[test]
fn project_ids_are_assigned_monotonically() {
    let mut api = api();
    let first = api.create_project(json!({"title": "one"})).unwrap();
    assert_eq!(first["id"], "1");

    let second = api.create_project(json!({"title": "two"})).unwrap();
    assert_eq!(second["id"], "2");

    // A gap in existing ids still yields max + 1.
    api.delete_project("1").unwrap();
    let third = api.create_project(json!({"title": "three"})).unwrap();
    assert_eq!(third["id"], "3");
}

#[test]
fn update_unknown_project_is_not_found() {
    let mut api = api();
    api.create_project(json!({"title": "only"})).unwrap();
    let err = api.update_project("5", json!({"title": "x"})).unwrap_err();
    assert!(matches!(err, FolioError::ProjectNotFound(_)));
    assert_eq!(api.list_projects().unwrap().len(), 1);
}

#[test]
fn delete_removes_every_matching_record() {
    // Duplicate ids can only come from a hand-edited file; seed the store
    // before wrapping it in the facade.
    let mut store = InMemoryStore::new();
    store
        .save(
            DocName::Projects,
            &json!([{"id": "2"}, {"id": "2"}, {"id": "3"}]),
        )
        .unwrap();
    let mut api = FolioApi::new(store);

    api.delete_project("2").unwrap();
    assert_eq!(api.list_projects().unwrap(), vec![json!({"id": "3"})]);

    // Deleting an absent id is still a success.
    api.delete_project("2").unwrap();
    assert_eq!(api.list_projects().unwrap().len(), 1);
}

#[test]
fn whole_document_replace_round_trips() {
    let mut api = api();
    let skills = json!([{"category": "AI", "subSkills": ["ml", "cv", "llm"]}]);
    api.replace_skills(&skills).unwrap();
    assert_eq!(api.get_skills().unwrap(), skills);

    let profile = json!({"personalInfo": {"fullName": "Someone Else"}});
    api.replace_profile(&profile).unwrap();
    assert_eq!(api.get_profile().unwrap(), profile);
}

#[test]
fn settings_are_seeded_then_replaceable() {
    let mut api = api();
    let seeded = api.get_settings().unwrap();
    assert_eq!(seeded["site_title"], "My Portfolio");

    let mut settings = seeded.clone();
    settings["site_title"] = json!("Tanvir's Portfolio");
    api.replace_settings(&settings).unwrap();
    assert_eq!(api.get_settings().unwrap()["site_title"], "Tanvir's Portfolio");
}

#[test]
fn dashboard_stats_reflect_documents() {
    let mut api = api();
    api.create_project(json!({"title": "a", "type": "Web"}))
        .unwrap();
    api.create_project(json!({"title": "b"})).unwrap();
    api.replace_skills(&json!([
        {"subSkills": ["x", "y"]},
        {"subSkills": ["z"]},
        {"noSubs": true}
    ]))
    .unwrap();

    let stats = api.dashboard_stats().unwrap();
    assert_eq!(stats.total_projects, 2);
    assert_eq!(stats.total_skills, 3);
    assert_eq!(stats.project_types["Web"], 1);
    assert_eq!(stats.project_types["Other"], 1);
}

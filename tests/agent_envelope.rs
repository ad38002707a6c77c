use scheme_setu::{
    agent::{Response, SchemeSetuAgent, Status},
    eligibility::PolicyEngine,
};
use serde_json::{json, Value};

const YOUTH_SCHEME: &str = r#"{
    "request_type": "learn_new_scheme",
    "scheme_data": {
        "name": "Youth Skill Grant",
        "description": "Training stipend",
        "benefit": "Rs 8000",
        "rules": {
            "min_age": 18,
            "max_age": 30,
            "max_income": 200000,
            "category": ["General", "OBC"]
        }
    }
}"#;

fn agent_at(path: &std::path::Path) -> SchemeSetuAgent {
    SchemeSetuAgent::new("SchemeSetu_Agent_v1", PolicyEngine::open(path))
}

async fn send(agent: &SchemeSetuAgent, request: Value) -> Response {
    serde_json::from_str(&agent.listen(&request.to_string()).await).unwrap()
}

async fn matched_ids(agent: &SchemeSetuAgent, request: Value) -> Vec<String> {
    let response = send(agent, request).await;
    assert_eq!(response.status, Status::Success);
    response.data.unwrap().into_iter().map(|s| s.id).collect()
}

#[tokio::test]
async fn learn_assigns_sequential_ids() {
    let dir = tempfile::tempdir().unwrap();
    let agent = agent_at(&dir.path().join("schemes.json"));

    let first: Response = serde_json::from_str(&agent.listen(YOUTH_SCHEME).await).unwrap();
    let second: Response = serde_json::from_str(&agent.listen(YOUTH_SCHEME).await).unwrap();

    assert_eq!(first.scheme_id.as_deref(), Some("SCH001"));
    assert_eq!(second.scheme_id.as_deref(), Some("SCH002"));
    assert_eq!(
        first.message.as_deref(),
        Some("New scheme learned successfully. ID: SCH001")
    );
}

#[tokio::test]
async fn eligibility_scenarios() {
    let dir = tempfile::tempdir().unwrap();
    let agent = agent_at(&dir.path().join("schemes.json"));
    agent.listen(YOUTH_SCHEME).await;

    let base = json!({ "request_type": "check_eligibility", "age": 22, "income": 120000, "caste": "OBC" });
    assert_eq!(matched_ids(&agent, base.clone()).await, vec!["SCH001"]);

    let mut older = base.clone();
    older["age"] = json!(35);
    assert!(matched_ids(&agent, older).await.is_empty());

    let mut richer = base.clone();
    richer["income"] = json!(250000);
    assert!(matched_ids(&agent, richer).await.is_empty());

    let mut other_category = base.clone();
    other_category["caste"] = json!("SC");
    assert!(matched_ids(&agent, other_category).await.is_empty());

    let mut at_cap = base;
    at_cap["income"] = json!(200000);
    assert_eq!(matched_ids(&agent, at_cap).await, vec!["SCH001"]);
}

#[tokio::test]
async fn scheme_without_rules_matches_any_profile() {
    let dir = tempfile::tempdir().unwrap();
    let agent = agent_at(&dir.path().join("schemes.json"));
    agent
        .listen(r#"{"request_type": "learn_new_scheme", "scheme_data": {"name": "Ration"}}"#)
        .await;

    for profile in [
        json!({}),
        json!({ "age": 99, "income": 10000000, "caste": "ST" }),
        json!({ "age": null, "income": null, "caste": null }),
    ] {
        assert_eq!(matched_ids(&agent, profile).await, vec!["SCH001"]);
    }
}

#[tokio::test]
async fn missing_caste_defaults_to_general() {
    let dir = tempfile::tempdir().unwrap();
    let agent = agent_at(&dir.path().join("schemes.json"));
    agent
        .listen(
            r#"{"request_type": "learn_new_scheme", "scheme_data": {"name": "General only", "rules": {"category": ["General"]}}}"#,
        )
        .await;

    assert_eq!(matched_ids(&agent, json!({ "age": 30 })).await, vec!["SCH001"]);
    assert!(matched_ids(&agent, json!({ "age": 30, "caste": "SC" })).await.is_empty());
}

#[tokio::test]
async fn learned_schemes_persist_with_extra_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schemes.json");

    {
        let agent = agent_at(&path);
        let response = send(
            &agent,
            json!({
                "request_type": "learn_new_scheme",
                "scheme_data": {
                    "id": "SCH999",
                    "name": "Housing",
                    "state": "Karnataka",
                    "rules": { "min_age": 21 }
                }
            }),
        )
        .await;
        assert_eq!(response.scheme_id.as_deref(), Some("SCH001"));
    }

    let on_disk: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk[0]["id"], json!("SCH001"));
    assert_eq!(on_disk[0]["state"], json!("Karnataka"));

    let agent = agent_at(&path);
    let response = send(&agent, json!({ "age": 25 })).await;
    let schemes = response.data.unwrap();
    assert_eq!(schemes.len(), 1);
    assert_eq!(schemes[0].extra.get("state"), Some(&json!("Karnataka")));
}

#[tokio::test]
async fn corrupt_store_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schemes.json");
    std::fs::write(&path, "[{\"name\": ").unwrap();

    let agent = agent_at(&path);
    assert!(matched_ids(&agent, json!({ "age": 30 })).await.is_empty());

    let response: Response = serde_json::from_str(&agent.listen(YOUTH_SCHEME).await).unwrap();
    assert_eq!(response.scheme_id.as_deref(), Some("SCH001"));
}

#[tokio::test]
async fn float_ages_are_evaluated() {
    let dir = tempfile::tempdir().unwrap();
    let agent = agent_at(&dir.path().join("schemes.json"));
    agent
        .listen(
            r#"{"request_type": "learn_new_scheme", "scheme_data": {"name": "Adults", "rules": {"min_age": 18.0, "max_age": 30.0}}}"#,
        )
        .await;

    assert_eq!(matched_ids(&agent, json!({ "age": 22.0 })).await, vec!["SCH001"]);
    assert!(matched_ids(&agent, json!({ "age": 30.5 })).await.is_empty());
}

#[tokio::test]
async fn error_envelopes() {
    let dir = tempfile::tempdir().unwrap();
    let agent = agent_at(&dir.path().join("schemes.json"));

    let unknown = send(&agent, json!({ "request_type": "rate_scheme" })).await;
    assert_eq!(unknown.status, Status::Error);
    assert_eq!(unknown.message.as_deref(), Some("Unknown request type: rate_scheme"));

    let missing = send(&agent, json!({ "request_type": "learn_new_scheme" })).await;
    assert_eq!(missing.status, Status::Error);
    assert_eq!(missing.message.as_deref(), Some("No scheme_data provided"));

    let malformed: Response = serde_json::from_str(&agent.listen("{{{").await).unwrap();
    assert_eq!(malformed.status, Status::Error);
    assert!(malformed.message.is_some());
}

use assert_json_diff::assert_json_eq;
use json_action_client::model::requests::ActionRequest;
use serde_json::json;

#[test]
fn full_envelope_serializes_to_wire_shape() {
    let request = ActionRequest::new("db", "listDatabases")
        .with_params(json!({"databaseName": "faircom"}))
        .with_auth_token("tok-123")
        .with_debug("max");

    assert_json_eq!(
        request.to_value(),
        json!({
            "api": "db",
            "action": "listDatabases",
            "params": {"databaseName": "faircom"},
            "authToken": "tok-123",
            "debug": "max",
        })
    );
}

#[test]
fn absent_optionals_are_omitted() {
    let request = ActionRequest::new("db", "listDatabases").to_value();

    assert_json_eq!(
        request,
        json!({
            "api": "db",
            "action": "listDatabases",
            "params": {},
        })
    );
    assert!(request.get("authToken").is_none());
    assert!(request.get("debug").is_none());
}

//! Request bodies and response paths for the four service mutations.

use ff_types::Attributes;
use serde_json::{json, Value};

const CREATE_RECORD_MUTATION: &str = r#"
mutation createRecord($domainId: ID!, $input: CreateRecordInput!) {
  createRecord(domainId: $domainId, input: $input) {
    payload {
      id
    }
  }
}
"#;

const UPDATE_RECORD_MUTATION: &str = r#"
mutation updateRecord($recordId: ID!) {
  updateRecord(id: $recordId) {
    success
  }
}
"#;

const CREATE_ACTION_MUTATION: &str = r#"
mutation createAction($eventId: ID!, $input: CreateActionInput!) {
  createAction(eventId: $eventId, input: $input) {
    payload {
      id
    }
  }
}
"#;

const UPDATE_ACTION_MUTATION: &str = r#"
mutation updateAction($actionId: ID!, $input: UpdateActionInput!) {
  updateAction(id: $actionId, input: $input) {
    success
  }
}
"#;

/// Body registering a new visit record under `domain_id`.
pub fn create_record(domain_id: &str, attrs: &Attributes) -> Value {
    json!({
        "query": CREATE_RECORD_MUTATION,
        "variables": {
            "domainId": domain_id,
            "input": attrs,
        },
    })
}

/// Body extending the duration of an existing record.
pub fn update_record(record_id: &str) -> Value {
    json!({
        "query": UPDATE_RECORD_MUTATION,
        "variables": {
            "recordId": record_id,
        },
    })
}

/// Body emitting a new action under `event_id`.
pub fn create_action(event_id: &str, attrs: &Attributes) -> Value {
    json!({
        "query": CREATE_ACTION_MUTATION,
        "variables": {
            "eventId": event_id,
            "input": attrs,
        },
    })
}

/// Body updating an existing action in place.
pub fn update_action(action_id: &str, attrs: &Attributes) -> Value {
    json!({
        "query": UPDATE_ACTION_MUTATION,
        "variables": {
            "actionId": action_id,
            "input": attrs,
        },
    })
}

/// Extracts the server-assigned id from a creation response:
/// `data.<operation>.payload.id`.
pub fn created_id(body: &Value, operation: &str) -> Option<String> {
    body.get("data")?
        .get(operation)?
        .get("payload")?
        .get("id")?
        .as_str()
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(location: &str) -> Attributes {
        let mut a = Attributes::new();
        a.insert("siteLocation".into(), location.into());
        a
    }

    #[test]
    fn create_record_body_shape() {
        let body = create_record("domain-1", &attrs("https://x"));
        let query = body["query"].as_str().unwrap();
        assert!(query.contains("mutation createRecord"));
        assert_eq!(body["variables"]["domainId"], "domain-1");
        assert_eq!(body["variables"]["input"]["siteLocation"], "https://x");
    }

    #[test]
    fn update_record_body_shape() {
        let body = update_record("rec-1");
        assert!(body["query"].as_str().unwrap().contains("mutation updateRecord"));
        assert_eq!(body["variables"]["recordId"], "rec-1");
    }

    #[test]
    fn action_body_shapes() {
        let body = create_action("evt-1", &attrs("https://x"));
        assert!(body["query"].as_str().unwrap().contains("mutation createAction"));
        assert_eq!(body["variables"]["eventId"], "evt-1");

        let body = update_action("act-1", &attrs("https://x"));
        assert!(body["query"].as_str().unwrap().contains("mutation updateAction"));
        assert_eq!(body["variables"]["actionId"], "act-1");
        assert_eq!(body["variables"]["input"]["siteLocation"], "https://x");
    }

    #[test]
    fn created_id_follows_payload_path() {
        let body = serde_json::json!({
            "data": { "createRecord": { "payload": { "id": "rec-1" } } }
        });
        assert_eq!(created_id(&body, "createRecord").as_deref(), Some("rec-1"));
        assert_eq!(created_id(&body, "createAction"), None);
        assert_eq!(created_id(&serde_json::json!({}), "createRecord"), None);
    }
}

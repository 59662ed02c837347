// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! core/v1 events

use crate::constants::NONE;
use crate::error::Result;
use crate::kubernetes::render::{lines_or_empty, qualified_name};
use crate::kubernetes::resources::list_namespaced_or_all;
use crate::tools::args::{EventArgs, NamespaceArgs};
use crate::tools::shared::describe_or_summarize;
use k8s_openapi::api::core::v1::Event;
use kube::Client;
use tracing::instrument;

fn message(event: &Event) -> String {
    event.message.clone().unwrap_or_else(|| NONE.to_string())
}

/// `namespace/name: message` for every event
#[instrument(skip(client))]
pub async fn list_events(client: Client, args: NamespaceArgs) -> Result<String> {
    let events: Vec<Event> = list_namespaced_or_all(client, args.namespace()).await?;
    Ok(lines_or_empty(
        events
            .iter()
            .map(|e| format!("{}: {}", qualified_name(e), message(e)))
            .collect(),
        "events",
    ))
}

#[instrument(skip(client))]
pub async fn get_event(client: Client, args: EventArgs) -> Result<String> {
    describe_or_summarize(client, args.target(), "events", |e: &Event| Ok(message(e))).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{list_json, object_json, MockService};
    use serde_json::json;

    fn event_json(namespace: &str, name: &str, message: Option<&str>) -> serde_json::Value {
        let mut extra = json!({ "involvedObject": { "kind": "Pod", "name": "web" } });
        if let Some(m) = message {
            extra["message"] = json!(m);
        }
        object_json("v1", "Event", Some(namespace), name, extra)
    }

    #[tokio::test]
    async fn test_list_events_with_messages() {
        let mock = MockService::new().on_get(
            "/api/v1/namespaces/default/events",
            200,
            &list_json(
                "v1",
                "Event",
                vec![
                    event_json("default", "web.17a", Some("Pulling image \"nginx\"")),
                    event_json("default", "web.17b", None),
                ],
            ),
        );
        let args = NamespaceArgs {
            namespace: Some("default".to_string()),
        };

        let out = list_events(mock.into_client(), args).await.unwrap();
        assert_eq!(
            out,
            "default/web.17a: Pulling image \"nginx\"\ndefault/web.17b: <none>"
        );
    }

    #[tokio::test]
    async fn test_get_events_without_target_summarizes_all() {
        let mock = MockService::new().on_get(
            "/api/v1/events",
            200,
            &list_json(
                "v1",
                "Event",
                vec![
                    event_json("default", "a", Some("Scheduled")),
                    event_json("prod", "b", Some("Started")),
                ],
            ),
        );

        let out = get_event(mock.into_client(), EventArgs::default()).await.unwrap();
        assert_eq!(out, "default/a: Scheduled\n\nprod/b: Started");
    }

    #[tokio::test]
    async fn test_get_single_event() {
        let mock = MockService::new().on_get(
            "/api/v1/namespaces/default/events/a",
            200,
            &event_json("default", "a", Some("Scheduled")).to_string(),
        );
        let args = EventArgs {
            event_name: Some("a".to_string()),
            namespace: Some("default".to_string()),
        };

        let out = get_event(mock.into_client(), args).await.unwrap();
        assert!(out.contains("message: Scheduled"));
    }
}

//! Typed per-component view of the sync status payload

use crate::types::SyncStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::collections::BTreeMap;
use std::fmt;

/// Components reported by the external sync script
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncComponent {
    Git,
    Docker,
    Gcp,
    Cloudflare,
    Workspace,
}

impl SyncComponent {
    pub const ALL: [SyncComponent; 5] = [
        SyncComponent::Git,
        SyncComponent::Docker,
        SyncComponent::Gcp,
        SyncComponent::Cloudflare,
        SyncComponent::Workspace,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SyncComponent::Git => "git",
            SyncComponent::Docker => "docker",
            SyncComponent::Gcp => "gcp",
            SyncComponent::Cloudflare => "cloudflare",
            SyncComponent::Workspace => "workspace",
        }
    }
}

impl fmt::Display for SyncComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentState {
    Synced,
    Syncing,
    Error,
    #[default]
    Unknown,
}

/// Sync state of one component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSync {
    pub status: ComponentState,
    pub last_sync: Option<DateTime<Utc>>,
    pub message: String,
}

impl Default for ComponentSync {
    fn default() -> Self {
        Self {
            status: ComponentState::Unknown,
            last_sync: None,
            message: "Not yet synced".to_string(),
        }
    }
}

/// Every component's state, interpreted from a [`SyncStatus`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncComponents {
    pub generated_at: DateTime<Utc>,
    pub fresh: bool,
    pub last_full_sync: Option<DateTime<Utc>>,
    pub components: BTreeMap<SyncComponent, ComponentSync>,
}

impl SyncComponents {
    /// Interpret the payload of `status`.
    ///
    /// Component entries are looked up under a `components` object first,
    /// then at the top level. Missing or malformed entries fall back to
    /// [`ComponentSync::default`].
    pub fn from_status(status: &SyncStatus, fresh: bool) -> Self {
        let nested = status
            .payload
            .get("components")
            .and_then(JsonValue::as_object);

        let components = SyncComponent::ALL
            .into_iter()
            .map(|component| {
                let entry = nested
                    .and_then(|map| map.get(component.as_str()))
                    .or_else(|| status.payload.get(component.as_str()));
                (component, entry.map(parse_component).unwrap_or_default())
            })
            .collect();

        let last_full_sync = status
            .payload
            .get("lastFullSync")
            .and_then(|value| serde_json::from_value(value.clone()).ok());

        Self {
            generated_at: status.generated_at,
            fresh,
            last_full_sync,
            components,
        }
    }

    pub fn all_synced(&self) -> bool {
        self.components
            .values()
            .all(|c| c.status == ComponentState::Synced)
    }
}

fn parse_component(value: &JsonValue) -> ComponentSync {
    let Some(map) = value.as_object() else {
        return ComponentSync::default();
    };

    let status = field::<ComponentState>(map, "status");
    let Some(status) = status else {
        return ComponentSync::default();
    };

    ComponentSync {
        status,
        last_sync: field(map, "lastSync"),
        message: field(map, "message").unwrap_or_default(),
    }
}

fn field<T: serde::de::DeserializeOwned>(map: &Map<String, JsonValue>, key: &str) -> Option<T> {
    map.get(key)
        .and_then(|value| serde_json::from_value(value.clone()).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn status(payload: JsonValue) -> SyncStatus {
        let mut value = json!({
            "generatedAt": "2026-10-19T12:00:00Z",
            "source": "infinity-sync"
        });
        if let (Some(target), Some(extra)) = (value.as_object_mut(), payload.as_object()) {
            target.extend(extra.clone());
        }
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_missing_components_default_to_unknown() {
        let view = SyncComponents::from_status(&status(json!({})), true);

        assert_eq!(view.components.len(), SyncComponent::ALL.len());
        for component in view.components.values() {
            assert_eq!(component, &ComponentSync::default());
        }
        assert!(view.last_full_sync.is_none());
        assert!(!view.all_synced());
    }

    #[test]
    fn test_top_level_and_nested_entries() {
        let view = SyncComponents::from_status(
            &status(json!({
                "git": {
                    "component": "git",
                    "status": "synced",
                    "lastSync": "2026-10-19T11:59:00Z",
                    "message": "Pushed to origin"
                },
                "components": {
                    "docker": { "status": "error", "lastSync": null, "message": "build failed" }
                },
                "gcp": { "status": "exploded" },
                "cloudflare": "synced",
                "lastFullSync": "2026-10-19T11:00:00Z"
            })),
            false,
        );

        let git = &view.components[&SyncComponent::Git];
        assert_eq!(git.status, ComponentState::Synced);
        assert!(git.last_sync.is_some());
        assert_eq!(git.message, "Pushed to origin");

        assert_eq!(
            view.components[&SyncComponent::Docker].status,
            ComponentState::Error
        );
        assert_eq!(
            view.components[&SyncComponent::Gcp],
            ComponentSync::default()
        );
        assert_eq!(
            view.components[&SyncComponent::Cloudflare],
            ComponentSync::default()
        );
        assert!(view.last_full_sync.is_some());
        assert!(!view.fresh);
    }

    #[test]
    fn test_serializes_lowercase_keys() {
        let view = SyncComponents::from_status(&status(json!({})), true);
        let value = serde_json::to_value(&view).unwrap();

        assert_eq!(value["components"]["workspace"]["status"], "unknown");
        assert!(value["components"]["workspace"]["lastSync"].is_null());
        assert!(value["lastFullSync"].is_null());
        assert_eq!(value["fresh"], true);
    }
}

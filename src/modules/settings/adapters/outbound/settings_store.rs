use crate::modules::settings::core::attendance_settings::AttendanceSettings;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Settings together with the version they were read at. Organizations
/// without stored settings are at version 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionedSettings {
    pub settings: AttendanceSettings,
    pub version: i64,
}

#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Organizations without stored settings get the defaults.
    async fn get_settings(&self, organization_id: &str) -> anyhow::Result<AttendanceSettings> {
        Ok(self.get_versioned(organization_id).await?.settings)
    }

    async fn get_versioned(&self, organization_id: &str) -> anyhow::Result<VersionedSettings>;

    /// Stores `settings` only while the stored version is still
    /// `expected_version`. Returns false when another write got there first.
    async fn save_if_version(
        &self,
        organization_id: &str,
        expected_version: i64,
        settings: AttendanceSettings,
    ) -> anyhow::Result<bool>;
}

#[derive(Default)]
pub struct InMemorySettingsStore {
    settings: RwLock<HashMap<String, VersionedSettings>>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn get_versioned(&self, organization_id: &str) -> anyhow::Result<VersionedSettings> {
        Ok(self
            .settings
            .read()
            .await
            .get(organization_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn save_if_version(
        &self,
        organization_id: &str,
        expected_version: i64,
        settings: AttendanceSettings,
    ) -> anyhow::Result<bool> {
        let mut stored = self.settings.write().await;
        let current = stored.get(organization_id).map_or(0, |s| s.version);
        if current != expected_version {
            return Ok(false);
        }
        stored.insert(
            organization_id.to_string(),
            VersionedSettings {
                settings,
                version: current + 1,
            },
        );
        Ok(true)
    }
}

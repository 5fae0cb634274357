use crate::modules::settings::adapters::outbound::settings_store::SettingsStore;
use crate::modules::settings::core::attendance_settings::{
    AttendanceSettings, AttendanceSettingsPatch,
};
use crate::shared::application::errors::ApplicationError;
use std::sync::Arc;
use tracing::{info, warn};

pub struct UpdateAttendanceSettingsHandler {
    store: Arc<dyn SettingsStore>,
}

impl UpdateAttendanceSettingsHandler {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    pub async fn get(&self, organization_id: &str) -> Result<AttendanceSettings, ApplicationError> {
        Ok(self.store.get_settings(organization_id).await?)
    }

    #[tracing::instrument(skip(self, patch))]
    pub async fn handle(
        &self,
        organization_id: &str,
        patch: AttendanceSettingsPatch,
    ) -> Result<AttendanceSettings, ApplicationError> {
        let current = self.store.get_versioned(organization_id).await?;
        let next = current.settings.apply(&patch)?;
        let saved = self
            .store
            .save_if_version(organization_id, current.version, next.clone())
            .await?;
        if !saved {
            warn!(organization_id, "attendance settings changed during the update");
            return Err(ApplicationError::Conflict(format!(
                "attendance settings for {organization_id} changed"
            )));
        }
        info!(organization_id, version = current.version + 1, "attendance settings updated");
        Ok(next)
    }
}

#[cfg(test)]
mod update_attendance_settings_handler_tests {
    use super::*;
    use crate::modules::settings::adapters::outbound::settings_store::{
        InMemorySettingsStore, VersionedSettings,
    };
    use crate::shared::application::errors::ErrorKind;
    use async_trait::async_trait;
    use rstest::{fixture, rstest};

    /// Lets another administrator's patch land between the read and the save.
    struct ContendedStore {
        inner: InMemorySettingsStore,
    }

    #[async_trait]
    impl SettingsStore for ContendedStore {
        async fn get_versioned(&self, organization_id: &str) -> anyhow::Result<VersionedSettings> {
            let read = self.inner.get_versioned(organization_id).await?;
            let other = AttendanceSettings {
                late_clock_in_grace_minutes: 5,
                ..read.settings.clone()
            };
            self.inner
                .save_if_version(organization_id, read.version, other)
                .await?;
            Ok(read)
        }

        async fn save_if_version(
            &self,
            organization_id: &str,
            expected_version: i64,
            settings: AttendanceSettings,
        ) -> anyhow::Result<bool> {
            self.inner
                .save_if_version(organization_id, expected_version, settings)
                .await
        }
    }

    #[fixture]
    fn before_each() -> (Arc<InMemorySettingsStore>, UpdateAttendanceSettingsHandler) {
        let store = Arc::new(InMemorySettingsStore::new());
        let handler = UpdateAttendanceSettingsHandler::new(store.clone());
        (store, handler)
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_persist_a_valid_patch(
        before_each: (Arc<InMemorySettingsStore>, UpdateAttendanceSettingsHandler),
    ) {
        let (store, handler) = before_each;
        let patch = AttendanceSettingsPatch {
            require_schedule_for_clock_in: Some(true),
            ..Default::default()
        };
        handler.handle("org-1", patch).await.unwrap();
        assert!(
            store
                .get_settings("org-1")
                .await
                .unwrap()
                .require_schedule_for_clock_in
        );
        assert!(
            !store
                .get_settings("org-2")
                .await
                .unwrap()
                .require_schedule_for_clock_in
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_the_stored_settings_when_a_patch_is_invalid(
        before_each: (Arc<InMemorySettingsStore>, UpdateAttendanceSettingsHandler),
    ) {
        let (store, handler) = before_each;
        let patch = AttendanceSettingsPatch {
            qr_expiration_seconds: Some(1000),
            ..Default::default()
        };
        assert!(handler.handle("org-1", patch).await.is_err());
        assert_eq!(
            store.get_settings("org-1").await.unwrap(),
            AttendanceSettings::default()
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_not_overwrite_a_concurrent_update() {
        let store = Arc::new(ContendedStore {
            inner: InMemorySettingsStore::new(),
        });
        let handler = UpdateAttendanceSettingsHandler::new(store.clone());
        let patch = AttendanceSettingsPatch {
            require_schedule_for_clock_in: Some(true),
            ..Default::default()
        };
        let error = handler.handle("org-1", patch).await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Conflict);

        let stored = store.inner.get_settings("org-1").await.unwrap();
        assert_eq!(stored.late_clock_in_grace_minutes, 5);
        assert!(!stored.require_schedule_for_clock_in);
    }
}

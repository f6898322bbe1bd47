// prose-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;
use pretty_assertions::assert_eq;

use prose_device_trust::app::deps::AppDependencies;
use prose_device_trust::app::services::MemberDeviceService;
use prose_device_trust::dtos::{TrustIndicator, VerificationDialog};
use prose_device_trust::test::mock_data;
use prose_device_trust::{
    device_id, user_id, DeviceTrustDomainService, DeviceTrustError, DeviceVerificationPrompt,
    InMemoryDeviceTrustService,
};

/// Answers every dialog with a fixed value and remembers what it was shown.
struct ScriptedPrompt {
    answer: bool,
    shown_dialogs: Mutex<Vec<VerificationDialog>>,
}

impl ScriptedPrompt {
    fn new(answer: bool) -> Self {
        Self {
            answer,
            shown_dialogs: Default::default(),
        }
    }
}

#[async_trait]
impl DeviceVerificationPrompt for ScriptedPrompt {
    async fn confirm(&self, dialog: VerificationDialog) -> bool {
        self.shown_dialogs.lock().push(dialog);
        self.answer
    }
}

fn make_service(
    answer: bool,
) -> (
    MemberDeviceService,
    Arc<InMemoryDeviceTrustService>,
    Arc<ScriptedPrompt>,
) {
    let store = Arc::new(InMemoryDeviceTrustService::new());
    let prompt = Arc::new(ScriptedPrompt::new(answer));

    let deps = AppDependencies {
        device_trust_domain_service: store.clone(),
        verification_prompt: prompt.clone(),
    };

    (MemberDeviceService::from(&deps), store, prompt)
}

#[tokio::test]
async fn test_toggles_trust_of_stored_device() -> Result<()> {
    let (service, store, prompt) = make_service(true);
    let user_id = user_id!("jane.doe@prose.org");
    store.insert_device(&user_id, mock_data::device("ABC123", Some("Phone")));

    let device = store.device(&user_id, &device_id!("ABC123"));
    let view = service.render(&user_id, device.as_ref(), false);
    assert_eq!(
        view.info.as_ref().map(|info| info.indicator),
        Some(TrustIndicator::Unverified)
    );

    let verify_control = view.verify_control.expect("Missing verify control");
    service.activate(&verify_control).await?;
    assert_eq!(prompt.shown_dialogs.lock().len(), 1);

    let device = store.device(&user_id, &device_id!("ABC123"));
    let view = service.render(&user_id, device.as_ref(), false);
    assert_eq!(
        view.info.as_ref().map(|info| info.indicator),
        Some(TrustIndicator::Verified)
    );
    assert_eq!(
        view.verify_control.as_ref().map(|control| control.label()),
        Some("Unverify".to_string())
    );

    let block_control = view.block_control.expect("Missing block control");
    service.activate(&block_control).await?;

    let device = store
        .device(&user_id, &device_id!("ABC123"))
        .expect("Missing device");
    assert!(device.is_verified());
    assert!(device.is_blocked());
    assert_eq!(
        service
            .render(&user_id, Some(&device), false)
            .info
            .map(|info| info.indicator),
        Some(TrustIndicator::Blocked)
    );
    assert_eq!(prompt.shown_dialogs.lock().len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_declined_verification_leaves_device_unverified() -> Result<()> {
    let (service, store, prompt) = make_service(false);
    let user_id = user_id!("jane.doe@prose.org");
    store.insert_device(&user_id, mock_data::device("ABC123", Some("Phone")));

    let device = store
        .device(&user_id, &device_id!("ABC123"))
        .expect("Missing device");
    service.verify_device(&user_id, &device).await?;

    let dialogs = prompt.shown_dialogs.lock().clone();
    assert_eq!(dialogs, vec![VerificationDialog::for_device(&device)]);
    assert!(!store
        .device(&user_id, &device_id!("ABC123"))
        .expect("Missing device")
        .is_verified());

    Ok(())
}

#[tokio::test]
async fn test_fails_for_unknown_device() -> Result<()> {
    let store = InMemoryDeviceTrustService::new();
    let user_id = user_id!("jane.doe@prose.org");

    let err = store
        .set_device_blocked(&user_id, &device_id!("ABC123"), true)
        .await
        .expect_err("Expected an error");

    assert!(matches!(
        err.downcast_ref::<DeviceTrustError>(),
        Some(DeviceTrustError::UnknownDevice { .. })
    ));

    Ok(())
}

#[tokio::test]
async fn test_ambiguous_devices_show_their_id() -> Result<()> {
    let (service, store, _) = make_service(true);
    let user_id = user_id!("jane.doe@prose.org");
    store.insert_device(&user_id, mock_data::device("ABC123", Some("Phone")));
    store.insert_device(&user_id, mock_data::device("XYZ789", Some("Phone")));
    store.insert_device(&user_id, mock_data::device("LAP001", Some("Laptop")));

    let names = store
        .devices(&user_id)
        .iter()
        .filter_map(|device| service.render(&user_id, Some(device), false).info)
        .map(|info| info.display_name)
        .collect::<Vec<_>>();

    assert_eq!(names, vec!["Phone (ABC123)", "Phone (XYZ789)", "Laptop"]);

    Ok(())
}

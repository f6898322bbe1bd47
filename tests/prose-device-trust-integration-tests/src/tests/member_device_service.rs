// prose-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{anyhow, Result};
use pretty_assertions::assert_eq;

use prose_device_trust::app::services::MemberDeviceService;
use prose_device_trust::dtos::{DeviceTrustAction, MemberDeviceView, VerificationDialog};
use prose_device_trust::test::{mock_data, MockAppDependencies};
use prose_device_trust::{device_id, user_id};

#[tokio::test]
async fn test_cancelled_verification_does_not_verify_device() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.verification_prompt
        .expect_confirm()
        .once()
        .returning(|_| Box::pin(async { false }));
    deps.device_trust_domain_service
        .expect_set_device_verified()
        .never();

    let service = MemberDeviceService::from(&deps.into_deps());
    let device = mock_data::device("ABC123", Some("Phone"));

    service
        .perform_action(&user_id!("jane.doe@prose.org"), &device, DeviceTrustAction::Verify)
        .await?;

    Ok(())
}

#[tokio::test]
async fn test_confirmed_verification_verifies_device() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    let device = mock_data::device("ABC123", Some("Phone"));

    let expected_dialog = VerificationDialog::for_device(&device);
    deps.verification_prompt
        .expect_confirm()
        .once()
        .withf(move |dialog| dialog == &expected_dialog)
        .returning(|_| Box::pin(async { true }));
    deps.device_trust_domain_service
        .expect_set_device_verified()
        .once()
        .withf(|user_id, device_id, verified| {
            user_id == &user_id!("jane.doe@prose.org")
                && device_id == &device_id!("ABC123")
                && *verified
        })
        .returning(|_, _, _| Box::pin(async { Ok(()) }));

    let service = MemberDeviceService::from(&deps.into_deps());
    service
        .verify_device(&user_id!("jane.doe@prose.org"), &device)
        .await?;

    Ok(())
}

#[tokio::test]
async fn test_unverify_does_not_ask_for_confirmation() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.verification_prompt.expect_confirm().never();
    deps.device_trust_domain_service
        .expect_set_device_verified()
        .once()
        .withf(|user_id, device_id, verified| {
            user_id == &user_id!("jane.doe@prose.org")
                && device_id == &device_id!("ABC123")
                && !*verified
        })
        .returning(|_, _, _| Box::pin(async { Ok(()) }));

    let service = MemberDeviceService::from(&deps.into_deps());
    let mut device = mock_data::device("ABC123", Some("Phone"));
    device.verified = true;

    service
        .perform_action(&user_id!("jane.doe@prose.org"), &device, DeviceTrustAction::Unverify)
        .await?;

    Ok(())
}

#[tokio::test]
async fn test_block_and_unblock_do_not_ask_for_confirmation() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.verification_prompt.expect_confirm().never();
    deps.device_trust_domain_service
        .expect_set_device_blocked()
        .once()
        .withf(|user_id, device_id, blocked| {
            user_id == &user_id!("jane.doe@prose.org")
                && device_id == &device_id!("ABC123")
                && *blocked
        })
        .returning(|_, _, _| Box::pin(async { Ok(()) }));
    deps.device_trust_domain_service
        .expect_set_device_blocked()
        .once()
        .withf(|user_id, device_id, blocked| {
            user_id == &user_id!("jane.doe@prose.org")
                && device_id == &device_id!("XYZ789")
                && !*blocked
        })
        .returning(|_, _, _| Box::pin(async { Ok(()) }));

    let service = MemberDeviceService::from(&deps.into_deps());
    let user_id = user_id!("jane.doe@prose.org");

    service.block_device(&user_id, &device_id!("ABC123")).await?;
    service.unblock_device(&user_id, &device_id!("XYZ789")).await?;

    Ok(())
}

#[tokio::test]
async fn test_activates_rendered_controls() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.verification_prompt.expect_confirm().never();
    deps.device_trust_domain_service
        .expect_set_device_blocked()
        .once()
        .withf(|_, device_id, blocked| device_id == &device_id!("ABC123") && !*blocked)
        .returning(|_, _, _| Box::pin(async { Ok(()) }));

    let service = MemberDeviceService::from(&deps.into_deps());
    let mut device = mock_data::device("ABC123", Some("Phone"));
    device.blocked = true;

    let view = service.render(&user_id!("jane.doe@prose.org"), Some(&device), false);
    let block_control = view.block_control.expect("Missing block control");
    assert_eq!(block_control.label(), "Unblock");

    service.activate(&block_control).await?;

    Ok(())
}

#[tokio::test]
async fn test_propagates_mutator_failures() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.device_trust_domain_service
        .expect_set_device_blocked()
        .once()
        .returning(|_, _, _| Box::pin(async { Err(anyhow!("Network unreachable")) }));

    let service = MemberDeviceService::from(&deps.into_deps());
    let result = service
        .block_device(&user_id!("jane.doe@prose.org"), &device_id!("ABC123"))
        .await;

    assert_eq!(
        result.map_err(|err| err.to_string()),
        Err("Network unreachable".to_string())
    );

    Ok(())
}

#[tokio::test]
async fn test_renders_empty_view_without_device() -> Result<()> {
    let deps = MockAppDependencies::default();
    let service = MemberDeviceService::from(&deps.into_deps());

    let view = service.render(&user_id!("jane.doe@prose.org"), None, false);
    assert_eq!(view, MemberDeviceView::default());

    Ok(())
}

// prose-core-client/prose-device-trust
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use tracing::{debug, info};

use crate::app::deps::{
    AppDependencies, DynDeviceTrustDomainService, DynDeviceVerificationPrompt,
};
use crate::dtos::{
    Device, DeviceId, DeviceTrustAction, MemberDeviceView, TrustControl, UserId,
    VerificationDialog,
};

pub struct MemberDeviceService {
    device_trust_domain_service: DynDeviceTrustDomainService,
    verification_prompt: DynDeviceVerificationPrompt,
}

impl From<&AppDependencies> for MemberDeviceService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            device_trust_domain_service: deps.device_trust_domain_service.clone(),
            verification_prompt: deps.verification_prompt.clone(),
        }
    }
}

impl MemberDeviceService {
    pub fn render(
        &self,
        user_id: &UserId,
        device: Option<&Device>,
        hide_info: bool,
    ) -> MemberDeviceView {
        debug!(
            user_id = %user_id,
            device_id = ?device.map(|device| &device.id),
            hide_info,
            "Rendering member device."
        );
        MemberDeviceView::render(user_id, device, hide_info)
    }

    /// Performs the action of a control previously returned by `render`.
    pub async fn activate(&self, control: &TrustControl) -> Result<()> {
        self.perform_action(&control.user_id, &control.device, control.action)
            .await
    }

    pub async fn perform_action(
        &self,
        user_id: &UserId,
        device: &Device,
        action: DeviceTrustAction,
    ) -> Result<()> {
        match action {
            DeviceTrustAction::Verify => self.verify_device(user_id, device).await,
            DeviceTrustAction::Unverify => self.unverify_device(user_id, &device.id).await,
            DeviceTrustAction::Block => self.block_device(user_id, &device.id).await,
            DeviceTrustAction::Unblock => self.unblock_device(user_id, &device.id).await,
        }
    }

    /// Asks the user to compare the device's key and marks the device as verified if they
    /// confirm.
    pub async fn verify_device(&self, user_id: &UserId, device: &Device) -> Result<()> {
        let dialog = VerificationDialog::for_device(device);

        if !self.verification_prompt.confirm(dialog).await {
            info!(
                user_id = %user_id,
                device_id = %device.id,
                "Verification of device was cancelled."
            );
            return Ok(());
        }

        self.set_verified(user_id, &device.id, true).await
    }

    pub async fn unverify_device(&self, user_id: &UserId, device_id: &DeviceId) -> Result<()> {
        self.set_verified(user_id, device_id, false).await
    }

    pub async fn block_device(&self, user_id: &UserId, device_id: &DeviceId) -> Result<()> {
        self.set_blocked(user_id, device_id, true).await
    }

    pub async fn unblock_device(&self, user_id: &UserId, device_id: &DeviceId) -> Result<()> {
        self.set_blocked(user_id, device_id, false).await
    }
}

impl MemberDeviceService {
    async fn set_verified(
        &self,
        user_id: &UserId,
        device_id: &DeviceId,
        verified: bool,
    ) -> Result<()> {
        info!(
            user_id = %user_id,
            device_id = %device_id,
            verified,
            "Setting device verified."
        );
        self.device_trust_domain_service
            .set_device_verified(user_id, device_id, verified)
            .await
    }

    async fn set_blocked(
        &self,
        user_id: &UserId,
        device_id: &DeviceId,
        blocked: bool,
    ) -> Result<()> {
        info!(
            user_id = %user_id,
            device_id = %device_id,
            blocked,
            "Setting device blocked."
        );
        self.device_trust_domain_service
            .set_device_blocked(user_id, device_id, blocked)
            .await
    }
}

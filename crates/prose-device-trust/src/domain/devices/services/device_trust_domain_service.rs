// prose-core-client/prose-device-trust
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::devices::models::DeviceId;
use crate::domain::shared::models::UserId;

#[derive(Debug, thiserror::Error)]
pub enum DeviceTrustError {
    #[error("Device {device_id} of {user_id} is unknown.")]
    UnknownDevice { user_id: UserId, device_id: DeviceId },
}

/// The client that owns the device records and their trust flags.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait DeviceTrustDomainService: Send + Sync {
    async fn set_device_verified(
        &self,
        user_id: &UserId,
        device_id: &DeviceId,
        verified: bool,
    ) -> Result<()>;

    async fn set_device_blocked(
        &self,
        user_id: &UserId,
        device_id: &DeviceId,
        blocked: bool,
    ) -> Result<()>;
}

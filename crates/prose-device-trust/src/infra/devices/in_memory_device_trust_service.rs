// prose-core-client/prose-device-trust
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use itertools::Itertools;
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::domain::devices::models::{Device, DeviceId};
use crate::domain::devices::services::{DeviceTrustDomainService, DeviceTrustError};
use crate::domain::shared::models::UserId;

/// Keeps the devices of each user in memory. Ambiguity is derived on read, a device is
/// ambiguous when another device of the same user shares its display name.
#[derive(Default)]
pub struct InMemoryDeviceTrustService {
    devices: RwLock<HashMap<UserId, Vec<Device>>>,
}

impl InMemoryDeviceTrustService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a device or replaces the device with the same id.
    pub fn insert_device(&self, user_id: &UserId, device: Device) {
        debug!(user_id = %user_id, device_id = %device.id, "Inserting device.");
        let mut devices = self.devices.write();
        let user_devices = devices.entry(user_id.clone()).or_default();

        match user_devices.iter_mut().find(|d| d.id == device.id) {
            Some(existing) => *existing = device,
            None => user_devices.push(device),
        }
    }

    pub fn devices(&self, user_id: &UserId) -> Vec<Device> {
        let mut devices = self
            .devices
            .read()
            .get(user_id)
            .cloned()
            .unwrap_or_default();

        let name_counts = devices
            .iter()
            .map(|device| device.display_name().unwrap_or_default().to_string())
            .counts();

        for device in devices.iter_mut() {
            let name = device.display_name().unwrap_or_default();
            let is_ambiguous = name_counts.get(name).copied().unwrap_or_default() > 1;
            device.ambiguous = is_ambiguous;
        }

        devices
    }

    pub fn device(&self, user_id: &UserId, device_id: &DeviceId) -> Option<Device> {
        self.devices(user_id)
            .into_iter()
            .find(|device| &device.id == device_id)
    }

    pub fn user_ids(&self) -> Vec<UserId> {
        self.devices
            .read()
            .keys()
            .cloned()
            .sorted_by_key(|user_id| user_id.to_string())
            .collect()
    }
}

impl InMemoryDeviceTrustService {
    fn update_device(
        &self,
        user_id: &UserId,
        device_id: &DeviceId,
        handler: impl FnOnce(&mut Device),
    ) -> Result<()> {
        let mut devices = self.devices.write();
        let device = devices
            .get_mut(user_id)
            .and_then(|devices| devices.iter_mut().find(|d| &d.id == device_id));

        let Some(device) = device else {
            warn!(user_id = %user_id, device_id = %device_id, "Cannot update unknown device.");
            return Err(DeviceTrustError::UnknownDevice {
                user_id: user_id.clone(),
                device_id: device_id.clone(),
            }
            .into());
        };

        handler(device);
        Ok(())
    }
}

#[async_trait]
impl DeviceTrustDomainService for InMemoryDeviceTrustService {
    async fn set_device_verified(
        &self,
        user_id: &UserId,
        device_id: &DeviceId,
        verified: bool,
    ) -> Result<()> {
        self.update_device(user_id, device_id, |device| device.verified = verified)
    }

    async fn set_device_blocked(
        &self,
        user_id: &UserId,
        device_id: &DeviceId,
        blocked: bool,
    ) -> Result<()> {
        self.update_device(user_id, device_id, |device| device.blocked = blocked)
    }
}

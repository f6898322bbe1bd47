// prose-core-client/prose-device-trust
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::domain::devices::services::{DeviceTrustDomainService, DeviceVerificationPrompt};

pub type DynDeviceTrustDomainService = Arc<dyn DeviceTrustDomainService>;
pub type DynDeviceVerificationPrompt = Arc<dyn DeviceVerificationPrompt>;

/// Collaborators shared by the app services. The trust domain service is the client that owns
/// the device records, the prompt is whatever dialog layer the front end provides.
pub struct AppDependencies {
    pub device_trust_domain_service: DynDeviceTrustDomainService,
    pub verification_prompt: DynDeviceVerificationPrompt,
}

// prose-core-client/prose-device-trust
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use device_trust_domain_service::{DeviceTrustDomainService, DeviceTrustError};
pub use device_verification_prompt::DeviceVerificationPrompt;

mod device_trust_domain_service;
mod device_verification_prompt;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::device_trust_domain_service::MockDeviceTrustDomainService;
    pub use super::device_verification_prompt::MockDeviceVerificationPrompt;
}

// prose-core-client/prose-device-trust
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::dtos;
pub use domain::devices::services::{
    DeviceTrustDomainService, DeviceTrustError, DeviceVerificationPrompt,
};
pub use infra::devices::InMemoryDeviceTrustService;

#[cfg(feature = "test")]
pub mod test;

pub mod app;

#[cfg(feature = "test")]
pub mod domain;
#[cfg(not(feature = "test"))]
pub(crate) mod domain;

pub mod infra;

// prose-core-client/prose-device-trust
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use crate::domain::devices::models::{
    Device, DeviceId, DeviceInfoBlock, DeviceTrustAction, IdentityKey, IdentityKeyError,
    MemberDeviceView, TrustControl, TrustIndicator, VerificationDescription, VerificationDialog,
};
pub use crate::domain::shared::models::{UserId, UserIdError};

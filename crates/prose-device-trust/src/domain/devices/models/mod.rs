// prose-core-client/prose-device-trust
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use device::Device;
pub use device_id::DeviceId;
pub use device_trust_action::DeviceTrustAction;
pub use keys::{IdentityKey, IdentityKeyError};
pub use member_device_view::{DeviceInfoBlock, MemberDeviceView, TrustControl, TrustIndicator};
pub use verification_dialog::{VerificationDescription, VerificationDialog};

mod device;
mod device_id;
mod device_trust_action;
mod keys;
mod member_device_view;
mod verification_dialog;

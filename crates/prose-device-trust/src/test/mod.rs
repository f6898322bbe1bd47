// prose-core-client/prose-device-trust
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use mock_app_dependencies::MockAppDependencies;


pub mod mock_data {
    use crate::dtos::{Device, DeviceId, IdentityKey};

    pub fn identity_key() -> IdentityKey {
        IdentityKey::from(b"prose-device-key".as_slice())
    }

    pub fn device(id: impl Into<DeviceId>, name: Option<&str>) -> Device {
        Device {
            id: id.into(),
            name: name.map(ToString::to_string),
            identity: identity_key(),
            verified: false,
            blocked: false,
            ambiguous: false,
        }
    }
}

#[macro_export]
macro_rules! user_id {
    ($jid:expr) => {
        $jid.parse::<$crate::dtos::UserId>().unwrap()
    };
}

#[macro_export]
macro_rules! device_id {
    ($id:expr) => {
        $crate::dtos::DeviceId::from($id)
    };
}

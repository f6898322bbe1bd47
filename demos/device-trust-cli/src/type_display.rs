// prose-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};

use prose_device_trust::dtos::{Device, MemberDeviceView, TrustControl};

use crate::StringExt;

pub struct DeviceRowEnvelope {
    pub device: Device,
    pub view: MemberDeviceView,
}

impl Display for DeviceRowEnvelope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:>10} | {} | {}",
            self.device.id.to_string().truncate_to(10),
            self.device.fingerprint().truncate_to(30),
            self.view
        )
    }
}

pub struct TrustControlEnvelope(pub TrustControl);

impl Display for TrustControlEnvelope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let note = if self.0.action.requires_confirmation() {
            " (asks for confirmation)"
        } else {
            ""
        };
        write!(f, "{} device {}{}", self.0.label(), self.0.device.id, note)
    }
}

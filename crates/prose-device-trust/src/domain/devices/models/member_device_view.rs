// prose-core-client/prose-device-trust
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};

use crate::domain::shared::models::UserId;

use super::{Device, DeviceTrustAction};

/// The trust state shown next to a device's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrustIndicator {
    Blocked,
    Verified,
    Unverified,
}

impl TrustIndicator {
    /// Blocked takes precedence over verified.
    pub fn for_device(device: &Device) -> Self {
        if device.is_blocked() {
            Self::Blocked
        } else if device.is_verified() {
            Self::Verified
        } else {
            Self::Unverified
        }
    }

    pub fn icon_path(&self) -> &'static str {
        match self {
            Self::Blocked => "img/e2e-blocked.svg",
            Self::Verified => "img/e2e-verified.svg",
            Self::Unverified => "img/e2e-warning.svg",
        }
    }

    /// Width and height of the icon in pixels.
    pub fn icon_size(&self) -> (u32, u32) {
        match self {
            Self::Blocked => (12, 12),
            Self::Verified => (10, 12),
            Self::Unverified => (15, 12),
        }
    }

    pub fn alt_text(&self) -> &'static str {
        match self {
            Self::Blocked => "Blocked",
            Self::Verified => "Verified",
            Self::Unverified => "Unverified",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeviceInfoBlock {
    pub display_name: String,
    pub indicator: TrustIndicator,
}

/// A control bound to the device it was rendered for. Activating it is done through
/// `MemberDeviceService::activate`.
#[derive(Debug, Clone, PartialEq)]
pub struct TrustControl {
    pub action: DeviceTrustAction,
    pub user_id: UserId,
    pub device: Device,
}

impl TrustControl {
    pub fn label(&self) -> String {
        self.action.label()
    }
}

/// The rendered trust state of a single device in a member's device list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MemberDeviceView {
    pub info: Option<DeviceInfoBlock>,
    pub verify_control: Option<TrustControl>,
    pub block_control: Option<TrustControl>,
}

impl MemberDeviceView {
    pub fn render(user_id: &UserId, device: Option<&Device>, hide_info: bool) -> Self {
        let Some(device) = device else {
            return Self::default();
        };

        let control = |action| TrustControl {
            action,
            user_id: user_id.clone(),
            device: device.clone(),
        };

        let info = (!hide_info).then(|| DeviceInfoBlock {
            display_name: Self::display_name(device),
            indicator: TrustIndicator::for_device(device),
        });

        Self {
            info,
            verify_control: Some(control(DeviceTrustAction::verify_action(
                device.is_verified(),
            ))),
            block_control: Some(control(DeviceTrustAction::block_action(device.is_blocked()))),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.info.is_none() && self.verify_control.is_none() && self.block_control.is_none()
    }

    /// The controls in display order.
    pub fn controls(&self) -> impl Iterator<Item = &TrustControl> {
        self.verify_control.iter().chain(self.block_control.iter())
    }

    fn display_name(device: &Device) -> String {
        let name = device.display_name().unwrap_or_default();
        if device.ambiguous {
            format!("{name} ({})", device.id)
        } else {
            name.to_string()
        }
    }
}

impl Display for MemberDeviceView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(info) = &self.info {
            write!(
                f,
                "{:<30} [{}] ",
                info.display_name,
                info.indicator.alt_text()
            )?;
        }

        let labels = self
            .controls()
            .map(|control| format!("<{}>", control.label()))
            .collect::<Vec<_>>();
        write!(f, "{}", labels.join(" "))
    }
}

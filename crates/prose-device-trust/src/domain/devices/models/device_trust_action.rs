// prose-core-client/prose-device-trust
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::{Display, EnumIter};

/// The actions offered by the two trust controls of a device. The `Display` representation is
/// the control's label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum DeviceTrustAction {
    Verify,
    Unverify,
    Block,
    Unblock,
}

impl DeviceTrustAction {
    pub fn verify_action(is_verified: bool) -> Self {
        if is_verified {
            Self::Unverify
        } else {
            Self::Verify
        }
    }

    pub fn block_action(is_blocked: bool) -> Self {
        if is_blocked {
            Self::Unblock
        } else {
            Self::Block
        }
    }

    pub fn label(&self) -> String {
        self.to_string()
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Verify => "mx_MemberDeviceInfo_verify",
            Self::Unverify => "mx_MemberDeviceInfo_unverify",
            Self::Block => "mx_MemberDeviceInfo_block",
            Self::Unblock => "mx_MemberDeviceInfo_unblock",
        }
    }

    /// Only verifying a device asks the user for confirmation first.
    pub fn requires_confirmation(&self) -> bool {
        matches!(self, Self::Verify)
    }
}

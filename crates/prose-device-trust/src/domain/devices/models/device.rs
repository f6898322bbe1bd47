// prose-core-client/prose-device-trust
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use super::{DeviceId, IdentityKey};

/// A device of a member as known to the client. The trust flags are owned by the client, a
/// `Device` is only a snapshot of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    #[serde(default)]
    pub name: Option<String>,
    pub identity: IdentityKey,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub blocked: bool,
    /// Set when another device of the same user shares this device's display name.
    #[serde(default)]
    pub ambiguous: bool,
}

impl Device {
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn fingerprint(&self) -> String {
        self.identity.fingerprint()
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }
}

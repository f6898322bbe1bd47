// prose-core-client/prose-device-trust
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};

use super::{Device, DeviceId};

const TITLE: &str = "Verify device";
const CONFIRM_BUTTON_LABEL: &str = "I verify that the keys match";

const INSTRUCTIONS: &str = "To verify that this device can be trusted, please contact its \
owner using some other means (e.g. in person or a phone call) and ask them whether the key \
they see in their User Settings for this device matches the key below:";
const OUTCOME: &str = "If it matches, press the verify button below. If it doesn't, then \
someone else is intercepting this device and you probably want to press the block button \
instead.";
const FUTURE_NOTE: &str = "In future this verification process will be more sophisticated.";

/// The body of the verification dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationDescription {
    pub device_name: String,
    pub device_id: DeviceId,
    pub fingerprint: String,
}

impl VerificationDescription {
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    pub fn outcome(&self) -> &'static str {
        OUTCOME
    }

    pub fn future_note(&self) -> &'static str {
        FUTURE_NOTE
    }

    /// The labelled device fields shown between the paragraphs.
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("Device name", self.device_name.as_str()),
            ("Device ID", self.device_id.as_ref()),
            ("Device key", self.fingerprint.as_str()),
        ]
    }
}

/// Asks the user to compare a device's key out-of-band before marking it as verified.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationDialog {
    pub title: String,
    pub description: VerificationDescription,
    pub confirm_button_label: String,
}

impl VerificationDialog {
    pub fn for_device(device: &Device) -> Self {
        Self {
            title: TITLE.to_string(),
            description: VerificationDescription {
                device_name: device.display_name().unwrap_or_default().to_string(),
                device_id: device.id.clone(),
                fingerprint: device.fingerprint(),
            },
            confirm_button_label: CONFIRM_BUTTON_LABEL.to_string(),
        }
    }
}

impl Display for VerificationDescription {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.instructions())?;
        writeln!(f)?;
        for (label, value) in self.fields() {
            writeln!(f, "  {:<12} {}", format!("{label}:"), value)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.outcome())?;
        writeln!(f)?;
        write!(f, "{}", self.future_note())
    }
}

impl Display for VerificationDialog {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f)?;
        write!(f, "{}", self.description)
    }
}

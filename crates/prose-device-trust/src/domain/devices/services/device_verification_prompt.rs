// prose-core-client/prose-device-trust
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::devices::models::VerificationDialog;

/// Presents a modal confirmation dialog.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait DeviceVerificationPrompt: Send + Sync {
    /// Resolves once the dialog is finished. Returns `true` only if the user explicitly
    /// confirmed, dismissing the dialog counts as a cancellation.
    async fn confirm(&self, dialog: VerificationDialog) -> bool;
}

// prose-core-client/prose-device-trust
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Formatter};

use base64::{engine::general_purpose, Engine as _};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum IdentityKeyError {
    #[error("Identity key is empty.")]
    Empty,
    #[error(transparent)]
    Base64(#[from] base64::DecodeError),
}

/// The public identity key of a device.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IdentityKey(Box<[u8]>);

impl IdentityKey {
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_ref()
    }

    /// Returns the key as unpadded base64, split into space-separated groups of four
    /// characters so that it can be read out loud and compared.
    pub fn fingerprint(&self) -> String {
        general_purpose::STANDARD_NO_PAD
            .encode(&self.0)
            .chars()
            .chunks(4)
            .into_iter()
            .map(|chunk| chunk.collect::<String>())
            .join(" ")
    }
}

impl From<&[u8]> for IdentityKey {
    fn from(value: &[u8]) -> Self {
        Self(value.into())
    }
}

impl From<Vec<u8>> for IdentityKey {
    fn from(value: Vec<u8>) -> Self {
        Self(value.into_boxed_slice())
    }
}

impl TryFrom<&str> for IdentityKey {
    type Error = IdentityKeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let bytes = general_purpose::STANDARD_NO_PAD.decode(value.trim_end_matches('='))?;
        if bytes.is_empty() {
            return Err(IdentityKeyError::Empty);
        }
        Ok(Self::from(bytes))
    }
}

impl TryFrom<String> for IdentityKey {
    type Error = IdentityKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<IdentityKey> for String {
    fn from(value: IdentityKey) -> Self {
        general_purpose::STANDARD.encode(&value.0)
    }
}

impl Debug for IdentityKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "IdentityKey({})", general_purpose::STANDARD.encode(&self.0))
    }
}

// prose-core-client/prose-device-trust
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use jid::BareJid;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum UserIdError {
    #[error("'{0}' is not a user id, it is missing the node part.")]
    MissingNode(String),
    #[error(transparent)]
    Jid(#[from] jid::Error),
}

/// Represents a unique XMPP user identifier without resource specification.
///
/// A `UserId` always carries a node part (`node@domain`), so it can never be empty.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(BareJid);

impl UserId {
    pub fn into_inner(self) -> BareJid {
        self.0
    }
}

impl TryFrom<BareJid> for UserId {
    type Error = UserIdError;

    fn try_from(value: BareJid) -> Result<Self, Self::Error> {
        if value.node().is_none() {
            return Err(UserIdError::MissingNode(value.to_string()));
        }
        Ok(UserId(value))
    }
}

impl FromStr for UserId {
    type Err = UserIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserId::try_from(s.parse::<BareJid>()?)
    }
}

impl TryFrom<String> for UserId {
    type Error = UserIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0.to_string()
    }
}

impl Debug for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "UserId({})", self.0)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

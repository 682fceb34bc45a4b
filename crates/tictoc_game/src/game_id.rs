//! Game identifiers.

use rand::Rng;
use rand::distributions::Alphanumeric;
use serde::{Deserialize, Serialize};

/// Opaque identifier of a game.
///
/// Generated ids are [`GameId::LENGTH`] characters drawn uniformly from
/// `A-Z`, `a-z` and `0-9`. Ids arriving from outside (URL paths, stored
/// snapshots) are accepted verbatim.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    /// Length of generated ids.
    pub const LENGTH: usize = 6;

    /// Generates a fresh random id.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let id = (0..Self::LENGTH)
            .map(|_| char::from(rng.sample(Alphanumeric)))
            .collect();
        Self(id)
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for GameId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for GameId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// An opaque video identifier, assigned by the record store on creation.
///
/// The wrapped string is the hex form of whatever identifier scheme the
/// backing store uses (a BSON ObjectId for the MongoDB backend). The
/// gateway never inspects it; a string that is malformed for the store's
/// scheme is treated by the store as not-found rather than as an error.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Creates a `VideoId` from the store's string representation.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for VideoId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

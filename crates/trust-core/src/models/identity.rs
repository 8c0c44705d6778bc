//! Opaque identity token for observers, subjects, sources and intermediaries.
//!
//! # Examples
//!
//! ```
//! use trust_core::models::Identity;
//!
//! let a = Identity::from("lct-alice");
//! let b = Identity::from("lct-bob");
//! assert!(a < b);
//! assert_eq!(a.to_string(), "lct-alice");
//!
//! let fresh = Identity::generate();
//! assert_ne!(fresh, Identity::generate());
//! ```

use serde::{Deserialize, Serialize};

/// Identity token. Only equality, ordering and hashing are meaningful.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Identity(pub String);

impl Identity {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// A fresh random identity (UUID v4). Mostly useful for simulating new sources.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Identity {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Identity {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

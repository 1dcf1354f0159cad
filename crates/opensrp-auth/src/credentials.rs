use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Username and password captured for one login attempt.
///
/// Immutable once created. The password is wiped from memory when the value is dropped and is
/// never part of the `Debug` output.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Captures `username` and `password`. Empty values are accepted; the server decides
    /// whether they are valid.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    #[allow(missing_docs)]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[allow(missing_docs)]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

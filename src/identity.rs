//! Current-user identity accessor
//!
//! Thin but load-bearing: every other component asks this one question —
//! who is the current user. Identity fields are written by the login flow
//! (out of scope here) and only ever read by the core. The canonical
//! identity key is the numeric user id; display name and email are carried
//! for view fallbacks.

use std::sync::Arc;

use crate::error::{CoreError, Result};
use crate::session::SessionStore;

const USER_ID_KEY: &str = "userId";
const USER_NAME_KEY: &str = "userName";
const USER_EMAIL_KEY: &str = "userEmail";
const LOGGED_IN_KEY: &str = "isLoggedIn";

/// Identity of the logged-in user as known to this session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Read-only accessor over the session's identity fields
pub struct Identity {
    session: Arc<dyn SessionStore>,
}

impl Identity {
    pub fn new(session: Arc<dyn SessionStore>) -> Self {
        Self { session }
    }

    /// The current user id, if one is present and non-zero
    pub fn user_id(&self) -> Option<u64> {
        self.session
            .get(USER_ID_KEY)?
            .parse::<u64>()
            .ok()
            .filter(|id| *id != 0)
    }

    pub fn display_name(&self) -> Option<String> {
        self.session.get(USER_NAME_KEY)
    }

    pub fn email(&self) -> Option<String> {
        self.session.get(USER_EMAIL_KEY)
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.get(LOGGED_IN_KEY).as_deref() == Some("true")
    }

    /// The current user id, or `NotAuthenticated` when none is stored
    pub fn require_user_id(&self) -> Result<u64> {
        self.user_id().ok_or(CoreError::NotAuthenticated)
    }

    /// The full current user, or `None` when no usable id is stored
    pub fn current_user(&self) -> Option<CurrentUser> {
        let id = self.user_id()?;
        Some(CurrentUser {
            id,
            name: self.display_name().unwrap_or_default(),
            email: self.email().unwrap_or_default(),
        })
    }
}

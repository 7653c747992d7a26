//! Persisted admin session: bearer token plus cached profile.

use contracts::auth::AdminProfile;
use web_sys::Storage;

const ACCESS_TOKEN_KEY: &str = "accessToken";
const USER_KEY: &str = "user";

/// Read/write access to the persisted session.
///
/// Token and profile are written together on login and removed together on
/// logout or a failed re-check, so a stored profile never outlives its
/// token. Abstracted as a trait so the session flows can be exercised
/// against an in-memory store instead of real browser storage.
pub trait SessionStore {
    fn token(&self) -> Option<String>;
    fn user(&self) -> Option<AdminProfile>;
    fn save_session(&self, token: &str, user: &AdminProfile);
    fn save_user(&self, user: &AdminProfile);
    fn clear(&self);
}

/// Session store over `window.localStorage`. Storage failures (private
/// browsing, quota) degrade to a session that lives only in memory.
#[derive(Clone, Copy, Default)]
pub struct BrowserSession;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl SessionStore for BrowserSession {
    fn token(&self) -> Option<String> {
        local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
    }

    fn user(&self) -> Option<AdminProfile> {
        let raw = local_storage()?.get_item(USER_KEY).ok()??;
        serde_json::from_str(&raw).ok()
    }

    fn save_session(&self, token: &str, user: &AdminProfile) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
            if let Ok(raw) = serde_json::to_string(user) {
                let _ = storage.set_item(USER_KEY, &raw);
            }
        }
    }

    fn save_user(&self, user: &AdminProfile) {
        if let Some(storage) = local_storage() {
            if let Ok(raw) = serde_json::to_string(user) {
                let _ = storage.set_item(USER_KEY, &raw);
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::RefCell;

    /// In-memory stand-in for `localStorage`.
    #[derive(Default)]
    pub struct MemorySession {
        token: RefCell<Option<String>>,
        user: RefCell<Option<AdminProfile>>,
    }

    impl SessionStore for MemorySession {
        fn token(&self) -> Option<String> {
            self.token.borrow().clone()
        }

        fn user(&self) -> Option<AdminProfile> {
            self.user.borrow().clone()
        }

        fn save_session(&self, token: &str, user: &AdminProfile) {
            *self.token.borrow_mut() = Some(token.to_string());
            *self.user.borrow_mut() = Some(user.clone());
        }

        fn save_user(&self, user: &AdminProfile) {
            *self.user.borrow_mut() = Some(user.clone());
        }

        fn clear(&self) {
            *self.token.borrow_mut() = None;
            *self.user.borrow_mut() = None;
        }
    }
}

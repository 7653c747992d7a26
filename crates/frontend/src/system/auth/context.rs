use contracts::auth::{AdminProfile, LoginResponse, UpdateProfileRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use super::session::{BrowserSession, SessionStore};
use crate::shared::error::ApiError;

/// Client-held session state. `user` is only ever present alongside a
/// token; both are dropped together.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<AdminProfile>,
    pub is_loading: bool,
}

impl Default for AuthState {
    // Loading until the first storage check resolves.
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            is_loading: true,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn unauthenticated() -> Self {
        Self {
            token: None,
            user: None,
            is_loading: false,
        }
    }

    pub fn authenticated(token: String, user: AdminProfile) -> Self {
        Self {
            token: Some(token),
            user: Some(user),
            is_loading: false,
        }
    }
}

/// Auth context provider component. Restores the persisted session once on
/// mount; until that resolves, consumers see `is_loading == true`.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    provide_context(auth_state);
    provide_context(set_auth_state);

    Effect::new(move |_| {
        spawn_local(async move {
            check_auth(set_auth_state).await;
        });
    });

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Decision taken by [`check_auth`] after inspecting the store. Split out
/// so the no-token path is visibly network-free.
enum StoredSession {
    Absent,
    Validate(String),
}

fn inspect_store<S: SessionStore>(store: &S) -> StoredSession {
    match store.token() {
        None => StoredSession::Absent,
        Some(token) => StoredSession::Validate(token),
    }
}

/// Apply the profile-fetch outcome to the store. Any failure means the
/// token is unusable; drop the whole session locally rather than surface
/// the error.
fn apply_validation<S: SessionStore>(
    store: &S,
    token: String,
    outcome: Result<AdminProfile, ApiError>,
) -> AuthState {
    match outcome {
        Ok(user) => {
            store.save_user(&user);
            AuthState::authenticated(token, user)
        }
        Err(error) => {
            log::warn!("stored session rejected, signing out locally: {error}");
            store.clear();
            AuthState::unauthenticated()
        }
    }
}

fn persist_login<S: SessionStore>(store: &S, response: &LoginResponse) {
    store.save_session(&response.access_token, &response.user);
}

/// Validate the persisted token by fetching the profile. No stored token
/// means no network call at all.
pub async fn check_auth(set_auth_state: WriteSignal<AuthState>) {
    let store = BrowserSession;
    let token = match inspect_store(&store) {
        StoredSession::Absent => {
            set_auth_state.set(AuthState::unauthenticated());
            return;
        }
        StoredSession::Validate(token) => token,
    };
    let outcome = api::get_profile(&token).await;
    set_auth_state.set(apply_validation(&store, token, outcome));
}

/// Perform login. On failure the normalized message is returned for inline
/// display and the state goes back to idle.
pub async fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    email: String,
    password: String,
) -> Result<(), String> {
    set_auth_state.update(|state| state.is_loading = true);
    match api::login(email, password).await {
        Ok(response) => {
            persist_login(&BrowserSession, &response);
            set_auth_state.set(AuthState::authenticated(response.access_token, response.user));
            Ok(())
        }
        Err(error) => {
            set_auth_state.update(|state| state.is_loading = false);
            Err(error.form_message("Login failed. Please try again."))
        }
    }
}

/// Local-only logout. Tokens are short-lived server-side, so no revoke
/// call is made.
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    BrowserSession.clear();
    set_auth_state.set(AuthState::unauthenticated());
}

/// Submit a profile update and adopt the returned profile wholesale.
pub async fn do_update_profile(
    auth_state: ReadSignal<AuthState>,
    set_auth_state: WriteSignal<AuthState>,
    request: UpdateProfileRequest,
) -> Result<(), String> {
    let Some(token) = auth_state.get_untracked().token else {
        return Err("Not signed in.".to_string());
    };
    match api::update_profile(&token, &request).await {
        Ok(user) => {
            BrowserSession.save_user(&user);
            set_auth_state.update(|state| state.user = Some(user));
            Ok(())
        }
        Err(error) => Err(error.form_message("Failed to update profile. Please try again.")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::session::testing::MemorySession;
    use uuid::Uuid;

    fn profile() -> AdminProfile {
        AdminProfile {
            id: Uuid::nil(),
            name: "Admin".to_string(),
            email: "a@b.com".to_string(),
            role: "administrator".to_string(),
        }
    }

    #[test]
    fn empty_store_skips_validation() {
        let store = MemorySession::default();
        assert!(matches!(inspect_store(&store), StoredSession::Absent));
    }

    #[test]
    fn stored_token_is_validated() {
        let store = MemorySession::default();
        store.save_session("tok-1", &profile());
        match inspect_store(&store) {
            StoredSession::Validate(token) => assert_eq!(token, "tok-1"),
            StoredSession::Absent => panic!("expected a stored token"),
        }
    }

    #[test]
    fn rejected_token_clears_the_store() {
        let store = MemorySession::default();
        store.save_session("tok-1", &profile());
        let state = apply_validation(&store, "tok-1".to_string(), Err(ApiError::Unauthorized));
        assert!(!state.is_authenticated());
        assert!(!state.is_loading);
        assert!(store.token().is_none());
        assert!(store.user().is_none());
    }

    #[test]
    fn accepted_token_refreshes_the_cached_profile() {
        let store = MemorySession::default();
        let mut renamed = profile();
        store.save_session("tok-1", &profile());
        renamed.name = "Renamed".to_string();
        let state = apply_validation(&store, "tok-1".to_string(), Ok(renamed.clone()));
        assert!(state.is_authenticated());
        assert_eq!(state.user, Some(renamed.clone()));
        assert_eq!(store.user(), Some(renamed));
        assert_eq!(store.token().as_deref(), Some("tok-1"));
    }

    #[test]
    fn login_then_logout_leaves_nothing_behind() {
        let store = MemorySession::default();
        let response = LoginResponse {
            access_token: "tok-9".to_string(),
            user: profile(),
        };
        persist_login(&store, &response);
        assert_eq!(store.token().as_deref(), Some("tok-9"));
        assert!(store.user().is_some());

        store.clear();
        assert!(store.token().is_none());
        assert!(store.user().is_none());
    }
}

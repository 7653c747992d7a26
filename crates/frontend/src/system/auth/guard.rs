//! Session gate for the admin section.
//!
//! The decision logic is a pure transition function over the auth state and
//! the current route, so the redirect behaviour can be tested without a
//! browser; the component part only maps outcomes to views.

use super::context::AuthState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Loading,
    Unauthenticated,
    Authenticated,
}

/// What the admin layout should do for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// First session check still in flight: spinner, no redirect.
    Wait,
    /// Login route renders without a session, even for signed-in admins.
    RenderLogin,
    /// Guarded route without a session: navigate to the login page.
    RedirectToLogin,
    /// Full admin shell.
    RenderShell,
}

pub fn guard_state(auth: &AuthState) -> GuardState {
    if auth.is_loading {
        GuardState::Loading
    } else if auth.is_authenticated() {
        GuardState::Authenticated
    } else {
        GuardState::Unauthenticated
    }
}

pub fn guard_outcome(state: GuardState, on_login_route: bool) -> GuardOutcome {
    match (state, on_login_route) {
        (GuardState::Loading, _) => GuardOutcome::Wait,
        (_, true) => GuardOutcome::RenderLogin,
        (GuardState::Unauthenticated, false) => GuardOutcome::RedirectToLogin,
        (GuardState::Authenticated, false) => GuardOutcome::RenderShell,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_always_waits() {
        assert_eq!(guard_outcome(GuardState::Loading, false), GuardOutcome::Wait);
        assert_eq!(guard_outcome(GuardState::Loading, true), GuardOutcome::Wait);
    }

    #[test]
    fn login_route_renders_unguarded() {
        assert_eq!(
            guard_outcome(GuardState::Unauthenticated, true),
            GuardOutcome::RenderLogin
        );
        assert_eq!(
            guard_outcome(GuardState::Authenticated, true),
            GuardOutcome::RenderLogin
        );
    }

    #[test]
    fn guarded_route_without_session_redirects() {
        assert_eq!(
            guard_outcome(GuardState::Unauthenticated, false),
            GuardOutcome::RedirectToLogin
        );
    }

    #[test]
    fn guarded_route_with_session_renders_shell() {
        assert_eq!(
            guard_outcome(GuardState::Authenticated, false),
            GuardOutcome::RenderShell
        );
    }

    #[test]
    fn state_derivation_tracks_loading_first() {
        let mut auth = AuthState::default();
        assert_eq!(guard_state(&auth), GuardState::Loading);

        auth = AuthState::unauthenticated();
        assert_eq!(guard_state(&auth), GuardState::Unauthenticated);

        auth.token = Some("tok".to_string());
        assert_eq!(guard_state(&auth), GuardState::Authenticated);
    }
}

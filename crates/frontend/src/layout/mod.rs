//! Admin section layout: session gate plus the sidebar/header shell.

pub mod account_dropdown;
pub mod header;
pub mod sidebar;
pub mod sync_status;

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use crate::system::auth::context::{use_auth, AuthProvider};
use crate::system::auth::guard::{guard_outcome, guard_state, GuardOutcome};
use crate::system::auth::routes::{is_login_route, LOGIN_ROUTE};
use header::AdminHeader;
use sidebar::Sidebar;

/// Root view of every `/admin` route. Owns the auth context so the session
/// check runs exactly once per visit to the admin section.
#[component]
pub fn AdminSection() -> impl IntoView {
    view! {
        <AuthProvider>
            <AdminGate />
        </AuthProvider>
    }
}

/// Maps the guard outcome to a view. The redirect is a side effect driven
/// by the same outcome the render uses, so the two can never disagree.
#[component]
fn AdminGate() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let location = use_location();
    let navigate = use_navigate();

    let outcome = Memo::new(move |_| {
        let state = guard_state(&auth_state.get());
        let on_login = is_login_route(&location.pathname.get());
        guard_outcome(state, on_login)
    });

    Effect::new(move |_| {
        if outcome.get() == GuardOutcome::RedirectToLogin {
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });

    move || match outcome.get() {
        // RedirectToLogin keeps the spinner up until navigation lands.
        GuardOutcome::Wait | GuardOutcome::RedirectToLogin => {
            view! { <LoadingScreen /> }.into_any()
        }
        GuardOutcome::RenderLogin => view! { <Outlet /> }.into_any(),
        GuardOutcome::RenderShell => view! { <AdminShell /> }.into_any(),
    }
}

#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="spinner" />
            <p>"Loading..."</p>
        </div>
    }
}

#[component]
fn AdminShell() -> impl IntoView {
    let sidebar_open = RwSignal::new(false);

    view! {
        <div class="admin-layout">
            <Sidebar open=sidebar_open />
            <div class="admin-main">
                <AdminHeader sidebar_open=sidebar_open />
                <main class="admin-content">
                    <Outlet />
                </main>
            </div>
        </div>
    }
}

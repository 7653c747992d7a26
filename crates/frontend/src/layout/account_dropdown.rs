//! Account dropdown: profile summary, profile-update form, sign out.

use contracts::auth::UpdateProfileRequest;
use gloo_timers::future::TimeoutFuture;
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, do_update_profile, use_auth};

/// Form rule: there must be something to change, and any change requires
/// the current password.
pub fn validate_profile_form(
    email: &str,
    password: &str,
    current_password: &str,
) -> Result<(), &'static str> {
    if email.is_empty() && password.is_empty() {
        return Err("Please provide either a new email or password");
    }
    if current_password.is_empty() {
        return Err("Current password is required");
    }
    Ok(())
}

#[component]
pub fn AccountDropdown() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let is_open = RwSignal::new(false);
    let show_form = RwSignal::new(false);
    let is_updating = RwSignal::new(false);
    let update_error = RwSignal::new(None::<String>);
    let update_success = RwSignal::new(false);

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let current_password = RwSignal::new(String::new());

    let root = NodeRef::<Div>::new();

    // Close when a click lands outside the dropdown. The listener lives for
    // the component's lifetime and is a no-op while the menu is closed.
    _ = window_event_listener(leptos::ev::mousedown, move |ev| {
        if !is_open.get_untracked() {
            return;
        }
        let Some(root_el) = root.get_untracked() else {
            return;
        };
        let target = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let inside = target
            .map(|node| root_el.contains(Some(&node)))
            .unwrap_or(false);
        if !inside {
            is_open.set(false);
            show_form.set(false);
        }
    });

    let display_name = move || {
        auth_state
            .get()
            .user
            .map(|user| user.name)
            .unwrap_or_else(|| "Admin".to_string())
    };
    let display_email = move || {
        auth_state
            .get()
            .user
            .map(|user| user.email)
            .unwrap_or_else(|| "admin@pulsefitness.et".to_string())
    };
    let display_role = move || {
        auth_state
            .get()
            .user
            .map(|user| user.role)
            .unwrap_or_else(|| "Administrator".to_string())
    };

    let open_form = move |_| {
        email.set(display_email());
        password.set(String::new());
        current_password.set(String::new());
        update_error.set(None);
        update_success.set(false);
        show_form.set(true);
    };

    let cancel_form = move |_| {
        show_form.set(false);
        update_error.set(None);
        update_success.set(false);
    };

    let sign_out = move |_| {
        do_logout(set_auth_state);
        is_open.set(false);
    };

    let on_update = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get().trim().to_string();
        let password_val = password.get();
        let current_val = current_password.get();

        update_error.set(None);
        update_success.set(false);

        if let Err(message) = validate_profile_form(&email_val, &password_val, &current_val) {
            update_error.set(Some(message.to_string()));
            return;
        }

        is_updating.set(true);
        let request = UpdateProfileRequest {
            email: (!email_val.is_empty()).then_some(email_val),
            password: (!password_val.is_empty()).then_some(password_val),
            current_password: Some(current_val),
        };

        spawn_local(async move {
            match do_update_profile(auth_state, set_auth_state, request).await {
                Ok(()) => {
                    is_updating.set(false);
                    update_success.set(true);
                    email.set(String::new());
                    password.set(String::new());
                    current_password.set(String::new());
                    // leave the confirmation visible briefly, then fold up
                    TimeoutFuture::new(2000).await;
                    show_form.set(false);
                    update_success.set(false);
                }
                Err(message) => {
                    is_updating.set(false);
                    update_error.set(Some(message));
                }
            }
        });
    };

    view! {
        <div class="account-dropdown" node_ref=root>
            <button
                class="account-dropdown__trigger"
                on:click=move |_| is_open.update(|open| *open = !*open)
                title="Account"
            >
                {icon("account")}
            </button>

            <Show when=move || is_open.get()>
                <div class="account-dropdown__menu">
                    <div class="account-dropdown__profile">
                        <div class="account-dropdown__avatar">{icon("person")}</div>
                        <div class="account-dropdown__identity">
                            <p class="account-dropdown__name">{display_name}</p>
                            <p class="account-dropdown__email">{display_email}</p>
                        </div>
                    </div>

                    <div class="account-dropdown__role">
                        <p>"Role"</p>
                        <p class="account-dropdown__role-value">{display_role}</p>
                    </div>

                    <Show
                        when=move || show_form.get()
                        fallback=move || view! {
                            <div class="account-dropdown__actions">
                                <button class="account-dropdown__action" on:click=open_form>
                                    {icon("edit")}
                                    <span>"Update Profile"</span>
                                </button>
                                <button
                                    class="account-dropdown__action account-dropdown__action--signout"
                                    on:click=sign_out
                                >
                                    {icon("logout")}
                                    <span>"Sign Out"</span>
                                </button>
                            </div>
                        }
                    >
                        <form class="account-dropdown__form" on:submit=on_update>
                            <div class="form-group">
                                <label>"Email"</label>
                                <input
                                    type="email"
                                    value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-group">
                                <label>"New Password"</label>
                                <input
                                    type="password"
                                    placeholder="Leave empty to keep current"
                                    value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-group">
                                <label>"Current Password"</label>
                                <input
                                    type="password"
                                    placeholder="Required for changes"
                                    value=move || current_password.get()
                                    on:input=move |ev| current_password.set(event_target_value(&ev))
                                    required
                                />
                            </div>

                            <Show when=move || update_error.get().is_some()>
                                <p class="form-error">
                                    {move || update_error.get().unwrap_or_default()}
                                </p>
                            </Show>
                            <Show when=move || update_success.get()>
                                <p class="form-success">"Profile updated successfully!"</p>
                            </Show>

                            <div class="account-dropdown__form-buttons">
                                <button
                                    type="submit"
                                    class="btn-primary"
                                    disabled=move || is_updating.get()
                                >
                                    {move || if is_updating.get() { "Updating..." } else { "Update" }}
                                </button>
                                <button type="button" class="btn-secondary" on:click=cancel_form>
                                    "Cancel"
                                </button>
                            </div>
                        </form>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_form() {
        assert_eq!(
            validate_profile_form("", "", "secret"),
            Err("Please provide either a new email or password")
        );
    }

    #[test]
    fn requires_current_password_for_changes() {
        assert_eq!(
            validate_profile_form("new@gym.com", "", ""),
            Err("Current password is required")
        );
        assert_eq!(
            validate_profile_form("", "hunter2", ""),
            Err("Current password is required")
        );
    }

    #[test]
    fn accepts_a_complete_change() {
        assert_eq!(validate_profile_form("new@gym.com", "", "secret"), Ok(()));
        assert_eq!(validate_profile_form("", "hunter2", "secret"), Ok(()));
        assert_eq!(
            validate_profile_form("new@gym.com", "hunter2", "secret"),
            Ok(())
        );
    }
}

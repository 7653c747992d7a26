//! Sticky admin header: mobile menu button, last-sync indicator, account
//! dropdown.

use leptos::prelude::*;

use super::account_dropdown::AccountDropdown;
use super::sync_status::SyncStatus;
use crate::shared::icons::icon;

#[component]
pub fn AdminHeader(sidebar_open: RwSignal<bool>) -> impl IntoView {
    view! {
        <header class="admin-header">
            <button
                class="admin-header__menu-btn"
                on:click=move |_| sidebar_open.set(true)
                title="Open navigation"
            >
                {icon("menu")}
            </button>

            <div class="admin-header__spacer" />

            <div class="admin-header__actions">
                <SyncStatus />
                <AccountDropdown />
            </div>
        </header>
    }
}

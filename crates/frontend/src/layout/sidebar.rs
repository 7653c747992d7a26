//! Admin sidebar navigation.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::shared::icons::icon;
use crate::system::auth::routes::DASHBOARD_ROUTE;

struct NavItem {
    route: &'static str,
    label: &'static str,
    icon: &'static str,
}

const NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        route: DASHBOARD_ROUTE,
        label: "Dashboard",
        icon: "dashboard",
    },
    NavItem {
        route: "/admin/potential-customers",
        label: "Potential Customers",
        icon: "customers",
    },
    NavItem {
        route: "/admin/sms",
        label: "SMS",
        icon: "message",
    },
];

/// Fixed on desktop; on mobile `open` slides it over the content and a
/// backdrop click closes it. The router intercepts the anchor clicks, so
/// navigation stays client-side.
#[component]
pub fn Sidebar(open: RwSignal<bool>) -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <Show when=move || open.get()>
            <div class="sidebar-backdrop" on:click=move |_| open.set(false) />
        </Show>
        <aside class="sidebar" class:sidebar--open=move || open.get()>
            <div class="sidebar__brand">
                {icon("dumbbell")}
                <span>"Pulse Fitness"</span>
            </div>
            <nav class="sidebar__nav">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        let route = item.route;
                        let link_class = move || {
                            if pathname.get() == route {
                                "sidebar__link sidebar__link--active"
                            } else {
                                "sidebar__link"
                            }
                        };
                        view! {
                            <a href=route class=link_class on:click=move |_| open.set(false)>
                                {icon(item.icon)}
                                <span>{item.label}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

pub mod state;

use contracts::customers::{CustomerStatus, PotentialCustomer};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::customers::api;
use crate::shared::date_utils::format_short_date;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use state::CustomerListState;

fn status_badge(status: CustomerStatus) -> impl IntoView {
    let class = match status {
        CustomerStatus::Pending => "badge badge--pending",
        CustomerStatus::Converted => "badge badge--converted",
        CustomerStatus::Ignored => "badge badge--ignored",
    };
    view! { <span class=class>{status.label()}</span> }
}

#[component]
pub fn PotentialCustomersPage() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let state = RwSignal::new(CustomerListState::default());
    let (customers, set_customers) = signal(Vec::<PotentialCustomer>::new());
    let (loading, set_loading) = signal(true);
    let (search_input, set_search_input) = signal(String::new());

    let load = move || {
        let token = auth_state.get_untracked().token.unwrap_or_default();
        let snapshot = state.get_untracked();
        set_loading.set(true);
        spawn_local(async move {
            let result = api::list_potential_customers(
                &token,
                snapshot.status,
                snapshot.search_param(),
                snapshot.pager.limit(),
                snapshot.pager.offset(),
            )
            .await;
            match result {
                Ok(page) => {
                    state.update(|s| s.pager.set_total(page.total));
                    set_customers.set(page.items);
                }
                Err(error) => {
                    // prior rows stay visible; retry is manual
                    log!("Failed to fetch potential customers: {error}");
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        load();
    });

    let on_status_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        state.update(|s| s.set_status(CustomerStatus::parse(&value)));
        load();
    };

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        state.update(|s| s.set_search(search_input.get()));
        load();
    };

    let prev_page = move |_| {
        if state.get_untracked().pager.can_prev() {
            state.update(|s| s.pager.prev());
            load();
        }
    };

    let next_page = move |_| {
        if state.get_untracked().pager.can_next() {
            state.update(|s| s.pager.next());
            load();
        }
    };

    view! {
        <div class="page customers-page">
            <div class="page__header">
                <h1>"Potential Customers"</h1>
                <p>"View and manage potential customers who registered via the web app"</p>
            </div>

            <div class="filter-bar">
                <form class="filter-bar__form" on:submit=on_search>
                    <div class="filter-bar__search">
                        {icon("search")}
                        <input
                            type="text"
                            placeholder="Search by name, phone, or email..."
                            value=move || search_input.get()
                            on:input=move |ev| set_search_input.set(event_target_value(&ev))
                        />
                    </div>
                    <select
                        prop:value=move || {
                            state.get().status.map(|s| s.as_str()).unwrap_or("").to_string()
                        }
                        on:change=on_status_change
                    >
                        <option value="">"All Statuses"</option>
                        {CustomerStatus::ALL
                            .iter()
                            .map(|status| {
                                view! { <option value=status.as_str()>{status.label()}</option> }
                            })
                            .collect_view()}
                    </select>
                    <button type="submit" class="btn-primary">"Search"</button>
                </form>
            </div>

            <div class="table-panel">
                {move || {
                    if loading.get() && customers.get().is_empty() {
                        view! { <div class="table-panel__empty">"Loading..."</div> }.into_any()
                    } else if customers.get().is_empty() {
                        view! {
                            <div class="table-panel__empty">"No potential customers found"</div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Name"</th>
                                        <th>"Email"</th>
                                        <th>"Service"</th>
                                        <th>"Registered"</th>
                                        <th>"Status"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {customers
                                        .get()
                                        .into_iter()
                                        .map(|customer| {
                                            view! {
                                                <tr>
                                                    <td>
                                                        <div class="customer-cell">
                                                            <div class="customer-cell__avatar">
                                                                {icon("person")}
                                                            </div>
                                                            <div>
                                                                <p class="customer-cell__name">
                                                                    {customer.full_name.clone()}
                                                                </p>
                                                                <p class="customer-cell__phone">
                                                                    {customer.phone_number.clone()}
                                                                </p>
                                                            </div>
                                                        </div>
                                                    </td>
                                                    <td>
                                                        {customer
                                                            .email
                                                            .clone()
                                                            .unwrap_or_else(|| "-".to_string())}
                                                    </td>
                                                    <td>
                                                        {customer
                                                            .service_id
                                                            .map(|id| format!("Service #{}", id))
                                                            .unwrap_or_else(|| "-".to_string())}
                                                    </td>
                                                    <td>{format_short_date(customer.registered_at)}</td>
                                                    <td>{status_badge(customer.status)}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                            .into_any()
                    }
                }}

                <div class="list-footer">
                    <p class="list-footer__label">
                        {move || state.get().pager.range_label("customers")}
                    </p>
                    <div class="list-footer__buttons">
                        <button
                            disabled=move || !state.get().pager.can_prev()
                            on:click=prev_page
                        >
                            "Previous"
                        </button>
                        <button
                            disabled=move || !state.get().pager.can_next()
                            on:click=next_page
                        >
                            "Next"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

use contracts::customers::CustomerStatus;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::customers::api as customers_api;
use crate::domain::sms::api as sms_api;
use crate::shared::components::stats_card::StatsCard;
use crate::system::auth::context::use_auth;

fn count_label(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "—".to_string())
}

/// Landing screen of the back office: lead counters plus the SMS balance.
/// Each card loads independently; a failed fetch leaves its placeholder.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let (total, set_total) = signal(None::<u64>);
    let (pending, set_pending) = signal(None::<u64>);
    let (converted, set_converted) = signal(None::<u64>);
    let (balance, set_balance) = signal(None::<String>);

    Effect::new(move |_| {
        let token = auth_state.get_untracked().token.unwrap_or_default();
        spawn_local(async move {
            match customers_api::count_by_status(&token, None).await {
                Ok(count) => set_total.set(Some(count)),
                Err(error) => log!("Failed to fetch customer total: {error}"),
            }
            match customers_api::count_by_status(&token, Some(CustomerStatus::Pending)).await {
                Ok(count) => set_pending.set(Some(count)),
                Err(error) => log!("Failed to fetch pending count: {error}"),
            }
            match customers_api::count_by_status(&token, Some(CustomerStatus::Converted)).await {
                Ok(count) => set_converted.set(Some(count)),
                Err(error) => log!("Failed to fetch converted count: {error}"),
            }
            match sms_api::get_balance(&token).await {
                Ok(data) => set_balance.set(Some(format!("{} ETB", data.balance))),
                Err(error) => log!("Failed to fetch SMS balance: {error}"),
            }
        });
    });

    view! {
        <div class="page dashboard-page">
            <div class="page__header">
                <h1>"Dashboard"</h1>
                <p>"At a glance: leads and messaging"</p>
            </div>

            <div class="stats-grid">
                <StatsCard
                    title="Total Leads"
                    value=Signal::derive(move || count_label(total.get()))
                    icon_name="customers"
                />
                <StatsCard
                    title="Pending"
                    value=Signal::derive(move || count_label(pending.get()))
                    icon_name="schedule"
                    subtitle="Waiting for follow-up".to_string()
                />
                <StatsCard
                    title="Converted"
                    value=Signal::derive(move || count_label(converted.get()))
                    icon_name="check"
                    subtitle="Became members".to_string()
                />
                <StatsCard
                    title="SMS Balance"
                    value=Signal::derive(move || {
                        balance.get().unwrap_or_else(|| "—".to_string())
                    })
                    icon_name="wallet"
                />
            </div>
        </div>
    }
}

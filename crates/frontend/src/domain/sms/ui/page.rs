use leptos::prelude::*;

use super::balance_card::BalanceCard;
use super::bulk_form::BulkForm;
use super::history::HistoryTable;
use super::renewal::RenewalPanel;
use super::send_form::SendForm;
use crate::shared::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Send,
    Bulk,
    History,
    Renewal,
}

const TABS: [(Tab, &str, &str); 4] = [
    (Tab::Send, "Send SMS", "send"),
    (Tab::Bulk, "Bulk SMS", "campaign"),
    (Tab::History, "History", "history"),
    (Tab::Renewal, "Renewal Reminders", "schedule"),
];

#[component]
pub fn SmsPage() -> impl IntoView {
    let active_tab = RwSignal::new(Tab::Send);

    view! {
        <div class="page sms-page">
            <div class="page__header">
                <h1>"SMS Management"</h1>
                <p>"Send messages and track SMS history"</p>
            </div>

            <BalanceCard />

            <div class="tab-panel">
                <div class="tab-panel__bar">
                    {TABS
                        .iter()
                        .map(|(tab, label, icon_name)| {
                            let tab = *tab;
                            view! {
                                <button
                                    class="tab-panel__tab"
                                    class:tab-panel__tab--active=move || active_tab.get() == tab
                                    on:click=move |_| active_tab.set(tab)
                                >
                                    {icon(*icon_name)}
                                    <span>{*label}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="tab-panel__content">
                    {move || match active_tab.get() {
                        Tab::Send => view! { <SendForm /> }.into_any(),
                        Tab::Bulk => view! { <BulkForm /> }.into_any(),
                        Tab::History => view! { <HistoryTable /> }.into_any(),
                        Tab::Renewal => view! { <RenewalPanel /> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

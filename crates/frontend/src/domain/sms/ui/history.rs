use contracts::sms::{SmsRecord, SmsStatus};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::sms::api;
use crate::shared::date_utils::format_datetime;
use crate::shared::pagination::ListPager;
use crate::system::auth::context::use_auth;

const PAGE_SIZE: usize = 10;

fn status_badge(status: SmsStatus) -> impl IntoView {
    let class = match status {
        SmsStatus::Sent => "badge badge--pending",
        SmsStatus::Delivered => "badge badge--converted",
        SmsStatus::Failed => "badge badge--failed",
    };
    view! { <span class=class>{status.label()}</span> }
}

/// Sent-message log, ten rows per page. Refetches whenever the tab is
/// (re)opened, so a send from another tab shows up on the next visit.
#[component]
pub fn HistoryTable() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let pager = RwSignal::new(ListPager::new(PAGE_SIZE));
    let (records, set_records) = signal(Vec::<SmsRecord>::new());
    let (loading, set_loading) = signal(true);

    let load = move || {
        let token = auth_state.get_untracked().token.unwrap_or_default();
        let snapshot = pager.get_untracked();
        set_loading.set(true);
        spawn_local(async move {
            match api::get_history(&token, snapshot.limit(), snapshot.offset()).await {
                Ok(page) => {
                    pager.update(|p| p.set_total(page.total));
                    set_records.set(page.items);
                }
                Err(error) => {
                    log!("Failed to fetch SMS history: {error}");
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        load();
    });

    let prev_page = move |_| {
        if pager.get_untracked().can_prev() {
            pager.update(|p| p.prev());
            load();
        }
    };

    let next_page = move |_| {
        if pager.get_untracked().can_next() {
            pager.update(|p| p.next());
            load();
        }
    };

    view! {
        <div class="history-table">
            {move || {
                if loading.get() && records.get().is_empty() {
                    view! { <div class="table-panel__empty">"Loading..."</div> }.into_any()
                } else if records.get().is_empty() {
                    view! { <div class="table-panel__empty">"No messages sent yet"</div> }
                        .into_any()
                } else {
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Phone"</th>
                                    <th>"Message"</th>
                                    <th>"Status"</th>
                                    <th>"Sent"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {records
                                    .get()
                                    .into_iter()
                                    .map(|record| {
                                        view! {
                                            <tr>
                                                <td>{record.phone_number.clone()}</td>
                                                <td class="history-table__message">
                                                    {record.message.clone()}
                                                </td>
                                                <td>{status_badge(record.status)}</td>
                                                <td>{format_datetime(record.sent_at)}</td>
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
                <p class="list-footer__label">{move || pager.get().range_label("messages")}</p>
                <div class="list-footer__buttons">
                    <button disabled=move || !pager.get().can_prev() on:click=prev_page>
                        "Previous"
                    </button>
                    <button disabled=move || !pager.get().can_next() on:click=next_page>
                        "Next"
                    </button>
                </div>
            </div>
        </div>
    }
}

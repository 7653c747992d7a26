use contracts::sms::SmsBalance;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::sms::api;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

/// The provider reports the balance as a decimal string; show it with two
/// decimals when it parses, verbatim when it does not.
fn format_balance(raw: &str) -> String {
    raw.parse::<f64>()
        .map(|value| format!("{:.2}", value))
        .unwrap_or_else(|_| raw.to_string())
}

#[component]
pub fn BalanceCard() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let (balance, set_balance) = signal(None::<SmsBalance>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let fetch_balance = move || {
        let token = auth_state.get_untracked().token.unwrap_or_default();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::get_balance(&token).await {
                Ok(data) => set_balance.set(Some(data)),
                Err(err) => set_error.set(Some(
                    err.form_message("Failed to fetch balance. Please try again."),
                )),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        fetch_balance();
    });

    view! {
        <div class="balance-card">
            <div class="balance-card__header">
                <h3>"Account Balance"</h3>
                <button
                    class="balance-card__refresh"
                    on:click=move |_| fetch_balance()
                    disabled=move || loading.get()
                    title="Refresh balance"
                >
                    {icon("refresh")}
                </button>
            </div>

            {move || {
                if loading.get() && balance.get().is_none() {
                    view! {
                        <div class="balance-card__skeleton">
                            <div class="skeleton-line skeleton-line--wide" />
                            <div class="skeleton-line" />
                        </div>
                    }
                        .into_any()
                } else if let Some(message) = error.get() {
                    view! { <div class="balance-card__error">{message}</div> }.into_any()
                } else if let Some(data) = balance.get() {
                    view! {
                        <div class="balance-card__body">
                            <div class="balance-card__amount">
                                <span class="balance-card__value">
                                    {format_balance(&data.balance)}
                                </span>
                                <span class="balance-card__currency">"ETB"</span>
                            </div>
                            <div class="balance-card__estimate">
                                "~" {data.estimated_messages} " messages available"
                            </div>
                        </div>
                    }
                        .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_is_shown_with_two_decimals() {
        assert_eq!(format_balance("1234.5"), "1234.50");
        assert_eq!(format_balance("0"), "0.00");
    }

    #[test]
    fn unparseable_balance_passes_through() {
        assert_eq!(format_balance("n/a"), "n/a");
    }
}

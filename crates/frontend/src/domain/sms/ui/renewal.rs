use contracts::sms::SendReport;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::sms::api;
use crate::system::auth::context::use_auth;

const MIN_DAYS: u32 = 1;
const MAX_DAYS: u32 = 30;

/// Keep the days-before-expiry input inside the range the reminder job
/// accepts; unparseable input falls back to the default of three days.
pub fn clamp_days(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(3).clamp(MIN_DAYS, MAX_DAYS)
}

#[component]
pub fn RenewalPanel() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let (days, set_days) = signal(3u32);
    let (sending, set_sending) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (report, set_report) = signal(None::<SendReport>);

    let on_send = move |_| {
        let token = auth_state.get_untracked().token.unwrap_or_default();
        let days_val = days.get_untracked();

        set_sending.set(true);
        set_error.set(None);
        set_report.set(None);

        spawn_local(async move {
            match api::send_renewal_reminders(&token, days_val).await {
                Ok(result) => set_report.set(Some(result)),
                Err(err) => {
                    set_error.set(Some(
                        err.form_message("Failed to send renewal reminders. Please try again."),
                    ));
                }
            }
            set_sending.set(false);
        });
    };

    view! {
        <div class="renewal-panel">
            <h3>"Send Renewal Reminders"</h3>
            <p class="renewal-panel__blurb">
                "Send automated renewal reminder messages to members whose subscriptions are expiring soon."
            </p>

            <div class="form-group">
                <label for="renewal-days">"Days Before Expiry"</label>
                <input
                    type="number"
                    id="renewal-days"
                    min="1"
                    max="30"
                    value=move || days.get().to_string()
                    on:input=move |ev| set_days.set(clamp_days(&event_target_value(&ev)))
                    disabled=move || sending.get()
                />
                <p class="form-hint">
                    {move || {
                        let d = days.get();
                        format!(
                            "Members expiring within {} day{} will receive reminders",
                            d,
                            if d == 1 { "" } else { "s" },
                        )
                    }}
                </p>
            </div>

            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            {move || {
                report
                    .get()
                    .map(|result| {
                        view! {
                            <div class="send-report">
                                <h4>"Results"</h4>
                                <p>"Total: " {result.total} " members"</p>
                                <p class="send-report__success">
                                    "Success: " {result.success} " sent"
                                </p>
                                <Show when=move || { result.failed > 0 }>
                                    <p class="send-report__failed">"Failed: " {result.failed}</p>
                                </Show>
                            </div>
                        }
                    })
            }}

            <button class="btn-primary" on:click=on_send disabled=move || sending.get()>
                {move || if sending.get() { "Sending..." } else { "Send Renewal Reminders" }}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_are_clamped_to_the_job_range() {
        assert_eq!(clamp_days("0"), 1);
        assert_eq!(clamp_days("15"), 15);
        assert_eq!(clamp_days("45"), 30);
    }

    #[test]
    fn garbage_input_falls_back_to_default() {
        assert_eq!(clamp_days(""), 3);
        assert_eq!(clamp_days("soon"), 3);
        assert_eq!(clamp_days("-2"), 3);
    }
}

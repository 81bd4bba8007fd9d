//! Status message shown under the lead forms

use crate::core::submission::{FormStatus, SubmitStatus};
use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Screen-reader friendly status region
///
/// Renders the form's message in green once accepted and in red otherwise.
#[component]
pub fn StatusMessage(
    #[prop(into)]
    status: Signal<FormStatus>,
) -> impl IntoView {
    let is_ok = move || status.with(|s| s.status == SubmitStatus::Ok);

    view! {
        <div aria-live="polite" class="min-h-[1.25rem]">
            {move || {
                status.with(|s| s.message.clone()).map(|message| {
                    let icon = if is_ok() { icons::CHECK } else { icons::ALERT_CIRCLE };
                    view! {
                        <div
                            class="mt-4 flex items-center justify-center gap-2 text-sm text-center"
                            class:text-green-700=is_ok
                            class:text-red-600=move || !is_ok()
                        >
                            <Icon name=icon class="w-4 h-4"/>
                            <span>{message}</span>
                        </div>
                    }
                })
            }}
        </div>
    }
}

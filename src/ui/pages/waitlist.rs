//! Waitlist signup page

use leptos::prelude::*;
use leptos_meta::Title;

use crate::core::leads::{INVALID_EMAIL_MESSAGE, WAITLIST_ENDPOINT, prepare_waitlist, waitlist_submittable};
use crate::ui::common::{FormField, StatusMessage, SubmitButton};
use crate::ui::lead_form::{Honeypot, LeadFormState};
use crate::ui::pages::{BackHome, LeadCard};

pub const WAITLIST_SUCCESS_MESSAGE: &str = "You’re on the list! We’ll email you when invites go out.";

#[component]
pub fn WaitlistPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let form = LeadFormState::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let prepared = prepare_waitlist(&email.get_untracked(), &form.honeypot.get_untracked());
        form.submit(
            WAITLIST_ENDPOINT,
            prepared,
            WAITLIST_SUCCESS_MESSAGE,
            move || email.set(String::new()),
        );
    };

    view! {
        <Title text="Join the Waitlist | Mesh" />

        <LeadCard
            title="Join the Waitlist"
            subtitle="Enter your email and we’ll notify you when Mesh is ready for you."
        >
            <form on:submit=on_submit class="space-y-3" novalidate=true>
                <FormField
                    id="email"
                    label="Email address"
                    input_type="email"
                    autocomplete="email"
                    placeholder="you@company.com"
                    required=true
                    value=email
                    on_input=Callback::new(move |value: String| {
                        form.clear_field_error_when(waitlist_submittable(&value));
                        email.set(value);
                    })
                    error=Signal::derive(move || form.field_error_if(INVALID_EMAIL_MESSAGE))
                />

                <Honeypot value=form.honeypot />

                <SubmitButton
                    loading=Signal::derive(move || form.is_loading())
                    ready=Signal::derive(move || waitlist_submittable(&email.get()))
                    text="Join"
                    loading_text="Adding…"
                />
            </form>

            <StatusMessage status=form.status />
            <BackHome />
        </LeadCard>
    }
}

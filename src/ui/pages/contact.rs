//! Contact page
//!
//! Name and email are required; organization and message are optional and
//! sent as null when left empty.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::core::leads::{
    CONTACT_ENDPOINT, ContactInput, INVALID_EMAIL_MESSAGE, MISSING_NAME_MESSAGE,
    contact_submittable, prepare_contact,
};
use crate::ui::common::{FormField, StatusMessage, SubmitButton, TextAreaField};
use crate::ui::lead_form::{Honeypot, LeadFormState};
use crate::ui::pages::{BackHome, LeadCard};

pub const CONTACT_SUCCESS_MESSAGE: &str = "Thank you! We'll get back to you soon.";

#[component]
pub fn ContactPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let organization = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let form = LeadFormState::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let (name_val, email_val, organization_val, message_val, honeypot_val) = (
            name.get_untracked(),
            email.get_untracked(),
            organization.get_untracked(),
            message.get_untracked(),
            form.honeypot.get_untracked(),
        );
        let prepared = prepare_contact(ContactInput {
            name: &name_val,
            email: &email_val,
            organization: &organization_val,
            message: &message_val,
            honeypot: &honeypot_val,
        });

        form.submit(CONTACT_ENDPOINT, prepared, CONTACT_SUCCESS_MESSAGE, move || {
            for field in [name, email, organization, message] {
                field.set(String::new());
            }
        });
    };

    view! {
        <Title text="Get Started with Us Today | Mesh" />

        <LeadCard
            title="Get Started with Us Today"
            subtitle="Let's start a conversation about how we can help you."
        >
            <form on:submit=on_submit class="space-y-4" novalidate=true>
                <FormField
                    id="name"
                    label="Name"
                    autocomplete="name"
                    placeholder="Your name"
                    required=true
                    value=name
                    on_input=Callback::new(move |value: String| {
                        form.clear_field_error_when(contact_submittable(&value, &email.get_untracked()));
                        name.set(value);
                    })
                    error=Signal::derive(move || form.field_error_if(MISSING_NAME_MESSAGE))
                />
                <FormField
                    id="email"
                    label="Email address"
                    input_type="email"
                    autocomplete="email"
                    placeholder="you@company.com"
                    required=true
                    value=email
                    on_input=Callback::new(move |value: String| {
                        form.clear_field_error_when(contact_submittable(&name.get_untracked(), &value));
                        email.set(value);
                    })
                    error=Signal::derive(move || form.field_error_if(INVALID_EMAIL_MESSAGE))
                />
                <FormField
                    id="organization"
                    label="Organization/College"
                    autocomplete="organization"
                    placeholder="Organization/College (optional)"
                    value=organization
                    on_input=Callback::new(move |value| organization.set(value))
                />
                <TextAreaField
                    id="message"
                    label="Message"
                    placeholder="Tell us about your needs..."
                    value=message
                    on_input=Callback::new(move |value| message.set(value))
                />

                <Honeypot value=form.honeypot />

                <SubmitButton
                    loading=Signal::derive(move || form.is_loading())
                    ready=Signal::derive(move || contact_submittable(&name.get(), &email.get()))
                    text="Send Message"
                    loading_text="Sending..."
                />
            </form>

            <StatusMessage status=form.status />
            <BackHome />
        </LeadCard>
    }
}

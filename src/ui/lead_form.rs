//! Shared state and pieces for the waitlist and contact forms

use leptos::prelude::*;
use serde::Serialize;

use crate::core::leads::FormError;
use crate::core::submission::{FormStatus, SubmissionGuard};

#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use crate::ui::lead_client::FetchTransport;

/// Reactive handle for one form's submission state
#[derive(Clone, Copy)]
pub struct LeadFormState {
    pub status: RwSignal<FormStatus>,
    /// Decoy field value; humans never see the input
    pub honeypot: RwSignal<String>,
    guard: StoredValue<SubmissionGuard>,
    #[cfg(feature = "hydrate")]
    transport: StoredValue<Rc<FetchTransport>, LocalStorage>,
}

impl LeadFormState {
    pub fn new() -> Self {
        Self {
            status: RwSignal::new(FormStatus::default()),
            honeypot: RwSignal::new(String::new()),
            guard: StoredValue::new(SubmissionGuard::new()),
            #[cfg(feature = "hydrate")]
            transport: StoredValue::new_local(Rc::new(FetchTransport::new())),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status.with(FormStatus::is_loading)
    }

    /// Field error currently shown, if it is the given message
    pub fn field_error_if(&self, message: &str) -> Option<String> {
        self.status
            .with(|s| s.field_error.clone())
            .filter(|error| error == message)
    }

    /// Drop the field error once the input is submittable again
    pub fn clear_field_error_when(&self, submittable: bool) {
        if submittable && self.status.with_untracked(|s| s.field_error.is_some()) {
            self.status.update(|s| s.field_error = None);
        }
    }

    /// Submit a prepared payload; `on_accepted` runs once the server accepted it
    ///
    /// Only the most recent submission of this form can update its status.
    pub fn submit<P>(
        self,
        endpoint: &'static str,
        prepared: Result<P, FormError>,
        success_message: &'static str,
        on_accepted: impl Fn() + 'static,
    ) where
        P: Serialize + 'static,
    {
        #[cfg(feature = "hydrate")]
        {
            use crate::core::submission::{FormEvent, SubmissionOutcome, submit_form};
            use leptos::task::spawn_local;

            let guard = self.guard.get_value();
            let transport = self.transport.get_value();
            let status = self.status;

            spawn_local(async move {
                submit_form(transport.as_ref(), &guard, endpoint, prepared, |event| {
                    let accepted = event == FormEvent::Settled(SubmissionOutcome::Accepted);
                    status.try_update(|s| s.apply(event, success_message));
                    if accepted {
                        on_accepted();
                    }
                })
                .await;
            });
        }

        // Forms only submit from the browser
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.guard, endpoint, prepared, success_message, on_accepted);
        }
    }
}

impl Default for LeadFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hidden decoy input; bots that fill it are rejected without a request
#[component]
pub fn Honeypot(value: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="hidden" aria-hidden="true">
            <label for="company">"Company"</label>
            <input
                id="company"
                name="company"
                type="text"
                tabindex="-1"
                autocomplete="off"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

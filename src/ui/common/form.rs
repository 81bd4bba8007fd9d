use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Single-line input with a screen-reader label and an inline error
#[component]
pub fn FormField(
    /// Element id; also used as the `name` attribute
    id: &'static str,
    /// Label text (visually hidden, the placeholder carries the hint)
    label: &'static str,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Browser autocomplete hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(default = false)]
    required: bool,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Optional error message to display under the input
    #[prop(optional, into)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let error_id = format!("{id}-error");
    let has_error = move || error.as_ref().and_then(|e| e.get()).is_some();

    view! {
        <div>
            <label for=id class="sr-only">{label}</label>
            <input
                id=id
                name=id
                type=input_type
                autocomplete=autocomplete
                inputmode=(input_type == "email").then_some("email")
                required=required
                class="mesh-input"
                class:border-red-500=has_error
                class:border-gray-300=move || !has_error()
                placeholder=placeholder
                aria-invalid=move || has_error().to_string()
                aria-describedby={
                    let error_id = error_id.clone();
                    move || has_error().then(|| error_id.clone())
                }
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || {
                let error_id = error_id.clone();
                error.as_ref().and_then(|e| e.get()).map(|err| view! {
                    <p id=error_id class="mt-1 flex items-center gap-1 text-xs text-red-600">
                        <Icon name=icons::ALERT_CIRCLE class="w-3.5 h-3.5"/>
                        <span>{err}</span>
                    </p>
                })
            }}
        </div>
    }
}

/// Text area form field component
#[component]
pub fn TextAreaField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 4)]
    rows: u32,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="sr-only">{label}</label>
            <textarea
                id=id
                name=id
                class="mesh-input border-gray-300 resize-none"
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

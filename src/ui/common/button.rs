use leptos::prelude::*;

/// Form submit button that swaps its label for a spinner while loading
#[component]
pub fn SubmitButton(
    /// Whether a submission is in flight
    #[prop(into)]
    loading: Signal<bool>,
    /// Whether the form input is complete enough to submit
    #[prop(into)]
    ready: Signal<bool>,
    /// Button text when idle
    text: &'static str,
    /// Button text when loading
    loading_text: &'static str,
) -> impl IntoView {
    let is_disabled = move || loading.get() || !ready.get();

    view! {
        <button type="submit" class="mesh-btn w-full" disabled=is_disabled>
            <Show
                when=move || loading.get()
                fallback=move || view! { <span>{text}</span> }
            >
                <span class="inline-flex items-center justify-center gap-2">
                    <InlineSpinner />
                    {loading_text}
                </span>
            </Show>
        </button>
    }
}

/// Small inline spinner
#[component]
pub fn InlineSpinner() -> impl IntoView {
    view! {
        <svg class="spin h-4 w-4" viewBox="0 0 24 24" fill="none" aria-hidden="true">
            <circle cx="12" cy="12" r="9" stroke="currentColor" stroke-width="3" opacity=".25"/>
            <path d="M21 12a9 9 0 0 1-9 9" stroke="currentColor" stroke-width="3"/>
        </svg>
    }
}

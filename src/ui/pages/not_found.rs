//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Set the status code when rendered on the server
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page Not Found | Mesh" />

        <div class="min-h-screen bg-gray-50 flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-900 mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold text-gray-900 mb-2">
                    "Page Not Found"
                </h2>

                <p class="text-gray-600 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A href="/" attr:class="mesh-btn">
                        "Go Home"
                    </A>
                    <A
                        href="/waitlist"
                        attr:class="px-6 py-3 border border-gray-300 text-gray-900 hover:bg-gray-100 font-medium rounded-full transition-colors"
                    >
                        "Join the Waitlist"
                    </A>
                </div>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-gray-500">"© 2025 Mesh Intelligence, Inc."</p>
            </div>
        </div>
    }
}

//! Application pages module
//!
//! - Landing page (home)
//! - Waitlist signup
//! - Contact form
//! - Not found

mod contact;
mod landing;
mod not_found;
mod waitlist;

pub use contact::{CONTACT_SUCCESS_MESSAGE, ContactPage};
pub use landing::LandingPage;
pub use not_found::NotFoundPage;
pub use waitlist::{WAITLIST_SUCCESS_MESSAGE, WaitlistPage};

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};
use landing::Logo;

/// Centered frosted card over the animated gradient, shared by the form pages
#[component]
fn LeadCard(title: &'static str, subtitle: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen relative flex items-center justify-center px-4 overflow-hidden">
            <div
                class="absolute inset-0 z-0 animate-gradient-mesh bg-gradient-to-br from-purple-200 via-blue-200 to-pink-200"
                aria-hidden="true"
            ></div>

            <div class="relative z-10 w-full max-w-md bg-white/80 backdrop-blur-lg rounded-2xl p-8 shadow-lg border border-white/50">
                <div class="flex justify-center mb-6">
                    <Logo class="h-16 w-16" />
                </div>
                <h1 class="text-2xl font-semibold text-gray-900 mb-2 text-center">{title}</h1>
                <p class="text-sm text-gray-700 mb-6 text-center">{subtitle}</p>
                {children()}
            </div>
        </div>
    }
}

#[component]
fn BackHome() -> impl IntoView {
    view! {
        <A
            href="/"
            attr:class="mt-6 flex items-center justify-center gap-1 text-sm text-gray-600 hover:underline"
        >
            <Icon name=icons::ARROW_LEFT class="w-4 h-4" />
            "Back to home"
        </A>
    }
}

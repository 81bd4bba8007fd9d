//! Landing page component
//!
//! Mesh marketing home page:
//! - SEO meta tags
//! - Hero section with the call to action
//! - Capabilities grid with hover-to-reveal descriptions
//! - FAQ section with accordion
//! - Footer

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Frequently asked questions, in display order
const FAQS: &[(&str, &str)] = &[
    (
        "What is Mesh?",
        "Mesh is a private, AI-powered knowledge system that turns your team’s documents, meetings, whiteboards, and threads into a living, searchable intelligence map.",
    ),
    (
        "How does Mesh work?",
        "A team manager hosts a private Mesh server. Members join via invite and authenticate using a Google account tied to an admin-approved email. Uploaded content is ingested, summarized, tagged, and connected by AI.",
    ),
    (
        "What types of content can I upload?",
        "You can upload PDFs, images, audio files, code, text, notes, links, and meeting recordings. Mesh supports most common formats used by modern teams.",
    ),
    (
        "How does the AI organize the content?",
        "Mesh uses LLMs and embeddings to generate summaries and tag content by topic, uploader, team, and timeline. It builds a dynamic knowledge graph linking everything together.",
    ),
    (
        "Is Mesh secure?",
        "Yes. Mesh servers are self-hosted by your team, with strict access control via Google sign-in and admin-approved emails. All data is isolated and encrypted.",
    ),
    (
        "Can I use Mesh with my existing tools?",
        "Yes. Mesh supports import and integration with PDFs, code, images, links, meeting recordings, and more.",
    ),
    (
        "Can I export or back up my team’s Mesh content?",
        "Yes. Admins can export all uploaded files, summaries, and the knowledge graph at any time.",
    ),
];

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />

        <div class="min-h-screen bg-white overflow-x-hidden">
            <Header />

            // Hero Section
            <section class="w-full min-h-[calc(100vh-80px)] bg-gray-50 relative px-4 py-16
                            flex flex-col items-center justify-center overflow-hidden">
                // Background decoration
                <div
                    class="absolute inset-0 animate-gradient-mesh opacity-60
                           bg-gradient-to-br from-purple-200 via-blue-200 to-pink-200"
                    aria-hidden="true"
                ></div>

                <div class="relative z-10 flex flex-col items-center">
                    <h1 class="text-5xl md:text-6xl font-bold text-center mb-4 text-gray-900 drop-shadow">
                        "One searchable brain"<br/>"for your entire team"
                    </h1>
                    <p class="text-lg md:text-xl text-center text-gray-600 max-w-2xl mb-6">
                        "Mesh turns docs, threads, meetings, and whiteboards into a dynamic knowledge graph you can query."
                    </p>
                    <A href="/waitlist" attr:class="mesh-btn">
                        "Get Started"
                    </A>
                </div>
            </section>

            // Capabilities Section
            <section class="w-full bg-white px-4 py-20">
                <h2 class="text-2xl md:text-3xl font-bold text-center text-gray-900 mb-10">
                    "Capabilities"
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 max-w-6xl mx-auto">
                    <FeatureCard
                        icon=icons::SHIELD
                        title="Private Team Server"
                        description="Managers host secure servers. Members join via invite + Google SSO matched to approved emails."
                    />
                    <FeatureCard
                        icon=icons::UPLOAD_CLOUD
                        title="Upload Anything"
                        description="Share files, images, PDFs, code, audio, links, and more. Mesh supports your team’s entire knowledge stream."
                    />
                    <FeatureCard
                        icon=icons::BOT
                        title="AI-Powered Organization"
                        description="Mesh auto-tags content by topic, timeline, and uploader, generating brief summaries for each asset."
                    />
                    <FeatureCard
                        icon=icons::BRAIN
                        title="Knowledge Graph"
                        description="Your workspace becomes a dynamic map, like multiplayer Obsidian, built from your team’s shared memory."
                    />
                    <FeatureCard
                        icon=icons::MESSAGE_CIRCLE
                        title="Ask Anything"
                        description="GPT-powered assistant tuned to your content answers questions with precision and references."
                    />
                    <FeatureCard
                        icon=icons::SEARCH
                        title="Built for Search"
                        description="Find anything fast. Search by topic, person, date, or keyword and Mesh connects the dots."
                    />
                </div>
            </section>

            // FAQ Section
            <section
                id="faq"
                class="w-full animate-gradient-mesh bg-gradient-to-br from-purple-200 via-blue-200 to-pink-200 px-4 py-20"
            >
                <h2 class="text-2xl md:text-3xl font-bold text-center text-gray-900">
                    "Frequently Asked Questions"
                </h2>
                <div class="mt-10 max-w-3xl w-full space-y-4 pb-20 mx-auto">
                    {FAQS
                        .iter()
                        .map(|(question, answer)| view! { <FaqItem question=*question answer=*answer /> })
                        .collect_view()}
                </div>
            </section>

            <Footer />
        </div>
    }
}

/// Sticky top bar with the brand and a call to action
#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="w-full flex justify-between items-center px-6 py-4 bg-white shadow-sm sticky top-0 z-50">
            <A href="/" attr:class="flex items-center gap-2 hover:opacity-80 transition-opacity">
                <Logo />
                <span class="font-semibold text-xl text-gray-900">"Mesh"</span>
            </A>
            <nav class="flex items-center gap-4">
                <a href="#faq" class="hidden sm:inline text-sm font-medium text-gray-600 hover:text-gray-900">
                    "FAQ"
                </a>
                <A href="/contact" attr:class="hidden sm:inline text-sm font-medium text-gray-600 hover:text-gray-900">
                    "Contact"
                </A>
                <A href="/waitlist" attr:class="mesh-btn">
                    "Get Started"
                </A>
            </nav>
        </header>
    }
}

/// Capability card; the description shows on hover or keyboard focus
#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    let (revealed, set_revealed) = signal(false);

    view! {
        <div
            class="bg-white p-6 rounded-2xl border border-gray-200 shadow-sm transition duration-300
                   hover:shadow-lg hover:-translate-y-1 focus:outline-none focus:ring-2 focus:ring-indigo-500"
            tabindex="0"
            on:mouseenter=move |_| set_revealed.set(true)
            on:mouseleave=move |_| set_revealed.set(false)
            on:focus=move |_| set_revealed.set(true)
            on:blur=move |_| set_revealed.set(false)
        >
            <div class="w-12 h-12 rounded-lg bg-indigo-50 flex items-center justify-center mb-4">
                <Icon name=icon class="w-8 h-8" />
            </div>
            <h3 class="text-lg font-semibold mb-2 text-gray-900">{title}</h3>
            <Show when=move || revealed.get()>
                <p class="text-sm text-gray-600 leading-relaxed mt-2">{description}</p>
            </Show>
        </div>
    }
}

/// FAQ accordion item
#[component]
fn FaqItem(question: &'static str, answer: &'static str) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);

    view! {
        <div class="bg-white rounded-xl shadow-sm overflow-hidden transition duration-500 ease-out"
             class=("hover:scale-[1.02]", move || !is_open.get())
        >
            <button
                class="w-full px-5 py-4 flex items-center justify-between gap-4 text-left"
                on:click=move |_| set_is_open.update(|v| *v = !*v)
                aria-expanded=move || is_open.get().to_string()
            >
                <span class="text-lg font-semibold text-gray-900">{question}</span>
                <div
                    class="flex items-center justify-center w-5 h-5 flex-shrink-0 transition-transform duration-300"
                    class=("rotate-180", move || is_open.get())
                >
                    <Icon name=icons::CHEVRON_DOWN class="w-5 h-5" />
                </div>
            </button>
            <Show when=move || is_open.get()>
                <p class="px-5 pb-4 text-sm text-gray-700 leading-relaxed">{answer}</p>
            </Show>
        </div>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Mesh" />
        <Meta name="description" content="Mesh: AI-powered team knowledge system" />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Mesh" />
        <Meta property="og:description" content="One searchable brain for your entire team." />
    }
}

/// Mesh logo
#[component]
pub fn Logo(#[prop(default = "h-12 w-12")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/logo.svg" alt="Mesh logo" class=class />
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="w-full bg-gray-100 text-gray-500 py-6 text-center">
            <span class="text-sm tracking-wide">"© 2025 Mesh Intelligence, Inc."</span>
        </footer>
    }
}

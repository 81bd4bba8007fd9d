use leptos::prelude::*;

/// SVG icon served from `/icons/{name}.svg`
#[component]
pub fn Icon(
    /// Icon file name without the .svg extension
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icons shipped in `public/icons`
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const ARROW_LEFT: &str = "arrow-left";
    pub const BOT: &str = "bot";
    pub const BRAIN: &str = "brain";
    pub const CHECK: &str = "check";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const MESSAGE_CIRCLE: &str = "message-circle";
    pub const SEARCH: &str = "search";
    pub const SHIELD: &str = "shield";
    pub const UPLOAD_CLOUD: &str = "upload-cloud";
}

use leptos::prelude::*;

/// Decorative icon served from `/icons/{name}.svg`
#[component]
pub fn Icon(
    /// Icon file name without the .svg extension
    name: &'static str,
    #[prop(default = "icon")] class: &'static str,
) -> impl IntoView {
    view! {
        <img
            src=format!("/icons/{}.svg", name)
            class=class
            alt=""
            aria-hidden="true"
            draggable="false"
        />
    }
}

pub mod icons {
    pub const GLOBE: &str = "globe";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const ARROW_UP: &str = "arrow-up";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const CHECK: &str = "check";
    pub const MENU: &str = "menu";
    pub const X: &str = "x";

    /// One icon per feature card, in card order
    pub const FEATURES: [&str; 6] = ["coins", "line-chart", "image", "layout", "plug", "calendar"];
}

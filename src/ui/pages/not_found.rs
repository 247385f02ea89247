//! 404 page

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::i18n::use_locale_context;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let locale = use_locale_context();

    view! {
        <Title text="Inkfinity - Page not found" />

        <div class="not-found">
            <h1 class="not-found-code">"404"</h1>
            <h2 class="section-title">{move || locale.strings().not_found_title}</h2>
            <p class="section-description">{move || locale.strings().not_found_description}</p>
            <A href="/" attr:class="btn btn-primary">
                {move || locale.strings().not_found_home}
                <Icon name=icons::ARROW_RIGHT class="icon icon-inline" />
            </A>
        </div>
    }
}

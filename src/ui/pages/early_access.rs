//! Early-access page with the waitlist form

use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::i18n::use_locale_context;
use crate::ui::layout::{Footer, Header};
use crate::ui::waitlist_form::WaitlistForm;

#[component]
pub fn EarlyAccessPage() -> impl IntoView {
    let locale = use_locale_context();

    view! {
        <Title text="Inkfinity - Early access" />

        <div class="landing">
            <Header />

            <main class="section early-access">
                <div class="section-inner early-access-card">
                    <img
                        src="/images/inkfinity-logo.svg"
                        alt=""
                        class="early-access-logo"
                        draggable="false"
                    />
                    <h1 class="section-title">{move || locale.strings().waitlist_title}</h1>
                    <p class="section-description">{move || locale.strings().waitlist_description}</p>
                    <WaitlistForm />
                </div>
            </main>

            <Footer />
        </div>
    }
}

//! Landing page
//!
//! - SEO meta tags
//! - Preloader gating the first paint
//! - Hero with the interactive model
//! - About, Features and Community sections
//! - Scroll-triggered reveal animations

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};
use leptos_router::components::A;

use crate::core::links::LinkKey;
use crate::ui::i18n::use_locale_context;
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::{ExternalLink, Footer, Header};
use crate::ui::model_viewer::ModelViewer;
use crate::ui::preloader::Preloader;

/// Split a tagline into its sentences, dropping the periods
pub fn split_phrases(text: &str) -> Vec<&str> {
    text.split('.')
        .map(str::trim)
        .filter(|phrase| !phrase.is_empty())
        .collect()
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let (loading, set_loading) = signal(true);

    view! {
        <SeoMeta />

        <Preloader on_complete=Callback::new(move |_| set_loading.set(false)) />

        <div class="landing" class:landing-loading=move || loading.get()>
            <Header />

            <main>
                <HeroSection ready=Signal::derive(move || !loading.get()) />
                <AboutSection />
                <FeaturesSection />
                <CommunitySection />
            </main>

            <Footer />
        </div>

        <ScrollAnimationScript />
    }
}

#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Inkfinity - Tattoo art on the blockchain" />
        <Meta name="description" content="Inkfinity connects tattoo artists and collectors: certified designs, crypto payments and on-chain bookings." />
        <Meta name="keywords" content="tattoo, tattoo artists, NFT, crypto payments, bookings, blockchain" />

        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Inkfinity - Tattoo art on the blockchain" />
        <Meta property="og:description" content="Certified tattoo designs, crypto payments and on-chain bookings." />
        <Meta property="og:image" content="/images/inkfinity-logo.svg" />

        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content="Inkfinity - Tattoo art on the blockchain" />

        <Link rel="icon" href="/favicon.svg" />
    }
}

#[component]
fn HeroSection(ready: Signal<bool>) -> impl IntoView {
    let locale = use_locale_context();

    view! {
        <section class="hero" class:hero-ready=move || ready.get()>
            <div class="hero-copy">
                <img
                    src="/images/inkfinity-wordmark.svg"
                    alt="Inkfinity"
                    class="hero-wordmark"
                    draggable="false"
                />
                <h1 class="hero-tagline">
                    {move || {
                        split_phrases(locale.strings().hero_tagline)
                            .into_iter()
                            .enumerate()
                            .map(|(index, phrase)| {
                                view! {
                                    <span
                                        class="hero-phrase"
                                        style=format!("animation-delay: {}ms", 200 + index * 250)
                                    >
                                        {format!("{phrase}.")}
                                    </span>
                                }
                            })
                            .collect_view()
                    }}
                </h1>
            </div>

            <div class="hero-model">
                <ModelViewer alt=Signal::derive(move || locale.strings().about_image_alt) />
            </div>

            <a href="#about" class="hero-scroll-indicator" aria-label=move || locale.strings().nav_about>
                <Icon name=icons::CHEVRON_DOWN class="icon icon-large" />
            </a>
        </section>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    let locale = use_locale_context();

    view! {
        <section id="about" class="section about">
            <div class="section-inner about-grid">
                <img
                    src="/images/inkfinity-man.svg"
                    alt=move || locale.strings().about_image_alt
                    class="about-image landing-scroll-animate"
                    loading="lazy"
                />
                <div class="landing-scroll-animate">
                    <h2 class="section-title">{move || locale.strings().about_title}</h2>
                    <p class="section-description">{move || locale.strings().about_description}</p>
                    <ul class="about-points">
                        {move || {
                            locale
                                .strings()
                                .about_points
                                .iter()
                                .map(|point| {
                                    view! {
                                        <li>
                                            <Icon name=icons::CHECK class="icon icon-inline" />
                                            <span>{*point}</span>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeaturesSection() -> impl IntoView {
    let locale = use_locale_context();

    view! {
        <section id="features" class="section features">
            <div class="section-inner">
                <div class="section-header landing-scroll-animate">
                    <h2 class="section-title">{move || locale.strings().features_title}</h2>
                    <p class="section-description">{move || locale.strings().features_description}</p>
                </div>

                <div class="features-grid">
                    {icons::FEATURES
                        .into_iter()
                        .enumerate()
                        .map(|(index, icon)| view! { <FeatureCard index=index icon=icon /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Card for feature `index`; the last feature is marked as coming soon
#[component]
fn FeatureCard(index: usize, icon: &'static str) -> impl IntoView {
    let locale = use_locale_context();
    let feature = move || &locale.strings().features[index];
    let coming_soon = index + 1 == icons::FEATURES.len();

    view! {
        <article class="feature-card landing-scroll-animate" class:feature-card-soon=coming_soon>
            <div class="feature-card-icon">
                <Icon name=icon class="icon icon-large" />
            </div>
            <h3 class="feature-card-title">{move || feature().title}</h3>
            <p class="feature-card-description">{move || feature().description}</p>
            {coming_soon.then(|| {
                view! {
                    <span class="feature-card-badge">
                        {move || locale.strings().features_coming_soon}
                    </span>
                }
            })}
        </article>
    }
}

#[component]
fn CommunitySection() -> impl IntoView {
    let locale = use_locale_context();

    view! {
        <section id="community" class="section community">
            <div class="section-inner community-card landing-scroll-animate">
                <h2 class="section-title">{move || locale.strings().community_title}</h2>
                <p class="section-description">{move || locale.strings().community_description}</p>
                <div class="community-actions">
                    <A href="/early-access" attr:class="btn btn-primary">
                        {move || locale.strings().community_early_access}
                        <Icon name=icons::ARROW_RIGHT class="icon icon-inline" />
                    </A>
                    <ExternalLink link=LinkKey::App class="btn btn-secondary">
                        {move || locale.strings().community_view_demo}
                    </ExternalLink>
                </div>
            </div>
        </section>
    }
}

/// Adds `visible` to each `.landing-scroll-animate` element the first time
/// it scrolls into view
#[component]
fn ScrollAnimationScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function initScrollAnimations() {
                    const observer = new IntersectionObserver((entries) => {
                        entries.forEach(entry => {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                                observer.unobserve(entry.target);
                            }
                        });
                    }, {
                        threshold: 0.1,
                        rootMargin: '0px 0px -50px 0px'
                    });

                    document.querySelectorAll('.landing-scroll-animate').forEach(el => {
                        observer.observe(el);
                    });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initScrollAnimations);
                } else {
                    initScrollAnimations();
                }
            })();
            "#
        </script>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_phrases() {
        assert_eq!(
            split_phrases("Ink your story. Own your art. Forever on chain."),
            vec!["Ink your story", "Own your art", "Forever on chain"]
        );
    }

    #[test]
    fn test_split_phrases_ignores_empty_pieces() {
        assert_eq!(split_phrases("One..  Two. "), vec!["One", "Two"]);
        assert!(split_phrases("").is_empty());
        assert!(split_phrases(" . . ").is_empty());
    }

    #[test]
    fn test_split_phrases_without_period() {
        assert_eq!(split_phrases("Just one phrase"), vec!["Just one phrase"]);
    }
}

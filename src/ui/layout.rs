//! Site header and footer

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::links::{LinkKey, get_url, is_external_url, safe_url};
use crate::ui::i18n::{Locale, LocaleContext, use_locale_context};
use crate::ui::icon::{Icon, icons};

/// Anchor for a configured link. External targets open in a new tab.
#[component]
pub fn ExternalLink(
    link: LinkKey,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let href = safe_url(get_url(link));
    let external = is_external_url(href);

    view! {
        <a
            href=href
            class=class
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
        >
            {children()}
        </a>
    }
}

/// Section anchors in header order, paired with their label
fn nav_anchors(locale: Locale) -> [(&'static str, &'static str); 3] {
    let strings = locale.strings();
    [
        ("#about", strings.nav_about),
        ("#features", strings.nav_features),
        ("#community", strings.nav_community),
    ]
}

#[component]
pub fn Header() -> impl IntoView {
    let locale = use_locale_context();
    let scrolled = RwSignal::new(false);
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    #[cfg(not(feature = "ssr"))]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let offset = window().scroll_y().unwrap_or_default();
            scrolled.set(offset > 0.0);
        });
        on_cleanup(move || drop(handle));
    }

    view! {
        <header class="site-header" class:site-header-scrolled=move || scrolled.get()>
            <div class="site-header-inner">
                <A href="/" attr:class="site-brand">
                    <img src="/images/inkfinity-logo.svg" alt="" class="site-brand-logo" />
                    <span>"Inkfinity"</span>
                </A>

                <nav class="site-nav">
                    {move || {
                        nav_anchors(locale.locale.get())
                            .into_iter()
                            .map(|(href, label)| view! { <a href=href class="site-nav-link">{label}</a> })
                            .collect_view()
                    }}
                    <ExternalLink link=LinkKey::Whitepaper class="site-nav-link">
                        {move || locale.strings().nav_whitepaper}
                    </ExternalLink>
                </nav>

                <div class="site-header-actions">
                    <LocaleSwitch locale=locale />
                    <ExternalLink link=LinkKey::App class="btn btn-primary btn-launch">
                        {move || locale.strings().nav_launch_app}
                    </ExternalLink>
                    <button
                        class="site-menu-toggle"
                        on:click=move |_| set_mobile_menu_open.update(|open| *open = !*open)
                        aria-label="Toggle menu"
                        aria-expanded=move || mobile_menu_open.get().to_string()
                    >
                        {move || {
                            let name = if mobile_menu_open.get() { icons::X } else { icons::MENU };
                            view! { <Icon name=name /> }
                        }}
                    </button>
                </div>
            </div>

            <nav class="site-mobile-nav" class:open=move || mobile_menu_open.get()>
                {move || {
                    nav_anchors(locale.locale.get())
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <a
                                    href=href
                                    class="site-nav-link"
                                    on:click=move |_| set_mobile_menu_open.set(false)
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </nav>
        </header>
    }
}

/// Language dropdown
#[component]
pub fn LocaleSwitch(locale: LocaleContext) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <div class="locale-switch" on:mouseleave=move |_| open.set(false)>
            <button
                class="locale-switch-button"
                on:click=move |_| open.update(|v| *v = !*v)
                aria-haspopup="listbox"
                aria-expanded=move || open.get().to_string()
                aria-label=move || locale.strings().nav_language
            >
                <Icon name=icons::GLOBE />
                <span>{move || locale.locale.get().code().to_uppercase()}</span>
                <Icon name=icons::CHEVRON_DOWN class="icon icon-small" />
            </button>

            <Show when=move || open.get()>
                <ul class="locale-switch-menu" role="listbox">
                    {Locale::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <li
                                    role="option"
                                    class="locale-switch-option"
                                    class:active=move || locale.locale.get() == option
                                    aria-selected=move || (locale.locale.get() == option).to_string()
                                    on:click=move |_| {
                                        locale.set_locale(option);
                                        open.set(false);
                                    }
                                >
                                    {option.native_name()}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}

fn copyright_year() -> i32 {
    use chrono::Datelike;
    chrono::Utc::now().year()
}

#[component]
pub fn Footer() -> impl IntoView {
    let locale = use_locale_context();

    let scroll_to_top = move |_| {
        #[cfg(not(feature = "ssr"))]
        {
            use leptos::web_sys::{ScrollBehavior, ScrollToOptions};

            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window().scroll_to_with_scroll_to_options(&options);
        }
    };

    let footer_links = move || {
        let strings = locale.strings();
        [
            (LinkKey::Whitepaper, strings.footer_whitepaper),
            (LinkKey::Github, strings.footer_github),
            (LinkKey::Discord, strings.footer_discord),
            (LinkKey::X, strings.footer_x),
            (LinkKey::Telegram, strings.footer_telegram),
            (LinkKey::Terms, strings.footer_terms),
            (LinkKey::Privacy, strings.footer_privacy),
        ]
        .into_iter()
        .map(|(link, label)| {
            view! {
                <li>
                    <ExternalLink link=link class="site-footer-link">{label}</ExternalLink>
                </li>
            }
        })
        .collect_view()
    };

    view! {
        <footer class="site-footer">
            <div class="site-footer-inner">
                <div class="site-footer-brand">
                    <img src="/images/inkfinity-logo.svg" alt="" class="site-brand-logo" />
                    <p>{move || locale.strings().footer_tagline}</p>
                </div>

                <ul class="site-footer-links">{footer_links}</ul>

                <div class="site-footer-actions">
                    <LocaleSwitch locale=locale />
                    <button
                        class="site-footer-top"
                        on:click=scroll_to_top
                        aria-label=move || locale.strings().footer_back_to_top
                    >
                        <Icon name=icons::ARROW_UP />
                    </button>
                </div>
            </div>

            <p class="site-footer-copyright">
                {move || format!("© {} Inkfinity. {}", copyright_year(), locale.strings().footer_rights)}
            </p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_anchors_target_sections() {
        for locale in Locale::ALL {
            let hrefs: Vec<_> = nav_anchors(locale).iter().map(|(href, _)| *href).collect();
            assert_eq!(hrefs, ["#about", "#features", "#community"]);
        }
    }

    #[test]
    fn test_nav_labels_follow_locale() {
        assert_eq!(nav_anchors(Locale::En)[0].1, "About");
        assert_eq!(nav_anchors(Locale::Es)[0].1, "Acerca de");
    }

    #[test]
    fn test_copyright_year_is_current() {
        assert!(copyright_year() >= 2025);
    }
}

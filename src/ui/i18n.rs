//! Localization context
//!
//! Provides:
//! - Locale enum (English, Spanish)
//! - Static string tables per locale
//! - LocaleContext for reactive locale state
//! - LocalStorage persistence

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

#[cfg(not(feature = "ssr"))]
const STORAGE_KEY: &str = "inkfinity-locale";

/// Supported locales
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Es];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code.split(['-', '_']).next().unwrap_or_default() {
            "es" => Locale::Es,
            _ => Locale::En,
        }
    }

    /// Name of the language in that language
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Es => "Español",
        }
    }

    pub fn strings(&self) -> &'static Strings {
        match self {
            Locale::En => &EN,
            Locale::Es => &ES,
        }
    }
}

pub struct FeatureText {
    pub title: &'static str,
    pub description: &'static str,
}

/// Every user-facing string on the site
pub struct Strings {
    pub nav_about: &'static str,
    pub nav_features: &'static str,
    pub nav_community: &'static str,
    pub nav_whitepaper: &'static str,
    pub nav_launch_app: &'static str,
    pub nav_language: &'static str,

    pub hero_tagline: &'static str,

    pub about_title: &'static str,
    pub about_description: &'static str,
    pub about_image_alt: &'static str,
    pub about_points: [&'static str; 4],

    pub features_title: &'static str,
    pub features_description: &'static str,
    pub features_coming_soon: &'static str,
    pub features: [FeatureText; 6],

    pub community_title: &'static str,
    pub community_description: &'static str,
    pub community_early_access: &'static str,
    pub community_view_demo: &'static str,

    pub waitlist_title: &'static str,
    pub waitlist_description: &'static str,
    pub waitlist_email_placeholder: &'static str,
    pub waitlist_submit: &'static str,
    pub waitlist_submitting: &'static str,
    pub waitlist_network_error: &'static str,

    pub footer_tagline: &'static str,
    pub footer_rights: &'static str,
    pub footer_whitepaper: &'static str,
    pub footer_github: &'static str,
    pub footer_discord: &'static str,
    pub footer_terms: &'static str,
    pub footer_privacy: &'static str,
    pub footer_x: &'static str,
    pub footer_telegram: &'static str,
    pub footer_back_to_top: &'static str,

    pub not_found_title: &'static str,
    pub not_found_description: &'static str,
    pub not_found_home: &'static str,
}

static EN: Strings = Strings {
    nav_about: "About",
    nav_features: "Features",
    nav_community: "Community",
    nav_whitepaper: "Whitepaper",
    nav_launch_app: "Launch App",
    nav_language: "Change language",

    hero_tagline: "Ink your story. Own your art. Forever on chain.",

    about_title: "Where tattoo art meets the blockchain",
    about_description: "Inkfinity connects tattoo artists and collectors in one place. Every design is certified, every booking is transparent, and every artist keeps the value of their work.",
    about_image_alt: "Inkfinity character",
    about_points: [
        "Certify original designs as digital collectibles",
        "Pay and get paid in crypto with low fees",
        "Discover artists by style, city and reputation",
        "Keep a verifiable history of every piece",
    ],

    features_title: "Everything an artist needs",
    features_description: "One platform to showcase, sell and schedule tattoo work.",
    features_coming_soon: "Coming soon",
    features: [
        FeatureText {
            title: "Crypto payments",
            description: "Accept deposits and payments in the tokens your clients already hold.",
        },
        FeatureText {
            title: "Price oracle",
            description: "Quotes pegged to live market prices so deposits keep their value.",
        },
        FeatureText {
            title: "Design NFTs",
            description: "Mint flash sheets and custom pieces as collectibles with royalties.",
        },
        FeatureText {
            title: "Artist dashboard",
            description: "Track sales, clients and collections from a single view.",
        },
        FeatureText {
            title: "Studio controller",
            description: "Plug Inkfinity into the tools your studio already uses.",
        },
        FeatureText {
            title: "Bookings",
            description: "Let clients reserve sessions with an on-chain deposit.",
        },
    ],

    community_title: "Join the Inkfinity community",
    community_description: "Be among the first artists and collectors on the platform. Early members help shape what we build next.",
    community_early_access: "Get early access",
    community_view_demo: "View demo",

    waitlist_title: "Get early access",
    waitlist_description: "Leave your email and we will let you know as soon as Inkfinity opens its doors.",
    waitlist_email_placeholder: "you@example.com",
    waitlist_submit: "Join the waitlist",
    waitlist_submitting: "Joining...",
    waitlist_network_error: "Network error. Please try again.",

    footer_tagline: "The home of tattoo art on the blockchain.",
    footer_rights: "All rights reserved.",
    footer_whitepaper: "Whitepaper",
    footer_github: "GitHub",
    footer_discord: "Discord",
    footer_terms: "Terms of Service",
    footer_privacy: "Privacy Policy",
    footer_x: "X",
    footer_telegram: "Telegram",
    footer_back_to_top: "Back to top",

    not_found_title: "Page not found",
    not_found_description: "The page you're looking for doesn't exist or has been moved.",
    not_found_home: "Go home",
};

static ES: Strings = Strings {
    nav_about: "Acerca de",
    nav_features: "Funciones",
    nav_community: "Comunidad",
    nav_whitepaper: "Whitepaper",
    nav_launch_app: "Abrir App",
    nav_language: "Cambiar idioma",

    hero_tagline: "Tatúa tu historia. Sé dueño de tu arte. Para siempre en la cadena.",

    about_title: "Donde el arte del tatuaje se une a la blockchain",
    about_description: "Inkfinity conecta a tatuadores y coleccionistas en un solo lugar. Cada diseño está certificado, cada reserva es transparente y cada artista conserva el valor de su trabajo.",
    about_image_alt: "Personaje de Inkfinity",
    about_points: [
        "Certifica diseños originales como coleccionables digitales",
        "Paga y cobra en cripto con comisiones bajas",
        "Descubre artistas por estilo, ciudad y reputación",
        "Conserva un historial verificable de cada pieza",
    ],

    features_title: "Todo lo que un artista necesita",
    features_description: "Una plataforma para mostrar, vender y agendar trabajos de tatuaje.",
    features_coming_soon: "Próximamente",
    features: [
        FeatureText {
            title: "Pagos en cripto",
            description: "Acepta depósitos y pagos en los tokens que tus clientes ya tienen.",
        },
        FeatureText {
            title: "Oráculo de precios",
            description: "Cotizaciones ligadas al mercado para que los depósitos mantengan su valor.",
        },
        FeatureText {
            title: "NFTs de diseños",
            description: "Acuña flashes y piezas personalizadas como coleccionables con regalías.",
        },
        FeatureText {
            title: "Panel del artista",
            description: "Sigue ventas, clientes y colecciones desde una sola vista.",
        },
        FeatureText {
            title: "Controlador de estudio",
            description: "Conecta Inkfinity con las herramientas que tu estudio ya usa.",
        },
        FeatureText {
            title: "Reservas",
            description: "Permite a tus clientes reservar sesiones con un depósito en la cadena.",
        },
    ],

    community_title: "Únete a la comunidad Inkfinity",
    community_description: "Sé de los primeros artistas y coleccionistas en la plataforma. Los primeros miembros ayudan a decidir qué construimos.",
    community_early_access: "Acceso anticipado",
    community_view_demo: "Ver demo",

    waitlist_title: "Acceso anticipado",
    waitlist_description: "Déjanos tu correo y te avisaremos en cuanto Inkfinity abra sus puertas.",
    waitlist_email_placeholder: "tu@ejemplo.com",
    waitlist_submit: "Unirme a la lista",
    waitlist_submitting: "Uniéndote...",
    waitlist_network_error: "Error de red. Inténtalo de nuevo.",

    footer_tagline: "El hogar del arte del tatuaje en la blockchain.",
    footer_rights: "Todos los derechos reservados.",
    footer_whitepaper: "Whitepaper",
    footer_github: "GitHub",
    footer_discord: "Discord",
    footer_terms: "Términos del servicio",
    footer_privacy: "Política de privacidad",
    footer_x: "X",
    footer_telegram: "Telegram",
    footer_back_to_top: "Volver arriba",

    not_found_title: "Página no encontrada",
    not_found_description: "La página que buscas no existe o se ha movido.",
    not_found_home: "Ir al inicio",
};

/// Locale context for managing locale state
#[derive(Clone, Copy)]
pub struct LocaleContext {
    pub locale: RwSignal<Locale>,
}

impl LocaleContext {
    /// Set the locale and persist to localStorage
    pub fn set_locale(&self, locale: Locale) {
        self.locale.set(locale);
        persist_locale(locale);
    }

    /// Strings of the current locale, tracked
    pub fn strings(&self) -> &'static Strings {
        self.locale.get().strings()
    }
}

#[cfg(not(feature = "ssr"))]
fn persist_locale(locale: Locale) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, locale.code());
        }
    }
}

#[cfg(feature = "ssr")]
fn persist_locale(_locale: Locale) {}

/// Load locale from localStorage, falling back to the browser language
#[cfg(not(feature = "ssr"))]
fn load_persisted_locale() -> Option<Locale> {
    let window = web_sys::window()?;
    if let Ok(Some(storage)) = window.local_storage() {
        if let Ok(Some(value)) = storage.get_item(STORAGE_KEY) {
            return Some(Locale::from_code(&value));
        }
    }
    window.navigator().language().map(|lang| Locale::from_code(&lang))
}

/// Provide locale context to the application
pub fn provide_locale_context() -> LocaleContext {
    // The server always renders English; the stored choice is applied after
    // hydration so both sides start from the same markup.
    let ctx = LocaleContext {
        locale: RwSignal::new(Locale::default()),
    };

    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            if let Some(locale) = load_persisted_locale() {
                ctx.locale.set(locale);
            }
        });

        Effect::new(move |_| {
            let code = ctx.locale.get().code();
            if let Some(html) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.document_element())
            {
                let _ = html.set_attribute("lang", code);
            }
        });
    }

    provide_context(ctx);

    ctx
}

/// Use locale context from anywhere in the component tree
pub fn use_locale_context() -> LocaleContext {
    use_context::<LocaleContext>().expect("LocaleContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_codes_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), locale);
        }
    }

    #[test]
    fn test_from_code_handles_regions_and_unknowns() {
        assert_eq!(Locale::from_code("es-MX"), Locale::Es);
        assert_eq!(Locale::from_code("es_AR"), Locale::Es);
        assert_eq!(Locale::from_code("en-GB"), Locale::En);
        assert_eq!(Locale::from_code("fr"), Locale::En);
        assert_eq!(Locale::from_code(""), Locale::En);
    }

    #[test]
    fn test_native_names() {
        assert_eq!(Locale::En.native_name(), "English");
        assert_eq!(Locale::Es.native_name(), "Español");
    }

    #[test]
    fn test_string_tables_are_filled() {
        for locale in Locale::ALL {
            let strings = locale.strings();
            assert!(!strings.hero_tagline.is_empty());
            assert!(strings.about_points.iter().all(|p| !p.is_empty()));
            assert!(
                strings
                    .features
                    .iter()
                    .all(|f| !f.title.is_empty() && !f.description.is_empty())
            );
        }
    }

    #[test]
    fn test_taglines_split_into_phrases() {
        for locale in Locale::ALL {
            let phrases = crate::ui::pages::landing::split_phrases(locale.strings().hero_tagline);
            assert_eq!(phrases.len(), 3);
        }
    }
}

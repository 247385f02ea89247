pub mod i18n;
pub mod icon;
pub mod layout;
pub mod model_viewer;
pub mod pages;
pub mod preloader;
pub mod waitlist_form;

pub use i18n::{Locale, LocaleContext, provide_locale_context, use_locale_context};
pub use icon::{Icon, icons};
pub use model_viewer::{ModelViewer, ViewerSurface};
pub use preloader::Preloader;

use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

mod i18n;
// Components
use components::Navbar;
use views::{Calendar, Configuration, Holidays, ShiftTypes, Statistics};
// Static web: use wasm local storage backend for configuration detection
#[cfg(target_arch = "wasm32")]
use crate::db::wasm_store as backend;
#[cfg(all(feature = "native-db", not(target_arch = "wasm32")))]
mod backend {
    pub use crate::db::dao::configuration_is_set;
}
#[cfg(all(not(target_arch = "wasm32"), not(feature = "native-db")))]
mod backend {
    pub fn configuration_is_set() -> bool {
        false
    }
}

mod components;
mod db; // universal db facade (native sqlite or wasm storage)
mod schedule;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Calendar {},
        #[route("/shift-types")]
        ShiftTypes {},
        #[route("/holidays")]
        Holidays {},
        #[route("/statistics")]
        Statistics {},
        #[route("/configuration")]
        Configuration {},
}

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    #[cfg(all(feature = "native-db", not(target_arch = "wasm32")))]
    install_panic_hook();
    dioxus::launch(App);
}
#[cfg(all(feature = "native-db", not(target_arch = "wasm32")))]
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        use std::fs::{create_dir_all, OpenOptions};
        use std::io::Write;
        let mut base = dirs_next::cache_dir()
            .or_else(|| dirs_next::data_local_dir())
            .unwrap_or(std::env::temp_dir());
        base.push("shifter");
        let _ = create_dir_all(&base);
        let file = OpenOptions::new().create(true).append(true).open(base.join("panic.log"));
        if let Ok(mut f) = file {
            let _ = writeln!(f, "{} | PANIC: {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"), info);
        }
    }));
}

#[component]
fn App() -> Element {
    // Whether first-run setup has happened; Landpage flips it after saving
    let configured = use_signal(|| backend::configuration_is_set());
    provide_context(configured);
    // Provide i18n context (reads initial language/date from configuration if present)
    i18n::provide_i18n_from_config();

    // Apply theme based on saved configuration (web/native)
    use_effect(move || {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(cfg) = backend::get_configuration() {
                i18n::apply_theme(&cfg.theme);
            } else {
                i18n::apply_theme("System");
            }
        }
        #[cfg(all(feature = "native-db", not(target_arch = "wasm32")))]
        {
            if let Ok(cfg) = crate::db::dao::get_configuration() {
                i18n::apply_theme(&cfg.theme);
            } else {
                i18n::apply_theme("System");
            }
        }
        #[cfg(all(not(target_arch = "wasm32"), not(feature = "native-db")))]
        {
            i18n::apply_theme("System");
        }
    });

    rsx! {
        document::Stylesheet { href: asset!("/assets/tailwind.css") }
        head {
            document::Meta { name: "description", content: "Shifter - paint your shift roster" }
        }
        div { class: "app-layout flex min-h-screen",
            main { class: "main-content flex-1 bg-white dark:bg-slate-900 text-slate-900 dark:text-slate-100",
                Router::<Route> {}
            }
        }
    }
}

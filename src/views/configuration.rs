use dioxus::prelude::*;

use crate::i18n::t;

#[cfg(all(feature = "native-db", not(target_arch = "wasm32")))]
mod backend {
    use crate::db::dao;
    use dioxus_logger::tracing::warn;
    #[derive(Clone)]
    pub struct Configuration {
        pub profile_name: String,
        pub theme: String,
        pub language: String,
        pub date_format: String,
    }
    pub fn get_configuration() -> Option<Configuration> {
        dao::get_configuration().ok().map(|c| Configuration {
            profile_name: c.profile_name,
            theme: c.theme,
            language: c.language,
            date_format: c.date_format,
        })
    }
    pub fn update_configuration(name: &str, theme: &str, language: &str, date_format: &str) {
        if let Err(e) = dao::update_configuration(name, theme, language, date_format) {
            warn!("saving configuration failed: {e}");
        }
    }
    pub fn export_data() -> Option<String> {
        dao::export_data().ok()
    }
    pub fn import_data(json: &str) -> bool {
        dao::import_data(json).is_ok()
    }
    pub fn reset_data() -> bool {
        dao::reset_data().is_ok()
    }
}
#[cfg(target_arch = "wasm32")]
use crate::db::wasm_store as backend;
#[cfg(all(not(target_arch = "wasm32"), not(feature = "native-db")))]
#[allow(dead_code)]
mod backend {
    #[derive(Clone)]
    pub struct Configuration {
        pub profile_name: String,
        pub theme: String,
        pub language: String,
        pub date_format: String,
    }
    pub fn get_configuration() -> Option<Configuration> {
        None
    }
    pub fn update_configuration(_name: &str, _theme: &str, _language: &str, _date_format: &str) {}
    pub fn export_data() -> Option<String> {
        Some("{}".to_string())
    }
    pub fn import_data(_json: &str) -> bool {
        true
    }
    pub fn reset_data() -> bool {
        true
    }
}

// Helper to get export JSON on all targets
#[cfg(target_arch = "wasm32")]
fn get_export_json() -> Option<String> {
    Some(backend::export_data())
}
#[cfg(all(feature = "native-db", not(target_arch = "wasm32")))]
fn get_export_json() -> Option<String> {
    backend::export_data()
}
#[cfg(all(not(target_arch = "wasm32"), not(feature = "native-db")))]
fn get_export_json() -> Option<String> {
    backend::export_data()
}

#[component]
pub fn Configuration() -> Element {
    let mut name = use_signal(String::new);
    let mut theme = use_signal(|| String::from("System"));
    let mut language = use_signal(|| String::from("system"));
    let mut date_format = use_signal(|| String::from("YYYY-MM-DD"));
    let mut saved = use_signal(|| false);
    let mut import_open = use_signal(|| false);
    let mut import_text = use_signal(String::new);
    let mut import_error = use_signal(|| Option::<String>::None);
    let mut confirm_reset = use_signal(|| false);
    // Access global configured flag from App to toggle after a reset
    let mut configured: Signal<bool> = use_context();

    // Load existing configuration on mount (web or native-db builds)
    use_effect(move || {
        #[cfg(any(target_arch = "wasm32", all(feature = "native-db", not(target_arch = "wasm32"))))]
        if let Some(cfg) = backend::get_configuration() {
            name.set(cfg.profile_name);
            theme.set(cfg.theme);
            language.set(cfg.language);
            date_format.set(cfg.date_format);
        }
    });

    let on_save = move |_| {
        let n = name.read().trim().to_string();
        if n.is_empty() {
            return;
        }
        backend::update_configuration(&n, &theme.read(), &language.read(), &date_format.read());
        crate::i18n::set_lang(&language.read());
        crate::i18n::set_date_format(&date_format.read());
        crate::i18n::apply_theme(&theme.read());
        saved.set(true);
    };

    let on_export = move |_| {
        if let Some(_json) = get_export_json() {
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(win) = web_sys::window() {
                    if let Some(doc) = win.document() {
                        if let Ok(a) = doc.create_element("a") {
                            use wasm_bindgen::JsCast;
                            let href = format!(
                                "data:application/json;charset=utf-8,{}",
                                urlencoding::encode(&_json)
                            );
                            a.set_attribute("href", &href).ok();
                            a.set_attribute("download", "shifter_export.json").ok();
                            if let Ok(ae) = a.dyn_into::<web_sys::HtmlElement>() {
                                ae.click();
                            }
                        }
                    }
                }
            }
            #[cfg(all(feature = "native-db", not(target_arch = "wasm32")))]
            {
                let path = std::env::current_dir()
                    .unwrap_or_else(|_| std::path::PathBuf::from("."))
                    .join("shifter_export.json");
                let _ = std::fs::write(path, _json);
            }
        }
    };

    let do_import = move |_| {
        import_error.set(None);
        let raw = import_text.read().clone();
        if raw.trim().is_empty() {
            import_error.set(Some(t("configuration.import_empty")));
            return;
        }
        if backend::import_data(&raw) {
            import_text.set(String::new());
            import_open.set(false);
        } else {
            import_error.set(Some(t("configuration.import_failed")));
        }
    };

    rsx! {
        div { class: "min-h-[70vh] flex items-start justify-center",
            div { class: "w-full max-w-xl mx-auto space-y-5 p-4",
                div {
                    h1 { class: "text-xl sm:text-2xl font-semibold", {t("configuration.title")} }
                    p { class: "text-sm text-slate-500", {t("configuration.subtitle")} }
                }
                div { class: "rounded-xl border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-sm p-5 space-y-4",
                    div { class: "flex flex-col gap-2",
                        label { class: "text-sm font-medium text-slate-700 dark:text-slate-200", {t("configuration.profile_name")} }
                        input { class: "h-10 rounded-md border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-900 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500",
                            value: name.read().clone(),
                            oninput: move |e| name.set(e.value()) }
                    }
                    div { class: "flex flex-col gap-2",
                        label { class: "text-sm font-medium text-slate-700 dark:text-slate-200", {t("configuration.theme")} }
                        select { class: "h-10 rounded-md border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-900 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500",
                            value: theme.read().clone(),
                            oninput: move |e| theme.set(e.value()),
                            option { value: "System", {t("common.system")} }
                            option { value: "Light", {t("common.light")} }
                            option { value: "Dark", {t("common.dark")} }
                        }
                    }
                    div { class: "flex flex-col gap-2",
                        label { class: "text-sm font-medium text-slate-700 dark:text-slate-200", {t("configuration.language")} }
                        select { class: "h-10 rounded-md border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-900 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500",
                            value: language.read().clone(),
                            oninput: move |e| language.set(e.value()),
                            option { value: "system", {t("common.system")} }
                            option { value: "en", "English" }
                            option { value: "es", "Español" }
                        }
                    }
                    div { class: "flex flex-col gap-2",
                        label { class: "text-sm font-medium text-slate-700 dark:text-slate-200", {t("configuration.date_format")} }
                        select { class: "h-10 rounded-md border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-900 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500",
                            value: date_format.read().clone(),
                            oninput: move |e| date_format.set(e.value()),
                            option { value: "YYYY-MM-DD", "YYYY-MM-DD (2025-06-01)" }
                            option { value: "DD/MM/YYYY", "DD/MM/YYYY (01/06/2025)" }
                            option { value: "MM/DD/YYYY", "MM/DD/YYYY (06/01/2025)" }
                            option { value: "DD MMM YYYY", "DD MMM YYYY (01 Jun 2025)" }
                        }
                    }
                    div { class: "flex items-center gap-3",
                        button { class: "inline-flex items-center gap-2 rounded-md bg-blue-600 hover:bg-blue-500 text-white text-sm font-medium px-4 py-2 transition", onclick: on_save, {t("common.save")} }
                        { saved().then(|| rsx!( span { class: "text-sm text-emerald-600", {t("configuration.saved")} } )) }
                    }
                }

                // Data management
                div { class: "rounded-xl border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-sm p-5 space-y-3",
                    h2 { class: "text-sm font-semibold", {t("configuration.data_title")} }
                    div { class: "flex flex-wrap items-center gap-2",
                        button { class: "inline-flex items-center gap-2 h-9 px-3 rounded-md border border-slate-300 dark:border-slate-600 text-sm font-medium hover:bg-slate-100 dark:hover:bg-slate-800 transition", onclick: on_export,
                            span { "📤" } {t("configuration.export")} }
                        button { class: "inline-flex items-center gap-2 h-9 px-3 rounded-md border border-slate-300 dark:border-slate-600 text-sm font-medium hover:bg-slate-100 dark:hover:bg-slate-800 transition",
                            onclick: move |_| {
                                import_error.set(None);
                                import_open.set(true);
                            },
                            span { "📥" } {t("configuration.import")} }
                        button { class: "inline-flex items-center gap-2 h-9 px-3 rounded-md border border-red-300 text-red-700 text-sm font-medium hover:bg-red-50 dark:hover:bg-red-900/30 transition",
                            onclick: move |_| confirm_reset.set(true),
                            span { "🗑️" } {t("configuration.reset")} }
                    }
                    p { class: "text-xs text-slate-400", {t("configuration.data_hint")} }
                }
            }
        }

        { import_open().then(|| rsx!(
            div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4",
                div { class: "w-full max-w-lg rounded-xl border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-lg p-5 space-y-4",
                    h2 { class: "text-lg font-semibold", {t("configuration.import_title")} }
                    p { class: "text-sm text-slate-600 dark:text-slate-300", {t("configuration.import_help")} }
                    { import_error.read().as_ref().map(|err| rsx!( p { class: "text-red-600 text-sm", {err.clone()} } )) }
                    textarea { class: "rounded-md border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-900 px-3 py-2 text-xs font-mono focus:outline-none focus:ring-2 focus:ring-blue-500 w-full h-40",
                        value: import_text.read().clone(),
                        oninput: move |e| import_text.set(e.value()),
                    }
                    div { class: "flex items-center justify-end gap-2",
                        button { class: "inline-flex items-center h-9 px-3 rounded-md border border-slate-300 dark:border-slate-600 text-slate-700 dark:text-slate-200 hover:bg-slate-100 dark:hover:bg-slate-800 text-sm font-medium transition",
                            onclick: move |_| import_open.set(false), {t("common.cancel")} }
                        button { class: "inline-flex items-center h-9 px-3 rounded-md bg-blue-600 hover:bg-blue-500 text-white text-sm font-medium transition",
                            onclick: do_import, {t("configuration.import")} }
                    }
                }
            }
        )) }

        // Confirm modal for the destructive reset
        { confirm_reset().then(|| rsx!(
            div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4",
                div { class: "w-full max-w-md rounded-xl border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-lg p-5 space-y-4",
                    h2 { class: "text-lg font-semibold", {t("configuration.reset_title")} }
                    p { class: "text-sm text-slate-600 dark:text-slate-300", {t("configuration.reset_warning")} }
                    div { class: "flex items-center justify-end gap-2",
                        button { class: "inline-flex items-center h-9 px-3 rounded-md border border-slate-300 dark:border-slate-600 text-slate-700 dark:text-slate-200 hover:bg-slate-100 dark:hover:bg-slate-800 text-sm font-medium transition",
                            onclick: move |_| confirm_reset.set(false), {t("common.cancel")} }
                        button { class: "inline-flex items-center h-9 px-3 rounded-md bg-red-600 hover:bg-red-500 text-white text-sm font-medium transition",
                            onclick: move |_| {
                                if backend::reset_data() {
                                    configured.set(false);
                                }
                                confirm_reset.set(false);
                            },
                            {t("configuration.reset")}
                        }
                    }
                }
            }
        )) }
    }
}

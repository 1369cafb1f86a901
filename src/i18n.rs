use dioxus::prelude::*;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Clone, Debug, Deserialize)]
struct Bundle(HashMap<String, String>);

static EN_JSON: &str = include_str!("../assets/i18n/en.json");
static ES_JSON: &str = include_str!("../assets/i18n/es.json");

static BUNDLES: Lazy<HashMap<&'static str, Bundle>> = Lazy::new(|| {
    let mut m = HashMap::new();
    let parse = |s: &str| serde_json::from_str::<Bundle>(s).unwrap_or(Bundle(HashMap::new()));
    m.insert("en", parse(EN_JSON));
    m.insert("es", parse(ES_JSON));
    m
});

#[derive(Clone)]
pub struct I18nState {
    pub lang: String,        // "en" | "es" | "system"
    pub date_format: String, // e.g., "YYYY-MM-DD" | "DD/MM/YYYY" | "MM/DD/YYYY" | "DD MMM YYYY"
}

impl Default for I18nState {
    fn default() -> Self {
        Self { lang: detect_system_lang(), date_format: "YYYY-MM-DD".into() }
    }
}

#[cfg(target_arch = "wasm32")]
fn detect_system_lang() -> String {
    web_sys::window()
        .and_then(|w| w.navigator().language())
        .unwrap_or_else(|| "en".into())
        .split('-')
        .next()
        .unwrap_or("en")
        .to_lowercase()
}
#[cfg(not(target_arch = "wasm32"))]
fn detect_system_lang() -> String {
    std::env::var("LANG")
        .unwrap_or_else(|_| "en".into())
        .split('.').next().unwrap_or("en")
        .split('_').next().unwrap_or("en")
        .to_lowercase()
}

pub fn provide_i18n_from_config() {
    let initial = initial_state_from_config();
    let sig: Signal<I18nState> = use_signal(|| initial);
    provide_context(sig);
}

pub fn use_i18n() -> Signal<I18nState> {
    use_context::<Signal<I18nState>>()
}

pub fn t(key: &str) -> String {
    let st = use_i18n().read().clone();
    let lang = if st.lang == "system" { detect_system_lang() } else { st.lang.clone() };
    let bundles = &*BUNDLES;
    bundles
        .get(lang.as_str())
        .and_then(|b| b.0.get(key).cloned())
        .or_else(|| bundles.get("en").and_then(|b| b.0.get(key).cloned()))
        .unwrap_or_else(|| key.to_string())
}

pub fn set_lang(new_lang: &str) {
    let mut sig = use_i18n();
    let mut guard = sig.write();
    guard.lang = match new_lang { "system" | "es" | "en" => new_lang.to_string(), _ => "en".into() };
}

pub fn set_date_format(fmt: &str) {
    let mut sig = use_i18n();
    let mut guard = sig.write();
    guard.date_format = fmt.to_string();
}

// ===== Weekday helpers (centralized, Monday-first) =====
// Short names for the calendar header, Monday..Sunday.
pub fn weekdays_short_for_locale() -> Vec<String> {
    vec![
        t("weekdays.short.1"),
        t("weekdays.short.2"),
        t("weekdays.short.3"),
        t("weekdays.short.4"),
        t("weekdays.short.5"),
        t("weekdays.short.6"),
        t("weekdays.short.7"),
    ]
}

// Localized full weekday name for a date.
pub fn weekday_name_for_date(date: chrono::NaiveDate) -> String {
    use chrono::Datelike;
    let idx = date.weekday().number_from_monday(); // 1=Mon..7=Sun
    t(&format!("weekdays.long.{}", idx))
}

// Format a YYYY-MM-DD string according to configured format and locale
pub fn format_date_ymd(ymd: &str) -> String {
    let st = use_i18n().read().clone();
    let parts: Vec<&str> = ymd.split('-').collect();
    if parts.len() != 3 {
        return ymd.to_string();
    }
    let (y, m, d) = (parts[0], parts[1], parts[2]);
    let (yi, mi, di) = (
        y.parse::<i32>().unwrap_or(1970),
        m.parse::<u32>().unwrap_or(1),
        d.parse::<u32>().unwrap_or(1),
    );
    match st.date_format.as_str() {
        "YYYY-MM-DD" => format!("{:04}-{:02}-{:02}", yi, mi, di),
        "DD/MM/YYYY" => format!("{:02}/{:02}/{:04}", di, mi, yi),
        "MM/DD/YYYY" => format!("{:02}/{:02}/{:04}", mi, di, yi),
        "DD MMM YYYY" => format!("{:02} {} {:04}", di, month_name(mi, true), yi),
        _ => format!("{:04}-{:02}-{:02}", yi, mi, di),
    }
}

pub fn month_name(month: u32, short: bool) -> String {
    let key = if short { format!("months.short.{}", month) } else { format!("months.long.{}", month) };
    t(&key)
}

// === Theme application ===
#[cfg(target_arch = "wasm32")]
pub fn apply_theme(theme: &str) {
    use web_sys::window;
    if let Some(doc) = window().and_then(|w| w.document()) {
        if let Some(el) = doc.document_element() {
            // Read current class attribute, remove any existing 'dark', then conditionally add it
            let current = el.get_attribute("class").unwrap_or_default();
            let mut parts: Vec<&str> = current.split_whitespace().filter(|c| *c != "dark").collect();
            if theme.eq_ignore_ascii_case("dark") {
                parts.push("dark");
            }
            let new_cls = parts.join(" ");
            let _ = el.set_attribute("class", &new_cls);
        }
    }
}
#[cfg(not(target_arch = "wasm32"))]
pub fn apply_theme(_theme: &str) { /* no-op on native for now */ }

#[cfg(target_arch = "wasm32")]
fn get_cfg() -> Option<(String, String)> {
    use crate::db::wasm_store as backend;
    backend::get_configuration().map(|c| (c.language, c.date_format))
}
#[cfg(all(feature = "native-db", not(target_arch = "wasm32")))]
fn get_cfg() -> Option<(String, String)> {
    use crate::db::dao;
    if let Ok(c) = dao::get_configuration() { Some((c.language, c.date_format)) } else { None }
}
#[cfg(all(not(target_arch = "wasm32"), not(feature = "native-db")))]
fn get_cfg() -> Option<(String, String)> {
    None
}

fn initial_state_from_config() -> I18nState {
    if let Some((lang, fmt)) = get_cfg() { I18nState { lang, date_format: fmt } } else { I18nState::default() }
}

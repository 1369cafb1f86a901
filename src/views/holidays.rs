use dioxus::prelude::*;
use serde::Deserialize;
use thiserror::Error;

use crate::i18n::{format_date_ymd, t};
use crate::schedule::grid::parse_date_key;
use crate::schedule::Holiday;

// Backends
#[cfg(all(feature = "native-db", not(target_arch = "wasm32")))]
mod backend {
    use crate::db::dao;
    use crate::schedule::{Holiday, HolidayMap};
    use dioxus_logger::tracing::{info, warn};
    pub fn list_holidays() -> HolidayMap {
        dao::list_holidays().unwrap_or_else(|e| {
            warn!("loading holidays failed: {e}");
            HolidayMap::new()
        })
    }
    pub fn upsert_holiday(h: &Holiday) {
        if let Err(e) = dao::upsert_holiday(h) {
            warn!("saving holiday {} failed: {e}", h.date);
        }
    }
    pub fn upsert_holidays(hs: &[Holiday]) -> usize {
        match dao::upsert_holidays(hs) {
            Ok(n) => {
                info!("imported {n} holidays");
                n
            }
            Err(e) => {
                warn!("holiday import failed: {e}");
                0
            }
        }
    }
    pub fn delete_holiday(date: &str) {
        if let Err(e) = dao::delete_holiday(date) {
            warn!("deleting holiday {date} failed: {e}");
        }
    }
}
#[cfg(target_arch = "wasm32")]
mod backend {
    use crate::db::wasm_store as store;
    use crate::schedule::{Holiday, HolidayMap};
    pub fn list_holidays() -> HolidayMap {
        store::list_holidays()
    }
    pub fn upsert_holiday(h: &Holiday) {
        store::upsert_holiday(h);
    }
    pub fn upsert_holidays(hs: &[Holiday]) -> usize {
        store::upsert_holidays(hs)
    }
    pub fn delete_holiday(date: &str) {
        store::delete_holiday(date);
    }
}
#[cfg(all(not(target_arch = "wasm32"), not(feature = "native-db")))]
mod backend {
    use crate::schedule::{Holiday, HolidayMap};
    pub fn list_holidays() -> HolidayMap {
        HolidayMap::new()
    }
    pub fn upsert_holiday(_h: &Holiday) {}
    pub fn upsert_holidays(_hs: &[Holiday]) -> usize {
        0
    }
    pub fn delete_holiday(_date: &str) {}
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no usable holiday entries found")]
    Empty,
}

/// One entry of a public-holiday feed. The `localName` field wins over the
/// plain English `name` when both are present.
#[derive(Debug, Deserialize)]
struct FeedEntry {
    date: String,
    #[serde(rename = "localName")]
    local_name: Option<String>,
    name: Option<String>,
}

/// Parses a pasted public-holiday feed (date.nager.at shape) into records.
/// Entries with malformed dates are skipped; duplicate dates collapse later
/// at the store's upsert, so re-importing the same feed never duplicates.
pub fn parse_holiday_feed(raw: &str, country_code: &str) -> Result<Vec<Holiday>, FeedError> {
    let entries: Vec<FeedEntry> = serde_json::from_str(raw)?;
    let holidays: Vec<Holiday> = entries
        .into_iter()
        .filter(|e| parse_date_key(&e.date).is_some())
        .map(|e| Holiday {
            date: e.date,
            name: e.local_name.or(e.name).unwrap_or_default(),
            country_code: country_code.trim().to_uppercase(),
        })
        .collect();
    if holidays.is_empty() {
        return Err(FeedError::Empty);
    }
    Ok(holidays)
}

#[cfg(not(target_arch = "wasm32"))]
fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().date_naive().year()
}
#[cfg(target_arch = "wasm32")]
fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

#[derive(PartialEq, Clone, Default)]
struct HolidayForm {
    date: String,
    name: String,
    country_code: String,
}

#[component]
pub fn Holidays() -> Element {
    let mut list = use_signal(Vec::<Holiday>::new);
    let mut shown_year = use_signal(current_year);
    let mut form = use_signal(HolidayForm::default);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut import_open = use_signal(|| false);
    let mut import_text = use_signal(String::new);
    let mut import_country = use_signal(|| "ES".to_string());
    let mut import_status = use_signal(|| Option::<Result<usize, String>>::None);

    let mut refresh = move || {
        let mut items: Vec<Holiday> = backend::list_holidays().into_values().collect();
        items.sort_by(|a, b| a.date.cmp(&b.date));
        list.set(items);
    };

    use_effect(move || refresh());

    let on_add = move |_| {
        form_error.set(None);
        let f = form.read().clone();
        if parse_date_key(&f.date).is_none() {
            form_error.set(Some(t("holidays.error_date_invalid")));
            return;
        }
        if f.name.trim().is_empty() {
            form_error.set(Some(t("holidays.error_name_required")));
            return;
        }
        backend::upsert_holiday(&Holiday {
            date: f.date.clone(),
            name: f.name.trim().to_string(),
            country_code: f.country_code.trim().to_uppercase(),
        });
        form.set(HolidayForm::default());
        refresh();
    };

    let do_import = move |_| {
        import_status.set(None);
        let parsed = parse_holiday_feed(&import_text.read(), &import_country.read());
        match parsed {
            Ok(holidays) => {
                let n = backend::upsert_holidays(&holidays);
                import_status.set(Some(Ok(n)));
                import_text.set(String::new());
                refresh();
            }
            Err(e) => import_status.set(Some(Err(e.to_string()))),
        }
    };

    let year_prefix = format!("{:04}-", shown_year());
    let visible: Vec<Holiday> = list
        .read()
        .iter()
        .filter(|h| h.date.starts_with(&year_prefix))
        .cloned()
        .collect();

    rsx! {
        div { class: "min-h-[70vh] flex items-start justify-center",
            div { class: "w-full max-w-2xl mx-auto space-y-5 p-4",
                div { class: "flex items-center justify-between",
                    div {
                        h1 { class: "text-xl sm:text-2xl font-semibold", {t("holidays.title")} }
                        p { class: "text-sm text-slate-500", {t("holidays.subtitle")} }
                    }
                    button { class: "inline-flex items-center gap-2 h-9 px-3 rounded-md bg-blue-600 hover:bg-blue-500 text-white text-sm font-medium transition",
                        onclick: move |_| {
                            import_status.set(None);
                            import_open.set(true);
                        },
                        span { "📥" } span { class: "hidden sm:inline", {t("holidays.import")} }
                    }
                }

                // Manual entry
                div { class: "rounded-xl border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-sm p-4 sm:p-5 space-y-3",
                    h2 { class: "text-sm font-semibold", {t("holidays.add_title")} }
                    { form_error.read().as_ref().map(|err| rsx!( p { class: "text-red-600 text-sm", {err.clone()} } )) }
                    div { class: "grid grid-cols-1 sm:grid-cols-3 gap-3",
                        input { r#type: "date", class: "h-10 rounded-md border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-900 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500",
                            value: form.read().date.clone(),
                            oninput: move |e| form.write().date = e.value() }
                        input { class: "h-10 rounded-md border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-900 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500",
                            placeholder: t("holidays.name_placeholder"),
                            value: form.read().name.clone(),
                            oninput: move |e| form.write().name = e.value() }
                        div { class: "flex gap-2",
                            input { class: "h-10 w-20 rounded-md border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-900 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500",
                                maxlength: "2",
                                placeholder: "ES",
                                value: form.read().country_code.clone(),
                                oninput: move |e| form.write().country_code = e.value().to_uppercase() }
                            button { class: "flex-1 h-10 rounded-md bg-blue-600 hover:bg-blue-500 text-white text-sm font-medium transition", onclick: on_add, {t("common.create")} }
                        }
                    }
                }

                // Year list
                div { class: "rounded-xl border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-sm p-4 sm:p-5 space-y-3",
                    div { class: "flex items-center justify-between",
                        h2 { class: "text-sm font-semibold", {format!("{} {}", t("holidays.list_title"), shown_year())} }
                        div { class: "flex items-center gap-1",
                            button { class: "h-8 w-8 rounded-md border border-slate-300 dark:border-slate-600 hover:bg-slate-100 dark:hover:bg-slate-700",
                                onclick: move |_| shown_year.set(shown_year() - 1), "←" }
                            button { class: "h-8 w-8 rounded-md border border-slate-300 dark:border-slate-600 hover:bg-slate-100 dark:hover:bg-slate-700",
                                onclick: move |_| shown_year.set(shown_year() + 1), "→" }
                        }
                    }
                    {
                        if visible.is_empty() {
                            rsx!( div { class: "text-sm text-slate-600 dark:text-slate-300 py-4 text-center", {t("holidays.empty")} } )
                        } else {
                            rsx!(
                                ul { class: "divide-y divide-slate-200 dark:divide-slate-700",
                                    for h in visible.into_iter() {
                                        {
                                            let delete_date = h.date.clone();
                                            rsx! {
                                                li { class: "py-2.5 flex items-center justify-between gap-3",
                                                    div { class: "min-w-0",
                                                        div { class: "font-medium text-slate-800 dark:text-slate-100", {h.name.clone()} }
                                                        div { class: "text-xs text-slate-500",
                                                            { if h.country_code.is_empty() {
                                                                format_date_ymd(&h.date)
                                                            } else {
                                                                format!("{} · {}", format_date_ymd(&h.date), h.country_code)
                                                            } }
                                                        }
                                                    }
                                                    button { class: "w-8 h-8 rounded-full flex items-center justify-center text-slate-400 hover:text-red-600 hover:bg-red-50 dark:hover:bg-red-900/30 transition",
                                                        title: t("common.delete"),
                                                        onclick: move |_| {
                                                            backend::delete_holiday(&delete_date);
                                                            refresh();
                                                        },
                                                        "🗑️"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            )
                        }
                    }
                }
            }
        }

        // Import modal: paste a public-holiday feed, merge by date
        { import_open().then(|| rsx!(
            div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4",
                div { class: "w-full max-w-lg rounded-xl border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-lg p-5 space-y-4",
                    h2 { class: "text-lg font-semibold", {t("holidays.import_title")} }
                    p { class: "text-sm text-slate-600 dark:text-slate-300", {t("holidays.import_help")} }
                    { import_status.read().as_ref().map(|status| match status {
                        Ok(n) => rsx!( p { class: "text-emerald-600 text-sm", {format!("{} {}", t("holidays.import_done"), n)} } ),
                        Err(msg) => rsx!( p { class: "text-red-600 text-sm", {msg.clone()} } ),
                    }) }
                    div { class: "flex items-center gap-2",
                        label { class: "text-sm font-medium text-slate-700 dark:text-slate-200", {t("holidays.country")} }
                        input { class: "h-10 w-20 rounded-md border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-900 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500",
                            maxlength: "2",
                            value: import_country.read().clone(),
                            oninput: move |e| import_country.set(e.value().to_uppercase()) }
                    }
                    textarea { class: "rounded-md border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-900 px-3 py-2 text-xs font-mono focus:outline-none focus:ring-2 focus:ring-blue-500 w-full h-40",
                        placeholder: "[{{\"date\": \"2025-01-01\", \"localName\": \"Año Nuevo\"}}]",
                        value: import_text.read().clone(),
                        oninput: move |e| import_text.set(e.value()),
                    }
                    div { class: "flex items-center justify-end gap-2",
                        button { class: "inline-flex items-center h-9 px-3 rounded-md border border-slate-300 dark:border-slate-600 text-slate-700 dark:text-slate-200 hover:bg-slate-100 dark:hover:bg-slate-800 text-sm font-medium transition",
                            onclick: move |_| import_open.set(false), {t("common.close")} }
                        button { class: "inline-flex items-center h-9 px-3 rounded-md bg-blue-600 hover:bg-blue-500 text-white text-sm font-medium transition",
                            onclick: do_import, {t("holidays.import")} }
                    }
                }
            }
        )) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_nager_style_feed() {
        let raw = r#"[
            {"date": "2025-01-01", "localName": "Año Nuevo", "name": "New Year's Day"},
            {"date": "2025-12-25", "name": "Christmas Day"}
        ]"#;
        let holidays = parse_holiday_feed(raw, "es").unwrap();
        assert_eq!(holidays.len(), 2);
        assert_eq!(holidays[0].name, "Año Nuevo");
        assert_eq!(holidays[1].name, "Christmas Day");
        assert!(holidays.iter().all(|h| h.country_code == "ES"));
    }

    #[test]
    fn skips_entries_with_malformed_dates() {
        let raw = r#"[
            {"date": "2025-01-01", "name": "New Year"},
            {"date": "2025-02-30", "name": "Impossible"},
            {"date": "soon", "name": "Vague"}
        ]"#;
        let holidays = parse_holiday_feed(raw, "ES").unwrap();
        assert_eq!(holidays.len(), 1);
        assert_eq!(holidays[0].date, "2025-01-01");
    }

    #[test]
    fn rejects_garbage_and_empty_feeds() {
        assert!(matches!(parse_holiday_feed("not json", "ES"), Err(FeedError::Json(_))));
        assert!(matches!(parse_holiday_feed("[]", "ES"), Err(FeedError::Empty)));
        let all_bad = r#"[{"date": "nope", "name": "x"}]"#;
        assert!(matches!(parse_holiday_feed(all_bad, "ES"), Err(FeedError::Empty)));
    }
}

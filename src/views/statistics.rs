use dioxus::prelude::*;

use crate::i18n::{month_name, t};
use crate::schedule::grid::month_days;
use crate::schedule::stats::{
    aggregate, aggregate_year, MONTH_REFERENCE_HOURS, YEAR_REFERENCE_HOURS,
};
use crate::schedule::{AssignmentMap, HolidayMap, ShiftType};

// Backends
#[cfg(all(feature = "native-db", not(target_arch = "wasm32")))]
mod backend {
    use crate::db::dao;
    use crate::schedule::{AssignmentMap, HolidayMap, ShiftType};
    use dioxus_logger::tracing::warn;
    pub fn list_shift_types() -> Vec<ShiftType> {
        dao::list_shift_types().unwrap_or_else(|e| {
            warn!("loading shift types failed: {e}");
            Vec::new()
        })
    }
    pub fn get_assignments() -> AssignmentMap {
        dao::get_assignments().unwrap_or_else(|e| {
            warn!("loading assignments failed: {e}");
            AssignmentMap::new()
        })
    }
    pub fn list_holidays() -> HolidayMap {
        dao::list_holidays().unwrap_or_else(|e| {
            warn!("loading holidays failed: {e}");
            HolidayMap::new()
        })
    }
}
#[cfg(target_arch = "wasm32")]
mod backend {
    use crate::db::wasm_store as store;
    use crate::schedule::{AssignmentMap, HolidayMap, ShiftType};
    pub fn list_shift_types() -> Vec<ShiftType> {
        store::list_shift_types()
    }
    pub fn get_assignments() -> AssignmentMap {
        store::get_assignments()
    }
    pub fn list_holidays() -> HolidayMap {
        store::list_holidays()
    }
}
#[cfg(all(not(target_arch = "wasm32"), not(feature = "native-db")))]
mod backend {
    use crate::schedule::{AssignmentMap, HolidayMap, ShiftType};
    pub fn list_shift_types() -> Vec<ShiftType> {
        Vec::new()
    }
    pub fn get_assignments() -> AssignmentMap {
        AssignmentMap::new()
    }
    pub fn list_holidays() -> HolidayMap {
        HolidayMap::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn now_year_month() -> (i32, u32) {
    use chrono::Datelike;
    let now = chrono::Local::now().date_naive();
    (now.year(), now.month())
}
#[cfg(target_arch = "wasm32")]
fn now_year_month() -> (i32, u32) {
    let d = js_sys::Date::new_0();
    (d.get_full_year() as i32, d.get_month() + 1)
}

#[component]
pub fn Statistics() -> Element {
    let (yy, mm) = now_year_month();
    let mut year = use_signal(move || yy);
    let mut month = use_signal(move || mm);
    let mut view = use_signal(|| "month".to_string()); // or "year"
    let mut shift_types = use_signal(Vec::<ShiftType>::new);
    let mut assignments = use_signal(AssignmentMap::new);
    let mut holidays = use_signal(HolidayMap::new);

    use_effect(move || {
        shift_types.set(backend::list_shift_types());
        assignments.set(backend::get_assignments());
        holidays.set(backend::list_holidays());
    });

    let mut go_month = move |delta: i32| {
        let mut yy = year();
        let mut mm = month() as i32 + delta;
        if mm < 1 {
            mm = 12;
            yy -= 1;
        } else if mm > 12 {
            mm = 1;
            yy += 1;
        }
        year.set(yy);
        month.set(mm as u32);
    };

    let types = shift_types.read().clone();
    let period_title;
    let stats;
    let reference_hours;
    let mut month_rows = Vec::new();
    if view() == "year" {
        let year_stats = aggregate_year(year(), &assignments.read(), &types, &holidays.read());
        month_rows = year_stats
            .months
            .iter()
            .enumerate()
            .map(|(i, m)| (month_name(i as u32 + 1, true), m.total_hours, m.assigned_days()))
            .collect();
        stats = year_stats.total;
        period_title = year().to_string();
        reference_hours = YEAR_REFERENCE_HOURS;
    } else {
        let days = month_days(year(), month());
        stats = aggregate(&days, &assignments.read(), &types, &holidays.read());
        period_title = format!("{} {}", month_name(month(), false), year());
        reference_hours = MONTH_REFERENCE_HOURS;
    }
    let shifts_done: u32 = stats.by_shift.values().map(|b| b.count).sum();

    rsx! {
        div { class: "min-h-[70vh] flex items-start justify-center",
            div { class: "w-full max-w-2xl mx-auto space-y-5 p-4",
                // Header with period navigation and view toggle
                div { class: "flex items-center justify-between gap-2",
                    div {
                        h1 { class: "text-xl sm:text-2xl font-semibold", {t("stats.title")} }
                        p { class: "text-sm text-slate-500", {format!("{} {}", t("stats.subtitle"), period_title)} }
                    }
                    div { class: "flex items-center gap-2",
                        div { class: "flex rounded-md border border-slate-300 dark:border-slate-600 overflow-hidden",
                            button { class: if view() == "month" { "h-9 px-3 text-sm font-medium bg-blue-600 text-white" } else { "h-9 px-3 text-sm font-medium hover:bg-slate-100 dark:hover:bg-slate-700" },
                                onclick: move |_| view.set("month".to_string()), {t("stats.month")} }
                            button { class: if view() == "year" { "h-9 px-3 text-sm font-medium bg-blue-600 text-white" } else { "h-9 px-3 text-sm font-medium hover:bg-slate-100 dark:hover:bg-slate-700" },
                                onclick: move |_| view.set("year".to_string()), {t("stats.year")} }
                        }
                        div { class: "flex items-center gap-1",
                            button { class: "h-9 w-9 rounded-md border border-slate-300 dark:border-slate-600 hover:bg-slate-100 dark:hover:bg-slate-700",
                                onclick: move |_| {
                                    if view() == "year" { year.set(year() - 1); } else { go_month(-1); }
                                }, "←" }
                            button { class: "h-9 w-9 rounded-md border border-slate-300 dark:border-slate-600 hover:bg-slate-100 dark:hover:bg-slate-700",
                                onclick: move |_| {
                                    if view() == "year" { year.set(year() + 1); } else { go_month(1); }
                                }, "→" }
                        }
                    }
                }

                // Headline cards
                div { class: "grid gap-3 grid-cols-2 md:grid-cols-4",
                    div { class: "h-20 rounded-lg border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-sm p-3 flex flex-col justify-center",
                        span { class: "text-xs text-slate-500", {t("stats.total_hours")} }
                        span { class: "text-xl font-semibold text-blue-600", {format!("{:.1} h", stats.total_hours)} }
                    }
                    div { class: "h-20 rounded-lg border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-sm p-3 flex flex-col justify-center",
                        span { class: "text-xs text-slate-500", {t("stats.shifts_done")} }
                        span { class: "text-xl font-semibold", {shifts_done.to_string()} }
                    }
                    div { class: "h-20 rounded-lg border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-sm p-3 flex flex-col justify-center",
                        span { class: "text-xs text-slate-500", {t("stats.presence")} }
                        span { class: "text-xl font-semibold", {format!("{:.0}%", stats.presence_percent())} }
                    }
                    div { class: "h-20 rounded-lg border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-sm p-3 flex flex-col justify-center",
                        span { class: "text-xs text-slate-500", {format!("{} ({:.0} h)", t("stats.load"), reference_hours)} }
                        span { class: "text-xl font-semibold", {format!("{:.0}%", stats.load_percent(reference_hours))} }
                    }
                }

                // Normal vs special split
                div { class: "grid gap-3 grid-cols-1 md:grid-cols-2",
                    div { class: "rounded-lg border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-sm p-4",
                        h2 { class: "text-xs text-slate-500 pb-2 uppercase tracking-wider", {t("stats.normal_days")} }
                        div { class: "flex items-end justify-between",
                            span { class: "text-3xl font-bold", {stats.normal_days.to_string()} }
                            span { class: "text-sm text-slate-500", {format!("{:.1} h", stats.normal_hours)} }
                        }
                    }
                    div { class: "rounded-lg border border-rose-200 dark:border-rose-900/50 bg-rose-50 dark:bg-rose-900/20 shadow-sm p-4",
                        h2 { class: "text-xs text-rose-400 pb-2 uppercase tracking-wider", {t("stats.special_days")} }
                        div { class: "flex items-end justify-between",
                            span { class: "text-3xl font-bold text-rose-600", {stats.special_days.to_string()} }
                            span { class: "text-sm text-rose-500", {format!("{:.1} h", stats.special_hours)} }
                        }
                        p { class: "text-xs text-rose-400 mt-1", {t("stats.special_hint")} }
                    }
                }

                // Per-shift distribution
                div { class: "rounded-lg border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-sm p-4 space-y-4",
                    h2 { class: "text-xs text-slate-500 uppercase tracking-wider", {t("stats.distribution")} }
                    {
                        if shifts_done == 0 {
                            rsx!( p { class: "text-sm text-slate-500 py-4 text-center", {t("stats.no_data")} } )
                        } else {
                            rsx!(
                                for s in types.iter() {
                                    {
                                        let bucket = stats.by_shift.get(&s.id).cloned().unwrap_or_default();
                                        let percent = if shifts_done > 0 {
                                            bucket.count as f64 / shifts_done as f64 * 100.0
                                        } else {
                                            0.0
                                        };
                                        (bucket.count > 0).then(|| rsx! {
                                            div {
                                                div { class: "flex justify-between items-end mb-1",
                                                    div { class: "flex items-center gap-2",
                                                        div { class: "w-7 h-7 rounded-md flex items-center justify-center text-[10px] font-bold text-white shadow-sm",
                                                            style: "background-color: {s.color}",
                                                            {s.code.clone()}
                                                        }
                                                        span { class: "text-sm font-medium", {s.name.clone()} }
                                                    }
                                                    span { class: "text-xs text-slate-500",
                                                        {format!("{} {} · {:.1} h ({:.0}%)", bucket.count, t("stats.days_unit"), bucket.hours, percent)}
                                                    }
                                                }
                                                div { class: "w-full h-2.5 bg-slate-100 dark:bg-slate-700 rounded-full overflow-hidden",
                                                    div { class: "h-full rounded-full",
                                                        style: "width: {percent}%; background-color: {s.color}" }
                                                }
                                            }
                                        })
                                    }
                                }
                            )
                        }
                    }
                }

                // Year breakdown table
                { (view() == "year").then(|| rsx!(
                    div { class: "rounded-lg border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-sm p-4",
                        h2 { class: "text-xs text-slate-500 uppercase tracking-wider pb-3", {t("stats.by_month")} }
                        ul { class: "divide-y divide-slate-100 dark:divide-slate-700",
                            for (name, hours, days) in month_rows.iter() {
                                {
                                    let width = (hours / MONTH_REFERENCE_HOURS * 100.0).min(100.0);
                                    rsx! {
                                        li { class: "py-2 flex items-center justify-between text-sm",
                                            span { class: "w-12 font-medium", {name.clone()} }
                                            div { class: "flex-1 mx-3 h-2 bg-slate-100 dark:bg-slate-700 rounded-full overflow-hidden",
                                                div { class: "h-full rounded-full bg-blue-500", style: "width: {width}%" }
                                            }
                                            span { class: "text-slate-500 w-28 text-right", {format!("{:.1} h · {} {}", hours, days, t("stats.days_unit"))} }
                                        }
                                    }
                                }
                            }
                        }
                    }
                )) }
            }
        }
    }
}

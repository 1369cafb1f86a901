use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::components::{MonthPicker, ShiftPalette};
use crate::i18n::{format_date_ymd, month_name, t, weekday_name_for_date, weekdays_short_for_locale};
use crate::schedule::grid::{date_key, is_same_day, leading_padding, month_days, parse_date_key};
use crate::schedule::paint::{apply_paint, resolve_shift, Tool};
use crate::schedule::{AssignmentMap, DayAssignment, HolidayMap, ShiftType};

// Backends
#[cfg(all(feature = "native-db", not(target_arch = "wasm32")))]
mod backend {
    use crate::db::dao;
    use crate::schedule::{AssignmentMap, DayAssignment, HolidayMap, ShiftType};
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
    pub fn upsert_assignment(a: &DayAssignment) {
        if let Err(e) = dao::upsert_assignment(a) {
            warn!("saving assignment for {} failed: {e}", a.date);
        }
    }
}
#[cfg(target_arch = "wasm32")]
mod backend {
    use crate::db::wasm_store as store;
    use crate::schedule::{AssignmentMap, DayAssignment, HolidayMap, ShiftType};
    pub fn list_shift_types() -> Vec<ShiftType> {
        store::list_shift_types()
    }
    pub fn get_assignments() -> AssignmentMap {
        store::get_assignments()
    }
    pub fn list_holidays() -> HolidayMap {
        store::list_holidays()
    }
    pub fn upsert_assignment(a: &DayAssignment) {
        store::upsert_assignment(a);
    }
}
#[cfg(all(not(target_arch = "wasm32"), not(feature = "native-db")))]
mod backend {
    use crate::schedule::{AssignmentMap, DayAssignment, HolidayMap, ShiftType};
    pub fn list_shift_types() -> Vec<ShiftType> {
        Vec::new()
    }
    pub fn get_assignments() -> AssignmentMap {
        AssignmentMap::new()
    }
    pub fn list_holidays() -> HolidayMap {
        HolidayMap::new()
    }
    pub fn upsert_assignment(_a: &DayAssignment) {}
}

// Cross-target helpers for the local calendar date
#[cfg(not(target_arch = "wasm32"))]
fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
#[cfg(target_arch = "wasm32")]
fn today() -> NaiveDate {
    let d = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(d.get_full_year() as i32, d.get_month() + 1, d.get_date())
        .unwrap_or_default()
}

fn now_year_month() -> (i32, u32) {
    use chrono::Datelike;
    let now = today();
    (now.year(), now.month())
}

// Optimistic local update first, then write-through to the store.
fn paint_and_store(date: NaiveDate, tool: Signal<Tool>, mut assignments: Signal<AssignmentMap>) {
    let current = tool.read().clone();
    let changed = {
        let mut map = assignments.write();
        apply_paint(date, &current, &mut map)
    };
    if changed {
        if let Some(a) = assignments.read().get(&date_key(date)).cloned() {
            backend::upsert_assignment(&a);
        }
    }
}

#[component]
pub fn Calendar() -> Element {
    // Use global configured signal provided by App
    let configured: Signal<bool> = use_context();
    if !configured() {
        return rsx! { super::landpage::Landpage {} };
    }

    let (yy, mm) = now_year_month();
    let year = use_signal(move || yy);
    let month = use_signal(move || mm);
    let mut shift_types = use_signal(Vec::<ShiftType>::new);
    let mut assignments = use_signal(AssignmentMap::new);
    let mut holidays = use_signal(HolidayMap::new);
    let mut tool = use_signal(|| Tool::Browse);
    let mut painting = use_signal(|| false);
    let mut picker_open = use_signal(|| false);
    let mut editing_day = use_signal(|| Option::<String>::None);
    let mut note_draft = use_signal(String::new);

    use_effect(move || {
        let types = backend::list_shift_types();
        // A fresh brush: start with the first shift selected, as the palette does
        if let Some(first) = types.first() {
            if *tool.peek() == Tool::Browse {
                tool.set(Tool::Shift(first.id.clone()));
            }
        }
        shift_types.set(types);
        assignments.set(backend::get_assignments());
        holidays.set(backend::list_holidays());
    });

    let mut go_month = {
        let mut year = year.clone();
        let mut month = month.clone();
        move |delta: i32| {
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
        }
    };
    let this_month = {
        let mut year = year.clone();
        let mut month = month.clone();
        move |_| {
            let (yy, mm) = now_year_month();
            year.set(yy);
            month.set(mm);
        }
    };

    let save_note = move |_| {
        let Some(key) = editing_day() else { return };
        let text = note_draft.read().trim().to_string();
        let stored = {
            let mut map = assignments.write();
            let entry = map.entry(key.clone()).or_insert_with(|| DayAssignment {
                date: key.clone(),
                shift_type_id: None,
                note: None,
            });
            entry.note = if text.is_empty() { None } else { Some(text) };
            entry.clone()
        };
        backend::upsert_assignment(&stored);
        editing_day.set(None);
    };

    let days = month_days(year(), month());
    let padding = leading_padding(year(), month());
    let today_date = today();
    let weekday_names = weekdays_short_for_locale();

    rsx! {
        div { class: "flex flex-col min-h-[calc(100vh-4rem)] select-none",
            // Header: month title, picker and navigation
            div { class: "flex items-center justify-between px-4 py-3 border-b border-slate-200 dark:border-slate-700",
                button { class: "flex flex-col items-start rounded-md px-2 py-1 hover:bg-slate-100 dark:hover:bg-slate-800 transition",
                    onclick: move |_| picker_open.set(true),
                    span { class: "text-xs font-semibold text-slate-400 uppercase tracking-wider", {year().to_string()} }
                    span { class: "text-2xl font-bold leading-none", {month_name(month(), false)} }
                }
                div { class: "flex items-center gap-1",
                    button { class: "h-10 w-10 rounded-md hover:bg-slate-100 dark:hover:bg-slate-800 text-slate-500 transition",
                        onclick: move |_| go_month(-1), "←" }
                    button { class: "h-10 px-3 rounded-md hover:bg-slate-100 dark:hover:bg-slate-800 text-sm text-slate-600 dark:text-slate-300 transition",
                        onclick: this_month, {t("calendar.today")} }
                    button { class: "h-10 w-10 rounded-md hover:bg-slate-100 dark:hover:bg-slate-800 text-slate-500 transition",
                        onclick: move |_| go_month(1), "→" }
                }
            }

            // Week header, Monday first
            div { class: "grid grid-cols-7 border-b border-slate-200 dark:border-slate-700 bg-slate-50 dark:bg-slate-800/60",
                for (i, name) in weekday_names.iter().enumerate() {
                    div { class: if i >= 5 { "py-2 text-center text-xs font-semibold uppercase tracking-wider text-blue-400" } else { "py-2 text-center text-xs font-semibold uppercase tracking-wider text-slate-500" },
                        {name.clone()}
                    }
                }
            }

            // Day grid; dragging paints with the active tool
            div { class: "flex-1 grid grid-cols-7 auto-rows-fr",
                onpointerup: move |_| painting.set(false),
                onpointerleave: move |_| painting.set(false),
                for _ in 0..padding {
                    div { class: "min-h-[4.5rem] bg-slate-50/50 dark:bg-slate-800/30 border-r border-b border-slate-100 dark:border-slate-700/50" }
                }
                for date in days.into_iter() {
                    {
                        let key = date_key(date);
                        let shift = resolve_shift(date, &assignments.read(), &shift_types.read()).cloned();
                        let holiday_name = holidays.read().get(&key).map(|h| h.name.clone());
                        let has_note = assignments.read().get(&key).and_then(|a| a.note.as_ref()).is_some();
                        let is_today = is_same_day(date, today_date);
                        let weekend = matches!(
                            chrono::Datelike::weekday(&date),
                            chrono::Weekday::Sat | chrono::Weekday::Sun
                        );
                        let bg = if is_today {
                            "bg-blue-50 dark:bg-blue-900/20"
                        } else if weekend || holiday_name.is_some() {
                            "bg-slate-50 dark:bg-slate-800/40"
                        } else {
                            "bg-white dark:bg-slate-900"
                        };
                        let day_number_class = if shift.is_some() {
                            "absolute top-1.5 left-1.5 text-sm font-medium z-10 text-white drop-shadow"
                        } else if is_today {
                            "absolute top-1.5 left-1.5 text-sm font-medium z-10 text-blue-600"
                        } else if weekend {
                            "absolute top-1.5 left-1.5 text-sm font-medium z-10 text-slate-500"
                        } else {
                            "absolute top-1.5 left-1.5 text-sm font-medium z-10 text-slate-400"
                        };
                        let editor_key = key.clone();
                        rsx! {
                            div {
                                class: "relative min-h-[4.5rem] border-r border-b border-slate-100 dark:border-slate-700/50 cursor-pointer {bg}",
                                onpointerdown: move |_| {
                                    if *tool.read() == Tool::Browse {
                                        let note = assignments
                                            .read()
                                            .get(&editor_key)
                                            .and_then(|a| a.note.clone())
                                            .unwrap_or_default();
                                        note_draft.set(note);
                                        editing_day.set(Some(editor_key.clone()));
                                    } else {
                                        painting.set(true);
                                        paint_and_store(date, tool, assignments);
                                    }
                                },
                                onpointerenter: move |_| {
                                    if painting() && *tool.read() != Tool::Browse {
                                        paint_and_store(date, tool, assignments);
                                    }
                                },
                                span { class: "{day_number_class}", {chrono::Datelike::day(&date).to_string()} }
                                { has_note.then(|| rsx!(
                                    div { class: "absolute top-1.5 right-1.5 w-2 h-2 rounded-full bg-yellow-400 border border-white z-10" }
                                )) }
                                { holiday_name.as_ref().map(|name| rsx!(
                                    div { class: "absolute bottom-1 left-1.5 right-1.5 truncate text-[10px] text-rose-500 z-10", title: "{name}", {name.clone()} }
                                )) }
                                { shift.as_ref().map(|s| rsx!(
                                    div { class: "absolute inset-1 rounded-lg flex flex-col items-center justify-center shadow-sm",
                                        style: "background-color: {s.color}",
                                        span { class: "text-xl font-bold text-white drop-shadow", {s.code.clone()} }
                                        { (!s.start_time.is_empty() && !s.end_time.is_empty()).then(|| rsx!(
                                            span { class: "text-[10px] text-white opacity-90", {format!("{}-{}", s.start_time, s.end_time)} }
                                        )) }
                                    }
                                )) }
                            }
                        }
                    }
                }
            }

            ShiftPalette {
                shift_types: shift_types.read().clone(),
                tool: tool.read().clone(),
                on_select: move |next| tool.set(next),
            }
        }

        { picker_open().then(|| rsx!(
            MonthPicker {
                year: year(),
                month: month(),
                on_select: {
                    let mut year = year.clone();
                    let mut month = month.clone();
                    move |(y, m): (i32, u32)| {
                        year.set(y);
                        month.set(m);
                    }
                },
                on_close: move |_| picker_open.set(false),
            }
        )) }

        // Day editor: reachable with the browse tool; painting never touches notes
        { editing_day().map(|key| {
            let date = parse_date_key(&key);
            let title = date
                .map(|d| format!("{} · {}", weekday_name_for_date(d), format_date_ymd(&key)))
                .unwrap_or_else(|| key.clone());
            let shift_name = date
                .and_then(|d| resolve_shift(d, &assignments.read(), &shift_types.read()).map(|s| s.name.clone()));
            let holiday_name = holidays.read().get(&key).map(|h| h.name.clone());
            rsx!(
                div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4",
                    div { class: "w-full max-w-md rounded-xl border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-lg p-5 space-y-4",
                        h2 { class: "text-lg font-semibold", {title} }
                        div { class: "text-sm text-slate-600 dark:text-slate-300 space-y-1",
                            p { { shift_name.map(|n| format!("{}: {}", t("calendar.assigned_shift"), n)).unwrap_or_else(|| t("calendar.no_shift")) } }
                            { holiday_name.map(|n| rsx!( p { class: "text-rose-500", {format!("🌴 {}", n)} } )) }
                        }
                        textarea { class: "rounded-md border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-900 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500 w-full h-24",
                            placeholder: t("calendar.note_placeholder"),
                            value: note_draft.read().clone(),
                            oninput: move |e| note_draft.set(e.value()),
                        }
                        div { class: "flex items-center justify-end gap-2",
                            button { class: "inline-flex items-center h-9 px-3 rounded-md border border-slate-300 dark:border-slate-600 text-slate-700 dark:text-slate-200 hover:bg-slate-100 dark:hover:bg-slate-800 text-sm font-medium transition",
                                onclick: move |_| editing_day.set(None), {t("common.cancel")} }
                            button { class: "inline-flex items-center h-9 px-3 rounded-md bg-blue-600 hover:bg-blue-500 text-white text-sm font-medium transition",
                                onclick: save_note, {t("common.save")} }
                        }
                    }
                }
            )
        }) }
    }
}

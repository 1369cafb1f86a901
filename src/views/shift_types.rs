use dioxus::prelude::*;

use crate::i18n::t;
use crate::schedule::ShiftType;

// Backends
#[cfg(all(feature = "native-db", not(target_arch = "wasm32")))]
mod backend {
    use crate::db::dao;
    use crate::schedule::ShiftType;
    use dioxus_logger::tracing::warn;
    pub fn list_shift_types() -> Vec<ShiftType> {
        dao::list_shift_types().unwrap_or_else(|e| {
            warn!("loading shift types failed: {e}");
            Vec::new()
        })
    }
    pub fn create_shift_type(name: &str, code: &str, color: &str, start: &str, end: &str, duration: Option<f64>) {
        if let Err(e) = dao::create_shift_type(name, code, color, start, end, duration) {
            warn!("creating shift type failed: {e}");
        }
    }
    pub fn update_shift_type(s: &ShiftType) {
        if let Err(e) = dao::update_shift_type(s) {
            warn!("updating shift type failed: {e}");
        }
    }
    pub fn delete_shift_type(id: &str) {
        if let Err(e) = dao::delete_shift_type(id) {
            warn!("deleting shift type failed: {e}");
        }
    }
}
#[cfg(target_arch = "wasm32")]
mod backend {
    use crate::db::wasm_store as store;
    use crate::schedule::ShiftType;
    pub fn list_shift_types() -> Vec<ShiftType> {
        store::list_shift_types()
    }
    pub fn create_shift_type(name: &str, code: &str, color: &str, start: &str, end: &str, duration: Option<f64>) {
        store::create_shift_type(name, code, color, start, end, duration);
    }
    pub fn update_shift_type(s: &ShiftType) {
        store::update_shift_type(s);
    }
    pub fn delete_shift_type(id: &str) {
        store::delete_shift_type(id);
    }
}
#[cfg(all(not(target_arch = "wasm32"), not(feature = "native-db")))]
mod backend {
    use crate::schedule::ShiftType;
    pub fn list_shift_types() -> Vec<ShiftType> {
        Vec::new()
    }
    pub fn create_shift_type(_n: &str, _c: &str, _col: &str, _s: &str, _e: &str, _d: Option<f64>) {}
    pub fn update_shift_type(_s: &ShiftType) {}
    pub fn delete_shift_type(_id: &str) {}
}

#[derive(PartialEq, Clone, Default)]
struct ShiftForm {
    id: Option<String>,
    name: String,
    code: String,
    color: String,
    start_time: String,
    end_time: String,
    duration: String,
}

fn fresh_form() -> ShiftForm {
    ShiftForm {
        id: None,
        name: String::new(),
        code: String::new(),
        color: "#3b82f6".into(),
        start_time: "09:00".into(),
        end_time: "17:00".into(),
        duration: String::new(),
    }
}

#[component]
pub fn ShiftTypes() -> Element {
    let mut list = use_signal(Vec::<ShiftType>::new);
    let mut modal_open = use_signal(|| false);
    let mut form = use_signal(fresh_form);
    let mut error = use_signal(|| Option::<String>::None);
    let mut confirm_delete = use_signal(|| Option::<String>::None);

    use_effect(move || {
        list.set(backend::list_shift_types());
    });

    let open_create = move |_| {
        error.set(None);
        form.set(fresh_form());
        modal_open.set(true);
    };
    let mut open_edit = move |s: ShiftType| {
        error.set(None);
        form.set(ShiftForm {
            id: Some(s.id),
            name: s.name,
            code: s.code,
            color: s.color,
            start_time: s.start_time,
            end_time: s.end_time,
            duration: s.duration_hours.map(|h| h.to_string()).unwrap_or_default(),
        });
        modal_open.set(true);
    };

    let on_submit = move |_| {
        error.set(None);
        let f = form.read().clone();
        if f.name.trim().is_empty() {
            error.set(Some(t("shift_types.error_name_required")));
            return;
        }
        let code = f.code.trim().to_uppercase();
        if code.is_empty() || code.chars().count() > 3 {
            error.set(Some(t("shift_types.error_code_invalid")));
            return;
        }
        let duration = match f.duration.trim() {
            "" => None,
            raw => match raw.parse::<f64>() {
                Ok(h) if h.is_finite() && h >= 0.0 => Some(h),
                _ => {
                    error.set(Some(t("shift_types.error_duration_invalid")));
                    return;
                }
            },
        };
        match f.id {
            Some(id) => backend::update_shift_type(&ShiftType {
                id,
                name: f.name.trim().to_string(),
                code,
                color: f.color.clone(),
                start_time: f.start_time.clone(),
                end_time: f.end_time.clone(),
                duration_hours: duration,
            }),
            None => backend::create_shift_type(
                f.name.trim(),
                &code,
                &f.color,
                &f.start_time,
                &f.end_time,
                duration,
            ),
        }
        list.set(backend::list_shift_types());
        modal_open.set(false);
    };

    rsx! {
        div { class: "min-h-[70vh] flex items-start justify-center",
            div { class: "w-full max-w-2xl mx-auto space-y-5 p-4",
                div { class: "flex items-center justify-between",
                    div {
                        h1 { class: "text-xl sm:text-2xl font-semibold", {t("shift_types.title")} }
                        p { class: "text-sm text-slate-500", {t("shift_types.subtitle")} }
                    }
                    button { class: "inline-flex items-center gap-2 h-9 px-3 rounded-md bg-blue-600 hover:bg-blue-500 text-white text-sm font-medium transition", onclick: open_create,
                        span { "➕" } span { class: "hidden sm:inline", {t("common.new")} }
                    }
                }
                div { class: "rounded-xl border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-sm p-4 sm:p-5",
                    {
                        if list.read().is_empty() {
                            rsx!( div { class: "text-sm text-slate-600 dark:text-slate-300 py-6 text-center", {t("shift_types.empty")} } )
                        } else {
                            rsx!(
                                ul { class: "divide-y divide-slate-200 dark:divide-slate-700",
                                    for s in list.read().iter().cloned() {
                                        {
                                            let edit_target = s.clone();
                                            let delete_id = s.id.clone();
                                            let times = if s.start_time.is_empty() || s.end_time.is_empty() {
                                                "--:-- - --:--".to_string()
                                            } else {
                                                format!("{} - {}", s.start_time, s.end_time)
                                            };
                                            let hours = s.hours();
                                            rsx! {
                                                li { class: "py-3 flex items-center justify-between gap-3",
                                                    div { class: "flex items-center gap-3 min-w-0 flex-1 cursor-pointer hover:bg-slate-50 dark:hover:bg-slate-700/30 rounded-md px-3 -mx-3 py-2",
                                                        onclick: move |_| open_edit(edit_target.clone()),
                                                        div { class: "w-12 h-12 rounded-lg flex items-center justify-center shadow-sm shrink-0",
                                                            style: "background-color: {s.color}",
                                                            span { class: "text-white font-bold", {s.code.clone()} }
                                                        }
                                                        div { class: "min-w-0",
                                                            div { class: "font-medium text-slate-800 dark:text-slate-100", {s.name.clone()} }
                                                            div { class: "text-xs text-slate-500", {format!("🕐 {} · {:.1} h", times, hours)} }
                                                        }
                                                    }
                                                    button { class: "w-8 h-8 rounded-full flex items-center justify-center text-slate-400 hover:text-red-600 hover:bg-red-50 dark:hover:bg-red-900/30 transition",
                                                        title: t("common.delete"),
                                                        onclick: move |_| confirm_delete.set(Some(delete_id.clone())),
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
                p { class: "text-xs text-slate-400 leading-relaxed",
                    {t("shift_types.delete_hint")}
                }
            }
        }

        { modal_open().then(|| rsx!(
            div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4",
                div { class: "w-full max-w-md rounded-xl border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-lg p-5 space-y-4",
                    h2 { class: "text-lg font-semibold", { if form.read().id.is_some() { t("shift_types.edit_title") } else { t("shift_types.new_title") } } }
                    { error.read().as_ref().map(|err| rsx!( p { class: "text-red-600 text-sm", {err.clone()} } )) }
                    div { class: "flex flex-col gap-2",
                        label { class: "text-sm font-medium text-slate-700 dark:text-slate-200", {t("shift_types.name")} }
                        input { class: "h-10 rounded-md border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-900 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500",
                            placeholder: t("shift_types.name_placeholder"),
                            value: form.read().name.clone(),
                            oninput: move |e| form.write().name = e.value() }
                    }
                    div { class: "grid grid-cols-2 gap-3",
                        div { class: "flex flex-col gap-2",
                            label { class: "text-sm font-medium text-slate-700 dark:text-slate-200", {t("shift_types.code")} }
                            input { class: "h-10 rounded-md border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-900 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500",
                                maxlength: "3",
                                placeholder: "M",
                                value: form.read().code.clone(),
                                oninput: move |e| form.write().code = e.value().to_uppercase() }
                        }
                        div { class: "flex flex-col gap-2",
                            label { class: "text-sm font-medium text-slate-700 dark:text-slate-200", {t("shift_types.color")} }
                            input { r#type: "color", class: "h-10 w-full rounded-md border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-900 px-1 cursor-pointer",
                                value: form.read().color.clone(),
                                oninput: move |e| form.write().color = e.value() }
                        }
                    }
                    div { class: "grid grid-cols-2 gap-3",
                        div { class: "flex flex-col gap-2",
                            label { class: "text-sm font-medium text-slate-700 dark:text-slate-200", {t("shift_types.start")} }
                            input { r#type: "time", class: "h-10 rounded-md border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-900 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500",
                                value: form.read().start_time.clone(),
                                oninput: move |e| form.write().start_time = e.value() }
                        }
                        div { class: "flex flex-col gap-2",
                            label { class: "text-sm font-medium text-slate-700 dark:text-slate-200", {t("shift_types.end")} }
                            input { r#type: "time", class: "h-10 rounded-md border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-900 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500",
                                value: form.read().end_time.clone(),
                                oninput: move |e| form.write().end_time = e.value() }
                        }
                    }
                    div { class: "flex flex-col gap-2",
                        label { class: "text-sm font-medium text-slate-700 dark:text-slate-200", {t("shift_types.duration")} }
                        input { r#type: "number", min: "0", step: "0.25", class: "h-10 rounded-md border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-900 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500",
                            placeholder: t("shift_types.duration_placeholder"),
                            value: form.read().duration.clone(),
                            oninput: move |e| form.write().duration = e.value() }
                        p { class: "text-xs text-slate-400", {t("shift_types.duration_hint")} }
                    }
                    div { class: "flex items-center justify-end gap-2",
                        button { class: "inline-flex items-center h-9 px-3 rounded-md border border-slate-300 dark:border-slate-600 text-slate-700 dark:text-slate-200 hover:bg-slate-100 dark:hover:bg-slate-800 text-sm font-medium transition", onclick: move |_| modal_open.set(false), {t("common.cancel")} }
                        button { class: "inline-flex items-center h-9 px-3 rounded-md bg-blue-600 hover:bg-blue-500 text-white text-sm font-medium transition", onclick: on_submit, { if form.read().id.is_some() { t("common.save") } else { t("common.create") } } }
                    }
                }
            }
        )) }

        // Confirm modal
        { confirm_delete().map(|id| rsx!(
            div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4",
                div { class: "w-full max-w-md rounded-xl border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-lg p-5 space-y-4",
                    h2 { class: "text-lg font-semibold", {t("common.confirm_delete_title")} }
                    p { class: "text-sm text-slate-600 dark:text-slate-300", {t("shift_types.confirm_delete")} }
                    div { class: "flex items-center justify-end gap-2",
                        button { class: "inline-flex items-center h-9 px-3 rounded-md border border-slate-300 dark:border-slate-600 text-slate-700 dark:text-slate-200 hover:bg-slate-100 dark:hover:bg-slate-800 text-sm font-medium transition",
                            onclick: move |_| confirm_delete.set(None), {t("common.cancel")} }
                        button { class: "inline-flex items-center h-9 px-3 rounded-md bg-red-600 hover:bg-red-500 text-white text-sm font-medium transition",
                            onclick: move |_| {
                                backend::delete_shift_type(&id);
                                list.set(backend::list_shift_types());
                                confirm_delete.set(None);
                            },
                            span { "🗑️" } span { class: "hidden sm:inline", {t("common.delete")} }
                        }
                    }
                }
            }
        )) }
    }
}

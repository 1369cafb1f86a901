use dioxus::prelude::*;

use crate::i18n::t;
use crate::schedule::paint::Tool;
use crate::schedule::ShiftType;

/// Tool strip under the calendar: one chip per shift type plus the eraser
/// and the browse tool. The selected chip gets a ring.
#[component]
pub fn ShiftPalette(shift_types: Vec<ShiftType>, tool: Tool, on_select: EventHandler<Tool>) -> Element {
    rsx! {
        div { class: "border-t border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 px-3 py-2",
            div { class: "flex items-center gap-2 overflow-x-auto",
                button {
                    class: if tool == Tool::Browse {
                        "shrink-0 h-12 w-12 rounded-lg border-2 border-blue-500 bg-slate-100 dark:bg-slate-700 flex flex-col items-center justify-center"
                    } else {
                        "shrink-0 h-12 w-12 rounded-lg border border-slate-300 dark:border-slate-600 bg-slate-100 dark:bg-slate-700 flex flex-col items-center justify-center"
                    },
                    title: t("palette.browse"),
                    onclick: move |_| on_select.call(Tool::Browse),
                    span { "👆" }
                }
                button {
                    class: if tool == Tool::Eraser {
                        "shrink-0 h-12 w-12 rounded-lg border-2 border-blue-500 bg-slate-100 dark:bg-slate-700 flex flex-col items-center justify-center"
                    } else {
                        "shrink-0 h-12 w-12 rounded-lg border border-slate-300 dark:border-slate-600 bg-slate-100 dark:bg-slate-700 flex flex-col items-center justify-center"
                    },
                    title: t("palette.eraser"),
                    onclick: move |_| on_select.call(Tool::Eraser),
                    span { "🧽" }
                }
                div { class: "w-px self-stretch bg-slate-200 dark:bg-slate-700" }
                for s in shift_types.iter() {
                    {
                        let selected = tool == Tool::Shift(s.id.clone());
                        let id = s.id.clone();
                        let chip_class = if selected {
                            "shrink-0 h-12 min-w-[3rem] px-2 rounded-lg border-2 border-blue-500 flex flex-col items-center justify-center text-white shadow-sm"
                        } else {
                            "shrink-0 h-12 min-w-[3rem] px-2 rounded-lg border border-transparent flex flex-col items-center justify-center text-white shadow-sm"
                        };
                        rsx! {
                            button {
                                class: "{chip_class}",
                                style: "background-color: {s.color}",
                                title: "{s.name}",
                                onclick: move |_| on_select.call(Tool::Shift(id.clone())),
                                span { class: "font-bold leading-none", {s.code.clone()} }
                                { (!s.start_time.is_empty() && !s.end_time.is_empty()).then(|| rsx!(
                                    span { class: "text-[10px] opacity-90", {format!("{}-{}", s.start_time, s.end_time)} }
                                )) }
                            }
                        }
                    }
                }
                { shift_types.is_empty().then(|| rsx!(
                    span { class: "text-sm text-slate-500", {t("palette.empty")} }
                )) }
            }
        }
    }
}

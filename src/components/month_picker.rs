use dioxus::prelude::*;

use crate::i18n::{month_name, t};

/// Modal for jumping straight to a month: year stepper plus a 3x4 month grid.
#[component]
pub fn MonthPicker(
    year: i32,
    month: u32,
    on_select: EventHandler<(i32, u32)>,
    on_close: EventHandler<()>,
) -> Element {
    let mut shown_year = use_signal(move || year);

    rsx! {
        div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4",
            onclick: move |_| on_close.call(()),
            div { class: "w-full max-w-sm rounded-xl border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-lg p-5 space-y-4",
                onclick: move |e| e.stop_propagation(),
                div { class: "flex items-center justify-between",
                    button { class: "h-9 w-9 rounded-md border border-slate-300 dark:border-slate-600 hover:bg-slate-100 dark:hover:bg-slate-700",
                        onclick: move |_| shown_year.set(shown_year() - 1), "←" }
                    span { class: "text-lg font-semibold", {shown_year().to_string()} }
                    button { class: "h-9 w-9 rounded-md border border-slate-300 dark:border-slate-600 hover:bg-slate-100 dark:hover:bg-slate-700",
                        onclick: move |_| shown_year.set(shown_year() + 1), "→" }
                }
                div { class: "grid grid-cols-3 gap-2",
                    for m in 1u32..=12 {
                        {
                            let current = shown_year() == year && m == month;
                            let cell_class = if current {
                                "h-10 rounded-md bg-blue-600 text-white text-sm font-medium"
                            } else {
                                "h-10 rounded-md border border-slate-300 dark:border-slate-600 text-sm hover:bg-slate-100 dark:hover:bg-slate-700"
                            };
                            rsx! {
                                button { class: "{cell_class}",
                                    onclick: move |_| {
                                        on_select.call((shown_year(), m));
                                        on_close.call(());
                                    },
                                    {month_name(m, true)}
                                }
                            }
                        }
                    }
                }
                button { class: "w-full h-9 rounded-md border border-slate-300 dark:border-slate-600 text-sm font-medium hover:bg-slate-100 dark:hover:bg-slate-700",
                    onclick: move |_| on_close.call(()), {t("common.cancel")} }
            }
        }
    }
}

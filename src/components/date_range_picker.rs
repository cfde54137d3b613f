//! Date-Range Filter Controls
//!
//! Start/end calendar pickers shared by every analytics page. The end picker
//! clamps its minimum to the chosen start date; the range itself stays
//! inclusive on both ends.

use chrono::NaiveDate;
use leptos::ev;
use leptos::prelude::*;

const DATE_INPUT_CLASS: &str = "bg-zinc-950 text-white border border-zinc-700 rounded p-1.5 text-sm focus:border-purple-500 outline-none";

#[component]
pub fn DateRangePicker(start: RwSignal<NaiveDate>, end: RwSignal<NaiveDate>) -> impl IntoView {
    let handle_start = move |evt: ev::Event| {
        match NaiveDate::parse_from_str(&event_target_value(&evt), "%Y-%m-%d") {
            Ok(date) => start.set(date),
            Err(err) => log::warn!("ignoring unparseable start date: {err}"),
        }
    };

    let handle_end = move |evt: ev::Event| {
        match NaiveDate::parse_from_str(&event_target_value(&evt), "%Y-%m-%d") {
            Ok(date) => end.set(date),
            Err(err) => log::warn!("ignoring unparseable end date: {err}"),
        }
    };

    view! {
        <div class="flex items-center gap-2 text-sm text-zinc-400">
            <label>"Start Date:"</label>
            <input
                type="date"
                class=DATE_INPUT_CLASS
                prop:value=move || start.get().format("%Y-%m-%d").to_string()
                on:input=handle_start
            />
            <label>"End Date:"</label>
            <input
                type="date"
                class=DATE_INPUT_CLASS
                min=move || start.get().format("%Y-%m-%d").to_string()
                prop:value=move || end.get().format("%Y-%m-%d").to_string()
                on:input=handle_end
            />
        </div>
    }
}

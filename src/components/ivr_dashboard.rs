//! IVR Analytics Page
//!
//! Campaign rows carry live call counters updated by per-row outcome
//! buttons. The summary cards fold the date-filtered rows and show each
//! counter's share of all recorded calls; shares are "n/a" until a call has
//! been recorded. Tables paginate at 100 rows.

use chrono::Local;
use leptos::ev;
use leptos::prelude::*;

use crate::components::date_range_picker::DateRangePicker;
use crate::components::design_system::{Button, ButtonVariant, Input, Modal, StatCard};
use crate::services::notification_service::{show_error, show_success};
use crate::services::reporting::{filter_by_range, format_rate, DateRange, IvrSummary};
use crate::services::store::{use_campaign_stores, IvrAction, IvrCampaign};
use crate::utils::formatting::{format_timestamp, parse_datetime_local};

const ROWS_PER_PAGE: usize = 100;

#[component]
pub fn IvrDashboard() -> impl IntoView {
    let stores = use_campaign_stores();

    let start_date = RwSignal::new(Local::now().date_naive());
    let end_date = RwSignal::new(Local::now().date_naive());
    let modal_open = RwSignal::new(false);
    let current_page = RwSignal::new(1usize);

    // Campaign draft under edit in the modal
    let draft_name = RwSignal::new(String::new());
    let draft_datetime = RwSignal::new(String::new());
    let draft_content = RwSignal::new(String::new());
    let draft_file_name = RwSignal::new(Option::<String>::None);

    let filtered = Signal::derive(move || {
        let range = DateRange::new(start_date.get(), end_date.get());
        filter_by_range(&stores.ivr.get(), &range)
    });
    let summary = Signal::derive(move || IvrSummary::from_campaigns(&filtered.get()));

    let page_count = Signal::derive(move || filtered.get().len().div_ceil(ROWS_PER_PAGE).max(1));
    let paginated = Signal::derive(move || {
        let page = current_page.get().min(page_count.get());
        filtered
            .get()
            .into_iter()
            .skip((page - 1) * ROWS_PER_PAGE)
            .take(ROWS_PER_PAGE)
            .collect::<Vec<_>>()
    });

    let can_submit = Signal::derive(move || {
        !draft_name.get().trim().is_empty()
            && !draft_datetime.get().is_empty()
            && !draft_content.get().trim().is_empty()
    });

    let handle_file = move |evt: ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&evt);
        // Spreadsheets are never parsed; keep the name for display only.
        draft_file_name.set(input.files().and_then(|list| list.get(0)).map(|f| f.name()));
    };

    let handle_submit = move |_: ev::MouseEvent| {
        if !can_submit.get() {
            return;
        }

        let scheduled_at = match parse_datetime_local(&draft_datetime.get()) {
            Ok(ts) => ts,
            Err(err) => {
                log::warn!("rejecting IVR campaign draft: {err}");
                show_error("Invalid schedule", Some(&err));
                return;
            }
        };

        stores.add_ivr(IvrCampaign::new(
            draft_name.get().trim().to_string(),
            scheduled_at,
            draft_content.get(),
            draft_file_name.get(),
        ));
        show_success("IVR campaign created", None);

        draft_name.set(String::new());
        draft_datetime.set(String::new());
        draft_content.set(String::new());
        draft_file_name.set(None);
        modal_open.set(false);
    };

    view! {
        <div class="p-8 space-y-6">
            <header class="flex flex-wrap items-center justify-between gap-4">
                <h1 class="text-2xl font-bold text-white">"IVR Dashboard"</h1>
                <div class="flex flex-wrap items-center gap-4">
                    <DateRangePicker start=start_date end=end_date />
                    <Button on_click=move |_| modal_open.set(true)>
                        "Create IVR Campaign"
                    </Button>
                </div>
            </header>

            <Modal is_open=modal_open title="Create IVR Campaign">
                <div class="space-y-4">
                    <div>
                        <label class="block text-sm font-medium text-zinc-400 mb-2">
                            "Campaign Name:"
                        </label>
                        <Input value=draft_name required=true />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-zinc-400 mb-2">
                            "Date and Time:"
                        </label>
                        <Input value=draft_datetime r#type="datetime-local" required=true />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-zinc-400 mb-2">
                            "Content:"
                        </label>
                        <textarea
                            class="w-full p-2 rounded bg-zinc-950 text-white border border-zinc-700 focus:border-purple-500 focus:outline-none resize-none"
                            rows="4"
                            required=true
                            prop:value=move || draft_content.get()
                            on:input=move |evt| draft_content.set(event_target_value(&evt))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-zinc-400 mb-2">
                            "Upload File:"
                        </label>
                        <input
                            type="file"
                            accept=".csv, .xls, .xlsx"
                            class="w-full text-sm text-zinc-400 file:mr-3 file:px-3 file:py-1.5 file:rounded file:border-0 file:bg-zinc-700 file:text-zinc-200"
                            on:change=handle_file
                        />
                    </div>
                    <Button
                        class="w-full"
                        disabled=Signal::derive(move || !can_submit.get())
                        on_click=handle_submit
                    >
                        "Create"
                    </Button>
                </div>
            </Modal>

            <section class="flex flex-wrap gap-4">
                <StatCard
                    label="Total Numbers"
                    value=Signal::derive(move || summary.get().total_calls.to_string())
                />
                <StatCard
                    label="Attended Calls"
                    value=Signal::derive(move || summary.get().attended_calls.to_string())
                    detail=Signal::derive(move || {
                        let s = summary.get();
                        format_rate(s.rate_of_total(s.attended_calls))
                    })
                />
                <StatCard
                    label="Interested Delivery"
                    value=Signal::derive(move || summary.get().interested.to_string())
                    detail=Signal::derive(move || {
                        let s = summary.get();
                        format_rate(s.rate_of_total(s.interested))
                    })
                />
                <StatCard
                    label="Not Interested Delivery"
                    value=Signal::derive(move || summary.get().not_interested.to_string())
                    detail=Signal::derive(move || {
                        let s = summary.get();
                        format_rate(s.rate_of_total(s.not_interested))
                    })
                />
                <StatCard
                    label="Double SMS Sent"
                    value=Signal::derive(move || summary.get().double_sms.to_string())
                    detail=Signal::derive(move || {
                        let s = summary.get();
                        format_rate(s.rate_of_total(s.double_sms))
                    })
                />
                <StatCard
                    label="Telecaller Assigned"
                    value=Signal::derive(move || summary.get().telecaller_assigned.to_string())
                    detail=Signal::derive(move || {
                        let s = summary.get();
                        format_rate(s.rate_of_total(s.telecaller_assigned))
                    })
                />
            </section>

            <section class="bg-zinc-900 border border-zinc-800 rounded-lg overflow-hidden">
                <div class="overflow-x-auto">
                    <table class="w-full text-sm">
                        <thead>
                            <tr class="border-b border-zinc-800 text-zinc-400">
                                <th class="text-left py-2 px-4">"Campaign Name"</th>
                                <th class="text-left py-2 px-4">"Date and Time"</th>
                                <th class="text-left py-2 px-4">"Content"</th>
                                <th class="text-left py-2 px-4">"Uploaded File"</th>
                                <th class="text-left py-2 px-4">"Actions"</th>
                                <th class="text-left py-2 px-4">"Stats"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || paginated.get().into_iter().map(|campaign| {
                                let id = campaign.id;
                                let stats = campaign.stats;
                                view! {
                                    <tr class="border-b border-zinc-800/50 text-zinc-200 align-top">
                                        <td class="py-2 px-4 font-medium">{campaign.name}</td>
                                        <td class="py-2 px-4">{format_timestamp(campaign.scheduled_at)}</td>
                                        <td class="py-2 px-4 text-zinc-400">{campaign.content}</td>
                                        <td class="py-2 px-4 text-zinc-400">{campaign.file_name}</td>
                                        <td class="py-2 px-4">
                                            <div class="flex flex-col gap-1">
                                                {IvrAction::all().into_iter().map(|action| {
                                                    view! {
                                                        <Button
                                                            variant=ButtonVariant::Secondary
                                                            class="text-xs px-2 py-1"
                                                            on_click=move |_| stores.record_ivr_action(id, action)
                                                        >
                                                            {action.label()}
                                                        </Button>
                                                    }
                                                }).collect_view()}
                                            </div>
                                        </td>
                                        <td class="py-2 px-4 text-zinc-400">
                                            <p>"Total Calls: " {stats.total_calls}</p>
                                            <p>"Attended: " {stats.attended_calls}</p>
                                            <p>"Interested: " {stats.interested}</p>
                                            <p>"Not Interested: " {stats.not_interested}</p>
                                            <p>"Double SMS: " {stats.double_sms}</p>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                    <Show when=move || filtered.get().is_empty()>
                        <div class="text-center py-8 text-zinc-500">
                            "No campaigns in this date range"
                        </div>
                    </Show>
                </div>
                <div class="flex gap-1 p-3 border-t border-zinc-800">
                    {move || (1..=page_count.get()).map(|page| {
                        let is_current = page == current_page.get();
                        view! {
                            <button
                                class=move || format!(
                                    "px-3 py-1 rounded text-sm {}",
                                    if is_current {
                                        "bg-purple-600 text-white"
                                    } else {
                                        "bg-zinc-800 text-zinc-400 hover:text-white"
                                    }
                                )
                                on:click=move |_| current_page.set(page)
                            >
                                {page}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}

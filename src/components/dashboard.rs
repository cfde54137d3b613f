//! Overview Dashboard Page
//!
//! Six-card account snapshot, channel-reach proportion bars, and the Import
//! Data modal feeding the imports table. The snapshot figures are a static
//! mock; only the imports table is live data.

use chrono::Local;
use leptos::ev;
use leptos::prelude::*;
use phosphor_leptos::{Icon, DOWNLOAD_SIMPLE, PENCIL_SIMPLE};

use crate::components::date_range_picker::DateRangePicker;
use crate::components::design_system::{Button, Card, CardBody, CardHeader, Input, Modal, StatCard};
use crate::services::notification_service::{show_error, show_success};
use crate::services::reporting::{filter_by_range, rate_of, DateRange};
use crate::services::store::{use_campaign_stores, ImportedCampaign};
use crate::utils::formatting::{format_count, format_timestamp, parse_datetime_local};

/// Static account snapshot: (metric, value, trend note).
const SNAPSHOT_TOTAL: u32 = 150_000;
const SNAPSHOT_DELIVERED: u32 = 100_000;
const SNAPSHOT_INTERESTED: u32 = 18_000;
const SNAPSHOT_NOT_INTERESTED: u32 = 12_000;

/// Static per-channel reach used by the proportion bars: (channel, reach,
/// delivered, bar color).
const CHANNEL_REACH: &[(&str, u32, u32, &str)] = &[
    ("SMS", 125_000, 110_000, "bg-green-500"),
    ("IVR", 55_000, 48_000, "bg-orange-500"),
    ("WhatsApp", 85_000, 73_000, "bg-blue-500"),
];

/// Horizontal proportion bars, one per channel, scaled to the largest value.
#[component]
fn ChannelBars(
    title: &'static str,
    /// (label, value, bar color) per channel
    rows: Vec<(&'static str, u32, &'static str)>,
) -> impl IntoView {
    let max = rows.iter().map(|(_, value, _)| *value).max().unwrap_or(0);

    view! {
        <Card class="flex-1 min-w-[280px]">
            <CardHeader>
                <h3 class="text-lg font-semibold text-white">{title}</h3>
            </CardHeader>
            <CardBody class="space-y-3">
                {rows.into_iter().map(|(label, value, color)| {
                    let width = rate_of(value, max).unwrap_or(0.0);
                    view! {
                        <div class="space-y-1">
                            <div class="flex justify-between text-sm">
                                <span class="font-medium text-white">{label}</span>
                                <span class="text-zinc-400">{format_count(value)}</span>
                            </div>
                            <div class="w-full bg-zinc-700 rounded-full h-2">
                                <div
                                    class=format!("h-2 rounded-full transition-all duration-300 {color}")
                                    style=format!("width: {}%", width.min(100.0))
                                />
                            </div>
                        </div>
                    }
                }).collect_view()}
            </CardBody>
        </Card>
    }
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let stores = use_campaign_stores();

    let start_date = RwSignal::new(Local::now().date_naive());
    let end_date = RwSignal::new(Local::now().date_naive());
    let modal_open = RwSignal::new(false);

    // Import draft under edit in the modal
    let draft_name = RwSignal::new(String::new());
    let draft_datetime = RwSignal::new(String::new());
    let draft_content = RwSignal::new(String::new());
    let draft_file_name = RwSignal::new(String::new());

    let filtered = Signal::derive(move || {
        let range = DateRange::new(start_date.get(), end_date.get());
        filter_by_range(&stores.imports.get(), &range)
    });

    let not_delivered = SNAPSHOT_TOTAL - SNAPSHOT_DELIVERED;
    let no_response = SNAPSHOT_DELIVERED - (SNAPSHOT_INTERESTED + SNAPSHOT_NOT_INTERESTED);

    let can_submit = Signal::derive(move || {
        !draft_name.get().trim().is_empty()
            && !draft_datetime.get().is_empty()
            && !draft_content.get().trim().is_empty()
            && !draft_file_name.get().is_empty()
    });

    let handle_file = move |evt: ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&evt);
        // Spreadsheets are never parsed; keep the name for display only.
        draft_file_name.set(
            input
                .files()
                .and_then(|list| list.get(0))
                .map(|f| f.name())
                .unwrap_or_default(),
        );
    };

    let handle_submit = move |_: ev::MouseEvent| {
        if !can_submit.get() {
            return;
        }

        let scheduled_at = match parse_datetime_local(&draft_datetime.get()) {
            Ok(ts) => ts,
            Err(err) => {
                log::warn!("rejecting import draft: {err}");
                show_error("Invalid schedule", Some(&err));
                return;
            }
        };

        stores.add_import(ImportedCampaign::new(
            draft_name.get().trim().to_string(),
            scheduled_at,
            draft_content.get(),
            draft_file_name.get(),
        ));
        show_success("Data imported", None);

        draft_name.set(String::new());
        draft_datetime.set(String::new());
        draft_content.set(String::new());
        draft_file_name.set(String::new());
        modal_open.set(false);
    };

    view! {
        <div class="p-8 space-y-6">
            <header class="flex flex-wrap items-center justify-between gap-4">
                <h1 class="text-2xl font-bold text-white">"Dashboard"</h1>
                <div class="flex flex-wrap items-center gap-4">
                    <DateRangePicker start=start_date end=end_date />
                    <Button on_click=move |_| modal_open.set(true)>
                        "Import Data"
                    </Button>
                </div>
            </header>

            <Modal is_open=modal_open title="Import Data">
                <div class="space-y-4">
                    <div>
                        <label class="block text-sm font-medium text-zinc-400 mb-2">
                            "Campaign Name:"
                        </label>
                        <Input value=draft_name placeholder="Enter campaign name" required=true />
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
                            placeholder="Enter campaign content"
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
                            required=true
                            class="w-full text-sm text-zinc-400 file:mr-3 file:px-3 file:py-1.5 file:rounded file:border-0 file:bg-zinc-700 file:text-zinc-200"
                            on:change=handle_file
                        />
                    </div>
                    <Button
                        class="w-full"
                        disabled=Signal::derive(move || !can_submit.get())
                        on_click=handle_submit
                    >
                        "Process"
                    </Button>
                </div>
            </Modal>

            <section class="flex flex-wrap gap-4">
                <StatCard
                    label="Total Count"
                    value=format_count(SNAPSHOT_TOTAL)
                    detail="+15,000 today"
                />
                <StatCard
                    label="Delivered"
                    value=format_count(SNAPSHOT_DELIVERED)
                    detail="+10,000 today"
                />
                <StatCard
                    label="Not Delivered"
                    value=format_count(not_delivered)
                    detail="Follow-up action required"
                />
                <StatCard
                    label="Interested"
                    value=format_count(SNAPSHOT_INTERESTED)
                    detail="+2,000 today"
                />
                <StatCard
                    label="Not Interested"
                    value=format_count(SNAPSHOT_NOT_INTERESTED)
                    detail="-500 today"
                />
                <StatCard
                    label="No Response"
                    value=format_count(no_response)
                    detail="+7,500 today"
                />
            </section>

            <section class="flex flex-wrap gap-4">
                <ChannelBars
                    title="Campaign Reach"
                    rows={CHANNEL_REACH
                        .iter()
                        .map(|(label, reach, _, color)| (*label, *reach, *color))
                        .collect::<Vec<_>>()}
                />
                <ChannelBars
                    title="Delivered by Channel"
                    rows={CHANNEL_REACH
                        .iter()
                        .map(|(label, _, delivered, color)| (*label, *delivered, *color))
                        .collect::<Vec<_>>()}
                />
            </section>

            <section class="bg-zinc-900 border border-zinc-800 rounded-lg overflow-hidden">
                <div class="px-4 py-3 border-b border-zinc-800">
                    <h2 class="text-lg font-semibold text-white">"Imported Campaigns"</h2>
                </div>
                <div class="overflow-x-auto">
                    <table class="w-full text-sm">
                        <thead>
                            <tr class="border-b border-zinc-800 text-zinc-400">
                                <th class="text-left py-2 px-4">"Campaign Name"</th>
                                <th class="text-left py-2 px-4">"Date and Time"</th>
                                <th class="text-left py-2 px-4">"Content"</th>
                                <th class="text-left py-2 px-4">"Uploaded File"</th>
                                <th class="text-left py-2 px-4">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || filtered.get().into_iter().map(|import| {
                                view! {
                                    <tr class="border-b border-zinc-800/50 text-zinc-200">
                                        <td class="py-2 px-4 font-medium">{import.name}</td>
                                        <td class="py-2 px-4">{format_timestamp(import.scheduled_at)}</td>
                                        <td class="py-2 px-4 text-zinc-400">{import.content}</td>
                                        <td class="py-2 px-4 text-zinc-400">{import.file_name}</td>
                                        <td class="py-2 px-4">
                                            <div class="flex gap-2">
                                                <button
                                                    class="p-1.5 rounded text-zinc-400 hover:text-white hover:bg-zinc-800 transition-colors"
                                                    title="Download"
                                                >
                                                    <Icon icon=DOWNLOAD_SIMPLE size="16px" />
                                                </button>
                                                <button
                                                    class="p-1.5 rounded text-zinc-400 hover:text-white hover:bg-zinc-800 transition-colors"
                                                    title="Edit"
                                                >
                                                    <Icon icon=PENCIL_SIMPLE size="16px" />
                                                </button>
                                            </div>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                    <Show when=move || filtered.get().is_empty()>
                        <div class="text-center py-8 text-zinc-500">
                            "No imports in this date range"
                        </div>
                    </Show>
                </div>
            </section>
        </div>
    }
}

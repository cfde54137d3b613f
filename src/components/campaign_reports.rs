//! Bulk Link Reports Page
//!
//! Multi-channel campaigns built from an uploaded customer list. Records are
//! append-only; the table shows the customer count rather than the list.

use chrono::{Local, Utc};
use leptos::ev;
use leptos::prelude::*;

use crate::components::date_range_picker::DateRangePicker;
use crate::components::design_system::{Badge, BadgeVariant, Button, Input, Modal};
use crate::services::notification_service::{show_error, show_success};
use crate::services::recipients::parse_recipient_list;
use crate::services::reporting::{filter_by_range, DateRange};
use crate::services::store::{use_campaign_stores, BulkCampaign, BulkStatus, Channel};
use crate::utils::files::read_text_file;
use crate::utils::formatting::format_timestamp;

#[component]
pub fn CampaignReports() -> impl IntoView {
    let stores = use_campaign_stores();

    let start_date = RwSignal::new(Local::now().date_naive());
    let end_date = RwSignal::new(Local::now().date_naive());
    let modal_open = RwSignal::new(false);

    // Campaign draft under edit in the modal
    let draft_name = RwSignal::new(String::new());
    let draft_channels = RwSignal::new(Vec::<Channel>::new());
    let draft_message = RwSignal::new(String::new());
    let draft_customers = RwSignal::new(Vec::<String>::new());
    let reading_file = RwSignal::new(false);

    let filtered = Signal::derive(move || {
        let range = DateRange::new(start_date.get(), end_date.get());
        filter_by_range(&stores.bulk.get(), &range)
    });

    let can_submit = Signal::derive(move || {
        !draft_name.get().trim().is_empty()
            && !draft_message.get().trim().is_empty()
            && !reading_file.get()
    });

    let toggle_channel = move |channel: Channel| {
        draft_channels.update(|channels| {
            if let Some(pos) = channels.iter().position(|c| *c == channel) {
                channels.remove(pos);
            } else {
                channels.push(channel);
            }
        });
    };

    let handle_upload = move |evt: ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&evt);
        let Some(file) = input.files().and_then(|list| list.get(0)) else {
            return;
        };
        reading_file.set(true);
        read_text_file(file, move |result| {
            match result {
                Ok(text) => draft_customers.set(parse_recipient_list(&text)),
                Err(err) => {
                    log::error!("customer upload failed: {err}");
                    show_error("Upload failed", Some(&err));
                }
            }
            reading_file.set(false);
        });
    };

    let handle_submit = move |_: ev::MouseEvent| {
        if !can_submit.get() {
            return;
        }

        stores.add_bulk(BulkCampaign::new(
            draft_name.get().trim().to_string(),
            draft_channels.get(),
            draft_message.get(),
            draft_customers.get(),
            Utc::now(),
        ));
        show_success("Campaign created", None);

        draft_name.set(String::new());
        draft_channels.set(Vec::new());
        draft_message.set(String::new());
        draft_customers.set(Vec::new());
        modal_open.set(false);
    };

    view! {
        <div class="p-8 space-y-6">
            <header class="flex flex-wrap items-center justify-between gap-4">
                <h1 class="text-2xl font-bold text-white">"Campaign Reports"</h1>
                <div class="flex flex-wrap items-center gap-4">
                    <DateRangePicker start=start_date end=end_date />
                    <Button on_click=move |_| modal_open.set(true)>
                        "Create Campaign"
                    </Button>
                </div>
            </header>

            <Modal is_open=modal_open title="Create Campaign">
                <div class="space-y-4">
                    <div>
                        <label class="block text-sm font-medium text-zinc-400 mb-2">
                            "Campaign Name:"
                        </label>
                        <Input value=draft_name required=true />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-zinc-400 mb-2">
                            "Channels:"
                        </label>
                        <div class="flex gap-4">
                            {Channel::all().into_iter().map(|channel| {
                                view! {
                                    <label class="flex items-center gap-2 text-sm text-zinc-300 cursor-pointer">
                                        <input
                                            type="checkbox"
                                            class="accent-purple-600"
                                            prop:checked=move || draft_channels.get().contains(&channel)
                                            on:change=move |_| toggle_channel(channel)
                                        />
                                        {channel.label()}
                                    </label>
                                }
                            }).collect_view()}
                        </div>
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-zinc-400 mb-2">
                            "Message Content:"
                        </label>
                        <textarea
                            class="w-full p-2 rounded bg-zinc-950 text-white border border-zinc-700 focus:border-purple-500 focus:outline-none resize-none"
                            rows="4"
                            required=true
                            prop:value=move || draft_message.get()
                            on:input=move |evt| draft_message.set(event_target_value(&evt))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-zinc-400 mb-2">
                            "Upload Customer Data:"
                        </label>
                        <input
                            type="file"
                            accept=".txt, .csv"
                            class="w-full text-sm text-zinc-400 file:mr-3 file:px-3 file:py-1.5 file:rounded file:border-0 file:bg-zinc-700 file:text-zinc-200 disabled:opacity-50"
                            disabled=move || reading_file.get()
                            on:change=handle_upload
                        />
                        <p class="text-xs text-zinc-500 mt-1">
                            {move || format!("{} customers loaded", draft_customers.get().len())}
                        </p>
                    </div>
                    <Button
                        class="w-full"
                        disabled=Signal::derive(move || !can_submit.get())
                        on_click=handle_submit
                    >
                        "Create Campaign"
                    </Button>
                </div>
            </Modal>

            <section class="bg-zinc-900 border border-zinc-800 rounded-lg overflow-hidden">
                <div class="px-4 py-3 border-b border-zinc-800">
                    <h2 class="text-lg font-semibold text-white">"Campaigns"</h2>
                </div>
                <div class="overflow-x-auto">
                    <table class="w-full text-sm">
                        <thead>
                            <tr class="border-b border-zinc-800 text-zinc-400">
                                <th class="text-left py-2 px-4">"Campaign Name"</th>
                                <th class="text-left py-2 px-4">"Channels"</th>
                                <th class="text-right py-2 px-4">"Customers"</th>
                                <th class="text-left py-2 px-4">"Message Content"</th>
                                <th class="text-left py-2 px-4">"Status"</th>
                                <th class="text-left py-2 px-4">"Date Created"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || filtered.get().into_iter().map(|campaign| {
                                let badge = match campaign.status {
                                    BulkStatus::InProgress => BadgeVariant::Warning,
                                    BulkStatus::Completed => BadgeVariant::Success,
                                };
                                view! {
                                    <tr class="border-b border-zinc-800/50 text-zinc-200">
                                        <td class="py-2 px-4 font-medium">{campaign.name.clone()}</td>
                                        <td class="py-2 px-4">{campaign.channel_list()}</td>
                                        <td class="py-2 px-4 text-right">
                                            {format!("{} Customers", campaign.customers.len())}
                                        </td>
                                        <td class="py-2 px-4 text-zinc-400">{campaign.message.clone()}</td>
                                        <td class="py-2 px-4">
                                            <Badge variant=badge>{campaign.status.label()}</Badge>
                                        </td>
                                        <td class="py-2 px-4">{format_timestamp(campaign.created_at)}</td>
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
            </section>
        </div>
    }
}

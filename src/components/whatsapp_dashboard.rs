//! WhatsApp Analytics Page
//!
//! Single-recipient sends with a per-row status lifecycle. The summary cards
//! are recomputed from the date-filtered message list on every change, so a
//! message moving from Delivered to Interested never double-counts.

use chrono::{Local, Utc};
use leptos::ev;
use leptos::prelude::*;

use crate::components::date_range_picker::DateRangePicker;
use crate::components::design_system::{
    Badge, BadgeVariant, Button, ButtonVariant, Input, Modal, StatCard,
};
use crate::services::notification_service::show_success;
use crate::services::reporting::{filter_by_range, DateRange, WhatsAppSummary};
use crate::services::store::{use_campaign_stores, MessageStatus, WhatsAppMessage};
use crate::utils::formatting::format_timestamp;

fn status_badge(status: MessageStatus) -> BadgeVariant {
    match status {
        MessageStatus::Sent => BadgeVariant::Default,
        MessageStatus::Delivered => BadgeVariant::Info,
        MessageStatus::Interested => BadgeVariant::Success,
        MessageStatus::NotInterested => BadgeVariant::Danger,
    }
}

#[component]
pub fn WhatsAppDashboard() -> impl IntoView {
    let stores = use_campaign_stores();

    let start_date = RwSignal::new(Local::now().date_naive());
    let end_date = RwSignal::new(Local::now().date_naive());
    let modal_open = RwSignal::new(false);

    // Message draft under edit in the modal
    let draft_content = RwSignal::new(String::new());
    let draft_recipient = RwSignal::new(String::new());

    let filtered = Signal::derive(move || {
        let range = DateRange::new(start_date.get(), end_date.get());
        filter_by_range(&stores.whatsapp.get(), &range)
    });
    let summary = Signal::derive(move || WhatsAppSummary::from_messages(&filtered.get()));

    let can_submit = Signal::derive(move || {
        !draft_content.get().trim().is_empty() && !draft_recipient.get().trim().is_empty()
    });

    let handle_submit = move |_: ev::MouseEvent| {
        if !can_submit.get() {
            return;
        }

        stores.add_whatsapp(WhatsAppMessage::new(
            draft_content.get(),
            draft_recipient.get().trim().to_string(),
            Utc::now(),
        ));
        show_success("WhatsApp message sent", None);

        draft_content.set(String::new());
        draft_recipient.set(String::new());
        modal_open.set(false);
    };

    view! {
        <div class="p-8 space-y-6">
            <header class="flex flex-wrap items-center justify-between gap-4">
                <h1 class="text-2xl font-bold text-white">"WhatsApp Analytics"</h1>
                <div class="flex flex-wrap items-center gap-4">
                    <DateRangePicker start=start_date end=end_date />
                    <Button on_click=move |_| modal_open.set(true)>
                        "Send WhatsApp Message"
                    </Button>
                </div>
            </header>

            <Modal is_open=modal_open title="Send WhatsApp Message">
                <div class="space-y-4">
                    <div>
                        <label class="block text-sm font-medium text-zinc-400 mb-2">
                            "Message Content:"
                        </label>
                        <textarea
                            class="w-full p-2 rounded bg-zinc-950 text-white border border-zinc-700 focus:border-purple-500 focus:outline-none resize-none"
                            rows="4"
                            required=true
                            placeholder="Enter message content"
                            prop:value=move || draft_content.get()
                            on:input=move |evt| draft_content.set(event_target_value(&evt))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-zinc-400 mb-2">
                            "Recipient Number (Including country code):"
                        </label>
                        <Input value=draft_recipient required=true />
                    </div>
                    <Button
                        class="w-full"
                        disabled=Signal::derive(move || !can_submit.get())
                        on_click=handle_submit
                    >
                        "Send"
                    </Button>
                </div>
            </Modal>

            <section class="flex flex-wrap gap-4">
                <StatCard
                    label="Total Messages Sent"
                    value=Signal::derive(move || summary.get().sent.to_string())
                />
                <StatCard
                    label="Total Delivered"
                    value=Signal::derive(move || summary.get().delivered.to_string())
                />
                <StatCard
                    label="Interested"
                    value=Signal::derive(move || summary.get().interested.to_string())
                />
                <StatCard
                    label="Not Interested"
                    value=Signal::derive(move || summary.get().not_interested.to_string())
                />
            </section>

            <section class="bg-zinc-900 border border-zinc-800 rounded-lg overflow-hidden">
                <div class="overflow-x-auto">
                    <table class="w-full text-sm">
                        <thead>
                            <tr class="border-b border-zinc-800 text-zinc-400">
                                <th class="text-left py-2 px-4">"Message Content"</th>
                                <th class="text-left py-2 px-4">"Recipient"</th>
                                <th class="text-left py-2 px-4">"Status"</th>
                                <th class="text-left py-2 px-4">"Timestamp"</th>
                                <th class="text-left py-2 px-4">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || filtered.get().into_iter().map(|message| {
                                let id = message.id;
                                view! {
                                    <tr class="border-b border-zinc-800/50 text-zinc-200">
                                        <td class="py-2 px-4 text-zinc-400">{message.content}</td>
                                        <td class="py-2 px-4 font-medium">{message.recipient}</td>
                                        <td class="py-2 px-4">
                                            <Badge variant=status_badge(message.status)>
                                                {message.status.label()}
                                            </Badge>
                                        </td>
                                        <td class="py-2 px-4">{format_timestamp(message.sent_at)}</td>
                                        <td class="py-2 px-4">
                                            <div class="flex gap-1">
                                                {[
                                                    MessageStatus::Delivered,
                                                    MessageStatus::Interested,
                                                    MessageStatus::NotInterested,
                                                ].into_iter().map(|status| {
                                                    view! {
                                                        <Button
                                                            variant=ButtonVariant::Secondary
                                                            class="text-xs px-2 py-1"
                                                            on_click=move |_| stores.set_whatsapp_status(id, status)
                                                        >
                                                            {status.label()}
                                                        </Button>
                                                    }
                                                }).collect_view()}
                                            </div>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                    <Show when=move || filtered.get().is_empty()>
                        <div class="text-center py-8 text-zinc-500">
                            "No messages in this date range"
                        </div>
                    </Show>
                </div>
            </section>
        </div>
    }
}

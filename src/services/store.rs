//! Campaign Record Store
//!
//! In-memory ordered lists of campaign records, one per channel, held in
//! signals and provided through context. Nothing here survives a reload;
//! every mutation happens synchronously inside a UI event handler.

use chrono::{DateTime, TimeZone, Utc};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::services::delivery::{simulate_delivery, DeliveryRecord, OutcomeProvider};
use crate::services::reporting::Timestamped;

// ============================================================================
// Channels
// ============================================================================

/// Outbound channel a campaign targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Sms,
    Ivr,
    WhatsApp,
}

impl Channel {
    pub fn label(&self) -> &'static str {
        match self {
            Channel::Sms => "SMS",
            Channel::Ivr => "IVR",
            Channel::WhatsApp => "WhatsApp",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![Channel::Sms, Channel::Ivr, Channel::WhatsApp]
    }
}

// ============================================================================
// SMS
// ============================================================================

/// One SMS campaign. Immutable once sent; the summary counters are fixed at
/// creation from the simulated delivery report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmsCampaign {
    pub name: String,
    pub message: String,
    pub recipients: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub total_sent: u32,
    pub delivered: u32,
    pub interested: u32,
    pub not_interested: u32,
    pub delivery: Vec<DeliveryRecord>,
}

impl SmsCampaign {
    /// Simulate delivery to every recipient and fold the report into the
    /// campaign counters. A recipient only counts as interested when the
    /// message was also delivered.
    pub fn send(
        name: String,
        message: String,
        recipients: Vec<String>,
        created_at: DateTime<Utc>,
        provider: &mut dyn OutcomeProvider,
    ) -> Self {
        let delivery = simulate_delivery(&recipients, provider);
        let total_sent = delivery.len() as u32;
        let delivered = delivery.iter().filter(|r| r.delivered).count() as u32;
        let interested = delivery
            .iter()
            .filter(|r| r.delivered && r.interested)
            .count() as u32;
        let not_interested = delivered - interested;

        Self {
            name,
            message,
            recipients,
            created_at,
            total_sent,
            delivered,
            interested,
            not_interested,
            delivery,
        }
    }
}

impl Timestamped for SmsCampaign {
    fn timestamp(&self) -> DateTime<Utc> {
        self.created_at
    }
}

// ============================================================================
// IVR
// ============================================================================

/// Per-row outcome action reported against an IVR campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IvrAction {
    Attended,
    Interested,
    NotInterested,
}

impl IvrAction {
    pub fn label(&self) -> &'static str {
        match self {
            IvrAction::Attended => "Attended",
            IvrAction::Interested => "Interested",
            IvrAction::NotInterested => "Not Interested",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            IvrAction::Attended,
            IvrAction::Interested,
            IvrAction::NotInterested,
        ]
    }
}

/// Running call counters for one IVR campaign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IvrStats {
    pub total_calls: u32,
    pub attended_calls: u32,
    pub interested: u32,
    pub not_interested: u32,
    pub double_sms: u32,
    pub telecaller_assigned: u32,
}

impl IvrStats {
    /// Record one call outcome. Each press reports exactly one attended
    /// call; an interested call queues a follow-up SMS pair, a
    /// not-interested call queues a telecaller assignment. Keeps
    /// `total_calls >= attended_calls >= interested + not_interested`.
    pub fn record(&mut self, action: IvrAction) {
        self.total_calls += 1;
        self.attended_calls += 1;
        match action {
            IvrAction::Attended => {}
            IvrAction::Interested => {
                self.interested += 1;
                self.double_sms += 1;
            }
            IvrAction::NotInterested => {
                self.not_interested += 1;
                self.telecaller_assigned += 1;
            }
        }
    }
}

/// One IVR campaign row. The uploaded spreadsheet is never parsed; only its
/// name is kept for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IvrCampaign {
    pub id: Uuid,
    pub name: String,
    pub scheduled_at: DateTime<Utc>,
    pub content: String,
    pub file_name: String,
    pub stats: IvrStats,
}

impl IvrCampaign {
    pub fn new(
        name: String,
        scheduled_at: DateTime<Utc>,
        content: String,
        file_name: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            scheduled_at,
            content,
            file_name: file_name.unwrap_or_else(|| "No file uploaded".to_string()),
            stats: IvrStats::default(),
        }
    }
}

impl Timestamped for IvrCampaign {
    fn timestamp(&self) -> DateTime<Utc> {
        self.scheduled_at
    }
}

// ============================================================================
// WhatsApp
// ============================================================================

/// Lifecycle of one WhatsApp message. Interested/NotInterested are recipient
/// responses and imply the message was delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageStatus {
    Sent,
    Delivered,
    Interested,
    NotInterested,
}

impl MessageStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MessageStatus::Sent => "Sent",
            MessageStatus::Delivered => "Delivered",
            MessageStatus::Interested => "Interested",
            MessageStatus::NotInterested => "Not Interested",
        }
    }

    pub fn is_delivered(&self) -> bool {
        !matches!(self, MessageStatus::Sent)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhatsAppMessage {
    pub id: Uuid,
    pub content: String,
    pub recipient: String,
    pub status: MessageStatus,
    pub sent_at: DateTime<Utc>,
}

impl WhatsAppMessage {
    pub fn new(content: String, recipient: String, sent_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            recipient,
            status: MessageStatus::Sent,
            sent_at,
        }
    }
}

impl Timestamped for WhatsAppMessage {
    fn timestamp(&self) -> DateTime<Utc> {
        self.sent_at
    }
}

// ============================================================================
// Bulk link reports
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkStatus {
    InProgress,
    Completed,
}

impl BulkStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BulkStatus::InProgress => "In Progress",
            BulkStatus::Completed => "Completed",
        }
    }
}

/// A multi-channel bulk campaign created from the reports page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkCampaign {
    pub id: Uuid,
    pub name: String,
    pub channels: Vec<Channel>,
    pub message: String,
    pub customers: Vec<String>,
    pub status: BulkStatus,
    pub created_at: DateTime<Utc>,
}

impl BulkCampaign {
    pub fn new(
        name: String,
        channels: Vec<Channel>,
        message: String,
        customers: Vec<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            channels,
            message,
            customers,
            status: BulkStatus::InProgress,
            created_at,
        }
    }

    pub fn channel_list(&self) -> String {
        self.channels
            .iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Timestamped for BulkCampaign {
    fn timestamp(&self) -> DateTime<Utc> {
        self.created_at
    }
}

// ============================================================================
// Overview imports
// ============================================================================

/// A data import recorded from the overview page. Spreadsheets are accepted
/// by the picker but only the file name is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportedCampaign {
    pub id: Uuid,
    pub name: String,
    pub scheduled_at: DateTime<Utc>,
    pub content: String,
    pub file_name: String,
}

impl ImportedCampaign {
    pub fn new(
        name: String,
        scheduled_at: DateTime<Utc>,
        content: String,
        file_name: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            scheduled_at,
            content,
            file_name,
        }
    }
}

impl Timestamped for ImportedCampaign {
    fn timestamp(&self) -> DateTime<Utc> {
        self.scheduled_at
    }
}

// ============================================================================
// Stores
// ============================================================================

/// Demo SMS campaigns shown on first load: (name, message, recipients,
/// (year, month, day)).
const DEMO_SMS_CAMPAIGNS: &[(&str, &str, &[&str], (i32, u32, u32))] = &[
    (
        "Campaign 1",
        "Welcome to our service! Enjoy 20% off.",
        &["1234567890", "9876543210", "1122334455"],
        (2024, 11, 1),
    ),
    (
        "Campaign 2",
        "Hurry up! Limited time offer!",
        &["2233445566", "9988776655", "5566778899"],
        (2024, 11, 10),
    ),
];

/// Demo imports shown on the overview page: (name, content, file name,
/// (year, month, day, hour, minute)).
const DEMO_IMPORTS: &[(&str, &str, &str, (i32, u32, u32, u32, u32))] = &[
    ("Campaign A", "Welcome SMS", "welcome_sms.xlsx", (2024, 11, 1, 10, 0)),
    ("Campaign B", "Promotional Offer", "promo_offer.xlsx", (2024, 11, 2, 14, 30)),
    ("Campaign C", "Feedback Request", "feedback.xlsx", (2024, 11, 3, 9, 15)),
    ("Campaign D", "Event Invitation", "event_invite.xlsx", (2024, 11, 4, 13, 0)),
    ("Campaign E", "Customer Survey", "survey.xlsx", (2024, 11, 5, 11, 45)),
    ("Campaign F", "Service Reminder", "reminder.xlsx", (2024, 11, 6, 16, 0)),
];

fn demo_timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Per-channel record lists. Signals are `Copy`, so the whole container is
/// cheap to pass into event handlers.
#[derive(Clone, Copy)]
pub struct CampaignStores {
    pub sms: RwSignal<Vec<SmsCampaign>>,
    pub ivr: RwSignal<Vec<IvrCampaign>>,
    pub whatsapp: RwSignal<Vec<WhatsAppMessage>>,
    pub bulk: RwSignal<Vec<BulkCampaign>>,
    pub imports: RwSignal<Vec<ImportedCampaign>>,
}

impl CampaignStores {
    pub fn new() -> Self {
        Self {
            sms: RwSignal::new(Vec::new()),
            ivr: RwSignal::new(Vec::new()),
            whatsapp: RwSignal::new(Vec::new()),
            bulk: RwSignal::new(Vec::new()),
            imports: RwSignal::new(Vec::new()),
        }
    }

    /// Stores pre-filled with the demo SMS campaigns and overview imports.
    pub fn seeded(provider: &mut dyn OutcomeProvider) -> Self {
        let stores = Self::new();

        for (name, message, recipients, (year, month, day)) in DEMO_SMS_CAMPAIGNS {
            let recipients: Vec<String> = recipients.iter().map(|r| r.to_string()).collect();
            stores.add_sms(SmsCampaign::send(
                name.to_string(),
                message.to_string(),
                recipients,
                demo_timestamp(*year, *month, *day, 9, 0),
                provider,
            ));
        }

        for (name, content, file_name, (year, month, day, hour, minute)) in DEMO_IMPORTS {
            stores.add_import(ImportedCampaign::new(
                name.to_string(),
                demo_timestamp(*year, *month, *day, *hour, *minute),
                content.to_string(),
                file_name.to_string(),
            ));
        }

        stores
    }

    pub fn add_sms(&self, campaign: SmsCampaign) {
        self.sms.update(|list| list.push(campaign));
    }

    pub fn add_ivr(&self, campaign: IvrCampaign) {
        self.ivr.update(|list| list.push(campaign));
    }

    pub fn add_whatsapp(&self, message: WhatsAppMessage) {
        self.whatsapp.update(|list| list.push(message));
    }

    pub fn add_bulk(&self, campaign: BulkCampaign) {
        self.bulk.update(|list| list.push(campaign));
    }

    pub fn add_import(&self, import: ImportedCampaign) {
        self.imports.update(|list| list.push(import));
    }

    /// Fold one call outcome into the stats of the matching IVR campaign.
    pub fn record_ivr_action(&self, id: Uuid, action: IvrAction) {
        self.ivr.update(|list| {
            if let Some(campaign) = list.iter_mut().find(|c| c.id == id) {
                campaign.stats.record(action);
            } else {
                log::warn!("ivr action {:?} for unknown campaign {id}", action);
            }
        });
    }

    /// Overwrite the status of the matching WhatsApp message.
    pub fn set_whatsapp_status(&self, id: Uuid, status: MessageStatus) {
        self.whatsapp.update(|list| {
            if let Some(message) = list.iter_mut().find(|m| m.id == id) {
                message.status = status;
            } else {
                log::warn!("status update for unknown message {id}");
            }
        });
    }
}

pub fn provide_campaign_stores() {
    let mut provider = crate::services::delivery::RandomOutcomes::new();
    provide_context(CampaignStores::seeded(&mut provider));
}

pub fn use_campaign_stores() -> CampaignStores {
    expect_context::<CampaignStores>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::delivery::{DeliveryOutcome, FixedOutcomes};

    fn numbers(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sms_send_counts_from_report() {
        let mut provider = FixedOutcomes::new(vec![
            DeliveryOutcome {
                delivered: true,
                interested: true,
            },
            DeliveryOutcome {
                delivered: true,
                interested: false,
            },
            DeliveryOutcome {
                delivered: false,
                interested: false,
            },
        ]);
        let campaign = SmsCampaign::send(
            "Promo".to_string(),
            "Hello".to_string(),
            numbers(&["111", "222", "333"]),
            Utc::now(),
            &mut provider,
        );
        assert_eq!(campaign.total_sent, 3);
        assert_eq!(campaign.delivered, 2);
        assert_eq!(campaign.interested, 1);
        assert_eq!(campaign.not_interested, 1);
    }

    #[test]
    fn test_sms_send_promo_scenario() {
        let mut provider = FixedOutcomes::all_interested();
        let campaign = SmsCampaign::send(
            "Promo".to_string(),
            "Hello".to_string(),
            numbers(&["111", "222"]),
            Utc::now(),
            &mut provider,
        );
        assert_eq!(campaign.total_sent, 2);
        assert!(campaign.delivered + campaign.not_interested <= 2);
        assert!(campaign.interested <= campaign.delivered);
    }

    #[test]
    fn test_sms_counter_invariants_hold_for_failures() {
        let mut provider = FixedOutcomes::all_failed();
        let campaign = SmsCampaign::send(
            "Promo".to_string(),
            "Hello".to_string(),
            numbers(&["111", "222"]),
            Utc::now(),
            &mut provider,
        );
        assert_eq!(campaign.total_sent, 2);
        assert_eq!(campaign.delivered, 0);
        assert_eq!(campaign.interested, 0);
        assert_eq!(campaign.not_interested, 0);
    }

    #[test]
    fn test_ivr_stats_record_attended() {
        let mut stats = IvrStats::default();
        stats.record(IvrAction::Attended);
        assert_eq!(stats.total_calls, 1);
        assert_eq!(stats.attended_calls, 1);
        assert_eq!(stats.interested, 0);
        assert_eq!(stats.not_interested, 0);
    }

    #[test]
    fn test_ivr_stats_record_interested_queues_double_sms() {
        let mut stats = IvrStats::default();
        stats.record(IvrAction::Interested);
        assert_eq!(stats.total_calls, 1);
        assert_eq!(stats.attended_calls, 1);
        assert_eq!(stats.interested, 1);
        assert_eq!(stats.double_sms, 1);
        assert_eq!(stats.telecaller_assigned, 0);
    }

    #[test]
    fn test_ivr_stats_record_not_interested_assigns_telecaller() {
        let mut stats = IvrStats::default();
        stats.record(IvrAction::NotInterested);
        assert_eq!(stats.total_calls, 1);
        assert_eq!(stats.attended_calls, 1);
        assert_eq!(stats.not_interested, 1);
        assert_eq!(stats.telecaller_assigned, 1);
        assert_eq!(stats.double_sms, 0);
    }

    #[test]
    fn test_ivr_stats_invariant_over_mixed_actions() {
        let mut stats = IvrStats::default();
        for action in [
            IvrAction::Attended,
            IvrAction::Interested,
            IvrAction::NotInterested,
            IvrAction::Interested,
        ] {
            stats.record(action);
        }
        assert_eq!(stats.total_calls, 4);
        assert!(stats.total_calls >= stats.attended_calls);
        assert!(stats.attended_calls >= stats.interested + stats.not_interested);
    }

    #[test]
    fn test_store_append_increases_length_by_one() {
        let stores = CampaignStores::new();
        assert_eq!(stores.sms.get_untracked().len(), 0);
        let mut provider = FixedOutcomes::all_interested();
        stores.add_sms(SmsCampaign::send(
            "Promo".to_string(),
            "Hello".to_string(),
            numbers(&["111"]),
            Utc::now(),
            &mut provider,
        ));
        assert_eq!(stores.sms.get_untracked().len(), 1);
    }

    #[test]
    fn test_record_ivr_action_targets_matching_row() {
        let stores = CampaignStores::new();
        let first = IvrCampaign::new("One".to_string(), Utc::now(), "hi".to_string(), None);
        let second = IvrCampaign::new("Two".to_string(), Utc::now(), "yo".to_string(), None);
        let second_id = second.id;
        stores.add_ivr(first);
        stores.add_ivr(second);

        stores.record_ivr_action(second_id, IvrAction::Interested);

        let list = stores.ivr.get_untracked();
        assert_eq!(list[0].stats.total_calls, 0);
        assert_eq!(list[1].stats.total_calls, 1);
        assert_eq!(list[1].stats.interested, 1);
    }

    #[test]
    fn test_set_whatsapp_status_overwrites() {
        let stores = CampaignStores::new();
        let message = WhatsAppMessage::new("hi".to_string(), "111".to_string(), Utc::now());
        let id = message.id;
        stores.add_whatsapp(message);

        stores.set_whatsapp_status(id, MessageStatus::Delivered);
        assert_eq!(
            stores.whatsapp.get_untracked()[0].status,
            MessageStatus::Delivered
        );

        stores.set_whatsapp_status(id, MessageStatus::Interested);
        assert_eq!(
            stores.whatsapp.get_untracked()[0].status,
            MessageStatus::Interested
        );
    }

    #[test]
    fn test_seeded_stores_contain_demo_data() {
        let mut provider = FixedOutcomes::all_interested();
        let stores = CampaignStores::seeded(&mut provider);
        let sms = stores.sms.get_untracked();
        assert_eq!(sms.len(), 2);
        assert_eq!(sms[0].name, "Campaign 1");
        assert_eq!(sms[0].created_at.date_naive().to_string(), "2024-11-01");
        assert_eq!(sms[1].name, "Campaign 2");
        assert_eq!(sms[1].created_at.date_naive().to_string(), "2024-11-10");
        assert_eq!(stores.imports.get_untracked().len(), 6);
    }

    #[test]
    fn test_bulk_campaign_channel_list() {
        let campaign = BulkCampaign::new(
            "Diwali Push".to_string(),
            vec![Channel::Sms, Channel::WhatsApp],
            "offer".to_string(),
            numbers(&["a", "b"]),
            Utc::now(),
        );
        assert_eq!(campaign.channel_list(), "SMS, WhatsApp");
        assert_eq!(campaign.status, BulkStatus::InProgress);
    }

    #[test]
    fn test_status_enums_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&MessageStatus::NotInterested).expect("serializable"),
            "\"not_interested\""
        );
        assert_eq!(
            serde_json::to_string(&Channel::WhatsApp).expect("serializable"),
            "\"whats_app\""
        );
        assert_eq!(
            serde_json::to_string(&IvrAction::Attended).expect("serializable"),
            "\"attended\""
        );
    }

    #[test]
    fn test_message_status_delivery_classification() {
        assert!(!MessageStatus::Sent.is_delivered());
        assert!(MessageStatus::Delivered.is_delivered());
        assert!(MessageStatus::Interested.is_delivered());
        assert!(MessageStatus::NotInterested.is_delivered());
    }
}

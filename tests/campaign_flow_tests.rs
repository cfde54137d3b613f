//! Campaign Flow Tests
//!
//! Browser-side checks over the store intents and channel enums, using
//! wasm-bindgen-test. Pure-logic coverage lives in the colocated unit test
//! modules; these exercise the same paths under the wasm target.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use campaign_console_frontend::services::delivery::FixedOutcomes;
use campaign_console_frontend::services::reporting::{
    filter_by_range, DateRange, SmsSummary, WhatsAppSummary,
};
use campaign_console_frontend::services::store::{
    CampaignStores, Channel, IvrAction, IvrCampaign, MessageStatus, SmsCampaign, WhatsAppMessage,
};
use chrono::{NaiveDate, TimeZone, Utc};

wasm_bindgen_test_configure!(run_in_browser);

fn at(year: i32, month: u32, day: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

#[wasm_bindgen_test]
fn test_channel_labels() {
    assert_eq!(Channel::Sms.label(), "SMS");
    assert_eq!(Channel::Ivr.label(), "IVR");
    assert_eq!(Channel::WhatsApp.label(), "WhatsApp");
    assert_eq!(Channel::all().len(), 3);
}

#[wasm_bindgen_test]
fn test_ivr_action_labels() {
    for action in IvrAction::all() {
        assert!(!action.label().is_empty());
    }
}

#[wasm_bindgen_test]
fn test_sms_campaign_append_and_summarize() {
    let stores = CampaignStores::new();
    let mut provider = FixedOutcomes::all_interested();
    stores.add_sms(SmsCampaign::send(
        "Promo".to_string(),
        "Hello".to_string(),
        vec!["111".to_string(), "222".to_string()],
        at(2024, 11, 5),
        &mut provider,
    ));

    let campaigns = stores.sms.get_untracked();
    assert_eq!(campaigns.len(), 1);

    let summary = SmsSummary::from_campaigns(&campaigns);
    assert_eq!(summary.total_sent, 2);
    assert_eq!(summary.delivered, 2);
    assert_eq!(summary.interested, 2);
}

#[wasm_bindgen_test]
fn test_date_filter_excludes_out_of_range_rows() {
    let stores = CampaignStores::new();
    stores.add_ivr(IvrCampaign::new(
        "November".to_string(),
        at(2024, 11, 1),
        "hi".to_string(),
        None,
    ));
    stores.add_ivr(IvrCampaign::new(
        "December".to_string(),
        at(2024, 12, 1),
        "hi".to_string(),
        None,
    ));

    let range = DateRange::new(
        NaiveDate::from_ymd_opt(2024, 11, 1).expect("valid date"),
        NaiveDate::from_ymd_opt(2024, 11, 30).expect("valid date"),
    );
    let filtered = filter_by_range(&stores.ivr.get_untracked(), &range);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "November");
}

#[wasm_bindgen_test]
fn test_whatsapp_status_lifecycle_feeds_summary() {
    let stores = CampaignStores::new();
    let message = WhatsAppMessage::new("hi".to_string(), "111".to_string(), at(2024, 11, 5));
    let id = message.id;
    stores.add_whatsapp(message);

    stores.set_whatsapp_status(id, MessageStatus::Interested);

    let summary = WhatsAppSummary::from_messages(&stores.whatsapp.get_untracked());
    assert_eq!(summary.sent, 1);
    assert_eq!(summary.delivered, 1);
    assert_eq!(summary.interested, 1);
    assert_eq!(summary.not_interested, 0);
}

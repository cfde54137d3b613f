//! Date-Range Filtering and Summary Aggregation
//!
//! The analytics cards on every page are folds over the date-filtered record
//! list. Filtering is stable-order and inclusive on both ends; aggregation
//! is a pure function, so the cards recompute from scratch on every change
//! instead of drifting counters along. Percentage rates are `None` when the
//! denominator is zero and the views render that as "n/a".

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::services::store::{IvrCampaign, SmsCampaign, WhatsAppMessage};

/// Anything carrying a point-in-time the date filter can look at.
pub trait Timestamped {
    fn timestamp(&self) -> DateTime<Utc>;
}

/// Inclusive calendar-day range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn single_day(day: NaiveDate) -> Self {
        Self::new(day, day)
    }

    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        let day = timestamp.date_naive();
        self.start <= day && day <= self.end
    }
}

/// Stable-order subsequence of `records` whose timestamp falls inside
/// `range`. An empty result is valid.
pub fn filter_by_range<T: Timestamped + Clone>(records: &[T], range: &DateRange) -> Vec<T> {
    records
        .iter()
        .filter(|record| range.contains(record.timestamp()))
        .cloned()
        .collect()
}

/// Share of `part` in `total` as a percentage, or `None` when there is no
/// total to divide by.
pub fn rate_of(part: u32, total: u32) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(f64::from(part) / f64::from(total) * 100.0)
    }
}

/// "62.50% of total", or "n/a" when the rate is undefined.
pub fn format_rate(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("{rate:.2}% of total"),
        None => "n/a".to_string(),
    }
}

// ============================================================================
// Channel summaries
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SmsSummary {
    pub total_sent: u32,
    pub delivered: u32,
    pub interested: u32,
    pub not_interested: u32,
}

impl SmsSummary {
    pub fn from_campaigns(campaigns: &[SmsCampaign]) -> Self {
        campaigns.iter().fold(Self::default(), |mut acc, c| {
            acc.total_sent += c.total_sent;
            acc.delivered += c.delivered;
            acc.interested += c.interested;
            acc.not_interested += c.not_interested;
            acc
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IvrSummary {
    pub total_calls: u32,
    pub attended_calls: u32,
    pub interested: u32,
    pub not_interested: u32,
    pub double_sms: u32,
    pub telecaller_assigned: u32,
}

impl IvrSummary {
    pub fn from_campaigns(campaigns: &[IvrCampaign]) -> Self {
        campaigns.iter().fold(Self::default(), |mut acc, c| {
            acc.total_calls += c.stats.total_calls;
            acc.attended_calls += c.stats.attended_calls;
            acc.interested += c.stats.interested;
            acc.not_interested += c.stats.not_interested;
            acc.double_sms += c.stats.double_sms;
            acc.telecaller_assigned += c.stats.telecaller_assigned;
            acc
        })
    }

    /// Share of `part` against all recorded calls in this summary.
    pub fn rate_of_total(&self, part: u32) -> Option<f64> {
        rate_of(part, self.total_calls)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WhatsAppSummary {
    pub sent: u32,
    pub delivered: u32,
    pub interested: u32,
    pub not_interested: u32,
}

impl WhatsAppSummary {
    pub fn from_messages(messages: &[WhatsAppMessage]) -> Self {
        use crate::services::store::MessageStatus;

        messages.iter().fold(Self::default(), |mut acc, m| {
            acc.sent += 1;
            if m.status.is_delivered() {
                acc.delivered += 1;
            }
            match m.status {
                MessageStatus::Interested => acc.interested += 1,
                MessageStatus::NotInterested => acc.not_interested += 1,
                _ => {}
            }
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::delivery::FixedOutcomes;
    use crate::services::store::{IvrAction, MessageStatus};
    use chrono::TimeZone;

    fn day(year: i32, month: u32, dayn: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, dayn).expect("valid date")
    }

    fn at(year: i32, month: u32, dayn: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, dayn, 12, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn sms(name: &str, created_at: DateTime<Utc>) -> SmsCampaign {
        let mut provider = FixedOutcomes::all_interested();
        SmsCampaign::send(
            name.to_string(),
            "hello".to_string(),
            vec!["111".to_string(), "222".to_string()],
            created_at,
            &mut provider,
        )
    }

    // ========================================================================
    // DateRange / filter_by_range
    // ========================================================================

    #[test]
    fn test_range_is_inclusive_on_both_ends() {
        let range = DateRange::new(day(2024, 11, 1), day(2024, 11, 10));
        assert!(range.contains(at(2024, 11, 1)));
        assert!(range.contains(at(2024, 11, 10)));
        assert!(!range.contains(at(2024, 10, 31)));
        assert!(!range.contains(at(2024, 11, 11)));
    }

    #[test]
    fn test_filter_keeps_exact_subset_in_order() {
        let records = vec![
            sms("a", at(2024, 11, 1)),
            sms("b", at(2024, 11, 5)),
            sms("c", at(2024, 11, 10)),
            sms("d", at(2024, 11, 4)),
        ];
        let range = DateRange::new(day(2024, 11, 2), day(2024, 11, 6));
        let filtered = filter_by_range(&records, &range);
        let names: Vec<_> = filtered.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["b", "d"]);
    }

    #[test]
    fn test_filter_full_range_is_identity() {
        let records = vec![sms("a", at(2024, 11, 1)), sms("b", at(2024, 11, 10))];
        let range = DateRange::new(NaiveDate::MIN, NaiveDate::MAX);
        assert_eq!(filter_by_range(&records, &range), records);
    }

    #[test]
    fn test_filter_single_day_between_records_is_empty() {
        let records = vec![sms("a", at(2024, 11, 1)), sms("b", at(2024, 11, 10))];
        let range = DateRange::single_day(day(2024, 11, 5));
        assert!(filter_by_range(&records, &range).is_empty());
    }

    #[test]
    fn test_aggregate_of_filtered_full_range_matches_aggregate() {
        let records = vec![sms("a", at(2024, 11, 1)), sms("b", at(2024, 11, 10))];
        let full = DateRange::new(NaiveDate::MIN, NaiveDate::MAX);
        assert_eq!(
            SmsSummary::from_campaigns(&filter_by_range(&records, &full)),
            SmsSummary::from_campaigns(&records)
        );
    }

    // ========================================================================
    // Rates
    // ========================================================================

    #[test]
    fn test_rate_of_zero_total_is_undefined() {
        assert_eq!(rate_of(5, 0), None);
        assert_eq!(format_rate(rate_of(5, 0)), "n/a");
    }

    #[test]
    fn test_rate_of_formats_two_decimals() {
        assert_eq!(format_rate(rate_of(1, 3)), "33.33% of total");
        assert_eq!(format_rate(rate_of(2, 4)), "50.00% of total");
    }

    // ========================================================================
    // Summaries
    // ========================================================================

    #[test]
    fn test_sms_summary_sums_all_counters() {
        let records = vec![sms("a", at(2024, 11, 1)), sms("b", at(2024, 11, 2))];
        let summary = SmsSummary::from_campaigns(&records);
        // Each fixed-outcome campaign delivers to both recipients.
        assert_eq!(summary.total_sent, 4);
        assert_eq!(summary.delivered, 4);
        assert_eq!(summary.interested, 4);
        assert_eq!(summary.not_interested, 0);
    }

    #[test]
    fn test_summaries_of_empty_input_are_zero() {
        assert_eq!(SmsSummary::from_campaigns(&[]), SmsSummary::default());
        assert_eq!(IvrSummary::from_campaigns(&[]), IvrSummary::default());
        assert_eq!(WhatsAppSummary::from_messages(&[]), WhatsAppSummary::default());
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let records = vec![sms("a", at(2024, 11, 1))];
        let first = SmsSummary::from_campaigns(&records);
        let second = SmsSummary::from_campaigns(&records);
        assert_eq!(first, second);
    }

    #[test]
    fn test_ivr_summary_folds_stats_across_campaigns() {
        let mut one = IvrCampaign::new("one".to_string(), at(2024, 11, 1), "hi".to_string(), None);
        one.stats.record(IvrAction::Attended);
        one.stats.record(IvrAction::Interested);
        let mut two = IvrCampaign::new("two".to_string(), at(2024, 11, 2), "yo".to_string(), None);
        two.stats.record(IvrAction::NotInterested);

        let summary = IvrSummary::from_campaigns(&[one, two]);
        assert_eq!(summary.total_calls, 3);
        assert_eq!(summary.attended_calls, 3);
        assert_eq!(summary.interested, 1);
        assert_eq!(summary.not_interested, 1);
        assert_eq!(summary.double_sms, 1);
        assert_eq!(summary.telecaller_assigned, 1);
    }

    #[test]
    fn test_ivr_rate_of_total_guarded() {
        let summary = IvrSummary::default();
        assert_eq!(summary.rate_of_total(0), None);

        let mut campaign =
            IvrCampaign::new("one".to_string(), at(2024, 11, 1), "hi".to_string(), None);
        campaign.stats.record(IvrAction::Attended);
        campaign.stats.record(IvrAction::Attended);
        campaign.stats.record(IvrAction::Interested);
        campaign.stats.record(IvrAction::NotInterested);
        let summary = IvrSummary::from_campaigns(&[campaign]);
        let rate = summary
            .rate_of_total(summary.interested)
            .expect("total is non-zero");
        assert!((rate - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_whatsapp_summary_counts_by_status() {
        let mut messages = vec![
            WhatsAppMessage::new("a".to_string(), "111".to_string(), at(2024, 11, 1)),
            WhatsAppMessage::new("b".to_string(), "222".to_string(), at(2024, 11, 1)),
            WhatsAppMessage::new("c".to_string(), "333".to_string(), at(2024, 11, 1)),
            WhatsAppMessage::new("d".to_string(), "444".to_string(), at(2024, 11, 1)),
        ];
        messages[1].status = MessageStatus::Delivered;
        messages[2].status = MessageStatus::Interested;
        messages[3].status = MessageStatus::NotInterested;

        let summary = WhatsAppSummary::from_messages(&messages);
        assert_eq!(summary.sent, 4);
        assert_eq!(summary.delivered, 3);
        assert_eq!(summary.interested, 1);
        assert_eq!(summary.not_interested, 1);
        assert!(summary.delivered >= summary.interested + summary.not_interested);
    }
}

//! Delivery Outcome Simulation
//!
//! There is no real gateway behind this console; per-recipient outcomes are
//! drawn from an `OutcomeProvider`. The default provider models an 80%
//! delivery rate with a 50% interest rate among delivered messages. Tests
//! inject a fixed provider instead of the random one.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Outcome decided for a single recipient. `interested` is only meaningful
/// when `delivered` is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryOutcome {
    pub delivered: bool,
    pub interested: bool,
}

/// Capability seam for deciding per-recipient outcomes.
pub trait OutcomeProvider {
    fn decide(&mut self, recipient: &str) -> DeliveryOutcome;
}

/// Default provider backed by a thread-local RNG.
pub struct RandomOutcomes<R: Rng> {
    rng: R,
}

impl RandomOutcomes<rand::rngs::ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl<R: Rng> OutcomeProvider for RandomOutcomes<R> {
    fn decide(&mut self, _recipient: &str) -> DeliveryOutcome {
        let delivered = self.rng.gen::<f64>() > 0.2;
        let interested = delivered && self.rng.gen::<f64>() > 0.5;
        DeliveryOutcome {
            delivered,
            interested,
        }
    }
}

/// Cycles through a fixed list of outcomes. Deterministic stand-in for
/// `RandomOutcomes` in tests.
pub struct FixedOutcomes {
    outcomes: Vec<DeliveryOutcome>,
    next: usize,
}

impl FixedOutcomes {
    pub fn new(outcomes: Vec<DeliveryOutcome>) -> Self {
        Self { outcomes, next: 0 }
    }

    /// Every recipient delivered and interested.
    pub fn all_interested() -> Self {
        Self::new(vec![DeliveryOutcome {
            delivered: true,
            interested: true,
        }])
    }

    /// Every recipient fails.
    pub fn all_failed() -> Self {
        Self::new(vec![DeliveryOutcome {
            delivered: false,
            interested: false,
        }])
    }
}

impl OutcomeProvider for FixedOutcomes {
    fn decide(&mut self, _recipient: &str) -> DeliveryOutcome {
        let outcome = self.outcomes[self.next % self.outcomes.len()];
        self.next += 1;
        outcome
    }
}

/// Per-recipient delivery record kept on an SMS campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    pub number: String,
    pub delivered: bool,
    pub interested: bool,
}

/// Decide an outcome for every recipient, in order.
pub fn simulate_delivery(
    recipients: &[String],
    provider: &mut dyn OutcomeProvider,
) -> Vec<DeliveryRecord> {
    recipients
        .iter()
        .map(|recipient| {
            let outcome = provider.decide(recipient);
            DeliveryRecord {
                number: recipient.clone(),
                delivered: outcome.delivered,
                interested: outcome.interested,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_simulate_delivery_preserves_order_and_length() {
        let recipients = numbers(&["111", "222", "333"]);
        let mut provider = FixedOutcomes::all_interested();
        let report = simulate_delivery(&recipients, &mut provider);
        assert_eq!(report.len(), 3);
        assert_eq!(report[0].number, "111");
        assert_eq!(report[1].number, "222");
        assert_eq!(report[2].number, "333");
    }

    #[test]
    fn test_simulate_delivery_empty_recipients() {
        let mut provider = FixedOutcomes::all_interested();
        assert!(simulate_delivery(&[], &mut provider).is_empty());
    }

    #[test]
    fn test_fixed_outcomes_cycle() {
        let mut provider = FixedOutcomes::new(vec![
            DeliveryOutcome {
                delivered: true,
                interested: false,
            },
            DeliveryOutcome {
                delivered: false,
                interested: false,
            },
        ]);
        let report = simulate_delivery(&numbers(&["1", "2", "3"]), &mut provider);
        assert!(report[0].delivered);
        assert!(!report[1].delivered);
        // Cycles back to the first outcome.
        assert!(report[2].delivered);
    }

    #[test]
    fn test_all_failed_marks_nothing_delivered() {
        let mut provider = FixedOutcomes::all_failed();
        let report = simulate_delivery(&numbers(&["1", "2"]), &mut provider);
        assert!(report.iter().all(|r| !r.delivered && !r.interested));
    }

    #[test]
    fn test_random_outcomes_never_interested_without_delivery() {
        let mut provider = RandomOutcomes::new();
        for i in 0..200 {
            let outcome = provider.decide(&i.to_string());
            if outcome.interested {
                assert!(outcome.delivered);
            }
        }
    }
}

use chrono::{Duration, TimeZone, Utc};
use orderpulse_core::models::{OrderStatus, SlaStatus, TrackedOrder};
use orderpulse_sla::evaluator::{self, SlaRules};
use orderpulse_sla::thresholds::SlaThresholdTable;
use orderpulse_sla::urgency_score;
use proptest::prelude::*;

fn arb_open_status() -> impl Strategy<Value = OrderStatus> {
    prop_oneof![
        Just(OrderStatus::PendingPayment),
        Just(OrderStatus::PaymentConfirmed),
        Just(OrderStatus::Processing),
        Just(OrderStatus::ReadyToShip),
        Just(OrderStatus::Shipped),
        Just(OrderStatus::FailedDelivery),
        Just(OrderStatus::Unrecognized),
    ]
}

fn arb_terminal_status() -> impl Strategy<Value = OrderStatus> {
    prop_oneof![Just(OrderStatus::Delivered), Just(OrderStatus::Cancelled)]
}

fn order_aged(status: OrderStatus, minutes_ago: i64) -> (TrackedOrder, chrono::DateTime<Utc>) {
    let now = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
    let entered = now - Duration::minutes(minutes_ago);
    let mut order = TrackedOrder::new("p", status, entered);
    order.payment_confirmed_at = Some(entered);
    order.processing_started_at = Some(entered);
    order.ready_to_ship_at = Some(entered);
    order.shipped_at = Some(entered);
    order.failed_delivery_at = Some(entered);
    order.delivered_at = Some(entered);
    order.cancelled_at = Some(entered);
    (order, now)
}

proptest! {
    #[test]
    fn terminal_orders_are_always_on_track(
        status in arb_terminal_status(),
        minutes_ago in 0i64..(1000 * 24 * 60),
    ) {
        let (order, now) = order_aged(status, minutes_ago);
        let result = evaluator::evaluate(&order, &SlaRules::default(), now);
        prop_assert_eq!(result.status, SlaStatus::OnTrack);
        prop_assert_eq!(result.days_in_stage, 0);
    }

    #[test]
    fn classification_partitions_open_orders(
        status in arb_open_status(),
        minutes_ago in 0i64..(60 * 24 * 60),
        expected in 1u32..=30,
    ) {
        let rules = SlaRules {
            thresholds: SlaThresholdTable::empty(expected),
            ..SlaRules::default()
        };
        let (order, now) = order_aged(status, minutes_ago);
        let result = evaluator::evaluate(&order, &rules, now);

        let days = result.days_in_stage;
        let breached = days > expected;
        let at_risk = !breached && days as f64 / expected as f64 >= 0.75;
        let on_track = !breached && !at_risk;

        prop_assert_eq!([breached, at_risk, on_track].iter().filter(|b| **b).count(), 1);
        prop_assert_eq!(result.status == SlaStatus::Breached, breached);
        prop_assert_eq!(result.status == SlaStatus::AtRisk, at_risk);
        prop_assert_eq!(result.status == SlaStatus::OnTrack, on_track);
    }

    #[test]
    fn evaluation_is_idempotent(
        status in arb_open_status(),
        minutes_ago in 0i64..(60 * 24 * 60),
    ) {
        let (order, now) = order_aged(status, minutes_ago);
        let rules = SlaRules::default();
        prop_assert_eq!(
            evaluator::evaluate(&order, &rules, now),
            evaluator::evaluate(&order, &rules, now)
        );
    }

    #[test]
    fn urgency_bands_never_overlap(
        status_a in arb_open_status(),
        status_b in arb_open_status(),
        minutes_a in 0i64..(1000 * 24 * 60),
        minutes_b in 0i64..(1000 * 24 * 60),
        // Wider than the valid range: the table clamps oversized thresholds.
        expected in 1u32..=5_000,
    ) {
        let rules = SlaRules {
            thresholds: SlaThresholdTable::empty(expected),
            ..SlaRules::default()
        };
        let (a, now) = order_aged(status_a, minutes_a);
        let (b, _) = order_aged(status_b, minutes_b);
        let ra = evaluator::evaluate(&a, &rules, now);
        let rb = evaluator::evaluate(&b, &rules, now);

        let band = |s: SlaStatus| match s {
            SlaStatus::Breached => 2,
            SlaStatus::AtRisk | SlaStatus::Unknown => 1,
            SlaStatus::OnTrack => 0,
        };
        if band(ra.status) > band(rb.status) {
            prop_assert!(urgency_score(&ra) > urgency_score(&rb));
        }
        if band(ra.status) == band(rb.status) && ra.days_in_stage > rb.days_in_stage {
            prop_assert!(urgency_score(&ra) > urgency_score(&rb));
        }
    }
}

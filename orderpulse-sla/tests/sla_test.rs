use chrono::{DateTime, Duration, Utc};
use orderpulse_core::config::{MissingEntryPolicy, SlaConfig};
use orderpulse_core::models::{OrderStatus, SlaStatus, TrackedOrder};
use orderpulse_core::traits::ISlaEvaluator;
use orderpulse_sla::{SlaEngine, SlaRules, SlaThresholdTable};

fn order_in_stage(status: OrderStatus, now: DateTime<Utc>, days_ago: i64) -> TrackedOrder {
    let entered = now - Duration::days(days_ago);
    let mut order = TrackedOrder::new(format!("ord-{days_ago}"), status, entered);
    match status {
        OrderStatus::Shipped => order.shipped_at = Some(entered),
        OrderStatus::Processing => order.processing_started_at = Some(entered),
        _ => {}
    }
    order
}

// ── Worked examples ─────────────────────────────────────────────────────

#[test]
fn shipped_six_of_seven_days_is_at_risk() {
    let now = Utc::now();
    let engine = SlaEngine::new();
    let mut order = TrackedOrder::new("ord-1", OrderStatus::Shipped, now - Duration::days(20));
    order.shipped_at = Some(now - Duration::days(6));

    let result = engine.evaluate_at(&order, now);
    assert_eq!(result.status, SlaStatus::AtRisk);
    assert_eq!(result.days_in_stage, 6);
    assert_eq!(result.expected_days, 7);
    assert_eq!(result.reason, "6 of 7 days used — action needed soon");
}

#[test]
fn pending_payment_four_of_three_days_is_breached() {
    let now = Utc::now();
    let engine = SlaEngine::new();
    let order = TrackedOrder::new("ord-2", OrderStatus::PendingPayment, now - Duration::days(4));

    let result = engine.evaluate_at(&order, now);
    assert_eq!(result.status, SlaStatus::Breached);
    assert_eq!(result.days_in_stage, 4);
    assert_eq!(result.expected_days, 3);
    assert_eq!(result.reason, "4 days in Pending Payment (expected 3)");
}

#[test]
fn on_track_reports_days_remaining() {
    let now = Utc::now();
    let engine = SlaEngine::new();

    let result = engine.evaluate_at(&order_in_stage(OrderStatus::Shipped, now, 2), now);
    assert_eq!(result.status, SlaStatus::OnTrack);
    assert_eq!(result.reason, "5 days remaining");

    let result = engine.evaluate_at(&order_in_stage(OrderStatus::Shipped, now, 5), now);
    assert_eq!(result.status, SlaStatus::OnTrack);
    assert_eq!(result.reason, "2 days remaining");
}

#[test]
fn singular_day_remaining() {
    let now = Utc::now();
    let engine = SlaEngine::with_rules(SlaRules {
        thresholds: SlaThresholdTable::default().with_threshold(OrderStatus::Shipped, 10),
        ..SlaRules::default()
    });
    let result = engine.evaluate_at(&order_in_stage(OrderStatus::Shipped, now, 9), now);
    // 9/10 is at-risk; drop the ratio to see the on-track wording.
    assert_eq!(result.status, SlaStatus::AtRisk);

    let engine = SlaEngine::with_rules(SlaRules {
        thresholds: SlaThresholdTable::default().with_threshold(OrderStatus::Shipped, 10),
        at_risk_ratio: 1.0,
        ..SlaRules::default()
    });
    let result = engine.evaluate_at(&order_in_stage(OrderStatus::Shipped, now, 9), now);
    assert_eq!(result.status, SlaStatus::OnTrack);
    assert_eq!(result.reason, "1 day remaining");
}

// ── Terminal short-circuit ──────────────────────────────────────────────

#[test]
fn delivered_is_never_breached() {
    let now = Utc::now();
    let engine = SlaEngine::new();
    let mut order = TrackedOrder::new("old", OrderStatus::Delivered, now - Duration::days(900));
    order.delivered_at = Some(now - Duration::days(800));

    let result = engine.evaluate_at(&order, now);
    assert_eq!(result.status, SlaStatus::OnTrack);
    assert_eq!(result.days_in_stage, 0);
    assert_eq!(result.hours_in_stage, 0);
    assert_eq!(result.reason, "Order completed");
}

#[test]
fn cancelled_reports_cancellation() {
    let now = Utc::now();
    let engine = SlaEngine::new();
    let order = TrackedOrder::new("c", OrderStatus::Cancelled, now - Duration::days(30));
    let result = engine.evaluate_at(&order, now);
    assert_eq!(result.status, SlaStatus::OnTrack);
    assert_eq!(result.days_in_stage, 0);
    assert_eq!(result.reason, "Order cancelled");
}

// ── Fallbacks and missing data ──────────────────────────────────────────

#[test]
fn failed_delivery_uses_fallback_threshold() {
    let now = Utc::now();
    let engine = SlaEngine::new();
    let mut order = TrackedOrder::new("f", OrderStatus::FailedDelivery, now - Duration::days(10));
    order.failed_delivery_at = Some(now - Duration::days(3));
    let result = engine.evaluate_at(&order, now);
    assert_eq!(result.expected_days, 2);
    assert_eq!(result.status, SlaStatus::Breached);
    assert_eq!(result.reason, "3 days in Failed Delivery (expected 2)");
}

#[test]
fn unrecognized_status_uses_fallback_threshold() {
    let now = Utc::now();
    let engine = SlaEngine::new();
    let order = TrackedOrder::new("u", OrderStatus::Unrecognized, now - Duration::days(1));
    let result = engine.evaluate_at(&order, now);
    assert_eq!(result.expected_days, 2);
    assert_eq!(result.days_in_stage, 1);
    assert_eq!(result.status, SlaStatus::OnTrack);

    let stale = TrackedOrder::new("u2", OrderStatus::Unrecognized, now - Duration::days(4));
    let result = engine.evaluate_at(&stale, now);
    assert_eq!(result.status, SlaStatus::Breached);
    assert_eq!(result.reason, "4 days in Unknown Stage (expected 2)");
}

#[test]
fn unrecognized_status_in_json_batch_is_evaluated() {
    let orders = TrackedOrder::from_json_array(
        r#"[
            {"id": "a", "status": "shipped", "createdAt": "2024-06-01T00:00:00Z"},
            {"id": "b", "status": "on_hold", "createdAt": "2024-06-01T00:00:00Z"}
        ]"#,
    )
    .unwrap();
    let now = DateTime::parse_from_rfc3339("2024-06-04T00:00:00Z")
        .unwrap()
        .with_timezone(&Utc);
    let results = SlaEngine::new().evaluate_batch(&orders, now);
    assert_eq!(results[0].expected_days, 7);
    assert_eq!(results[1].expected_days, 2);
    assert_eq!(results[1].status, SlaStatus::Breached);
}

#[test]
fn missing_entry_defaults_to_just_entered() {
    let now = Utc::now();
    let engine = SlaEngine::new();
    let mut order = TrackedOrder::new("m", OrderStatus::PendingPayment, now);
    order.created_at = None;

    let result = engine.evaluate_at(&order, now);
    assert_eq!(result.status, SlaStatus::OnTrack);
    assert_eq!(result.days_in_stage, 0);
    assert_eq!(result.reason, "3 days remaining");
}

#[test]
fn missing_entry_can_be_flagged_unknown() {
    let now = Utc::now();
    let config = SlaConfig {
        missing_entry_policy: MissingEntryPolicy::FlagUnknown,
        ..SlaConfig::default()
    };
    let engine = SlaEngine::from_config(&config).unwrap();
    let mut order = TrackedOrder::new("m", OrderStatus::Shipped, now);
    order.created_at = None;

    let result = engine.evaluate_at(&order, now);
    assert_eq!(result.status, SlaStatus::Unknown);
    assert_eq!(result.expected_days, 7);
    assert_eq!(result.reason, "No entry time recorded for Shipped");
    assert!(result.needs_attention());
}

#[test]
fn hours_are_reported_but_do_not_classify() {
    let now = Utc::now();
    let engine = SlaEngine::new();
    // 3 days 23 hours in pending payment: still 3 whole days, so at-risk not breached.
    let order = TrackedOrder::new(
        "h",
        OrderStatus::PendingPayment,
        now - Duration::days(3) - Duration::hours(23),
    );
    let result = engine.evaluate_at(&order, now);
    assert_eq!(result.days_in_stage, 3);
    assert_eq!(result.hours_in_stage, 95);
    assert_eq!(result.status, SlaStatus::AtRisk);
}

#[test]
fn future_timestamp_reads_as_just_entered() {
    let now = Utc::now();
    let engine = SlaEngine::new();
    let order = TrackedOrder::new("skew", OrderStatus::PendingPayment, now + Duration::hours(5));
    let result = engine.evaluate_at(&order, now);
    assert_eq!(result.days_in_stage, 0);
    assert_eq!(result.status, SlaStatus::OnTrack);
}

#[test]
fn config_thresholds_and_ratio_apply() {
    let now = Utc::now();
    let mut config = SlaConfig {
        at_risk_ratio: 0.5,
        ..SlaConfig::default()
    };
    config.thresholds.insert("shipped".into(), 10);
    let engine = SlaEngine::from_config(&config).unwrap();

    let result = engine.evaluate_at(&order_in_stage(OrderStatus::Shipped, now, 5), now);
    assert_eq!(result.expected_days, 10);
    assert_eq!(result.status, SlaStatus::AtRisk);
}

#[test]
fn oversized_thresholds_cannot_push_at_risk_into_breached_band() {
    let mut config = SlaConfig::default();
    config.thresholds.insert("shipped".into(), 2_000);
    assert!(SlaEngine::from_config(&config).is_err());

    let now = Utc::now();
    let engine = SlaEngine::with_rules(SlaRules {
        thresholds: SlaThresholdTable::default().with_threshold(OrderStatus::Shipped, 2_000),
        ..SlaRules::default()
    });
    let result = engine.evaluate_at(&order_in_stage(OrderStatus::Shipped, now, 360), now);
    assert_eq!(result.expected_days, 365);
    assert_eq!(result.status, SlaStatus::AtRisk);
    assert!(orderpulse_sla::urgency_score(&result) < orderpulse_sla::urgency::BREACHED_BAND);
}

// ── Batch, ranking, summary ─────────────────────────────────────────────

#[test]
fn batch_preserves_input_order() {
    let now = Utc::now();
    let engine = SlaEngine::new();
    let orders: Vec<_> = (0..50)
        .map(|d| order_in_stage(OrderStatus::Shipped, now, d % 10))
        .collect();
    let results = engine.evaluate_batch(&orders, now);
    assert_eq!(results.len(), orders.len());
    for (order, result) in orders.iter().zip(&results) {
        assert_eq!(*result, engine.evaluate_at(order, now));
    }
}

#[test]
fn rank_puts_breached_first_then_oldest() {
    let now = Utc::now();
    let engine = SlaEngine::new();
    let orders = vec![
        order_in_stage(OrderStatus::Shipped, now, 1),        // on track
        order_in_stage(OrderStatus::PendingPayment, now, 5), // breached, 5 days
        order_in_stage(OrderStatus::Shipped, now, 6),        // at risk
        order_in_stage(OrderStatus::Shipped, now, 9),        // breached, 9 days
        order_in_stage(OrderStatus::Shipped, now, 3),        // on track
    ];
    let ranked = engine.rank(&orders, now);
    let ids: Vec<&str> = ranked.iter().map(|r| r.order.id.as_str()).collect();
    assert_eq!(ids, vec!["ord-9", "ord-5", "ord-6", "ord-3", "ord-1"]);
    assert_eq!(ranked[0].score, 1009);
    assert_eq!(ranked[2].score, 506);
}

#[test]
fn summary_counts_each_class() {
    let now = Utc::now();
    let engine = SlaEngine::new();
    let mut delivered = TrackedOrder::new("done", OrderStatus::Delivered, now);
    delivered.delivered_at = Some(now);
    let orders = vec![
        order_in_stage(OrderStatus::Shipped, now, 1),
        order_in_stage(OrderStatus::Shipped, now, 6),
        order_in_stage(OrderStatus::PendingPayment, now, 4),
        order_in_stage(OrderStatus::Shipped, now, 12),
        delivered,
    ];
    let summary = engine.summarize(&orders, now);
    assert_eq!(summary.total, 5);
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.on_track, 1);
    assert_eq!(summary.at_risk, 1);
    assert_eq!(summary.breached, 2);
    assert_eq!(summary.breached_ids, vec!["ord-4", "ord-12"]);
    assert_eq!(summary.worst_overdue_days, Some(12));
    assert!((summary.breach_rate() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn evaluates_records_parsed_from_json() {
    let orders = TrackedOrder::from_json_array(
        r#"[
            {"id": "a", "status": "processing", "createdAt": "2024-06-01T00:00:00Z", "processingStartedAt": "2024-06-02T00:00:00Z"},
            {"id": "b", "status": "processing", "createdAt": "2024-06-01T00:00:00Z", "processingStartedAt": "garbage"}
        ]"#,
    )
    .unwrap();
    let now = DateTime::parse_from_rfc3339("2024-06-04T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc);
    let engine = SlaEngine::new();
    let results = engine.evaluate_batch(&orders, now);
    // a: 2 days of 2 → at risk.
    assert_eq!(results[0].status, SlaStatus::AtRisk);
    // b: falls back to created_at, 3 days of 2 → breached.
    assert_eq!(results[1].status, SlaStatus::Breached);
    assert_eq!(results[1].days_in_stage, 3);
}

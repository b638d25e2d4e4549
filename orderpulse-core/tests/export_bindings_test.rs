//! Generates TypeScript bindings for the UI-facing types via ts-rs.
//!
//! Run with: cargo test -p orderpulse-core export_bindings
//! Generated files appear in orderpulse-core/bindings/*.ts

#[test]
fn export_bindings() {
    use orderpulse_core::models::{
        GroupedInsight, Insight, OrderStatus, Sensitivity, SlaResult, SlaStatus, ThrottleRecord,
        Urgency,
    };

    fn assert_ts<T: ts_rs::TS>() {}

    assert_ts::<OrderStatus>();
    assert_ts::<SlaStatus>();
    assert_ts::<SlaResult>();
    assert_ts::<Urgency>();
    assert_ts::<Sensitivity>();
    assert_ts::<Insight>();
    assert_ts::<GroupedInsight>();
    assert_ts::<ThrottleRecord>();
}

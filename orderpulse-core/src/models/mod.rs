mod insight;
mod order;
mod order_status;
mod sla_result;
mod throttle_record;

pub use insight::{GroupedInsight, Insight, Sensitivity, Urgency};
pub use order::{parse_timestamp, TrackedOrder};
pub use order_status::OrderStatus;
pub use sla_result::{SlaResult, SlaStatus};
pub use throttle_record::{ThrottleRecord, ThrottleState};

mod key_value_store;
mod sla_evaluator;

pub use key_value_store::IKeyValueStore;
pub use sla_evaluator::ISlaEvaluator;

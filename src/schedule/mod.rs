mod duration;
mod slot;

pub use duration::{parse_service_duration, ServiceDuration};
pub use slot::{evaluate_slot, CandidateSlot, SlotDecision};

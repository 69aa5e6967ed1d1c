pub mod form_state;
pub mod record;

// Re-exports
pub use form_state::{FormState, SystemCardState};
pub use record::{DispatchRecord, SystemEntry};

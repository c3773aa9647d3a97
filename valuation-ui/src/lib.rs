pub mod display;
pub mod form;
pub mod logging;
pub mod session;

pub use form::{Field, PropertyForm};
pub use session::ValuationSession;

//! Form domain for the profile card: the draft being edited, the field and
//! interest catalogs, whole-draft validation, the completion metric and the
//! submission state machine. Everything here is UI-agnostic.

pub mod draft;
pub mod field;
pub mod interest;
pub mod progress;
pub mod session;
pub mod validate;

pub use draft::ProfileDraft;
pub use field::Field;
pub use interest::Interest;
pub use session::{Phase, Session, SubmitOutcome};
pub use validate::{validate, ErrorMap};

//! The send-token form: draft state, intents, confirmation status and the
//! session that wires them to an executor.

pub mod form;
pub mod intent;
pub mod session;
pub mod status;

pub use form::{ExecutionSink, SendTokenForm, SendTokenView};
pub use intent::{ConfirmSendRequest, SendIntent};
pub use session::SendTokenSession;
pub use status::{ConfirmationStatus, SubmissionResult};

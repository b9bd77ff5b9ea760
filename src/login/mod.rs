//! Login
//!
//! - **matching**: Credential comparison against the student list
//! - **flow**: The `Idle → Submitting → Success | Failed` state machine
//! - **session**: Paced driver over a dataset loader (native builds only)

pub mod flow;
pub mod matching;
#[cfg(feature = "server")]
pub mod session;

pub use flow::{LoginFlow, LoginPacing, LoginState, LOAD_ERROR_MESSAGE};
pub use matching::{
    authenticate, names_match, AuthError, Credentials, INVALID_CREDENTIALS_MESSAGE,
};
#[cfg(feature = "server")]
pub use session::LoginSession;

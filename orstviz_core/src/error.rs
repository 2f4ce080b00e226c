use std::error::Error as StdError;
use std::fmt;
use std::result::Result as StdResult;

use crate::session::RunState;

/// Alias for `Result<T, orstviz_core::Error>`.
pub type Result<T> = StdResult<T, Error>;

/// The operation a caller attempted on a [`Session`](crate::Session) when it was rejected with
/// [`Error::InvalidStateTransition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Pause,
    Resume,
    Cancel,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Pause => f.write_str("pause"),
            Action::Resume => f.write_str("resume"),
            Action::Cancel => f.write_str("cancel"),
        }
    }
}

/// Represents every way a session operation can be rejected.
///
/// None of these are fatal. A session that returns an error is left in the state it was in
/// before the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Raised when a custom array is empty, too long, holds a value out of range, or cannot be
    /// parsed at all.
    InvalidArray(String),

    /// Raised when a run is started without an array to sort.
    NoArray,

    /// Raised when a run is started, or the array replaced, while another run is live.
    AlreadyRunning,

    /// Raised when pause, resume or cancel is called from a state it does not apply to.
    InvalidStateTransition { action: Action, state: RunState },
}

impl StdError for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArray(reason) => write!(f, "Invalid Array: {reason}"),
            Error::NoArray => f.write_str("No array to sort. Generate or set a custom array."),
            Error::AlreadyRunning => f.write_str("A sort is already in progress"),
            Error::InvalidStateTransition { action, state } => {
                write!(f, "Cannot {action} while the session is {state}")
            }
        }
    }
}

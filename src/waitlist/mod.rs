//! Waitlist registration and counting.

mod service;
mod types;

pub use service::{
    join_waitlist, waitlist_count, WaitlistCount, WaitlistError, WaitlistResponse, WaitlistResult,
    DUPLICATE_EMAIL_MESSAGE, JOINED_MESSAGE,
};
pub use types::{JoinWaitlistInput, NewWaitlistEntry, ValidEmail, ValidationError, WaitlistEntry};

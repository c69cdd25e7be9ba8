pub mod waitlist_count;
pub mod waitlist_join;

pub use waitlist_count::waitlist_count;
pub use waitlist_join::waitlist_join;

pub mod concurrent_encoders;
pub mod helpers;
pub mod messages;
pub mod sinks;

pub mod strings;

pub use strings::{BasicStringService, StringError, StringService};

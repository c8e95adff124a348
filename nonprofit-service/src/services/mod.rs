pub mod propublica;

pub use propublica::{NonprofitSearch, ProPublicaClient, SearchError};

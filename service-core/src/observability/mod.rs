pub mod logging;
pub mod metrics;
pub mod trace_context;

pub use self::logging::{init_tracing, init_tracing_from_config};
pub use self::metrics::{get_metrics, init_metrics};
pub use self::trace_context::{TracedClientExt, TracedRequest, inject_trace_context};

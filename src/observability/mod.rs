//! Observability for the phone book.
//!
//! Counters are carried by an injected [`MetricsTracker`] handle rather than
//! process-wide state. Log output goes through `tracing`; the binary installs
//! one subscriber with a stderr layer and the [`audit_layer`] file layer.

pub mod logging;
pub mod metrics;

pub use logging::{audit_appender, audit_layer};
pub use metrics::{MetricsTracker, Timer};

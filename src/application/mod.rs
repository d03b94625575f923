mod application_consumer;
mod application_env;
mod application_report;
mod application_shutdown;
mod application_state;
mod application_tracing;

pub use application_consumer::*;
pub use application_env::*;
pub use application_report::*;
pub use application_shutdown::*;
pub use application_state::*;
pub use application_tracing::*;

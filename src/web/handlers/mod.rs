pub mod admin_handlers;
pub mod dashboard_handlers;
pub mod helpers;
pub mod job_handlers;
pub mod mentorship_handlers;
pub mod network_handlers;
pub mod profile_handlers;
pub mod seminar_handlers;
pub mod system_handlers;

pub use admin_handlers::*;
pub use dashboard_handlers::*;
pub use job_handlers::*;
pub use mentorship_handlers::*;
pub use network_handlers::*;
pub use profile_handlers::*;
pub use seminar_handlers::*;
pub use system_handlers::*;

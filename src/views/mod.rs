// src/views/mod.rs
//! Page state for listings, detail toggles, request queues and forms

pub mod forms;
pub mod listing;
pub mod queue;
pub mod session;
pub mod toggle;

pub use forms::{FormError, JobPostForm, ProfileForm, SubmitOutcome};
pub use listing::{FilterCatalog, ListingFilter, Searchable};
pub use queue::{EmptyState, QueueDecision, RequestQueue};
pub use session::{SessionStore, ViewError, ViewSession, DEFAULT_MAX_SESSIONS, DEFAULT_SESSION};
pub use toggle::{StatusToggle, ToggleKind, ToggleView};

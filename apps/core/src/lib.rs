// Export our modules for use by the web front end, the CLI and tests
pub mod catalog;
pub mod config;
pub mod domain;
pub mod effects;
pub mod filter;
pub mod hero;
pub mod modal;
pub mod state;
pub mod view;

pub use catalog::{Catalog, LoadError};
pub use config::SiteConfig;
pub use domain::{DisplayMode, Project};
pub use filter::{Filter, FilterState};
pub use modal::{CloseTrigger, ModalState};
pub use state::SiteState;
pub use view::{CardView, ModalView, Rendered};

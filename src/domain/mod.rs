pub mod configuration;
pub mod error;
pub mod extraction;
pub mod identities;
pub mod path_set;
pub mod rendering;
pub mod routes;

pub use configuration::{LintConfig, PlumberConfig, ServerConfig, ShellConfig, SourcesConfig};
pub use error::AppError;
pub use identities::{ResourceName, ShellUrl};
pub use path_set::PathSet;
pub use routes::{ModuleDescriptor, RouteClassification};

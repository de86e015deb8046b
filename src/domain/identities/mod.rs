pub mod resource_name;
pub mod shell_url;
pub mod validation;

pub use resource_name::ResourceName;
pub use shell_url::ShellUrl;

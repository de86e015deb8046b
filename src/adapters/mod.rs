pub mod artifact_filesystem;
pub mod memory_artifact_store;
pub mod yamllint_command;

pub use artifact_filesystem::FilesystemArtifactStore;
pub use memory_artifact_store::MemoryArtifactStore;
pub use yamllint_command::YamllintCommand;

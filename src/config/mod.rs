mod env;
mod loader;
mod model;

pub use env::EnvOverrides;
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME};
pub use model::{ChecksConfig, Config, FilesConfig};

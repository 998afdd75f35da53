mod loader;
mod model;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem, parse_config,
};
pub use model::{CONFIG_VERSION, Config, OutputConfig, ReportConfig};

use crate::api::RollcallApi;
use crate::config::RollcallConfig;
use crate::error::Result;
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;

pub struct RollcallContext {
    pub api: RollcallApi<FileStore>,
    pub config: RollcallConfig,
    pub data_dir: PathBuf,
}

/// Resolve the data directory: an explicit override wins, otherwise the
/// platform data dir.
pub fn resolve_data_dir(override_dir: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir;
    }
    ProjectDirs::from("com", "rollcall", "rollcall")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".rollcall"))
}

/// Build the production context: config, file store, loaded roster.
pub fn initialize(data_dir_override: Option<PathBuf>) -> Result<RollcallContext> {
    let data_dir = resolve_data_dir(data_dir_override);
    let config = RollcallConfig::load(&data_dir).unwrap_or_default();

    let store = FileStore::new(data_dir.join(&config.data_file));
    let api = RollcallApi::open(store, config.sheet_title.clone())?;

    Ok(RollcallContext {
        api,
        config,
        data_dir,
    })
}

use std::path::PathBuf;

use tt_core::app_dirs::AppDirs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub config_path: PathBuf,
    pub session_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            config_path: dirs.app_data_root.join("config.toml"),
            session_path: dirs.app_data_root.join("session.json"),
            logs_dir: dirs.app_data_root.join("logs"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_paths_derives_concrete_locations_from_app_data_root() {
        let dirs = AppDirs {
            app_data_root: PathBuf::from("/tmp/truetribe"),
        };

        let paths = AppPaths::from_app_dirs(&dirs);

        assert_eq!(paths.config_path, PathBuf::from("/tmp/truetribe/config.toml"));
        assert_eq!(paths.session_path, PathBuf::from("/tmp/truetribe/session.json"));
        assert_eq!(paths.logs_dir, PathBuf::from("/tmp/truetribe/logs"));
    }
}

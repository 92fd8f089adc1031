pub mod app_dirs;
pub mod evidence;

pub use app_dirs::DirsAppDirsAdapter;
pub use evidence::LocalImageFileSource;

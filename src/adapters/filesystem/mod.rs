mod bundle_directory;
mod palette_file;
mod tenner_file;

pub use bundle_directory::FilesystemBundleStore;
pub use palette_file::read_palette_file;
pub use tenner_file::FilesystemTennerSource;

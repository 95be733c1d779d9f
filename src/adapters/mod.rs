pub mod dataset_source;
pub mod embedded_assets;
pub mod filesystem;

pub use dataset_source::DatasetSource;
pub use embedded_assets::{EmbeddedTennerSource, bundle_markdown_template};
pub use filesystem::{FilesystemBundleStore, FilesystemTennerSource, read_palette_file};

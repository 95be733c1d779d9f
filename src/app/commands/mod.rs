pub mod assemble;
pub mod batch;
pub mod chunks;
pub mod classify;
pub mod export_md;
pub mod options;
pub mod plan;
pub mod selection_file;
pub mod validate;

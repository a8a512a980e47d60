/// Filesystem adapters: dataset scanning and output writing
mod dataset_scanner;
mod file_writer;
mod mime_types;

pub use dataset_scanner::DatasetScanner;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use mime_types::{mime_for_extension, DEFAULT_MIME_TYPE};

/// File system adapters: candidate image access and output writing.
pub mod file_writer;
pub mod image_file_reader;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use image_file_reader::FileSystemImageReader;

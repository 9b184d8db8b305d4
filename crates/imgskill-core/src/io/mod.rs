pub mod image_io;
pub mod script_writer;

mod png_io;

pub use png_io::{encode_png, load_png};

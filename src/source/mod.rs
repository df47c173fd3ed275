pub mod file;
pub mod traits;

pub use file::FileSource;
pub use traits::Source;

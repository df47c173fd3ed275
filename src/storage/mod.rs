pub mod results;

pub use results::{PreparedFile, ResultsWriter};

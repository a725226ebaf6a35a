mod csv_reader;
mod errors;

pub use csv_reader::{read_marks, read_transactions};

pub mod parser;
pub mod sink;

pub mod edit;
pub mod export;
pub mod selection;
pub mod table;

pub mod header;
pub mod heading;
pub mod title;

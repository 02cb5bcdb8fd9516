//! The two independently mountable views.

pub mod header;
pub mod heading;

pub mod body;
pub mod info;

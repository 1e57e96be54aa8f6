pub mod classify;
pub mod generate;
pub mod summary;
pub mod verify;

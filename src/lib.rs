pub mod category;
pub mod classifier;
pub mod config;
pub mod error;
pub mod finger;
pub mod table;
pub mod trigram;
pub mod verify;

pub use category::{Category, LabelStyle};
pub use classifier::{classify, BadRedirectSet, Classifier};
pub use finger::{Finger, Hand};
pub use table::TrigramTable;
pub use trigram::Trigram;

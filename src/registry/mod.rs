//! Startup-loaded reference data.
//!
//! Everything in this module is built once from persisted artifacts before
//! the service accepts requests, and is read-only afterwards. Request
//! handlers share the loaded registries through the analyzer context;
//! nothing here mutates after load, so no locking is needed.

pub mod labels;
pub mod medicine;
pub mod vocabulary;

pub use labels::LabelRegistry;
pub use medicine::{MedicineRecord, MedicineRegistry};
pub use vocabulary::SymptomVocabulary;

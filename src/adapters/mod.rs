pub mod batch_generator;
pub mod catalog;
pub mod record_generator;
pub mod type_registry;
pub mod vocabulary;

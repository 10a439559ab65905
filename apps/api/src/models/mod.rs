pub mod document;
pub mod generation;
pub mod job;

pub mod grading;
pub mod sessions;

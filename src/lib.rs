pub mod analyzer;
pub mod repository;
pub mod shared;
pub mod snapshot;

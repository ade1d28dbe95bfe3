pub mod football;
pub mod repositories;

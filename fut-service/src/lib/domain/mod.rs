pub mod competition;
pub mod credential;

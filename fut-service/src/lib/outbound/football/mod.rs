pub mod client;

pub use client::FootballDataClient;

pub mod blurring;
pub mod config;
pub mod detection;
pub mod error;
pub mod pipeline;
pub mod shared;

pub mod constants;
pub mod image_task;
pub mod region;

pub mod booking;
pub mod error;
pub mod guest;
pub mod report;
pub mod repository;
pub mod room;
pub mod service;
pub mod stay;

pub use error::{Error, Result};

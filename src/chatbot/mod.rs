pub mod intent;
pub mod models;
pub mod service;

pub use service::ChatService;

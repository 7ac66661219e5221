mod media_service;
pub mod pipeline;

pub use media_service::MediaService;

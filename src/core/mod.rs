pub mod cache;
pub mod extractor;
pub mod handler;
pub mod money;
pub mod response;

pub use crate::domain::model::{CampaignPayload, ErrorBody, ExtractionMethod, ExtractionResult};
pub use crate::domain::ports::{ConfigProvider, PageFetcher};
pub use crate::utils::error::Result;

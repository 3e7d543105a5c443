pub mod etl;
pub mod extractor;
pub mod filter;
pub mod loader;
pub mod pipeline;
pub mod writer;

pub use crate::domain::model::{FacilityRecord, FilterResult};
pub use crate::domain::ports::{BrowserPage, ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;

pub mod app;
pub mod cache;
pub mod capability;
pub mod context;
pub mod criteria;
pub mod error;
pub mod ethos;
pub mod guid;
pub mod merge;
pub mod metrics;
pub mod paging;
pub mod payload;
pub mod privacy;
pub mod router;
pub mod stream;
pub mod version;

pub use error::{EedmError, EedmResult, EndpointError};

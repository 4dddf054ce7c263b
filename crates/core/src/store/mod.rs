mod calendar_store;
mod dataset;
mod embedded;
mod error;
mod source;

pub use calendar_store::CalendarStore;
pub use dataset::parse_dataset;
pub use embedded::EmbeddedSource;
pub use error::{Result, StoreError};
pub use source::CalendarSource;

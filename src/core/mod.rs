pub mod loader;
pub mod prompt;
pub mod reporters;
pub mod session;
pub mod stats;

pub use crate::domain::model::{FilterSelection, TripRecord, TripTable};
pub use crate::domain::ports::{ConfigProvider, Reporter};
pub use crate::utils::error::Result;

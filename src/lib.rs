pub mod book;
pub mod config;
pub mod counter;
pub mod error;
pub mod ids;
pub mod logging;
pub mod menu;
pub mod model;
pub mod search;
pub mod store;
pub mod validate;

pub use book::{ClientBook, Created, Lookup};
pub use config::{LogSettings, Settings, StoreSettings};
pub use error::{ClientError, Result};
pub use menu::Menu;
pub use model::{ClientRecord, ClientType, NewClient};
pub use search::Criterion;
pub use store::RecordStore;
pub use validate::{validate_email, validate_phone};

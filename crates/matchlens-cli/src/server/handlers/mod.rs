//! HTTP API handlers.

mod keys;
mod load;
mod state;

pub use keys::set_keys;
pub use load::{load_dataset, upload_dataset};
pub use state::{StateResponse, get_state};

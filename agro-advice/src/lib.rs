//! Core of the crop advisory client.
//!
//! Everything here is free of browser and network types so the web app and
//! the CLI share one submission flow:
//! - `submission`: image + city validation
//! - `selection` / `lifecycle`: the chosen image, and the background work of a submission
//! - `store`: the persisted city (`userCity`)
//! - `response` / `view`: JSON response shapes and the per-render `ViewState`
//! - `transport`: the seam the web fetch and the reqwest client plug into
//! - `client` (feature `api`): native multipart client

pub mod config;
pub mod dots;
pub mod error;
pub mod lifecycle;
pub mod response;
pub mod selection;
pub mod store;
pub mod submission;
pub mod transport;
pub mod view;

#[cfg(feature = "api")]
pub mod client;

pub use config::ClientConfig;
pub use error::{StoreError, TransportError, ValidationError};
pub use lifecycle::{Cancel, Lifecycle, Ticket};
pub use response::AdviceResponse;
pub use selection::Selection;
pub use store::{CityStore, MemoryCityStore, CITY_STORAGE_KEY};
pub use submission::{ImageSource, Submission};
pub use transport::{request_advice, AdviceTransport};
pub use view::ViewState;

//! Async host for [`epdex_core`] list controllers.
//!
//! This crate supplies everything the deterministic core leaves to the
//! host: the tokio [`driver`] (timers, spawned fetches, view publication),
//! the reqwest [`endpoint`] transport speaking the `{count, results}`
//! contract, the registry [`presets`] for the three served list views, the
//! matching [`records`] models, [`session`] token providers, and a scripted
//! [`mock`] transport for tests.

pub mod driver;
pub mod endpoint;
pub mod mock;
pub mod presets;
pub mod records;
pub mod session;

pub use driver::{DriverHandle, spawn};
pub use endpoint::{HttpListEndpoint, ListTransport, TransportFuture};
pub use mock::{MockCall, MockTransport, RecordedFetch};
pub use presets::{RegistryPreset, company_users, epd_records, product_portfolio};
pub use records::{CompanyUser, EpdStatus, EpdSummary, ProductSummary};
pub use session::{Anonymous, StaticToken, TokenProvider};

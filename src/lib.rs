pub mod api;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod timer;
pub mod verify;

pub use client::envelope::{Envelope, Page, Validate};
pub use client::{ApiClient, ApiRequest};
pub use error::{ClientError, ClientResult};
pub use session::{RequestContext, Session, SessionProvider, SessionUser};

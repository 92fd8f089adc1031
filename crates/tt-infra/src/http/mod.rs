//! Backend REST adapters.

mod verification_client;

pub use verification_client::HttpVerificationApi;

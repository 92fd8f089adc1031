pub mod http;
pub mod session;

pub use http::HttpVerificationApi;
pub use session::FileSessionTokenStore;

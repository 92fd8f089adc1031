mod token_store;

pub use token_store::{FileSessionTokenStore, DEFAULT_SESSION_FILE};

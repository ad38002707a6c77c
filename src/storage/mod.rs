pub mod models;
pub mod store;

pub use models::{Rules, Scheme};
pub use store::SchemeStore;

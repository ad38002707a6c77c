pub mod dispatch;
pub mod request;
pub mod response;

pub use dispatch::SchemeSetuAgent;
pub use request::Request;
pub use response::{Response, Status};

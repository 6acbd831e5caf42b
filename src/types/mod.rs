pub mod message;

pub use message::{Ack, SendRequest};

pub mod health;
pub mod send;
pub mod stream;

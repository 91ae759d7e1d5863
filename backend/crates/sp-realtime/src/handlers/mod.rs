pub mod identity;
pub mod stream;

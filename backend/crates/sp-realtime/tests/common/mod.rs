#![allow(dead_code)]

pub(crate) mod jwt_helper;
pub(crate) mod sse_reader;
pub(crate) mod test_app;

pub use jwt_helper::*;
pub use sse_reader::*;
pub use test_app::*;

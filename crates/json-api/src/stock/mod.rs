//! Stock

mod handlers;
mod responses;

pub(crate) use handlers::*;

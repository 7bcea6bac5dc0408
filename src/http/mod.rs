//! HTTP transport module
//!
//! Issues a single GET and hands back status, headers and the fully read
//! body. Pagination decisions are made by the caller.
//!
//! # Features
//!
//! - **Pluggable Transport**: `Transport` trait so tests and embedders can
//!   supply their own GET implementation
//! - **reqwest Backend**: `HttpTransport` for real network access
//! - **Status Classification**: non-2xx responses become `Error::HttpStatus`
//!   carrying the server's error detail

mod transport;

pub use transport::{check_status, HttpTransport, RawResponse, Transport};

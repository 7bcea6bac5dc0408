//! Response decoder module
//!
//! # Overview
//!
//! The collection API wraps every page in a JSON envelope keyed by the
//! collection name (`{"cards": [...]}`). The decoder unwraps it and turns the
//! array into typed entities.

mod envelope;

pub use envelope::EnvelopeDecoder;

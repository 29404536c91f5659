//! Response decoder module
//!
//! Strict decoding of page responses into item lists.
//!
//! # Overview
//!
//! A page body must be valid JSON and must carry the expected item list.
//! A body missing the records field decodes to an error, never to an empty
//! page, so filtering and source exhaustion stay distinct signals.

mod decoders;

pub use decoders::PageDecoder;

//! Application services

mod quote;

pub use quote::{PackageQuote, QuoteRequest, QuoteService};

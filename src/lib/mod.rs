//! Shared frontend utilities for API access, configuration, errors, logging,
//! notifications and build metadata.
//!
//! Every auth request goes through `api::HttpTransport`. In the browser that is
//! `api::FetchTransport`, bound to the page's `cancel::RequestScope` so leaving a
//! page aborts its request. These utilities do not handle secrets directly, but
//! callers must still avoid logging sensitive data.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod cancel;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod notify;
pub(crate) mod telemetry;
#[cfg(target_arch = "wasm32")]
pub(crate) mod theme;

pub(crate) use api::HttpTransport;
pub(crate) use errors::AppError;

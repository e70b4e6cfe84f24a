//! Domain-level frontend features and their shared logic. Routes import these
//! modules so view code stays focused on rendering.

pub(crate) mod auth;

//! Client-side route paths shared by the router, links and flow follow-ups.

pub const LOGIN: &str = "/login";
pub const SIGNUP: &str = "/signup";
pub const FORGOT_PASSWORD: &str = "/forgot-password";
pub const RESET_PASSWORD: &str = "/reset-password";
pub const VERIFY_EMAIL: &str = "/verify-email";
pub const DASHBOARD: &str = "/dashboard";

//! Favicon Resolver Infrastructure Layer
pub mod favicon;

//! REST client for the recipe management backend.
//!
//! One [`client::ApiClient`] per process talks to the backend: it builds
//! JSON requests, injects the bearer token read from the session store at
//! call time, and classifies every response status into exactly one error
//! variant.

pub mod client;
mod payloads;

pub use client::ApiClient;

//! HTTP transport for the chat endpoint.
//!
//! Implements the `ChatTransport` trait by POSTing the
//! `{text, sessionId}` JSON body and decoding the `{text, flag}` reply.

mod api;
mod client;
mod config;


pub use client::HttpTransport;
pub use config::HttpConfig;

//! HTTP plumbing shared by the slide downloader.

pub mod client;

pub use client::{BufferedResponse, HttpClient, HttpClientBuilder};

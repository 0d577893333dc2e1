//! Slide deck download and thumbnail rendering

mod fetcher;
mod thumbnail;

pub use fetcher::HttpSlideFetcher;
pub use thumbnail::{scale_to_width, PdfiumRenderer};

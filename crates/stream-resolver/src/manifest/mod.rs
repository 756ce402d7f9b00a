mod fetcher;
mod parser;

pub use fetcher::{fetch_manifest, manifest_url};
pub use parser::parse_variants;

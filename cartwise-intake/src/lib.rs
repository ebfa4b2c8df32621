//! cartwise-intake: collaborator-boundary parsers.
//!
//! Vision detection, receipt OCR, manual entry, and the profile store all
//! hand over plain JSON or CSV; this crate normalizes those shapes into
//! validated core types. No image or text extraction happens here.

pub mod parsers;
pub mod types;

pub use parsers::cart_csv::parse_cart_csv;
pub use parsers::cart_json::parse_cart_json;
pub use parsers::profile_json::parse_profile_json;
pub use types::{RawCartItem, RawObligation, RawPrice, RawProfile};

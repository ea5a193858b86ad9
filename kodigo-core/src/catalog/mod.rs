//! Music catalog search
//!
//! The web app talks to the catalog through the `/api/itunes/*` rewrite served
//! by kodigo-proxy, so the client only ever needs the site origin.

mod client;
pub mod models;
pub mod normalize;

pub use client::{
    CatalogClient, CatalogError, RESULT_LIMIT, SEARCH_ATTRIBUTE, SEARCH_ENTITIES, SEARCH_PATH,
};
pub use normalize::{format_release_date, normalize_record, normalize_records, upscale_artwork};

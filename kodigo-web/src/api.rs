use kodigo_core::catalog::CatalogClient;
use tracing::warn;

/// Catalog client pointed at the origin serving this page.
///
/// Searches go through the same host's `/api/itunes/*` rewrite, so no
/// cross-origin request is made.
pub fn catalog_client() -> CatalogClient {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| {
            warn!("No window origin; catalog searches will use relative URLs");
            String::new()
        });
    CatalogClient::new(origin)
}

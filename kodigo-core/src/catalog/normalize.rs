//! Catalog record filtering and normalization
//!
//! Turns raw catalog records into [`SearchResultItem`]s. Only songs and music
//! videos that carry a preview are kept, so every card on screen is playable.

use chrono::{DateTime, Locale, NaiveDate, Utc};
use kodigo_common::{ResultKind, SearchResultItem};

use super::models::CatalogRecord;

/// Size token the catalog uses for its small artwork
const SMALL_ARTWORK: &str = "100x100bb.jpg";
/// Size token substituted to get the large variant
const LARGE_ARTWORK: &str = "600x600bb.jpg";

/// Title used when a record names neither a track nor a collection
pub const UNKNOWN_TITLE: &str = "Título Desconocido";

/// Filter and normalize a batch of records, preserving catalog order
pub fn normalize_records(records: Vec<CatalogRecord>) -> Vec<SearchResultItem> {
    records.into_iter().filter_map(normalize_record).collect()
}

/// Normalize a single record.
///
/// Returns `None` for records that are not a song or music video, or that have
/// no preview URL.
pub fn normalize_record(record: CatalogRecord) -> Option<SearchResultItem> {
    let kind = ResultKind::from_catalog_kind(record.kind.as_deref()?)?;
    let preview_url = record.preview_url.filter(|url| !url.trim().is_empty())?;

    let title = record
        .track_name
        .filter(|t| !t.is_empty())
        .or(record.collection_name.filter(|c| !c.is_empty()))
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string());

    let external_link = record
        .track_view_url
        .filter(|u| !u.is_empty())
        .or(record.collection_view_url.filter(|u| !u.is_empty()));

    Some(SearchResultItem {
        id: record.track_id.or(record.collection_id),
        title,
        artist_name: record.artist_name.unwrap_or_default(),
        artwork_url: upscale_artwork(record.artwork_url100.as_deref().unwrap_or_default()),
        release_date: record
            .release_date
            .as_deref()
            .map(format_release_date)
            .unwrap_or_default(),
        preview_url: Some(preview_url),
        external_link,
        kind,
    })
}

/// Swap the catalog's 100px artwork for the 600px variant.
///
/// URLs without the size token are returned unchanged.
pub fn upscale_artwork(url: &str) -> String {
    if let Some(base) = url.strip_suffix(SMALL_ARTWORK) {
        return format!("{base}{LARGE_ARTWORK}");
    }
    url.replacen(SMALL_ARTWORK, LARGE_ARTWORK, 1)
}

/// Format a catalog release date as a long Spanish date, e.g.
/// `"15 de julio de 2003"`.
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates. Anything else is
/// passed through as-is.
pub fn format_release_date(raw: &str) -> String {
    let parsed: Option<DateTime<Utc>> = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc())
        });

    match parsed {
        Some(dt) => dt
            .format_localized("%-d de %B de %Y", Locale::es_ES)
            .to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(name: &str) -> CatalogRecord {
        CatalogRecord {
            kind: Some("song".to_string()),
            track_id: Some(1),
            collection_id: Some(2),
            track_name: Some(name.to_string()),
            collection_name: Some("In Between Dreams".to_string()),
            artist_name: Some("Jack Johnson".to_string()),
            artwork_url100: Some(
                "https://is1-ssl.mzstatic.com/image/thumb/Music/v4/ab/100x100bb.jpg".to_string(),
            ),
            release_date: Some("2005-03-01T08:00:00Z".to_string()),
            preview_url: Some("https://a.example/x.m4a".to_string()),
            track_view_url: Some("https://music.apple.com/track".to_string()),
            collection_view_url: Some("https://music.apple.com/album".to_string()),
        }
    }

    #[test]
    fn test_records_without_preview_are_dropped() {
        let mut missing = song("missing");
        missing.preview_url = None;
        let mut empty = song("empty");
        empty.preview_url = Some(String::new());
        let mut blank = song("blank");
        blank.preview_url = Some("  ".to_string());

        let items = normalize_records(vec![missing, song("kept"), empty, blank]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "kept");
    }

    #[test]
    fn test_other_kinds_are_dropped_even_with_preview() {
        let mut movie = song("movie");
        movie.kind = Some("feature-movie".to_string());
        let mut podcast = song("podcast");
        podcast.kind = Some("podcast".to_string());
        let mut no_kind = song("no kind");
        no_kind.kind = None;
        let mut video = song("video");
        video.kind = Some("music-video".to_string());

        let items = normalize_records(vec![movie, podcast, no_kind, video]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, ResultKind::MusicVideo);
    }

    #[test]
    fn test_track_name_preferred_over_collection_name() {
        let item = normalize_record(song("Better Together")).unwrap();
        assert_eq!(item.title, "Better Together");

        let mut record = song("ignored");
        record.track_name = None;
        let item = normalize_record(record).unwrap();
        assert_eq!(item.title, "In Between Dreams");

        let mut record = song("ignored");
        record.track_name = None;
        record.collection_name = None;
        let item = normalize_record(record).unwrap();
        assert_eq!(item.title, UNKNOWN_TITLE);
    }

    #[test]
    fn test_track_link_preferred_over_collection_link() {
        let item = normalize_record(song("a")).unwrap();
        assert_eq!(
            item.external_link.as_deref(),
            Some("https://music.apple.com/track")
        );

        let mut record = song("a");
        record.track_view_url = None;
        let item = normalize_record(record).unwrap();
        assert_eq!(
            item.external_link.as_deref(),
            Some("https://music.apple.com/album")
        );

        let mut record = song("a");
        record.track_view_url = None;
        record.collection_view_url = None;
        assert_eq!(normalize_record(record).unwrap().external_link, None);
    }

    #[test]
    fn test_id_falls_back_to_collection() {
        assert_eq!(normalize_record(song("a")).unwrap().id, Some(1));
        let mut record = song("a");
        record.track_id = None;
        assert_eq!(normalize_record(record).unwrap().id, Some(2));
    }

    #[test]
    fn test_upscale_artwork() {
        let url = "https://is1-ssl.mzstatic.com/image/thumb/Music/v4/ab/100x100bb.jpg";
        assert_eq!(
            upscale_artwork(url),
            "https://is1-ssl.mzstatic.com/image/thumb/Music/v4/ab/600x600bb.jpg"
        );
        assert_eq!(
            upscale_artwork("https://example.com/cover.png"),
            "https://example.com/cover.png"
        );
        assert_eq!(upscale_artwork(""), "");
    }

    #[test]
    fn test_upscale_only_touches_suffix() {
        let url = "https://cdn.example/100x100bb.jpg/mirror/100x100bb.jpg";
        assert_eq!(
            upscale_artwork(url),
            "https://cdn.example/100x100bb.jpg/mirror/600x600bb.jpg"
        );
    }

    #[test]
    fn test_format_release_date() {
        assert_eq!(format_release_date("2003-07-15T07:00:00Z"), "15 de julio de 2003");
        assert_eq!(format_release_date("2005-03-01T08:00:00Z"), "1 de marzo de 2005");
        assert_eq!(format_release_date("2010-01-09"), "9 de enero de 2010");
    }

    #[test]
    fn test_format_release_date_passes_through_garbage() {
        assert_eq!(format_release_date("soon"), "soon");
        assert_eq!(format_release_date(""), "");
    }

    #[test]
    fn test_normalized_item_fields() {
        let item = normalize_record(song("Banana Pancakes")).unwrap();
        assert_eq!(item.artist_name, "Jack Johnson");
        assert!(item.artwork_url.ends_with("/ab/600x600bb.jpg"));
        assert_eq!(item.release_date, "1 de marzo de 2005");
        assert_eq!(item.preview_url.as_deref(), Some("https://a.example/x.m4a"));
        assert_eq!(item.kind, ResultKind::Song);
    }
}

/// Which catalog entity a result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Song,
    MusicVideo,
}

impl ResultKind {
    /// Map the catalog's `kind` field. Anything else is not displayable.
    pub fn from_catalog_kind(kind: &str) -> Option<Self> {
        match kind {
            "song" => Some(ResultKind::Song),
            "music-video" => Some(ResultKind::MusicVideo),
            _ => None,
        }
    }

    pub fn as_catalog_kind(&self) -> &'static str {
        match self {
            ResultKind::Song => "song",
            ResultKind::MusicVideo => "music-video",
        }
    }
}

/// A normalized catalog record, ready to render as a card.
///
/// Produced once per search and replaced wholesale by the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResultItem {
    /// Track id, or collection id when the record has no track
    pub id: Option<u64>,
    pub title: String,
    pub artist_name: String,
    pub artwork_url: String,
    /// Display-only, already localized
    pub release_date: String,
    pub preview_url: Option<String>,
    pub external_link: Option<String>,
    pub kind: ResultKind,
}

//! Shared UI components

pub mod about;
pub mod button;
pub mod contact_form;
pub mod contact_success;
pub mod helpers;
pub mod hero;
pub mod icons;
pub mod music_card;
pub mod results;
pub mod search_form;
pub mod site_layout;
pub mod text_input;

pub use about::AboutSection;
pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use contact_form::ContactFormView;
pub use contact_success::ContactSuccessView;
pub use helpers::{ErrorDisplay, LoadingSpinner, PageContainer};
pub use hero::{HeroSection, HERO_IMAGE_URL};
pub use icons::{ExternalLinkIcon, ImageIcon, MusicIcon, PlayIcon, SearchIcon, StopIcon};
pub use music_card::{is_playing, MusicCard};
pub use results::{ResultsDisplay, SearchResultsView};
pub use search_form::{SearchForm, SEARCH_SECTION_ID};
pub use site_layout::{NavItem, SiteLayoutView};
pub use text_input::{TextArea, TextInput};

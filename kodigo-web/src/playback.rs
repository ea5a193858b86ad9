use dioxus::prelude::*;
use kodigo_common::{PreviewOutput, PreviewPlayer};
use tracing::{debug, info, warn};
use wasm_bindgen_futures::JsFuture;

/// The page's single `<audio>` element, driven by the preview player
#[derive(Default)]
pub struct HtmlAudioOutput {
    audio: Option<web_sys::HtmlMediaElement>,
}

impl PreviewOutput for HtmlAudioOutput {
    fn play(&mut self, url: &str) {
        let Some(ref audio) = self.audio else {
            warn!("Audio element not mounted; cannot play {}", url);
            return;
        };

        audio.set_src(url);
        match audio.play() {
            Ok(promise) => {
                // Autoplay policies and bad sources reject the promise
                let url = url.to_string();
                spawn(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        warn!("Failed to play preview {}: {:?}", url, e);
                    }
                });
            }
            Err(e) => warn!("Failed to play preview {}: {:?}", url, e),
        }
    }

    fn stop(&mut self) {
        if let Some(ref audio) = self.audio {
            let _ = audio.pause();
            audio.set_src("");
        }
    }
}

/// Web preview service: the preview player plus a signal mirroring the
/// current URL for rendering
pub struct WebPreviewService {
    player: PreviewPlayer<HtmlAudioOutput>,
    current: Signal<Option<String>>,
}

impl WebPreviewService {
    pub fn new(current: Signal<Option<String>>) -> Self {
        Self {
            player: PreviewPlayer::new(HtmlAudioOutput::default()),
            current,
        }
    }

    /// Set the audio element reference (called from the layout's onmounted)
    pub fn set_audio_element(&mut self, el: web_sys::HtmlMediaElement) {
        debug!("Audio element mounted");
        self.player.output_mut().audio = Some(el);
    }

    pub fn toggle(&mut self, url: &str) {
        match self.player.toggle(url) {
            Some(playing) => info!("Playing preview: {}", playing),
            None => info!("Stopped preview: {}", url),
        }
        self.sync();
    }

    pub fn on_ended(&mut self) {
        self.player.on_ended();
        self.sync();
    }

    pub fn stop(&mut self) {
        self.player.stop();
        self.sync();
    }

    fn sync(&mut self) {
        let url = self.player.current_url().map(str::to_string);
        if *self.current.peek() != url {
            self.current.set(url);
        }
    }
}

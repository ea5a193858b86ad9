/// What the audio output has to do after the slot changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewChange {
    /// Load this preview URL and start playing it
    Start(String),
    /// Pause and drop the current source
    Stop,
}

/// The single system-wide preview slot.
///
/// Holds the URL of the preview currently playing, if any. There is no queue
/// and no history: starting a new preview simply replaces the old one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewSlot {
    current_url: Option<String>,
}

impl PreviewSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the preview for `url`.
    ///
    /// Clicking the preview that is already playing stops it; any other URL
    /// takes over the slot.
    pub fn toggle(&mut self, url: &str) -> PreviewChange {
        if self.current_url.as_deref() == Some(url) {
            self.current_url = None;
            PreviewChange::Stop
        } else {
            self.current_url = Some(url.to_string());
            PreviewChange::Start(url.to_string())
        }
    }

    /// Playback reached its natural end.
    ///
    /// Returns `None` when nothing was playing.
    pub fn finish(&mut self) -> Option<PreviewChange> {
        self.current_url.take().map(|_| PreviewChange::Stop)
    }

    pub fn current_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }

    /// Whether `url` is the preview currently in the slot
    pub fn is_playing(&self, url: &str) -> bool {
        self.current_url.as_deref() == Some(url)
    }
}

/// Sink that actually produces sound for the slot.
///
/// The web app implements this for the page's shared `<audio>` element.
pub trait PreviewOutput {
    /// Assign `url` as the source and begin playback
    fn play(&mut self, url: &str);
    /// Pause and clear the source
    fn stop(&mut self);
}

/// Preview slot bound to an output.
///
/// Every slot change is pushed to the output immediately, so the output always
/// reflects `current_url`.
pub struct PreviewPlayer<O: PreviewOutput> {
    slot: PreviewSlot,
    output: O,
}

impl<O: PreviewOutput> PreviewPlayer<O> {
    pub fn new(output: O) -> Self {
        Self {
            slot: PreviewSlot::new(),
            output,
        }
    }

    /// Toggle `url` and drive the output accordingly
    pub fn toggle(&mut self, url: &str) -> Option<&str> {
        let change = self.slot.toggle(url);
        self.apply(change);
        self.slot.current_url()
    }

    /// Called when the output reports that playback ended
    pub fn on_ended(&mut self) {
        self.stop();
    }

    /// Stop whatever is playing
    pub fn stop(&mut self) {
        if let Some(change) = self.slot.finish() {
            self.apply(change);
        }
    }

    pub fn current_url(&self) -> Option<&str> {
        self.slot.current_url()
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    fn apply(&mut self, change: PreviewChange) {
        match change {
            PreviewChange::Start(url) => self.output.play(&url),
            PreviewChange::Stop => self.output.stop(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records what the player asked the output to do
    #[derive(Default)]
    struct FakeAudio {
        src: String,
        paused: bool,
        plays: usize,
    }

    impl PreviewOutput for FakeAudio {
        fn play(&mut self, url: &str) {
            self.src = url.to_string();
            self.paused = false;
            self.plays += 1;
        }

        fn stop(&mut self) {
            self.paused = true;
            self.src.clear();
        }
    }

    const URL: &str = "https://a.example/x.m4a";
    const OTHER: &str = "https://a.example/y.m4a";

    #[test]
    fn test_toggle_starts_then_stops() {
        let mut slot = PreviewSlot::new();
        assert_eq!(slot.toggle(URL), PreviewChange::Start(URL.to_string()));
        assert_eq!(slot.current_url(), Some(URL));
        assert_eq!(slot.toggle(URL), PreviewChange::Stop);
        assert_eq!(slot.current_url(), None);
    }

    #[test]
    fn test_toggle_is_self_inverse() {
        let mut slot = PreviewSlot::new();
        slot.toggle(URL);
        slot.toggle(URL);
        assert_eq!(slot, PreviewSlot::new());

        slot.toggle(OTHER);
        let before = slot.clone();
        slot.toggle(OTHER);
        slot.toggle(OTHER);
        assert_eq!(slot, before);
    }

    #[test]
    fn test_switching_replaces_current() {
        let mut slot = PreviewSlot::new();
        slot.toggle(URL);
        assert_eq!(slot.toggle(OTHER), PreviewChange::Start(OTHER.to_string()));
        assert!(slot.is_playing(OTHER));
        assert!(!slot.is_playing(URL));
    }

    #[test]
    fn test_finish_clears_slot() {
        let mut slot = PreviewSlot::new();
        assert_eq!(slot.finish(), None);
        slot.toggle(URL);
        assert_eq!(slot.finish(), Some(PreviewChange::Stop));
        assert_eq!(slot.current_url(), None);
    }

    #[test]
    fn test_player_drives_output() {
        let mut player = PreviewPlayer::new(FakeAudio::default());

        assert_eq!(player.toggle(URL), Some(URL));
        assert_eq!(player.output.src, URL);
        assert!(!player.output.paused);

        assert_eq!(player.toggle(URL), None);
        assert_eq!(player.output.src, "");
        assert!(player.output.paused);
    }

    #[test]
    fn test_player_switch_reassigns_source() {
        let mut player = PreviewPlayer::new(FakeAudio::default());
        player.toggle(URL);
        player.toggle(OTHER);
        assert_eq!(player.current_url(), Some(OTHER));
        assert_eq!(player.output.src, OTHER);
        assert_eq!(player.output.plays, 2);
    }

    #[test]
    fn test_player_on_ended_resets() {
        let mut player = PreviewPlayer::new(FakeAudio::default());
        player.toggle(URL);
        player.on_ended();
        assert_eq!(player.current_url(), None);
        assert!(player.output.paused);

        // Ending again with nothing playing is a no-op
        player.output_mut().paused = false;
        player.on_ended();
        assert!(!player.output.paused);
    }

    #[test]
    fn test_player_stop() {
        let mut player = PreviewPlayer::new(FakeAudio::default());
        player.stop();
        assert!(!player.output.paused);

        player.toggle(URL);
        player.stop();
        assert_eq!(player.current_url(), None);
        assert!(player.output.paused);
    }
}

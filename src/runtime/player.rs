//! Audio playback

/// Plays an audio resource located by URL
pub trait AudioPlayer: Send + Sync {
    fn play(&self, url: &str) -> Result<(), String>;
}

/// Hands the URL to the desktop's default handler
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemPlayer;

impl AudioPlayer for SystemPlayer {
    fn play(&self, url: &str) -> Result<(), String> {
        open::that_detached(url).map_err(|e| format!("Could not open {}: {}", url, e))
    }
}

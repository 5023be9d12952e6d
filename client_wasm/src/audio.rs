//! Sound effects for game cues

use game_core::Cue;

/// File played for each cue, relative to the page
pub fn sound_file(cue: Cue) -> &'static str {
    match cue {
        Cue::WallHit => "WallPingPong.mp3",
        Cue::Win => "WinPingPong.mp3",
        Cue::Lose => "LosePingPong.mp3",
        Cue::PaddleHit => "HitPingPong.mp3",
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebAudio;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::sound_file;
    use game_core::{AudioSink, Cue, SinkError};
    use web_sys::HtmlAudioElement;

    /// One preloaded audio element per cue
    pub struct WebAudio {
        clips: Vec<(Cue, HtmlAudioElement)>,
    }

    impl WebAudio {
        pub fn new() -> Result<Self, SinkError> {
            let clips = Cue::ALL
                .iter()
                .map(|&cue| {
                    HtmlAudioElement::new_with_src(sound_file(cue))
                        .map(|clip| (cue, clip))
                        .map_err(|e| SinkError::new("audio", format!("{:?}", e)))
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Self { clips })
        }
    }

    impl AudioSink for WebAudio {
        fn play(&mut self, cue: Cue) -> Result<(), SinkError> {
            let clip = self
                .clips
                .iter()
                .find(|(c, _)| *c == cue)
                .map(|(_, clip)| clip)
                .ok_or_else(|| SinkError::new("audio", format!("no clip for {:?}", cue)))?;

            // Restart if the previous play is still going
            clip.set_current_time(0.0);
            // Promise is not awaited; it rejects if autoplay is blocked
            clip.play()
                .map(drop)
                .map_err(|e| SinkError::new("audio", format!("{:?}", e)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_cue_has_distinct_file() {
        let files: Vec<&str> = Cue::ALL.iter().map(|&cue| sound_file(cue)).collect();
        assert_eq!(
            files,
            vec!["WallPingPong.mp3", "WinPingPong.mp3", "LosePingPong.mp3", "HitPingPong.mp3"]
        );
    }
}

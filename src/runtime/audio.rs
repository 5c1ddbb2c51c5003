//! Vocal/instrumental track switching
//!
//! The audio widget answers position and play-state queries through
//! callbacks, so a switch is two steps: [`AudioSwitch::request_switch`]
//! starts it, [`AudioSwitch::position_reported`] completes it with the
//! widget's answer and yields the commands to send.

use crate::models::LyricsDocument;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Track {
    Vocal,
    Instrumental,
}

impl Track {
    pub fn other(self) -> Self {
        match self {
            Track::Vocal => Track::Instrumental,
            Track::Instrumental => Track::Vocal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SwitchState {
    Idle,
    AwaitingPosition,
}

/// Widget commands that complete a switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchPlan {
    pub pause: Track,
    pub seek: Track,
    pub position_ms: u64,
    /// Set only when the previous track was playing
    pub play: Option<Track>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioSwitch {
    active: Track,
    state: SwitchState,
}

impl AudioSwitch {
    /// `None` unless the document has both tracks
    pub fn for_document(document: &LyricsDocument) -> Option<Self> {
        if document.vocal_audio_url.trim().is_empty() {
            return None;
        }
        document.instrumental().map(|_| Self {
            active: Track::Vocal,
            state: SwitchState::Idle,
        })
    }

    /// The audible, visible track
    pub fn active(&self) -> Track {
        self.active
    }

    /// Track the toggle button offers
    pub fn offered(&self) -> Track {
        self.active.other()
    }

    pub fn is_switching(&self) -> bool {
        self.state == SwitchState::AwaitingPosition
    }

    /// Start a switch; ignored (returns false) while one is in flight
    pub fn request_switch(&mut self) -> bool {
        if self.is_switching() {
            return false;
        }
        self.state = SwitchState::AwaitingPosition;
        true
    }

    /// Complete a pending switch with the active track's position and
    /// play state; `None` if no switch was requested
    pub fn position_reported(&mut self, position_ms: u64, was_playing: bool) -> Option<SwitchPlan> {
        if !self.is_switching() {
            return None;
        }
        let from = self.active;
        let to = from.other();
        self.active = to;
        self.state = SwitchState::Idle;
        Some(SwitchPlan {
            pause: from,
            seek: to,
            position_ms,
            play: was_playing.then_some(to),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dual() -> LyricsDocument {
        LyricsDocument {
            vocal_audio_url: "https://a.test/v".to_string(),
            instrumental_audio_url: Some("https://a.test/i".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_single_track_has_no_switch() {
        let doc = LyricsDocument {
            vocal_audio_url: "https://a.test/v".to_string(),
            ..Default::default()
        };
        assert!(AudioSwitch::for_document(&doc).is_none());
    }

    #[test]
    fn test_switch_while_playing() {
        let mut audio = AudioSwitch::for_document(&dual()).unwrap();
        assert_eq!(audio.offered(), Track::Instrumental);
        assert!(audio.request_switch());
        let plan = audio.position_reported(42_000, true).unwrap();
        assert_eq!(
            plan,
            SwitchPlan {
                pause: Track::Vocal,
                seek: Track::Instrumental,
                position_ms: 42_000,
                play: Some(Track::Instrumental),
            }
        );
        assert_eq!(audio.active(), Track::Instrumental);
    }

    #[test]
    fn test_switch_while_paused_does_not_play() {
        let mut audio = AudioSwitch::for_document(&dual()).unwrap();
        audio.request_switch();
        let plan = audio.position_reported(0, false).unwrap();
        assert_eq!(plan.play, None);
    }

    #[test]
    fn test_requests_ignored_while_awaiting() {
        let mut audio = AudioSwitch::for_document(&dual()).unwrap();
        assert!(audio.request_switch());
        assert!(!audio.request_switch());
        audio.position_reported(10, true);
        assert_eq!(audio.active(), Track::Instrumental);
        assert!(audio.position_reported(10, true).is_none());
    }
}

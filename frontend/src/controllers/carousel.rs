//! Hero background rotation.
//!
//! ```text
//!   Idle(i) --mount--> AutoAdvancing(i) --tick--> AutoAdvancing(i+1)
//!                          |      ^
//!        playback started  |      |  ended: AutoAdvancing(i+1), timer re-armed
//!                          v      |
//!                       VideoPlaying(i)   (ticks ignored)
//! ```
//!
//! Whenever the current item is a video the controller asks the host to play
//! it. A failed start leaves the carousel auto-advancing, so the next tick
//! skips past the video.

use std::collections::HashSet;

use thiserror::Error;
use tracing::{debug, warn};

use super::{wrap_next, Command, Commands, Controller, TimerKey};
use crate::models::MediaItem;

pub const AUTOPLAY_TIMER: TimerKey = "autoplay";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    #[error("a carousel needs at least one media item")]
    Empty,
    #[error("media item id `{0}` is used more than once")]
    DuplicateId(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselState {
    Idle(usize),
    AutoAdvancing(usize),
    VideoPlaying(usize),
}

impl CarouselState {
    pub fn index(&self) -> usize {
        match *self {
            CarouselState::Idle(i)
            | CarouselState::AutoAdvancing(i)
            | CarouselState::VideoPlaying(i) => i,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CarouselEvent {
    /// The autoplay interval elapsed.
    Tick,
    /// The visitor picked an indicator.
    Select(usize),
    PlaybackStarted { index: usize },
    PlaybackFailed { index: usize, reason: String },
    PlaybackEnded { index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselOutput {
    PlayVideo { index: usize },
    StopVideo { index: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    items: Vec<MediaItem>,
    state: CarouselState,
    interval_ms: u32,
}

impl Carousel {
    pub fn new(items: Vec<MediaItem>, interval_ms: u32) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::Empty);
        }
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(CarouselError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self {
            items,
            state: CarouselState::Idle(0),
            interval_ms,
        })
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.index()
    }

    pub fn current(&self) -> &MediaItem {
        &self.items[self.current_index()]
    }

    pub fn is_playing_blocking_media(&self) -> bool {
        matches!(self.state, CarouselState::VideoPlaying(_))
    }

    /// Point at `index` while auto-advancing, asking for playback if it is a video.
    fn show(&mut self, index: usize, commands: &mut Commands<Self>) {
        self.state = CarouselState::AutoAdvancing(index);
        if self.items[index].is_video() {
            commands.push(Command::Emit(CarouselOutput::PlayVideo { index }));
        }
    }

    fn autoplay(&self) -> Command<CarouselEvent, CarouselOutput> {
        Command::every(AUTOPLAY_TIMER, self.interval_ms, CarouselEvent::Tick)
    }
}

impl Controller for Carousel {
    type Event = CarouselEvent;
    type Output = CarouselOutput;

    fn mount(&mut self) -> Commands<Self> {
        let mut commands = vec![self.autoplay()];
        self.show(0, &mut commands);
        commands
    }

    fn handle(&mut self, event: CarouselEvent) -> Commands<Self> {
        let mut commands = Vec::new();
        let len = self.items.len();

        match (self.state, event) {
            (CarouselState::Idle(_), event) => {
                debug!(?event, "carousel not mounted, ignoring");
            }
            (CarouselState::VideoPlaying(_), CarouselEvent::Tick) => {}
            (CarouselState::AutoAdvancing(index), CarouselEvent::Tick) => {
                let next = wrap_next(index, len);
                if next != index {
                    self.show(next, &mut commands);
                }
            }
            (state, CarouselEvent::Select(index)) => {
                if index >= len || index == state.index() {
                    return commands;
                }
                if let CarouselState::VideoPlaying(playing) = state {
                    commands.push(Command::Emit(CarouselOutput::StopVideo { index: playing }));
                }
                self.show(index, &mut commands);
            }
            // A late start for a slide that is no longer shown, in any mounted state.
            (state, CarouselEvent::PlaybackStarted { index }) if index != state.index() => {
                debug!(index, ?state, "stale playback start, stopping it");
                commands.push(Command::Emit(CarouselOutput::StopVideo { index }));
            }
            (CarouselState::AutoAdvancing(current), CarouselEvent::PlaybackStarted { .. }) => {
                self.state = CarouselState::VideoPlaying(current);
            }
            (_, CarouselEvent::PlaybackFailed { index, reason }) => {
                warn!(index, %reason, "video playback failed, leaving it to autoplay");
            }
            (CarouselState::VideoPlaying(current), CarouselEvent::PlaybackEnded { index })
                if index == current =>
            {
                commands.push(self.autoplay());
                self.show(wrap_next(index, len), &mut commands);
            }
            (state, event) => {
                debug!(?state, ?event, "stale playback event");
            }
        }

        commands
    }

    fn unmount(&mut self) -> Commands<Self> {
        let mut commands = vec![Command::Cancel(AUTOPLAY_TIMER)];
        if let CarouselState::VideoPlaying(index) = self.state {
            commands.push(Command::Emit(CarouselOutput::StopVideo { index }));
        }
        self.state = CarouselState::Idle(self.current_index());
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::schedule::Harness;

    const INTERVAL: u32 = 6000;

    fn images(n: usize) -> Vec<MediaItem> {
        (0..n)
            .map(|i| MediaItem::image(&i.to_string(), &format!("/img/{i}.jpg")))
            .collect()
    }

    fn hero_items() -> Vec<MediaItem> {
        vec![
            MediaItem::video("1", "/campaign.mp4"),
            MediaItem::image("2", "/team.jpg"),
            MediaItem::image("3", "/strategy.jpg"),
        ]
    }

    #[test]
    fn rejects_empty_and_duplicate_items() {
        assert_eq!(Carousel::new(vec![], INTERVAL), Err(CarouselError::Empty));
        let dup = vec![MediaItem::image("a", "/1.jpg"), MediaItem::image("a", "/2.jpg")];
        assert_eq!(
            Carousel::new(dup, INTERVAL),
            Err(CarouselError::DuplicateId("a".to_string()))
        );
    }

    #[test]
    fn starts_idle_and_mounts_into_autoadvancing() {
        let carousel = Carousel::new(images(3), INTERVAL).unwrap();
        assert_eq!(carousel.state(), CarouselState::Idle(0));

        let harness = Harness::mounted(carousel);
        assert_eq!(harness.controller().state(), CarouselState::AutoAdvancing(0));
        assert!(harness.timers().is_running(AUTOPLAY_TIMER));
    }

    #[test]
    fn advances_on_each_interval_and_wraps() {
        let mut harness = Harness::mounted(Carousel::new(images(3), INTERVAL).unwrap());
        harness.advance(5999);
        assert_eq!(harness.controller().current_index(), 0);
        harness.advance(1);
        assert_eq!(harness.controller().current_index(), 1);
        harness.advance(12_000);
        assert_eq!(harness.controller().current_index(), 0);
    }

    #[test]
    fn single_item_never_moves() {
        let mut harness = Harness::mounted(Carousel::new(images(1), INTERVAL).unwrap());
        harness.advance(60_000);
        assert_eq!(harness.controller().state(), CarouselState::AutoAdvancing(0));
        assert!(harness.timers().is_running(AUTOPLAY_TIMER));
    }

    #[test]
    fn video_playback_blocks_autoplay_until_it_ends() {
        let mut harness = Harness::mounted(Carousel::new(hero_items(), INTERVAL).unwrap());
        assert_eq!(harness.take_outputs(), vec![CarouselOutput::PlayVideo { index: 0 }]);

        harness.send(CarouselEvent::PlaybackStarted { index: 0 });
        assert!(harness.controller().is_playing_blocking_media());

        harness.advance(30_000);
        assert_eq!(harness.controller().state(), CarouselState::VideoPlaying(0));

        harness.advance(1000);
        harness.send(CarouselEvent::PlaybackEnded { index: 0 });
        assert_eq!(harness.controller().state(), CarouselState::AutoAdvancing(1));

        // the next item gets a full interval after the video ends
        let ended_at = harness.now();
        assert_eq!(
            harness.timers().deadline(AUTOPLAY_TIMER),
            Some(ended_at + u64::from(INTERVAL))
        );
    }

    #[test]
    fn failed_video_is_skipped_by_the_next_tick() {
        let mut harness = Harness::mounted(Carousel::new(hero_items(), INTERVAL).unwrap());
        harness.send(CarouselEvent::PlaybackFailed {
            index: 0,
            reason: "NotAllowedError".to_string(),
        });
        assert_eq!(harness.controller().state(), CarouselState::AutoAdvancing(0));

        harness.advance(u64::from(INTERVAL));
        assert_eq!(harness.controller().state(), CarouselState::AutoAdvancing(1));
    }

    #[test]
    fn selecting_a_video_requests_playback() {
        let mut harness = Harness::mounted(Carousel::new(hero_items(), INTERVAL).unwrap());
        harness.send(CarouselEvent::PlaybackFailed { index: 0, reason: "x".into() });
        harness.advance(u64::from(INTERVAL));
        harness.take_outputs();

        harness.send(CarouselEvent::Select(0));
        assert_eq!(harness.take_outputs(), vec![CarouselOutput::PlayVideo { index: 0 }]);
    }

    #[test]
    fn selecting_away_from_a_playing_video_stops_it() {
        let mut harness = Harness::mounted(Carousel::new(hero_items(), INTERVAL).unwrap());
        harness.send(CarouselEvent::PlaybackStarted { index: 0 });
        harness.take_outputs();

        harness.send(CarouselEvent::Select(2));
        assert_eq!(harness.controller().state(), CarouselState::AutoAdvancing(2));
        assert_eq!(harness.take_outputs(), vec![CarouselOutput::StopVideo { index: 0 }]);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut harness = Harness::mounted(Carousel::new(images(3), INTERVAL).unwrap());
        harness.send(CarouselEvent::Select(7));
        assert_eq!(harness.controller().current_index(), 0);
    }

    #[test]
    fn stale_playback_events_do_not_move_the_carousel() {
        let mut harness = Harness::mounted(Carousel::new(hero_items(), INTERVAL).unwrap());
        harness.send(CarouselEvent::Select(1));
        harness.take_outputs();

        harness.send(CarouselEvent::PlaybackStarted { index: 0 });
        assert_eq!(harness.controller().state(), CarouselState::AutoAdvancing(1));
        assert_eq!(harness.take_outputs(), vec![CarouselOutput::StopVideo { index: 0 }]);

        harness.send(CarouselEvent::PlaybackEnded { index: 0 });
        assert_eq!(harness.controller().state(), CarouselState::AutoAdvancing(1));
    }

    #[test]
    fn late_start_while_another_video_plays_is_stopped() {
        let items = vec![MediaItem::video("a", "/a.mp4"), MediaItem::video("b", "/b.mp4")];
        let mut harness = Harness::mounted(Carousel::new(items, INTERVAL).unwrap());
        harness.send(CarouselEvent::PlaybackStarted { index: 0 });
        harness.send(CarouselEvent::Select(1));
        harness.send(CarouselEvent::Select(0));
        harness.send(CarouselEvent::PlaybackStarted { index: 0 });
        assert_eq!(harness.controller().state(), CarouselState::VideoPlaying(0));
        harness.take_outputs();

        // slide 1's play promise resolves after the visitor already went back
        harness.send(CarouselEvent::PlaybackStarted { index: 1 });
        assert_eq!(harness.take_outputs(), vec![CarouselOutput::StopVideo { index: 1 }]);
        assert_eq!(harness.controller().state(), CarouselState::VideoPlaying(0));

        harness.send(CarouselEvent::PlaybackEnded { index: 0 });
        assert_eq!(harness.controller().state(), CarouselState::AutoAdvancing(1));
    }

    #[test]
    fn unmount_cancels_autoplay() {
        let mut harness = Harness::mounted(Carousel::new(hero_items(), INTERVAL).unwrap());
        harness.send(CarouselEvent::PlaybackStarted { index: 0 });
        harness.take_outputs();

        harness.unmount();
        assert_eq!(harness.timers().pending(), 0);
        assert_eq!(harness.controller().state(), CarouselState::Idle(0));
        assert_eq!(harness.take_outputs(), vec![CarouselOutput::StopVideo { index: 0 }]);

        harness.advance(60_000);
        assert_eq!(harness.controller().current_index(), 0);
    }
}

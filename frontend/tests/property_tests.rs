use proptest::prelude::*;

use agency_frontend::config::Timings;
use agency_frontend::controllers::carousel::{Carousel, CarouselEvent};
use agency_frontend::controllers::contact_form::{validate, ContactMessage, Field};
use agency_frontend::controllers::heartbeat::{Heartbeat, HeartbeatConfig, HeartbeatEvent, HeartbeatOutput};
use agency_frontend::controllers::modal::{CaseStudyViewer, ModalEvent};
use agency_frontend::controllers::reveal::StagedReveal;
use agency_frontend::controllers::schedule::Harness;
use agency_frontend::models::{CaseStudy, MediaItem, PortfolioProject};

const INTERVAL: u32 = 6000;

fn media(kinds: &[bool]) -> Vec<MediaItem> {
    kinds
        .iter()
        .enumerate()
        .map(|(i, is_video)| {
            let id = i.to_string();
            if *is_video {
                MediaItem::video(&id, &format!("/media/{i}.mp4"))
            } else {
                MediaItem::image(&id, &format!("/media/{i}.jpg"))
            }
        })
        .collect()
}

fn project(id: &str, images: usize) -> PortfolioProject {
    PortfolioProject {
        id: id.to_string(),
        thumbnail: format!("/thumbs/{id}.jpg"),
        title: format!("Project {id}"),
        category: "Branding".to_string(),
        summary: String::new(),
        case_study: CaseStudy {
            title: format!("Case {id}"),
            client: "Client".to_string(),
            description: String::new(),
            challenge: String::new(),
            solution: String::new(),
            results: String::new(),
            images: (0..images).map(|i| format!("/cases/{id}/{i}.jpg")).collect(),
        },
    }
}

proptest! {
    #[test]
    fn n_ticks_bring_the_carousel_back_to_its_start(n in 1usize..20, start_offset in 0usize..20) {
        let mut carousel = Harness::mounted(Carousel::new(media(&vec![false; n]), INTERVAL).unwrap());
        let start = start_offset % n;
        carousel.send(CarouselEvent::Select(start));
        prop_assert_eq!(carousel.controller().current_index(), start);

        for _ in 0..n {
            carousel.send(CarouselEvent::Tick);
        }
        prop_assert_eq!(carousel.controller().current_index(), start);
    }

    #[test]
    fn ticks_never_move_a_playing_video(kinds in prop::collection::vec(any::<bool>(), 1..8), ticks in 1usize..30) {
        let mut kinds = kinds;
        kinds[0] = true;
        let mut carousel = Harness::mounted(Carousel::new(media(&kinds), INTERVAL).unwrap());
        carousel.send(CarouselEvent::PlaybackStarted { index: 0 });
        prop_assert!(carousel.controller().is_playing_blocking_media());

        for _ in 0..ticks {
            carousel.send(CarouselEvent::Tick);
            prop_assert_eq!(carousel.controller().current_index(), 0);
        }
        carousel.advance(u64::from(INTERVAL) * ticks as u64);
        prop_assert_eq!(carousel.controller().current_index(), 0);
    }

    #[test]
    fn index_always_stays_in_bounds(
        kinds in prop::collection::vec(any::<bool>(), 1..8),
        events in prop::collection::vec((0u8..5, 0usize..10), 0..60),
    ) {
        let len = kinds.len();
        let mut carousel = Harness::mounted(Carousel::new(media(&kinds), INTERVAL).unwrap());
        for (kind, index) in events {
            let event = match kind {
                0 => CarouselEvent::Tick,
                1 => CarouselEvent::Select(index),
                2 => CarouselEvent::PlaybackStarted { index },
                3 => CarouselEvent::PlaybackFailed { index, reason: "blocked".to_string() },
                _ => CarouselEvent::PlaybackEnded { index },
            };
            carousel.send(event);
            prop_assert!(carousel.controller().current_index() < len);
        }
    }

    #[test]
    fn triggers_inside_one_window_beat_once(offsets in prop::collection::vec(0u64..800, 1..10)) {
        let mut heart = Harness::mounted(Heartbeat::new(HeartbeatConfig::pulsing(&Timings::default())));
        let mut sorted = offsets;
        sorted.sort_unstable();

        let mut elapsed = 0;
        for at in sorted {
            heart.advance(at - elapsed);
            elapsed = at;
            heart.send(HeartbeatEvent::Trigger);
        }
        let beats = heart
            .outputs()
            .iter()
            .filter(|o| matches!(o, HeartbeatOutput::Beat { .. }))
            .count();
        prop_assert_eq!(beats, 1);

        heart.advance(800);
        prop_assert!(!heart.controller().is_active());
    }

    #[test]
    fn reveal_phase_never_decreases(max_phase in 0u32..8, steps in 0u64..20) {
        let mut reveal = Harness::mounted(StagedReveal::new(max_phase, 700));
        let mut last = reveal.controller().phase();
        for _ in 0..steps {
            reveal.advance(700);
            let phase = reveal.controller().phase();
            prop_assert!(phase >= last);
            prop_assert!(phase <= max_phase);
            last = phase;
        }
    }

    #[test]
    fn validation_never_flags_company(
        name in ".{0,12}",
        email in ".{0,20}",
        company in ".{0,12}",
        message in ".{0,20}",
    ) {
        let errors = validate(&ContactMessage { name, email, company, message });
        prop_assert!(!errors.contains_key(&Field::Company));
    }

    #[test]
    fn well_formed_messages_validate_clean(
        name in "[A-Za-z]{1,10}",
        local in "[a-z0-9]{1,8}",
        domain in "[a-z]{1,8}",
        tld in "[a-z]{2,4}",
        message in "[a-z ]{0,20}[a-z]",
    ) {
        let fields = ContactMessage {
            name,
            email: format!("{local}@{domain}.{tld}"),
            company: String::new(),
            message,
        };
        prop_assert!(validate(&fields).is_empty());
    }

    #[test]
    fn modal_image_index_stays_in_range(
        images in 1usize..6,
        moves in prop::collection::vec(0u8..3, 0..40),
    ) {
        let mut viewer = Harness::mounted(CaseStudyViewer::new(vec![project("a", images)]));
        viewer.send(ModalEvent::Open("a".to_string()));
        for (step, kind) in moves.into_iter().enumerate() {
            let event = match kind {
                0 => ModalEvent::NextImage,
                1 => ModalEvent::PreviousImage,
                _ => ModalEvent::ShowImage(step),
            };
            viewer.send(event);
            prop_assert!(viewer.controller().image_index() < images);
        }
    }
}

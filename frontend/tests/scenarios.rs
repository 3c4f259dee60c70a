//! End-to-end runs of the page controllers on virtual time, using the
//! content that ships with the site.

use agency_frontend::config::Timings;
use agency_frontend::content::SiteContent;
use agency_frontend::controllers::carousel::{
    Carousel, CarouselEvent, CarouselOutput, CarouselState, AUTOPLAY_TIMER,
};
use agency_frontend::controllers::contact_form::{
    validate, ContactForm, ContactMessage, Delivery, Field, FormEvent, FormOutput, SubmitError,
    SubmitStatus, SUBMIT_TIMER,
};
use agency_frontend::controllers::heartbeat::{Heartbeat, HeartbeatConfig, HeartbeatEvent};
use agency_frontend::controllers::modal::{CaseStudyViewer, ModalEvent};
use agency_frontend::controllers::reveal::StagedReveal;
use agency_frontend::controllers::schedule::Harness;

fn site() -> SiteContent {
    SiteContent::embedded().expect("embedded site content")
}

fn timings() -> Timings {
    Timings::default()
}

fn simulated_form() -> Harness<ContactForm> {
    Harness::mounted(ContactForm::new(Delivery::Simulated {
        delay_ms: timings().submit_delay_ms,
    }))
}

fn fill(form: &mut Harness<ContactForm>, name: &str, email: &str, message: &str) {
    form.send(FormEvent::SetField(Field::Name, name.to_string()));
    form.send(FormEvent::SetField(Field::Email, email.to_string()));
    form.send(FormEvent::SetField(Field::Message, message.to_string()));
}

#[test]
fn hero_skips_a_video_that_fails_to_start() {
    let hero = site().hero;
    let mut carousel =
        Harness::mounted(Carousel::new(hero.items, timings().carousel_interval_ms).unwrap());
    assert_eq!(
        carousel.take_outputs(),
        vec![CarouselOutput::PlayVideo { index: 0 }]
    );

    carousel.send(CarouselEvent::PlaybackFailed {
        index: 0,
        reason: "NotAllowedError".to_string(),
    });
    assert_eq!(carousel.controller().state(), CarouselState::AutoAdvancing(0));

    carousel.advance(6000);
    assert_eq!(carousel.controller().state(), CarouselState::AutoAdvancing(1));
}

#[test]
fn hero_waits_for_the_video_then_moves_on() {
    let hero = site().hero;
    let mut carousel =
        Harness::mounted(Carousel::new(hero.items, timings().carousel_interval_ms).unwrap());
    carousel.send(CarouselEvent::PlaybackStarted { index: 0 });

    carousel.advance(30_000);
    assert_eq!(carousel.controller().state(), CarouselState::VideoPlaying(0));

    carousel.send(CarouselEvent::PlaybackEnded { index: 0 });
    assert_eq!(carousel.controller().state(), CarouselState::AutoAdvancing(1));

    // autoplay was re-armed when the video ended
    assert_eq!(carousel.timers().deadline(AUTOPLAY_TIMER), Some(36_000));
    carousel.advance(6000);
    assert_eq!(carousel.controller().current_index(), 2);
    carousel.advance(6000);
    assert_eq!(carousel.controller().current_index(), 0);
    assert_eq!(
        carousel.take_outputs().last(),
        Some(&CarouselOutput::PlayVideo { index: 0 })
    );
}

#[test]
fn selecting_away_from_a_playing_video_stops_it() {
    let hero = site().hero;
    let mut carousel =
        Harness::mounted(Carousel::new(hero.items, timings().carousel_interval_ms).unwrap());
    carousel.send(CarouselEvent::PlaybackStarted { index: 0 });
    carousel.take_outputs();

    carousel.send(CarouselEvent::Select(2));
    assert_eq!(
        carousel.take_outputs(),
        vec![CarouselOutput::StopVideo { index: 0 }]
    );
    assert_eq!(carousel.controller().state(), CarouselState::AutoAdvancing(2));
}

#[test]
fn unmounting_the_hero_leaves_no_timers() {
    let hero = site().hero;
    let mut carousel =
        Harness::mounted(Carousel::new(hero.items, timings().carousel_interval_ms).unwrap());
    carousel.send(CarouselEvent::PlaybackStarted { index: 0 });
    carousel.take_outputs();

    carousel.unmount();
    assert_eq!(carousel.timers().pending(), 0);
    assert_eq!(
        carousel.take_outputs(),
        vec![CarouselOutput::StopVideo { index: 0 }]
    );

    carousel.advance(60_000);
    assert_eq!(carousel.controller().current_index(), 0);
}

#[test]
fn single_item_carousel_ticks_harmlessly() {
    let first = site().hero.items.into_iter().nth(1).unwrap();
    let mut carousel = Harness::mounted(Carousel::new(vec![first], 6000).unwrap());
    carousel.advance(60_000);
    assert_eq!(carousel.controller().current_index(), 0);
    assert!(carousel.timers().is_running(AUTOPLAY_TIMER));
}

#[test]
fn blank_name_is_the_only_error() {
    let errors = validate(&ContactMessage {
        name: String::new(),
        email: "a@b.com".to_string(),
        company: String::new(),
        message: "hi".to_string(),
    });
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(&Field::Name).map(String::as_str), Some("Name is required"));
}

#[test]
fn malformed_email_is_the_only_error() {
    let errors = validate(&ContactMessage {
        name: "A".to_string(),
        email: "not-an-email".to_string(),
        company: String::new(),
        message: "hi".to_string(),
    });
    assert_eq!(errors.len(), 1);
    assert!(errors.contains_key(&Field::Email));
}

#[test]
fn valid_submission_goes_idle_submitting_submitted() {
    let mut form = simulated_form();
    fill(&mut form, "Ada", "ada@example.com", "Let's talk");
    form.send(FormEvent::SetField(Field::Company, "Analytical Engines".to_string()));
    assert_eq!(form.controller().status(), &SubmitStatus::Idle);

    form.send(FormEvent::Submit);
    assert_eq!(form.controller().status(), &SubmitStatus::Submitting);
    assert!(!form.controller().can_submit());

    // a second submit while in flight is dropped
    form.send(FormEvent::Submit);
    form.advance(1499);
    assert_eq!(form.controller().status(), &SubmitStatus::Submitting);

    form.advance(1);
    assert_eq!(form.controller().status(), &SubmitStatus::Submitted);
    assert_eq!(form.controller().fields(), &ContactMessage::default());
    assert!(!form.timers().is_running(SUBMIT_TIMER));

    form.send(FormEvent::Reset);
    assert_eq!(form.controller().status(), &SubmitStatus::Idle);
    assert!(form.controller().errors().is_empty());
}

#[test]
fn invalid_submission_sets_errors_and_stays_idle() {
    let mut form = simulated_form();
    form.send(FormEvent::Submit);
    assert_eq!(form.controller().status(), &SubmitStatus::Idle);
    assert_eq!(form.controller().errors().len(), 3);
    assert_eq!(form.timers().pending(), 0);

    // typing clears only that field's error
    form.send(FormEvent::SetField(Field::Name, "Ada".to_string()));
    assert!(form.controller().error(Field::Name).is_none());
    assert!(form.controller().error(Field::Email).is_some());
    assert!(form.controller().error(Field::Message).is_some());
}

#[test]
fn remote_delivery_failure_can_be_retried() {
    let mut form = Harness::mounted(ContactForm::new(Delivery::Remote));
    fill(&mut form, "Ada", "ada@example.com", "Hello");

    form.send(FormEvent::Submit);
    let sent = form.take_outputs();
    assert_eq!(sent.len(), 1);
    let FormOutput::Deliver(message) = &sent[0];
    assert_eq!(message.email, "ada@example.com");

    form.send(FormEvent::DeliveryFailed(SubmitError::Rejected(503)));
    assert!(matches!(form.controller().status(), SubmitStatus::Failed(_)));
    assert_eq!(form.controller().value(Field::Name), "Ada");

    form.send(FormEvent::Submit);
    assert_eq!(form.controller().status(), &SubmitStatus::Submitting);
    assert_eq!(form.take_outputs().len(), 1);

    form.send(FormEvent::Delivered);
    assert_eq!(form.controller().status(), &SubmitStatus::Submitted);
}

#[test]
fn opening_an_unknown_project_changes_nothing() {
    let projects = site().portfolio.projects;
    let mut viewer = Harness::mounted(CaseStudyViewer::new(projects));

    viewer.send(ModalEvent::Open("nonexistent-id".to_string()));
    assert!(!viewer.controller().is_open());
    assert!(viewer.controller().selected_project().is_none());

    viewer.send(ModalEvent::Open("3".to_string()));
    viewer.send(ModalEvent::Close);
    let before = viewer.controller().clone();
    viewer.send(ModalEvent::Open("nonexistent-id".to_string()));
    assert_eq!(viewer.controller(), &before);
}

#[test]
fn modal_keeps_content_while_closing_and_resets_for_a_new_project() {
    let projects = site().portfolio.projects;
    let mut viewer = Harness::mounted(CaseStudyViewer::new(projects));

    viewer.send(ModalEvent::Open("1".to_string()));
    viewer.send(ModalEvent::NextImage);
    viewer.send(ModalEvent::NextImage);
    assert_eq!(viewer.controller().image_index(), 2);

    viewer.send(ModalEvent::Close);
    assert!(!viewer.controller().is_open());
    assert_eq!(viewer.controller().selected_project().map(|p| p.id.as_str()), Some("1"));

    // reopening the same project keeps its place
    viewer.send(ModalEvent::Open("1".to_string()));
    assert_eq!(viewer.controller().image_index(), 2);

    // an open modal swaps content directly
    viewer.send(ModalEvent::Open("4".to_string()));
    assert!(viewer.controller().is_open());
    assert_eq!(viewer.controller().image_index(), 0);
    assert_eq!(viewer.controller().selected_project().map(|p| p.id.as_str()), Some("4"));

    viewer.send(ModalEvent::PreviousImage);
    assert_eq!(viewer.controller().image_index(), 2);
}

#[test]
fn double_trigger_gives_one_active_period() {
    let mut heart = Harness::mounted(Heartbeat::new(HeartbeatConfig::pulsing(&timings())));
    let mut periods = 0;
    let mut was_active = false;

    heart.send(HeartbeatEvent::Trigger);
    for step in 0..20 {
        if step == 3 {
            heart.send(HeartbeatEvent::Trigger);
        }
        let active = heart.controller().is_active();
        if active && !was_active {
            periods += 1;
        }
        was_active = active;
        heart.advance(100);
    }
    assert_eq!(periods, 1);
    assert!(!heart.controller().is_active());
}

#[test]
fn staged_reveal_spells_out_the_phrase() {
    let mut reveal = Harness::mounted(StagedReveal::new(4, timings().reveal_step_ms));
    let phases: Vec<u32> = (0..6)
        .map(|_| {
            reveal.advance(700);
            reveal.controller().phase()
        })
        .collect();
    assert_eq!(phases, vec![1, 2, 3, 4, 4, 4]);
    assert_eq!(reveal.timers().pending(), 0);
}

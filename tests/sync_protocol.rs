use std::time::{Duration, Instant};

use prompter::{
    open_presentation_window, Channel, ControlContext, EngineOptions, HeadlessSurface, Message,
    Orientation, Point, PresentationContext, Surface, TimerMode,
};

fn options(channel: &str) -> EngineOptions {
    let _ = env_logger::builder().is_test(true).try_init();

    EngineOptions {
        title: String::from("Teleprompter"),
        channel: channel.to_string(),
        screen_size: (2560, 1440),
    }
}

fn control(channel: &str) -> ControlContext<HeadlessSurface> {
    ControlContext::new(&options(channel), HeadlessSurface::new((640.0, 480.0)))
}

fn presentation(channel: &str) -> PresentationContext<HeadlessSurface> {
    PresentationContext::new(channel, HeadlessSurface::new((1920.0, 1080.0)))
}

#[test]
fn late_joiner_catches_up_in_one_round_trip() {
    let mut control = control("sync-late-join");

    control.set_text("Good evening. Tonight:");
    control.set_font_size(56);
    control.set_timer_mode(TimerMode::Countdown);
    control.apply_countdown_duration(5, 0);
    control.set_mirror(true);

    // the presentation window opens only now, after all of the above
    let mut late = presentation("sync-late-join");
    assert_eq!(late.rendering().text, "");

    let now = Instant::now();
    control.pump(now);
    late.pump(now);

    assert_eq!(late.rendering(), control.snapshot());
    assert_eq!(late.surface().rendered(), Some(control.snapshot()));
}

#[test]
fn drag_release_becomes_canonical_for_every_observer() {
    let mut control = control("sync-drag");
    let mut stage = presentation("sync-drag");
    let mut lobby = presentation("sync-drag");

    let now = Instant::now();
    control.pump(now);
    stage.pump(now);
    lobby.pump(now);

    stage.begin_timer_drag(Point::from((30.0, 20.0)));
    stage.drag_timer_to(Point::from((106.0, 54.0)));
    stage.release_timer_drag();

    control.pump(now);
    stage.pump(now);
    lobby.pump(now);

    let expected = Point::from((100.0, 50.0));
    assert_eq!(control.snapshot().timer_position, expected);
    assert_eq!(stage.rendering().timer_position, expected);
    assert_eq!(lobby.rendering().timer_position, expected);
}

#[test]
fn countdown_running_out_halts_the_whole_session() {
    let mut control = control("sync-countdown");
    let mut stage = presentation("sync-countdown");

    control.set_timer_mode(TimerMode::Countdown);
    control.apply_countdown_duration(0, 3);

    let start = Instant::now();
    control.toggle_play(start);
    control.pump(start);
    stage.pump(start);
    assert!(stage.rendering().is_playing);

    control.pump(start + Duration::from_millis(3500));
    stage.pump(start + Duration::from_millis(3500));

    assert_eq!(stage.rendering().time, 0);
    assert!(!stage.rendering().is_playing);
    assert!(!stage.rendering().is_timer_running);
    assert_eq!(stage.time_display(), "00:00:00");

    // both surfaces are frozen from here on
    let control_offset = control.preview().scroll_offset();
    let stage_offset = stage.surface().scroll_offset();
    control.pump(start + Duration::from_secs(30));
    stage.pump(start + Duration::from_secs(30));
    assert_eq!(control.preview().scroll_offset(), control_offset);
    assert_eq!(stage.surface().scroll_offset(), stage_offset);
}

#[test]
fn reopened_presentation_recovers_current_state() {
    let mut control = control("sync-reopen");
    control.set_text("segment two");

    let now = Instant::now();
    let mut first = presentation("sync-reopen");
    control.pump(now);
    first.pump(now);
    assert_eq!(first.rendering().text, "segment two");

    // the window closes and a fresh one opens; it starts from defaults
    drop(first);
    control.set_font_size(64);

    let mut second = presentation("sync-reopen");
    assert_eq!(second.rendering().font_size, 32);

    control.pump(now);
    second.pump(now);
    assert_eq!(second.rendering(), control.snapshot());
}

#[test]
fn interleaved_updates_self_heal_to_the_latest_broadcast() {
    let mut control = control("sync-self-heal");
    let mut stage = presentation("sync-self-heal");

    // several edits queue up before the presentation side gets to run once
    control.set_text("one");
    control.set_text("two");
    control.set_scroll_speed(Instant::now(), 7);
    control.set_text("three");

    let now = Instant::now();
    control.pump(now);
    stage.pump(now);

    assert_eq!(stage.rendering().text, "three");
    assert_eq!(stage.rendering().scroll_speed, 7);
    assert_eq!(stage.rendering(), control.snapshot());
}

#[test]
fn spawned_window_lives_on_the_channel_alone() {
    let opts = options("sync-spawned");
    let probe = Channel::open("sync-spawned");
    let mut control = ControlContext::new(&opts, HeadlessSurface::new((640.0, 480.0)));
    control.set_text("on air");

    let window = open_presentation_window(&opts, Orientation::Vertical)
        .expect("window creation refused");

    // the spawned context introduces itself with a sync_state request...
    let deadline = Instant::now() + Duration::from_secs(2);
    let mut requested = false;
    while Instant::now() < deadline {
        if let Some(Message::SyncState) = probe.try_recv() {
            requested = true;
            break;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    assert!(requested, "no sync_state request arrived");

    // ...and the control side answers without any other coupling
    control.pump(Instant::now());
    window.close();
}

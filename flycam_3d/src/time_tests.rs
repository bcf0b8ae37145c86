use super::*;

#[test]
fn test_manual_clock_starts_at_given_tick() {
    let clock = ManualClock::new(250);
    assert_eq!(clock.now_ms(), 250);
}

#[test]
fn test_manual_clock_clones_share_ticks() {
    let clock = ManualClock::new(0);
    let handle = clock.clone();

    handle.advance(16);
    assert_eq!(clock.now_ms(), 16);

    clock.set(1000);
    assert_eq!(handle.now_ms(), 1000);
}

#[test]
fn test_manual_clock_wraps() {
    let clock = ManualClock::new(u32::MAX - 5);
    clock.advance(10);
    assert_eq!(clock.now_ms(), 4);
    // Elapsed across the wrap is still the real step
    assert_eq!(clock.now_ms().wrapping_sub(u32::MAX - 5), 10);
}

#[test]
fn test_system_clock_is_non_decreasing() {
    let clock = SystemClock::new();
    let first = clock.now_ms();
    let second = clock.now_ms();
    assert!(second >= first);
}

#[test]
fn test_time_source_trait_object() {
    let clock: Box<dyn TimeSource> = Box::new(ManualClock::new(7));
    assert_eq!(clock.now_ms(), 7);
}

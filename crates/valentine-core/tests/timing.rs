//! Timing tests for the letter typist and the hug reveal delay
//!
//! Run on tokio's paused clock, so the 50ms cadence and the 2s reveal
//! delay elapse instantly while keeping their ordering.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;
use valentine_core::{
    type_out, GreetingState, HugStrength, PageConfig, RevealPolicy, Typewriter, LOVE_LETTER,
};

type SharedState = Arc<Mutex<GreetingState>>;

/// What the hug slider handler does: store, hide, then reveal after the delay.
fn change_strength(state: &SharedState, value: i64, config: &PageConfig) -> JoinHandle<bool> {
    let ticket = state
        .lock()
        .unwrap()
        .hug
        .set_strength(HugStrength::new(value).unwrap());
    let deadline = Instant::now() + config.hug_reveal_delay();
    let policy = config.reveal_policy;
    let state = Arc::clone(state);
    tokio::spawn(async move {
        tokio::time::sleep_until(deadline).await;
        state.lock().unwrap().hug.reveal(ticket, policy)
    })
}

fn hug_visible(state: &SharedState) -> bool {
    state.lock().unwrap().hug.message_visible()
}

// ============================================================================
// Letter typist
// ============================================================================

#[tokio::test(start_paused = true)]
async fn letter_types_at_fixed_cadence() {
    let config = PageConfig::default();
    let mut steps = 0usize;
    let start = Instant::now();

    let full = type_out(Typewriter::new(LOVE_LETTER), config.typing_delay(), |_| steps += 1).await;

    let chars = LOVE_LETTER.chars().count();
    assert_eq!(full, LOVE_LETTER);
    assert_eq!(steps, chars);
    assert_eq!(start.elapsed(), config.typing_delay() * chars as u32);
}

#[tokio::test(start_paused = true)]
async fn letter_reveals_prefixes_in_order() {
    let shown = Arc::new(Mutex::new(String::new()));
    let state: SharedState = Arc::default();

    let task = {
        let shown = Arc::clone(&shown);
        let state = Arc::clone(&state);
        tokio::spawn(async move {
            type_out(Typewriter::new(LOVE_LETTER), Duration::from_millis(50), |typed| {
                let mut shown = shown.lock().unwrap();
                assert!(typed.starts_with(shown.as_str()));
                *shown = typed.to_string();
            })
            .await;
            state.lock().unwrap().letter.finish()
        })
    };

    tokio::time::sleep(Duration::from_millis(525)).await;
    assert_eq!(shown.lock().unwrap().as_str(), "My Dearest");
    assert!(!state.lock().unwrap().letter.is_typed());

    assert!(task.await.unwrap(), "finish flips exactly once");
    assert_eq!(shown.lock().unwrap().as_str(), LOVE_LETTER);
    assert!(state.lock().unwrap().letter.is_typed());
    assert!(!state.lock().unwrap().letter.finish());
}

// ============================================================================
// Hug reveal delay
// ============================================================================

#[tokio::test(start_paused = true)]
async fn hug_message_shows_after_delay() {
    let config = PageConfig::default();
    let state: SharedState = Arc::default();

    let reveal = change_strength(&state, 8, &config);
    assert!(!hug_visible(&state));

    tokio::time::sleep(Duration::from_millis(1999)).await;
    assert!(!hug_visible(&state));
    assert_eq!(state.lock().unwrap().hug.strength().get(), 8);

    assert!(reveal.await.unwrap());
    assert!(hug_visible(&state));
    assert_eq!(state.lock().unwrap().hug.strength().get(), 8);

    // Stays visible until the next change.
    tokio::time::sleep(Duration::from_secs(30)).await;
    assert!(hug_visible(&state));
    let _ = change_strength(&state, 1, &config);
    assert!(!hug_visible(&state));
}

#[tokio::test(start_paused = true)]
async fn rapid_changes_reveal_only_after_last_delay() {
    let config = PageConfig::default();
    let state: SharedState = Arc::default();

    let first = change_strength(&state, 3, &config);
    tokio::time::sleep(Duration::from_millis(1500)).await;
    let second = change_strength(&state, 9, &config);

    // First timer fires at 2000ms but is stale.
    assert!(!first.await.unwrap());
    assert!(!hug_visible(&state));

    assert!(second.await.unwrap());
    assert!(hug_visible(&state));
    assert_eq!(state.lock().unwrap().hug.strength().get(), 9);
}

#[tokio::test(start_paused = true)]
async fn every_policy_reveals_on_first_timer() {
    let config = PageConfig {
        reveal_policy: RevealPolicy::Every,
        ..PageConfig::default()
    };
    let state: SharedState = Arc::default();

    let first = change_strength(&state, 3, &config);
    tokio::time::sleep(Duration::from_millis(1500)).await;
    let second = change_strength(&state, 9, &config);

    assert!(first.await.unwrap());
    assert!(hug_visible(&state));
    assert!(second.await.unwrap());
    assert!(hug_visible(&state));
}

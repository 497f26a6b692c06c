#![cfg(feature = "delay")]

use std::{sync::Arc, time::Duration};

use ridecompare::{
    estimate::{self, Estimator, RouteEstimate, RouteKey},
    pending::{RouteState, RouteWatcher},
};
use tokio::time::advance;

fn watcher() -> RouteWatcher {
    RouteWatcher::new(Arc::new(Estimator::default()))
}

/// Lets spawned tasks run after the clock moved.
async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn publishes_after_delay() {
    let mut watcher = watcher();
    watcher.watch("Downtown", "Marina").unwrap();
    assert!(watcher.state().is_pending());

    advance(Duration::from_millis(499)).await;
    settle().await;
    assert!(watcher.state().is_pending());

    advance(Duration::from_millis(2)).await;
    settle().await;
    assert_eq!(
        watcher.state(),
        RouteState::Ready {
            key: RouteKey::new("Downtown", "Marina"),
            estimate: RouteEstimate::new(5.7, 15),
        }
    );
}

#[tokio::test(start_paused = true)]
async fn newer_pair_cancels_pending_one() {
    let mut watcher = watcher();
    watcher.watch("PESU RR", "Reva University").unwrap();

    advance(Duration::from_millis(300)).await;
    settle().await;
    watcher.watch("Downtown", "Marina").unwrap();

    // The first pair would have landed here
    advance(Duration::from_millis(250)).await;
    settle().await;
    assert_eq!(
        watcher.state(),
        RouteState::Pending {
            key: RouteKey::new("Downtown", "Marina")
        }
    );

    advance(Duration::from_millis(300)).await;
    settle().await;
    let state = watcher.state();
    assert_eq!(state.estimate(), Some(&RouteEstimate::new(5.7, 15)));

    advance(Duration::from_secs(5)).await;
    settle().await;
    assert_eq!(watcher.state(), state);
}

#[tokio::test(start_paused = true)]
async fn same_pair_does_not_restart_the_timer() {
    let mut watcher = watcher();
    watcher.watch("Downtown", "Marina").unwrap();
    advance(Duration::from_millis(400)).await;
    settle().await;

    // Same pair, only casing differs
    watcher.watch("downtown", "MARINA").unwrap();
    advance(Duration::from_millis(150)).await;
    settle().await;
    assert!(watcher.state().estimate().is_some());
}

#[tokio::test(start_paused = true)]
async fn rewatching_a_pair_restarts_its_delay() {
    let mut watcher = watcher();
    watcher.watch("Downtown", "Marina").unwrap();
    advance(Duration::from_millis(300)).await;
    settle().await;

    watcher.watch("Park X", "Lake Y").unwrap();
    watcher.watch("Downtown", "Marina").unwrap();

    // The first schedule of this pair would have landed here
    advance(Duration::from_millis(250)).await;
    settle().await;
    assert_eq!(
        watcher.state(),
        RouteState::Pending {
            key: RouteKey::new("Downtown", "Marina")
        }
    );

    advance(Duration::from_millis(300)).await;
    settle().await;
    assert_eq!(
        watcher.state().estimate(),
        Some(&RouteEstimate::new(5.7, 15))
    );
}

#[tokio::test(start_paused = true)]
async fn subscribers_see_only_the_latest_pair() {
    let mut watcher = watcher();
    let mut receiver = watcher.subscribe();
    watcher.watch("Park X", "Lake Y").unwrap();
    watcher.watch("Park View", "Green Park").unwrap();

    let state = receiver
        .wait_for(|state| state.estimate().is_some())
        .await
        .unwrap()
        .clone();
    assert_eq!(
        state,
        RouteState::Ready {
            key: RouteKey::new("Park View", "Green Park"),
            estimate: RouteEstimate::new(7.9, 22),
        }
    );
}

#[tokio::test(start_paused = true)]
async fn empty_input_cancels_and_rejects() {
    let mut watcher = watcher();
    watcher.watch("Downtown", "Marina").unwrap();
    let result = watcher.watch("Downtown", "  ");
    assert_eq!(
        result,
        Err(estimate::Error::InvalidInput {
            field: "destination"
        })
    );

    advance(Duration::from_secs(1)).await;
    settle().await;
    assert!(matches!(watcher.state(), RouteState::Rejected { .. }));
}

#[tokio::test(start_paused = true)]
async fn clear_returns_to_idle() {
    let mut watcher = watcher();
    watcher.watch("Downtown", "Marina").unwrap();
    watcher.clear();

    advance(Duration::from_secs(1)).await;
    settle().await;
    assert_eq!(watcher.state(), RouteState::Idle);
}

#[tokio::test(start_paused = true)]
async fn refresh_recomputes_with_longer_delay() {
    let mut watcher = watcher();
    watcher.watch("Downtown", "Marina").unwrap();
    advance(Duration::from_millis(600)).await;
    settle().await;
    assert!(watcher.state().estimate().is_some());

    watcher.refresh("Downtown", "Marina").unwrap();
    assert!(watcher.state().is_pending());

    advance(Duration::from_millis(1000)).await;
    settle().await;
    assert!(watcher.state().is_pending());

    advance(Duration::from_millis(600)).await;
    settle().await;
    assert!(watcher.state().estimate().is_some());
}

#[tokio::test(start_paused = true)]
async fn custom_delay() {
    let mut watcher = watcher().with_delay(Duration::from_millis(50));
    watcher.watch("Downtown", "Marina").unwrap();
    advance(Duration::from_millis(60)).await;
    settle().await;
    assert!(watcher.state().estimate().is_some());
}

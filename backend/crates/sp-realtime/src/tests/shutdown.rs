use crate::ShutdownCoordinator;

use tokio::time::{Duration, timeout};

#[tokio::test]
async fn given_coordinator_when_shutdown_triggered_then_waiting_guard_released() {
    let coordinator = ShutdownCoordinator::new();
    let mut guard = coordinator.subscribe_guard();

    let trigger = coordinator.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        trigger.shutdown();
    });

    let result = timeout(Duration::from_millis(500), guard.wait()).await;
    assert!(result.is_ok(), "guard should observe shutdown");
}

#[tokio::test]
async fn given_multiple_guards_when_shutdown_then_all_released() {
    let coordinator = ShutdownCoordinator::new();
    let mut first = coordinator.subscribe_guard();
    let mut second = coordinator.subscribe_guard();

    coordinator.shutdown();

    assert!(timeout(Duration::from_millis(10), first.wait()).await.is_ok());
    assert!(timeout(Duration::from_millis(10), second.wait()).await.is_ok());
}

#[tokio::test]
async fn given_shutdown_already_requested_when_guard_taken_later_then_released() {
    // Given
    let coordinator = ShutdownCoordinator::new();
    coordinator.shutdown();

    // When
    let mut late = coordinator.subscribe_guard();

    // Then
    assert!(timeout(Duration::from_millis(10), late.wait()).await.is_ok());
}

#[tokio::test]
async fn given_no_shutdown_when_waiting_then_guard_stays_pending() {
    let coordinator = ShutdownCoordinator::new();
    let mut guard = coordinator.subscribe_guard();

    assert!(!coordinator.is_shutdown());
    assert!(timeout(Duration::from_millis(20), guard.wait()).await.is_err());
}

#[test]
fn given_repeated_shutdown_when_checked_then_flag_stays_set() {
    let coordinator = ShutdownCoordinator::new();

    coordinator.shutdown();
    coordinator.shutdown();

    assert!(coordinator.is_shutdown());
}

//! The simplified submit gate: truth table and liveness.

use std::time::Duration;

use formflow_form::SubmitGate;
use rstest::rstest;
use tokio::time::sleep;

async fn fill(gate: &SubmitGate, name: &str, code: &str, password: &str, confirm: &str) {
    gate.set_username(name).unwrap();
    gate.set_security_code(code).unwrap();
    gate.set_password(password).unwrap();
    gate.set_confirm_password(confirm).unwrap();
    sleep(Duration::from_millis(1)).await;
}

#[rstest]
#[case::all_good("A", "123", "secret", "secret", true)]
#[case::empty_code_passes("A", "", "secret", "secret", true)]
#[case::missing_name("", "123", "secret", "secret", false)]
#[case::code_not_multiple("A", "12", "secret", "secret", false)]
#[case::long_code("A", "123456", "secret", "secret", true)]
#[case::short_password("A", "123", "short", "short", false)]
#[case::empty_password("A", "123", "", "", false)]
#[case::empty_confirm("A", "123", "secret", "", false)]
#[case::mismatch("A", "123", "secret", "secreT", false)]
#[tokio::test(start_paused = true)]
async fn submit_truth_table(
    #[case] name: &str,
    #[case] code: &str,
    #[case] password: &str,
    #[case] confirm: &str,
    #[case] expected: bool,
) {
    let gate = SubmitGate::new().unwrap();
    fill(&gate, name, code, password, confirm).await;
    assert_eq!(gate.is_submit_enabled(), expected);
}

#[tokio::test(start_paused = true)]
async fn submit_reacts_without_waiting() {
    let gate = SubmitGate::new().unwrap();
    assert!(!gate.is_submit_enabled());

    fill(&gate, "Anna", "abc", "secret1", "secret1").await;
    assert!(gate.is_submit_enabled());

    // changing the password alone breaks the match
    gate.set_password("secret2").unwrap();
    sleep(Duration::from_millis(1)).await;
    assert!(!gate.is_submit_enabled());
}

#[tokio::test(start_paused = true)]
async fn submit_subscription_sees_transitions() {
    let gate = SubmitGate::new().unwrap();
    let mut signal = gate.subscribe();
    assert_eq!(*signal.borrow_and_update(), Some(false));

    fill(&gate, "Anna", "abc", "secret1", "secret1").await;
    assert!(signal.has_changed().unwrap());
    assert_eq!(*signal.borrow_and_update(), Some(true));
}

#[tokio::test(start_paused = true)]
async fn submit_release_stops_updates() {
    let mut gate = SubmitGate::new().unwrap();
    gate.release();
    assert!(gate.is_released());
    assert!(gate.set_username("Anna").is_err());
    assert!(!gate.is_submit_enabled());
}

use super::*;

#[test]
fn button_reads_sending_only_while_submitting() {
    assert_eq!(submit_label(SubmitStatus::Submitting), "Sending...");
    for status in [SubmitStatus::Idle, SubmitStatus::Success, SubmitStatus::Error] {
        assert_eq!(submit_label(status), "Send Message");
    }
}

#[test]
fn no_feedback_before_an_attempt_settles() {
    assert_eq!(feedback(SubmitStatus::Idle), None);
    assert_eq!(feedback(SubmitStatus::Submitting), None);
}

#[test]
fn success_and_error_have_distinct_messages() {
    let success = feedback(SubmitStatus::Success).unwrap();
    let error = feedback(SubmitStatus::Error).unwrap();
    assert_eq!(success.message, SUCCESS_MESSAGE);
    assert_eq!(error.message, ERROR_MESSAGE);
    assert!(success.class.ends_with("--success"));
    assert!(error.class.ends_with("--error"));
}

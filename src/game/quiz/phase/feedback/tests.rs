use super::*;
use crate::game::quiz::definition::Verdict;
use crate::output::mock::MockGameOutput;

fn make_state(
    policy: FeedbackPolicy,
    is_correct: bool,
    output: MockGameOutput,
) -> FeedbackState<MockGameOutput> {
    let question = Question {
        prompt: "example prompt".to_owned(),
        category: 2,
        expected_answer: Verdict::Ai,
        correct_feedback: Some("Well spotted".to_owned()),
        incorrect_feedback: Some("That one was written by a machine".to_owned()),
    };
    let choice = if is_correct { Verdict::Ai } else { Verdict::NotAi };
    let progress = Progress {
        answered: 1,
        total: 10,
        score: if is_correct { 1 } else { 0 },
    };
    FeedbackState::new(
        question,
        AnswerResult { choice, is_correct },
        progress,
        policy,
        output,
    )
}

#[test]
fn shows_correct_feedback() {
    let output = MockGameOutput::new();
    let mut state = make_state(FeedbackPolicy::Manual, true, output.clone());
    state.on_begin();
    assert_eq!(
        output.flush(),
        [
            Message::AnswerFeedback {
                is_correct: true,
                expected: Verdict::Ai,
                feedback: Some("Well spotted".to_owned()),
            },
            Message::Progress(Progress {
                answered: 1,
                total: 10,
                score: 1,
            }),
        ]
    );
}

#[test]
fn shows_incorrect_feedback() {
    let output = MockGameOutput::new();
    let mut state = make_state(FeedbackPolicy::Manual, false, output.clone());
    state.on_begin();
    assert!(output.contains_message(&Message::AnswerFeedback {
        is_correct: false,
        expected: Verdict::Ai,
        feedback: Some("That one was written by a machine".to_owned()),
    }));
}

#[test]
fn manual_feedback_waits_for_dismissal() {
    let output = MockGameOutput::new();
    let mut state = make_state(FeedbackPolicy::Manual, true, output);
    state.on_begin();
    state.on_tick(Duration::from_secs(60));
    assert!(!state.is_over());
    state.dismiss();
    assert!(state.is_over());
}

#[test]
fn timed_feedback_ends_after_delay() {
    let output = MockGameOutput::new();
    let policy = FeedbackPolicy::Timed(Duration::from_millis(1500));
    let mut state = make_state(policy, true, output);
    state.on_begin();
    assert!(!state.is_over());
    state.on_tick(Duration::from_millis(1000));
    assert!(!state.is_over());
    state.on_tick(Duration::from_millis(500));
    assert!(state.is_over());
}

#[test]
fn timed_feedback_can_be_dismissed_early() {
    let output = MockGameOutput::new();
    let policy = FeedbackPolicy::Timed(Duration::from_millis(1500));
    let mut state = make_state(policy, false, output);
    state.on_begin();
    state.dismiss();
    assert!(state.is_over());
}

use serde_json::{json, Value};

use crate::challenge_engine::{
    helpers::format_answer,
    models::{AnswerOutcome, Phase, SessionSnapshot, SessionSummary},
};

/// Format seconds as the game screen clock, e.g. 75 -> "1:15".
pub fn clock_label(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Main line of the game screen: the problem while running, the end message after.
fn display_line(snapshot: &SessionSnapshot) -> String {
    match snapshot.phase {
        Phase::Ready   => String::new(),
        Phase::Running => snapshot.current_problem_text.clone().unwrap_or_default(),
        Phase::Ended   => snapshot.end_message.clone().unwrap_or_default(),
    }
}

/// Map a [`SessionSnapshot`] to the JSON object the game screen renders.
pub fn to_view_json(snapshot: &SessionSnapshot) -> Value {
    let feedback = match snapshot.last_answer_correct {
        Some(true)  => "correct",
        Some(false) => "incorrect",
        None        => "",
    };

    json!({
        "mode": snapshot.mode.code(),
        "mode_label": snapshot.mode.to_string(),
        "difficulty": snapshot.difficulty.code(),
        "phase": snapshot.phase.to_string(),
        "score": snapshot.score,
        "incorrect": snapshot.incorrect_count,
        "question": snapshot.question_index,
        "clock": clock_label(snapshot.seconds_shown),
        "display": display_line(snapshot),
        "feedback": feedback,
        "accepting_answers": snapshot.phase == Phase::Running,
    })
}

/// Feedback toast for one submission; `Null` when the input was ignored.
pub fn outcome_json(outcome: &AnswerOutcome) -> Value {
    match outcome {
        AnswerOutcome::Ignored => Value::Null,
        AnswerOutcome::Correct => json!({ "correct": true }),
        AnswerOutcome::Incorrect { expected } => json!({
            "correct": false,
            "expected": format_answer(*expected),
        }),
    }
}

/// Map a finished session's [`SessionSummary`] to the results-card JSON.
pub fn summary_json(summary: &SessionSummary) -> Value {
    json!({
        "mode": summary.mode.code(),
        "difficulty": summary.difficulty.code(),
        "title": summary.end_message,
        "score": summary.score,
        "incorrect": summary.incorrect_count,
        "answered": summary.questions_answered,
        "time": clock_label(summary.elapsed_seconds),
        "accuracy": format!("{:.0}%", summary.accuracy_percent),
    })
}

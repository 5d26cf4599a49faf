use std::fmt::Write;

use quiz_session::{ResultView, SessionView};

pub const HELP: &str =
    "Commands: 1-n or a-d choose an answer, n next, p previous, r restart, q quit, h help";

pub fn rules(view: &SessionView, focus_monitored: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.title);
    let _ = writeln!(out, "{}", "=".repeat(view.title.chars().count().max(8)));
    let _ = writeln!(out, "{} questions, shown in random order.", view.total);
    match &view.remaining {
        Some(clock) => {
            let _ = writeln!(out, "Time limit: {clock}. The quiz ends when the clock runs out.");
        }
        None => {
            let _ = writeln!(out, "No time limit.");
        }
    }
    let _ = writeln!(out, "Answer each question before moving on.");
    if focus_monitored {
        let _ = writeln!(
            out,
            "Switching away from this terminal skips the current question as a penalty."
        );
    }
    out.push_str(HELP);
    out
}

pub fn question(view: &SessionView) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "\nQuestion {}/{}  [{}%]",
        view.position, view.total, view.progress
    );
    if let Some(clock) = &view.remaining {
        let _ = write!(out, "  time {clock}");
    }
    let _ = writeln!(out, "\n{}", view.prompt);
    for option in &view.options {
        let marker = if view.selected.as_deref() == Some(option.id.as_str()) {
            '>'
        } else {
            ' '
        };
        let _ = writeln!(out, " {marker} {}) {}", option.letter, option.text);
    }
    if view.penalized {
        let _ = writeln!(out, "   (skipped as a penalty)");
    }
    let mut moves = Vec::new();
    if view.can_previous {
        moves.push("p previous");
    }
    if view.can_next {
        moves.push(if view.position == view.total {
            "n finish"
        } else {
            "n next"
        });
    }
    moves.push("q quit");
    out.push_str(&moves.join(", "));
    out
}

pub fn selected(view: &SessionView, option_id: &str) -> Option<String> {
    view.options
        .iter()
        .find(|option| option.id == option_id)
        .map(|option| format!("Selected {}) {}", option.letter, option.text))
}

pub fn result(view: &ResultView) -> String {
    format!(
        "\nQuiz complete: {}\nScore: {}/{} ({}%)\n{}\nr play again, q quit",
        view.result.quiz_title, view.result.score, view.result.total, view.percentage, view.message
    )
}

/// Countdown reminders: every full minute, at 30 seconds, and each of the last 10.
pub fn time_warning(remaining: u32) -> Option<String> {
    let due = remaining > 0 && (remaining % 60 == 0 || remaining == 30 || remaining <= 10);
    due.then(|| format!("[time] {} left", quiz_session::view::format_clock(remaining)))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use quiz_core::entities::QuizResult;
    use quiz_core::enums::SessionStatus;
    use quiz_session::{OptionView, ResultView, SessionView};
    use rstest::rstest;

    use super::*;

    fn view() -> SessionView {
        SessionView {
            quiz_id: "capitals".into(),
            title: "Capitals".into(),
            status: SessionStatus::InProgress,
            position: 2,
            total: 3,
            progress: 67,
            prompt: "Capital of Italy?".into(),
            options: vec![
                OptionView {
                    letter: 'A',
                    id: "o1".into(),
                    text: "Rome".into(),
                },
                OptionView {
                    letter: 'B',
                    id: "o2".into(),
                    text: "Milan".into(),
                },
            ],
            selected: Some("o2".into()),
            penalized: false,
            remaining: Some("1:05".into()),
            can_previous: true,
            can_next: true,
            result: None,
        }
    }

    #[test]
    fn question_marks_selection_and_moves() {
        let text = question(&view());
        assert!(text.contains("Question 2/3  [67%]  time 1:05"));
        assert!(text.contains("   A) Rome"));
        assert!(text.contains(" > B) Milan"));
        assert!(text.ends_with("p previous, n next, q quit"));
    }

    #[test]
    fn last_question_offers_finish() {
        let mut last = view();
        last.position = 3;
        last.can_previous = false;
        assert!(question(&last).ends_with("n finish, q quit"));
    }

    #[test]
    fn rules_mention_time_limit_and_focus() {
        let text = rules(&view(), true);
        assert!(text.starts_with("Capitals\n"));
        assert!(text.contains("Time limit: 1:05"));
        assert!(text.contains("penalty"));
        assert!(!rules(&view(), false).contains("penalty"));
    }

    #[test]
    fn selected_names_the_option() {
        assert_eq!(selected(&view(), "o1").as_deref(), Some("Selected A) Rome"));
        assert_eq!(selected(&view(), "zz"), None);
    }

    #[test]
    fn result_shows_score_and_grade_message() {
        let result = QuizResult {
            id: "r1".into(),
            quiz_id: "capitals".into(),
            quiz_title: "Capitals".into(),
            score: 2,
            total: 3,
            date: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        };
        let text = super::result(&ResultView::new(&result));
        assert!(text.contains("Score: 2/3 (67%)"));
        assert!(text.contains("Good effort!"));
    }

    #[rstest]
    #[case(120, Some("[time] 2:00 left"))]
    #[case(30, Some("[time] 0:30 left"))]
    #[case(7, Some("[time] 0:07 left"))]
    #[case(45, None)]
    #[case(0, None)]
    fn time_warnings(#[case] remaining: u32, #[case] expected: Option<&str>) {
        assert_eq!(time_warning(remaining).as_deref(), expected);
    }
}

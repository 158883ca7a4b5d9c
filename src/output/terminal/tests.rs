use super::*;
use crate::answer::classify;
use crate::bank::Choice;
use crate::quiz::Results;

fn judgment_question() -> QuestionItem {
    QuestionItem {
        id: 1,
        question_type: "单选".to_owned(),
        title: "<p>地球是<b>圆</b>的</p>".to_owned(),
        options: vec![Choice::new("true", "true"), Choice::new("false", "false")],
        correct_answer: vec!["true".to_owned()],
        ..Default::default()
    }
}

#[test]
fn judgment_options_hide_labels() {
    let text = render(&Message::QuestionBegins {
        index: 0,
        total: 3,
        question: judgment_question(),
        classification: classify(&judgment_question()),
    });
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "[1/3] (判断) 地球是圆的");
    assert_eq!(lines[1], "  1. 对");
    assert_eq!(lines[2], "  2. 错");
}

#[test]
fn multi_select_judgment_list_renders_as_judgment() {
    let question = QuestionItem {
        question_type: "多选".to_owned(),
        title: "下列判断正确的有".to_owned(),
        options: vec![
            Choice::new("A", "true 地球是圆的"),
            Choice::new("B", "false 太阳绕地球转"),
        ],
        ..Default::default()
    };
    let classification = classify(&question);
    assert!(classification.is_judgment);
    assert_eq!(classification.kind(), QuestionKind::MultiChoice);

    let text = render(&Message::QuestionBegins {
        index: 0,
        total: 1,
        question,
        classification,
    });
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "[1/1] (判断) 下列判断正确的有");
    assert_eq!(lines[1], "  1. 地球是圆的");
    assert_eq!(lines[2], "  2. 太阳绕地球转");
    assert!(text.contains(":check"));
}

#[test]
fn choice_options_show_labels() {
    let question = QuestionItem {
        question_type: "多选".to_owned(),
        title: "哪些是哺乳动物".to_owned(),
        options: vec![Choice::new("A", "猫"), Choice::new("B", "鸟")],
        images: vec!["https://example.com/cat.png".to_owned()],
        ..Default::default()
    };
    let text = render(&Message::QuestionBegins {
        index: 1,
        total: 2,
        classification: classify(&question),
        question,
    });
    assert!(text.starts_with("[2/2] (多选) 哪些是哺乳动物"));
    assert!(text.contains("  image: https://example.com/cat.png"));
    assert!(text.contains("  1. A. 猫"));
    assert!(text.contains("  2. B. 鸟"));
    assert!(text.contains(":check"));
}

#[test]
fn wrong_feedback_shows_correct_answer() {
    let text = render(&Message::Feedback {
        index: 0,
        grade: Some(false),
        correct_answer: vec!["猫".to_owned(), "狗".to_owned()],
    });
    assert_eq!(text, "  Wrong. Correct answer: 猫 | 狗");

    let text = render(&Message::Feedback {
        index: 0,
        grade: None,
        correct_answer: vec![],
    });
    assert!(text.contains("No correct answer"));
}

#[test]
fn results_suggest_retry_only_with_mistakes() {
    let perfect = Results {
        correct: 3,
        wrong: 0,
        ungraded: 1,
    };
    assert!(!render(&Message::Results(perfect)).contains(":retry"));

    let flawed = Results {
        correct: 1,
        wrong: 2,
        ungraded: 0,
    };
    let text = render(&Message::Results(flawed));
    assert!(text.starts_with("Finished 3 questions: 1 correct, 2 wrong, 0 ungraded"));
    assert!(text.contains(":retry"));
}

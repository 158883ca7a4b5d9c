use super::*;
use crate::bank::Choice;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn question(question_type: &str, options: &[(&str, &str)], correct: &[&str]) -> QuestionItem {
    QuestionItem {
        id: 1,
        question_type: question_type.to_owned(),
        title: "example title".to_owned(),
        options: options.iter().map(|(l, t)| Choice::new(l, t)).collect(),
        correct_answer: strings(correct),
        ..Default::default()
    }
}

#[test]
fn single_choice_end_to_end() {
    let q = question(
        "单选",
        &[("A", "高级语言"), ("B", "汇编语言")],
        &["高级语言"],
    );
    assert_eq!(check_answer(&q, &strings(&["高级语言"])), Some(true));
    assert_eq!(check_answer(&q, &strings(&["汇编语言"])), Some(false));
    assert_eq!(check_answer(&q, &[]), Some(false));
}

#[test]
fn multi_choice_ignores_selection_order() {
    let q = question("多选", &[("A", "猫"), ("B", "狗"), ("C", "鸟")], &["猫", "狗"]);
    assert_eq!(check_answer(&q, &strings(&["狗", "猫"])), Some(true));
    assert_eq!(check_answer(&q, &strings(&["猫", "狗"])), Some(true));
    assert_eq!(check_answer(&q, &strings(&["猫"])), Some(false));
}

#[test]
fn choice_rejects_superset_and_subset() {
    let q = question("单选", &[("A", "A文本"), ("B", "B文本")], &["A文本"]);
    assert_eq!(check_answer(&q, &strings(&["A文本", "B文本"])), Some(false));

    let q = question("多选", &[("A", "A文本"), ("B", "B文本")], &["A文本", "B文本"]);
    assert_eq!(check_answer(&q, &strings(&["A文本"])), Some(false));
}

#[test]
fn choice_compares_normalized_text() {
    let q = question("单选", &[("A", "Ｃ＋＋"), ("B", "Java")], &["Ｃ＋＋"]);
    assert_eq!(check_answer(&q, &strings(&["c++"])), Some(true));
}

#[test]
fn text_accepts_any_listed_phrasing() {
    let q = question("填空", &[], &["6143"]);
    assert_eq!(check_answer(&q, &strings(&["6143"])), Some(true));
    assert_eq!(check_answer(&q, &strings(&[" 6143 "])), Some(true));
    assert_eq!(check_answer(&q, &strings(&["6144"])), Some(false));

    let q = question("简答", &[], &["中央处理器", "CPU"]);
    assert_eq!(check_answer(&q, &strings(&["ｃｐｕ"])), Some(true));
}

#[test]
fn text_only_looks_at_the_first_answer() {
    let q = question("填空", &[], &["6143"]);
    assert_eq!(check_answer(&q, &strings(&["wrong", "6143"])), Some(false));
}

#[test]
fn blank_text_answer_is_wrong() {
    let q = question("填空", &[], &["6143"]);
    assert_eq!(check_answer(&q, &[]), Some(false));
    assert_eq!(check_answer(&q, &strings(&["   "])), Some(false));
}

#[test]
fn ungraded_without_correct_answer() {
    let q = question("单选", &[("A", "高级语言"), ("B", "汇编语言")], &[]);
    assert_eq!(check_answer(&q, &strings(&["高级语言"])), None);
    assert_eq!(check_answer(&q, &[]), None);
    let q = question("填空", &[], &[]);
    assert_eq!(check_answer(&q, &strings(&["6143"])), None);
}

#[test]
fn judgment_uses_the_choice_rule() {
    let q = question("未知", &[("true", "对"), ("false", "错")], &["对"]);
    assert_eq!(check_answer(&q, &strings(&["对"])), Some(true));
    assert_eq!(check_answer(&q, &strings(&["错"])), Some(false));
}

#[test]
fn grade_takes_an_explicit_kind() {
    let correct = strings(&["x"]);
    assert_eq!(grade(QuestionKind::Text, &correct, &strings(&[" X "])), Some(true));
    assert_eq!(grade(QuestionKind::MultiChoice, &correct, &strings(&["x", "x"])), Some(false));
}

#[test]
fn sorts_raw_text_before_normalizing() {
    // Raw order pairs "A" with "B" and "b" with "a", so case folding never lines them up.
    let correct = strings(&["a", "B"]);
    assert_eq!(grade(QuestionKind::MultiChoice, &correct, &strings(&["b", "A"])), Some(false));
    assert_eq!(grade(QuestionKind::MultiChoice, &correct, &strings(&["B", "a"])), Some(true));
}

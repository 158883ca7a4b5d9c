use super::*;

#[test]
fn strips_standard_answer_labels() {
    assert_eq!(sanitize("正确答案：6143"), "6143");
    assert_eq!(sanitize("标准答案: A"), "A");
    assert_eq!(sanitize("参考答案 ： 中央处理器"), "中央处理器");
    assert_eq!(sanitize("correct answer: B"), "B");
    assert_eq!(sanitize("CorrectAnswer：C"), "C");
}

#[test]
fn strips_my_answer_labels() {
    assert_eq!(sanitize("我的答案: B"), "B");
    assert_eq!(sanitize("My Answer：ABD"), "ABD");
}

#[test]
fn labels_are_stripped_in_the_middle_too() {
    assert_eq!(sanitize("x 正确答案：y"), "x y");
}

#[test]
fn labels_glued_to_text_are_kept() {
    assert_eq!(sanitize("非正确答案：y"), "非正确答案：y");
}

#[test]
fn strips_leading_blank_markers() {
    assert_eq!(sanitize("第3空: 指针"), "指针");
    assert_eq!(sanitize("第 12 空：数组"), "数组");
    assert_eq!(sanitize("2空 数组"), "数组");
    assert_eq!(sanitize("(1) 栈"), "栈");
    assert_eq!(sanitize("（2）队列"), "队列");
    assert_eq!(sanitize("3) 树"), "树");
}

#[test]
fn markers_are_only_stripped_at_the_start() {
    assert_eq!(sanitize("答案在第3空"), "答案在第3空");
    assert_eq!(sanitize("f(1) 的值"), "f(1) 的值");
}

#[test]
fn collapses_whitespace() {
    assert_eq!(sanitize("  int \n\t main  "), "int main");
    assert_eq!(sanitize(""), "");
    assert_eq!(sanitize("正确答案："), "");
}

#[test]
fn is_idempotent() {
    let inputs = [
        "正确答案：6143",
        "我的答案: B",
        "第1空:第2空: 数组",
        "1) 第1空 树",
        "第1空:正确答案: x",
        "(1)(2) 链表",
        "  My Answer : 正确答案：C  ",
        "plain text",
    ];
    for input in inputs.iter() {
        let once = sanitize(input);
        assert_eq!(sanitize(&once), once, "input: {:?}", input);
    }
}

#[test]
fn extracts_my_answer_chunk() {
    assert_eq!(
        extract_my_answer("我的答案：B 正确答案：A").as_deref(),
        Some("B")
    );
    assert_eq!(
        extract_my_answer("第1题 My Answer: 指针 数组 Correct Answer: 数组").as_deref(),
        Some("指针 数组")
    );
    assert_eq!(extract_my_answer("我的答案：C").as_deref(), Some("C"));
    assert_eq!(extract_my_answer("正确答案：A"), None);
    assert_eq!(extract_my_answer("我的答案："), None);
}

#[test]
fn extracts_standard_answer_chunk() {
    assert_eq!(
        extract_standard_answer("正确答案：A 我的答案：B").as_deref(),
        Some("A")
    );
    assert_eq!(
        extract_standard_answer("我的答案：B 正确答案：A").as_deref(),
        Some("A")
    );
    assert_eq!(
        extract_standard_answer("参考答案:\n  6143  ").as_deref(),
        Some("6143")
    );
    assert_eq!(extract_standard_answer("我的答案：B"), None);
}

#[test]
fn decodes_html_fragments() {
    assert_eq!(html_to_text("<p>高级<b>语言</b></p>"), "高级语言");
    assert_eq!(html_to_text("a &lt; b &amp;&amp; c"), "a < b && c");
    assert_eq!(html_to_text("  plain   text "), "plain text");
    assert_eq!(html_to_text("<img src=\"x.png\">"), "<img src=\"x.png\">");
}

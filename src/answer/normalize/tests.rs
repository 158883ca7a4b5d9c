use super::*;

#[test]
fn trims_and_lowercases() {
    assert_eq!(normalize("  Hello World \n"), "hello world");
}

#[test]
fn folds_full_width_forms() {
    assert_eq!(normalize("Ａ，Ｂ：１２３"), normalize("a,b:123"));
    assert_eq!(normalize("ＡＢＣ"), "abc");
    assert_eq!(normalize("（１）"), "(1)");
}

#[test]
fn folds_cjk_punctuation() {
    assert_eq!(normalize("你好。"), "你好.");
    assert_eq!(normalize("是吗？对！"), "是吗?对!");
}

#[test]
fn collapses_inner_whitespace() {
    assert_eq!(normalize("int   main\t( )"), "int main ( )");
    assert_eq!(normalize("a\u{3000}b"), "a b");
}

#[test]
fn leaves_other_text_alone() {
    assert_eq!(normalize("高级语言"), "高级语言");
    assert_eq!(normalize("x+y=z"), "x+y=z");
}

#[test]
fn is_idempotent() {
    let inputs = [
        "",
        "   ",
        "Ａ，Ｂ：１２３",
        "  Mixed   CASE\tand\u{3000}ＷＩＤＴＨ。 ",
        "（正确）答案！",
        "İstanbul",
        "a\u{00A0}b",
    ];
    for input in inputs.iter() {
        let once = normalize(input);
        assert_eq!(normalize(&once), once, "input: {:?}", input);
    }
}

use super::*;

#[test]
fn slugs_transliterate_names() {
    assert_eq!(slug("Quiz from mooc1.chaoxing.com"), "quiz-from-mooc1-chaoxing-com");
    assert_eq!(slug("  Bank 2024-05-01 "), "bank-2024-05-01");
    assert_eq!(slug("第一章"), "di-yi-zhang");
    assert_eq!(slug("???"), "bank");
}

#[test]
fn export_path_uses_format_extension() {
    assert_eq!(export_path("第一章", Format::Csv), PathBuf::from("di-yi-zhang.csv"));
    assert_eq!(export_path("", Format::Json), PathBuf::from("bank.json"));
}

#[test]
fn short_ids_keep_eight_characters() {
    assert_eq!(short_id("0123456789abcdef"), "01234567");
    assert_eq!(short_id("abc"), "abc");
}

use super::*;

fn animals() -> Vec<Choice> {
    vec![
        Choice::new("A", "猫"),
        Choice::new("B", "狗"),
        Choice::new("C", "鸟"),
    ]
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn splits_letter_runs() {
    assert_eq!(resolve(&animals(), &strings(&["AB"])), strings(&["猫", "狗"]));
    assert_eq!(resolve(&animals(), &strings(&["CA"])), strings(&["鸟", "猫"]));
}

#[test]
fn letter_runs_drop_unknown_letters() {
    assert_eq!(resolve(&animals(), &strings(&["ABD"])), strings(&["猫", "狗"]));
    assert!(resolve(&animals(), &strings(&["XYZ"])).is_empty());
}

#[test]
fn single_letter_with_suffix() {
    assert_eq!(resolve(&animals(), &strings(&["B."])), strings(&["狗"]));
    assert_eq!(resolve(&animals(), &strings(&["B、"])), strings(&["狗"]));
    assert_eq!(resolve(&animals(), &strings(&["B项"])), strings(&["狗"]));
    assert_eq!(resolve(&animals(), &strings(&["B "])), strings(&["狗"]));
    assert_eq!(resolve(&animals(), &strings(&["C"])), strings(&["鸟"]));
}

#[test]
fn unknown_single_letter_passes_through() {
    assert_eq!(resolve(&animals(), &strings(&["E"])), strings(&["E"]));
}

#[test]
fn text_passes_through() {
    assert_eq!(resolve(&animals(), &strings(&["狗"])), strings(&["狗"]));
    assert_eq!(resolve(&animals(), &strings(&["6143"])), strings(&["6143"]));
}

#[test]
fn boolean_labels_resolve_verbatim() {
    let options = vec![Choice::new("true", "对"), Choice::new("false", "错")];
    assert_eq!(resolve(&options, &strings(&["false"])), strings(&["错"]));
    assert_eq!(resolve(&options, &strings(&[" true "])), strings(&["对"]));
}

#[test]
fn deduplicates_in_first_seen_order() {
    assert_eq!(
        resolve(&animals(), &strings(&["B", "狗", "A", "AB"])),
        strings(&["狗", "猫"])
    );
}

#[test]
fn drops_empty_answers() {
    assert!(resolve(&animals(), &strings(&["", "   "])).is_empty());
    let options = vec![Choice::new("A", ""), Choice::new("B", "狗")];
    assert_eq!(resolve(&options, &strings(&["AB"])), strings(&["狗"]));
}

#[test]
fn no_options_means_no_label_lookup() {
    assert_eq!(resolve(&[], &strings(&["B."])), strings(&["B."]));
    assert!(resolve(&[], &strings(&["CPU"])).is_empty());
}

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;

use super::sanitize::{extract_my_answer, extract_standard_answer, normalize_ws, sanitize};
use super::{PageAccessor, RawFields};
use crate::bank::Choice;


fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

lazy_static! {
    static ref BOX_SELECTORS: Vec<Selector> = [
        ".questionLi",
        ".TiMu",
        ".queBox",
        ".examItem",
        ".workQuestion",
        ".quesItem",
        ".problemItem",
        ".questItem",
    ]
    .iter()
    .map(|css| selector(css))
    .collect();
    static ref BOX: Selector =
        selector(".TiMu,.questionLi,.examItem,.workQuestion,.quesItem,.problemItem,.questItem");
    static ref QUESTION_LI: Selector = selector(".questionLi");
    static ref QID: Selector = selector("[qid]");
    static ref CHOICE_WIDGET: Selector =
        selector(r#"div[role="radio"], div[role="checkbox"], .workTextWrap.answerBg"#);
    static ref SIBLING_CHOICE: Selector = selector(
        r#".workTextWrap.answerBg, .answerBg, div[role="radio"], div[role="checkbox"], [onclick*="addChoice"]"#
    );
    static ref TEXT_ENTRY: Selector =
        selector(r#"input[type="text"], textarea, [contenteditable="true"]"#);
    static ref FALLBACK_BOX: Selector = selector("div,section,article");
    static ref ANY_INPUT: Selector = selector(
        r#"input[type="radio"], input[type="checkbox"], input[type="text"], textarea"#
    );
    static ref ROLE_CHOICE: Selector = selector(
        r#"div[role="radio"], div[role="checkbox"], .workTextWrap.answerBg, [onclick*="addChoice"]"#
    );
    static ref RIGHT_ANSWER: Selector =
        selector(".rightAnswer,.standardAnswer,.answerRight,.correctAnswer");
    static ref RIGHT_ANSWER_BLOCK: Selector = selector(
        ".rightAnswer,.standardAnswer,.answerRight,.correctAnswer,.RightAnswer,.answer-correct"
    );
    static ref MY_ANSWER_BLOCK: Selector =
        selector(".myAnswer,.userAnswer,.answerMine,.answer-user");
    static ref MARK_ANSWER: Selector = selector(".mark_answer");

    static ref RADIO: Selector = selector(r#"input[type="radio"]"#);
    static ref CHECKBOX: Selector = selector(r#"input[type="checkbox"]"#);
    static ref ROLE_CHECKBOX: Selector = selector(r#"div[role="checkbox"]"#);
    static ref ROLE_RADIO: Selector = selector(r#"div[role="radio"], [onclick*="addChoice"]"#);
    static ref VIEW_OPTION: Selector =
        selector(".answerBg.workTextWrap, .workTextWrap.answerBg, span.num_option");
    static ref ANSWER_P: Selector = selector(".answer_p");
    static ref TEXT_INPUT: Selector = selector(r#"input[type="text"], textarea"#);

    static ref TITLE_SELECTORS: Vec<Selector> = [
        ".subject",
        ".stem",
        ".title",
        ".qTitle",
        ".des",
        ".topic",
        ".problem",
        ".quest-title",
        ".quesTitle",
        ".queTitle",
    ]
    .iter()
    .map(|css| selector(css))
    .collect();
    static ref TITLE_HEADING: Selector = selector("h1,h2,h3,.hd,.head,.tt");
    static ref TITLE_NOISE: Selector = selector("input,textarea,select,script,style");

    static ref CHOICE_INPUT: Selector =
        selector(r#"input[type="radio"], input[type="checkbox"]"#);
    static ref OPTION_NODE: Selector =
        selector("li, dd, .option, .opt, .answer, .ui-radio, .ui-checkbox, label, div");
    static ref ROLE_NODE: Selector = selector(r#"div[role="radio"], div[role="checkbox"]"#);
    static ref ANSWER_BG: Selector = selector(".workTextWrap.answerBg, .answerBg");
    static ref ADD_CHOICE: Selector = selector(r#"[onclick*="addChoice"]"#);
    static ref OPTION_MARKER: Selector = selector(".answer_p, span.num_option");
    static ref NUM_OPTION: Selector = selector("span.num_option");
    static ref OPTION_TEXT_DIRECT: Selector = selector(".answer_p p, .answer_p");
    static ref OPTION_TEXT_TARGET: Selector =
        selector("label, .label, .optText, .optionTxt, .txt, .content, p, span, i");
    static ref OPTION_NOISE: Selector = selector("input, script, style, span.num_option");
    static ref OPTION_LIST: Selector = selector(
        ".answers,.opts,.optionUl,.optionList,.options,.xuanxiang,.answerArea,.optList,.selectOptions, ul"
    );
    static ref OPTION_LIST_ITEM: Selector = selector("li, .opt, .option, .answer");

    static ref CHECKED_RADIO: Selector = selector(r#"input[type="radio"][checked]"#);
    static ref CHECKED_CHECKBOX: Selector = selector(r#"input[type="checkbox"][checked]"#);
    static ref TEXT_FIELD: Selector = selector(r#"input[type="text"]"#);
    static ref TEXTAREA: Selector = selector("textarea");
    static ref EDITABLE: Selector = selector(
        r#"[contenteditable="true"], .contenteditable, .richTextEditor, .ueditor, .editor"#
    );
    static ref IMAGE: Selector = selector("img");
    static ref PAGE_HEADING: Selector =
        selector("h1,h2,.paperTitle,.examTitle,.topTit,.header-title,.examName");
    static ref DOCUMENT_TITLE: Selector = selector("title");

    static ref SELECTED_CLASS_REGEX: Regex =
        Regex::new(r"\b(on|selected|active|checked)\b").unwrap();
    static ref MULTI_HINT_REGEX: Regex = Regex::new(r"多选|多選").unwrap();
    static ref JUDGMENT_HINT_REGEX: Regex = Regex::new(r"判断|对错").unwrap();
    static ref ARIA_LABEL_PREFIX_REGEX: Regex = Regex::new(r"^([A-Z])\s*").unwrap();
    static ref ARIA_LABEL_SUFFIX_REGEX: Regex = Regex::new(r"选择$").unwrap();
}

const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn letter_at(index: usize) -> String {
    LETTERS
        .chars()
        .nth(index)
        .map(String::from)
        .unwrap_or_default()
}

fn text_of(element: ElementRef) -> String {
    normalize_ws(&element.text().collect::<String>())
}

fn collect_text(element: ElementRef, skip: &Selector, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child_element) = ElementRef::wrap(child) {
            if !skip.matches(&child_element) {
                collect_text(child_element, skip, out);
            }
        }
    }
}

fn text_excluding(element: ElementRef, skip: &Selector) -> String {
    let mut out = String::new();
    collect_text(element, skip, &mut out);
    normalize_ws(&out)
}

fn closest<'a>(element: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    std::iter::once(element)
        .chain(element.ancestors().filter_map(ElementRef::wrap))
        .find(|e| selector.matches(e))
}

fn parent_element(element: ElementRef) -> Option<ElementRef> {
    element.parent().and_then(ElementRef::wrap)
}

fn next_element_sibling(element: ElementRef) -> Option<ElementRef> {
    element.next_siblings().find_map(ElementRef::wrap)
}

fn contains(element: ElementRef, selector: &Selector) -> bool {
    element.select(selector).next().is_some()
}

fn dedupe<'a, I: IntoIterator<Item = ElementRef<'a>>>(elements: I) -> Vec<ElementRef<'a>> {
    elements.into_iter().unique_by(|e| e.id()).collect()
}

fn owning_box(element: ElementRef) -> ElementRef {
    closest(element, &BOX)
        .or_else(|| parent_element(element))
        .unwrap_or(element)
}

fn is_question_box(element: &ElementRef) -> bool {
    contains(*element, &ANY_INPUT)
        || contains(*element, &ROLE_CHOICE)
        || contains(*element, &RIGHT_ANSWER)
        || contains(*element, &QID)
}

fn detect_type(question_box: ElementRef) -> String {
    let declared = question_box
        .value()
        .attr("typename")
        .or_else(|| question_box.value().attr("typname"))
        .unwrap_or("")
        .trim();
    for kind in ["多选", "单选", "判断", "填空"].iter() {
        if declared.contains(kind) {
            return kind.to_string();
        }
    }

    let detected = if contains(question_box, &RADIO) {
        "单选"
    } else if contains(question_box, &CHECKBOX) || contains(question_box, &ROLE_CHECKBOX) {
        "多选"
    } else if contains(question_box, &ROLE_RADIO) {
        "单选"
    } else if contains(question_box, &VIEW_OPTION) && contains(question_box, &ANSWER_P) {
        if MULTI_HINT_REGEX.is_match(&text_of(question_box)) {
            "多选"
        } else {
            "单选"
        }
    } else if contains(question_box, &TEXT_INPUT) {
        "填空"
    } else if JUDGMENT_HINT_REGEX.is_match(&text_of(question_box)) {
        "判断"
    } else {
        "未知"
    };
    detected.to_owned()
}

fn read_title(question_box: ElementRef) -> String {
    for title_selector in TITLE_SELECTORS.iter() {
        if let Some(title) = question_box.select(title_selector).next() {
            return text_of(title);
        }
    }
    if let Some(heading) = question_box.select(&TITLE_HEADING).next() {
        return text_of(heading);
    }
    text_excluding(question_box, &TITLE_NOISE)
}

fn choice_nodes_via_role(question_box: ElementRef) -> Vec<ElementRef> {
    let nodes = question_box
        .select(&ROLE_NODE)
        .chain(question_box.select(&ANSWER_BG))
        .chain(question_box.select(&ADD_CHOICE))
        .filter(|n| contains(*n, &OPTION_MARKER) || n.value().attr("aria-label").is_some());
    dedupe(nodes)
}

fn option_node_of_input(input: ElementRef) -> ElementRef {
    closest(input, &OPTION_NODE)
        .or_else(|| parent_element(input))
        .unwrap_or(input)
}

fn read_option_label(node: ElementRef) -> String {
    if let Some(marker) = node.select(&NUM_OPTION).next() {
        if let Some(data) = marker.value().attr("data").filter(|d| !d.is_empty()) {
            return data.to_owned();
        }
        return text_of(marker)
            .chars()
            .find(|c| c.is_ascii_uppercase())
            .map(String::from)
            .unwrap_or_default();
    }
    node.value()
        .attr("aria-label")
        .and_then(|aria| aria.chars().next())
        .filter(|c| c.is_ascii_uppercase())
        .map(String::from)
        .unwrap_or_default()
}

fn read_option_text(node: ElementRef) -> String {
    if let Some(direct) = node.select(&OPTION_TEXT_DIRECT).next() {
        return text_of(direct);
    }
    if let Some(aria) = node.value().attr("aria-label") {
        let text = ARIA_LABEL_PREFIX_REGEX.replace(aria, "");
        return normalize_ws(&ARIA_LABEL_SUFFIX_REGEX.replace(&text, ""));
    }
    let target = node
        .select(&OPTION_TEXT_TARGET)
        .find(|t| !NUM_OPTION.matches(t))
        .unwrap_or(node);
    text_excluding(target, &OPTION_NOISE)
}

fn extract_options(question_box: ElementRef) -> Vec<Choice> {
    let mut nodes: Vec<ElementRef> = question_box
        .select(&CHOICE_INPUT)
        .map(option_node_of_input)
        .collect();
    nodes.extend(choice_nodes_via_role(question_box));
    let mut nodes = dedupe(nodes);

    // A box that is itself one option widget stands for all of its siblings.
    if nodes.is_empty() && SIBLING_CHOICE.matches(&question_box) {
        let scope = parent_element(question_box).unwrap_or(question_box);
        let siblings = dedupe(scope.select(&SIBLING_CHOICE));
        if siblings.len() >= 2 {
            nodes = siblings;
        }
    }

    let options: Vec<Choice> = if nodes.is_empty() {
        match question_box.select(&OPTION_LIST).next() {
            Some(list) => list
                .select(&OPTION_LIST_ITEM)
                .enumerate()
                .map(|(index, item)| Choice::new(&letter_at(index), &read_option_text(item)))
                .filter(|o| !o.text.is_empty())
                .collect(),
            None => vec![],
        }
    } else {
        nodes
            .into_iter()
            .enumerate()
            .map(|(index, node)| {
                let label = read_option_label(node);
                Choice {
                    label: if label.is_empty() { letter_at(index) } else { label },
                    text: read_option_text(node),
                }
            })
            .filter(|o| !o.text.is_empty())
            .collect()
    };

    options.into_iter().unique().collect()
}

fn is_selected_widget(node: &ElementRef) -> bool {
    node.value().attr("aria-checked") == Some("true")
        || node
            .value()
            .attr("class")
            .map_or(false, |class| SELECTED_CLASS_REGEX.is_match(class))
}

/// Text of the box, followed by the text of the next element when that
/// element is not another question.
fn nearby_text(question_box: ElementRef) -> Vec<String> {
    let mut segments = vec![text_of(question_box)];
    if let Some(next) = next_element_sibling(question_box) {
        if !BOX.matches(&next) {
            segments.push(text_of(next));
        }
    }
    segments.retain(|s| !s.is_empty());
    segments
}

fn mark_answer_block(question_box: ElementRef) -> Option<ElementRef> {
    question_box.select(&MARK_ANSWER).next().or_else(|| {
        closest(question_box, &QUESTION_LI).and_then(|li| li.select(&MARK_ANSWER).next())
    })
}

fn selected_by_text(question_box: ElementRef) -> Vec<String> {
    if let Some(block) = mark_answer_block(question_box) {
        if let Some(answer) = extract_my_answer(&text_of(block)) {
            return vec![answer];
        }
    }
    if let Some(candidate) = question_box.select(&MY_ANSWER_BLOCK).next() {
        let text = text_of(candidate);
        if let Some(answer) = extract_my_answer(&text) {
            return vec![answer];
        }
        let sanitized = sanitize(&text);
        if !sanitized.is_empty() {
            return vec![sanitized];
        }
    }
    let nearby = nearby_text(question_box).join(" ");
    extract_my_answer(&nearby).into_iter().collect()
}

fn extract_selected(question_box: ElementRef) -> Vec<String> {
    let role_nodes = choice_nodes_via_role(question_box);
    let texts: Vec<String> = role_nodes
        .iter()
        .filter(|n| is_selected_widget(n))
        .map(|n| read_option_text(*n))
        .filter(|t| !t.is_empty())
        .collect();
    if !texts.is_empty() {
        return texts;
    }

    for checked in [&*CHECKED_RADIO, &*CHECKED_CHECKBOX].iter() {
        let texts: Vec<String> = question_box
            .select(checked)
            .map(|input| read_option_text(option_node_of_input(input)))
            .filter(|t| !t.is_empty())
            .collect();
        if !texts.is_empty() {
            return texts;
        }
    }

    let fields = question_box
        .select(&TEXT_FIELD)
        .map(|input| normalize_ws(input.value().attr("value").unwrap_or("")));
    let text_areas = question_box.select(&TEXTAREA).map(text_of);
    let editables = question_box.select(&EDITABLE).map(text_of);
    fields
        .chain(text_areas)
        .chain(editables)
        .filter(|t| !t.is_empty())
        .chain(selected_by_text(question_box))
        .collect()
}

fn extract_standard(question_box: ElementRef) -> Vec<String> {
    if let Some(block) = mark_answer_block(question_box) {
        if let Some(answer) = extract_standard_answer(&text_of(block)) {
            return vec![answer];
        }
    }
    if let Some(candidate) = question_box.select(&RIGHT_ANSWER_BLOCK).next() {
        let text = text_of(candidate);
        if !text.is_empty() {
            return vec![extract_standard_answer(&text).unwrap_or(text)];
        }
    }
    let nearby = nearby_text(question_box).join(" ");
    extract_standard_answer(&nearby).into_iter().collect()
}

fn extract_images(question_box: ElementRef) -> Vec<String> {
    question_box
        .select(&IMAGE)
        .filter_map(|img| img.value().attr("src"))
        .filter(|src| !src.is_empty())
        .map(str::to_owned)
        .unique()
        .collect()
}

/// A saved exam or homework page.
pub struct HtmlPage {
    document: Html,
}

impl HtmlPage {
    pub fn parse(html: &str) -> HtmlPage {
        HtmlPage {
            document: Html::parse_document(html),
        }
    }
}

impl PageAccessor for HtmlPage {
    type Container<'a> = ElementRef<'a> where Self: 'a;

    fn find_question_containers(&self) -> Vec<ElementRef<'_>> {
        let document = &self.document;

        let mut seen_qids = HashSet::new();
        let mut by_qid = Vec::new();
        for element in document.select(&QID) {
            let qid = element.value().attr("qid").unwrap_or("");
            if !qid.is_empty() && seen_qids.insert(qid) {
                by_qid.push(closest(element, &BOX).unwrap_or(element));
            }
        }

        let mut boxes: Vec<ElementRef> = Vec::new();
        for box_selector in BOX_SELECTORS.iter() {
            boxes.extend(document.select(box_selector));
        }
        boxes.extend(document.select(&CHOICE_WIDGET).map(owning_box));
        boxes.extend(document.select(&TEXT_ENTRY).map(owning_box));

        let containers = dedupe(by_qid.into_iter().chain(boxes));
        if !containers.is_empty() {
            return containers;
        }
        document.select(&FALLBACK_BOX).filter(is_question_box).collect()
    }

    fn extract_raw_fields(&self, container: &ElementRef<'_>) -> RawFields {
        let question_box = *container;
        RawFields {
            question_type: detect_type(question_box),
            title: read_title(question_box),
            options: extract_options(question_box),
            selected: extract_selected(question_box),
            standard: extract_standard(question_box),
            images: extract_images(question_box),
        }
    }

    fn page_headings(&self) -> HashSet<String> {
        self.document
            .select(&PAGE_HEADING)
            .chain(self.document.select(&DOCUMENT_TITLE))
            .map(text_of)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

use std::sync::OnceLock;

use ft_core::{FieldKind, FieldValidation, Node, SurveyRow};
use regex::Regex;

// Real xlsform types the converter knows about but has no renderable
// counterpart for. They fail loudly instead of being dropped silently.
const UNSUPPORTED_TYPES: &[&str] = &[
    "integer",
    "range",
    "geopoint",
    "geotrace",
    "geoshape",
    "datetime",
    "image",
    "audio",
    "video",
    "file",
    "barcode",
    "acknowledge",
    "hidden",
    "xml-external",
    // metadata
    "start",
    "end",
    "today",
    "deviceid",
    "subscriberid",
    "simserial",
    "phonenumber",
    "username",
    "email",
];

pub(crate) fn is_supported_field(row_type: &str) -> bool {
    matches!(
        row_type,
        "decimal" | "text" | "select_one yes_no" | "note" | "date" | "time" | "calculate"
    ) || select_one_list(row_type).is_some()
        || select_multiple_list(row_type).is_some()
}

pub(crate) fn is_unsupported_field(row_type: &str) -> bool {
    UNSUPPORTED_TYPES.contains(&row_type) || row_type.starts_with("rank ")
}

pub(crate) fn select_one_list(row_type: &str) -> Option<&str> {
    select_one_regex()
        .captures(row_type)
        .and_then(|captures| captures.get(1))
        .map(|list| list.as_str())
}

pub(crate) fn select_multiple_list(row_type: &str) -> Option<&str> {
    select_multiple_regex()
        .captures(row_type)
        .and_then(|captures| captures.get(1))
        .map(|list| list.as_str())
}

fn select_one_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^select_one (.+)$").expect("select_one regex must compile"))
}

fn select_multiple_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^select_multiple (.+)$").expect("select_multiple regex must compile")
    })
}

// Navigation ids are filled in later. The caller must only pass rows
// whose type is supported; anything else is a programming error.
pub(crate) fn build_field(row: &SurveyRow) -> Node {
    let (field_kind, choice_origin_ref, html) = match row.row_type.as_str() {
        "decimal" => (FieldKind::Number, None, None),
        "text" => (FieldKind::String, None, None),
        // The boolean special case wins over the generic select_one rule.
        "select_one yes_no" => (FieldKind::Boolean, None, None),
        "note" => (FieldKind::Note, None, Some(row.label.clone())),
        "date" => (FieldKind::Date, None, None),
        "time" => (FieldKind::Time, None, None),
        "calculate" => (FieldKind::Formula, None, None),
        other => {
            if let Some(list) = select_one_list(other) {
                (FieldKind::SingleChoice, Some(list.to_string()), None)
            } else if let Some(list) = select_multiple_list(other) {
                (FieldKind::MultipleChoice, Some(list.to_string()), None)
            } else if is_unsupported_field(other) {
                panic!("unsupported row type: {}", other);
            } else {
                panic!("unrecognized row type: {}", other);
            }
        }
    };

    Node::Field {
        id: 0,
        previous: 0,
        name: row.name.clone(),
        label: row.label.clone(),
        field_kind,
        choice_origin_ref,
        html,
        validation: (row.required == "yes").then_some(FieldValidation { not_empty: true }),
        line: row.line_number,
    }
}

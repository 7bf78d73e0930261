use super::*;
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use ft_core::{ChoiceRow, FieldKind, SurveyRow};

fn rows(specs: &[(&str, &str)]) -> Vec<SurveyRow> {
    specs
        .iter()
        .enumerate()
        .map(|(index, (row_type, name))| SurveyRow {
            row_type: (*row_type).to_string(),
            name: (*name).to_string(),
            label: format!("Label {}", name),
            line_number: index as u32 + 2,
            ..SurveyRow::default()
        })
        .collect()
}

fn choice(list_name: &str, value: &str, label: &str, line_number: u32) -> ChoiceRow {
    ChoiceRow {
        list_name: list_name.to_string(),
        value: value.to_string(),
        label: label.to_string(),
        line_number,
    }
}

fn form(survey: Vec<SurveyRow>, choices: Vec<ChoiceRow>) -> XlsForm {
    XlsForm {
        file_name: "test.xml".to_string(),
        survey,
        choices,
    }
}

fn assert_navigation(nodes: &[Node], parent: i64, seen: &mut Vec<i64>) {
    for (index, node) in nodes.iter().enumerate() {
        if index == 0 {
            assert_eq!(node.id(), parent * 1000 + 1, "first child of {}", parent);
            assert_eq!(node.previous(), parent);
        } else {
            assert_eq!(node.id(), nodes[index - 1].id() + 1);
            assert_eq!(node.previous(), nodes[index - 1].id());
        }
        seen.push(node.id());
        assert_navigation(node.children(), node.id(), seen);
    }
}

#[test]
fn a_single_loose_question_compiles_to_the_form_slide() {
    let mut survey = rows(&[("text", "q1")]);
    survey[0].required = "yes".to_string();

    let tree = convert(form(survey, vec![])).expect("form should convert");
    assert!(tree.choice_origins.is_empty());
    assert_eq!(tree.slides.len(), 1);

    let slide = &tree.slides[0];
    assert_eq!(slide.name(), "form");
    assert_eq!(slide.label(), "Form");
    assert_eq!(slide.id(), 1);
    assert_eq!(slide.previous(), 0);
    assert!(matches!(slide, Node::Slide { .. }));

    let field = &slide.children()[0];
    assert_eq!(field.id(), 1001);
    assert_eq!(field.previous(), 1);
    match field {
        Node::Field {
            field_kind,
            validation,
            ..
        } => {
            assert_eq!(*field_kind, FieldKind::String);
            assert!(validation.is_some());
        }
        other => panic!("expected a field, got {:?}", other),
    }
}

#[test]
fn ids_are_unique_and_chain_through_the_whole_tree() {
    let tree = convert(form(
        rows(&[
            ("begin group", "a"),
            ("text", "a1"),
            ("begin group", "b"),
            ("text", "b1"),
            ("date", "b2"),
            ("end group", ""),
            ("note", "a2"),
            ("end group", ""),
            ("begin group", "c"),
            ("time", "c1"),
            ("end group", ""),
        ]),
        vec![],
    ))
    .expect("form should convert");

    let mut seen = Vec::new();
    assert_navigation(&tree.slides, 0, &mut seen);
    let unique: BTreeSet<i64> = seen.iter().copied().collect();
    assert_eq!(unique.len(), seen.len(), "ids must be unique");
}

#[test]
fn converting_twice_yields_identical_trees() {
    let make = || {
        form(
            rows(&[
                ("begin group", "g"),
                ("select_one pets", "fav"),
                ("select_multiple pets", "all"),
                ("end group", ""),
            ]),
            vec![
                choice("pets", "cat", "Cat", 2),
                choice("pets", "dog", "Dog", 3),
            ],
        )
    };
    let first = convert(make()).expect("form should convert");
    let second = convert(make()).expect("form should convert");
    assert_eq!(first, second);
}

#[test]
fn select_one_yes_no_needs_no_choice_list() {
    let tree = convert(form(
        rows(&[("begin group", "g"), ("select_one yes_no", "ok"), ("end group", "")]),
        vec![],
    ))
    .expect("boolean question should convert without any choices");

    match &tree.slides[0].children()[0] {
        Node::Field {
            field_kind,
            choice_origin_ref,
            ..
        } => {
            assert_eq!(*field_kind, FieldKind::Boolean);
            assert!(choice_origin_ref.is_none());
        }
        other => panic!("expected a field, got {:?}", other),
    }
}

#[test]
fn an_undefined_list_fails_at_the_reference_check() {
    let error = convert(form(
        rows(&[
            ("begin group", "g"),
            ("select_multiple colors", "fav"),
            ("end group", ""),
        ]),
        vec![choice("pets", "cat", "Cat", 2)],
    ))
    .expect_err("dangling list reference");

    assert_eq!(error.code, "CHOICES_REF_UNDEFINED");
    // The select_multiple row sits on line 3 of the survey sheet.
    assert_eq!(error.line, Some(3));
}

#[test]
fn unused_choice_lists_are_still_emitted() {
    let tree = convert(form(
        rows(&[("begin group", "g"), ("select_one pets", "fav"), ("end group", "")]),
        vec![
            choice("spare", "x", "X", 2),
            choice("pets", "cat", "Cat", 3),
        ],
    ))
    .expect("form should convert");

    let names: Vec<&str> = tree
        .choice_origins
        .iter()
        .map(|origin| origin.name.as_str())
        .collect();
    assert_eq!(names, vec!["spare", "pets"]);
}

#[test]
fn structural_errors_surface_with_their_lines() {
    let error = convert(form(rows(&[("text", "q1"), ("end group", "")]), vec![]))
        .expect_err("stray end group");
    assert_eq!(error.code, "SURVEY_END_GROUP_UNMATCHED");
    assert_eq!(error.line, Some(3));

    let error = convert(form(
        rows(&[("begin repeat", "r"), ("end repeat", ""), ("text", "loose")]),
        vec![],
    ))
    .expect_err("repeat next to loose question");
    assert_eq!(error.code, "SURVEY_REPEAT_WITH_UNGROUPED");
    assert_eq!(error.line, None);
}

#[test]
fn repeats_compile_and_number_like_any_other_slide() {
    let mut survey = rows(&[
        ("begin group", "intro"),
        ("text", "who"),
        ("end group", ""),
        ("begin repeat", "visit"),
        ("date", "when"),
        ("end repeat", ""),
    ]);
    survey[3].repeat_count = "4".to_string();

    let tree = convert(form(survey, vec![])).expect("form should convert");
    assert_eq!(tree.slides.len(), 2);
    match &tree.slides[1] {
        Node::RepeatingSlide {
            id,
            previous,
            max_repetitions,
            children,
            ..
        } => {
            assert_eq!(*id, 2);
            assert_eq!(*previous, 1);
            assert_eq!(*max_repetitions, Some(4));
            assert_eq!(children[0].id(), 2001);
        }
        other => panic!("expected a repeating slide, got {:?}", other),
    }
}

#[test]
fn the_fan_out_limit_is_enforced_end_to_end() {
    let mut specs: Vec<(String, String)> = vec![("begin group".to_string(), "big".to_string())];
    for index in 0..1000 {
        specs.push(("text".to_string(), format!("q{}", index)));
    }
    specs.push(("end group".to_string(), String::new()));
    let survey: Vec<SurveyRow> = specs
        .iter()
        .enumerate()
        .map(|(index, (row_type, name))| SurveyRow {
            row_type: row_type.clone(),
            name: name.clone(),
            label: name.clone(),
            line_number: index as u32 + 2,
            ..SurveyRow::default()
        })
        .collect();

    let error = convert(form(survey, vec![])).expect_err("too many siblings");
    assert_eq!(error.code, "NAV_FAN_OUT_EXCEEDED");
}

#[test]
fn nesting_deeper_than_the_id_scheme_is_rejected() {
    // Seven nested groups are numbered fine; the question inside the
    // seventh would need an id past i64 and must fail, not wrap around.
    let error = convert(form(
        rows(&[
            ("begin group", "g1"),
            ("begin group", "g2"),
            ("begin group", "g3"),
            ("begin group", "g4"),
            ("begin group", "g5"),
            ("begin group", "g6"),
            ("begin group", "g7"),
            ("text", "q"),
            ("end group", ""),
            ("end group", ""),
            ("end group", ""),
            ("end group", ""),
            ("end group", ""),
            ("end group", ""),
            ("end group", ""),
        ]),
        vec![],
    ))
    .expect_err("ids cannot number this depth");

    assert_eq!(error.code, "NAV_DEPTH_EXCEEDED");
    // The question row sits on line 9 of the survey sheet.
    assert_eq!(error.line, Some(9));
}

#[test]
fn an_empty_survey_converts_to_an_empty_form() {
    let tree = convert(form(vec![], vec![])).expect("empty survey should convert");
    assert!(tree.slides.is_empty());
    assert!(tree.choice_origins.is_empty());
}

#[test]
fn the_sample_workbook_matches_its_expected_json() {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("testdata");
    let source =
        fs::read_to_string(dir.join("village_survey.xml")).expect("fixture should be readable");
    let book = ft_parser::parse_workbook_xml("village_survey.xml", &source)
        .expect("fixture should parse");
    let decoded = ft_parser::decode_workbook(&book).expect("fixture should decode");
    let tree = convert(decoded).expect("fixture should convert");

    let expected: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(dir.join("village_survey.expected.json"))
            .expect("expected json should be readable"),
    )
    .expect("expected json should parse");
    assert_eq!(
        serde_json::to_value(&tree).expect("tree should serialize"),
        expected
    );
}

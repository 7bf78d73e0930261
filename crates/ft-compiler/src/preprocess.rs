use ft_core::{FormError, SurveyRow};

use crate::{BEGIN_GROUP, BEGIN_REPEAT, END_GROUP, END_REPEAT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Group,
    Repeat,
}

// Checks group/repeat nesting over the raw row stream and rewrites it so
// the builder always starts from exactly one well-formed top-level group.
// Questions outside any group are first wrapped into a "form" group; the
// whole survey is then wrapped into a phony "global" group.
pub(crate) fn preprocess_survey(survey: Vec<SurveyRow>) -> Result<Vec<SurveyRow>, FormError> {
    let mut stack: Vec<(BlockKind, u32)> = Vec::new();
    let mut ungrouped_questions = false;
    let mut has_repeats = false;

    for row in &survey {
        match row.row_type.as_str() {
            BEGIN_GROUP => {
                if matches!(stack.last(), Some((BlockKind::Repeat, _))) {
                    return Err(FormError::at_line(
                        "SURVEY_GROUP_IN_REPEAT",
                        format!(
                            "Groups can't be nested inside repeats (line {}).",
                            row.line_number
                        ),
                        row.line_number,
                    ));
                }
                stack.push((BlockKind::Group, row.line_number));
            }
            END_GROUP => {
                if !matches!(stack.last(), Some((BlockKind::Group, _))) {
                    return Err(FormError::at_line(
                        "SURVEY_END_GROUP_UNMATCHED",
                        format!("Unexpected \"end group\" (line {}).", row.line_number),
                        row.line_number,
                    ));
                }
                stack.pop();
            }
            BEGIN_REPEAT => {
                if !stack.is_empty() {
                    return Err(FormError::at_line(
                        "SURVEY_REPEAT_NESTED",
                        format!("Repeats can't be nested (line {}).", row.line_number),
                        row.line_number,
                    ));
                }
                stack.push((BlockKind::Repeat, row.line_number));
                has_repeats = true;
            }
            END_REPEAT => {
                if !matches!(stack.last(), Some((BlockKind::Repeat, _))) {
                    return Err(FormError::at_line(
                        "SURVEY_END_REPEAT_UNMATCHED",
                        format!("Unexpected \"end repeat\" (line {}).", row.line_number),
                        row.line_number,
                    ));
                }
                stack.pop();
            }
            _ => {
                if stack.is_empty() {
                    ungrouped_questions = true;
                }
            }
        }
    }

    if let Some(&(_, line)) = stack.last() {
        return Err(FormError::at_line(
            "SURVEY_BLOCK_UNTERMINATED",
            format!("Unterminated group or repeat (line {}).", line),
            line,
        ));
    }

    // Repeated sections and loose questions cannot share the top level:
    // the loose questions would fall inside or between repetitions.
    if ungrouped_questions && has_repeats {
        return Err(FormError::new(
            "SURVEY_REPEAT_WITH_UNGROUPED",
            "Repeats and ungrouped questions cannot coexist.",
        ));
    }

    let mut rows = survey;
    if ungrouped_questions {
        rows.insert(0, synthetic_row(BEGIN_GROUP, "form", "Form"));
        rows.push(synthetic_row(END_GROUP, "", ""));
    }
    rows.insert(0, synthetic_row(BEGIN_GROUP, "global", "Global"));
    rows.push(synthetic_row(END_GROUP, "", ""));
    Ok(rows)
}

// Synthetic wrapper rows carry line number 0: they have no source line.
fn synthetic_row(row_type: &str, name: &str, label: &str) -> SurveyRow {
    SurveyRow {
        row_type: row_type.to_string(),
        name: name.to_string(),
        label: label.to_string(),
        ..SurveyRow::default()
    }
}

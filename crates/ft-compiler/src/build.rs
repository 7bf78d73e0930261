use ft_core::{FormError, Node, SurveyRow};

use crate::fields::{build_field, is_supported_field, is_unsupported_field};
use crate::{BEGIN_GROUP, BEGIN_REPEAT, END_GROUP, END_REPEAT};

// `rows` must start with the block's begin row and end with the matching
// close row; the preprocessor guarantees that shape and handing over
// anything else is a programming error.
pub(crate) fn build_group(rows: &[SurveyRow]) -> Result<Node, FormError> {
    let opener = &rows[0];
    let repeating = match opener.row_type.as_str() {
        BEGIN_GROUP => false,
        BEGIN_REPEAT => true,
        _ => panic!("not a group"),
    };
    let max_repetitions = if repeating {
        parse_repeat_count(opener)?
    } else {
        None
    };

    let mut children = Vec::new();
    let mut i = 1;
    while i < rows.len() {
        let row = &rows[i];
        match row.row_type.as_str() {
            BEGIN_GROUP | BEGIN_REPEAT => {
                let end = block_end(rows, i);
                children.push(build_group(&rows[i..end])?);
                i = end;
                continue;
            }
            END_GROUP | END_REPEAT => {
                if i != rows.len() - 1 {
                    panic!("unexpected end of block");
                }
            }
            row_type if is_supported_field(row_type) => {
                children.push(build_field(row));
            }
            row_type if is_unsupported_field(row_type) => {
                return Err(FormError::at_line(
                    "FIELD_TYPE_UNSUPPORTED",
                    format!(
                        "Field type \"{}\" is not supported (line {}).",
                        row_type, row.line_number
                    ),
                    row.line_number,
                ));
            }
            row_type => {
                return Err(FormError::at_line(
                    "FIELD_TYPE_INVALID",
                    format!(
                        "Invalid type \"{}\" in survey (line {}).",
                        row_type, row.line_number
                    ),
                    row.line_number,
                ));
            }
        }
        i += 1;
    }

    if repeating {
        Ok(Node::RepeatingSlide {
            id: 0,
            previous: 0,
            name: opener.name.clone(),
            label: opener.label.clone(),
            max_repetitions,
            children,
            line: opener.line_number,
        })
    } else {
        Ok(Node::Group {
            id: 0,
            previous: 0,
            name: opener.name.clone(),
            label: opener.label.clone(),
            children,
            line: opener.line_number,
        })
    }
}

fn parse_repeat_count(row: &SurveyRow) -> Result<Option<u16>, FormError> {
    if row.repeat_count.is_empty() {
        return Ok(None);
    }
    match row.repeat_count.parse::<u16>() {
        Ok(count) if count > 0 => Ok(Some(count)),
        _ => Err(FormError::at_line(
            "REPEAT_COUNT_INVALID",
            format!(
                "Invalid repeat_count \"{}\" (line {}).",
                row.repeat_count, row.line_number
            ),
            row.line_number,
        )),
    }
}

// Index one past the close row of the block opened at `start`. Groups and
// repeats share the depth counter; kind mismatches were already rejected.
fn block_end(rows: &[SurveyRow], start: usize) -> usize {
    let mut depth = 1;
    for (index, row) in rows.iter().enumerate().skip(start + 1) {
        match row.row_type.as_str() {
            BEGIN_GROUP | BEGIN_REPEAT => depth += 1,
            END_GROUP | END_REPEAT => {
                depth -= 1;
                if depth == 0 {
                    return index + 1;
                }
            }
            _ => {}
        }
    }
    panic!("block end not found");
}

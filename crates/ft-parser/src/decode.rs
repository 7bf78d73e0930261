use ft_core::{ChoiceRow, FormError, SurveyRow, XlsForm};

use crate::spreadsheet::{Sheet, WorkBook};

const SURVEY_SHEET: &str = "survey";
const CHOICES_SHEET: &str = "choices";

struct ColumnSpec {
    name: &'static str,
    mandatory: bool,
}

const SURVEY_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec { name: "type", mandatory: true },
    ColumnSpec { name: "name", mandatory: true },
    ColumnSpec { name: "label", mandatory: true },
    ColumnSpec { name: "relevant", mandatory: false },
    ColumnSpec { name: "constraint", mandatory: false },
    ColumnSpec { name: "calculation", mandatory: false },
    ColumnSpec { name: "required", mandatory: false },
    ColumnSpec { name: "repeat_count", mandatory: false },
];

const CHOICES_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec { name: "list name", mandatory: true },
    ColumnSpec { name: "name", mandatory: true },
    ColumnSpec { name: "label", mandatory: true },
];

// Both sheets are mandatory. The first nonempty row of a sheet is its
// header; columns are matched by exact header text and may appear in any
// order. Rows whose cells are all empty are skipped.
pub fn decode_workbook(book: &WorkBook) -> Result<XlsForm, FormError> {
    Ok(XlsForm {
        file_name: book.file_name.clone(),
        survey: decode_survey_sheet(book)?,
        choices: decode_choices_sheet(book)?,
    })
}

fn decode_survey_sheet(book: &WorkBook) -> Result<Vec<SurveyRow>, FormError> {
    let sheet = mandatory_sheet(book, SURVEY_SHEET)?;
    let (header_index, columns) = resolve_columns(book, sheet, SURVEY_COLUMNS)?;

    let mut rows = Vec::new();
    for (index, cells) in sheet.rows.iter().enumerate().skip(header_index + 1) {
        if is_empty_row(cells) {
            continue;
        }
        rows.push(SurveyRow {
            row_type: column_value(cells, columns[0]),
            name: column_value(cells, columns[1]),
            label: column_value(cells, columns[2]),
            relevant: column_value(cells, columns[3]),
            constraint: column_value(cells, columns[4]),
            calculation: column_value(cells, columns[5]),
            required: column_value(cells, columns[6]),
            repeat_count: column_value(cells, columns[7]),
            line_number: (index + 1) as u32,
        });
    }
    Ok(rows)
}

fn decode_choices_sheet(book: &WorkBook) -> Result<Vec<ChoiceRow>, FormError> {
    let sheet = mandatory_sheet(book, CHOICES_SHEET)?;
    let (header_index, columns) = resolve_columns(book, sheet, CHOICES_COLUMNS)?;

    let mut rows = Vec::new();
    for (index, cells) in sheet.rows.iter().enumerate().skip(header_index + 1) {
        if is_empty_row(cells) {
            continue;
        }
        rows.push(ChoiceRow {
            list_name: column_value(cells, columns[0]),
            value: column_value(cells, columns[1]),
            label: column_value(cells, columns[2]),
            line_number: (index + 1) as u32,
        });
    }
    Ok(rows)
}

fn mandatory_sheet<'a>(book: &'a WorkBook, name: &str) -> Result<&'a Sheet, FormError> {
    book.sheet(name).ok_or_else(|| {
        FormError::new(
            "SHEET_MISSING",
            format!(
                "Missing mandatory sheet \"{}\" in \"{}\".",
                name, book.file_name
            ),
        )
    })
}

fn resolve_columns(
    book: &WorkBook,
    sheet: &Sheet,
    specs: &[ColumnSpec],
) -> Result<(usize, Vec<Option<usize>>), FormError> {
    let header_index = sheet
        .rows
        .iter()
        .position(|cells| !is_empty_row(cells))
        .ok_or_else(|| {
            FormError::new(
                "SHEET_EMPTY",
                format!(
                    "Sheet \"{}\" in \"{}\" has no header row.",
                    sheet.name, book.file_name
                ),
            )
        })?;

    let header = &sheet.rows[header_index];
    let mut columns = Vec::with_capacity(specs.len());
    for spec in specs {
        let found = header.iter().position(|cell| cell == spec.name);
        if found.is_none() && spec.mandatory {
            return Err(FormError::new(
                "SHEET_COLUMN_MISSING",
                format!(
                    "Sheet \"{}\" in \"{}\" is missing the mandatory column \"{}\".",
                    sheet.name, book.file_name, spec.name
                ),
            ));
        }
        columns.push(found);
    }
    Ok((header_index, columns))
}

fn column_value(cells: &[String], column: Option<usize>) -> String {
    column
        .and_then(|index| cells.get(index))
        .cloned()
        .unwrap_or_default()
}

fn is_empty_row(cells: &[String]) -> bool {
    cells.iter().all(|cell| cell.is_empty())
}

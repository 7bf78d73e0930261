use ft_core::FormError;
use roxmltree::{Document, Node};

// Namespace of SpreadsheetML 2003 workbooks, the single-file XML format
// Excel produces as "XML Spreadsheet 2003".
pub const SPREADSHEET_NS: &str = "urn:schemas-microsoft-com:office:spreadsheet";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    // Cell grid in sheet coordinates: `rows[i]` is spreadsheet row `i + 1`
    // and `rows[i][j]` is column `j + 1`. Rows and cells skipped in the
    // source via `ss:Index` are present as empty entries.
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkBook {
    pub file_name: String,
    pub sheets: Vec<Sheet>,
}

impl WorkBook {
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }
}

pub fn parse_workbook_xml(file_name: &str, source: &str) -> Result<WorkBook, FormError> {
    let document = Document::parse(source).map_err(|error| {
        FormError::new(
            "WORKBOOK_PARSE_ERROR",
            format!("Could not parse workbook \"{}\": {}", file_name, error),
        )
    })?;

    let root = document.root_element();
    if root.tag_name().name() != "Workbook" {
        return Err(FormError::new(
            "WORKBOOK_ROOT_INVALID",
            format!(
                "Expected <Workbook> root in \"{}\", got <{}>.",
                file_name,
                root.tag_name().name()
            ),
        ));
    }

    let mut sheets = Vec::new();
    for worksheet in root
        .children()
        .filter(|node| node.is_element() && node.tag_name().name() == "Worksheet")
    {
        let Some(name) = worksheet.attribute((SPREADSHEET_NS, "Name")) else {
            return Err(FormError::new(
                "WORKBOOK_SHEET_UNNAMED",
                format!("Worksheet without ss:Name in \"{}\".", file_name),
            ));
        };
        sheets.push(Sheet {
            name: name.to_string(),
            rows: parse_table(file_name, worksheet)?,
        });
    }

    Ok(WorkBook {
        file_name: file_name.to_string(),
        sheets,
    })
}

fn parse_table(file_name: &str, worksheet: Node<'_, '_>) -> Result<Vec<Vec<String>>, FormError> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let Some(table) = worksheet
        .children()
        .find(|node| node.is_element() && node.tag_name().name() == "Table")
    else {
        return Ok(rows);
    };

    for row in table
        .children()
        .filter(|node| node.is_element() && node.tag_name().name() == "Row")
    {
        let position = placement(file_name, row, rows.len())?;
        while rows.len() + 1 < position {
            rows.push(Vec::new());
        }
        rows.push(parse_row(file_name, row)?);
    }

    Ok(rows)
}

fn parse_row(file_name: &str, row: Node<'_, '_>) -> Result<Vec<String>, FormError> {
    let mut cells: Vec<String> = Vec::new();
    for cell in row
        .children()
        .filter(|node| node.is_element() && node.tag_name().name() == "Cell")
    {
        let position = placement(file_name, cell, cells.len())?;
        while cells.len() + 1 < position {
            cells.push(String::new());
        }
        cells.push(cell_text(cell));
    }
    Ok(cells)
}

// Rows and cells are laid out sequentially unless an ss:Index attribute
// repositions them. Indices are 1-based and may only move forward.
fn placement(file_name: &str, node: Node<'_, '_>, filled: usize) -> Result<usize, FormError> {
    let Some(raw) = node.attribute((SPREADSHEET_NS, "Index")) else {
        return Ok(filled + 1);
    };
    let index = match raw.parse::<usize>() {
        Ok(index) if index >= 1 => index,
        _ => {
            return Err(FormError::new(
                "WORKBOOK_INDEX_INVALID",
                format!("Invalid ss:Index \"{}\" in \"{}\".", raw, file_name),
            ));
        }
    };
    if index <= filled {
        return Err(FormError::new(
            "WORKBOOK_INDEX_INVALID",
            format!(
                "ss:Index \"{}\" in \"{}\" points at an already filled position.",
                raw, file_name
            ),
        ));
    }
    Ok(index)
}

fn cell_text(cell: Node<'_, '_>) -> String {
    cell.children()
        .find(|node| node.is_element() && node.tag_name().name() == "Data")
        .map(|data| {
            data.descendants()
                .filter(|node| node.is_text())
                .filter_map(|node| node.text())
                .collect()
        })
        .unwrap_or_default()
}

// One line of the survey sheet: a question or a block boundary. Cell text
// is carried verbatim, expression columns included; `line_number` is the
// 1-based spreadsheet row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurveyRow {
    pub row_type: String,
    pub name: String,
    pub label: String,
    pub relevant: String,
    pub constraint: String,
    pub calculation: String,
    pub required: String,
    pub repeat_count: String,
    pub line_number: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceRow {
    pub list_name: String,
    pub value: String,
    pub label: String,
    pub line_number: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XlsForm {
    pub file_name: String,
    pub survey: Vec<SurveyRow>,
    pub choices: Vec<ChoiceRow>,
}

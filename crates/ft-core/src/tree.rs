use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OriginKind {
    Fixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChoicesKind {
    String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceOrigin {
    pub kind: OriginKind,
    pub name: String,
    pub choices_kind: ChoicesKind,
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    Number,
    String,
    Boolean,
    SingleChoice,
    MultipleChoice,
    Note,
    Date,
    Time,
    Formula,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValidation {
    pub not_empty: bool,
}

// `id` and `previous` encode navigation order: the first child of node P
// gets P * 1000 + 1 and points back at P, every later sibling gets the
// prior sibling's id plus one and points back at it. `line` is the source
// spreadsheet row (0 for synthetic wrappers) and is never serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Node {
    #[serde(rename_all = "camelCase")]
    Field {
        id: i64,
        previous: i64,
        name: String,
        label: String,
        field_kind: FieldKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        choice_origin_ref: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        html: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        validation: Option<FieldValidation>,
        #[serde(skip)]
        line: u32,
    },
    #[serde(rename_all = "camelCase")]
    Group {
        id: i64,
        previous: i64,
        name: String,
        label: String,
        children: Vec<Node>,
        #[serde(skip)]
        line: u32,
    },
    #[serde(rename_all = "camelCase")]
    Slide {
        id: i64,
        previous: i64,
        name: String,
        label: String,
        children: Vec<Node>,
        #[serde(skip)]
        line: u32,
    },
    #[serde(rename_all = "camelCase")]
    RepeatingSlide {
        id: i64,
        previous: i64,
        name: String,
        label: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_repetitions: Option<u16>,
        children: Vec<Node>,
        #[serde(skip)]
        line: u32,
    },
}

impl Node {
    pub fn id(&self) -> i64 {
        match self {
            Node::Field { id, .. }
            | Node::Group { id, .. }
            | Node::Slide { id, .. }
            | Node::RepeatingSlide { id, .. } => *id,
        }
    }

    pub fn previous(&self) -> i64 {
        match self {
            Node::Field { previous, .. }
            | Node::Group { previous, .. }
            | Node::Slide { previous, .. }
            | Node::RepeatingSlide { previous, .. } => *previous,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::Field { name, .. }
            | Node::Group { name, .. }
            | Node::Slide { name, .. }
            | Node::RepeatingSlide { name, .. } => name,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Node::Field { label, .. }
            | Node::Group { label, .. }
            | Node::Slide { label, .. }
            | Node::RepeatingSlide { label, .. } => label,
        }
    }

    pub fn line(&self) -> u32 {
        match self {
            Node::Field { line, .. }
            | Node::Group { line, .. }
            | Node::Slide { line, .. }
            | Node::RepeatingSlide { line, .. } => *line,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Field { .. } => &[],
            Node::Group { children, .. }
            | Node::Slide { children, .. }
            | Node::RepeatingSlide { children, .. } => children,
        }
    }

    pub fn children_mut(&mut self) -> &mut [Node] {
        match self {
            Node::Field { .. } => &mut [],
            Node::Group { children, .. }
            | Node::Slide { children, .. }
            | Node::RepeatingSlide { children, .. } => children,
        }
    }

    pub fn set_navigation(&mut self, new_id: i64, new_previous: i64) {
        match self {
            Node::Field { id, previous, .. }
            | Node::Group { id, previous, .. }
            | Node::Slide { id, previous, .. }
            | Node::RepeatingSlide { id, previous, .. } => {
                *id = new_id;
                *previous = new_previous;
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormTree {
    pub choice_origins: Vec<ChoiceOrigin>,
    pub slides: Vec<Node>,
}

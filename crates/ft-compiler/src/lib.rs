use ft_core::{FormError, FormTree, Node, XlsForm};

mod build;
mod choices;
mod fields;
mod ids;
mod preprocess;
mod validate;

#[cfg(test)]
mod tests;

pub(crate) const BEGIN_GROUP: &str = "begin group";
pub(crate) const END_GROUP: &str = "end group";
pub(crate) const BEGIN_REPEAT: &str = "begin repeat";
pub(crate) const END_REPEAT: &str = "end repeat";

// The survey rows are validated and wrapped by the preprocessor, then
// compiled into nested groups and typed fields. Choice references are
// checked against the choices sheet before navigation ids are assigned.
// The first violation aborts the conversion with a line-tagged error.
pub fn convert(form: XlsForm) -> Result<FormTree, FormError> {
    let (choice_origins, choices_index) = choices::build_choice_origins(&form.choices);

    let survey = preprocess::preprocess_survey(form.survey)?;
    let global = build::build_group(&survey)?;
    validate::check_choice_refs(&global, &choices_index)?;

    let mut slides = promote_slides(global);
    ids::assign_ids(&mut slides, 0)?;

    Ok(FormTree {
        choice_origins,
        slides,
    })
}

// The children of the phony global group are the form's top-level
// sections: plain groups become slides, repeats stay repeating slides.
fn promote_slides(global: Node) -> Vec<Node> {
    let children = match global {
        Node::Group { children, .. } => children,
        _ => unreachable!("a preprocessed survey always compiles to a global group"),
    };
    children
        .into_iter()
        .map(|node| match node {
            Node::Group {
                id,
                previous,
                name,
                label,
                children,
                line,
            } => Node::Slide {
                id,
                previous,
                name,
                label,
                children,
                line,
            },
            repeat @ Node::RepeatingSlide { .. } => repeat,
            Node::Field { .. } | Node::Slide { .. } => {
                unreachable!("top-level nodes are groups or repeating slides")
            }
        })
        .collect()
}

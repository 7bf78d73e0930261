use std::collections::BTreeMap;

use ft_core::{FieldKind, FormError, Node};

// Every choice field must point at a list defined on the choices sheet.
// Unused lists are fine; a dangling reference is reported with the
// field's source line.
pub(crate) fn check_choice_refs(
    node: &Node,
    choices: &BTreeMap<String, usize>,
) -> Result<(), FormError> {
    if let Node::Field {
        field_kind: FieldKind::SingleChoice | FieldKind::MultipleChoice,
        choice_origin_ref,
        line,
        ..
    } = node
    {
        let reference = choice_origin_ref.as_deref().unwrap_or_default();
        if !choices.contains_key(reference) {
            return Err(FormError::at_line(
                "CHOICES_REF_UNDEFINED",
                format!("Undefined choice list \"{}\" (line {}).", reference, line),
                *line,
            ));
        }
    }
    for child in node.children() {
        check_choice_refs(child, choices)?;
    }
    Ok(())
}

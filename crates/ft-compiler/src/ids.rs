use ft_core::{FormError, Node};

pub(crate) const ID_MULTIPLIER: i64 = 1000;

// Numbers `nodes` as the children of the node with id `parent`: the first
// child gets `parent * 1000 + 1` and points back at the parent, every
// later sibling increments its predecessor's id and points back at it.
// A sibling list of 1000 or more would spill into the id range of the
// next parent, and a tree nested deeply enough pushes ids past i64;
// both are rejected instead of emitting colliding or wrapped ids.
pub(crate) fn assign_ids(nodes: &mut [Node], parent: i64) -> Result<(), FormError> {
    if nodes.is_empty() {
        return Ok(());
    }
    if nodes.len() >= ID_MULTIPLIER as usize {
        let line = nodes[ID_MULTIPLIER as usize - 1].line();
        return Err(FormError::at_line(
            "NAV_FAN_OUT_EXCEEDED",
            format!(
                "Too many sibling nodes: at most {} are supported per level (line {}).",
                ID_MULTIPLIER - 1,
                line
            ),
            line,
        ));
    }

    let first = first_child_id(parent, nodes[0].line())?;
    nodes[0].set_navigation(first, parent);
    assign_ids(nodes[0].children_mut(), first)?;
    for i in 1..nodes.len() {
        let previous = nodes[i - 1].id();
        let current = sibling_id(previous, nodes[i].line())?;
        nodes[i].set_navigation(current, previous);
        assign_ids(nodes[i].children_mut(), current)?;
    }
    Ok(())
}

fn first_child_id(parent: i64, line: u32) -> Result<i64, FormError> {
    parent
        .checked_mul(ID_MULTIPLIER)
        .and_then(|base| base.checked_add(1))
        .ok_or_else(|| depth_exceeded(line))
}

fn sibling_id(previous: i64, line: u32) -> Result<i64, FormError> {
    previous.checked_add(1).ok_or_else(|| depth_exceeded(line))
}

fn depth_exceeded(line: u32) -> FormError {
    FormError::at_line(
        "NAV_DEPTH_EXCEEDED",
        format!("Too deeply nested: node ids exceed the supported range (line {}).", line),
        line,
    )
}

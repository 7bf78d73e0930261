use std::collections::BTreeMap;

use ft_core::{Choice, ChoiceOrigin, ChoiceRow, ChoicesKind, OriginKind};

// One origin per list name, rows in sheet order within each list, origins
// emitted in first-seen order so the output is reproducible. The returned
// map indexes origins by list name.
pub(crate) fn build_choice_origins(
    rows: &[ChoiceRow],
) -> (Vec<ChoiceOrigin>, BTreeMap<String, usize>) {
    let mut origins: Vec<ChoiceOrigin> = Vec::new();
    let mut index: BTreeMap<String, usize> = BTreeMap::new();

    for row in rows {
        let choice = Choice {
            value: row.value.clone(),
            label: row.label.clone(),
        };
        match index.get(&row.list_name) {
            Some(&position) => origins[position].choices.push(choice),
            None => {
                index.insert(row.list_name.clone(), origins.len());
                origins.push(ChoiceOrigin {
                    kind: OriginKind::Fixed,
                    name: row.list_name.clone(),
                    choices_kind: ChoicesKind::String,
                    choices: vec![choice],
                });
            }
        }
    }

    (origins, index)
}

use yew::prelude::*;

use crate::models::{selection::Selection, skip::Skip};

/// Handle returned by `use_selection` hook
#[derive(Clone, PartialEq)]
pub struct SelectionHandle {
    pub selection: Selection,
    pub select: Callback<Skip>,
}

/// Tracks the single selected skip and forwards each selection to
/// `on_select`.
#[hook]
pub fn use_selection(on_select: Option<Callback<Skip>>) -> SelectionHandle {
    let selection = use_state(Selection::default);

    let select = {
        let selection = selection.clone();
        Callback::from(move |skip: Skip| {
            let mut next = *selection;
            next.select(skip.id);
            selection.set(next);

            if let Some(on_select) = &on_select {
                on_select.emit(skip);
            }
        })
    };

    SelectionHandle {
        selection: *selection,
        select,
    }
}

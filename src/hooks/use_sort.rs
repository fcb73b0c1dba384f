use gloo_storage::{LocalStorage, Storage};
use yew::prelude::*;

use crate::config::Config;
use crate::models::sort::SortOption;

/// Current sort order and a way to change it
#[derive(Clone, PartialEq)]
pub struct SortHandle {
    pub sort: SortOption,
    pub set_sort: Callback<SortOption>,
}

/// Sort order for the skip grid. The last choice is remembered across visits;
/// a missing or unreadable entry means size ascending.
#[hook]
pub fn use_sort() -> SortHandle {
    let sort = use_state(|| stored_sort().unwrap_or_default());

    {
        let current = *sort;
        use_effect_with(current, |sort| {
            remember_sort(*sort);
            || ()
        });
    }

    let set_sort = {
        let sort = sort.clone();
        Callback::from(move |choice| sort.set(choice))
    };

    SortHandle {
        sort: *sort,
        set_sort,
    }
}

fn stored_sort() -> Option<SortOption> {
    LocalStorage::get(Config::SORT_STORAGE_KEY).ok()
}

// Storage can be full or disabled (private browsing); the grid still sorts
fn remember_sort(sort: SortOption) {
    if let Err(e) = LocalStorage::set(Config::SORT_STORAGE_KEY, sort) {
        gloo::console::warn!(&format!(
            "Could not remember sort order \"{}\": {e}",
            sort.value()
        ));
    }
}

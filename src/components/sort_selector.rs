use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::sort::SortOption;

#[derive(Properties, PartialEq)]
pub struct SortSelectorProps {
    pub sort: SortOption,
    pub on_change: Callback<SortOption>,
}

/// Sort order dropdown component
#[function_component(SortSelector)]
pub fn sort_selector(props: &SortSelectorProps) -> Html {
    let on_change = {
        let callback = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(sort) = target.value().parse::<SortOption>() {
                callback.emit(sort);
            }
        })
    };

    html! {
        <div class="sort-container">
            <label for="sort-select">{"Sort by:"}</label>
            <select id="sort-select" class="sort-select" onchange={on_change}>
                {
                    SortOption::all().iter().map(|option| {
                        let selected = *option == props.sort;
                        html! {
                            <option value={option.value()} {selected}>{option.label()}</option>
                        }
                    }).collect::<Html>()
                }
            </select>
        </div>
    }
}

use yew::prelude::*;

use crate::components::{
    selection_bar::SelectionBar,
    skip_card::SkipCard,
    sort_selector::SortSelector,
    status::{ErrorState, Loading},
    stepper::{Stepper, checkout_steps},
};
use crate::config::Config;
use crate::hooks::{
    use_selection::use_selection,
    use_skips::{FetchPhase, use_skips},
    use_sort::use_sort,
};
use crate::models::{skip::Skip, sort::sort_skips};
use crate::services::api::{Location, SkipClient};
use crate::utils::format::availability_label;

#[derive(Properties, PartialEq)]
pub struct SkipSelectorProps {
    #[prop_or_else(|| Config::DEFAULT_POSTCODE.to_string())]
    pub postcode: String,
    #[prop_or_else(|| Config::DEFAULT_AREA.to_string())]
    pub area: String,
    #[prop_or_default]
    pub on_skip_select: Option<Callback<Skip>>,
    #[prop_or_default]
    pub on_proceed: Option<Callback<Skip>>,
    #[prop_or_default]
    pub client: SkipClient,
}

#[function_component(SkipSelector)]
pub fn skip_selector(props: &SkipSelectorProps) -> Html {
    let location = Location::new(props.postcode.clone(), props.area.clone());
    let skips = use_skips(props.client.clone(), location.clone());
    let sort = use_sort();
    let selection = use_selection(props.on_skip_select.clone());

    let sorted = use_memo((skips.state.data.clone(), sort.sort), |(data, sort)| {
        sort_skips(data, *sort)
    });

    match skips.state.phase() {
        FetchPhase::Loading => html! {
            <div class="selector-container">
                <Loading text="Loading available skips..." />
            </div>
        },
        FetchPhase::Failed(message) => html! {
            <div class="selector-container">
                <ErrorState
                    title="Failed to Load Skips"
                    message={message.to_string()}
                    on_retry={skips.refetch.clone()}
                    retry_text="Reload Skips"
                />
            </div>
        },
        FetchPhase::Loaded(data) if data.is_empty() => html! {
            <div class="selector-container">
                <ErrorState
                    title="No Skips Available"
                    message={format!("No skips available for {location}.")}
                    on_retry={skips.refetch.clone()}
                    retry_text="Check Again"
                />
            </div>
        },
        FetchPhase::Loaded(_) => {
            let selected = selection.selection.resolve(&sorted).cloned();

            html! {
                <div class="selector-container">
                    <Stepper steps={checkout_steps()} />
                    <header class="selector-header">
                        <h1>{"Choose Your Skip Size"}</h1>
                        <p>{"Select the perfect skip for your project from our range of sizes."}</p>
                    </header>

                    <div class="results-header">
                        <h2>{availability_label(sorted.len())}</h2>
                        <SortSelector sort={sort.sort} on_change={sort.set_sort.clone()} />
                    </div>

                    <div class="skip-grid">
                        {
                            sorted.iter().map(|skip| html! {
                                <SkipCard
                                    key={skip.id}
                                    skip={skip.clone()}
                                    on_select={selection.select.clone()}
                                    is_selected={selection.selection.is_selected(skip.id)}
                                />
                            }).collect::<Html>()
                        }
                    </div>

                    <SelectionBar skip={selected} on_proceed={props.on_proceed.clone()} />
                </div>
            }
        }
    }
}

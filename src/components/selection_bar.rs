use yew::prelude::*;

use crate::models::skip::Skip;
use crate::utils::format::{format_compact_price, format_price};

#[derive(Properties, PartialEq)]
pub struct SelectionBarProps {
    pub skip: Option<Skip>,
    /// Checkout handoff. Without one the bar falls back to a browser alert.
    #[prop_or_default]
    pub on_proceed: Option<Callback<Skip>>,
}

/// Running summary of the selected skip, pinned to the bottom of the page
#[function_component(SelectionBar)]
pub fn selection_bar(props: &SelectionBarProps) -> Html {
    let Some(skip) = props.skip.clone() else {
        return html! { <div class="selection-bar hidden"></div> };
    };

    let total = skip.total_price();
    let (transport, per_tonne) = skip.surcharges();

    let on_proceed = {
        let on_proceed = props.on_proceed.clone();
        let skip = skip.clone();
        Callback::from(move |_: MouseEvent| match &on_proceed {
            Some(callback) => callback.emit(skip.clone()),
            None => gloo::dialogs::alert(&format!(
                "Proceeding with {} Yard Skip - {}",
                skip.size,
                format_price(skip.total_price())
            )),
        })
    };

    html! {
        <div class="selection-bar">
            <div class="selection-content">
                <div class="selection-text">
                    <h4>{format!("{} Yard Skip Selected", skip.size)}</h4>
                    <p>
                        <span class="highlighted-price">
                            {format!("£{} inc. VAT", format_compact_price(total))}
                        </span>
                        if let Some(cost) = transport {
                            <span class="surcharge">
                                {format!("+ £{} transport", format_compact_price(cost))}
                            </span>
                        }
                        if let Some(cost) = per_tonne {
                            <span class="surcharge">
                                {format!("£{}/tonne", format_compact_price(cost))}
                            </span>
                        }
                    </p>
                </div>
                <button class="button primary" onclick={on_proceed}>
                    {"Proceed to Checkout →"}
                </button>
            </div>
        </div>
    }
}

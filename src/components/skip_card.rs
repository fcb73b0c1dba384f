use yew::prelude::*;

use crate::models::skip::Skip;
use crate::utils::format::{
    capacity_description, format_compact_price, format_hire_period, skip_image_url, usage_notes,
};

#[derive(Properties, PartialEq)]
pub struct SkipCardProps {
    pub skip: Skip,
    pub on_select: Callback<Skip>,
    #[prop_or(false)]
    pub is_selected: bool,
}

/// A selectable card for one skip. Clicking anywhere on it selects.
#[function_component(SkipCard)]
pub fn skip_card(props: &SkipCardProps) -> Html {
    let skip = &props.skip;

    let on_card_click = {
        let on_select = props.on_select.clone();
        let skip = skip.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(skip.clone()))
    };

    let on_button_click = {
        let on_select = props.on_select.clone();
        let skip = skip.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_select.emit(skip.clone());
        })
    };

    let card_class = classes!("skip-card", props.is_selected.then_some("selected"));
    let (transport, per_tonne) = skip.surcharges();

    html! {
        <div class={card_class} onclick={on_card_click}>
            <div class="skip-image-container">
                <img
                    class="skip-image"
                    src={skip_image_url(skip)}
                    alt={format!("{} Yard Skip", skip.size)}
                    loading="lazy"
                />
                if !skip.allowed_on_road {
                    <div class="feature-badge warning">{"Not Allowed on Road"}</div>
                }
                if skip.allows_heavy_waste {
                    <div class="feature-badge heavy">{"Heavy Waste"}</div>
                }
                <div class="size-badge">{format!("{} Yard", skip.size)}</div>
            </div>
            <div class="skip-card-content">
                <h3>{format!("{} Yard Skip", skip.size)}</h3>
                <p class="skip-notes">{usage_notes(skip)}</p>
                <p class="skip-capacity">{capacity_description(skip)}</p>
                <ul class="skip-info">
                    <li>{format_hire_period(skip)}</li>
                    <li>{format!("{} yard capacity", skip.size)}</li>
                    if let Some(cost) = transport {
                        <li>{format!("£{} transport", format_compact_price(cost))}</li>
                    }
                    if let Some(cost) = per_tonne {
                        <li>{format!("£{} per tonne", format_compact_price(cost))}</li>
                    }
                </ul>
                <div class="price-section">
                    <span class="price">{format!("£{}", format_compact_price(skip.total_price()))}</span>
                    <span class="vat-text">{"inc. VAT"}</span>
                </div>
                <button class={classes!("button", props.is_selected.then_some("selected"))} onclick={on_button_click}>
                    { if props.is_selected { "Selected" } else { "Select This Skip" } }
                </button>
            </div>
        </div>
    }
}

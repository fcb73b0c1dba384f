use skip_selector::components::SkipSelector;
use skip_selector::models::skip::Skip;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let on_skip_select = Callback::from(|skip: Skip| {
        match serde_json::to_string(&skip) {
            Ok(json) => gloo::console::log!("Selected skip:", json),
            Err(e) => gloo::console::warn!(&format!("Failed to serialize selected skip: {e}")),
        }
    });

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Skip Hire"}</h1>
            </header>

            <main class="app-main">
                <SkipSelector
                    postcode="NR32"
                    area="Lowestoft"
                    {on_skip_select}
                />
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_else(|| "Loading...".to_string())]
    pub text: String,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="status loading">
            <div class="spinner"></div>
            <p>{&props.text}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorStateProps {
    #[prop_or_else(|| "Something went wrong".to_string())]
    pub title: String,
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    #[prop_or_else(|| "Try Again".to_string())]
    pub retry_text: String,
}

/// Error panel with an optional retry button
#[function_component(ErrorState)]
pub fn error_state(props: &ErrorStateProps) -> Html {
    html! {
        <div class="status error">
            <div class="status-icon">{"⚠️"}</div>
            <h3>{&props.title}</h3>
            <p>{&props.message}</p>
            if let Some(on_retry) = &props.on_retry {
                <button class="button primary" onclick={on_retry.reform(|_: MouseEvent| ())}>
                    {&props.retry_text}
                </button>
            }
        </div>
    }
}

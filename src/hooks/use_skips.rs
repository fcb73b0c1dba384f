use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

use crate::models::skip::Skip;
use crate::services::api::{Location, SkipClient};
use wasm_bindgen_futures::spawn_local;

/// Fetch state for one location. Each issued request carries a number; only
/// the most recently issued one may store its result.
#[derive(Clone, PartialEq, Debug)]
pub struct SkipsState {
    pub loading: bool,
    pub data: Rc<Vec<Skip>>,
    pub error: Option<String>,
    latest_request: u64,
}

impl Default for SkipsState {
    fn default() -> Self {
        Self {
            loading: true,
            data: Rc::new(Vec::new()),
            error: None,
            latest_request: 0,
        }
    }
}

#[derive(Debug)]
pub enum SkipsAction {
    Started { request: u64 },
    Succeeded { request: u64, skips: Vec<Skip> },
    Failed { request: u64, message: String },
}

/// What the view should render.
#[derive(Debug, PartialEq)]
pub enum FetchPhase<'a> {
    Loading,
    Failed(&'a str),
    Loaded(&'a Rc<Vec<Skip>>),
}

impl SkipsState {
    pub fn phase(&self) -> FetchPhase<'_> {
        if self.loading {
            FetchPhase::Loading
        } else if let Some(message) = &self.error {
            FetchPhase::Failed(message)
        } else {
            FetchPhase::Loaded(&self.data)
        }
    }

    pub const fn latest_request(&self) -> u64 {
        self.latest_request
    }
}

impl Reducible for SkipsState {
    type Action = SkipsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SkipsAction::Started { request } => Rc::new(Self {
                loading: true,
                data: self.data.clone(),
                error: None,
                latest_request: request,
            }),
            SkipsAction::Succeeded { request, skips } if request == self.latest_request => {
                Rc::new(Self {
                    loading: false,
                    data: Rc::new(skips),
                    error: None,
                    latest_request: request,
                })
            }
            SkipsAction::Failed { request, message } if request == self.latest_request => {
                Rc::new(Self {
                    loading: false,
                    data: Rc::new(Vec::new()),
                    error: Some(message),
                    latest_request: request,
                })
            }
            _ => self, // Superseded by a newer request
        }
    }
}

/// Handle returned by `use_skips`
#[derive(Clone, PartialEq)]
pub struct SkipsHandle {
    pub state: UseReducerHandle<SkipsState>,
    pub refetch: Callback<()>,
}

#[hook]
pub fn use_skips(client: SkipClient, location: Location) -> SkipsHandle {
    let state = use_reducer(SkipsState::default);
    let issued = use_mut_ref(|| 0u64);

    {
        let state = state.clone();
        let issued = issued.clone();

        // Fetch on mount and whenever the client or location changes
        use_effect_with((client.clone(), location.clone()), move |(client, location)| {
            spawn_fetch(&state, &issued, client.clone(), location.clone());
            || () // Cleanup
        });
    }

    let refetch = {
        let state = state.clone();
        Callback::from(move |()| {
            spawn_fetch(&state, &issued, client.clone(), location.clone());
        })
    };

    SkipsHandle { state, refetch }
}

fn spawn_fetch(
    state: &UseReducerHandle<SkipsState>,
    issued: &Rc<RefCell<u64>>,
    client: SkipClient,
    location: Location,
) {
    let request = {
        let mut issued = issued.borrow_mut();
        *issued += 1;
        *issued
    };
    state.dispatch(SkipsAction::Started { request });

    let state = state.clone();
    spawn_local(async move {
        let action = match client.fetch_skips(&location).await {
            Ok(skips) => SkipsAction::Succeeded { request, skips },
            Err(e) => SkipsAction::Failed {
                request,
                message: e.to_string(),
            },
        };
        state.dispatch(action);
    });
}

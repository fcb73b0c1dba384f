use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

impl StepStatus {
    fn class(self) -> &'static str {
        match self {
            StepStatus::Completed => "completed",
            StepStatus::Current => "current",
            StepStatus::Upcoming => "upcoming",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
    pub status: StepStatus,
}

/// The checkout journey, with skip selection as the current step.
pub fn checkout_steps() -> Vec<Step> {
    const STEPS: [(&str, &str); 6] = [
        ("Postcode", "Enter location"),
        ("Waste Type", "Select waste category"),
        ("Select Skip", "Choose skip size"),
        ("Permit Check", "Location verification"),
        ("Choose Date", "Pick delivery date"),
        ("Payment", "Complete order"),
    ];
    const CURRENT: usize = 2;

    STEPS
        .iter()
        .enumerate()
        .map(|(i, &(title, description))| Step {
            title,
            description,
            status: match i.cmp(&CURRENT) {
                std::cmp::Ordering::Less => StepStatus::Completed,
                std::cmp::Ordering::Equal => StepStatus::Current,
                std::cmp::Ordering::Greater => StepStatus::Upcoming,
            },
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct StepperProps {
    pub steps: Vec<Step>,
}

#[function_component(Stepper)]
pub fn stepper(props: &StepperProps) -> Html {
    html! {
        <ol class="stepper">
            {
                props.steps.iter().enumerate().map(|(i, step)| html! {
                    <li class={classes!("step", step.status.class())} title={step.description}>
                        <span class="step-number">
                            { if step.status == StepStatus::Completed { "✓".to_string() } else { (i + 1).to_string() } }
                        </span>
                        <span class="step-title">{step.title}</span>
                    </li>
                }).collect::<Html>()
            }
        </ol>
    }
}

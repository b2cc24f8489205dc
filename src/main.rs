//! Main module for the Striva activity card using Yew.
//! Composes the numeric inputs, route carousel and export action.

use log::{error, info};
use std::rc::Rc;
use striva::focus::{ControlId, KeyboardOwner};
use striva::presets;
use yew::prelude::*;

mod capture;
mod components;
mod config;
mod hooks;

use components::{Carousel, NumericalInput};
use config::*;

// ──────────────────────────────────────────────────────────────────────────────
// Keyboard ownership shared by the card's inputs

enum FocusAction {
    Claim(ControlId),
    Release(ControlId),
}

#[derive(Default, PartialEq)]
struct KeyboardState(KeyboardOwner);

impl Reducible for KeyboardState {
    type Action = FocusAction;

    fn reduce(self: Rc<Self>, action: FocusAction) -> Rc<Self> {
        let owner = match action {
            FocusAction::Claim(id) => self.0.claim(id),
            FocusAction::Release(id) => self.0.release(id),
        };
        if owner == self.0 {
            self
        } else {
            Rc::new(KeyboardState(owner))
        }
    }
}

const DISTANCE_ID: ControlId = ControlId(0);
const PACE_ID: ControlId = ControlId(1);
const TIME_ID: ControlId = ControlId(2);

// ──────────────────────────────────────────────────────────────────────────────

#[derive(Properties, PartialEq)]
pub struct ExportCardProps {
    pub images: Vec<AttrValue>,
}

/// The exportable card: three statistics, the route carousel and the brand.
#[function_component(ExportCard)]
pub fn export_card(props: &ExportCardProps) -> Html {
    let is_exporting = use_state(|| false);
    let card_ref = use_node_ref();
    let keyboard = use_reducer_eq(KeyboardState::default);

    let distance = use_memo((), |_| presets::distance(DEFAULT_DISTANCE_KM));
    let pace = use_memo((), |_| presets::pace(DEFAULT_PACE.0, DEFAULT_PACE.1));
    let time = use_memo((), |_| presets::time(DEFAULT_TIME.0, DEFAULT_TIME.1));

    let on_claim = {
        let keyboard = keyboard.clone();
        Callback::from(move |id: ControlId| keyboard.dispatch(FocusAction::Claim(id)))
    };
    let on_release = {
        let keyboard = keyboard.clone();
        Callback::from(move |id: ControlId| keyboard.dispatch(FocusAction::Release(id)))
    };

    let on_export = {
        let is_exporting = is_exporting.clone();
        let card_ref = card_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if *is_exporting {
                return;
            }
            is_exporting.set(true);

            let is_exporting = is_exporting.clone();
            let card_ref = card_ref.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match capture::export_card(&card_ref).await {
                    Ok(()) => info!("Export finished"),
                    Err(e) => error!("Export failed: {}", e),
                }
                is_exporting.set(false);
            });
        })
    };

    let owner = keyboard.0;

    html! {
        <>
            <div ref={card_ref}
                 class={classes!("export-card", (!*is_exporting).then_some("card-background"))}>
                <div class="card-stats">
                    <NumericalInput spec={distance} id={DISTANCE_ID} keyboard={owner}
                        on_claim={on_claim.clone()} on_release={on_release.clone()} />
                    <NumericalInput spec={pace} id={PACE_ID} keyboard={owner}
                        on_claim={on_claim.clone()} on_release={on_release.clone()} />
                    <NumericalInput spec={time} id={TIME_ID} keyboard={owner}
                        {on_claim} {on_release} />
                </div>

                <Carousel images={props.images.clone()}
                          class="w-full"
                          hide_navigation={*is_exporting} />

                <p class="brand">{ BRAND }</p>
            </div>

            <div class="export-actions">
                <button class="export-button" onclick={on_export} disabled={*is_exporting}>
                    { if *is_exporting { "Exporting..." } else { "Export" } }
                </button>
            </div>
        </>
    }
}

/// Page shell around the card.
#[function_component]
pub fn App() -> Html {
    let images: Vec<AttrValue> = ROUTE_IMAGES.iter().copied().map(AttrValue::Static).collect();

    html! {
        <div class="page">
            <main class="page-main">
                <div>
                    <p class="tagline">{ TAGLINE }</p>
                </div>
                <ExportCard {images} />
            </main>
            <footer class="page-footer" />
        </div>
    }
}

/// Entry point: installs panic and log hooks, then renders the App.
fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    yew::Renderer::<App>::new().render();
}

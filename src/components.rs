//! Yew view components for the activity card.
//!
//! Editing state lives in [`crate::hooks::use_numeric_input`]; the components
//! below only render it.

use crate::config::{
    digit_image, label_image, CAROUSEL_AUTOPLAY_MS, DECORATION_HEIGHT_PX, DIGIT_HEIGHT_PX,
};
use crate::hooks::use_numeric_input;
use gloo_timers::callback::Interval;
use std::rc::Rc;
use striva::carousel::Carousel as Slides;
use striva::cursor::locate_slot;
use striva::focus::{ControlId, KeyboardOwner};
use striva::rolling::{is_punctuation, pair_glyphs, roll_offset, roll_sequence};
use striva::{Decoration, InputSpec};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// A single character that rolls from its previous digit to the current one.
#[derive(Properties, PartialEq)]
pub struct RollingDigitProps {
    pub previous: char,
    pub current: char,
}

#[function_component(RollingDigit)]
pub fn rolling_digit(props: &RollingDigitProps) -> Html {
    let height = format!("height: {}px", DIGIT_HEIGHT_PX);

    if is_punctuation(props.current) || is_punctuation(props.previous) {
        return html! {
            <div class="digit-static" style={height}>
                <img src={digit_image(props.current)}
                     alt={props.current.to_string()}
                     class="digit-dot" />
            </div>
        };
    }

    let sequence = roll_sequence(props.previous, props.current);
    let offset = roll_offset(sequence.len(), DIGIT_HEIGHT_PX);

    html! {
        <div class="rolling-digit" style={height.clone()}>
            <div class="digit-mask" />
            <div class="digit-strip" style={format!("--roll-to: {}px", offset)}>
                { for sequence.iter().enumerate().map(|(i, d)| html! {
                    <img key={format!("{}-{}", d, i)}
                         src={digit_image(*d)}
                         alt={d.to_string()}
                         style={height.clone()} />
                }) }
            </div>
        </div>
    }
}

/// One segment's digits with cursor and hover underline.
#[derive(Properties, PartialEq)]
pub struct NumberSegmentProps {
    pub text: AttrValue,
    pub segment_index: usize,
    pub hovered: bool,
    /// This segment is the one being typed into.
    pub editing: bool,
    pub cursor: Option<usize>,
}

#[function_component(NumberSegment)]
pub fn number_segment(props: &NumberSegmentProps) -> Html {
    // (previous, current) text, advanced only when the text changes
    let initial = props.text.clone();
    let roll = use_state(move || (initial.clone(), initial));
    {
        let roll = roll.clone();
        use_effect_with(props.text.clone(), move |text| {
            if roll.1 != *text {
                roll.set((roll.1.clone(), text.clone()));
            }
            || ()
        });
    }

    let previous = if roll.1 == props.text {
        roll.0.clone()
    } else {
        roll.1.clone()
    };
    let cursor = props.cursor.map(locate_slot);

    html! {
        <div class="number-segment">
            { for pair_glyphs(&previous, &props.text).into_iter().enumerate().map(|(index, (from, to))| {
                if is_punctuation(to) {
                    return html! {
                        <div key={format!("p{}", index)} class="digit-point" style="height: 36px">
                            <img src={digit_image(to)} alt={to.to_string()} class="digit-point-img" />
                        </div>
                    };
                }
                let show_cursor = props.editing && cursor == Some((props.segment_index, index));
                html! {
                    <div key={format!("d{}-{}{}", index, from, to)} class="digit-cell">
                        <div class={classes!("digit-body", props.editing.then_some("dimmed"))}>
                            <RollingDigit previous={from} current={to} />
                        </div>
                        if show_cursor {
                            <div class="digit-cursor" />
                        }
                        <div class={classes!("digit-underline",
                            (props.hovered && !props.editing).then_some("visible"))} />
                    </div>
                }
            }) }
        </div>
    }
}

fn decoration_view(decoration: &Decoration) -> Html {
    let height = decoration.height.unwrap_or(DECORATION_HEIGHT_PX);
    match (&decoration.image_path, &decoration.text) {
        (Some(path), text) => html! {
            <img src={path.clone()}
                 alt={text.clone().unwrap_or_default()}
                 class="decoration-image"
                 style={format!("height: {}px", height)} />
        },
        (None, Some(text)) => {
            let style = decoration
                .height
                .map(|h| format!("font-size: {}px", h as f64 * 0.6));
            html! { <span class="decoration-text" {style}>{ text }</span> }
        }
        (None, None) => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct NumericalInputProps {
    pub spec: Rc<InputSpec>,
    pub id: ControlId,
    /// Which input currently holds the keyboard.
    pub keyboard: KeyboardOwner,
    pub on_claim: Callback<ControlId>,
    pub on_release: Callback<ControlId>,
    #[prop_or_default]
    pub class: Classes,
}

/// Click-to-edit numeric display backed by a hidden numeric text field.
#[function_component(NumericalInput)]
pub fn numerical_input(props: &NumericalInputProps) -> Html {
    let handle = use_numeric_input(props.spec.clone());
    let hovered = use_state_eq(|| false);
    let hidden_input = use_node_ref();

    // Focusing the hidden field raises the numeric keyboard on mobile.
    {
        let hidden_input = hidden_input.clone();
        let id = props.id;
        let on_release = props.on_release.clone();
        use_effect_with(handle.is_editing, move |editing| {
            if *editing {
                if let Some(field) = hidden_input.cast::<HtmlInputElement>() {
                    let _ = field.focus();
                }
            } else {
                on_release.emit(id);
            }
            || ()
        });
    }

    // Another input took the keyboard.
    {
        let cancel = handle.cancel.clone();
        let id = props.id;
        use_effect_with(props.keyboard.owner(), move |owner| {
            if matches!(owner, Some(other) if *other != id) {
                cancel.emit(());
            }
            || ()
        });
    }

    let onclick = {
        let on_begin = handle.on_begin.clone();
        let on_claim = props.on_claim.clone();
        let id = props.id;
        let editing = handle.is_editing;
        Callback::from(move |_: MouseEvent| {
            if !editing {
                on_claim.emit(id);
                on_begin.emit(());
            }
        })
    };
    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let spec = &props.spec;
    let label = match label_image(&spec.label) {
        Some(src) => html! { <img src={src} alt={spec.label.clone()} class="label-image" /> },
        None => html! { <div class="label-text">{ &spec.label }</div> },
    };

    html! {
        <div class={classes!("numerical-input", props.class.clone(),
                             handle.is_editing.then_some("editing"))}
             style={format!("gap: {}px", spec.label_gap)}
             {onclick} {onmouseenter} {onmouseleave}>
            <input ref={hidden_input}
                   type="text"
                   inputmode="numeric"
                   class="hidden-input"
                   autocomplete="off"
                   autocorrect="off"
                   autocapitalize="off"
                   spellcheck="false"
                   oninput={handle.on_text_input.clone()}
                   onkeydown={handle.on_keydown.clone()}
                   onblur={handle.on_blur.clone()} />
            <div class="input-label">{ label }</div>
            <div class="input-digits">
                { for spec.segments().iter().enumerate().map(|(i, _)| html! {
                    <div key={i.to_string()} class="segment-group">
                        <NumberSegment
                            text={AttrValue::from(handle.formatted.get(i).cloned().unwrap_or_default())}
                            segment_index={i}
                            hovered={*hovered}
                            editing={handle.active_segment == Some(i)}
                            cursor={handle.cursor_slot} />
                        if let Some(separator) = spec.separator(i) {
                            <span class="separator">{ decoration_view(separator) }</span>
                        }
                    </div>
                }) }
                if !spec.suffixes.is_empty() {
                    <div class="suffixes">
                        { for spec.suffixes.iter().map(decoration_view) }
                    </div>
                }
            </div>
        </div>
    }
}

pub enum SlideAction {
    Next,
    Prev,
    Resize(usize),
}

#[derive(PartialEq)]
struct SlideState(Slides);

impl Reducible for SlideState {
    type Action = SlideAction;

    fn reduce(self: Rc<Self>, action: SlideAction) -> Rc<Self> {
        let next = match action {
            SlideAction::Next => self.0.next(),
            SlideAction::Prev => self.0.prev(),
            SlideAction::Resize(len) => self.0.resized(len),
        };
        Rc::new(SlideState(next))
    }
}

/// Route image slideshow.
#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub images: Vec<AttrValue>,
    #[prop_or_default]
    pub auto_play: bool,
    #[prop_or(CAROUSEL_AUTOPLAY_MS)]
    pub auto_play_interval: u32,
    #[prop_or_default]
    pub class: Classes,
    /// Hide arrows and transitions, e.g. while the card is captured.
    #[prop_or_default]
    pub hide_navigation: bool,
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let slide_count = props.images.len();
    let slides = use_reducer_eq(move || SlideState(Slides::new(slide_count)));

    {
        let slides = slides.clone();
        use_effect_with(props.images.len(), move |len| {
            slides.dispatch(SlideAction::Resize(*len));
            || ()
        });
    }

    {
        let slides = slides.clone();
        use_effect_with(
            (props.auto_play, props.auto_play_interval),
            move |&(auto_play, interval_ms)| {
                let interval = auto_play
                    .then(|| Interval::new(interval_ms, move || slides.dispatch(SlideAction::Next)));
                move || drop(interval)
            },
        );
    }

    if props.images.is_empty() {
        return html! { <div class="carousel-empty">{ "No images to display" }</div> };
    }

    let on_prev = {
        let slides = slides.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            slides.dispatch(SlideAction::Prev);
        })
    };
    let on_next = {
        let slides = slides.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            slides.dispatch(SlideAction::Next);
        })
    };

    let transition = if props.hide_navigation {
        "none"
    } else {
        "transform 0.3s ease-in-out"
    };

    html! {
        <div class={classes!("carousel", props.class.clone())}>
            <div class="carousel-viewport">
                <div class="carousel-strip"
                     style={format!("transform: translateX(-{}%); transition: {}",
                                    slides.0.offset_percent(), transition)}>
                    { for props.images.iter().enumerate().map(|(i, src)| html! {
                        <div key={i.to_string()} class="carousel-slide"
                             aria-hidden={(i != slides.0.index()).to_string()}>
                            <div class="carousel-frame">
                                <img src={src.clone()} alt={format!("Slide {}", i + 1)} />
                            </div>
                        </div>
                    }) }
                </div>

                if slides.0.has_navigation() && !props.hide_navigation {
                    <>
                    <button class="carousel-nav prev" onclick={on_prev} aria-label="Previous image">
                        <svg class="carousel-arrow" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 19l-7-7 7-7" />
                        </svg>
                    </button>
                    <button class="carousel-nav next" onclick={on_next} aria-label="Next image">
                        <svg class="carousel-arrow" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 5l7 7-7 7" />
                        </svg>
                    </button>
                    </>
                }
            </div>
        </div>
    }
}

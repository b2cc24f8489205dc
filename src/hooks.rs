use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use striva::defaults::{AUTO_ADVANCE_MS, BLUR_CANCEL_MS};
use striva::{InputSpec, NumericInput, Outcome};
use web_sys::HtmlInputElement;
use yew::prelude::*;

type Shared<T> = Rc<RefCell<T>>;

/// Render snapshot of a numeric input and the callbacks that drive it.
#[derive(Clone)]
pub struct NumericInputHandle {
    /// Display string per segment.
    pub formatted: Vec<String>,
    pub is_editing: bool,
    pub active_segment: Option<usize>,
    pub cursor_slot: Option<usize>,
    /// Start editing at the first segment.
    pub on_begin: Callback<()>,
    /// Hardware key presses on the hidden input.
    pub on_keydown: Callback<KeyboardEvent>,
    /// Soft-keyboard text arriving in the hidden input.
    pub on_text_input: Callback<InputEvent>,
    /// Cancels after a short grace period.
    pub on_blur: Callback<FocusEvent>,
    pub cancel: Callback<()>,
}

/// Re-render if needed and arm the auto-advance timer for a filled segment.
///
/// Replacing the stored timer drops the previous one; any ticket it carried
/// is already stale because the editor changed since it was issued.
fn apply_outcome(
    outcome: Outcome,
    input: &Shared<NumericInput>,
    advance_timer: &Shared<Option<Timeout>>,
    update: &UseForceUpdateHandle,
) {
    if let Some(ticket) = outcome.schedule_advance {
        let input = input.clone();
        let update = update.clone();
        let timeout = Timeout::new(AUTO_ADVANCE_MS, move || {
            if input.borrow_mut().fire_auto_advance(ticket) {
                update.force_update();
            }
        });
        *advance_timer.borrow_mut() = Some(timeout);
    }
    if outcome.changed {
        update.force_update();
    }
}

/// State and event wiring for a segmented numeric input.
#[hook]
pub fn use_numeric_input(spec: Rc<InputSpec>) -> NumericInputHandle {
    let input: Shared<NumericInput> = {
        let spec = spec.clone();
        use_mut_ref(move || NumericInput::new((*spec).clone()))
    };
    let advance_timer = use_mut_ref(|| None::<Timeout>);
    let blur_timer = use_mut_ref(|| None::<Timeout>);
    let update = use_force_update();

    // Optional roll to zero shortly after mount
    {
        let input = input.clone();
        let update = update.clone();
        use_effect_with(spec.animate_to_zero, move |delay| {
            let timer = delay.map(|ms| {
                Timeout::new(ms, move || {
                    input.borrow_mut().reset_to_zero();
                    update.force_update();
                })
            });
            move || drop(timer)
        });
    }

    let on_begin = {
        let input = input.clone();
        let advance_timer = advance_timer.clone();
        let blur_timer = blur_timer.clone();
        let update = update.clone();
        Callback::from(move |_: ()| {
            // A pending blur from the previous session must not cancel this one.
            blur_timer.borrow_mut().take();
            let outcome = input.borrow_mut().begin_edit();
            apply_outcome(outcome, &input, &advance_timer, &update);
        })
    };

    let on_keydown = {
        let input = input.clone();
        let advance_timer = advance_timer.clone();
        let update = update.clone();
        Callback::from(move |e: KeyboardEvent| {
            let outcome = input.borrow_mut().handle_key(&e.key());
            if outcome.consumed {
                e.prevent_default();
            }
            apply_outcome(outcome, &input, &advance_timer, &update);
        })
    };

    let on_text_input = {
        let input = input.clone();
        let advance_timer = advance_timer.clone();
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            let field: HtmlInputElement = e.target_unchecked_into();
            let outcome = input.borrow_mut().handle_text(&field.value());
            // Keep the hidden field empty so every event carries only new text.
            field.set_value("");
            apply_outcome(outcome, &input, &advance_timer, &update);
        })
    };

    let cancel = {
        let input = input.clone();
        let advance_timer = advance_timer.clone();
        let update = update.clone();
        Callback::from(move |_: ()| {
            let outcome = input.borrow_mut().cancel();
            apply_outcome(outcome, &input, &advance_timer, &update);
        })
    };

    let on_blur = {
        let blur_timer = blur_timer.clone();
        let cancel = cancel.clone();
        Callback::from(move |_: FocusEvent| {
            let cancel = cancel.clone();
            let timeout = Timeout::new(BLUR_CANCEL_MS, move || cancel.emit(()));
            *blur_timer.borrow_mut() = Some(timeout);
        })
    };

    let snapshot = input.borrow();
    NumericInputHandle {
        formatted: snapshot.formatted_values(),
        is_editing: snapshot.is_editing(),
        active_segment: snapshot.active_segment(),
        cursor_slot: snapshot.cursor_slot(),
        on_begin,
        on_keydown,
        on_text_input,
        on_blur,
        cancel,
    }
}

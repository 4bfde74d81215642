use yew::prelude::*;

use super::animation_frame::use_frame_driver;
use crate::motion::tween::CounterTween;

/// Runs `tween` each time `active` turns true, restarting from 0, and
/// returns the value to display.
#[hook]
pub fn use_counter(tween: CounterTween, active: bool) -> u64 {
    let shown = use_state_eq(|| 0);
    let tween = use_mut_ref(move || tween);
    let driver = use_frame_driver();

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |active| {
                if *active {
                    tween.borrow_mut().restart();
                    shown.set(0);
                    driver.restart(move |dt| match tween.borrow_mut().advance(dt) {
                        Some(value) => {
                            shown.set(value);
                            true
                        }
                        None => false,
                    });
                } else {
                    driver.stop();
                }
                || ()
            },
            active,
        );
    }

    *shown
}

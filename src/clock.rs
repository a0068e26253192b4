use std::any::Any;
use std::cell::Cell;
use std::rc::Rc;

use gloo::timers::callback::Interval;
use wasm_bindgen::JsValue;

pub const TICK_MS: u32 = 1000;

/// Current local date and time, formatted by the browser the way
/// `new Date().toLocaleString()` does.
pub fn now_text() -> String {
    js_sys::Date::new_0()
        .to_locale_string("default", &JsValue::UNDEFINED)
        .into()
}

/// A repeating tick that lives exactly as long as this value.
///
/// Dropping the ticker cancels the underlying timer and closes the gate in
/// front of `on_tick`, so a callback the host already queued is swallowed
/// instead of touching state that belongs to an unmounted component.
pub struct ClockTicker {
    live: Rc<Cell<bool>>,
    handle: Option<Box<dyn Any>>,
}

impl ClockTicker {
    /// Browser ticker backed by `setInterval`.
    pub fn start<F>(period_ms: u32, on_tick: F) -> Self
    where
        F: FnMut() + 'static,
    {
        Self::with_scheduler(move |tick| Interval::new(period_ms, tick), on_tick)
    }

    /// `schedule` receives the gated tick and returns a handle whose drop
    /// cancels it.
    pub fn with_scheduler<S, H, F>(schedule: S, mut on_tick: F) -> Self
    where
        S: FnOnce(Box<dyn FnMut()>) -> H,
        H: 'static,
        F: FnMut() + 'static,
    {
        let live = Rc::new(Cell::new(true));
        let gate = Rc::clone(&live);
        let handle = schedule(Box::new(move || {
            if gate.get() {
                on_tick();
            }
        }));

        Self {
            live,
            handle: Some(Box::new(handle)),
        }
    }
}

impl Drop for ClockTicker {
    fn drop(&mut self) {
        self.live.set(false);
        drop(self.handle.take());
    }
}

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// An `IntersectionObserver` together with the closure it calls back into.
/// Disconnects when dropped.
pub(crate) struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObserver {
    pub(crate) fn new<F>(threshold: f64, root_margin: &str, mut on_entry: F) -> Result<Self, JsValue>
    where
        F: FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                on_entry(&entry, &observer);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub(crate) fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

//! Leptos Busy-State Utilities
//!
//! Scoped busy state for submit and action buttons.
//! Acquiring a [`BusyGuard`] marks a control busy; dropping it puts the
//! control back the way it was, whichever way the surrounding code exits.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Spinner markup shown in front of a busy label
pub const SPINNER_HTML: &str =
    r#"<span class="spinner-border spinner-border-sm" role="status" aria-hidden="true"></span>"#;

/// Anything that can be switched between idle and busy
pub trait BusyState {
    fn set_busy(&self, busy: bool);
}

impl<T: BusyState + ?Sized> BusyState for &T {
    fn set_busy(&self, busy: bool) {
        (**self).set_busy(busy);
    }
}

/// Component-owned controls keep their busy flag in a signal
impl BusyState for WriteSignal<bool> {
    fn set_busy(&self, busy: bool) {
        self.set(busy);
    }
}

/// Holds a control in the busy state until dropped
#[must_use = "the control is released as soon as the guard is dropped"]
pub struct BusyGuard<S: BusyState> {
    state: S,
}

impl<S: BusyState> BusyGuard<S> {
    pub fn acquire(state: S) -> Self {
        state.set_busy(true);
        Self { state }
    }
}

impl<S: BusyState> Drop for BusyGuard<S> {
    fn drop(&mut self) {
        self.state.set_busy(false);
    }
}

/// Inner HTML for a busy button: spinner followed by the label
pub fn busy_label_html(label: &str) -> String {
    format!("{} {}", SPINNER_HTML, label)
}

/// A server-rendered control whose markup and disabled flag can be swapped
pub trait ControlElement {
    fn inner_html(&self) -> String;
    fn set_inner_html(&self, html: &str);
    fn is_disabled(&self) -> bool;
    fn set_disabled(&self, disabled: bool);
}

/// Buttons use the `disabled` property; other elements (links, spans) get
/// the `disabled` attribute plus `aria-disabled`.
impl ControlElement for web_sys::HtmlElement {
    fn inner_html(&self) -> String {
        web_sys::Element::inner_html(self)
    }

    fn set_inner_html(&self, html: &str) {
        web_sys::Element::set_inner_html(self, html);
    }

    fn is_disabled(&self) -> bool {
        match self.dyn_ref::<web_sys::HtmlButtonElement>() {
            Some(button) => button.disabled(),
            None => self.has_attribute("disabled"),
        }
    }

    fn set_disabled(&self, disabled: bool) {
        if let Some(button) = self.dyn_ref::<web_sys::HtmlButtonElement>() {
            button.set_disabled(disabled);
            return;
        }
        let result = if disabled {
            self.set_attribute("disabled", "")
                .and_then(|_| self.set_attribute("aria-disabled", "true"))
        } else {
            self.remove_attribute("disabled")
                .and_then(|_| self.remove_attribute("aria-disabled"))
        };
        if let Err(e) = result {
            log::warn!("[Busy] Failed to toggle disabled state: {:?}", e);
        }
    }
}

/// Busy state for a server-rendered control the app does not own.
///
/// Captures the control's markup and disabled flag at construction and
/// restores exactly those when released.
pub struct ElementBusy<E: ControlElement = web_sys::HtmlElement> {
    element: E,
    busy_html: String,
    original_html: String,
    original_disabled: bool,
}

impl<E: ControlElement> ElementBusy<E> {
    pub fn new(element: E, busy_label: &str) -> Self {
        let original_html = element.inner_html();
        let original_disabled = element.is_disabled();
        Self {
            element,
            busy_html: busy_label_html(busy_label),
            original_html,
            original_disabled,
        }
    }
}

impl<E: ControlElement> BusyState for ElementBusy<E> {
    fn set_busy(&self, busy: bool) {
        if busy {
            self.element.set_inner_html(&self.busy_html);
            self.element.set_disabled(true);
        } else {
            self.element.set_inner_html(&self.original_html);
            self.element.set_disabled(self.original_disabled);
        }
    }
}

/// Submit button driven by a busy signal.
///
/// Shows `label` while idle; shows a spinner plus `busy_label` and disables
/// itself while `busy` is set.
#[component]
pub fn BusyButton(
    busy: ReadSignal<bool>,
    #[prop(into)] label: String,
    #[prop(into)] busy_label: String,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    view! {
        <button type="submit" class=class disabled=move || busy.get()>
            {move || {
                if busy.get() {
                    view! { <span inner_html=busy_label_html(&busy_label)></span> }.into_any()
                } else {
                    view! { {label.clone()} }.into_any()
                }
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        transitions: RefCell<Vec<bool>>,
    }

    impl BusyState for Recorder {
        fn set_busy(&self, busy: bool) {
            self.transitions.borrow_mut().push(busy);
        }
    }

    #[test]
    fn test_guard_marks_busy_then_idle() {
        let recorder = Recorder::default();
        {
            let _guard = BusyGuard::acquire(&recorder);
            assert_eq!(*recorder.transitions.borrow(), vec![true]);
        }
        assert_eq!(*recorder.transitions.borrow(), vec![true, false]);
    }

    #[test]
    fn test_guard_released_on_early_return() {
        fn fails_midway(recorder: &Recorder) -> Result<(), String> {
            let _guard = BusyGuard::acquire(recorder);
            "not a number".parse::<u32>().map_err(|e| e.to_string())?;
            Ok(())
        }

        let recorder = Recorder::default();
        assert!(fails_midway(&recorder).is_err());
        assert_eq!(*recorder.transitions.borrow(), vec![true, false]);
    }

    /// Stands in for a server-rendered `<a class="delete-btn">`
    struct FakeLink {
        html: RefCell<String>,
        disabled: RefCell<bool>,
        disabled_history: RefCell<Vec<bool>>,
    }

    impl FakeLink {
        fn new(html: &str) -> Self {
            Self {
                html: RefCell::new(html.to_string()),
                disabled: RefCell::new(false),
                disabled_history: RefCell::new(Vec::new()),
            }
        }
    }

    impl ControlElement for &FakeLink {
        fn inner_html(&self) -> String {
            self.html.borrow().clone()
        }

        fn set_inner_html(&self, html: &str) {
            *self.html.borrow_mut() = html.to_string();
        }

        fn is_disabled(&self) -> bool {
            *self.disabled.borrow()
        }

        fn set_disabled(&self, disabled: bool) {
            *self.disabled.borrow_mut() = disabled;
            self.disabled_history.borrow_mut().push(disabled);
        }
    }

    #[test]
    fn test_element_busy_swaps_and_restores_non_button() {
        let link = FakeLink::new(r#"<i class="bi bi-trash"></i> Delete"#);
        {
            let _guard = BusyGuard::acquire(ElementBusy::new(&link, "Deleting..."));
            assert_eq!(*link.html.borrow(), busy_label_html("Deleting..."));
            assert!(*link.disabled.borrow());
        }
        assert_eq!(*link.html.borrow(), r#"<i class="bi bi-trash"></i> Delete"#);
        assert_eq!(*link.disabled_history.borrow(), vec![true, false]);
    }

    #[test]
    fn test_element_busy_keeps_originally_disabled() {
        let link = FakeLink::new("Delete");
        *link.disabled.borrow_mut() = true;
        {
            let _guard = BusyGuard::acquire(ElementBusy::new(&link, "Deleting..."));
        }
        assert!(*link.disabled.borrow());
    }

    #[test]
    fn test_busy_label_html() {
        let html = busy_label_html("Deleting...");
        assert!(html.starts_with(SPINNER_HTML));
        assert!(html.ends_with(" Deleting..."));
    }
}

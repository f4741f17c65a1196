//! Busy-state scope guard for the submit control
//!
//! Engaging the guard disables the control and swaps in a busy label;
//! dropping it restores the original label and re-enables the control.
//! Restoration therefore happens on every exit path of a submission.

/// The few operations a submit control must support. The WASM layer
/// implements this over the DOM element; tests use an in-memory double.
pub trait BusyControl {
    fn label(&self) -> String;
    fn set_label(&self, label: &str);
    fn set_enabled(&self, enabled: bool);
}

/// RAII guard over a `BusyControl`.
pub struct BusyGuard<C: BusyControl> {
    control: C,
    original_label: String,
}

impl<C: BusyControl> BusyGuard<C> {
    /// Capture the current label, then disable and relabel the control.
    pub fn engage(control: C, busy_label: &str) -> Self {
        let original_label = control.label();
        control.set_label(busy_label);
        control.set_enabled(false);
        Self {
            control,
            original_label,
        }
    }
}

impl<C: BusyControl> Drop for BusyGuard<C> {
    fn drop(&mut self) {
        self.control.set_label(&self.original_label);
        self.control.set_enabled(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct ButtonState {
        label: String,
        enabled: bool,
    }

    #[derive(Clone)]
    struct FakeButton(Rc<RefCell<ButtonState>>);

    impl FakeButton {
        fn new(label: &str) -> Self {
            Self(Rc::new(RefCell::new(ButtonState {
                label: label.to_string(),
                enabled: true,
            })))
        }
    }

    impl BusyControl for FakeButton {
        fn label(&self) -> String {
            self.0.borrow().label.clone()
        }

        fn set_label(&self, label: &str) {
            self.0.borrow_mut().label = label.to_string();
        }

        fn set_enabled(&self, enabled: bool) {
            self.0.borrow_mut().enabled = enabled;
        }
    }

    #[test]
    fn engages_and_restores() {
        let button = FakeButton::new("Login");
        {
            let _guard = BusyGuard::engage(button.clone(), "Logging in...");
            assert_eq!(button.label(), "Logging in...");
            assert!(!button.0.borrow().enabled);
        }
        assert_eq!(button.label(), "Login");
        assert!(button.0.borrow().enabled);
    }

    #[test]
    fn restores_on_early_exit() {
        let button = FakeButton::new("Register");
        let attempt = || -> Result<(), ()> {
            let _guard = BusyGuard::engage(button.clone(), "Registering...");
            Err(())
        };
        assert!(attempt().is_err());
        assert_eq!(button.label(), "Register");
        assert!(button.0.borrow().enabled);
    }
}

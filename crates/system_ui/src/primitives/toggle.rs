//! Toggle state model behind the [`Switch`](super::Switch) primitive.
//!
//! A switch either owns its boolean ([`ToggleMode::Uncontrolled`]) or mirrors a caller-owned
//! signal ([`ToggleMode::Controlled`]). In both modes an enabled activation emits exactly one
//! change notification with the next value; only the uncontrolled mode stores it.

use super::*;

#[derive(Clone, Copy)]
/// Ownership mode for a switch value.
pub enum ToggleMode {
    /// The switch owns its state, seeded with the given initial value.
    Uncontrolled(bool),
    /// The caller owns the state and feeds every new value back through the signal.
    Controlled(MaybeSignal<bool>),
}

impl Default for ToggleMode {
    fn default() -> Self {
        Self::Uncontrolled(false)
    }
}

impl ToggleMode {
    /// Maps the public `checked` / `default_checked` props onto an explicit mode.
    ///
    /// A supplied `checked` always selects controlled mode.
    pub fn from_props(checked: Option<MaybeSignal<bool>>, default_checked: Option<bool>) -> Self {
        match (checked, default_checked) {
            (Some(checked), Some(_)) => {
                logging::warn!(
                    "switch received both `checked` and `default_checked`; using controlled mode"
                );
                Self::Controlled(checked)
            }
            (Some(checked), None) => Self::Controlled(checked),
            (None, initial) => Self::Uncontrolled(initial.unwrap_or(false)),
        }
    }

    /// Returns `true` for [`ToggleMode::Controlled`].
    pub fn is_controlled(&self) -> bool {
        matches!(self, Self::Controlled(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Keyboard keys that activate a focused switch.
pub enum ActivationKey {
    /// Space bar.
    Space,
    /// Enter/Return.
    Enter,
}

impl ActivationKey {
    /// Resolves a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            " " | "Spacebar" => Some(Self::Space),
            "Enter" => Some(Self::Enter),
            _ => None,
        }
    }
}

#[derive(Clone, Copy)]
enum ToggleSource {
    Owned(RwSignal<bool>),
    Caller(MaybeSignal<bool>),
}

#[derive(Clone, Copy)]
/// Reactive handle that owns a switch's value, disabled flag, and change callback.
pub struct SwitchState {
    source: ToggleSource,
    disabled: MaybeSignal<bool>,
    on_change: Option<Callback<bool>>,
}

impl SwitchState {
    /// Creates switch state for the given mode.
    pub fn new(
        mode: ToggleMode,
        disabled: MaybeSignal<bool>,
        on_change: Option<Callback<bool>>,
    ) -> Self {
        let source = match mode {
            ToggleMode::Uncontrolled(initial) => ToggleSource::Owned(create_rw_signal(initial)),
            ToggleMode::Controlled(value) => ToggleSource::Caller(value),
        };
        Self {
            source,
            disabled,
            on_change,
        }
    }

    /// Current displayed value, tracked.
    pub fn checked(&self) -> bool {
        match self.source {
            ToggleSource::Owned(value) => value.get(),
            ToggleSource::Caller(value) => value.get(),
        }
    }

    /// Current displayed value without subscribing.
    pub fn checked_untracked(&self) -> bool {
        match self.source {
            ToggleSource::Owned(value) => value.get_untracked(),
            ToggleSource::Caller(value) => value.get_untracked(),
        }
    }

    /// Disabled flag, tracked.
    pub fn disabled(&self) -> bool {
        self.disabled.get()
    }

    /// Disabled flag without subscribing.
    pub fn disabled_untracked(&self) -> bool {
        self.disabled.get_untracked()
    }

    /// Whether the caller owns the value.
    pub fn is_controlled(&self) -> bool {
        matches!(self.source, ToggleSource::Caller(_))
    }

    /// Handles one pointer or keyboard activation.
    ///
    /// Returns the emitted value, or `None` when the switch is disabled.
    pub fn activate(&self) -> Option<bool> {
        if self.disabled_untracked() {
            return None;
        }
        let next = !self.checked_untracked();
        if let ToggleSource::Owned(value) = self.source {
            value.set(next);
        }
        if let Some(on_change) = self.on_change.as_ref() {
            on_change.call(next);
        }
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<bool>>>, Callback<bool>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let callback = Callback::new(move |next| sink.borrow_mut().push(next));
        (calls, callback)
    }

    #[test]
    fn uncontrolled_activations_alternate_from_initial_value() {
        let _ = leptos::create_runtime();
        for initial in [false, true] {
            let state = SwitchState::new(ToggleMode::Uncontrolled(initial), false.into(), None);
            for n in 1..=7 {
                state.activate();
                assert_eq!(state.checked_untracked(), initial ^ (n % 2 == 1));
            }
        }
    }

    #[test]
    fn single_activation_reports_new_value_once() {
        let _ = leptos::create_runtime();
        let (calls, callback) = recorder();
        let state = SwitchState::new(
            ToggleMode::from_props(None, Some(false)),
            false.into(),
            Some(callback),
        );

        assert_eq!(state.activate(), Some(true));
        assert_eq!(*calls.borrow(), vec![true]);
        assert!(state.checked_untracked());
    }

    #[test]
    fn disabled_switch_ignores_every_activation() {
        let _ = leptos::create_runtime();
        let (calls, callback) = recorder();
        let state = SwitchState::new(ToggleMode::Uncontrolled(false), true.into(), Some(callback));

        for _ in 0..5 {
            assert_eq!(state.activate(), None);
        }
        assert!(!state.checked_untracked());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn disabled_flag_can_change_between_activations() {
        let _ = leptos::create_runtime();
        let disabled = create_rw_signal(false);
        let state = SwitchState::new(
            ToggleMode::Uncontrolled(false),
            Signal::from(disabled).into(),
            None,
        );

        assert_eq!(state.activate(), Some(true));
        disabled.set(true);
        assert_eq!(state.activate(), None);
        assert!(state.checked_untracked());
        disabled.set(false);
        assert_eq!(state.activate(), Some(false));
    }

    #[test]
    fn controlled_switch_displays_only_caller_value() {
        let _ = leptos::create_runtime();
        let (calls, callback) = recorder();
        let owner_value = create_rw_signal(false);
        let state = SwitchState::new(
            ToggleMode::from_props(Some(Signal::from(owner_value).into()), None),
            false.into(),
            Some(callback),
        );
        assert!(state.is_controlled());

        assert_eq!(state.activate(), Some(true));
        assert_eq!(state.activate(), Some(true));
        assert!(!state.checked_untracked());
        assert_eq!(*calls.borrow(), vec![true, true]);

        owner_value.set(true);
        assert!(state.checked_untracked());
        assert_eq!(state.activate(), Some(false));
        assert!(state.checked_untracked());
    }

    #[test]
    fn checked_prop_wins_over_default_checked() {
        let _ = leptos::create_runtime();
        let mode = ToggleMode::from_props(Some(true.into()), Some(false));
        assert!(mode.is_controlled());
        assert!(!ToggleMode::from_props(None, None).is_controlled());
        assert!(!ToggleMode::default().is_controlled());
    }

    #[test]
    fn activation_keys_follow_button_conventions() {
        assert_eq!(ActivationKey::from_key(" "), Some(ActivationKey::Space));
        assert_eq!(ActivationKey::from_key("Spacebar"), Some(ActivationKey::Space));
        assert_eq!(ActivationKey::from_key("Enter"), Some(ActivationKey::Enter));
        assert_eq!(ActivationKey::from_key("Tab"), None);
        assert_eq!(ActivationKey::from_key("a"), None);
    }
}

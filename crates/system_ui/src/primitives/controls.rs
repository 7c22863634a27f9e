use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SwitchPart {
    Control,
    Label,
}

fn switch_part_order(position: LabelPosition) -> [SwitchPart; 2] {
    match position {
        LabelPosition::Start => [SwitchPart::Label, SwitchPart::Control],
        LabelPosition::End => [SwitchPart::Control, SwitchPart::Label],
    }
}

/// How a switch joined the enclosing field, if at all.
struct SwitchWiring {
    control_id: Option<String>,
    field: Option<FieldContext>,
}

impl SwitchWiring {
    /// Claims the field's control slot and, for an inline label, its name slot.
    ///
    /// The field's control id wins over `own_id`. A switch rejected by the field keeps `own_id`
    /// and no links.
    fn join(field: Option<FieldContext>, own_id: Option<String>, inline_label: bool) -> Self {
        let field_control_id = field.and_then(|field| field.register_control());
        let field = field.filter(|_| field_control_id.is_some());
        if inline_label {
            if let Some(field) = field {
                field.register_label(LabelSource::Wrapping);
            }
        }
        Self {
            control_id: field_control_id.or(own_id),
            field,
        }
    }
}

#[component]
/// Shared neumorphic switch with explicit `role="switch"` semantics.
///
/// Passing `checked` makes the switch controlled: activations only emit `on_change` and the
/// caller feeds the new value back. Without `checked` the switch owns its value, seeded from
/// `default_checked`. Inside a [`Field`](super::Field) or [`SwitchField`](super::SwitchField)
/// the switch takes the field's control id and label/description links.
pub fn Switch(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] checked: Option<MaybeSignal<bool>>,
    #[prop(optional)] default_checked: Option<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] label_position: LabelPosition,
    #[prop(optional)] on_change: Option<Callback<bool>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let state = SwitchState::new(
        ToggleMode::from_props(checked, default_checked),
        disabled,
        on_change,
    );
    let pressed = create_rw_signal(false);

    let SwitchWiring {
        control_id,
        field: wired,
    } = SwitchWiring::join(use_field_context(), id, children.is_some());

    let labelledby = move || wired.and_then(|field| field.association().labelledby());
    let describedby = move || wired.and_then(|field| field.association().describedby());

    let control = view! {
        <button
            type="button"
            class="ui-switch-control"
            id=control_id
            role="switch"
            tabindex="0"
            aria-label=aria_label
            aria-labelledby=labelledby
            aria-describedby=describedby
            aria-checked=move || state.checked().to_string()
            aria-disabled=move || bool_token(state.disabled())
            data-ui-slot="control"
            data-ui-selected=move || bool_token(state.checked())
            data-ui-pressed=move || bool_token(pressed.get() && !state.disabled())
            on:click=move |_| {
                state.activate();
            }
            on:keydown=move |ev: KeyboardEvent| {
                if ActivationKey::from_key(&ev.key()).is_some() {
                    ev.prevent_default();
                    state.activate();
                }
            }
            on:pointerdown=move |_: PointerEvent| {
                if !state.disabled_untracked() {
                    pressed.set(true);
                }
            }
            on:pointerup=move |_: PointerEvent| pressed.set(false)
            on:pointerleave=move |_: PointerEvent| pressed.set(false)
            on:pointercancel=move |_: PointerEvent| pressed.set(false)
        >
            <span data-ui-slot="track">
                <span data-ui-slot="thumb"></span>
            </span>
        </button>
    };

    let class = merge_layout_class("ui-switch", layout_class);
    match children {
        Some(children) => {
            let control = control.into_view();
            let label = view! {
                <span class="ui-switch-label" data-ui-slot="label">
                    {children()}
                </span>
            }
            .into_view();
            let parts = switch_part_order(label_position).map(|part| match part {
                SwitchPart::Control => control.clone(),
                SwitchPart::Label => label.clone(),
            });

            view! {
                <label
                    class=class
                    data-ui-primitive="true"
                    data-ui-kind="switch"
                    data-ui-slot=ui_slot
                    data-ui-label-position=label_position.token()
                    data-ui-selected=move || bool_token(state.checked())
                    data-ui-disabled=move || bool_token(state.disabled())
                >
                    {parts.to_vec()}
                </label>
            }
            .into_view()
        }
        None => view! {
            <span
                class=class
                data-ui-primitive="true"
                data-ui-kind="switch"
                data-ui-slot=ui_slot
                data-ui-selected=move || bool_token(state.checked())
                data-ui-disabled=move || bool_token(state.disabled())
            >
                {control}
            </span>
        }
        .into_view(),
    }
}

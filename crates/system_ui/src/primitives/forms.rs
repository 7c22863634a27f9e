use super::*;

#[component]
/// Provides a tree-scoped id allocator to every field composer mounted below it.
pub fn IdScopeProvider(
    #[prop(default = "ui")] prefix: &'static str,
    children: Children,
) -> impl IntoView {
    run_as_child(move || {
        provide_context(FieldIdScope::new(prefix));
        children()
    })
}

#[component]
/// Generic field composer that links one control with its label and descriptions.
pub fn Field(
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Explicit base id; otherwise one is allocated from the enclosing [`IdScopeProvider`].
    #[prop(optional, into)]
    id: Option<String>,
    children: Children,
) -> impl IntoView {
    run_as_child(move || {
        let field = FieldContext::mount("field", id);
        let body = children();
        field.finish();

        view! {
            <div
                class=merge_layout_class("ui-field", layout_class)
                data-ui-primitive="true"
                data-ui-kind="field"
            >
                {body}
            </div>
        }
    })
}

#[component]
/// Field composer laid out for a single [`Switch`](super::Switch) and its supporting copy.
pub fn SwitchField(
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Explicit base id; otherwise one is allocated from the enclosing [`IdScopeProvider`].
    #[prop(optional, into)]
    id: Option<String>,
    #[prop(optional)] label_position: LabelPosition,
    children: Children,
) -> impl IntoView {
    run_as_child(move || {
        let field = FieldContext::mount("switch-field", id);
        let body = children();
        field.finish();

        view! {
            <div
                class=merge_layout_class("ui-switch-field", layout_class)
                data-ui-primitive="true"
                data-ui-kind="switch-field"
                data-ui-label-position=label_position.token()
            >
                {body}
            </div>
        }
    })
}

#[component]
/// Field label. Links to the enclosing field's control unless it wraps the control itself.
pub fn Label(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] wraps_control: bool,
    children: Children,
) -> impl IntoView {
    let field = use_field_context();
    let source = if wraps_control {
        LabelSource::Wrapping
    } else {
        LabelSource::Sibling
    };
    let id = field.and_then(|field| field.register_label(source));
    let for_id = field
        .filter(|_| id.is_some() && !wraps_control)
        .map(|field| field.control_id());

    view! {
        <label
            class=merge_layout_class("ui-label", layout_class)
            id=id
            for=for_id
            data-ui-primitive="true"
            data-ui-kind="label"
        >
            {children()}
        </label>
    }
}

#[component]
/// Supporting copy exposed to the enclosing field's control as an accessible description.
pub fn Description(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = TextTone::Secondary)] tone: TextTone,
    children: Children,
) -> impl IntoView {
    let id = use_field_context().and_then(|field| field.register_description());

    view! {
        <span
            class=merge_layout_class("ui-description", layout_class)
            id=id
            data-ui-primitive="true"
            data-ui-kind="description"
            data-ui-slot="description"
            data-ui-variant=TextRole::Caption.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Groups related fields under one optional accessible group label.
pub fn Group(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    children: Children,
) -> impl IntoView {
    let label_id = label
        .as_ref()
        .map(|_| format!("{}-label", use_field_id_scope("group").allocate()));
    let heading = label.map(|label| {
        view! {
            <span id=label_id.clone() data-ui-slot="label">
                {label}
            </span>
        }
    });

    view! {
        <div
            class=merge_layout_class("ui-group", layout_class)
            role="group"
            aria-labelledby=label_id
            data-ui-primitive="true"
            data-ui-kind="group"
            data-ui-gap=gap.token()
        >
            {heading}
            {children()}
        </div>
    }
}

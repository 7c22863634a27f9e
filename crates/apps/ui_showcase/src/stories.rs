//! Story renderers: turn decoded story args into primitive compositions.

use leptos::*;
use system_ui::prelude::*;

use crate::catalog::{
    BreadcrumbArgs, ComponentKind, GroupArgs, Story, StoryError, SwitchArgs, SwitchFieldArgs,
    TextArgs,
};

/// Formats a switch change for the event log.
pub(crate) fn change_event(label: &str, next: bool) -> String {
    format!("{label}: {}", if next { "on" } else { "off" })
}

/// Renders `story`, reporting switch changes through `on_event`.
pub fn render_story(story: &Story, on_event: Callback<String>) -> Result<View, StoryError> {
    let view = match story.component {
        ComponentKind::Switch => switch_story(story.args()?, on_event),
        ComponentKind::SwitchField => switch_field_story(story.args()?, on_event),
        ComponentKind::Group => group_story(story.args()?, on_event),
        ComponentKind::Text => text_story(story.args()?),
        ComponentKind::Breadcrumbs => breadcrumbs_story(story.args()?),
    };
    Ok(view)
}

fn switch_story(args: SwitchArgs, on_event: Callback<String>) -> View {
    let SwitchArgs {
        label,
        default_checked,
        disabled,
        label_position,
        controlled,
    } = args;
    let event_label = label.clone();

    if controlled {
        let value = create_rw_signal(default_checked);
        let on_change = Callback::new(move |next| {
            value.set(next);
            on_event.call(change_event(&event_label, next));
        });
        view! {
            <Stack gap=LayoutGap::Sm>
                <Switch
                    checked=Signal::derive(move || value.get())
                    disabled=disabled
                    label_position=label_position.into()
                    on_change=on_change
                >
                    {label}
                </Switch>
                <Text role=TextRole::Caption tone=TextTone::Secondary>
                    {move || format!("Owner value: {}", if value.get() { "on" } else { "off" })}
                </Text>
            </Stack>
        }
        .into_view()
    } else {
        let on_change = Callback::new(move |next| {
            on_event.call(change_event(&event_label, next));
        });
        view! {
            <Switch
                default_checked=default_checked
                disabled=disabled
                label_position=label_position.into()
                on_change=on_change
            >
                {label}
            </Switch>
        }
        .into_view()
    }
}

fn switch_field_story(args: SwitchFieldArgs, on_event: Callback<String>) -> View {
    let SwitchFieldArgs {
        label,
        descriptions,
        default_checked,
        disabled,
        label_position,
    } = args;
    let event_label = label.clone();
    let on_change = Callback::new(move |next| {
        on_event.call(change_event(&event_label, next));
    });
    let descriptions = descriptions
        .into_iter()
        .map(|copy| view! { <Description>{copy}</Description> })
        .collect_view();

    view! {
        <SwitchField label_position=label_position.into()>
            <Label>{label}</Label>
            <Switch
                default_checked=default_checked
                disabled=disabled
                label_position=label_position.into()
                on_change=on_change
            />
            {descriptions}
        </SwitchField>
    }
    .into_view()
}

fn group_story(args: GroupArgs, on_event: Callback<String>) -> View {
    let GroupArgs { label, fields } = args;
    let fields = fields
        .into_iter()
        .map(|field| switch_field_story(field, on_event))
        .collect_view();

    match label {
        Some(label) => view! { <Group label=label>{fields}</Group> }.into_view(),
        None => view! { <Group>{fields}</Group> }.into_view(),
    }
}

fn text_story(args: TextArgs) -> View {
    let samples = args
        .samples
        .into_iter()
        .map(|sample| {
            view! {
                <Text role=sample.role.into() tone=sample.tone.into()>
                    {sample.copy}
                </Text>
            }
        })
        .collect_view();

    view! { <Stack gap=LayoutGap::Sm>{samples}</Stack> }.into_view()
}

fn breadcrumbs_story(args: BreadcrumbArgs) -> View {
    let trail = args
        .items
        .iter()
        .fold(BreadcrumbTrail::new(), |trail, item| {
            trail.with(item.label.clone(), item.href.as_deref())
        });

    match args.aria_label {
        Some(aria_label) => view! { <Breadcrumbs trail aria_label=aria_label /> }.into_view(),
        None => view! { <Breadcrumbs trail /> }.into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn change_events_name_the_switch_and_state() {
        assert_eq!(change_event("Wi-Fi", true), "Wi-Fi: on");
        assert_eq!(change_event("Wi-Fi", false), "Wi-Fi: off");
    }
}

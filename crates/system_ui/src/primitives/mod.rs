//! Shared control, form-composition, navigation, typography, and layout primitives.

use leptos::ev::{KeyboardEvent, PointerEvent};
use leptos::*;

mod controls;
mod data_display;
mod field;
mod forms;
mod layout;
mod navigation;
mod toggle;

pub use controls::Switch;
pub use data_display::{Heading, Text};
pub use field::{
    use_field_context, use_field_id_scope, FieldAssociation, FieldContext, FieldError,
    FieldIdScope, FieldRegistry, IdScope, LabelSource,
};
pub use forms::{Description, Field, Group, IdScopeProvider, Label, SwitchField};
pub use layout::Stack;
pub use navigation::{Breadcrumb, BreadcrumbItem, BreadcrumbTrail, Breadcrumbs};
pub use toggle::{ActivationKey, SwitchState, ToggleMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Placement of a control's inline label relative to the control itself.
pub enum LabelPosition {
    /// Label renders before the control.
    Start,
    /// Label renders after the control.
    End,
}

impl Default for LabelPosition {
    fn default() -> Self {
        Self::End
    }
}

impl LabelPosition {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared text roles.
pub enum TextRole {
    /// Body text.
    Body,
    /// Label text.
    Label,
    /// Caption text.
    Caption,
    /// Title text.
    Title,
    /// Monospace/code text.
    Code,
}

impl Default for TextRole {
    fn default() -> Self {
        Self::Body
    }
}

impl TextRole {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Label => "label",
            Self::Caption => "caption",
            Self::Title => "title",
            Self::Code => "code",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared text tone.
pub enum TextTone {
    /// Primary text.
    Primary,
    /// Secondary text.
    Secondary,
    /// Accent text.
    Accent,
    /// Success/status tone.
    Success,
    /// Warning tone.
    Warning,
    /// Danger tone.
    Danger,
}

impl Default for TextTone {
    fn default() -> Self {
        Self::Primary
    }
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared layout gap tokens.
pub enum LayoutGap {
    /// No gap.
    None,
    /// Small gap.
    Sm,
    /// Default gap.
    Md,
    /// Large gap.
    Lg,
}

impl Default for LayoutGap {
    fn default() -> Self {
        Self::Md
    }
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn layout_class_is_appended_only_when_present() {
        assert_eq!(merge_layout_class("ui-switch", None), "ui-switch");
        assert_eq!(merge_layout_class("ui-switch", Some("")), "ui-switch");
        assert_eq!(
            merge_layout_class("ui-switch", Some("settings-row")),
            "ui-switch settings-row"
        );
    }

    #[test]
    fn label_position_defaults_to_end() {
        assert_eq!(LabelPosition::default(), LabelPosition::End);
        assert_eq!(LabelPosition::Start.token(), "start");
        assert_eq!(LabelPosition::End.token(), "end");
    }
}

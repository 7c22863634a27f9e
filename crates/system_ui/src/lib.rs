//! Shared UI primitive library for accessible controls and their story catalog.
//!
//! The crate owns reusable Leptos primitives and the stable `data-ui-*` DOM contract consumed by
//! external stylesheets. The toggle model ([`SwitchState`]) and the field association table
//! ([`FieldRegistry`]) are plain reactive types so their behavior can be exercised without a DOM.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    use_field_context, use_field_id_scope, ActivationKey, Breadcrumb, BreadcrumbItem,
    BreadcrumbTrail, Breadcrumbs, Description, Field, FieldAssociation, FieldContext,
    FieldError, FieldIdScope, FieldRegistry, Group, Heading, IdScope, IdScopeProvider, Label,
    LabelPosition, LabelSource, LayoutGap, Stack, Switch, SwitchField, SwitchState, Text,
    TextRole, TextTone, ToggleMode,
};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Breadcrumb, BreadcrumbItem, BreadcrumbTrail, Breadcrumbs, Description, Field, Group,
        Heading, IdScopeProvider, Label, LabelPosition, LayoutGap, Stack, Switch, SwitchField,
        Text, TextRole, TextTone,
    };
}

//! Identifier scoping and label/description association for field composers.
//!
//! Ids are allocated from a [`FieldIdScope`] owned by the surrounding component tree, never from
//! a process-wide counter. Each composer allocates one base id on mount and derives every control,
//! label, and description id from it, so references stay stable for the composer's lifetime.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use thiserror::Error;

use super::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Composition mistakes detected while wiring a field.
pub enum FieldError {
    /// The field rendered without an interactive control.
    #[error("field `{0}` has no interactive control")]
    MissingControl(String),
    /// A second interactive control tried to join a field.
    #[error("field `{0}` received multiple interactive controls")]
    MultipleControls(String),
    /// A second accessible-name source tried to join a field.
    #[error("field `{0}` received multiple labels")]
    MultipleLabels(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Monotonic id allocator for one component tree.
pub struct IdScope {
    prefix: String,
    next: u32,
}

impl IdScope {
    /// Creates an allocator whose ids start with `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }

    /// Shared id prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Allocates the next base id, e.g. `ui-3`.
    pub fn next_base(&mut self) -> String {
        self.next += 1;
        format!("{}-{}", self.prefix, self.next)
    }
}

#[derive(Clone, Copy)]
/// Leptos context handle to the tree-scoped [`IdScope`].
pub struct FieldIdScope(StoredValue<IdScope>);

impl FieldIdScope {
    /// Creates a new scope owned by the current reactive owner.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self(store_value(IdScope::new(prefix)))
    }

    /// Allocates a base id from the scope.
    pub fn allocate(&self) -> String {
        let mut base = String::new();
        self.0.update_value(|scope| base = scope.next_base());
        base
    }
}

/// Returns the nearest [`FieldIdScope`], creating an owner-local one when no
/// [`IdScopeProvider`](super::IdScopeProvider) is mounted above the caller.
///
/// The local scope's prefix is `fallback_prefix` plus a tag derived from the current reactive
/// owner, so sibling composers without a provider still allocate distinct ids.
pub fn use_field_id_scope(fallback_prefix: &'static str) -> FieldIdScope {
    use_context::<FieldIdScope>().unwrap_or_else(|| {
        let prefix = owner_local_prefix(fallback_prefix);
        logging::warn!("`{fallback_prefix}` mounted without an IdScopeProvider; using `{prefix}`");
        let scope = FieldIdScope::new(prefix);
        provide_context(scope);
        scope
    })
}

fn owner_local_prefix(prefix: &str) -> String {
    match Owner::current() {
        Some(owner) => {
            let mut hasher = DefaultHasher::new();
            owner.hash(&mut hasher);
            format!("{prefix}-{:x}", hasher.finish())
        }
        None => prefix.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How a label element relates to the field's control.
pub enum LabelSource {
    /// A standalone label element linked through `aria-labelledby`.
    Sibling,
    /// A label element that wraps the control and names it natively.
    Wrapping,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved id links for one field.
pub struct FieldAssociation {
    /// Id carried by the interactive control.
    pub control_id: String,
    /// Id of a sibling label element, if any.
    pub label_id: Option<String>,
    /// Ids of mounted description elements, in slot order.
    pub description_ids: Vec<String>,
}

impl FieldAssociation {
    /// Value for the control's `aria-labelledby` attribute.
    pub fn labelledby(&self) -> Option<String> {
        self.label_id.clone()
    }

    /// Value for the control's `aria-describedby` attribute.
    pub fn describedby(&self) -> Option<String> {
        if self.description_ids.is_empty() {
            None
        } else {
            Some(self.description_ids.join(" "))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Association table owned by a single field composer.
pub struct FieldRegistry {
    base: String,
    control_registered: bool,
    label: Option<LabelSource>,
    description_slots: Vec<Option<String>>,
}

impl FieldRegistry {
    /// Creates an empty table for the composer with base id `base`.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            control_registered: false,
            label: None,
            description_slots: Vec::new(),
        }
    }

    /// Base id the composer allocated on mount.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Id assigned to the field's control.
    pub fn control_id(&self) -> String {
        format!("{}-control", self.base)
    }

    /// Id assigned to the field's label.
    pub fn label_id(&self) -> String {
        format!("{}-label", self.base)
    }

    /// Claims the control slot.
    pub fn register_control(&mut self) -> Result<String, FieldError> {
        if self.control_registered {
            return Err(FieldError::MultipleControls(self.base.clone()));
        }
        self.control_registered = true;
        Ok(self.control_id())
    }

    /// Frees the control slot after the control unmounts.
    pub fn release_control(&mut self) {
        self.control_registered = false;
    }

    /// Claims the single accessible-name slot.
    pub fn register_label(&mut self, source: LabelSource) -> Result<String, FieldError> {
        if self.label.is_some() {
            return Err(FieldError::MultipleLabels(self.base.clone()));
        }
        self.label = Some(source);
        Ok(self.label_id())
    }

    /// Frees the accessible-name slot after the label unmounts.
    pub fn release_label(&mut self) {
        self.label = None;
    }

    /// Claims the lowest free description slot and returns its id.
    ///
    /// A description that unmounts and mounts again gets its previous id back.
    pub fn register_description(&mut self) -> String {
        let slot = self
            .description_slots
            .iter()
            .position(Option::is_none)
            .unwrap_or(self.description_slots.len());
        let id = format!("{}-description-{}", self.base, slot + 1);
        match self.description_slots.get_mut(slot) {
            Some(free) => *free = Some(id.clone()),
            None => self.description_slots.push(Some(id.clone())),
        }
        id
    }

    /// Drops a description from the association.
    pub fn release_description(&mut self, id: &str) {
        if let Some(slot) = self
            .description_slots
            .iter_mut()
            .find(|slot| slot.as_deref() == Some(id))
        {
            *slot = None;
        }
    }

    /// Checks the table once every child has mounted.
    pub fn finish(&self) -> Result<(), FieldError> {
        if self.control_registered {
            Ok(())
        } else {
            Err(FieldError::MissingControl(self.base.clone()))
        }
    }

    /// Current id links.
    pub fn association(&self) -> FieldAssociation {
        FieldAssociation {
            control_id: self.control_id(),
            label_id: match self.label {
                Some(LabelSource::Sibling) => Some(self.label_id()),
                Some(LabelSource::Wrapping) | None => None,
            },
            description_ids: self.description_slots.iter().flatten().cloned().collect(),
        }
    }
}

#[derive(Clone, Copy)]
/// Context a field composer provides to its label, description, and control children.
pub struct FieldContext {
    registry: RwSignal<FieldRegistry>,
}

impl FieldContext {
    /// Creates a context for a composer that allocated `base`.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            registry: create_rw_signal(FieldRegistry::new(base)),
        }
    }

    /// Makes the context visible to descendants of the current owner.
    pub fn provide(self) {
        provide_context(self);
    }

    /// Sets up a composer: takes `id` or allocates a base from the nearest [`FieldIdScope`],
    /// then provides the new context.
    ///
    /// Call this inside the composer's own reactive owner so the context never reaches siblings.
    pub fn mount(kind: &'static str, id: Option<String>) -> Self {
        let base = id.unwrap_or_else(|| use_field_id_scope(kind).allocate());
        let field = Self::new(base);
        field.provide();
        field
    }

    /// Control id, untracked.
    pub fn control_id(&self) -> String {
        self.registry.with_untracked(FieldRegistry::control_id)
    }

    /// Registers the field's control, returning its id.
    ///
    /// A second control is reported and left unwired. The slot is released when the current
    /// owner cleans up.
    pub fn register_control(&self) -> Option<String> {
        let id = self
            .registry
            .try_update(FieldRegistry::register_control)
            .and_then(|result| self.accept(result))?;
        let registry = self.registry;
        on_cleanup(move || {
            registry.try_update(FieldRegistry::release_control);
        });
        Some(id)
    }

    /// Registers the field's label, returning its id. Released on owner cleanup.
    pub fn register_label(&self, source: LabelSource) -> Option<String> {
        let id = self
            .registry
            .try_update(|registry| registry.register_label(source))
            .and_then(|result| self.accept(result))?;
        let registry = self.registry;
        on_cleanup(move || {
            registry.try_update(FieldRegistry::release_label);
        });
        Some(id)
    }

    /// Registers a description, returning its id. Released on owner cleanup.
    ///
    /// Returns `None` once the composer has been disposed.
    pub fn register_description(&self) -> Option<String> {
        let id = self.registry.try_update(FieldRegistry::register_description)?;
        let registry = self.registry;
        let released = id.clone();
        on_cleanup(move || {
            registry.try_update(|registry| registry.release_description(&released));
        });
        Some(id)
    }

    /// Reports a missing control once the composer's children have mounted.
    pub fn finish(&self) {
        if let Err(err) = self.registry.with_untracked(FieldRegistry::finish) {
            report_misuse(&err);
        }
    }

    /// Current id links, tracked.
    pub fn association(&self) -> FieldAssociation {
        self.registry.with(FieldRegistry::association)
    }

    fn accept(&self, result: Result<String, FieldError>) -> Option<String> {
        match result {
            Ok(id) => Some(id),
            Err(err) => {
                report_misuse(&err);
                None
            }
        }
    }
}

/// Returns the nearest enclosing field composer's context, if any.
pub fn use_field_context() -> Option<FieldContext> {
    use_context::<FieldContext>()
}

fn report_misuse(err: &FieldError) {
    logging::warn!("field composition error: {err}");
    debug_assert!(false, "field composition error: {err}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scope_allocates_distinct_prefixed_bases() {
        let mut scope = IdScope::new("settings");
        assert_eq!(scope.prefix(), "settings");
        assert_eq!(scope.next_base(), "settings-1");
        assert_eq!(scope.next_base(), "settings-2");
    }

    #[test]
    fn separate_scopes_do_not_share_a_counter() {
        let _ = leptos::create_runtime();
        let left = FieldIdScope::new("left");
        let right = FieldIdScope::new("right");
        assert_eq!(left.allocate(), "left-1");
        assert_eq!(right.allocate(), "right-1");
        assert_eq!(left.allocate(), "left-2");
    }

    #[test]
    fn description_links_to_control() {
        let mut registry = FieldRegistry::new("ui-1");
        assert_eq!(registry.register_control(), Ok("ui-1-control".to_string()));
        let description = registry.register_description();

        let association = registry.association();
        assert_eq!(association.control_id, "ui-1-control");
        assert_eq!(association.describedby(), Some(description));
        assert_eq!(association.labelledby(), None);
        assert_eq!(registry.finish(), Ok(()));
    }

    #[test]
    fn several_descriptions_are_space_joined_in_order() {
        let mut registry = FieldRegistry::new("ui-4");
        registry.register_description();
        registry.register_description();
        assert_eq!(
            registry.association().describedby().as_deref(),
            Some("ui-4-description-1 ui-4-description-2")
        );
    }

    #[test]
    fn sibling_label_names_control_but_wrapping_label_does_not() {
        let mut sibling = FieldRegistry::new("ui-2");
        sibling.register_label(LabelSource::Sibling).expect("label");
        assert_eq!(
            sibling.association().labelledby().as_deref(),
            Some("ui-2-label")
        );

        let mut wrapping = FieldRegistry::new("ui-3");
        wrapping.register_label(LabelSource::Wrapping).expect("label");
        assert_eq!(wrapping.association().labelledby(), None);
    }

    #[test]
    fn misuse_is_reported_as_typed_errors() {
        let mut registry = FieldRegistry::new("ui-9");
        assert_eq!(
            registry.finish(),
            Err(FieldError::MissingControl("ui-9".to_string()))
        );

        registry.register_control().expect("first control");
        assert_eq!(
            registry.register_control(),
            Err(FieldError::MultipleControls("ui-9".to_string()))
        );

        registry.register_label(LabelSource::Sibling).expect("first label");
        assert_eq!(
            registry.register_label(LabelSource::Wrapping),
            Err(FieldError::MultipleLabels("ui-9".to_string()))
        );
    }

    #[test]
    fn context_ids_are_stable_across_reads() {
        let _ = leptos::create_runtime();
        let field = FieldContext::new(FieldIdScope::new("ui").allocate());
        let control_id = field.register_control();
        let description_id = field.register_description();

        let first = field.association();
        let second = field.association();
        assert_eq!(first, second);
        assert_eq!(control_id.as_deref(), Some(first.control_id.as_str()));
        assert_eq!(first.control_id, field.control_id());
        assert_eq!(first.describedby(), description_id);
    }

    #[test]
    fn released_description_slot_is_reused() {
        let mut registry = FieldRegistry::new("ui-5");
        let first = registry.register_description();
        let second = registry.register_description();
        registry.release_description(&first);
        assert_eq!(
            registry.association().describedby().as_deref(),
            Some("ui-5-description-2")
        );

        assert_eq!(registry.register_description(), first);
        assert_eq!(
            registry.association().describedby(),
            Some(format!("{first} {second}"))
        );
    }

    #[test]
    fn released_control_and_label_slots_can_be_claimed_again() {
        let mut registry = FieldRegistry::new("ui-6");
        registry.register_control().expect("control");
        registry.register_label(LabelSource::Sibling).expect("label");
        registry.release_control();
        registry.release_label();

        assert_eq!(registry.finish(), Err(FieldError::MissingControl("ui-6".to_string())));
        assert_eq!(registry.association().labelledby(), None);
        assert_eq!(registry.register_control(), Ok("ui-6-control".to_string()));
        assert_eq!(registry.register_label(LabelSource::Wrapping), Ok("ui-6-label".to_string()));
    }

    #[test]
    fn remounted_description_keeps_its_id() {
        let _ = leptos::create_runtime();
        let field = FieldContext::new("ui-1");
        let mount = as_child_of_current_owner(move |()| field.register_description());

        let (first, unmount) = mount(());
        assert_eq!(first.as_deref(), Some("ui-1-description-1"));
        drop(unmount);
        assert_eq!(field.association().describedby(), None);

        let (second, _mounted) = mount(());
        assert_eq!(second, first);
        assert_eq!(field.association().describedby(), first);
    }

    #[test]
    fn remounted_control_and_label_register_again() {
        let _ = leptos::create_runtime();
        let field = FieldContext::new("ui-1");
        let mount = as_child_of_current_owner(move |()| {
            (
                field.register_control(),
                field.register_label(LabelSource::Sibling),
            )
        });

        let (first, unmount) = mount(());
        drop(unmount);
        let (second, _mounted) = mount(());
        assert_eq!(second, first);
        assert_eq!(
            second,
            (Some("ui-1-control".to_string()), Some("ui-1-label".to_string()))
        );
        assert_eq!(field.association().labelledby().as_deref(), Some("ui-1-label"));
    }

    #[test]
    fn sibling_composers_without_a_provider_get_distinct_ids() {
        let _ = leptos::create_runtime();
        let mount = as_child_of_current_owner(|()| {
            let first = run_as_child(|| FieldContext::mount("switch-field", None).control_id());
            let second = run_as_child(|| FieldContext::mount("switch-field", None).control_id());
            (first, second)
        });

        let ((first, second), _page) = mount(());
        assert_ne!(first, second);
        assert!(first.starts_with("switch-field-"));
        assert!(second.starts_with("switch-field-"));
    }

    #[test]
    fn composers_allocate_from_the_provided_scope() {
        let _ = leptos::create_runtime();
        let mount = as_child_of_current_owner(|()| {
            provide_context(FieldIdScope::new("story"));
            let first = run_as_child(|| FieldContext::mount("field", None).control_id());
            let explicit =
                run_as_child(|| FieldContext::mount("field", Some("wifi".to_string())).control_id());
            let second = run_as_child(|| FieldContext::mount("field", None).control_id());
            (first, explicit, second, use_field_context().is_some())
        });

        let ((first, explicit, second, leaked), _page) = mount(());
        assert_eq!(first, "story-1-control");
        assert_eq!(explicit, "wifi-control");
        assert_eq!(second, "story-2-control");
        assert!(!leaked);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "multiple interactive controls")]
    fn second_control_fails_fast_in_debug_builds() {
        let _ = leptos::create_runtime();
        let field = FieldContext::new("ui-1");
        field.register_control();
        field.register_control();
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "has no interactive control")]
    fn empty_field_fails_fast_in_debug_builds() {
        let _ = leptos::create_runtime();
        FieldContext::new("ui-1").finish();
    }
}

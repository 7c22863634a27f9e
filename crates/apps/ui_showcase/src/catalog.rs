//! Story registry: named demo configurations for each shared primitive.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use system_ui::{LabelPosition, TextRole, TextTone};
use thiserror::Error;

#[derive(Debug, Error)]
/// Story lookup and decoding failures.
pub enum StoryError {
    /// No story is registered under the id.
    #[error("unknown story `{0}`")]
    UnknownStory(String),
    /// A story with the same id is already registered.
    #[error("story `{0}` is already registered")]
    DuplicateStory(String),
    /// The story's args do not match the shape its renderer expects.
    #[error("story `{story}` has invalid args: {source}")]
    InvalidArgs {
        /// Story id.
        story: String,
        /// Decoding failure.
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Primitive family a story demonstrates.
pub enum ComponentKind {
    /// [`system_ui::Switch`].
    Switch,
    /// [`system_ui::SwitchField`] with label and description.
    SwitchField,
    /// [`system_ui::Group`] of switch fields.
    Group,
    /// [`system_ui::Text`].
    Text,
    /// [`system_ui::Breadcrumbs`].
    Breadcrumbs,
}

impl ComponentKind {
    /// Every family in catalog order.
    pub const ALL: [Self; 5] = [
        Self::Switch,
        Self::SwitchField,
        Self::Group,
        Self::Text,
        Self::Breadcrumbs,
    ];

    /// Display title used in navigation.
    pub fn title(self) -> &'static str {
        match self {
            Self::Switch => "Switch",
            Self::SwitchField => "SwitchField",
            Self::Group => "Group",
            Self::Text => "Text",
            Self::Breadcrumbs => "Breadcrumbs",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A single named story.
pub struct Story {
    /// Stable id, `component--variant`.
    pub id: &'static str,
    /// Demonstrated family.
    pub component: ComponentKind,
    /// Variant name.
    pub name: &'static str,
    /// One-line summary shown above the canvas.
    pub summary: &'static str,
    /// Sample props, decoded by the family renderer.
    pub args: Value,
}

impl Story {
    /// Decodes the story args.
    pub fn args<T: DeserializeOwned>(&self) -> Result<T, StoryError> {
        serde_json::from_value(self.args.clone()).map_err(|source| StoryError::InvalidArgs {
            story: self.id.to_string(),
            source,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Serializable mirror of [`LabelPosition`].
pub enum LabelSide {
    /// Label before the control.
    Start,
    /// Label after the control.
    #[default]
    End,
}

impl From<LabelSide> for LabelPosition {
    fn from(side: LabelSide) -> Self {
        match side {
            LabelSide::Start => LabelPosition::Start,
            LabelSide::End => LabelPosition::End,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Args for [`ComponentKind::Switch`] stories.
pub struct SwitchArgs {
    /// Inline label copy.
    pub label: String,
    /// Initial value.
    pub default_checked: bool,
    /// Disabled flag.
    pub disabled: bool,
    /// Label placement.
    pub label_position: LabelSide,
    /// Whether the story owns the value and feeds it back.
    pub controlled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Args for [`ComponentKind::SwitchField`] stories and group members.
pub struct SwitchFieldArgs {
    /// Field label copy.
    pub label: String,
    /// Supporting descriptions.
    pub descriptions: Vec<String>,
    /// Initial value.
    pub default_checked: bool,
    /// Disabled flag.
    pub disabled: bool,
    /// Label placement.
    pub label_position: LabelSide,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Args for [`ComponentKind::Group`] stories.
pub struct GroupArgs {
    /// Group label copy.
    pub label: Option<String>,
    /// Member fields.
    pub fields: Vec<SwitchFieldArgs>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)]
/// Serializable mirror of [`TextRole`].
pub enum TextRoleArg {
    Body,
    Label,
    Caption,
    Title,
    Code,
}

impl From<TextRoleArg> for TextRole {
    fn from(role: TextRoleArg) -> Self {
        match role {
            TextRoleArg::Body => TextRole::Body,
            TextRoleArg::Label => TextRole::Label,
            TextRoleArg::Caption => TextRole::Caption,
            TextRoleArg::Title => TextRole::Title,
            TextRoleArg::Code => TextRole::Code,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)]
/// Serializable mirror of [`TextTone`].
pub enum TextToneArg {
    Primary,
    Secondary,
    Accent,
    Success,
    Warning,
    Danger,
}

impl From<TextToneArg> for TextTone {
    fn from(tone: TextToneArg) -> Self {
        match tone {
            TextToneArg::Primary => TextTone::Primary,
            TextToneArg::Secondary => TextTone::Secondary,
            TextToneArg::Accent => TextTone::Accent,
            TextToneArg::Success => TextTone::Success,
            TextToneArg::Warning => TextTone::Warning,
            TextToneArg::Danger => TextTone::Danger,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One rendered text sample.
pub struct TextSample {
    /// Typography role.
    pub role: TextRoleArg,
    /// Text tone.
    pub tone: TextToneArg,
    /// Sample copy.
    pub copy: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Args for [`ComponentKind::Text`] stories.
pub struct TextArgs {
    /// Samples in render order.
    pub samples: Vec<TextSample>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One breadcrumb entry.
pub struct CrumbArg {
    /// Link text.
    pub label: String,
    /// Link target.
    #[serde(default)]
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Args for [`ComponentKind::Breadcrumbs`] stories.
pub struct BreadcrumbArgs {
    /// Landmark label override.
    pub aria_label: Option<String>,
    /// Entries; the last is the current page.
    pub items: Vec<CrumbArg>,
}

#[derive(Debug, Clone, Default)]
/// Ordered story registry.
pub struct StoryCatalog {
    stories: Vec<Story>,
}

impl StoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with every built-in story.
    pub fn builtin() -> Self {
        Self {
            stories: builtin_stories(),
        }
    }

    /// Adds a story, rejecting duplicate ids.
    pub fn register(&mut self, story: Story) -> Result<(), StoryError> {
        if self.stories.iter().any(|existing| existing.id == story.id) {
            return Err(StoryError::DuplicateStory(story.id.to_string()));
        }
        self.stories.push(story);
        Ok(())
    }

    /// Looks up a story by id.
    pub fn get(&self, id: &str) -> Result<&Story, StoryError> {
        self.stories
            .iter()
            .find(|story| story.id == id)
            .ok_or_else(|| StoryError::UnknownStory(id.to_string()))
    }

    /// Stories of one family, in registration order.
    pub fn by_component(&self, component: ComponentKind) -> impl Iterator<Item = &Story> {
        self.stories
            .iter()
            .filter(move |story| story.component == component)
    }

    /// Every story id in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stories.iter().map(|story| story.id)
    }

    /// The story shown when nothing is selected.
    pub fn first(&self) -> Option<&Story> {
        self.stories.first()
    }

    /// Number of registered stories.
    pub fn len(&self) -> usize {
        self.stories.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }
}

fn story(
    id: &'static str,
    component: ComponentKind,
    name: &'static str,
    summary: &'static str,
    args: Value,
) -> Story {
    Story {
        id,
        component,
        name,
        summary,
        args,
    }
}

fn builtin_stories() -> Vec<Story> {
    vec![
        story(
            "switch--default",
            ComponentKind::Switch,
            "Default",
            "Uncontrolled switch that starts off.",
            json!({ "label": "Wi-Fi" }),
        ),
        story(
            "switch--checked",
            ComponentKind::Switch,
            "Checked",
            "Uncontrolled switch seeded on.",
            json!({ "label": "Bluetooth", "default_checked": true }),
        ),
        story(
            "switch--disabled",
            ComponentKind::Switch,
            "Disabled",
            "Disabled switches stay focusable but ignore activation.",
            json!({ "label": "Airplane mode", "disabled": true }),
        ),
        story(
            "switch--disabled-checked",
            ComponentKind::Switch,
            "Disabled checked",
            "A disabled switch keeps its on state.",
            json!({ "label": "Location services", "default_checked": true, "disabled": true }),
        ),
        story(
            "switch--label-start",
            ComponentKind::Switch,
            "Label start",
            "Label placed before the control.",
            json!({ "label": "Dark mode", "label_position": "start" }),
        ),
        story(
            "switch--controlled",
            ComponentKind::Switch,
            "Controlled",
            "The story owns the value and feeds each change back.",
            json!({ "label": "Notifications", "controlled": true, "default_checked": true }),
        ),
        story(
            "switch-field--with-description",
            ComponentKind::SwitchField,
            "With description",
            "Label and description linked to the switch.",
            json!({
                "label": "Automatic updates",
                "descriptions": ["Install updates overnight while the device is charging."],
                "default_checked": true
            }),
        ),
        story(
            "switch-field--offline",
            ComponentKind::SwitchField,
            "Offline notice",
            "A disabled field explains why it is unavailable.",
            json!({
                "label": "Sync now",
                "descriptions": [
                    "Keeps your library up to date across devices.",
                    "You're not online. Sync resumes when the connection returns."
                ],
                "disabled": true
            }),
        ),
        story(
            "group--preferences",
            ComponentKind::Group,
            "Preferences",
            "Several switch fields under one group label.",
            json!({
                "label": "Privacy",
                "fields": [
                    {
                        "label": "Share usage data",
                        "descriptions": ["Helps improve stability. No personal content is sent."]
                    },
                    {
                        "label": "Personalized suggestions",
                        "descriptions": ["Uses recent activity to rank suggestions."],
                        "default_checked": true,
                        "label_position": "start"
                    }
                ]
            }),
        ),
        story(
            "text--roles",
            ComponentKind::Text,
            "Roles",
            "Every typography role at the primary tone.",
            json!({
                "samples": [
                    { "role": "title", "tone": "primary", "copy": "Title text" },
                    { "role": "body", "tone": "primary", "copy": "Body text for longer copy." },
                    { "role": "label", "tone": "primary", "copy": "Label text" },
                    { "role": "caption", "tone": "primary", "copy": "Caption text" },
                    { "role": "code", "tone": "primary", "copy": "let enabled = true;" }
                ]
            }),
        ),
        story(
            "text--tones",
            ComponentKind::Text,
            "Tones",
            "Body text in every tone.",
            json!({
                "samples": [
                    { "role": "body", "tone": "primary", "copy": "Primary" },
                    { "role": "body", "tone": "secondary", "copy": "Secondary" },
                    { "role": "body", "tone": "accent", "copy": "Accent" },
                    { "role": "body", "tone": "success", "copy": "Saved" },
                    { "role": "body", "tone": "warning", "copy": "Battery low" },
                    { "role": "body", "tone": "danger", "copy": "Connection lost" }
                ]
            }),
        ),
        story(
            "breadcrumbs--default",
            ComponentKind::Breadcrumbs,
            "Default",
            "Trail whose last entry is the current page.",
            json!({
                "items": [
                    { "label": "Home", "href": "/" },
                    { "label": "Settings", "href": "/settings" },
                    { "label": "Network" }
                ]
            }),
        ),
        story(
            "breadcrumbs--deep",
            ComponentKind::Breadcrumbs,
            "Deep trail",
            "Longer trail with a custom landmark label.",
            json!({
                "aria_label": "Document location",
                "items": [
                    { "label": "Workspace", "href": "/workspace" },
                    { "label": "Projects", "href": "/workspace/projects" },
                    { "label": "Design system", "href": "/workspace/projects/design-system" },
                    { "label": "Switch guidelines" }
                ]
            }),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn builtin_ids_are_unique() {
        let catalog = StoryCatalog::builtin();
        let ids: HashSet<_> = catalog.ids().collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn every_family_has_a_story() {
        let catalog = StoryCatalog::builtin();
        for kind in ComponentKind::ALL {
            assert!(
                catalog.by_component(kind).next().is_some(),
                "missing story for {}",
                kind.title()
            );
        }
    }

    #[test]
    fn builtin_args_decode_for_their_family() {
        let catalog = StoryCatalog::builtin();
        for story in catalog.by_component(ComponentKind::Switch) {
            story.args::<SwitchArgs>().expect("switch args");
        }
        for story in catalog.by_component(ComponentKind::SwitchField) {
            story.args::<SwitchFieldArgs>().expect("field args");
        }
        for story in catalog.by_component(ComponentKind::Group) {
            story.args::<GroupArgs>().expect("group args");
        }
        for story in catalog.by_component(ComponentKind::Text) {
            story.args::<TextArgs>().expect("text args");
        }
        for story in catalog.by_component(ComponentKind::Breadcrumbs) {
            story.args::<BreadcrumbArgs>().expect("breadcrumb args");
        }
    }

    #[test]
    fn switch_args_fill_defaults() {
        let catalog = StoryCatalog::builtin();
        let args: SwitchArgs = catalog
            .get("switch--label-start")
            .and_then(Story::args)
            .expect("args");
        assert_eq!(
            args,
            SwitchArgs {
                label: "Dark mode".to_string(),
                default_checked: false,
                disabled: false,
                label_position: LabelSide::Start,
                controlled: false,
            }
        );
    }

    #[test]
    fn offline_copy_is_grammatical() {
        let catalog = StoryCatalog::builtin();
        let args: SwitchFieldArgs = catalog
            .get("switch-field--offline")
            .and_then(Story::args)
            .expect("args");
        assert!(args.disabled);
        assert!(args.descriptions[1].starts_with("You're not online."));
    }

    #[test]
    fn unknown_and_duplicate_ids_are_rejected() {
        let mut catalog = StoryCatalog::builtin();
        assert!(matches!(
            catalog.get("switch--missing"),
            Err(StoryError::UnknownStory(id)) if id == "switch--missing"
        ));

        let duplicate = catalog.get("switch--default").expect("story").clone();
        assert!(matches!(
            catalog.register(duplicate),
            Err(StoryError::DuplicateStory(id)) if id == "switch--default"
        ));
    }

    #[test]
    fn mismatched_args_report_story_id() {
        let bad = story(
            "switch--bad",
            ComponentKind::Switch,
            "Bad",
            "Wrong arg types.",
            json!({ "disabled": "yes" }),
        );
        let err = bad.args::<SwitchArgs>().expect_err("invalid");
        assert!(err.to_string().starts_with("story `switch--bad` has invalid args"));
    }

    #[test]
    fn empty_catalog_registers_stories() {
        let mut catalog = StoryCatalog::new();
        assert!(catalog.is_empty());
        catalog
            .register(story(
                "text--single",
                ComponentKind::Text,
                "Single",
                "One sample.",
                json!({}),
            ))
            .expect("register");
        assert_eq!(catalog.first().map(|story| story.id), Some("text--single"));
    }
}

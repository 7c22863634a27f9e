//! Story catalog for the shared switch, field, text, and breadcrumb primitives.
//!
//! Each story renders one primitive family through `system_ui` with sample props and copy so
//! accessibility wiring and states can be reviewed in a running page. Selection and the recent
//! change log form a serializable snapshot that hosts can persist and restore.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod catalog;
mod stories;

use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use system_ui::prelude::*;

pub use catalog::{
    BreadcrumbArgs, ComponentKind, CrumbArg, GroupArgs, LabelSide, Story, StoryCatalog,
    StoryError, SwitchArgs, SwitchFieldArgs, TextArgs, TextRoleArg, TextSample, TextToneArg,
};
pub use stories::render_story;

const MAX_EVENT_LOG_ITEMS: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Restorable catalog state.
pub struct ShowcaseState {
    /// Selected story id.
    pub selected: String,
    /// Most recent change events, newest first.
    #[serde(default)]
    pub event_log: Vec<String>,
}

impl ShowcaseState {
    /// State that selects `story_id`.
    pub fn selecting(story_id: impl Into<String>) -> Self {
        Self {
            selected: story_id.into(),
            event_log: Vec::new(),
        }
    }

    /// Restores a snapshot, falling back to `catalog`'s first story when the payload is missing,
    /// malformed, or points at an unknown story.
    pub fn restore(restored: Option<Value>, catalog: &StoryCatalog) -> Self {
        let fallback = || Self::selecting(catalog.first().map(|story| story.id).unwrap_or_default());
        let Some(restored) = restored else {
            return fallback();
        };
        match serde_json::from_value::<Self>(restored) {
            Ok(state) if catalog.get(&state.selected).is_ok() => state,
            Ok(state) => {
                logging::warn!("ui showcase restore skipped unknown story `{}`", state.selected);
                fallback()
            }
            Err(err) => {
                logging::warn!("ui showcase restore failed: {err}");
                fallback()
            }
        }
    }

    /// Restores a snapshot, then applies a deep link to `initial_story` when it names a known
    /// story. Opening the saved story keeps its change log.
    pub fn open(
        restored: Option<Value>,
        initial_story: Option<&str>,
        catalog: &StoryCatalog,
    ) -> Self {
        let mut state = Self::restore(restored, catalog);
        if let Some(story_id) = initial_story {
            match catalog.get(story_id) {
                Ok(story) => state.select(story.id),
                Err(err) => logging::warn!("ui showcase deep link ignored: {err}"),
            }
        }
        state
    }

    /// Selects a story and clears the change log.
    pub fn select(&mut self, story_id: &str) {
        if self.selected != story_id {
            self.selected = story_id.to_string();
            self.event_log.clear();
        }
    }

    /// Records a change event, keeping only the newest entries.
    pub fn record(&mut self, event: String) {
        self.event_log.insert(0, event);
        self.event_log.truncate(MAX_EVENT_LOG_ITEMS);
    }
}

#[component]
/// Story catalog page.
pub fn UiShowcaseApp(
    /// Story to open instead of the restored or default selection.
    #[prop(optional, into)]
    initial_story: Option<String>,
    /// Host-restored [`ShowcaseState`] payload.
    #[prop(optional)]
    restored_state: Option<Value>,
    /// Receives each changed [`ShowcaseState`] snapshot for persistence.
    #[prop(optional)]
    on_persist: Option<Callback<Value>>,
) -> impl IntoView {
    let catalog = store_value(StoryCatalog::builtin());
    let initial = catalog.with_value(|catalog| {
        ShowcaseState::open(restored_state, initial_story.as_deref(), catalog)
    });

    let state = create_rw_signal(initial);
    let last_saved = create_rw_signal::<Option<String>>(None);
    let selected = create_memo(move |_| state.with(|state| state.selected.clone()));
    let record = Callback::new(move |event: String| state.update(|state| state.record(event)));

    create_effect(move |_| {
        let snapshot = state.get();
        let serialized = match serde_json::to_string(&snapshot) {
            Ok(serialized) => serialized,
            Err(err) => {
                logging::warn!("ui showcase serialize failed: {err}");
                return;
            }
        };

        if last_saved.get_untracked().as_deref() == Some(serialized.as_str()) {
            return;
        }
        last_saved.set(Some(serialized));

        if let Some(on_persist) = on_persist {
            match serde_json::to_value(&snapshot) {
                Ok(value) => on_persist.call(value),
                Err(err) => logging::warn!("ui showcase persist failed: {err}"),
            }
        }
    });

    let navigation = ComponentKind::ALL
        .into_iter()
        .map(|kind| {
            let entries = catalog
                .with_value(|catalog| {
                    catalog
                        .by_component(kind)
                        .map(|story| (story.id, story.name))
                        .collect::<Vec<_>>()
                })
                .into_iter()
                .map(|(story_id, name)| {
                    view! {
                        <li>
                            <button
                                type="button"
                                class="ui-showcase-story-link"
                                aria-current=move || (selected.get() == story_id).then_some("page")
                                data-ui-selected=move || (selected.get() == story_id).to_string()
                                on:click=move |_| state.update(|state| state.select(story_id))
                            >
                                {name}
                            </button>
                        </li>
                    }
                })
                .collect_view();

            view! {
                <Stack gap=LayoutGap::Sm>
                    <Heading role=TextRole::Label>{kind.title()}</Heading>
                    <ul data-ui-slot="stories">{entries}</ul>
                </Stack>
            }
        })
        .collect_view();

    let canvas = move || {
        let story_id = selected.get();
        let story = match catalog.with_value(|catalog| catalog.get(&story_id).cloned()) {
            Ok(story) => story,
            Err(err) => {
                logging::warn!("ui showcase render skipped: {err}");
                return view! { <Text tone=TextTone::Danger>{err.to_string()}</Text> }.into_view();
            }
        };
        let trail = BreadcrumbTrail::new()
            .with("Stories", None)
            .with(story.component.title(), None)
            .with(story.name, None);
        let body = match render_story(&story, record) {
            Ok(body) => body,
            Err(err) => {
                logging::warn!("ui showcase render failed: {err}");
                view! { <Text tone=TextTone::Danger>{err.to_string()}</Text> }.into_view()
            }
        };

        view! {
            <Stack gap=LayoutGap::Md>
                <Breadcrumbs trail aria_label="Story location" />
                <Heading>{story.name}</Heading>
                <Text tone=TextTone::Secondary>{story.summary}</Text>
                <div class="ui-showcase-canvas" data-story=story.id>
                    {body}
                </div>
            </Stack>
        }
        .into_view()
    };

    let event_log = move || {
        state
            .with(|state| state.event_log.clone())
            .into_iter()
            .map(|event| view! { <li><Text role=TextRole::Code>{event}</Text></li> })
            .collect_view()
    };

    view! {
        <IdScopeProvider prefix="story">
            <div class="ui-showcase" data-ui-kind="showcase">
                <nav class="ui-showcase-nav" aria-label="Stories">
                    <Stack gap=LayoutGap::Lg>{navigation}</Stack>
                </nav>
                <main class="ui-showcase-main">
                    {canvas}
                    <section aria-label="Change log">
                        <Heading role=TextRole::Label>"Change log"</Heading>
                        <ol data-ui-slot="event-log">{event_log}</ol>
                    </section>
                </main>
            </div>
        </IdScopeProvider>
    }
}

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use ui_showcase::UiShowcaseApp;

use crate::prefs::ShowcasePrefs;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="UI Stories" />
        <Meta name="description" content="Story catalog for the shared switch, field, text, and breadcrumb primitives." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=CatalogEntry />
                    <Route path="/stories/:id" view=StoryRoute />
                </Routes>
            </main>
        </Router>
    }
}

fn persist_snapshot() -> Callback<serde_json::Value> {
    Callback::new(|snapshot: serde_json::Value| {
        if let Err(err) = ShowcasePrefs.save(&snapshot) {
            logging::warn!("ui showcase snapshot save failed: {err}");
        }
    })
}

#[component]
pub fn CatalogEntry() -> impl IntoView {
    let restored = ShowcasePrefs.load();

    match restored {
        Some(restored) => view! {
            <UiShowcaseApp restored_state=restored on_persist=persist_snapshot() />
        }
        .into_view(),
        None => view! { <UiShowcaseApp on_persist=persist_snapshot() /> }.into_view(),
    }
}

#[component]
fn StoryRoute() -> impl IntoView {
    let params = use_params_map();
    let story_id = params
        .with_untracked(|map| map.get("id").cloned())
        .unwrap_or_default();

    match ShowcasePrefs.load() {
        Some(restored) => view! {
            <UiShowcaseApp
                initial_story=story_id
                restored_state=restored
                on_persist=persist_snapshot()
            />
        }
        .into_view(),
        None => view! {
            <UiShowcaseApp initial_story=story_id on_persist=persist_snapshot() />
        }
        .into_view(),
    }
}

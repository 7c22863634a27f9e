use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One entry in a breadcrumb trail.
pub struct BreadcrumbItem {
    /// Visible link text.
    pub label: String,
    /// Link target. `None` renders plain text.
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered breadcrumb trail whose last entry is the current page.
pub struct BreadcrumbTrail {
    items: Vec<BreadcrumbItem>,
}

impl BreadcrumbTrail {
    /// Creates an empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry and returns the trail.
    pub fn with(mut self, label: impl Into<String>, href: Option<&str>) -> Self {
        self.push(label, href);
        self
    }

    /// Appends an entry.
    pub fn push(&mut self, label: impl Into<String>, href: Option<&str>) {
        self.items.push(BreadcrumbItem {
            label: label.into(),
            href: href.map(str::to_string),
        });
    }

    /// All entries in order.
    pub fn items(&self) -> &[BreadcrumbItem] {
        &self.items
    }

    /// The current page entry.
    pub fn current(&self) -> Option<&BreadcrumbItem> {
        self.items.last()
    }

    /// Whether the entry at `index` is the current page.
    pub fn is_current(&self, index: usize) -> bool {
        !self.items.is_empty() && index == self.items.len() - 1
    }
}

#[component]
/// Shared breadcrumb navigation landmark.
///
/// Renders `trail` when given, otherwise the [`Breadcrumb`] children.
pub fn Breadcrumbs(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] trail: Option<BreadcrumbTrail>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let items = match trail {
        Some(trail) => trail
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let current = trail.is_current(index);
                let label = item.label.clone();
                match item.href.clone() {
                    Some(href) => view! {
                        <Breadcrumb href current>{label}</Breadcrumb>
                    }
                    .into_view(),
                    None => view! {
                        <Breadcrumb current>{label}</Breadcrumb>
                    }
                    .into_view(),
                }
            })
            .collect_view(),
        None => children
            .map(|children| children().into_view())
            .unwrap_or_else(|| ().into_view()),
    };

    view! {
        <nav
            class=merge_layout_class("ui-breadcrumbs", layout_class)
            aria-label=aria_label.unwrap_or_else(|| "Breadcrumbs".to_string())
            data-ui-primitive="true"
            data-ui-kind="breadcrumbs"
        >
            <ol data-ui-slot="list">{items}</ol>
        </nav>
    }
}

#[component]
/// Single breadcrumb entry. The current entry renders as text with `aria-current="page"`.
pub fn Breadcrumb(
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional)] current: bool,
    children: Children,
) -> impl IntoView {
    let content = match href.filter(|_| !current) {
        Some(href) => view! { <a href=href data-ui-slot="link">{children()}</a> }.into_view(),
        None => view! {
            <span data-ui-slot="link" aria-current=current.then_some("page")>
                {children()}
            </span>
        }
        .into_view(),
    };

    view! {
        <li
            class="ui-breadcrumb"
            data-ui-primitive="true"
            data-ui-kind="breadcrumb"
            data-ui-selected=bool_token(current)
        >
            {content}
            {(!current).then(|| view! { <span data-ui-slot="separator" aria-hidden="true">"/"</span> })}
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn only_last_entry_is_current() {
        let trail = BreadcrumbTrail::new()
            .with("Home", Some("/"))
            .with("Settings", Some("/settings"))
            .with("Network", None);

        assert_eq!(trail.items().len(), 3);
        assert!(!trail.is_current(0));
        assert!(!trail.is_current(1));
        assert!(trail.is_current(2));
        assert_eq!(trail.current().map(|item| item.label.as_str()), Some("Network"));
    }

    #[test]
    fn empty_trail_has_no_current_entry() {
        let trail = BreadcrumbTrail::new();
        assert_eq!(trail.current(), None);
        assert!(!trail.is_current(0));
    }

    #[test]
    fn push_keeps_hrefs_optional() {
        let mut trail = BreadcrumbTrail::new();
        trail.push("Library", Some("/library"));
        trail.push("Draft", None);
        assert_eq!(
            trail.items(),
            &[
                BreadcrumbItem {
                    label: "Library".to_string(),
                    href: Some("/library".to_string()),
                },
                BreadcrumbItem {
                    label: "Draft".to_string(),
                    href: None,
                },
            ]
        );
    }
}

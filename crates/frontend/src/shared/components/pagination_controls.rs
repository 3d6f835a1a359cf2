use crate::shared::config::PAGE_SIZE_OPTIONS;
use crate::shared::icons::icon;
use crate::shared::list_utils::{clamp_page, total_pages, ListView};
use leptos::prelude::*;

/// Position of a table inside its filtered rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PageNav {
    page: usize,
    pages: usize,
    count: usize,
}

impl PageNav {
    fn of(view: &ListView, count: usize) -> Self {
        Self {
            page: clamp_page(view.page, count, view.page_size),
            pages: total_pages(count, view.page_size),
            count,
        }
    }

    fn has_prev(&self) -> bool {
        self.page > 0
    }

    fn has_next(&self) -> bool {
        self.page + 1 < self.pages
    }

    fn last(&self) -> usize {
        self.pages.saturating_sub(1)
    }

    /// "2 / 5 (43)"; an empty list still reads as page 1 of 1
    fn label(&self) -> String {
        format!("{} / {} ({})", self.page + 1, self.pages.max(1), self.count)
    }
}

/// First/prev/next/last buttons and the page size select of one table
#[component]
pub fn ListPagination(
    view_state: RwSignal<ListView>,
    /// Row count after filtering
    #[prop(into)]
    total_count: Signal<usize>,
) -> impl IntoView {
    let nav = Memo::new(move |_| view_state.with(|v| PageNav::of(v, total_count.get())));
    let go_to = move |page: usize| view_state.update(|v| v.page = page);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                title="First page"
                disabled=move || !nav.get().has_prev()
                on:click=move |_| go_to(0)
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                title="Previous page"
                disabled=move || !nav.get().has_prev()
                on:click=move |_| go_to(nav.get_untracked().page.saturating_sub(1))
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">{move || nav.get().label()}</span>
            <button
                class="pagination-btn"
                title="Next page"
                disabled=move || !nav.get().has_next()
                on:click=move |_| {
                    let n = nav.get_untracked();
                    if n.has_next() {
                        go_to(n.page + 1);
                    }
                }
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                title="Last page"
                disabled=move || !nav.get().has_next()
                on:click=move |_| go_to(nav.get_untracked().last())
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                prop:value=move || view_state.with(|v| v.page_size.to_string())
                on:change=move |ev| {
                    let size = event_target_value(&ev).parse().unwrap_or(PAGE_SIZE_OPTIONS[1]);
                    view_state.update(|v| v.set_page_size(size));
                }
            >
                {PAGE_SIZE_OPTIONS.iter().map(|&size| view! {
                    <option value=size.to_string() selected=move || view_state.with(|v| v.page_size == size)>
                        {size.to_string()}
                    </option>
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_in_the_middle() {
        let mut view = ListView::new("name", 10);
        view.page = 1;
        let nav = PageNav::of(&view, 43);
        assert!(nav.has_prev());
        assert!(nav.has_next());
        assert_eq!(nav.last(), 4);
        assert_eq!(nav.label(), "2 / 5 (43)");
    }

    #[test]
    fn test_nav_clamps_after_shrink() {
        let mut view = ListView::new("name", 25);
        view.page = 3;
        let nav = PageNav::of(&view, 30);
        assert_eq!(nav.page, 1);
        assert!(!nav.has_next());
    }

    #[test]
    fn test_nav_empty_list() {
        let nav = PageNav::of(&ListView::new("name", 10), 0);
        assert!(!nav.has_prev());
        assert!(!nav.has_next());
        assert_eq!(nav.label(), "1 / 1 (0)");
    }
}

/// Универсальные утилиты для работы со списками (поиск, сортировка, пагинация, UI компоненты)
use gloo_timers::callback::Timeout;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use std::cmp::Ordering;

/// Минимальная длина строки поиска
pub const MIN_FILTER_LEN: usize = 3;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Case-insensitive substring match over several fields
pub fn any_field_contains(fields: &[&str], filter: &str) -> bool {
    let needle = filter.trim().to_lowercase();
    fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

/// Case-insensitive comparison for text columns
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

pub fn is_filter_active(filter: &str) -> bool {
    filter.trim().chars().count() >= MIN_FILTER_LEN
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    if !is_filter_active(filter) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let filter_lower = filter.trim().to_lowercase();
    let text_lower = text.to_lowercase();

    // Lowercasing may change byte lengths (non-ASCII); show plain text then
    if text_lower.len() != text.len() || !text_lower.contains(&filter_lower) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;
        if actual_pos > last_pos {
            parts.push(view! { <span>{text[last_pos..actual_pos].to_string()}</span> }.into_any());
        }
        let match_end = actual_pos + filter_lower.len();
        parts.push(view! {
            <span class="search-highlight">{text[actual_pos..match_end].to_string()}</span>
        }.into_any());
        last_pos = match_end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Сортирует список по указанному полю
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending { cmp } else { cmp.reverse() }
    });
}

/// Фильтрует список по поисковому запросу
pub fn filter_list<T: Searchable + Clone>(items: Vec<T>, filter: &str) -> Vec<T> {
    if !is_filter_active(filter) {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Последняя существующая страница, если список сократился
pub fn clamp_page(page: usize, count: usize, page_size: usize) -> usize {
    page.min(total_pages(count, page_size).saturating_sub(1))
}

/// Срез одной страницы (страницы с нуля)
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let page = clamp_page(page, items.len(), page_size);
    items
        .iter()
        .skip(page * page_size)
        .take(page_size)
        .cloned()
        .collect()
}

/// Filter, sort and page settings of one table
#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    pub filter: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
}

impl ListView {
    pub fn new(sort_field: &str, page_size: usize) -> Self {
        Self {
            filter: String::new(),
            sort_field: sort_field.to_string(),
            sort_ascending: true,
            page: 0,
            page_size,
        }
    }

    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
    }

    pub fn set_filter(&mut self, filter: String) {
        self.filter = filter;
        self.page = 0;
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size;
        self.page = 0;
    }

    /// Filtered and sorted rows, before paging
    pub fn visible<T: Searchable + Sortable + Clone>(&self, items: &[T]) -> Vec<T> {
        let mut rows = filter_list(items.to_vec(), &self.filter);
        sort_list(&mut rows, &self.sort_field, self.sort_ascending);
        rows
    }

    /// Rows of the current page plus the filtered count
    pub fn page_of<T: Searchable + Sortable + Clone>(&self, items: &[T]) -> (Vec<T>, usize) {
        let rows = self.visible(items);
        (paginate(&rows, self.page, self.page_size), rows.len())
    }
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для отображения)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search (min. 3 characters)...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        // drop() of the previous Timeout cancels it
        let timeout = Timeout::new(300, move || on_change.run(new_value));
        pending.set_value(Some(timeout));
    };

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || is_filter_active(&value.get())
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

/// Заголовок колонки, переключающий сортировку
#[component]
pub fn SortableHeader(
    label: &'static str,
    field: &'static str,
    view_state: RwSignal<ListView>,
) -> impl IntoView {
    let on_click = move |_: MouseEvent| view_state.update(|v| v.toggle_sort(field));

    view! {
        <th class="table__header-cell table__header-cell--sortable" on:click=on_click>
            {label}
            <span class="table__sort-indicator">
                {move || view_state.with(|v| get_sort_indicator(&v.sort_field, field, v.sort_ascending))}
            </span>
        </th>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        qty: i64,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            any_field_contains(&[self.name], filter)
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "qty" => self.qty.cmp(&other.qty),
                _ => compare_text(self.name, other.name),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Laptop", qty: 3 },
            Row { name: "monitor", qty: 1 },
            Row { name: "Memory", qty: 7 },
        ]
    }

    #[test]
    fn test_filter_needs_three_chars() {
        assert_eq!(filter_list(rows(), "mo").len(), 3);
        let found = filter_list(rows(), "MON");
        assert_eq!(found, vec![Row { name: "monitor", qty: 1 }]);
    }

    #[test]
    fn test_sort_case_insensitive() {
        let mut items = rows();
        sort_list(&mut items, "name", true);
        let names: Vec<_> = items.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Laptop", "Memory", "monitor"]);

        sort_list(&mut items, "qty", false);
        assert_eq!(items[0].qty, 7);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "qty", true), " ⇅");
    }

    #[test]
    fn test_pagination() {
        let items: Vec<i32> = (1..=23).collect();
        assert_eq!(total_pages(items.len(), 10), 3);
        assert_eq!(paginate(&items, 2, 10), vec![21, 22, 23]);
        // page beyond the end shows the last page
        assert_eq!(paginate(&items, 9, 10), vec![21, 22, 23]);
        assert_eq!(clamp_page(5, 0, 10), 0);
        assert_eq!(total_pages(0, 10), 0);
    }

    #[test]
    fn test_list_view_toggle_and_reset() {
        let mut view = ListView::new("name", 10);
        view.page = 2;
        view.toggle_sort("name");
        assert!(!view.sort_ascending);
        view.toggle_sort("qty");
        assert_eq!(view.sort_field, "qty");
        assert!(view.sort_ascending);

        view.set_filter("lap".into());
        assert_eq!(view.page, 0);
    }

    #[test]
    fn test_list_view_page_of() {
        let mut view = ListView::new("qty", 2);
        let (page, count) = view.page_of(&rows());
        assert_eq!(count, 3);
        assert_eq!(page.iter().map(|r| r.qty).collect::<Vec<_>>(), vec![1, 3]);

        view.set_filter("memo".into());
        let (page, count) = view.page_of(&rows());
        assert_eq!(count, 1);
        assert_eq!(page[0].name, "Memory");
    }
}

use crate::shared::icons::icon;
use leptos::prelude::*;

/// Title row of a page: icon, title with the row count, actions on the right
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,
    /// Entity icon from the metadata
    #[prop(optional)]
    icon_name: Option<&'static str>,
    /// Rows after filtering, shown next to the title
    #[prop(optional, into)]
    count: MaybeProp<usize>,
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    /// Buttons and selects
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                {icon_name.map(|name| view! { <span class="page-header__icon">{icon(name)}</span> })}
                <div class="page-header__text">
                    <h1 class="page-header__title">
                        {title}
                        {move || count.get().map(|n| view! { <span class="page-header__count">{n}</span> })}
                    </h1>
                    {move || subtitle.get().map(|s| view! { <div class="page-header__subtitle">{s}</div> })}
                </div>
            </div>
            <div class="page-header__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}

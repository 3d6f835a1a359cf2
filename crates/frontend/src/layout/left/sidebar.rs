//! Sidebar component with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use contracts::domain::a001_asset_category::ENTITY_METADATA as A001;
use contracts::domain::a002_asset_subcategory::ENTITY_METADATA as A002;
use contracts::domain::a003_branch::ENTITY_METADATA as A003;
use contracts::domain::a004_section::ENTITY_METADATA as A004;
use contracts::domain::a005_employee::ENTITY_METADATA as A005;
use contracts::domain::a006_status::ENTITY_METADATA as A006;
use contracts::domain::a010_equipment::ENTITY_METADATA as A010;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, String, &'static str)>, // (tab key, label, icon)
}

fn item(key: &'static str, icon: &'static str) -> (&'static str, String, &'static str) {
    (key, tab_label_for_key(key), icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboards",
            label: "Dashboards",
            icon: "bar-chart",
            items: vec![
                item("d402_overview", "layout-dashboard"),
                item("d400_monthly_expenses", "bar-chart"),
                item("d401_software_licenses", "key"),
            ],
        },
        MenuGroup {
            id: "assets",
            label: "Assets",
            icon: "package",
            items: vec![item(A010.entity_index, A010.ui.icon)],
        },
        MenuGroup {
            id: "references",
            label: "References",
            icon: "database",
            items: vec![
                item(A001.entity_index, A001.ui.icon),
                item(A002.entity_index, A002.ui.icon),
                item(A006.entity_index, A006.ui.icon),
            ],
        },
        MenuGroup {
            id: "organization",
            label: "Organization",
            icon: "building",
            items: vec![
                item(A003.entity_index, A003.ui.icon),
                item(A004.entity_index, A004.ui.icon),
                item(A005.entity_index, A005.ui.icon),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let expanded_groups = RwSignal::new(vec!["dashboards".to_string(), "assets".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_exp = group_id.clone();
                let group_id_for_show = group_id.clone();
                let items_stored = StoredValue::new(group.items);

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_id.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id_for_exp)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&group_id_for_show)>
                            <div class="app-sidebar__children">
                                {items_stored.get_value().into_iter().map(|(key, label, icon_name)| {
                                    let label_for_click = label.clone();
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.get().as_deref() == Some(key)
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(key, &label_for_click)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

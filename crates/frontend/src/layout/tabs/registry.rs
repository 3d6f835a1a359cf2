//! Tab content registry - единственный источник правды для маппинга tab.key → View
//!
//! Все tab keys собраны здесь в одном месте.

use super::tab_labels::asset_id_from_key;
use crate::dashboards::{MonthlyExpensesDashboard, OverviewDashboard, SoftwareLicensesDashboard};
use crate::domain::a001_asset_category::ui::list::AssetCategoryList;
use crate::domain::a002_asset_subcategory::ui::list::AssetSubcategoryList;
use crate::domain::a003_branch::ui::list::BranchList;
use crate::domain::a004_section::ui::list::SectionList;
use crate::domain::a005_employee::ui::list::EmployeeList;
use crate::domain::a006_status::ui::list::StatusList;
use crate::domain::a007_asset_component::ui::list::AssetComponentsPage;
use crate::domain::a010_equipment::ui::list::EquipmentList;
use crate::layout::global_context::AppGlobalContext;
use leptos::logging::log;
use leptos::prelude::*;

/// Рендерит контент таба по его ключу.
///
/// # Arguments
/// * `key` - уникальный ключ таба (например "a003_branch", "a007_asset_component_12")
/// * `tabs_store` - контекст табов (страница компонентов закрывает свой таб, если актив не найден)
///
/// # Returns
/// AnyView с содержимым таба или placeholder для неизвестных ключей
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    // Страница компонентов: ключ содержит id актива
    if let Some(asset_id) = asset_id_from_key(key) {
        let key_for_close = key.to_string();
        return view! {
            <AssetComponentsPage
                asset_id=asset_id
                on_close=Callback::new(move |_| tabs_store.close_tab(&key_for_close))
            />
        }
        .into_any();
    }

    match key {
        // ═══════════════════════════════════════════════════════════════════
        // Reference tables (a001-a006)
        // ═══════════════════════════════════════════════════════════════════
        "a001_asset_category" => view! { <AssetCategoryList /> }.into_any(),
        "a002_asset_subcategory" => view! { <AssetSubcategoryList /> }.into_any(),
        "a003_branch" => view! { <BranchList /> }.into_any(),
        "a004_section" => view! { <SectionList /> }.into_any(),
        "a005_employee" => view! { <EmployeeList /> }.into_any(),
        "a006_status" => view! { <StatusList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Assets
        // ═══════════════════════════════════════════════════════════════════
        "a010_equipment" => view! { <EquipmentList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Dashboards (d4xx)
        // ═══════════════════════════════════════════════════════════════════
        "d400_monthly_expenses" => view! { <MonthlyExpensesDashboard /> }.into_any(),
        "d401_software_licenses" => view! { <SoftwareLicensesDashboard /> }.into_any(),
        "d402_overview" => view! { <OverviewDashboard /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Unknown / Fallback
        // ═══════════════════════════════════════════════════════════════════
        _ => {
            log!("Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}

//! Tab labels - единственный источник правды для заголовков табов.
//!
//! Для агрегатов используются константы ENTITY_METADATA из contracts,
//! для дашбордов — хардкод.

use contracts::domain::a001_asset_category::ENTITY_METADATA as A001;
use contracts::domain::a002_asset_subcategory::ENTITY_METADATA as A002;
use contracts::domain::a003_branch::ENTITY_METADATA as A003;
use contracts::domain::a004_section::ENTITY_METADATA as A004;
use contracts::domain::a005_employee::ENTITY_METADATA as A005;
use contracts::domain::a006_status::ENTITY_METADATA as A006;
use contracts::domain::a007_asset_component::ENTITY_METADATA as A007;
use contracts::domain::a010_equipment::ENTITY_METADATA as A010;

const ASSET_COMPONENTS_PREFIX: &str = "a007_asset_component_";

/// Key of the components tab of one asset
pub fn asset_components_key(asset_id: i64) -> String {
    format!("{}{}", ASSET_COMPONENTS_PREFIX, asset_id)
}

/// Asset id from a components tab key; `None` for other keys
pub fn asset_id_from_key(key: &str) -> Option<i64> {
    key.strip_prefix(ASSET_COMPONENTS_PREFIX)?
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
}

/// Возвращает читаемый заголовок таба для данного ключа.
///
/// Fallback: сам ключ.
pub fn tab_label_for_key(key: &str) -> String {
    let label = match key {
        "a001_asset_category" => A001.ui.list_name,
        "a002_asset_subcategory" => A002.ui.list_name,
        "a003_branch" => A003.ui.list_name,
        "a004_section" => A004.ui.list_name,
        "a005_employee" => A005.ui.list_name,
        "a006_status" => A006.ui.list_name,
        "a010_equipment" => A010.ui.list_name,

        // ── Dashboards (d4xx) ─────────────────────────────────────────────
        "d400_monthly_expenses" => "Monthly expenses",
        "d401_software_licenses" => "Software licenses",
        "d402_overview" => "Overview",

        k => {
            return match asset_id_from_key(k) {
                Some(id) => format!("{} · asset #{}", A007.ui.list_name, id),
                None => k.to_string(),
            }
        }
    };
    label.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_from_metadata() {
        assert_eq!(tab_label_for_key("a003_branch"), "Branches");
        assert_eq!(tab_label_for_key("d401_software_licenses"), "Software licenses");
        assert_eq!(tab_label_for_key("unknown_key"), "unknown_key");
    }

    #[test]
    fn test_asset_components_key() {
        let key = asset_components_key(12);
        assert_eq!(key, "a007_asset_component_12");
        assert_eq!(asset_id_from_key(&key), Some(12));
        assert_eq!(tab_label_for_key(&key), "Asset components · asset #12");
        assert_eq!(asset_id_from_key("a007_asset_component_x"), None);
        assert_eq!(asset_id_from_key("a007_asset_component_0"), None);
    }
}

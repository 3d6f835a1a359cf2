//! Derived component name
//!
//! `"{category} {subcategory} {brand} ({spec summary})"`, where the summary
//! depends on which kind of category the component belongs to. Operators
//! never type these names by hand.

use super::form::ComponentForm;
use super::specifications::{spec_text, spec_text_or, Specifications};
use crate::domain::a001_asset_category::aggregate::AssetCategory;
use crate::domain::a002_asset_subcategory::aggregate::AssetSubcategory;

/// Reference lists used to resolve ids into names
#[derive(Debug, Clone, Copy)]
pub struct NamingLookup<'a> {
    pub categories: &'a [AssetCategory],
    pub subcategories: &'a [AssetSubcategory],
}

impl<'a> NamingLookup<'a> {
    pub fn new(categories: &'a [AssetCategory], subcategories: &'a [AssetSubcategory]) -> Self {
        Self {
            categories,
            subcategories,
        }
    }

    pub fn category_name(&self, id: &str) -> &'a str {
        let Ok(id) = id.trim().parse::<i64>() else {
            return "";
        };
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
            .unwrap_or("")
    }

    pub fn subcategory_name(&self, id: &str) -> &'a str {
        let Ok(id) = id.trim().parse::<i64>() else {
            return "";
        };
        self.subcategories
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.name.as_str())
            .unwrap_or("")
    }
}

// ============================================================================
// Spec profiles
// ============================================================================

/// Which specification fields matter for a category, picked by its name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecProfile {
    Laptop,
    Memory,
    Storage,
    Display,
    Generic,
}

/// One input of the specification section of the component form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecFieldDef {
    pub key: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
}

const fn field(key: &'static str, label: &'static str, placeholder: &'static str) -> SpecFieldDef {
    SpecFieldDef {
        key,
        label,
        placeholder,
    }
}

const LAPTOP_FIELDS: &[SpecFieldDef] = &[
    field("processor", "Processor", "e.g. Intel Core i7-1165G7"),
    field("ram", "RAM", "16"),
    field("ram_unit", "RAM unit", "GB"),
    field("storage_capacity", "Storage capacity", "512"),
    field("storage_unit", "Storage unit", "GB"),
    field("storage_type", "Storage type", "SSD"),
    field("screen_size", "Screen size (in)", "14"),
];

const MEMORY_FIELDS: &[SpecFieldDef] = &[
    field("capacity", "Capacity", "8"),
    field("capacity_unit", "Capacity unit", "GB"),
    field("memory_type", "Memory type", "DDR4"),
    field("speed", "Speed (MHz)", "3200"),
];

const STORAGE_FIELDS: &[SpecFieldDef] = &[
    field("capacity", "Capacity", "1"),
    field("capacity_unit", "Capacity unit", "TB"),
    field("interface", "Interface", "SATA"),
    field("form_factor", "Form factor", "2.5\""),
];

const DISPLAY_FIELDS: &[SpecFieldDef] = &[
    field("screen_size", "Screen size (in)", "24"),
    field("resolution", "Resolution", "1920x1080"),
    field("refresh_rate", "Refresh rate (Hz)", "75"),
];

const GENERIC_FIELDS: &[SpecFieldDef] = &[
    field("ram", "RAM", ""),
    field("ram_unit", "RAM unit", "GB"),
    field("capacity", "Capacity", ""),
    field("capacity_unit", "Capacity unit", ""),
];

impl SpecProfile {
    /// Case-insensitive substring match on the category name; first hit wins
    pub fn for_category(category_name: &str) -> Self {
        let name = category_name.to_lowercase();
        if name.contains("laptop") {
            Self::Laptop
        } else if name.contains("memory") || name.contains("ram") {
            Self::Memory
        } else if name.contains("storage") || name.contains("hdd") || name.contains("ssd") {
            Self::Storage
        } else if name.contains("monitor") || name.contains("display") {
            Self::Display
        } else {
            Self::Generic
        }
    }

    pub fn fields(&self) -> &'static [SpecFieldDef] {
        match self {
            Self::Laptop => LAPTOP_FIELDS,
            Self::Memory => MEMORY_FIELDS,
            Self::Storage => STORAGE_FIELDS,
            Self::Display => DISPLAY_FIELDS,
            Self::Generic => GENERIC_FIELDS,
        }
    }

    /// Summary candidates in display order; `None` where the source value is missing
    fn candidates(&self, specs: &Specifications) -> Vec<Option<String>> {
        let text = |key: &str| spec_text(specs, key);
        let or = |key: &str, default: &str| spec_text_or(specs, key, default);

        match self {
            Self::Laptop => vec![
                text("processor"),
                text("ram").map(|ram| format!("{}{} RAM", ram, or("ram_unit", "GB"))),
                text("storage_capacity").map(|cap| {
                    format!(
                        "{}{} {}",
                        cap,
                        or("storage_unit", "GB"),
                        or("storage_type", "Storage")
                    )
                }),
                text("screen_size").map(|size| format!("{}\"", size)),
            ],
            Self::Memory => {
                let parts = [
                    text("capacity").map(|cap| format!("{}{}", cap, or("capacity_unit", "GB"))),
                    text("memory_type"),
                    text("speed").map(|speed| format!("{}MHz", speed)),
                    Some("RAM".to_string()),
                ];
                let joined = parts
                    .into_iter()
                    .flatten()
                    .filter(|p| !p.trim().is_empty())
                    .collect::<Vec<_>>()
                    .join(" ");
                vec![Some(joined)]
            }
            Self::Storage => vec![
                text("capacity")
                    .map(|cap| format!("{}{} Storage", cap, or("capacity_unit", "GB"))),
                text("interface"),
                text("form_factor"),
            ],
            Self::Display => vec![
                text("screen_size").map(|size| format!("{}\"", size)),
                text("resolution"),
                text("refresh_rate").map(|rate| format!("{}Hz", rate)),
            ],
            Self::Generic => vec![
                text("ram").map(|ram| format!("{}{} RAM", ram, or("ram_unit", "GB"))),
                text("capacity")
                    .map(|cap| format!("{}{}", cap, or("capacity_unit", "")).trim().to_string()),
            ],
        }
    }
}

/// Spec summary for a category, parts joined with `" / "`
pub fn spec_summary(category_name: &str, specs: &Specifications) -> String {
    SpecProfile::for_category(category_name)
        .candidates(specs)
        .into_iter()
        .flatten()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Compose the final name from already resolved parts
pub fn compose_name(
    category_name: &str,
    subcategory_name: &str,
    brand: &str,
    specs: &Specifications,
) -> String {
    let base_name = [category_name, subcategory_name, brand]
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let summary = spec_summary(category_name, specs);

    match (base_name.is_empty(), summary.is_empty()) {
        (false, false) => format!("{} ({})", base_name, summary),
        (false, true) => base_name,
        (true, false) => summary,
        (true, true) => String::new(),
    }
}

/// Derived name of the component currently held by a form
pub fn build_component_name(form: &ComponentForm, lookup: NamingLookup<'_>) -> String {
    compose_name(
        lookup.category_name(&form.category_id),
        lookup.subcategory_name(&form.subcategory_id),
        &form.brand,
        &form.specifications,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn specs(value: serde_json::Value) -> Specifications {
        serde_json::from_value(value).unwrap()
    }

    fn categories() -> Vec<AssetCategory> {
        vec![
            AssetCategory { id: 1, name: "Laptop".into(), description: None },
            AssetCategory { id: 2, name: "Memory".into(), description: None },
            AssetCategory { id: 3, name: "Storage Drive".into(), description: None },
            AssetCategory { id: 4, name: "Monitor".into(), description: None },
            AssetCategory { id: 5, name: "Peripheral".into(), description: None },
        ]
    }

    fn subcategories() -> Vec<AssetSubcategory> {
        vec![AssetSubcategory {
            id: 10,
            category_id: 1,
            name: "Business".into(),
            description: None,
            category: None,
        }]
    }

    #[test]
    fn test_profile_dispatch() {
        assert_eq!(SpecProfile::for_category("Gaming LAPTOP"), SpecProfile::Laptop);
        assert_eq!(SpecProfile::for_category("RAM Module"), SpecProfile::Memory);
        assert_eq!(SpecProfile::for_category("External HDD"), SpecProfile::Storage);
        assert_eq!(SpecProfile::for_category("NVMe SSD"), SpecProfile::Storage);
        assert_eq!(SpecProfile::for_category("Display Panel"), SpecProfile::Display);
        assert_eq!(SpecProfile::for_category("Keyboard"), SpecProfile::Generic);
    }

    #[test]
    fn test_laptop_summary_with_default_units() {
        let s = specs(json!({"processor": "i7", "ram": 16, "storage_capacity": 512, "storage_type": "SSD"}));
        assert_eq!(spec_summary("Laptop", &s), "i7 / 16GB RAM / 512GB SSD");
    }

    #[test]
    fn test_laptop_summary_without_storage_type() {
        let s = specs(json!({"ram": "8", "ram_unit": "GB", "storage_capacity": "1", "storage_unit": "TB", "screen_size": "15.6"}));
        assert_eq!(spec_summary("Laptop", &s), "8GB RAM / 1TB Storage / 15.6\"");
    }

    #[test]
    fn test_memory_summary_is_single_part() {
        let s = specs(json!({"capacity": 8, "memory_type": "DDR4", "speed": 3200}));
        assert_eq!(spec_summary("Memory", &s), "8GB DDR4 3200MHz RAM");
        assert_eq!(spec_summary("Memory", &Specifications::new()), "RAM");
    }

    #[test]
    fn test_storage_summary() {
        let s = specs(json!({"capacity": 1, "capacity_unit": "TB", "interface": "SATA", "form_factor": ""}));
        assert_eq!(spec_summary("HDD", &s), "1TB Storage / SATA");
    }

    #[test]
    fn test_display_summary() {
        let s = specs(json!({"screen_size": 24, "resolution": "1920x1080", "refresh_rate": "144"}));
        assert_eq!(spec_summary("Monitor", &s), "24\" / 1920x1080 / 144Hz");
    }

    #[test]
    fn test_generic_summary() {
        let s = specs(json!({"ram": 4, "capacity": 64}));
        assert_eq!(spec_summary("Tablet", &s), "4GB RAM / 64");
        assert_eq!(spec_summary("Tablet", &Specifications::new()), "");
    }

    #[test]
    fn test_full_name() {
        let cats = categories();
        let subs = subcategories();
        let form = ComponentForm {
            category_id: "1".into(),
            subcategory_id: "10".into(),
            brand: " Dell ".into(),
            specifications: specs(json!({"processor": "i5", "ram": 8})),
            ..Default::default()
        };
        assert_eq!(
            build_component_name(&form, NamingLookup::new(&cats, &subs)),
            "Laptop Business Dell (i5 / 8GB RAM)"
        );
    }

    #[test]
    fn test_name_without_summary_or_base() {
        let cats = categories();
        let form = ComponentForm {
            category_id: "5".into(),
            brand: "Logitech".into(),
            ..Default::default()
        };
        assert_eq!(build_component_name(&form, NamingLookup::new(&cats, &[])), "Peripheral Logitech");

        let empty = ComponentForm::default();
        assert_eq!(build_component_name(&empty, NamingLookup::new(&cats, &[])), "");
    }

    #[test]
    fn test_unknown_ids_resolve_to_empty() {
        let cats = categories();
        let form = ComponentForm {
            category_id: "99".into(),
            subcategory_id: "abc".into(),
            specifications: specs(json!({"ram": 16})),
            ..Default::default()
        };
        assert_eq!(build_component_name(&form, NamingLookup::new(&cats, &[])), "16GB RAM");
    }

    #[test]
    fn test_deterministic() {
        let cats = categories();
        let subs = subcategories();
        let form = ComponentForm {
            category_id: "4".into(),
            brand: "LG".into(),
            specifications: specs(json!({"screen_size": 27})),
            ..Default::default()
        };
        let lookup = NamingLookup::new(&cats, &subs);
        let first = build_component_name(&form, lookup);
        let _ = build_component_name(&ComponentForm::default(), lookup);
        assert_eq!(build_component_name(&form, lookup), first);
        assert_eq!(first, "Monitor LG (27\")");
    }
}

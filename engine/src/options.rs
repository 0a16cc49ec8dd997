//! Display options for the level and category pickers.

use crate::types::{
    FacetSummary, FilterOption, FilterOptions, FilterSelection, GlobalFacets, Selection,
};

const DEFAULT_LEVEL_COLOR: &str = "#4299e1";
const DEFAULT_CATEGORY_ICON: &str = "📚";

const LEVEL_NAMES: &[(&str, &str)] = &[
    ("A1", "Beginner (A1)"),
    ("A2", "Elementary (A2)"),
    ("B1", "Intermediate (B1)"),
    ("B2", "Upper Intermediate (B2)"),
    ("C1", "Advanced (C1)"),
    ("C2", "Proficient (C2)"),
];

const LEVEL_COLORS: &[(&str, &str)] = &[
    ("A1", "#48bb78"),
    ("A2", "#38a169"),
    ("B1", "#d69e2e"),
    ("B2", "#ed8936"),
    ("C1", "#e53e3e"),
    ("C2", "#9b2c2c"),
];

const CATEGORY_ICONS: &[(&str, &str)] = &[
    ("connectors", "🔗"),
    ("places", "📍"),
    ("abstract", "💭"),
    ("daily life", "🏠"),
    ("people", "👥"),
    ("communication", "💬"),
    ("emotions", "😊"),
    ("time", "⏰"),
    ("transport", "🚗"),
    ("art", "🎨"),
    ("animals", "🐾"),
    ("food", "🍎"),
    ("clothes & accessories", "👕"),
    ("body", "💪"),
    ("travel", "✈️"),
    ("education", "🎓"),
    ("sport", "⚽"),
    ("money", "💰"),
    ("household", "🏡"),
    ("colors", "🎨"),
    ("relationships", "❤️"),
    ("work", "💼"),
    ("technology", "💻"),
    ("weather", "☀️"),
    ("drinks", "🥤"),
    ("numbers", "🔢"),
    ("health", "🏥"),
    ("nature", "🌿"),
    ("geography", "🗺️"),
    ("plants", "🌱"),
    ("environment", "🌍"),
    ("astronomy", "✨"),
    ("science", "🔬"),
];

fn lookup<'a>(table: &'a [(&str, &'a str)], key: &str) -> Option<&'a str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Human-readable level name; unknown levels show as-is
pub fn level_display_name(level: &str) -> String {
    lookup(LEVEL_NAMES, level).unwrap_or(level).to_string()
}

pub fn level_color(level: &str) -> &'static str {
    lookup(LEVEL_COLORS, level).unwrap_or(DEFAULT_LEVEL_COLOR)
}

pub fn category_icon(category: &str) -> &'static str {
    lookup(CATEGORY_ICONS, category).unwrap_or(DEFAULT_CATEGORY_ICON)
}

fn all_levels_option() -> FilterOption {
    FilterOption {
        id: Selection::ALL.to_string(),
        name: "All Levels".to_string(),
        icon: None,
        color: Some(DEFAULT_LEVEL_COLOR.to_string()),
    }
}

fn all_categories_option() -> FilterOption {
    FilterOption {
        id: Selection::ALL.to_string(),
        name: "All Categories".to_string(),
        icon: Some(DEFAULT_CATEGORY_ICON.to_string()),
        color: None,
    }
}

fn level_option(level: &str) -> FilterOption {
    FilterOption {
        id: level.to_string(),
        name: level_display_name(level),
        icon: None,
        color: Some(level_color(level).to_string()),
    }
}

fn category_option(category: &str) -> FilterOption {
    FilterOption {
        id: category.to_string(),
        name: category.to_string(),
        icon: Some(category_icon(category).to_string()),
        color: None,
    }
}

/// Level picker entries: "all" first, then each level in canonical order
pub fn level_options(levels: &[String]) -> Vec<FilterOption> {
    std::iter::once(all_levels_option())
        .chain(levels.iter().map(|level| level_option(level)))
        .collect()
}

/// Category picker entries: "all" first, then each category
pub fn category_options(categories: &[String]) -> Vec<FilterOption> {
    std::iter::once(all_categories_option())
        .chain(categories.iter().map(|category| category_option(category)))
        .collect()
}

/// Full option lists for the repository-wide facets
pub fn global_options(global: &GlobalFacets) -> FilterOptions {
    FilterOptions {
        levels: level_options(&global.levels),
        categories: category_options(&global.categories),
    }
}

/// Narrow the global option lists to "all" plus the values a language
/// pair actually has
pub fn pair_options(global: &GlobalFacets, pair: &FacetSummary) -> FilterOptions {
    let keep = |option: &FilterOption, present: &[String]| {
        option.id == Selection::ALL || present.contains(&option.id)
    };
    let FilterOptions { levels, categories } = global_options(global);

    FilterOptions {
        levels: levels
            .into_iter()
            .filter(|option| keep(option, pair.levels.as_slice()))
            .collect(),
        categories: categories
            .into_iter()
            .filter(|option| keep(option, pair.categories.as_slice()))
            .collect(),
    }
}

fn reconcile_axis(selection: Selection, present: &[String]) -> Selection {
    match selection {
        Selection::Only(value) if !present.contains(&value) => Selection::All,
        other => other,
    }
}

/// Reset any constraint the pair cannot satisfy back to "all"
pub fn reconcile(selection: FilterSelection, pair: &FacetSummary) -> FilterSelection {
    FilterSelection {
        level: reconcile_axis(selection.level, &pair.levels),
        category: reconcile_axis(selection.category, &pair.categories),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn global() -> GlobalFacets {
        GlobalFacets {
            categories: strings(&["animals", "food", "mystery"]),
            levels: strings(&["A1", "B2", "X1"]),
        }
    }

    fn pair() -> FacetSummary {
        FacetSummary {
            total_concepts: 10,
            total_with_translations: 4,
            levels: strings(&["A1"]),
            categories: strings(&["food"]),
        }
    }

    #[test]
    fn test_level_display() {
        assert_eq!(level_display_name("B2"), "Upper Intermediate (B2)");
        assert_eq!(level_display_name("X1"), "X1");
        assert_eq!(level_color("A1"), "#48bb78");
        assert_eq!(level_color("X1"), "#4299e1");
    }

    #[test]
    fn test_category_icon() {
        assert_eq!(category_icon("food"), "🍎");
        assert_eq!(category_icon("mystery"), "📚");
    }

    #[test]
    fn test_options_start_with_all() {
        let options = global_options(&global());
        assert_eq!(options.levels.len(), 4);
        assert_eq!(options.levels[0].id, "all");
        assert_eq!(options.levels[0].name, "All Levels");
        assert_eq!(options.levels[2].name, "Upper Intermediate (B2)");
        assert_eq!(options.categories[0].name, "All Categories");
        assert_eq!(options.categories[1].icon.as_deref(), Some("🐾"));
    }

    #[test]
    fn test_pair_options() {
        let options = pair_options(&global(), &pair());
        let levels: Vec<&str> = options.levels.iter().map(|o| o.id.as_str()).collect();
        let categories: Vec<&str> = options.categories.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(levels, vec!["all", "A1"]);
        assert_eq!(categories, vec!["all", "food"]);
    }

    #[test]
    fn test_reconcile() {
        let selection = FilterSelection {
            level: "B2".into(),
            category: "food".into(),
        };
        let reconciled = reconcile(selection, &pair());
        assert_eq!(reconciled.level, Selection::All);
        assert_eq!(reconciled.category, Selection::Only("food".to_string()));

        let untouched = reconcile(FilterSelection::default(), &pair());
        assert_eq!(untouched, FilterSelection::default());
    }
}

//! Reference map registry: which document map a query field points into.

/// Suffix marking a field as a query field.
pub const QUERY_SUFFIX: &str = "Query";

/// `(query field, map name)` pairs. The order is the fallback scan order.
pub const REFERENCE_MAPS: &[(&str, &str)] = &[
    ("dataQuery", "document_data"),
    ("designQuery", "design_data"),
    ("behaviorsQuery", "behaviors_data"),
    ("connectionQuery", "connections_data"),
    ("themeQuery", "theme_data"),
    ("layoutQuery", "layout_data"),
    ("componentPropertiesQuery", "component_properties"),
    ("mobileHintsQuery", "mobile_hints"),
    ("atomicScopesQuery", "atomicScopes"),
    ("classnamesQuery", "classnames"),
    ("editorsettingsQuery", "editorsettings"),
    ("fixerVersionsQuery", "fixerVersions"),
    ("namingQuery", "naming"),
    ("reactionsQuery", "reactions"),
    ("slotsQuery", "slots"),
    ("sourceQuery", "source"),
    ("statesQuery", "states"),
    ("themeConfigQuery", "themeConfig"),
    ("transformationsQuery", "transformations_data"),
    ("transitionsQuery", "transitions_data"),
    ("triggersQuery", "triggers"),
    ("variablesQuery", "variables"),
    ("variantsQuery", "variants_data"),
];

/// Map name registered for a query field.
pub fn map_for(field: &str) -> Option<&'static str> {
    REFERENCE_MAPS
        .iter()
        .find(|(query, _)| *query == field)
        .map(|(_, map)| *map)
}

/// Map names in scan order.
pub fn map_names() -> impl Iterator<Item = &'static str> {
    REFERENCE_MAPS.iter().map(|(_, map)| *map)
}

pub fn is_query_field(field: &str) -> bool {
    field.ends_with(QUERY_SUFFIX)
}

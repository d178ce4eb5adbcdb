use crate::recipe::MapperTable;
use crate::scan::parse_properties;
use regex::Regex;
use std::sync::LazyLock;

// Mapper bodies never nest, so the first closing brace ends the region.
static ITEM_MAPPER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bitemMapper\s+([^\s{}]+)\s*\{([^}]*)\}").expect("valid regex")
});

/// Captures every `itemMapper <name> { key = value }` region and cuts it out of `body`.
///
/// Returns the mapper table (empty when the recipe declares none) and the remaining text.
pub fn extract_item_mappers(body: &str) -> (MapperTable, String) {
    let mut table = MapperTable::new();

    for caps in ITEM_MAPPER.captures_iter(body) {
        let entries = parse_properties(&caps[2]).into_iter().collect();
        tracing::trace!(mapper = &caps[1], "captured item mapper");
        table.insert(caps[1].to_string(), entries);
    }

    if table.is_empty() {
        return (table, body.to_string());
    }
    let remaining = ITEM_MAPPER.replace_all(body, "").into_owned();
    (table, remaining)
}

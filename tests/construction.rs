//! Tests for construction recipes built from module/entity/component nesting.
mod common;
use common::*;
use kumitate::prelude::*;

#[test]
fn test_wall_entity_yields_construction_record() {
    let recipes = parse_script(WALL_SCRIPT);
    assert_eq!(recipes.len(), 1);

    let wall = &recipes[0];
    assert_eq!(wall.name, "E");
    assert!(wall.construction);

    let items: Vec<_> = wall.item_inputs().collect();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].index, 0);
    assert_eq!(items[0].items, vec!["Base.Plank", "Base.Nail"]);

    assert_eq!(
        wall.outputs,
        vec![Entry::Skin(SkinEntry {
            display_name: Some("Wall".to_string()),
            icon: Some("wall_icon".to_string()),
        })]
    );
}

#[test]
fn test_workbench_sprites_health_and_skin() {
    let report = ScriptParser::default().parse_report(WORKBENCH_SCRIPT);
    assert!(report.issues.is_empty(), "unexpected issues: {:?}", report.issues);

    // Decoration has no CraftRecipe and the skin entities are labels only.
    let names: Vec<_> = report.recipes.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Workbench"]);

    let bench = report.get("Workbench").unwrap();
    assert!(bench.construction);
    assert_eq!(bench.category.as_deref(), Some("Carpentry"));
    assert_eq!(bench.skill_base_health, Some(250.0));
    assert_eq!(bench.property("time").and_then(PropertyValue::as_scalar), Some("500"));

    let faces = bench.sprite_outputs.as_ref().unwrap();
    assert_eq!(faces["S"], vec!["furniture_01_0", "furniture_01_1"]);
    assert_eq!(faces["E"], vec!["furniture_01_2", "furniture_01_3"]);

    let hammer = bench.item_inputs().nth(1).unwrap();
    assert!(hammer.tags.contains("base:hammer"));
    assert_eq!(hammer.mode.as_deref(), Some("Keep"));

    let skin = bench.outputs.last().and_then(Entry::as_skin).unwrap();
    assert_eq!(skin.display_name.as_deref(), Some("Workbench"));
    assert_eq!(skin.icon.as_deref(), Some("Item_Workbench"));
}

#[test]
fn test_unknown_style_adds_no_skin_output() {
    let script = "module M { xuiSkin S { entity Known { DisplayName = K } } \
                  entity Shed { component UiConfig { entityStyle = Missing } \
                  component CraftRecipe { inputs { item 1 [Base.Plank] } outputs { } } } }";
    let recipes = parse_script(script);
    assert_eq!(recipes.len(), 1);
    assert!(recipes[0].outputs.is_empty());
    assert!(recipes[0].sprite_outputs.is_none());
    assert!(recipes[0].skill_base_health.is_none());
}

#[test]
fn test_unbalanced_module_is_dropped() {
    let script = "module Broken { entity E { component CraftRecipe { inputs { } outputs { } } }";
    let report = ScriptParser::default().parse_report(script);
    assert!(report.recipes.is_empty());
    assert!(matches!(
        &report.issues[..],
        [ParseIssue::MalformedBlock { kind, name }] if kind == "module" && name == "Broken"
    ));
}

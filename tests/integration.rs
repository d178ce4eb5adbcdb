//! Integration tests for Kumitate
//!
//! End-to-end tests over whole scripts, documents, configuration and discovery.
//!
mod common;
use common::*;
use kumitate::prelude::*;
use std::fs;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_well_formed_recipe_yields_one_record() {
        let recipes = parse_script("craftRecipe X { inputs{ item 1 [Log] } outputs{ item 2 [Plank] } }");
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "X");
        assert_eq!(recipes[0].inputs.len(), 1);
        assert_eq!(recipes[0].outputs.len(), 1);
    }

    #[test]
    fn test_kitchen_script() {
        let report = ScriptParser::default().parse_report(KITCHEN_SCRIPT);
        assert!(report.issues.is_empty(), "unexpected issues: {:?}", report.issues);
        assert_eq!(report.recipes.len(), 2);

        let soup = report.get("MakeSoup").unwrap();
        assert_eq!(soup.category.as_deref(), Some("Cooking"));
        assert_eq!(
            soup.property("Tags").and_then(PropertyValue::as_list),
            Some(&["AnySurfaceCraft".to_string(), "Cooking".to_string()][..])
        );
        assert_eq!(
            soup.property("SkillRequired").and_then(PropertyValue::as_scalar),
            Some("Cooking:2")
        );

        let mappers = soup.item_mappers.as_ref().unwrap();
        assert_eq!(mappers["SoupMapper"]["Base.Saucepan"], "Base.SaucepanSoup");

        assert_eq!(soup.inputs.len(), 4);
        let pot = soup.inputs[0].as_item().unwrap();
        assert_eq!(pot.mapper.as_deref(), Some("SoupMapper"));
        assert_eq!(
            pot.fluid_modifier.as_ref().unwrap().fluid_type,
            vec!["Water", "TaintedWater"]
        );

        let veg = soup.inputs[1].as_item().unwrap();
        assert!(veg.items.is_empty());
        assert_eq!(veg.mode.as_deref(), Some("Destroy"));
        assert!(veg.flags.contains("itemcount"));
        assert!(veg.flags.contains("AllowRottenItem"));

        let any = soup.inputs[2].as_item().unwrap();
        assert_eq!(any.items, vec!["Any fluid container"]);

        let energy = soup.inputs[3].as_energy().unwrap();
        assert_eq!(energy.energy_type, "Electricity");
        assert_eq!(energy.amount, 5.0);

        let out = soup.outputs[0].as_item().unwrap();
        assert_eq!(out.mapper.as_deref(), Some("SoupMapper"));

        let bottle = report.get("FillBottle").unwrap();
        assert!(bottle.item_mappers.is_none());
        assert_eq!(bottle.inputs.len(), 1);
        assert_eq!(bottle.outputs.len(), 2);
        let power = bottle.outputs[0].as_energy().unwrap();
        assert_eq!(power.modifiers.as_deref(), Some("slow start"));
        let filled = bottle.outputs[1].as_item().unwrap();
        assert_eq!(filled.fluid_modifier.as_ref().unwrap().amount, 0.6);
    }

    #[test]
    fn test_every_item_id_is_qualified() {
        let recipes = parse_script(KITCHEN_SCRIPT);
        let ids = recipes
            .iter()
            .flat_map(|r| r.item_inputs().chain(r.item_outputs()))
            .filter(|item| item.fluid_modifier.is_none())
            .flat_map(|item| item.items.iter());
        for id in ids {
            assert!(id.contains('.'), "unqualified id {id}");
        }
    }

    #[test]
    fn test_duplicate_names_last_wins_in_first_position() {
        let script = "\
craftRecipe A { time = 1 }
craftRecipe B { time = 2 }
craftRecipe A { time = 3 }
";
        let recipes = parse_script(script);
        let names: Vec<_> = recipes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(recipes[0].property("time").and_then(PropertyValue::as_scalar), Some("3"));
    }

    #[test]
    fn test_multiple_sources_and_mixed_content() {
        let parser = ScriptParser::default();
        let report = parser.parse_sources([KITCHEN_SCRIPT, WALL_SCRIPT]);
        let names: Vec<_> = report.recipes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["MakeSoup", "FillBottle", "E"]);
    }

    #[test]
    fn test_unterminated_comment_is_reported() {
        let report = ScriptParser::default()
            .parse_report("craftRecipe Kept { time = 1 }\n/* never closed\ncraftRecipe Lost { }");
        let names: Vec<_> = report.recipes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Kept"]);
        assert!(
            report
                .issues
                .iter()
                .any(|i| matches!(i, ParseIssue::UnterminatedComment { .. }))
        );
    }

    #[test]
    fn test_builder_overrides() {
        let parser = ScriptParser::builder()
            .with_default_module("Farming")
            .with_wildcard_fluid_label("Any container")
            .build();
        let recipes = parser.parse("craftRecipe W { inputs { item 1 [*]\n-fluid 1 Water }\n item 1 [Hoe] }");
        let item = recipes[0].item_inputs().next().unwrap();
        assert_eq!(item.items, vec!["Any container"]);
        assert_eq!(parser.config().default_module, "Farming");
    }

    #[test]
    fn test_document_shape() {
        let document = ScriptParser::default()
            .parse_report(KITCHEN_SCRIPT)
            .into_document();
        let value: serde_json::Value = serde_json::from_str(&document.to_json().unwrap()).unwrap();

        let soup = &value[0];
        assert_eq!(soup["name"], "MakeSoup");
        assert_eq!(soup["construction"], false);
        assert_eq!(soup["inputs"][0]["kind"], "item");
        assert_eq!(soup["inputs"][0]["fluidModifier"]["fluidType"][0], "Water");
        assert_eq!(soup["inputs"][3]["kind"], "energy");
        assert_eq!(soup["inputs"][3]["type"], "Electricity");
        assert!(soup["itemMappers"].is_object());

        let bottle = &value[1];
        assert!(bottle.get("itemMappers").is_none());
        assert!(bottle.get("category").is_none());

        let restored = RecipeDocument::from_json(&document.to_json_pretty().unwrap()).unwrap();
        assert_eq!(restored, document);
    }

    #[test]
    fn test_config_from_json_with_defaults() {
        let config = KumitateConfig::from_json(r#"{ "parser": { "default_module": "Farming" } }"#)
            .expect("Failed to parse config");
        assert_eq!(config.parser.default_module, "Farming");
        assert_eq!(config.parser.wildcard_fluid_label, "Any fluid container");
        assert_eq!(config.sources, SourceFilter::default());

        assert!(KumitateConfig::from_json("{ not json").is_err());
        assert!(matches!(
            KumitateConfig::from_file("/definitely/not/here.json"),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_source_filter_rules() {
        let filter = SourceFilter::default();
        assert!(filter.matches("recipes_cooking.txt"));
        assert!(filter.matches("Entity_Furniture.TXT"));
        assert!(filter.matches("craftrecipe_metal.txt"));
        assert!(!filter.matches("recipes_test.txt"));
        assert!(!filter.matches("entity_dbg.txt"));
        assert!(!filter.matches("items_food.txt"));
        assert!(!filter.matches("recipes.lua"));
    }

    #[test]
    fn test_discover_and_parse_directory() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let nested = dir.path().join("scripts").join("nested");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("scripts").join("recipes_kitchen.txt"), KITCHEN_SCRIPT).unwrap();
        fs::write(nested.join("entity_wall.txt"), WALL_SCRIPT).unwrap();
        fs::write(nested.join("recipes_test.txt"), "craftRecipe Skip { }").unwrap();
        fs::write(nested.join("notes.md"), "craftRecipe Skip { }").unwrap();

        let paths = discover_sources(dir.path(), &SourceFilter::default())
            .expect("Failed to discover sources");
        assert_eq!(paths.len(), 2);

        let sources = load_sources(&paths).expect("Failed to load sources");
        let report =
            ScriptParser::default().parse_sources(sources.iter().map(|s| s.text.as_str()));
        assert!(report.get("MakeSoup").is_some());
        assert!(report.get("E").is_some());
        assert!(report.get("Skip").is_none());
    }

    #[test]
    fn test_missing_source_is_fatal() {
        let result = load_source(Path::new("/definitely/not/here/recipes_x.txt"));
        assert!(matches!(result, Err(SourceError::Read { .. })));
    }
}

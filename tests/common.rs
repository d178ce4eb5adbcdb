//! Common test fixtures: script snippets in the recipe language.

/// A module with two crafting recipes exercising mappers, fluids, energy and properties.
#[allow(dead_code)]
pub const KITCHEN_SCRIPT: &str = r#"
module Base
{
    /* Kitchen recipes
       /* nested note */
       still commented { with a stray brace
    */
    craftRecipe MakeSoup
    {
        timedAction = Making,
        time = 120,
        category = Cooking,
        Tags = AnySurfaceCraft;Cooking,
        SkillRequired = Cooking:2,
        itemMapper SoupMapper
        {
            Base.Pot = Base.PotOfSoup,
            Base.Saucepan = Base.SaucepanSoup,
        }
        inputs
        {
            item 1 [Base.Pot;Base.Saucepan] mapper:SoupMapper flags[Prop1;IsEmpty],
            -fluid 1.0 [Water;TaintedWater],
            item 2 tags[base:vegetable] mode:destroy flags[AllowRottenItem] itemcount,
            item 1 [*],
            -fluid 0.5 Broth,
            energy 5 Electricity,
        }
        outputs
        {
            item 1 mapper:SoupMapper,
        }
    }

    craftRecipe FillBottle
    {
        time = 20,
        inputs
        {
            item 1 [Base.WaterBottleEmpty],
            +fluid 0.6 Water,
        }
        outputs
        {
            energy 2.5 Mechanical slow start,
        }
    }
}
"#;

/// The construction example: one module with a skin and a buildable entity.
#[allow(dead_code)]
pub const WALL_SCRIPT: &str = "module M { xuiSkin S { entity E { DisplayName=Wall, Icon=wall_icon } } entity E { component CraftRecipe { inputs{item 0 [Base.Plank;Base.Nail]} outputs{} } component UiConfig { entityStyle=S } } }";

/// A fuller construction module with sprite faces and a named skin entity.
#[allow(dead_code)]
pub const WORKBENCH_SCRIPT: &str = r#"
module Base
{
    xuiSkin default
    {
        entity ES_Workbench
        {
            LuaWindowClass = ISEntityWindow,
            DisplayName = Workbench,
            Icon = Item_Workbench,
        }
        entity ES_Unused
        {
            DisplayName = Unused,
        }
    }

    entity Workbench
    {
        component UiConfig
        {
            xuiSkin = default,
            entityStyle = ES_Workbench,
            uiEnabled = false,
        }

        component SpriteConfig
        {
            skillBaseHealth = 250,

            face S
            {
                layer
                {
                    row = furniture_01_0 furniture_01_1,
                }
            }
            face E
            {
                layer
                {
                    row = furniture_01_2,
                    row = furniture_01_3,
                }
            }
        }

        component CraftRecipe
        {
            timedAction = BuildWorkbench,
            time = 500,
            category = Carpentry,
            inputs
            {
                item 4 [Base.Plank],
                item 1 tags[base:hammer] mode:keep flags[MayDegradeLight],
            }
            outputs
            {
            }
        }
    }

    entity Decoration
    {
        component UiConfig
        {
            entityStyle = ES_Workbench,
        }
    }
}
"#;

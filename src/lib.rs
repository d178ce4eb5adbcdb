//! # Kumitate - Recipe Script Parser
//!
//! **Kumitate** reads the crafting-script language used to describe crafting, fluid, energy
//! and construction recipes, and turns it into structured [`RecipeRecord`](recipe::RecipeRecord)s
//! ready for reporting. It performs no I/O while parsing and no validation against an item
//! catalog: text goes in, records come out.
//!
//! ## Core Workflow
//!
//! 1.  **Strip Comments**: Nested `/* ... */` comments are removed, keeping line structure intact.
//! 2.  **Extract Blocks**: `craftRecipe NAME { ... }` regions are located by brace counting.
//! 3.  **Classify Lines**: Lines inside `inputs` and `outputs` become item, fluid or energy entries.
//!     Fluid lines attach to the item before them; `+fluid` copies that item into the outputs.
//! 4.  **Assemble**: Item mappers, sections and leftover `key = value` properties form one record.
//! 5.  **Construction**: `module` / `xuiSkin` / `entity` / `component` nesting yields construction
//!     recipes, labelled from the skin and carrying sprite faces.
//!
//! ## Quick Start
//!
//! ```rust
//! use kumitate::prelude::*;
//!
//! let script = r#"
//! module Base {
//!     craftRecipe MakeTea
//!     {
//!         time = 40,
//!         category = Cooking,
//!         Tags = InHandCraft;Cooking,
//!         inputs
//!         {
//!             item 1 [Base.Kettle] mode:keep,
//!             -fluid 0.5 Water,
//!             item 1 [Teabag],
//!         }
//!         outputs
//!         {
//!             item 1 Base.MugTea,
//!         }
//!     }
//! }
//! "#;
//!
//! let parser = ScriptParser::builder().build();
//! let report = parser.parse_report(script);
//! let tea = report.get("MakeTea").expect("recipe is parsed");
//!
//! assert_eq!(tea.category.as_deref(), Some("Cooking"));
//! let kettle = tea.item_inputs().next().unwrap();
//! assert_eq!(kettle.mode.as_deref(), Some("Keep"));
//! assert_eq!(kettle.fluid_modifier.as_ref().unwrap().amount, 0.5);
//!
//! let json = report.into_document().to_json().unwrap();
//! assert!(json.contains("\"fluidModifier\""));
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod parser;
pub mod prelude;
pub mod recipe;
pub mod scan;

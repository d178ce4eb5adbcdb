//! Text-level primitives shared by every grammar: comment removal, brace matching and
//! property reading.

pub mod blocks;
pub mod comments;
pub mod properties;

pub use blocks::{
    BlockKind, NamedBlock, RecipeBlock, block_inner, extract_balanced, extract_recipe_blocks,
    find_blocks, remove_spans,
};
pub use comments::{Stripped, strip_comments, strip_comments_detailed};
pub use properties::{find_property, parse_properties};

//! Typed content blocks for Storyline.
//!
//! A story body is an array of block objects, each naming its type in a
//! `"component"` field. [`BlockMapper`] turns that array into [`Block`]
//! values; [`BlockRegistry`] maps each component to the presentation-layer
//! builder that renders it.
//!
//! ```no_run
//! use storyline_blocks::{BlockMapper, BlockRegistry, HeroBlock};
//! use storyline_types::DynamicValue;
//!
//! let mut registry: BlockRegistry<String> = BlockRegistry::new();
//! registry.register::<HeroBlock, _>("hero", |hero| hero.headline.clone());
//!
//! let body = DynamicValue::from_json_str(r#"[{"component":"hero","_uid":"1","layout":"full","headline":"Hi"}]"#).unwrap();
//! for block in BlockMapper::new().map_all(body.as_array().unwrap_or_default()) {
//!     let rendered = registry.renderer(block.component(), &block);
//! }
//! ```

mod block;
mod error;
mod mapper;
mod registry;

pub use block::{
    ArticlesBlock, BigTextBlock, Block, BlockVariant, HeroBlock, ResolveRelations, SectionBlock,
};
pub use error::{BlockError, Result};
pub use mapper::{BlockExt, BlockMapper};
pub use registry::BlockRegistry;

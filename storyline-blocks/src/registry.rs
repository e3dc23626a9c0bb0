use crate::block::{Block, BlockVariant};
use std::collections::HashMap;
use std::fmt;
use tracing::warn;

type Builder<V> = Box<dyn Fn(&Block) -> Option<V> + Send + Sync>;

/// Maps a block discriminator to the builder that renders it.
///
/// Built once at startup through `&mut self`, then shared read-only. The
/// builders are `Send + Sync`, so a finished registry can sit behind an `Arc`.
pub struct BlockRegistry<V> {
    builders: HashMap<String, Builder<V>>,
}

impl<V: 'static> BlockRegistry<V> {
    pub fn new() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    /// Registers a builder typed by block variant.
    ///
    /// If a block of another variant is later rendered under `component`,
    /// the builder is skipped and `None` is returned.
    pub fn register<T, F>(&mut self, component: impl Into<String>, builder: F)
    where
        T: BlockVariant + 'static,
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        let component = component.into();
        let expected = component.clone();
        self.register_fn(component, move |block: &Block| match T::narrow(block) {
            Some(typed) => Some(builder(typed)),
            None => {
                warn!(
                    component = %expected,
                    found = block.component(),
                    "Failed to cast block"
                );
                None
            }
        });
    }

    /// Registers a builder over the whole [`Block`] enum.
    ///
    /// Registering the same component twice replaces the earlier builder.
    pub fn register_fn<F>(&mut self, component: impl Into<String>, builder: F)
    where
        F: Fn(&Block) -> Option<V> + Send + Sync + 'static,
    {
        let component = component.into();
        if self
            .builders
            .insert(component.clone(), Box::new(builder))
            .is_some()
        {
            warn!(component = %component, "Replacing registered block renderer");
        }
    }
}

impl<V> BlockRegistry<V> {
    /// Renders `block` with the builder registered for `component`.
    pub fn renderer(&self, component: &str, block: &Block) -> Option<V> {
        let builder = self.builders.get(component)?;
        builder(block)
    }

    pub fn contains(&self, component: &str) -> bool {
        self.builders.contains_key(component)
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    /// Registered components in sorted order.
    pub fn components(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.builders.keys().map(String::as_str).collect();
        out.sort_unstable();
        out
    }
}

impl<V: 'static> Default for BlockRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for BlockRegistry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockRegistry")
            .field("components", &self.components())
            .finish()
    }
}

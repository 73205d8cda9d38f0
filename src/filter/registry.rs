use std::collections::BTreeMap;

use crate::config::settings::FilterSettings;
use crate::filter::VideoFilter;
use crate::filter::perspective::PerspectiveFilter;
use crate::foundation::error::{FxError, FxResult};
use crate::render::graphics::Graphics;

/// A filter type: its identity plus the per-type lifecycle callbacks.
pub struct FilterDescriptor<G: Graphics + ?Sized> {
    /// Stable identifier used in saved scenes.
    pub id: &'static str,
    pub display_name: &'static str,
    /// Register default values on a settings object.
    pub defaults: fn(&mut FilterSettings),
    /// Create an instance from settings that already carry the type's defaults.
    pub create: fn(&FilterSettings) -> FxResult<Box<dyn VideoFilter<G>>>,
}

impl<G: Graphics + ?Sized> std::fmt::Debug for FilterDescriptor<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterDescriptor")
            .field("id", &self.id)
            .field("display_name", &self.display_name)
            .finish_non_exhaustive()
    }
}

/// Filter types available to a host, passed explicitly at startup.
pub struct FilterRegistry<G: Graphics + ?Sized> {
    descriptors: BTreeMap<&'static str, FilterDescriptor<G>>,
}

impl<G: Graphics + ?Sized> Default for FilterRegistry<G> {
    fn default() -> Self {
        Self {
            descriptors: BTreeMap::new(),
        }
    }
}

impl<G: Graphics + ?Sized> FilterRegistry<G> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every filter type this crate provides.
    pub fn with_builtin() -> FxResult<Self> {
        let mut registry = Self::new();
        registry.register_builtin()?;
        Ok(registry)
    }

    pub fn register_builtin(&mut self) -> FxResult<()> {
        self.register(PerspectiveFilter::descriptor())
    }

    pub fn register(&mut self, descriptor: FilterDescriptor<G>) -> FxResult<()> {
        if self.descriptors.contains_key(descriptor.id) {
            return Err(FxError::validation(format!(
                "filter id \"{}\" is already registered",
                descriptor.id
            )));
        }
        tracing::info!(
            id = descriptor.id,
            version = env!("CARGO_PKG_VERSION"),
            "registered filter"
        );
        self.descriptors.insert(descriptor.id, descriptor);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&FilterDescriptor<G>> {
        self.descriptors.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.descriptors.keys().copied()
    }

    /// Settings for `id` carrying its defaults and no user values.
    pub fn default_settings(&self, id: &str) -> FxResult<FilterSettings> {
        let descriptor = self.lookup(id)?;
        let mut settings = FilterSettings::new();
        (descriptor.defaults)(&mut settings);
        Ok(settings)
    }

    /// Create an instance of `id` from user values layered over the type's defaults.
    pub fn create(&self, id: &str, user: &FilterSettings) -> FxResult<Box<dyn VideoFilter<G>>> {
        let descriptor = self.lookup(id)?;
        let mut settings = FilterSettings::new();
        (descriptor.defaults)(&mut settings);
        settings.apply(user);
        (descriptor.create)(&settings)
    }

    fn lookup(&self, id: &str) -> FxResult<&FilterDescriptor<G>> {
        self.descriptors
            .get(id)
            .ok_or_else(|| FxError::validation(format!("unknown filter id \"{id}\"")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filter/registry.rs"]
mod tests;

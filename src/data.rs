// Dynamic data providers
//
// Pluggable value-resolution strategies, tagged by type and scanned in
// registration order. A page consults its provider list during parameter
// translation before navigation.

use std::collections::HashMap;
use std::sync::Arc;

/// Type tag of the provider applied to whole strings before per-page data
/// substitution. See [`Page::param_translate`](crate::Page::param_translate).
pub const SYSTEM_DATA_TYPE: &str = "system";

/// A pluggable value-resolution strategy.
///
/// Providers are registered on a page as an ordered list and consumed
/// read-only. Lookups over the list are first-match-wins: registration
/// order is part of the contract, not an accident (see [`first_of_type`]).
pub trait DynamicData: Send + Sync {
    /// Type tag used to select providers from the list.
    fn data_type(&self) -> &str;

    /// Resolves `input` to its substituted form.
    ///
    /// Implementations that do not recognize `input` should return it
    /// unchanged.
    fn resolve(&self, input: &str) -> String;
}

/// Returns the first provider in `providers` whose type tag equals
/// `data_type`.
///
/// The scan stops at the first match; later providers with the same tag are
/// never consulted. Callers relying on a particular provider must therefore
/// control its position in the list.
pub fn first_of_type<'a>(
    providers: &'a [Arc<dyn DynamicData>],
    data_type: &str,
) -> Option<&'a Arc<dyn DynamicData>> {
    providers.iter().find(|p| p.data_type() == data_type)
}

/// A provider backed by a fixed map.
///
/// Resolves an input that exactly matches a stored key to its mapped value
/// and leaves everything else unchanged. Useful for small fixed vocabularies
/// and for tests.
#[derive(Debug, Clone)]
pub struct MapData {
    data_type: String,
    values: HashMap<String, String>,
}

impl MapData {
    /// Creates a provider with the given type tag and backing map.
    pub fn new(data_type: impl Into<String>, values: HashMap<String, String>) -> Self {
        Self {
            data_type: data_type.into(),
            values,
        }
    }
}

impl DynamicData for MapData {
    fn data_type(&self) -> &str {
        &self.data_type
    }

    fn resolve(&self, input: &str) -> String {
        self.values
            .get(input)
            .cloned()
            .unwrap_or_else(|| input.to_string())
    }
}

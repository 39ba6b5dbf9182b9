use crate::models::{VehicleCategory, VehicleModel};

/// Search criteria for browsing vehicle models.
///
/// `search` matches any part of the model name, ignoring case; an empty
/// search matches everything. `category: None` matches every category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelFilter {
    pub search: String,
    pub category: Option<VehicleCategory>,
}

impl ModelFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(
        mut self,
        search: impl Into<String>,
    ) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(
        mut self,
        category: VehicleCategory,
    ) -> Self {
        self.category = Some(category);
        self
    }

    pub fn matches(
        &self,
        model: &VehicleModel,
    ) -> bool {
        let matches_search = model
            .name
            .to_lowercase()
            .contains(&self.search.to_lowercase());
        let matches_category = self.category.is_none_or(|c| c == model.category);
        matches_search && matches_category
    }
}

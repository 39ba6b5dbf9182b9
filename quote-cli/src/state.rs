//! Quote session state for the estimator.
//!
//! A [`QuoteSession`] holds the user's choices and the quote for them. Every
//! mutation recomputes the quote from scratch, so [`QuoteSession::quote`]
//! always matches the current selection.

use quote_core::{
    LaminationMaterial, PricingEngine, PrintMaterial, QuoteOutcome, SelectionState, VehicleModel,
};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct QuoteSession {
    selection: SelectionState,
    engine: PricingEngine,
    quote: QuoteOutcome,
}

impl Default for QuoteSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteSession {
    pub fn new() -> Self {
        Self {
            selection: SelectionState::new(),
            engine: PricingEngine::new(),
            quote: QuoteOutcome::Incomplete,
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The quote for the current selection.
    pub fn quote(&self) -> &QuoteOutcome {
        &self.quote
    }

    /// Picks a model. Coverage and extras belong to a model, so both are
    /// cleared.
    pub fn select_model(
        &mut self,
        model: Option<VehicleModel>,
    ) {
        self.selection.model = model;
        self.selection.coverage_id = None;
        self.selection.extra_ids.clear();
        self.recompute();
    }

    pub fn select_coverage(
        &mut self,
        coverage_id: Option<String>,
    ) {
        self.selection.coverage_id = coverage_id;
        self.recompute();
    }

    /// Adds the extra if absent, removes it if present. Returns whether the
    /// extra is selected afterwards.
    pub fn toggle_extra(
        &mut self,
        extra_id: &str,
    ) -> bool {
        let selected = if self.selection.extra_ids.remove(extra_id) {
            false
        } else {
            self.selection.extra_ids.insert(extra_id.to_string());
            true
        };
        self.recompute();
        selected
    }

    /// Picks a print material. White print is switched off when the new
    /// material does not offer it.
    pub fn select_print_material(
        &mut self,
        material: Option<PrintMaterial>,
    ) {
        let allows = material.as_ref().is_some_and(|m| m.allows_white_print);
        if !allows {
            self.selection.white_print_enabled = false;
        }
        self.selection.print_material = material;
        self.recompute();
    }

    pub fn select_lamination_material(
        &mut self,
        material: Option<LaminationMaterial>,
    ) {
        self.selection.lamination_material = material;
        self.recompute();
    }

    /// Turns white print on or off. It stays off unless the current print
    /// material offers it; returns the resulting flag.
    pub fn set_white_print(
        &mut self,
        enabled: bool,
    ) -> bool {
        let allows = self
            .selection
            .print_material
            .as_ref()
            .is_some_and(|m| m.allows_white_print);
        self.selection.white_print_enabled = enabled && allows;
        self.recompute();
        self.selection.white_print_enabled
    }

    /// Resets the session to an empty selection.
    pub fn clear(&mut self) {
        self.selection.clear();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.quote = self.engine.quote(&self.selection);
        match self.quote.calculation() {
            Some(calc) => debug!(total = %calc.total, "quote recomputed"),
            None => debug!("quote incomplete"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quote_catalog_memory::seed;
    use rust_decimal_macros::dec;

    use super::*;

    fn model(id: &str) -> VehicleModel {
        seed::models().into_iter().find(|m| m.id == id).unwrap()
    }

    fn print(id: &str) -> PrintMaterial {
        seed::print_materials().into_iter().find(|m| m.id == id).unwrap()
    }

    fn lamination(id: &str) -> LaminationMaterial {
        seed::lamination_materials()
            .into_iter()
            .find(|m| m.id == id)
            .unwrap()
    }

    fn complete_session() -> QuoteSession {
        let mut session = QuoteSession::new();
        session.select_model(Some(model("1")));
        session.select_coverage(Some("full".to_string()));
        session.select_print_material(Some(print("1")));
        session.select_lamination_material(Some(lamination("1")));
        session
    }

    #[test]
    fn new_session_is_incomplete() {
        let session = QuoteSession::new();

        assert!(session.quote().is_incomplete());
        assert_eq!(session.selection(), &SelectionState::new());
    }

    #[test]
    fn quote_appears_once_selection_is_complete() {
        let session = complete_session();

        let calc = session.quote().calculation().expect("should be computed");
        // 3200; print 35% = 1120; lamination 18% = 576
        assert_eq!(calc.total, dec!(4896));
    }

    #[test]
    fn quote_follows_every_mutation() {
        let mut session = complete_session();

        assert!(session.toggle_extra("fenders"));
        assert_eq!(session.quote().calculation().unwrap().subtotal, dec!(3480));

        assert!(!session.toggle_extra("fenders"));
        assert_eq!(session.quote().calculation().unwrap().subtotal, dec!(3200));

        session.select_lamination_material(Some(lamination("3")));
        assert_eq!(
            session.quote().calculation().unwrap().lamination_cost,
            dec!(680)
        );
    }

    #[test]
    fn selecting_model_clears_coverage_and_extras() {
        let mut session = complete_session();
        session.toggle_extra("tank");

        session.select_model(Some(model("2")));

        assert_eq!(session.selection().coverage_id, None);
        assert!(session.selection().extra_ids.is_empty());
        assert!(session.quote().is_incomplete());
        assert!(session.selection().print_material.is_some());
    }

    #[test]
    fn coverage_from_another_model_is_incomplete() {
        let mut session = complete_session();

        session.select_coverage(Some("racing".to_string()));

        assert!(session.quote().is_incomplete());
    }

    #[test]
    fn white_print_needs_a_material_that_offers_it() {
        let mut session = complete_session();

        assert!(!session.set_white_print(true));
        assert_eq!(
            session.quote().calculation().unwrap().white_print_cost,
            dec!(0)
        );

        session.select_print_material(Some(print("2")));
        assert!(session.set_white_print(true));
        assert_eq!(
            session.quote().calculation().unwrap().white_print_cost,
            dec!(280)
        );
    }

    #[test]
    fn switching_to_material_without_white_print_clears_flag() {
        let mut session = complete_session();
        session.select_print_material(Some(print("3")));
        session.set_white_print(true);

        session.select_print_material(Some(print("4")));

        assert!(!session.selection().white_print_enabled);
        assert_eq!(
            session.quote().calculation().unwrap().white_print_cost,
            dec!(0)
        );
    }

    #[test]
    fn switching_between_white_print_materials_keeps_flag() {
        let mut session = complete_session();
        session.select_print_material(Some(print("2")));
        session.set_white_print(true);

        session.select_print_material(Some(print("5")));

        assert!(session.selection().white_print_enabled);
        assert_eq!(
            session.quote().calculation().unwrap().white_print_cost,
            dec!(380)
        );
    }

    #[test]
    fn deselecting_material_makes_quote_incomplete() {
        let mut session = complete_session();

        session.select_lamination_material(None);

        assert!(session.quote().is_incomplete());
    }

    #[test]
    fn clear_resets_everything() {
        let mut session = complete_session();

        session.clear();

        assert!(session.quote().is_incomplete());
        assert_eq!(session.selection(), &SelectionState::new());
    }
}

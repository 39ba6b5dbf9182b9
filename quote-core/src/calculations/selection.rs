//! Selection state for a quote in progress.
//!
//! A [`SelectionState`] holds whatever the user has picked so far. The
//! engine only prices a [`CompleteSelection`], which exists when every
//! required choice is present and the coverage id resolves on the model.

use std::collections::BTreeSet;

use crate::models::{CoverageType, LaminationMaterial, PrintMaterial, VehicleModel};

/// The user's current, possibly partial, choices.
///
/// Starts empty. `white_print_enabled` only has an effect when the chosen
/// print material offers white print.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub model: Option<VehicleModel>,
    pub coverage_id: Option<String>,
    pub extra_ids: BTreeSet<String>,
    pub print_material: Option<PrintMaterial>,
    pub lamination_material: Option<LaminationMaterial>,
    pub white_print_enabled: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the selection can be priced.
    pub fn is_complete(&self) -> bool {
        self.resolve().is_some()
    }

    /// Borrows the selection as a [`CompleteSelection`], or `None` while any
    /// required choice is missing or the coverage id is unknown to the model.
    pub fn resolve(&self) -> Option<CompleteSelection<'_>> {
        CompleteSelection::from_parts(
            self.model.as_ref(),
            self.coverage_id.as_deref(),
            &self.extra_ids,
            self.print_material.as_ref(),
            self.lamination_material.as_ref(),
            self.white_print_enabled,
        )
    }

    /// Resets every field to its empty value.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A selection with every required choice resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompleteSelection<'a> {
    pub model: &'a VehicleModel,
    pub coverage: &'a CoverageType,
    /// Requested extra ids; ids the model does not offer are ignored when priced.
    pub extra_ids: &'a BTreeSet<String>,
    pub print_material: &'a PrintMaterial,
    pub lamination_material: &'a LaminationMaterial,
    pub white_print_enabled: bool,
}

impl<'a> CompleteSelection<'a> {
    pub fn from_parts(
        model: Option<&'a VehicleModel>,
        coverage_id: Option<&str>,
        extra_ids: &'a BTreeSet<String>,
        print_material: Option<&'a PrintMaterial>,
        lamination_material: Option<&'a LaminationMaterial>,
        white_print_enabled: bool,
    ) -> Option<Self> {
        let model = model?;
        let coverage = model.coverage(coverage_id?)?;

        Some(Self {
            model,
            coverage,
            extra_ids,
            print_material: print_material?,
            lamination_material: lamination_material?,
            white_print_enabled,
        })
    }
}

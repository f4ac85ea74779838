//! Plain-text analysis summary block.
//!
//! Renders the structured [`NetworkAnalysis`] into the report panel shown
//! next to (or instead of) the network drawing: headline statistics,
//! abundance ranking, constant functions, and leak reactions. Everything
//! label-shaped goes through [`shorten`] so deep expressions stay readable.

use serde::{Deserialize, Serialize};

use lambnet_core::{shorten, NetworkAnalysis, NetworkModel, SpeciesId};

/// Section size limits and the display ceiling for the reporting layer.
///
/// The ceiling is explicit configuration rather than shared state; callers
/// decide whether a matrix fits via [`ReportConfig::matrix_fits`] and the
/// summary header notes when a network was too large for one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Largest species count for which the reaction matrix (and any full
    /// network drawing) is rendered.
    pub display_ceiling: usize,
    /// How many species the abundance ranking lists.
    pub top_species: usize,
    /// How many constant functions the summary lists.
    pub max_constants: usize,
    /// How many leak reactions the summary lists.
    pub max_leaks: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            display_ceiling: 150,
            top_species: 8,
            max_constants: 5,
            max_leaks: 5,
        }
    }
}

impl ReportConfig {
    /// Whether a network of `species_count` species is small enough for
    /// the matrix rendering.
    pub fn matrix_fits(&self, species_count: usize) -> bool {
        species_count <= self.display_ceiling
    }
}

/// Renders the analysis summary block as text.
pub fn render_summary(
    model: &NetworkModel,
    analysis: &NetworkAnalysis,
    config: &ReportConfig,
) -> String {
    let species_count = model.species_count();
    let total_population = model.total_population();

    let mut lines = Vec::new();
    if config.matrix_fits(species_count) {
        lines.push("═══ NETWORK ANALYSIS ═══".to_string());
    } else {
        lines.push("═══ NETWORK ANALYSIS (Summary Only) ═══".to_string());
        lines.push(String::new());
        lines.push(format!(
            "warning: {species_count} species exceeds the display ceiling ({})",
            config.display_ceiling
        ));
    }
    lines.push(String::new());
    lines.push(format!("Species Count: {species_count}"));
    lines.push(format!("Total Population: {total_population}"));
    lines.push(format!("Total Reactions: {}", analysis.total_reactions));
    lines.push(format!("Closed Reactions: {}", analysis.closed_reactions));
    lines.push(format!("Open (Leak) Reactions: {}", analysis.open_reactions));
    lines.push(format!(
        "Closure Ratio: {:.1}%",
        analysis.closure_ratio * 100.0
    ));

    lines.push(String::new());
    lines.push("═══ SPECIES (by abundance) ═══".to_string());
    lines.push(String::new());
    let ranked = model.species_by_abundance();
    for (position, &(id, count)) in ranked.iter().take(config.top_species).enumerate() {
        let share = if total_population > 0 {
            100.0 * count as f64 / total_population as f64
        } else {
            0.0
        };
        lines.push(format!("{}. {}", position + 1, species_label(model, id, 20)));
        lines.push(format!("   Count: {count} ({share:.1}%)"));
    }
    if ranked.len() > config.top_species {
        lines.push(format!(
            "   ... and {} more species",
            ranked.len() - config.top_species
        ));
    }

    if !analysis.universal_nodes.is_empty() {
        lines.push(String::new());
        lines.push("═══ CONSTANT FUNCTIONS ═══".to_string());
        lines.push("(Always produce same result)".to_string());
        lines.push(String::new());
        for (&id, &product) in analysis.universal_nodes.iter().take(config.max_constants) {
            lines.push(format!(
                "  {} → {}",
                species_label(model, id, 16),
                species_label(model, product, 12)
            ));
        }
    }

    if !analysis.leaks.is_empty() {
        lines.push(String::new());
        lines.push("═══ LEAK REACTIONS ═══".to_string());
        lines.push("(Produce external results)".to_string());
        lines.push(String::new());
        for &(source, target) in analysis.leaks.iter().take(config.max_leaks) {
            lines.push(format!(
                "  {}({}) → ?",
                species_label(model, source, 12),
                species_label(model, target, 12)
            ));
        }
        if analysis.leaks.len() > config.max_leaks {
            lines.push(format!(
                "  ... and {} more",
                analysis.leaks.len() - config.max_leaks
            ));
        }
    }

    lines.join("\n")
}

/// Shortened label for display, falling back to the raw id for species the
/// model does not know (cannot happen for analyzer output, but the
/// renderer stays total anyway).
fn species_label(model: &NetworkModel, id: SpeciesId, width: usize) -> String {
    match model.label(id) {
        Some(label) => shorten(label, width),
        None => id.to_string(),
    }
}

//! Text rendering of the dense reaction matrix.
//!
//! Cell `(i, j)` shows the product of applying species `i` to species `j`,
//! or `X` when the pair was never observed or its most recent observation
//! leaked out of the population. Duplicate `(source, target)` pairs
//! resolve last-occurrence-wins, matching the graph layer's edge collapse.
//!
//! The rendering addresses rows and columns by raw id, so it is only
//! defined for dense zero-based id spaces; anything else fails with
//! [`ReportError::SparseIds`]. This is a display artifact -- the analyzer
//! never consumes it.

use indexmap::IndexMap;

use lambnet_core::{NetworkModel, Outcome, SpeciesId};

use crate::error::ReportError;

/// Renders the N-by-N reaction matrix as text.
pub fn render_matrix(model: &NetworkModel) -> Result<String, ReportError> {
    let n = model.species_count();
    for id in model.species_ids() {
        // Ids are unique, so all-in-range means exactly 0..n.
        if id.0 as usize >= n {
            return Err(ReportError::SparseIds {
                species_count: n,
                id,
            });
        }
    }

    let mut cells: IndexMap<(SpeciesId, SpeciesId), Outcome> = IndexMap::new();
    for link in model.links() {
        cells.insert((link.source, link.target), link.result);
    }

    let mut lines = Vec::with_capacity(n + 7);
    lines.push("═══ REACTION MATRIX ═══".to_string());
    lines.push("(Row applies to Column → Result)".to_string());
    lines.push(String::new());

    let columns: Vec<String> = (0..n).map(|i| format!("{i:3}")).collect();
    let header = format!("     │ {}", columns.join(" "));
    let separator = "─".repeat(header.chars().count());
    lines.push(header);
    lines.push(separator);

    for i in 0..n {
        let mut row = format!("{i:3}  │ ");
        for j in 0..n {
            match cells.get(&(SpeciesId(i as u32), SpeciesId(j as u32))) {
                Some(Outcome::Product(product)) => row.push_str(&format!("{:3} ", product.0)),
                _ => row.push_str("  X "),
            }
        }
        lines.push(row.trim_end().to_string());
    }

    lines.push(String::new());
    lines.push("Legend: X = produces expression outside population".to_string());
    Ok(lines.join("\n"))
}

//! Two-pass mRNA/gene resolution over a flat feature table.

use std::collections::HashMap;

use super::feature::{FeatureKind, FeatureTable};

/// Fill each feature's owning mRNA and gene identifiers.
///
/// Pass 1 builds the mRNA -> gene map from mRNA rows (ID -> Parent).
/// Pass 2 assigns every row its mRNA (self ID for mRNA rows, Parent
/// otherwise) and its gene (self ID for gene rows, otherwise resolved
/// through the map). Features whose parent chain cannot be resolved keep
/// `None` rather than failing the whole parse.
pub fn link_hierarchy(table: &mut FeatureTable) {
    let mut mrna_to_gene: HashMap<String, Option<String>> = HashMap::new();
    for feature in &table.features {
        if feature.kind == FeatureKind::MRna {
            if let Some(id) = &feature.id {
                mrna_to_gene
                    .entry(id.clone())
                    .or_insert_with(|| feature.parent.clone());
            }
        }
    }

    for feature in &mut table.features {
        feature.mrna = if feature.kind == FeatureKind::MRna {
            feature.id.clone()
        } else {
            feature.parent.clone()
        };

        feature.gene = if feature.kind == FeatureKind::Gene {
            feature.id.clone()
        } else {
            feature
                .mrna
                .as_ref()
                .and_then(|mrna| mrna_to_gene.get(mrna).cloned().flatten())
        };
    }
}

//! Taxonomic classification of registry animals.

use serde::{Deserialize, Serialize};

/// Full taxonomic rank attached to an animal.
///
/// The `class_field` wire name is the server's workaround for `class`
/// being reserved in its ORM; it is preserved here verbatim. Any rank the
/// curator cannot classify is recorded as `"Other"` by convention.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomicRank {
    /// Taxonomic domain.
    pub domain: String,
    /// Kingdom.
    pub kingdom: String,
    /// Phylum.
    pub phylum: String,
    /// Class.
    pub class_field: String,
    /// Order.
    pub order: String,
    /// Family.
    pub family: String,
    /// Genus.
    pub genus: String,
    /// Species.
    pub species: String,
}

//! Independent queries evaluated in parallel.

use mf_core::{BuildingId, Flow};
use rayon::prelude::*;

use crate::network::TransitNetwork;

impl TransitNetwork {
    /// Answer each `(start, end)` query against its own copy of the current
    /// residual state.
    ///
    /// Queries do not see each other's flow and `self` is left untouched.
    /// Results come back in query order.
    pub fn max_passengers_isolated(&self, queries: &[(BuildingId, BuildingId)]) -> Vec<Flow> {
        queries
            .par_iter()
            .map(|&(start, end)| self.clone().max_passengers(start, end))
            .collect()
    }
}

/**
 * GenreRec
 * Copyright (C) 2026 The GenreRec developers
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

extern crate fnv;

use fnv::FnvHashMap;

/// Sparse term-weight vector over the shared genre vocabulary, keyed by term id.
pub type TermVector = FnvHashMap<u32, f64>;

/// Square pairwise similarity matrix with one row per catalog entry.
pub type SimilarityMatrix = Vec<Vec<f64>>;

pub fn new_term_vector() -> TermVector {
    FnvHashMap::with_capacity_and_hasher(0, Default::default())
}

pub fn new_similarity_matrix(num_entries: usize) -> SimilarityMatrix {
    vec![vec![0.0; num_entries]; num_entries]
}

extern crate csv;
extern crate fnv;
extern crate scoped_pool;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate serde_json;

use std::time::Instant;

use scoped_pool::Pool;

pub mod catalog;
pub mod io;
pub mod recommend;
pub mod tfidf;
pub mod types;
pub mod utils;


use catalog::Catalog;
use recommend::RecommendationResult;
use tfidf::VectorSpace;
use types::SimilarityMatrix;


/// Computes the full pairwise cosine similarity matrix for a vector space. This is
/// the only O(N²) piece of the engine and runs exactly once per process, before any
/// request is answered.
pub fn similarities(vector_space: &VectorSpace, pool_size: usize) -> SimilarityMatrix {

    let pool = Pool::new(pool_size);

    let num_entries = vector_space.num_entries();
    let vectors = vector_space.vectors();

    let mut matrix = types::new_similarity_matrix(num_entries);

    let build_start = Instant::now();

    // Every worker owns one row and fills its upper-triangle slice, so the rows
    // are computed with a fixed summation order no matter how they are scheduled.
    pool.scoped(|scope| {
        for (item, row) in matrix.iter_mut().enumerate() {

            let reference_to_vectors = vectors;

            scope.execute(move || {
                let vector = &reference_to_vectors[item];

                // Self-similarity of an all-zero vector is 0/0, pinned to 0.0 here.
                row[item] = if vector.is_empty() { 0.0 } else { 1.0 };

                for other_item in (item + 1)..num_entries {
                    row[other_item] = tfidf::cosine(vector, &reference_to_vectors[other_item]);
                }
            });
        }
    });

    // Mirror the upper triangle so that both halves are bit-identical.
    for item in 1..num_entries {
        for other_item in 0..item {
            let similarity = matrix[other_item][item];
            matrix[item][other_item] = similarity;
        }
    }

    let duration_for_build = utils::to_millis(build_start.elapsed());
    println!(
        "{} terms in the genre vocabulary, {}x{} similarity matrix computed in {}ms",
        vector_space.num_terms(), num_entries, num_entries, duration_for_build,
    );

    matrix
}

/// Immutable request context: the catalog, its genre vector space and the
/// precomputed similarity matrix. Built once at startup, shared read-only by
/// all requests afterwards; there is no way to mutate it after construction.
pub struct Engine {
    catalog: Catalog,
    vector_space: VectorSpace,
    similarities: SimilarityMatrix,
}

impl Engine {

    pub fn new(catalog: Catalog, pool_size: usize) -> Engine {
        let vector_space = VectorSpace::from_catalog(&catalog);
        let similarities = similarities(&vector_space, pool_size);

        Engine { catalog, vector_space, similarities }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn vector_space(&self) -> &VectorSpace {
        &self.vector_space
    }

    pub fn similarities(&self) -> &SimilarityMatrix {
        &self.similarities
    }

    pub fn recommend(&self, query: &str, num_items_to_recommend: usize) -> RecommendationResult {
        recommend::recommend(&self.catalog, &self.similarities, query, num_items_to_recommend)
    }
}

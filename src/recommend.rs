extern crate fnv;

use std::collections::BinaryHeap;
use std::cmp::Ordering;

use fnv::FnvHashSet;

use catalog::Catalog;
use types::SimilarityMatrix;

/// Result type used to find the top-n most similar items via a binary heap
#[derive(PartialEq, Debug)]
pub struct ScoredItem {
    pub item: u32,
    pub score: f64,
}

/// Ordering for our max-heap. Note that we must use a special implementation here as
/// there is no total order on floating point numbers; score ties fall back to the
/// catalog index so the ranking is deterministic.
fn cmp_reverse(scored_item_a: &ScoredItem, scored_item_b: &ScoredItem) -> Ordering {
    match scored_item_a.score.partial_cmp(&scored_item_b.score) {
        Some(Ordering::Less) => Ordering::Greater,
        Some(Ordering::Greater) => Ordering::Less,
        _ => scored_item_a.item.cmp(&scored_item_b.item),
    }
}

impl Eq for ScoredItem {}

impl Ord for ScoredItem {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_reverse(self, other)
    }
}

impl PartialOrd for ScoredItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(cmp_reverse(self, other))
    }
}

#[derive(Serialize, PartialEq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

#[derive(Serialize, Debug)]
pub struct RecommendedItem {
    pub title: String,
    pub genres: Vec<String>,
    pub similarity_score: f64,
}

#[derive(Serialize, Debug)]
pub struct RecommendationResult {
    pub status: Status,
    pub message: String,
    pub input_title: String,
    pub recommendations: Vec<RecommendedItem>,
}

/// Jaccard overlap of two genre-tag sets. An empty union means there is nothing
/// to compare, which counts as zero overlap rather than 0/0.
pub fn jaccard(genres_a: &FnvHashSet<&str>, genres_b: &FnvHashSet<&str>) -> f64 {

    let union = genres_a.union(genres_b).count();

    if union == 0 {
        return 0.0;
    }

    genres_a.intersection(genres_b).count() as f64 / union as f64
}

/// Scores every other catalog entry against `item` by averaging its precomputed
/// cosine similarity with the Jaccard overlap of the raw genre-tag sets, and
/// returns the `num_items_to_recommend` best entries in descending score order.
pub fn rank(
    catalog: &Catalog,
    similarities: &SimilarityMatrix,
    item: usize,
    num_items_to_recommend: usize,
) -> Vec<ScoredItem> {

    if num_items_to_recommend == 0 {
        return Vec::new();
    }

    let genres = genre_set(catalog, item);

    let mut heap = BinaryHeap::with_capacity(num_items_to_recommend);

    for other_item in 0..catalog.num_entries() {

        if other_item == item {
            continue;
        }

        let cosine_score = similarities[item][other_item];
        let jaccard_score = jaccard(&genres, &genre_set(catalog, other_item));

        let scored_item = ScoredItem {
            item: other_item as u32,
            score: (cosine_score + jaccard_score) / 2.0,
        };

        if heap.len() < num_items_to_recommend {
            heap.push(scored_item);
        } else {
            let mut top = heap.peek_mut().unwrap();
            if scored_item < *top {
                *top = scored_item;
            }
        }
    }

    heap.into_sorted_vec()
}

fn genre_set(catalog: &Catalog, item: usize) -> FnvHashSet<&str> {
    catalog.entry(item).genre_tags
        .iter()
        .map(|tag| tag.as_str())
        .collect()
}

/// Resolves a free-text query against the catalog and shapes the ranked entries
/// into the result structure consumed by the presentation layer. Resolution
/// failures are reported in the result, they never abort the process.
pub fn recommend(
    catalog: &Catalog,
    similarities: &SimilarityMatrix,
    query: &str,
    num_items_to_recommend: usize,
) -> RecommendationResult {

    let item = match catalog.resolve(query) {
        Some(item) => item,
        None => {
            return RecommendationResult {
                status: Status::Error,
                message: format!("No movie matching '{}' found in the catalog.", query),
                input_title: query.to_string(),
                recommendations: Vec::new(),
            };
        },
    };

    let ranked = rank(catalog, similarities, item, num_items_to_recommend);

    let recommendations: Vec<RecommendedItem> = ranked
        .iter()
        .map(|scored_item| {
            let entry = catalog.entry(scored_item.item as usize);

            RecommendedItem {
                title: entry.title.clone(),
                genres: entry.genre_tags.clone(),
                similarity_score: (scored_item.score * 1000.0).round() / 10.0,
            }
        })
        .collect();

    let input_title = catalog.entry(item).title.clone();

    RecommendationResult {
        status: Status::Success,
        message: format!(
            "Found {} movies similar to '{}'.",
            recommendations.len(),
            input_title
        ),
        input_title,
        recommendations,
    }
}

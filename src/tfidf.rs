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

use fnv::{FnvHashMap, FnvHashSet};

use catalog::Catalog;
use types;
use types::TermVector;

const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "an", "and", "any", "are", "as", "at",
    "be", "because", "been", "before", "being", "below", "between", "both", "but", "by",
    "can", "could", "did", "do", "does", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "he", "her", "here", "his", "how", "i", "if", "in",
    "into", "is", "it", "its", "just", "may", "might", "more", "most", "my", "no", "nor",
    "not", "of", "off", "on", "once", "only", "or", "other", "our", "out", "over", "own",
    "she", "should", "so", "some", "such", "than", "that", "the", "their", "them", "then",
    "there", "these", "they", "this", "those", "through", "to", "under", "until", "up",
    "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "why",
    "will", "with", "would", "you", "your",
];

/// Splits a genre-tag stream into lowercased terms. Compound tags like `Sci-Fi`
/// contribute one term per alphanumeric run; single characters and English stop
/// words are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.len() >= 2 && !STOP_WORDS.contains(token))
        .map(|token| token.to_string())
        .collect()
}

/// Vocabulary of genre terms plus one sparse tf-idf vector per catalog entry.
/// Term ids are assigned in first-seen catalog order, document frequencies are
/// counted over the full catalog.
pub struct VectorSpace {
    term_dict: FnvHashMap<String, u32>,
    vectors: Vec<TermVector>,
}

impl VectorSpace {

    pub fn num_terms(&self) -> usize {
        self.term_dict.len()
    }

    pub fn num_entries(&self) -> usize {
        self.vectors.len()
    }

    pub fn term_index(&self, term: &str) -> Option<u32> {
        self.term_dict.get(term).map(|term_id| *term_id)
    }

    pub fn vector(&self, index: usize) -> &TermVector {
        &self.vectors[index]
    }

    pub fn vectors(&self) -> &[TermVector] {
        &self.vectors
    }
}

impl VectorSpace {

    pub fn from_catalog(catalog: &Catalog) -> Self {

        let num_entries = catalog.num_entries();

        let mut term_index: u32 = 0;
        let mut term_dict: FnvHashMap<String, u32> =
            FnvHashMap::with_capacity_and_hasher(100, Default::default());

        let mut document_frequencies: Vec<u32> = Vec::new();
        let mut documents: Vec<Vec<u32>> = Vec::with_capacity(num_entries);

        // First pass: build the term dictionary and count, per term, the number
        // of entries it occurs in.
        for entry in catalog.entries() {

            let tokens = tokenize(&entry.genre_tags.join(" "));

            let mut term_ids: Vec<u32> = Vec::with_capacity(tokens.len());

            for token in tokens {
                if !term_dict.contains_key(&token) {
                    term_dict.insert(token.clone(), term_index);
                    document_frequencies.push(0);
                    term_index += 1;
                }
                term_ids.push(term_dict[&token]);
            }

            let distinct_terms: FnvHashSet<u32> = term_ids.iter().cloned().collect();
            for term_id in distinct_terms {
                document_frequencies[term_id as usize] += 1;
            }

            documents.push(term_ids);
        }

        // Second pass: weigh each term occurrence by its smoothed inverse
        // document frequency, so genres shared by many entries score lower
        // than rare ones.
        let mut vectors: Vec<TermVector> = Vec::with_capacity(num_entries);

        for term_ids in &documents {

            let mut term_counts: FnvHashMap<u32, u32> =
                FnvHashMap::with_capacity_and_hasher(term_ids.len(), Default::default());

            for term_id in term_ids {
                *term_counts.entry(*term_id).or_insert(0) += 1;
            }

            let mut vector = types::new_term_vector();

            for (term_id, count) in term_counts {
                let document_frequency = document_frequencies[term_id as usize];
                let inverse_document_frequency =
                    ((1.0 + num_entries as f64) / (1.0 + document_frequency as f64)).ln() + 1.0;

                vector.insert(term_id, count as f64 * inverse_document_frequency);
            }

            vectors.push(vector);
        }

        VectorSpace { term_dict, vectors }
    }
}

/// Cosine similarity of two sparse term vectors. A zero vector has no direction,
/// its similarity to anything is 0.0 rather than 0/0.
pub fn cosine(vector_a: &TermVector, vector_b: &TermVector) -> f64 {

    let mut dot_product = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for (term_id, weight_a) in vector_a.iter() {
        norm_a += weight_a * weight_a;
        if let Some(weight_b) = vector_b.get(term_id) {
            dot_product += weight_a * weight_b;
        }
    }

    for weight_b in vector_b.values() {
        norm_b += weight_b * weight_b;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a.sqrt() * norm_b.sqrt())
}


#[cfg(test)]
mod tests {

    use catalog::Catalog;
    use tfidf;
    use tfidf::VectorSpace;
    use types;

    fn close_enough_to(value: f64, expected: f64) -> bool {
        (value - expected).abs() < 0.000_001
    }

    #[test]
    fn tokenization_lowercases_and_splits_compound_tags() {
        assert_eq!(tfidf::tokenize("Sci-Fi Film-Noir"), vec!["sci", "fi", "film", "noir"]);
        assert_eq!(tfidf::tokenize("IMAX"), vec!["imax"]);
    }

    #[test]
    fn tokenization_drops_stop_words_and_single_characters() {
        assert_eq!(tfidf::tokenize("The Lord of the Rings"), vec!["lord", "rings"]);
        assert!(tfidf::tokenize("a I of").is_empty());
    }

    #[test]
    fn vocabulary_is_shared_across_entries() {
        let catalog = Catalog::from_records(vec![
            ("Toy Story (1995)".to_string(), "Animation|Comedy".to_string()),
            ("Heat (1995)".to_string(), "Action|Crime".to_string()),
        ]);

        let vector_space = VectorSpace::from_catalog(&catalog);

        assert_eq!(vector_space.num_terms(), 4);
        assert_eq!(vector_space.num_entries(), 2);
        assert!(vector_space.term_index("animation").is_some());
        assert!(vector_space.term_index("crime").is_some());
        assert!(vector_space.term_index("romance").is_none());
    }

    #[test]
    fn rare_genres_outweigh_common_ones() {
        let catalog = Catalog::from_records(vec![
            ("Grave of the Fireflies (1988)".to_string(), "Animation|War".to_string()),
            ("Toy Story (1995)".to_string(), "Animation|Comedy".to_string()),
            ("Akira (1988)".to_string(), "Animation|Action".to_string()),
        ]);

        let vector_space = VectorSpace::from_catalog(&catalog);

        let animation = vector_space.term_index("animation").unwrap();
        let war = vector_space.term_index("war").unwrap();

        let vector = vector_space.vector(0);
        assert!(vector[&war] > vector[&animation]);
    }

    #[test]
    fn entries_without_genres_have_empty_vectors() {
        let catalog = Catalog::from_records(vec![
            ("Toy Story (1995)".to_string(), "Animation|Comedy".to_string()),
            ("The Silent Era (1921)".to_string(), "".to_string()),
        ]);

        let vector_space = VectorSpace::from_catalog(&catalog);

        assert!(vector_space.vector(1).is_empty());
    }

    #[test]
    fn cosine_of_identical_vectors_is_one() {
        let mut vector = types::new_term_vector();
        vector.insert(0, 1.2877);
        vector.insert(1, 1.6931);

        assert!(close_enough_to(tfidf::cosine(&vector, &vector), 1.0));
    }

    #[test]
    fn cosine_of_disjoint_vectors_is_zero() {
        let mut vector_a = types::new_term_vector();
        vector_a.insert(0, 1.0);

        let mut vector_b = types::new_term_vector();
        vector_b.insert(1, 1.0);

        assert_eq!(tfidf::cosine(&vector_a, &vector_b), 0.0);
    }

    #[test]
    fn cosine_with_a_zero_vector_is_zero() {
        let mut vector_a = types::new_term_vector();
        vector_a.insert(0, 1.0);

        let empty = types::new_term_vector();

        assert_eq!(tfidf::cosine(&vector_a, &empty), 0.0);
        assert_eq!(tfidf::cosine(&empty, &empty), 0.0);
        assert!(!tfidf::cosine(&empty, &empty).is_nan());
    }
}

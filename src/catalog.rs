extern crate fnv;

use fnv::FnvHashMap;

pub struct CatalogEntry {
    pub index: usize,
    pub title: String,
    pub genre_tags: Vec<String>,
}

pub struct Catalog {
    entries: Vec<CatalogEntry>,
    title_dict: FnvHashMap<String, u32>,
}

impl Catalog {

    pub fn num_entries(&self) -> usize {
        self.entries.len()
    }

    pub fn entry(&self, index: usize) -> &CatalogEntry {
        &self.entries[index]
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Maps a free-text query to a catalog entry. Exact title matches (case-sensitive,
    /// including the release year suffix) are looked up directly; otherwise the first
    /// entry in catalog order whose lowercased title contains the lowercased query wins.
    pub fn resolve(&self, query: &str) -> Option<usize> {

        if let Some(index) = self.title_dict.get(query) {
            return Some(*index as usize);
        }

        let needle = query.to_lowercase();

        self.entries
            .iter()
            .position(|entry| entry.title.to_lowercase().contains(&needle))
    }
}

impl Catalog {

    pub fn from_records<I>(records: I) -> Self
        where I: IntoIterator<Item = (String, String)> {

        let mut entries: Vec<CatalogEntry> = Vec::new();

        let mut title_dict: FnvHashMap<String, u32> =
            FnvHashMap::with_capacity_and_hasher(100, Default::default());

        for (title, genres) in records {

            let index = entries.len();

            // Later duplicates of a title are unreachable by exact lookup.
            if !title_dict.contains_key(&title) {
                title_dict.insert(title.clone(), index as u32);
            }

            entries.push(CatalogEntry {
                index,
                title,
                genre_tags: parse_genre_tags(&genres),
            });
        }

        Catalog { entries, title_dict }
    }
}

pub fn parse_genre_tags(field: &str) -> Vec<String> {
    field.split('|')
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .map(|tag| tag.to_string())
        .collect()
}

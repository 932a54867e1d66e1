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

extern crate csv;

use std;
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::io::stdout;
use std::path::Path;

use catalog::Catalog;
use recommend::RecommendationResult;

/// Failure to load the movie catalog. Fatal at startup, no requests are served
/// from a partially loaded catalog.
#[derive(Debug)]
pub enum DatasetError {
    Io(io::Error),
    Csv(csv::Error),
    MissingTitleColumn,
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DatasetError::Io(ref error) =>
                write!(f, "Unable to read the movie catalog: {}", error),
            DatasetError::Csv(ref error) =>
                write!(f, "Malformed movie catalog: {}", error),
            DatasetError::MissingTitleColumn =>
                write!(f, "The movie catalog has no 'title' column"),
        }
    }
}

impl Error for DatasetError {}

impl From<io::Error> for DatasetError {
    fn from(error: io::Error) -> Self {
        DatasetError::Io(error)
    }
}

impl From<csv::Error> for DatasetError {
    fn from(error: csv::Error) -> Self {
        DatasetError::Csv(error)
    }
}

/// Reads a CSV movie file. We expect a header line; the column positions of the
/// required 'title' column and the optional pipe-delimited 'genres' column are
/// discovered from it.
pub fn csv_reader(file: &str) -> Result<csv::Reader<File>, DatasetError> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(Path::new(file))?;

    Ok(reader)
}

pub fn catalog_from_csv(file: &str) -> Result<Catalog, DatasetError> {
    let mut reader = csv_reader(file)?;
    catalog_from_reader(&mut reader)
}

pub fn catalog_from_reader<R>(reader: &mut csv::Reader<R>) -> Result<Catalog, DatasetError>
    where R: std::io::Read {

    let headers = reader.headers()?.clone();

    let title_column = match headers.iter().position(|column| column == "title") {
        Some(position) => position,
        None => return Err(DatasetError::MissingTitleColumn),
    };
    let genres_column = headers.iter().position(|column| column == "genres");

    let mut records: Vec<(String, String)> = Vec::new();

    for record in reader.records() {
        let record = record?;

        let title = record.get(title_column).unwrap_or("").to_string();

        // Entries without a genres column or with an empty field keep an empty
        // tag list instead of failing.
        let genres = genres_column
            .and_then(|column| record.get(column))
            .unwrap_or("")
            .to_string();

        records.push((title, genres));
    }

    Ok(Catalog::from_records(records))
}

/// Output a recommendation result in JSON format. If an `output_path` is supplied,
/// we write to a file at the specified path, otherwise, we output to stdout.
pub fn write_result(
    result: &RecommendationResult,
    output_path: Option<String>,
) -> io::Result<()> {

    let mut out: Box<dyn Write> = match output_path {
        Some(path) => Box::new(File::create(&Path::new(&path))?),
        _ => Box::new(stdout()),
    };

    let result_as_json = json!(result);

    write!(out, "{}\n", result_as_json.to_string())?;

    Ok(())
}


#[cfg(test)]
mod tests {

    use csv;

    use io;
    use io::DatasetError;
    use recommend::{RecommendationResult, RecommendedItem, Status};

    fn reader_for(data: &str) -> csv::Reader<&[u8]> {
        csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(data.as_bytes())
    }

    #[test]
    fn catalog_columns_are_discovered_from_the_header() {
        let data = "movieId,title,genres\n\
                    1,Toy Story (1995),Adventure|Animation|Children|Comedy|Fantasy\n\
                    2,Heat (1995),Action|Crime|Thriller\n";

        let catalog = io::catalog_from_reader(&mut reader_for(data)).unwrap();

        assert_eq!(catalog.num_entries(), 2);
        assert_eq!(catalog.entry(0).title, "Toy Story (1995)");
        assert_eq!(
            catalog.entry(1).genre_tags,
            vec!["Action", "Crime", "Thriller"]
        );
    }

    #[test]
    fn empty_genre_fields_are_normalized() {
        let data = "title,genres\nThe Silent Era (1921),\n";

        let catalog = io::catalog_from_reader(&mut reader_for(data)).unwrap();

        assert!(catalog.entry(0).genre_tags.is_empty());
    }

    #[test]
    fn a_missing_genres_column_is_normalized() {
        let data = "movieId,title\n1,Heat (1995)\n";

        let catalog = io::catalog_from_reader(&mut reader_for(data)).unwrap();

        assert_eq!(catalog.entry(0).title, "Heat (1995)");
        assert!(catalog.entry(0).genre_tags.is_empty());
    }

    #[test]
    fn a_missing_title_column_is_rejected() {
        let data = "movieId,genres\n1,Action\n";

        match io::catalog_from_reader(&mut reader_for(data)) {
            Err(DatasetError::MissingTitleColumn) => {},
            _ => panic!("expected the missing title column to be rejected"),
        }
    }

    #[test]
    fn malformed_records_are_rejected() {
        let data = "movieId,title,genres\n1,Heat (1995)\n";

        match io::catalog_from_reader(&mut reader_for(data)) {
            Err(DatasetError::Csv(_)) => {},
            _ => panic!("expected the short record to be rejected"),
        }
    }

    #[test]
    fn results_serialize_with_lowercase_status_tags() {
        let result = RecommendationResult {
            status: Status::Success,
            message: "Found 1 movies similar to 'Toy Story (1995)'.".to_string(),
            input_title: "Toy Story (1995)".to_string(),
            recommendations: vec![
                RecommendedItem {
                    title: "A Bug's Life (1998)".to_string(),
                    genres: vec!["Animation".to_string(), "Comedy".to_string()],
                    similarity_score: 100.0,
                },
            ],
        };

        let as_json = json!(&result);

        assert_eq!(as_json["status"], "success");
        assert_eq!(as_json["input_title"], "Toy Story (1995)");
        assert_eq!(as_json["recommendations"][0]["title"], "A Bug's Life (1998)");
        assert_eq!(as_json["recommendations"][0]["similarity_score"], 100.0);

        let error_result = RecommendationResult {
            status: Status::Error,
            message: "No movie matching 'xyzzy' found in the catalog.".to_string(),
            input_title: "xyzzy".to_string(),
            recommendations: Vec::new(),
        };

        assert_eq!(json!(&error_result)["status"], "error");
    }
}

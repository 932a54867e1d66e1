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

extern crate genrerec;
extern crate getopts;
extern crate num_cpus;

use std::env;
use std::error::Error;

use getopts::Options;

use genrerec::io;
use genrerec::Engine;

fn main() {

    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optopt("i", "moviesfile", "Movie catalog file name (required). The catalog must be a \
        CSV file with a header line, a 'title' column and a pipe-delimited 'genres' column; \
        additional columns are ignored.", "PATH");
    opts.optopt("t", "title", "Movie title to recommend for (required). Either an exact catalog \
        title or a fragment of one.", "TITLE");
    opts.optopt("n", "num-recommendations", "Number of recommendations to compute (optional, \
        defaults to 5).", "NUMBER");
    opts.optopt("o", "outputfile", "Output file name (optional, output will be written to stdout \
        by default).", "PATH");
    opts.optflag("h", "help", "Print this help menu");

    let matches = match opts.parse(&args[1..]) {
        Ok(matches) => matches,
        Err(failure) => {
            let hint = failure.to_string();
            return print_usage_and_exit(&program, opts, Some(&hint))
        },
    };

    if matches.opt_present("h") {
        return print_usage_and_exit(&program, opts, None);
    }

    if !matches.opt_present("i") {
        return print_usage_and_exit(
            &program,
            opts,
            Some("Please specify a movie catalog via --moviesfile."),
        );
    }

    if !matches.opt_present("t") {
        return print_usage_and_exit(
            &program,
            opts,
            Some("Please specify a movie title via --title."),
        );
    }

    let movies_path = matches.opt_str("i").unwrap();
    let query = matches.opt_str("t").unwrap();
    let output_path = matches.opt_str("o");

    let n: usize = match matches.opt_get_default("n", 5) {
        Ok(n) => n,
        Err(failure) => {
            let hint = format!("Problem with option 'n': {}", failure.to_string());
            return print_usage_and_exit(&program, opts, Some(&hint))
        },
    };

    compute_recommendations(&movies_path, &query, n, output_path).unwrap();
}

fn print_usage_and_exit(
    program: &str,
    opts: Options,
    hint: Option<&str>
) {

    if let Some(hint) = hint {
        eprintln!("\n{}\n", hint);
    }

    let brief = format!("Usage: {} [options]", program);
    eprint!("{}", opts.usage(&brief));
}

fn compute_recommendations(
    movies_path: &str,
    query: &str,
    n: usize,
    output_path: Option<String>,
) -> Result<(), Box<dyn Error>> {

    println!("Reading {} to load the movie catalog", movies_path);

    let catalog = io::catalog_from_csv(movies_path)?;

    println!("Found {} movies in the catalog.", catalog.num_entries());

    let engine = Engine::new(catalog, num_cpus::get());

    let result = engine.recommend(query, n);

    println!("Writing {} recommendations...", result.recommendations.len());
    io::write_result(&result, output_path)?;

    Ok(())
}

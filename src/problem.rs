// TSPLIB problem loading
//
// reads the subset of the TSPLIB format the solver emits: arbitrary header
// lines, NODE_COORD_SECTION, one "<id> <x> <y>" line per city, EOF. the id
// column is positional only - tours address cities by list order.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProblemError {
    #[error("cannot read problem file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("bad coordinate on line {line_no} of {path}: {text:?}")]
    BadCoordinate {
        path: String,
        line_no: usize,
        text: String,
    },
    #[error("no coordinates found in {path} (missing NODE_COORD_SECTION?)")]
    NoCoordinates { path: String },
}

/// load the city list from a TSPLIB-style problem file.
///
/// runs exactly once, when the first valid sample names the file; a
/// failure here is fatal - there is nothing to draw without city positions.
pub fn load_cities(path: &Path) -> Result<Vec<(f64, f64)>, ProblemError> {
    let display = path.display().to_string();
    let io_err = |source| ProblemError::Io {
        path: display.clone(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let reader = BufReader::new(file);

    let mut cities = Vec::new();
    let mut coord_mode = false;
    for (line_no, line) in reader.lines().enumerate() {
        let line = line.map_err(io_err)?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            ["NODE_COORD_SECTION"] => coord_mode = true,
            ["EOF"] => coord_mode = false,
            [_id, x, y] if coord_mode => {
                let parse = |s: &str| -> Result<f64, ProblemError> {
                    s.parse().map_err(|_| ProblemError::BadCoordinate {
                        path: display.clone(),
                        line_no: line_no + 1,
                        text: line.clone(),
                    })
                };
                cities.push((parse(x)?, parse(y)?));
            }
            _ => {}
        }
    }

    if cities.is_empty() {
        return Err(ProblemError::NoCoordinates { path: display });
    }
    Ok(cities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn temp_problem(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "tourscope-problem-{}-{}.tsp",
            name,
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_three_cities() {
        let path = temp_problem(
            "three",
            "NAME: prob\nTYPE: TSP\nDIMENSION: 3\nNODE_COORD_SECTION\n\
             1 0 0\n2 10 0\n3 10 10\nEOF\n",
        );
        let cities = load_cities(&path).unwrap();
        assert_eq!(cities, vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_header_lines_ignored() {
        // a 3-token header line outside the coord section must not parse
        let path = temp_problem(
            "header",
            "COMMENT: 57 cities total\nNODE_COORD_SECTION\n1 1.5 2.5\nEOF\n",
        );
        let cities = load_cities(&path).unwrap();
        assert_eq!(cities, vec![(1.5, 2.5)]);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_eof_stops_coordinate_mode() {
        let path = temp_problem(
            "eof",
            "NODE_COORD_SECTION\n1 0 0\nEOF\n2 99 99\n",
        );
        let cities = load_cities(&path).unwrap();
        assert_eq!(cities.len(), 1);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_file_is_error() {
        let path = std::env::temp_dir().join("tourscope-problem-does-not-exist.tsp");
        assert!(matches!(load_cities(&path), Err(ProblemError::Io { .. })));
    }

    #[test]
    fn test_no_coordinates_is_error() {
        let path = temp_problem("nocoords", "NAME: empty\nEOF\n");
        assert!(matches!(
            load_cities(&path),
            Err(ProblemError::NoCoordinates { .. })
        ));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_bad_coordinate_reports_line() {
        let path = temp_problem("badcoord", "NODE_COORD_SECTION\n1 0 0\n2 x 5\nEOF\n");
        match load_cities(&path) {
            Err(ProblemError::BadCoordinate { line_no, .. }) => assert_eq!(line_no, 3),
            other => panic!("unexpected: {other:?}"),
        }
        fs::remove_file(path).unwrap();
    }
}

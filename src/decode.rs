// status line decoding
//
// the solver appends one line per improved iteration:
//   <tspFile>:<problemName>:<c0,c1,...,cN,>:<iterBest>:<globBest>:<iterNum>
// the iteration number is parsed and compared first; an unchanged number
// means the producer has written nothing new and the rest of the line is
// not touched.

use thiserror::Error;

/// one decoded status update from the solver
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    /// path of the TSP problem file the solver is working on
    pub problem_file: String,
    /// human-readable problem name
    pub problem_name: String,
    /// closed tour as city indices into the problem's city list
    pub tour: Vec<usize>,
    /// best tour length found this iteration
    pub iter_best: f64,
    /// best tour length found so far
    pub glob_best: f64,
    /// solver iteration counter, strictly increasing between real updates
    pub iteration: u64,
}

/// outcome of decoding a status line against the previously seen iteration
#[derive(Clone, Debug, PartialEq)]
pub enum Decoded {
    /// a new sample; the caller should replace the tour and extend the series
    Fresh(Sample),
    /// same iteration number as last time - nothing new, not an error
    Unchanged,
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("expected 6 colon-separated fields, got {0}")]
    FieldCount(usize),
    #[error("bad integer in {field}: {value:?}")]
    BadInt { field: &'static str, value: String },
    #[error("bad float in {field}: {value:?}")]
    BadFloat { field: &'static str, value: String },
}

/// decode one status line.
///
/// `prev_iteration` is the iteration number of the last accepted sample
/// (None before the first one). a line carrying the same number yields
/// `Decoded::Unchanged` and no further parsing happens.
pub fn decode(line: &str, prev_iteration: Option<u64>) -> Result<Decoded, DecodeError> {
    let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split(':').collect();
    if fields.len() < 6 {
        return Err(DecodeError::FieldCount(fields.len()));
    }

    let iteration: u64 = fields[5].trim().parse().map_err(|_| DecodeError::BadInt {
        field: "iteration",
        value: fields[5].to_owned(),
    })?;
    if prev_iteration == Some(iteration) {
        return Ok(Decoded::Unchanged);
    }

    // the tour field carries a trailing comma, so the last split segment is
    // empty and gets dropped
    let mut tour = Vec::new();
    for part in fields[2].split(',') {
        if part.is_empty() {
            continue;
        }
        let idx: usize = part.trim().parse().map_err(|_| DecodeError::BadInt {
            field: "tour",
            value: part.to_owned(),
        })?;
        tour.push(idx);
    }

    let iter_best: f64 = fields[3].trim().parse().map_err(|_| DecodeError::BadFloat {
        field: "iteration best",
        value: fields[3].to_owned(),
    })?;
    let glob_best: f64 = fields[4].trim().parse().map_err(|_| DecodeError::BadFloat {
        field: "global best",
        value: fields[4].to_owned(),
    })?;

    Ok(Decoded::Fresh(Sample {
        problem_file: fields[0].to_owned(),
        problem_name: fields[1].to_owned(),
        tour,
        iter_best,
        glob_best,
        iteration,
    }))
}

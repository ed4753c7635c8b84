//! Wire format between the parent and a worker process.
//!
//! The parent writes one JSON [`WorkerRequest`] to the child's stdin and
//! closes it. The child answers with one JSON [`WorkerResponse`] on stdout.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::error::BenchError;
use crate::transform::process_data;

/// A chunk handed to one worker process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerRequest {
    pub index: usize,
    pub threshold: i64,
    pub values: Vec<i64>,
}

/// The transformed chunk sent back by a worker process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerResponse {
    pub index: usize,
    pub values: Vec<i64>,
}

impl WorkerRequest {
    /// Run the transform on this chunk.
    #[must_use]
    pub fn handle(&self) -> WorkerResponse {
        WorkerResponse {
            index: self.index,
            values: process_data(&self.values, self.threshold),
        }
    }
}

/// Child side: read one request from `input`, write one response to `output`.
pub fn serve<R: Read, W: Write>(input: R, mut output: W) -> Result<WorkerResponse, BenchError> {
    let request: WorkerRequest = serde_json::from_reader(input)
        .map_err(|e| BenchError::Protocol(format!("bad request: {e}")))?;
    let response = request.handle();
    serde_json::to_writer(&mut output, &response)
        .map_err(|e| BenchError::Protocol(format!("cannot write response: {e}")))?;
    output
        .flush()
        .map_err(|e| BenchError::Protocol(format!("cannot flush response: {e}")))?;
    Ok(response)
}

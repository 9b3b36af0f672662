//! JSON/text output helpers.

use serde::Serialize;
use shared::error::{AppError, ErrorCode};

use crate::driver::Transcript;

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    data: T,
}

#[derive(Serialize)]
struct JsonFailure {
    ok: bool,
    error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
    code: ErrorCode,
    message: String,
}

pub fn format_transcript(json: bool, transcript: &Transcript) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(&JsonOut {
            ok: true,
            data: transcript,
        })?)
    } else {
        Ok(transcript.to_lines().join("\n"))
    }
}

pub fn format_failure(err: &AppError) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&JsonFailure {
        ok: false,
        error: ErrorBody {
            code: err.code(),
            message: err.to_string(),
        },
    })?)
}

#[cfg(test)]
#[path = "tests/output_tests.rs"]
mod tests;

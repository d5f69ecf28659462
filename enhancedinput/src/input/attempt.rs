use crate::validator::Validator;
use log::debug;

/// Hints of `validators`, in order, skipping the ones without a hint.
pub(crate) fn collect_hints<'v>(validators: &[&'v dyn Validator]) -> Vec<&'v str> {
    validators.iter().filter_map(|&v| v.hint()).collect()
}

/// Drops the line terminator (`\n` or `\r\n`) left by `read_line`.
pub(crate) fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

/// Converts one line and runs every validator against it.
///
/// Returns `None` on the first failure, which the caller answers by printing
/// the invalid-input message and prompting again.
pub(crate) fn evaluate<T, E, F>(line: &str, convert: &F, validators: &[&dyn Validator]) -> Option<T>
where
    F: Fn(&str) -> Result<T, E>,
{
    let Ok(value) = convert(line) else {
        debug!("Rejected input: conversion failed");
        return None;
    };

    if let Some(index) = validators.iter().position(|v| !v.valid(line)) {
        debug!("Rejected input: validator #{index} failed");
        return None;
    }

    Some(value)
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use keyword_stats_core::StatsError;
use std::io::{self, BufRead};

/// Read every line from `reader`, splitting on `'\n'` only.
///
/// The delimiter is dropped and a trailing newline does not produce an extra
/// empty line. A `'\r'` before the newline is kept as part of the line.
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>, StatsError> {
    reader.split(b'\n').map(decode_line).collect()
}

fn decode_line(line: io::Result<Vec<u8>>) -> Result<String, StatsError> {
    let bytes = line?;
    String::from_utf8(bytes)
        .map_err(|e| StatsError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

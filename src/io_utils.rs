// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module contains everything that is necessary to load a knapsack
//! instance from a file. Two formats are understood:
//!
//! * JSON documents such as `{"items":[{"weight":2,"value":3}],"capacity":5}`
//!   (any file whose name ends with `.json`);
//! * plain text files, where the first line gives the capacity and the
//!   number of items, and each of the following lines gives the value and
//!   the weight of one item. Lines starting with a `c` are comments.
//!
//! ```text
//! c a tiny instance
//! 5 2
//! 3 2
//! 4 3
//! ```

use std::{fs::File, io::{BufRead, BufReader}, num::ParseIntError, path::Path};

use regex::Regex;

use crate::{Instance, Item};

/// This enumeration simply groups the kind of errors that might occur when
/// loading an instance from file. There can be io errors (file unavailable ?),
/// format errors (e.g. the file is not an instance but contains the text of
/// your next paper), or parse int errors (which are actually a variant of the
/// format error since it tells you that the parser expected an integer number
/// but got ... something else).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There was an io related error
    #[error("io error {0}")]
    Io(#[from] std::io::Error),
    /// The parser expected to read something that was an integer but got some garbage
    #[error("parse int {0}")]
    ParseInt(#[from] ParseIntError),
    /// The json document does not describe an instance
    #[error("json {0}")]
    Json(#[from] serde_json::Error),
    /// One of the line patterns is not a valid regular expression
    #[error("regex {0}")]
    Regex(#[from] regex::Error),
    /// The file is not laid out as expected
    #[error("ill formed instance: {0}")]
    Format(String),
}

/// This function is used to read an instance from file. It returns either an
/// instance if everything went on well or an error describing the problem.
pub fn read_instance<P: AsRef<Path>>(fname: P) -> Result<Instance, Error> {
    let fname = fname.as_ref();
    let f = BufReader::new(File::open(fname)?);
    if fname.extension().map_or(false, |ext| ext.eq_ignore_ascii_case("json")) {
        read_json(f)
    } else {
        read_text(f)
    }
}

/// Reads an instance from a JSON document
pub fn read_json<R: std::io::Read>(reader: R) -> Result<Instance, Error> {
    Ok(serde_json::from_reader(reader)?)
}

/// Reads an instance from the plain text format
pub fn read_text<R: BufRead>(reader: R) -> Result<Instance, Error> {
    let comment = Regex::new(r"^c(\s.*)?$")?;
    let numbers = Regex::new(r"^(?P<a>\d+)\s+(?P<b>\d+)$")?;

    let mut header: Option<(u64, usize)> = None;
    let mut items = vec![];
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || comment.is_match(line) {
            continue;
        }

        let caps = numbers.captures(line)
            .ok_or_else(|| Error::Format(format!("unexpected line '{line}'")))?;
        match header {
            None => header = Some((caps["a"].parse()?, caps["b"].parse()?)),
            // items are given as 'value weight'
            Some(_) => items.push(Item::new(caps["b"].parse()?, caps["a"].parse()?)),
        }
    }

    let (capacity, nb_items) = header.ok_or_else(|| Error::Format("missing header".to_string()))?;
    if items.len() != nb_items {
        return Err(Error::Format(format!("expected {} items but found {}", nb_items, items.len())));
    }
    Ok(Instance::new(items, capacity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_instances_list_values_before_weights() {
        let text = "c a comment\n5 2\n3 2\n\n4 3\n";
        let instance = read_text(text.as_bytes()).unwrap();
        assert_eq!(5, instance.capacity());
        assert_eq!(&[Item::new(2, 3), Item::new(3, 4)], instance.items());
    }
    #[test]
    fn the_number_of_items_must_match_the_header() {
        let text = "5 3\n3 2\n4 3\n";
        assert!(matches!(read_text(text.as_bytes()), Err(Error::Format(_))));
    }
    #[test]
    fn garbage_is_refused() {
        let text = "5 1\nthree 2\n";
        assert!(matches!(read_text(text.as_bytes()), Err(Error::Format(_))));
    }
    #[test]
    fn an_empty_file_has_no_header() {
        assert!(matches!(read_text("c nothing\n".as_bytes()), Err(Error::Format(_))));
    }
    #[test]
    fn json_instances_are_deserialized() {
        let json = r#"{"items":[{"weight":2,"value":3},{"weight":3,"value":4}],"capacity":5}"#;
        let instance = read_json(json.as_bytes()).unwrap();
        assert_eq!(5, instance.capacity());
        assert_eq!(&[Item::new(2, 3), Item::new(3, 4)], instance.items());
    }
    #[test]
    fn ill_formed_json_is_refused() {
        let json = r#"{"items":[{"weight":2}],"capacity":5}"#;
        assert!(matches!(read_json(json.as_bytes()), Err(Error::Json(_))));
    }
    #[test]
    fn item_weights_and_values_must_fit_in_32_bits() {
        let text = "1099511627776 1\n3 1099511627776\n";
        assert!(matches!(read_text(text.as_bytes()), Err(Error::ParseInt(_))));
        let json = r#"{"items":[{"weight":2,"value":4294967296}],"capacity":5}"#;
        assert!(matches!(read_json(json.as_bytes()), Err(Error::Json(_))));
    }
    #[test]
    fn the_capacity_may_exceed_32_bits() {
        let text = "1099511627776 1\n4294967295 4294967295\n";
        let instance = read_text(text.as_bytes()).unwrap();
        assert_eq!(1 << 40, instance.capacity());
        assert_eq!(&[Item::new(u32::MAX, u32::MAX)], instance.items());
    }
}

//! `var webdata_xxx = "value";` assignments embedded into the inverter status page.

use std::collections::BTreeMap;

use crate::error::ExtractionError;

#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Eq, derive_more::IntoIterator)]
pub struct WebData(#[into_iterator(owned, ref)] BTreeMap<String, String>);

impl WebData {
    const MARKER: &str = "webdata";

    /// Assignments start right after `var `, markers further to the right are not assignments.
    const MAX_MARKER_POSITION: usize = 10;

    /// Parse the assignments line by line, later duplicates win.
    pub fn parse(page: &str) -> Result<Self, ExtractionError> {
        let mut assignments = BTreeMap::new();
        for (index, line) in page.lines().enumerate() {
            if !Self::is_candidate(line) {
                continue;
            }
            let assignment = line
                .trim_end()
                .trim_start_matches(['v', 'a', 'r', ' '])
                .trim_end_matches(';')
                .replace('"', "");
            let Some((key, value)) = assignment.split_once('=') else {
                return Err(ExtractionError::MissingSeparator {
                    line_number: index + 1,
                    line: line.to_string(),
                });
            };
            assignments.insert(key.trim().to_string(), value.trim().to_string());
        }
        Ok(Self(assignments))
    }

    /// Check the character position of the first marker: `0 < position < 10`.
    fn is_candidate(line: &str) -> bool {
        line.find(Self::MARKER).is_some_and(|byte_index| {
            let position = line[..byte_index].chars().count();
            (1..Self::MAX_MARKER_POSITION).contains(&position)
        })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn require(&self, key: &'static str) -> Result<&str, ExtractionError> {
        self.get(key).ok_or(ExtractionError::MissingField(key))
    }
}

/// Bulleted list. Every item in a block uses the same marker.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKERS: [&'static str; 2] = ["* ", "- "];

    /// Returns the marker shared by every line, if there is one.
    pub fn marker(lines: &[&str]) -> Option<&'static str> {
        Self::MARKERS
            .into_iter()
            .find(|marker| lines.iter().all(|line| line.starts_with(marker)))
    }
}

/// Numbered list. Items count up from 1 with no gaps.
pub struct OrderedList;

impl OrderedList {
    /// The marker expected on the line at `index` (0-based), e.g. `"3. "`.
    pub fn marker(index: usize) -> String {
        format!("{}. ", index + 1)
    }

    pub fn is_sequential(lines: &[&str]) -> bool {
        lines
            .iter()
            .enumerate()
            .all(|(i, line)| line.starts_with(&Self::marker(i)))
    }
}

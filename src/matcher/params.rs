use smallvec::SmallVec;

use crate::path::decode_percent;
use crate::pattern::CaptureList;

/// Extracted path parameters, in segment order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    entries: SmallVec<[(String, String); 4]>,
}

impl RouteParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub(crate) fn captures_to_params(path: &str, captures: CaptureList<'_>) -> RouteParams {
    let mut entries = SmallVec::with_capacity(captures.len());
    for (name, (start, len)) in captures {
        let raw = &path[start..start + len];
        entries.push((name.to_string(), decode_percent(raw).into_owned()));
    }
    RouteParams { entries }
}

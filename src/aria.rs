//! ARIA cross-reference wiring
//!
//! `aria-describedby`, `aria-labelledby` and `aria-controls` all hold a
//! space-separated list of element ids. The same join rule applies to each:
//! contributors are taken in order, empty ones are skipped, and an empty
//! result means the attribute is omitted.

/// Join optional id lists into one attribute value
///
/// Each contributor may itself hold several whitespace-separated ids. The
/// result never has leading, trailing or doubled spaces, and is `None` when
/// no ids remain.
pub fn join_ids<'a, I>(contributors: I) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let ids: Vec<&str> = contributors
        .into_iter()
        .flatten()
        .flat_map(str::split_whitespace)
        .collect();

    if ids.is_empty() {
        None
    } else {
        Some(ids.join(" "))
    }
}

/// `aria-describedby` for a form control: caller value, then hint, then error
pub fn compute_described_by(
    caller: Option<&str>,
    hint_id: Option<&str>,
    error_id: Option<&str>,
) -> Option<String> {
    join_ids([caller, hint_id, error_id])
}

/// Incremental form of [`join_ids`] for components with more than three
/// contributors
#[derive(Debug, Clone, Default)]
pub struct IdList {
    ids: Vec<String>,
}

impl IdList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, id: Option<&str>) -> Self {
        if let Some(id) = id {
            self.ids
                .extend(id.split_whitespace().map(str::to_string));
        }
        self
    }

    pub fn finish(self) -> Option<String> {
        if self.ids.is_empty() {
            None
        } else {
            Some(self.ids.join(" "))
        }
    }
}

/// Deterministic ids for a field's hint and error message
///
/// Defaults derive from the field's attribute name; either can be overridden
/// by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldIds {
    pub hint: String,
    pub error: String,
}

impl FieldIds {
    pub fn for_attribute(attribute: &str) -> Self {
        Self {
            hint: format!("{}-hint", attribute),
            error: format!("{}-error", attribute),
        }
    }

    pub fn with_hint(mut self, id: Option<&str>) -> Self {
        if let Some(id) = id {
            self.hint = id.to_string();
        }
        self
    }

    pub fn with_error(mut self, id: Option<&str>) -> Self {
        if let Some(id) = id {
            self.error = id.to_string();
        }
        self
    }
}

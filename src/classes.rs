//! Class list composition
//!
//! A component's `class` attribute is assembled from three sources, always in
//! this order:
//!
//! 1. the component's base classes, in declared order
//! 2. modifier classes, in the order the component's own logic added them
//! 3. the caller's `classes` string, split and rejoined on whitespace
//!
//! Some components swap part of their base list for a variant (a coloured tag
//! renders `govuk-tag govuk-tag--red` in place of `govuk-tag`). That is an
//! explicit [`ClassList::replace_base`] call, never an implicit dedup rule.

use std::borrow::Cow;

/// Join base classes, modifiers and caller classes into one class string
///
/// ```rust,ignore
/// let class = compose_classes(&["govuk-tag"], &["govuk-tag--red"], Some("my-class"));
/// assert_eq!(class, "govuk-tag govuk-tag--red my-class");
/// ```
pub fn compose_classes(base: &[&str], modifiers: &[&str], caller: Option<&str>) -> String {
    let mut class = String::new();
    let words = base
        .iter()
        .chain(modifiers.iter())
        .flat_map(|c| c.split_whitespace())
        .chain(caller.into_iter().flat_map(str::split_whitespace));

    for word in words {
        if !class.is_empty() {
            class.push(' ');
        }
        class.push_str(word);
    }
    class
}

/// Builder over the three class sources
///
/// Base classes are borrowed from the component's static defaults and are
/// never modified in place; every change produces owned entries in this list.
#[derive(Debug, Clone, Default)]
pub struct ClassList {
    base: Vec<Cow<'static, str>>,
    modifiers: Vec<Cow<'static, str>>,
    caller: String,
}

impl ClassList {
    pub fn new(base: &[&'static str]) -> Self {
        Self {
            base: base.iter().map(|c| Cow::Borrowed(*c)).collect(),
            modifiers: Vec::new(),
            caller: String::new(),
        }
    }

    /// Append a modifier class
    pub fn modifier(mut self, class: impl Into<Cow<'static, str>>) -> Self {
        self.modifiers.push(class.into());
        self
    }

    /// Append a modifier class when `condition` holds
    pub fn modifier_if(self, condition: bool, class: impl Into<Cow<'static, str>>) -> Self {
        if condition {
            self.modifier(class)
        } else {
            self
        }
    }

    /// Append a modifier class when one is given
    pub fn modifier_opt(self, class: Option<impl Into<Cow<'static, str>>>) -> Self {
        match class {
            Some(class) => self.modifier(class),
            None => self,
        }
    }

    /// Splice the first `count` base classes out for `replacement`
    ///
    /// `count` is clamped to the length of the base list.
    pub fn replace_base<I, C>(mut self, count: usize, replacement: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cow<'static, str>>,
    {
        let rest = self.base.split_off(count.min(self.base.len()));
        self.base = replacement.into_iter().map(Into::into).chain(rest).collect();
        self
    }

    /// Set the caller's extra classes
    pub fn caller(mut self, classes: &str) -> Self {
        self.caller = classes.to_string();
        self
    }

    pub fn compose(&self) -> String {
        let base: Vec<&str> = self.base.iter().map(AsRef::as_ref).collect();
        let modifiers: Vec<&str> = self.modifiers.iter().map(AsRef::as_ref).collect();
        compose_classes(&base, &modifiers, Some(self.caller.as_str()))
    }
}

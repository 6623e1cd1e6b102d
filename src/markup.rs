//! Markup output buffer and HTML escaping
//!
//! [`Markup`] is the append-only buffer components write into. Components
//! never concatenate tags by hand; they go through `open`/`close`/`void` so
//! that every attribute passes through the same flattening and escaping.

use std::borrow::Cow;
use std::cell::RefCell;

use crate::attributes::Attributes;
use crate::options::Content;

/// Escape HTML entities efficiently
pub fn escape_html_cow(input: &str) -> Cow<str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut result = String::with_capacity(input.len() + input.len() / 4);
    for ch in input.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(ch),
        }
    }

    Cow::Owned(result)
}

/// An append-only HTML buffer
#[derive(Debug, Default)]
pub struct Markup {
    buffer: String,
}

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Drop all buffered output, keeping the allocation
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn into_string(self) -> String {
        self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Write an opening tag
    pub fn open(&mut self, tag: &str, attributes: &Attributes) {
        self.buffer.push('<');
        self.buffer.push_str(tag);
        self.write_attributes(attributes);
        self.buffer.push('>');
    }

    /// Write an opening tag with only a class attribute
    pub fn open_class(&mut self, tag: &str, class: &str) {
        self.buffer.push('<');
        self.buffer.push_str(tag);
        if !class.is_empty() {
            self.buffer.push_str(" class=\"");
            self.buffer.push_str(&escape_html_cow(class));
            self.buffer.push('"');
        }
        self.buffer.push('>');
    }

    pub fn close(&mut self, tag: &str) {
        self.buffer.push_str("</");
        self.buffer.push_str(tag);
        self.buffer.push('>');
    }

    /// Write a void element such as `input`
    pub fn void(&mut self, tag: &str, attributes: &Attributes) {
        self.open(tag, attributes);
    }

    /// Write escaped text
    pub fn text(&mut self, text: &str) {
        self.buffer.push_str(&escape_html_cow(text));
    }

    /// Write trusted HTML verbatim
    pub fn raw(&mut self, html: &str) {
        self.buffer.push_str(html);
    }

    pub fn content(&mut self, content: &Content) {
        match content {
            Content::Text(text) => self.text(text),
            Content::Html(html) => self.raw(html),
        }
    }

    /// Write an element and let `body` fill in its children
    pub fn element<F>(&mut self, tag: &str, attributes: &Attributes, body: F)
    where
        F: FnOnce(&mut Markup),
    {
        self.open(tag, attributes);
        body(self);
        self.close(tag);
    }

    /// Write an element with a class and content body
    pub fn class_element(&mut self, tag: &str, class: &str, content: &Content) {
        self.open_class(tag, class);
        self.content(content);
        self.close(tag);
    }

    fn write_attributes(&mut self, attributes: &Attributes) {
        for (name, value) in attributes.to_html_pairs() {
            self.buffer.push(' ');
            self.buffer.push_str(&name);
            if let Some(value) = value {
                self.buffer.push_str("=\"");
                self.buffer.push_str(&escape_html_cow(&value));
                self.buffer.push('"');
            }
        }
    }
}

thread_local! {
    static MARKUP_BUFFER: RefCell<Markup> = RefCell::new(Markup::with_capacity(1024));
}

/// Render into the thread-local buffer and return a copy of the output
///
/// The buffer is reset before every use. A nested call made while the buffer
/// is already borrowed falls back to a fresh buffer.
pub fn with_markup_buffer<F>(f: F) -> String
where
    F: FnOnce(&mut Markup),
{
    MARKUP_BUFFER.with(|buffer| match buffer.try_borrow_mut() {
        Ok(mut markup) => {
            markup.reset();
            f(&mut markup);
            markup.as_str().to_string()
        }
        Err(_) => {
            let mut markup = Markup::new();
            f(&mut markup);
            markup.into_string()
        }
    })
}

//! The component trait and construction protocol
//!
//! Every component is built in two phases.
//!
//! **Construction** (`Component::new`) runs, in order:
//!
//! 1. normalize its own options ([`crate::options::normalize`])
//! 2. construct the children it owns, handing them the shared
//!    [`RenderContext`] and any ids it has already fixed (the field's
//!    attribute, for example, so a hint can derive `<attribute>-hint`)
//! 3. read back the ids its children expose and wire them with
//!    [`crate::aria`]
//! 4. compose its class list and merge its attributes, treating the wired
//!    `aria-describedby` as one more caller-supplied attribute
//!
//! Any failure aborts the whole construction; nothing is rendered.
//!
//! **Rendering** (`Component::render`) is a pure read of the constructed node.
//! It allocates no ids and keeps no counters, so rendering the same node twice
//! yields identical output.

use serde::de::DeserializeOwned;

use crate::context::RenderContext;
use crate::error::Result;
use crate::markup::{with_markup_buffer, Markup};
use crate::options::from_json;

pub trait Component: Sized {
    /// Typed options record accepted by [`Component::new`]
    type Options: DeserializeOwned;

    /// Name used in error messages and by the JSON entry point
    const NAME: &'static str;

    fn new(context: &RenderContext, options: Self::Options) -> Result<Self>;

    /// Build from loosely-typed JSON options
    fn from_json(context: &RenderContext, value: serde_json::Value) -> Result<Self> {
        let options = from_json::<Self::Options>(Self::NAME, value)?;
        Self::new(context, options)
    }

    /// Append this component's markup to `out`
    ///
    /// Composite components call this on their children, never `render`.
    fn render_to(&self, out: &mut Markup);

    fn render(&self) -> String {
        with_markup_buffer(|out| self.render_to(out))
    }
}

//! Form controls and the chrome around them
//!
//! Every control is a [`field::Field`] plus the control element itself. The
//! primitives (label, hint, error message, fieldset, form group) are also
//! components in their own right.

pub mod character_count;
pub mod checkboxes;
pub(crate) mod choices;
pub mod date_input;
pub mod error_message;
pub mod field;
pub mod fieldset;
pub mod form_group;
pub mod hint;
pub mod input;
pub mod label;
pub mod radios;
pub mod select;
pub mod textarea;

pub use character_count::{CharacterCount, CharacterCountOptions};
pub use checkboxes::{Checkboxes, CheckboxesOptions};
pub use choices::{Behaviour, ChoiceItemOptions, ChoicesOptions, ConditionalOptions};
pub use date_input::{DateInput, DateInputOptions, DateItemOptions};
pub use error_message::{ErrorMessage, ErrorMessageInput, ErrorMessageOptions};
pub use field::{Field, FieldLayout, FieldOptions};
pub use fieldset::{Fieldset, FieldsetOptions, LegendOptions};
pub use form_group::{FormGroup, FormGroupOptions};
pub use hint::{Hint, HintOptions};
pub use input::{AffixOptions, Input, InputOptions};
pub use label::{Label, LabelOptions};
pub use radios::{Radios, RadiosOptions};
pub use select::{Select, SelectItemOptions, SelectOptions};
pub use textarea::{Textarea, TextareaOptions};

//! Field Encoding Policy
//!
//! Pure rules mapping a value's semantic kind onto a physical column type:
//!
//! | Semantic kind | Physical type |
//! |---------------|---------------|
//! | Decimal (price, quantity, offset) | `utf8` or `dictionary<_>`, exact string |
//! | Timestamp | `uint64` nanoseconds since the Unix epoch |
//! | Categorical token, identifier | `dictionary<narrow/medium/wide>` or `utf8` |
//! | Auxiliary document | `binary` (JSON string map) |
//! | String list | `binary` (JSON array) |
//! | Boolean | `boolean` |
//! | Integer | declared width, range checked |
//! | True float (ratios, averages) | `float64` |
//!
//! Decimals never land in a float column.

mod errors;
mod rules;
mod types;
mod value;

pub use errors::PolicyError;
pub use rules::{decode_decimal, decode_document, decode_list, encode_value};
pub use types::{DictionaryWidth, PhysicalType};
pub use value::{ColumnValue, FieldValue};

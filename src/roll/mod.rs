mod ctx;
mod num;
pub mod resolve;
pub(crate) mod roller;
mod stringify;
pub(crate) mod value;

pub use ctx::RollContext;
pub use num::Number;
pub use roller::{DefaultRoller, Roller};
pub use stringify::{MarkdownStringifier, SimpleStringifier, Stringify};
pub use value::{CheckKind, CheckVector, Value};

pub mod cli;
pub mod evaluator;
pub mod output;
pub mod parser;
pub mod value;

pub use evaluator::{Evaluator, Function, resolve_path};
pub use output::{to_json, to_json_pretty};
pub use parser::{parse_call, parse_literal, split_args, strip_quotes};
pub use value::Value;

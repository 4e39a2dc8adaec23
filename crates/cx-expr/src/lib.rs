//! cx-expr: the chart filter language.
//!
//! A filter is a `;`-separated list of tokens. Each token is either a single
//! term or a `+`-joined sum of terms. Parentheses are opaque: a `+` inside
//! them belongs to the term name.
//!
//! # Example
//!
//! ```
//! use cx_expr::parse;
//!
//! let groups = parse("(analyte); (r0)+(r1)");
//! assert_eq!(groups.len(), 2);
//! assert_eq!(groups[1].label, "(r0)+(r1)");
//! assert_eq!(groups[1].terms, vec!["(r0)", "(r1)"]);
//! ```

pub mod error;
pub mod parser;

pub use error::{ExprError, ExprResult};
pub use parser::{GroupExpression, check_balance, parse, parse_strict, split_top_level};

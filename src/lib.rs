pub mod analyzer;
pub use analyzer::{
    ColumnDescriptor, ParsedQuery, TableDescriptor, ValidationResult, parse, validate,
    validate_post_query, validate_pre_query,
};

pub mod normalize;
pub use normalize::*;

pub mod keywords;
pub use keywords::*;

pub mod splitter;
pub use splitter::*;

pub mod alias;
pub use alias::*;

pub mod column;
pub use column::*;

pub mod table;
pub use table::*;

pub mod parameters;
pub use parameters::*;

pub mod parsed_query;
pub use parsed_query::*;

pub mod validator;
pub use validator::*;

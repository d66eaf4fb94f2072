/*!
Parsing of single RPSL objects.
*/
mod object;
mod tokenizer;

pub use object::parse_rpsl_object;
pub(crate) use object::parse_object_block;
pub use tokenizer::AttributeTokenizer;

//! A recursive-descent WKT parser.

mod parser;
mod tokenizer;

pub(crate) use parser::Parser;

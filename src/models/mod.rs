/*!
Data structures produced by the parser: RPSL attributes and objects, and WHOIS responses
holding objects interleaved with server messages.
*/
mod rpsl;
mod whois;

pub use rpsl::*;
pub use whois::*;

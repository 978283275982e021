//! The shared parser-construction contract used by every value type: each
//! value type owns a `chumsky` grammar fragment for itself, and the default
//! `parse` method runs that fragment to completion over a whole input slice.

use chumsky::Parser;
use chumsky::error::Rich;
use chumsky::extra;

use crate::error::RecognizerError;

/// A type that can be recognized from a slice of METAR text.
pub trait Parsable: Sized {
    /// Build the `chumsky` parser fragment that recognizes this type.
    fn parser<'src>() -> impl Parser<'src, &'src str, Self, extra::Err<Rich<'src, char>>>;

    /// Parse a whole slice, requiring the parser to consume it entirely.
    fn parse(input: &str) -> Result<Self, RecognizerError> {
        Self::parser()
            .then_ignore(chumsky::primitive::end())
            .parse(input)
            .into_result()
            .map_err(RecognizerError::from)
    }
}

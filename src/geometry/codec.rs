//! Parenthesized text form shared by every shape.
//!
//! Encoders nest one level of parentheses per component and write floats
//! with `{}` so the output never uses exponent notation. Decoders are
//! positional over [`number_tokens`](crate::math::text::number_tokens).

use crate::error::Result;
use crate::math::text::{parse_numbers, take_numbers};
use crate::math::{Point2, Vector2};

/// Round-trippable text encoding.
pub trait TextCodec: Sized {
    /// Encodes `self` to its parenthesized text form.
    fn encode(&self) -> String;

    /// Decodes a value from text produced by [`TextCodec::encode`].
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` when the text has too few numeric tokens or a
    /// token is not a valid float.
    fn decode(text: &str) -> Result<Self>;
}

pub(crate) fn encode_point(p: &Point2) -> String {
    format!("({}, {})", p.x, p.y)
}

pub(crate) fn point_from_tokens(tokens: &[&str]) -> Result<Point2> {
    let [x, y] = take_numbers(tokens)?;
    Ok(Point2::new(x, y))
}

impl TextCodec for Point2 {
    fn encode(&self) -> String {
        encode_point(self)
    }

    fn decode(text: &str) -> Result<Self> {
        let [x, y] = parse_numbers(text)?;
        Ok(Point2::new(x, y))
    }
}

impl TextCodec for Vector2 {
    fn encode(&self) -> String {
        format!("({}, {})", self.x, self.y)
    }

    fn decode(text: &str) -> Result<Self> {
        let [x, y] = parse_numbers(text)?;
        Ok(Vector2::new(x, y))
    }
}

use log::trace;

use crate::datatypes::{Dimension, GeometryType};
use crate::error::Result;
use crate::geometry::{
    Collection, Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
use crate::io::wkt::reader::tokenizer::{Token, TokenKind, Tokenizer};
use crate::io::ReadOptions;
use crate::trait_::CollectionMember;

/// Recursive-descent parser for WKT with an optional EWKT SRID prefix.
///
/// Geometry tags without a dimensionality keyword take the dimensionality of the enclosing
/// collection, or XY at the top level. Every coordinate must have exactly as many ordinates
/// as its dimensionality requires.
pub(crate) struct Parser<'a> {
    tokenizer: Tokenizer<'a>,
    peeked: Option<Token<'a>>,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, options: &ReadOptions) -> Self {
        Self {
            tokenizer: Tokenizer::new(input),
            peeked: None,
            max_depth: options.max_depth,
        }
    }

    /// Parse exactly one geometry spanning the whole input.
    pub fn parse(mut self) -> Result<Geometry> {
        let srid = self.parse_srid()?;
        let geom = self.parse_geometry(0, None, srid)?;
        let token = self.next()?;
        if token.kind != TokenKind::End {
            return Err(token.error("expected end of input"));
        }
        Ok(geom)
    }

    fn peek(&mut self) -> Result<Token<'a>> {
        match self.peeked {
            Some(token) => Ok(token),
            None => {
                let token = self.tokenizer.next_token()?;
                self.peeked = Some(token);
                Ok(token)
            }
        }
    }

    fn next(&mut self) -> Result<Token<'a>> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.tokenizer.next_token(),
        }
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Token<'a>> {
        let token = self.next()?;
        if token.kind == kind {
            Ok(token)
        } else {
            Err(token.error(format!("expected {what}")))
        }
    }

    /// Consume the next token if it is `keyword`.
    fn eat_keyword(&mut self, keyword: &str) -> Result<bool> {
        if self.peek()?.is_keyword(keyword) {
            self.next()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Whether the next token closes a list. Consumes a separating comma.
    fn list_done(&mut self) -> Result<bool> {
        let token = self.next()?;
        match token.kind {
            TokenKind::Comma => Ok(false),
            TokenKind::RParen => Ok(true),
            _ => Err(token.error("expected ',' or ')'")),
        }
    }

    /// Parse a parenthesised, comma separated, non-empty list.
    fn parse_list<T>(&mut self, mut item: impl FnMut(&mut Self) -> Result<T>) -> Result<Vec<T>> {
        self.expect(TokenKind::LParen, "'('")?;
        let mut items = vec![];
        loop {
            items.push(item(self)?);
            if self.list_done()? {
                return Ok(items);
            }
        }
    }

    /// `SRID=<int>;`, or 0 when absent.
    fn parse_srid(&mut self) -> Result<i32> {
        if !self.eat_keyword("SRID")? {
            return Ok(0);
        }
        self.expect(TokenKind::Equals, "'='")?;
        let token = self.expect(TokenKind::Number, "an SRID")?;
        let srid = lexical_core::parse::<i32>(token.text.as_bytes())
            .map_err(|_| token.error("invalid SRID"))?;
        self.expect(TokenKind::Semicolon, "';'")?;
        Ok(srid)
    }

    fn parse_geometry(
        &mut self,
        depth: usize,
        inherited_dim: Option<Dimension>,
        srid: i32,
    ) -> Result<Geometry> {
        let token = self.expect(TokenKind::Word, "a geometry type")?;
        if depth > self.max_depth {
            return Err(token.error(format!(
                "geometry nested deeper than {} levels",
                self.max_depth
            )));
        }
        let geometry_type = GeometryType::from_wkt_tag(token.text)
            .ok_or_else(|| token.error("unknown geometry type"))?;

        let next = self.peek()?;
        let declared = match next.kind {
            TokenKind::Word => Dimension::from_wkt_tag(next.text),
            _ => None,
        };
        let dim = match declared {
            Some(dim) => {
                self.next()?;
                dim
            }
            None => inherited_dim.unwrap_or(Dimension::XY),
        };
        trace!(
            "parsing WKT {geometry_type} {dim} at position {}",
            token.position
        );

        let geom = match geometry_type {
            GeometryType::Point => self.parse_point(dim, srid)?.into(),
            GeometryType::LineString => self.parse_line_string(dim, srid)?.into(),
            GeometryType::Polygon => self.parse_polygon(dim, srid)?.into(),
            GeometryType::MultiPoint => {
                let points: MultiPoint = self
                    .parse_collection(dim, srid, |p| p.parse_multi_point_member(dim, srid))?;
                points.into()
            }
            GeometryType::MultiLineString => {
                let lines: MultiLineString =
                    self.parse_collection(dim, srid, |p| p.parse_line_string(dim, srid))?;
                lines.into()
            }
            GeometryType::MultiPolygon => {
                let polygons: MultiPolygon =
                    self.parse_collection(dim, srid, |p| p.parse_polygon(dim, srid))?;
                polygons.into()
            }
            GeometryType::GeometryCollection => {
                let geoms: GeometryCollection = self.parse_collection(dim, srid, |p| {
                    p.parse_geometry(depth + 1, Some(dim), srid)
                })?;
                geoms.into()
            }
        };
        Ok(geom)
    }

    /// Exactly `dim.size()` numbers.
    fn parse_coord(&mut self, dim: Dimension) -> Result<Coord> {
        let mut values = [0.0; 4];
        for value in values.iter_mut().take(dim.size()) {
            let token = self.next()?;
            // NaN and inf tokenize as words
            if !matches!(token.kind, TokenKind::Number | TokenKind::Word) {
                return Err(token.error("expected a number"));
            }
            *value = lexical_core::parse::<f64>(token.text.as_bytes())
                .map_err(|_| token.error("invalid number"))?;
        }
        let next = self.peek()?;
        if next.kind == TokenKind::Number {
            return Err(next.error(format!("too many ordinates for {dim} coordinates")));
        }
        Ok(Coord::from_slice(&values[..dim.size()], dim))
    }

    fn parse_point(&mut self, dim: Dimension, srid: i32) -> Result<Point> {
        if self.eat_keyword("EMPTY")? {
            return Ok(Point::empty(dim, srid));
        }
        self.expect(TokenKind::LParen, "'('")?;
        let coord = self.parse_coord(dim)?;
        self.expect(TokenKind::RParen, "')'")?;
        Point::new(Some(coord), dim, srid)
    }

    /// A member of a MULTIPOINT: `EMPTY`, `(x y)`, or a bare `x y`.
    fn parse_multi_point_member(&mut self, dim: Dimension, srid: i32) -> Result<Point> {
        if self.peek()?.kind == TokenKind::Number {
            let coord = self.parse_coord(dim)?;
            return Point::new(Some(coord), dim, srid);
        }
        self.parse_point(dim, srid)
    }

    fn parse_line_string(&mut self, dim: Dimension, srid: i32) -> Result<LineString> {
        if self.eat_keyword("EMPTY")? {
            return Ok(LineString::empty(dim, srid));
        }
        let points = self.parse_list(|p| {
            let coord = p.parse_coord(dim)?;
            Point::new(Some(coord), dim, srid)
        })?;
        LineString::new(points, dim, srid)
    }

    fn parse_polygon(&mut self, dim: Dimension, srid: i32) -> Result<Polygon> {
        if self.eat_keyword("EMPTY")? {
            return Ok(Polygon::empty(dim, srid));
        }
        let rings = self.parse_list(|p| p.parse_line_string(dim, srid))?;
        Polygon::new(rings, dim, srid)
    }

    fn parse_collection<G: CollectionMember>(
        &mut self,
        dim: Dimension,
        srid: i32,
        member: impl FnMut(&mut Self) -> Result<G>,
    ) -> Result<Collection<G>> {
        if self.eat_keyword("EMPTY")? {
            return Ok(Collection::empty(dim, srid));
        }
        let members = self.parse_list(member)?;
        Collection::new(members, dim, srid)
    }
}

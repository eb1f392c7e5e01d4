//! Textual vertex lists: `"r,c r,c ..."`; `;` also separates vertices.

use anyhow::{bail, Context, Result};
use gridshape::Vertex;

pub fn parse_vertex(token: &str) -> Result<Vertex> {
    let (r, c) = token
        .split_once(',')
        .with_context(|| format!("vertex `{token}` is not of the form row,col"))?;
    let row: i64 = r
        .trim()
        .parse()
        .with_context(|| format!("bad row in `{token}`"))?;
    let col: i64 = c
        .trim()
        .parse()
        .with_context(|| format!("bad column in `{token}`"))?;
    Ok(Vertex::new(row, col))
}

/// Parse a whole outline. A trailing repeat of the first vertex is dropped.
pub fn parse_shape(text: &str) -> Result<Vec<Vertex>> {
    let mut out = text
        .split(|ch: char| ch.is_whitespace() || ch == ';')
        .filter(|t| !t.is_empty())
        .map(parse_vertex)
        .collect::<Result<Vec<_>>>()?;
    if out.len() > 1 && out.first() == out.last() {
        out.pop();
    }
    if out.is_empty() {
        bail!("shape `{text}` has no vertices");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_spaces_and_semicolons() {
        // a space inside a vertex splits it into `2,` and `0`
        let err = parse_shape("0,0 0,2; 2, 0").unwrap_err();
        assert!(err.to_string().contains("`2,`"));
        let vs = parse_shape("0,0 0,2;2,0").unwrap();
        assert_eq!(
            vs,
            vec![Vertex::new(0, 0), Vertex::new(0, 2), Vertex::new(2, 0)]
        );
    }

    #[test]
    fn closing_repeat_is_dropped() {
        let vs = parse_shape("1,1 1,3 3,1 1,1").unwrap();
        assert_eq!(vs.len(), 3);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_shape("").is_err());
        assert!(parse_vertex("3").is_err());
        assert!(parse_vertex("a,1").is_err());
        assert_eq!(parse_vertex(" -2,5").unwrap(), Vertex::new(-2, 5));
    }
}

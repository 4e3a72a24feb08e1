//! Point input for the CLI: CSV/Parquet tables, JSON arrays, inline lists.

use anyhow::{anyhow, bail, Context, Result};
use hullscan::geom::Point;
use polars::prelude::*;
use std::fs;
use std::path::Path;

/// Read points from a file, dispatching on the extension.
///
/// - `.csv`, `.parquet`: integer columns `x` and `y` within `i32`, no nulls.
/// - `.json`: `[{"x": .., "y": ..}, ..]`.
pub fn load_points(path: &Path) -> Result<Vec<Point>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("csv") => {
            let lf = LazyCsvReader::new(path)
                .with_infer_schema_length(Some(100))
                .finish()
                .with_context(|| format!("reading {}", path.display()))?;
            table_points(lf)
        }
        Some("parquet") => {
            let lf = LazyFrame::scan_parquet(path, ScanArgsParquet::default())
                .with_context(|| format!("reading {}", path.display()))?;
            table_points(lf)
        }
        Some("json") => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing points from {}", path.display()))
        }
        _ => bail!(
            "unsupported input {}: expected .csv, .parquet or .json",
            path.display()
        ),
    }
}

fn table_points(lf: LazyFrame) -> Result<Vec<Point>> {
    let df = lf.collect()?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_table_shape");
    let coord = |name: &str| -> Result<_> {
        let col = df.column(name)?;
        let dtype = col.dtype();
        if !dtype.is_integer() {
            bail!("column {name:?} has type {dtype}, expected integer coordinates");
        }
        col.strict_cast(&DataType::Int32)
            .with_context(|| format!("column {name:?} does not fit in i32"))
    };
    let (xs, ys) = (coord("x")?, coord("y")?);
    xs.i32()?
        .into_iter()
        .zip(ys.i32()?.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => Err(anyhow!("row {row}: missing coordinate")),
        })
        .collect()
}

/// Parse `"x,y x,y ..."`; pairs may also be separated by `;`.
pub fn parse_inline(s: &str) -> Result<Vec<Point>> {
    s.split(|c: char| c.is_whitespace() || c == ';')
        .filter(|tok| !tok.is_empty())
        .map(parse_pair)
        .collect()
}

/// Parse one `x,y` pair.
pub fn parse_pair(tok: &str) -> Result<Point> {
    let (x, y) = tok
        .split_once(',')
        .ok_or_else(|| anyhow!("expected x,y but got {tok:?}"))?;
    let x = x.trim().parse::<i32>().with_context(|| format!("bad x in {tok:?}"))?;
    let y = y.trim().parse::<i32>().with_context(|| format!("bad y in {tok:?}"))?;
    Ok(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn inline_lists() {
        let pts = parse_inline("0,0 10,0;10,10  0,10").unwrap();
        assert_eq!(
            pts,
            vec![
                Point::new(0, 0),
                Point::new(10, 0),
                Point::new(10, 10),
                Point::new(0, 10)
            ]
        );
        assert!(parse_inline("").unwrap().is_empty());
        assert!(parse_inline("1,2 3").is_err());
        assert!(parse_inline("a,2").is_err());
    }

    #[test]
    fn json_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.json");
        fs::write(&path, r#"[{"x":1,"y":2},{"x":3,"y":4}]"#).unwrap();
        let pts = load_points(&path).unwrap();
        assert_eq!(pts, vec![Point::new(1, 2), Point::new(3, 4)]);
    }

    #[test]
    fn csv_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        fs::write(&path, "x,y\n0,0\n4,0\n2,3\n").unwrap();
        let pts = load_points(&path).unwrap();
        assert_eq!(pts, vec![Point::new(0, 0), Point::new(4, 0), Point::new(2, 3)]);
    }

    #[test]
    fn csv_rejects_fractional_and_out_of_range_coordinates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("frac.csv");
        fs::write(&path, "x,y\n0,0\n1.7,2\n").unwrap();
        let err = load_points(&path).unwrap_err();
        assert!(err.to_string().contains("expected integer coordinates"), "{err:#}");

        let path = dir.path().join("wide.csv");
        fs::write(&path, "x,y\n0,0\n5000000000,2\n").unwrap();
        assert!(load_points(&path).is_err());
    }

    #[test]
    fn unknown_extension() {
        let err = load_points(Path::new("points.txt")).unwrap_err();
        assert!(err.to_string().contains("unsupported input"));
    }
}

//! JSON shapes printed by the subcommands.

use gridshape::grid::has_redundant;
use gridshape::sheet::{Figure, Sheet};
use gridshape::{Polygon, Vertex};
use serde::Serialize;

pub type Point = [i64; 2];

#[inline]
pub fn point(v: &Vertex) -> Point {
    [v.row, v.col]
}

pub fn points(vs: &[Vertex]) -> Vec<Point> {
    vs.iter().map(point).collect()
}

#[derive(Serialize)]
pub struct ShapeReport {
    pub vertices: Vec<Point>,
    pub area: f64,
    pub has_redundant_vertices: bool,
    pub form_count: usize,
    pub forms: Vec<Vec<Point>>,
}

impl ShapeReport {
    pub fn of(polygon: &Polygon) -> Self {
        let forms: Vec<Vec<Point>> = polygon
            .canonical_forms()
            .map(|set| set.iter().map(|s| points(s)).collect())
            .unwrap_or_default();
        Self {
            vertices: points(polygon.vertices()),
            area: polygon.area(),
            has_redundant_vertices: has_redundant(polygon.vertices()),
            form_count: forms.len(),
            forms,
        }
    }
}

#[derive(Serialize)]
pub struct CompareReport {
    pub equal: bool,
    pub area_a: f64,
    pub area_b: f64,
}

#[derive(Serialize)]
pub struct FigureReport {
    pub index: usize,
    pub vertices: Vec<Point>,
    pub closed: bool,
    pub area: f64,
    pub color: String,
    pub matched_earlier: bool,
}

impl FigureReport {
    pub fn of(index: usize, figure: &Figure) -> Self {
        Self {
            index,
            vertices: points(figure.polygon.vertices()),
            closed: figure.polygon.is_closed(),
            area: figure.polygon.area(),
            color: figure.color.hex(),
            matched_earlier: figure.matched_earlier,
        }
    }
}

#[derive(Serialize)]
pub struct SessionReport {
    pub figures: Vec<FigureReport>,
    pub match_count: usize,
    pub groups: Vec<Vec<usize>>,
    pub last_area: Option<f64>,
}

impl SessionReport {
    pub fn of(sheet: &Sheet) -> Self {
        Self {
            figures: sheet
                .figures()
                .iter()
                .enumerate()
                .map(|(i, f)| FigureReport::of(i, f))
                .collect(),
            match_count: sheet.match_count(),
            groups: sheet.groups(),
            last_area: sheet.last_area(),
        }
    }
}

#[derive(Serialize)]
pub struct CatalogReport {
    pub size: i64,
    pub count: usize,
    pub triangles: Vec<Vec<Point>>,
}

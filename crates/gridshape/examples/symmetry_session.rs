//! Draw a few shapes on one board and print which ones match.
//!
//! Usage:
//!   cargo run -p gridshape --example symmetry_session
//!
//! The third triangle is a reflected, shifted copy of the first; the L-shape
//! is drawn twice in opposite directions.

use gridshape::prelude::*;

fn draw(sheet: &mut Sheet, pts: &[(i64, i64)]) {
    for &p in pts.iter().chain(pts.first()) {
        match sheet.click(Vertex::from(p)) {
            Ok(ClickOutcome::Closed { index, area, matches }) => {
                println!("figure {index}: area {area}, matches earlier {matches:?}");
            }
            Ok(_) => {}
            Err(e) => eprintln!("click {p:?} ignored: {e}"),
        }
    }
}

fn main() {
    let mut sheet = Sheet::new(SheetCfg::default());
    draw(&mut sheet, &[(0, 0), (0, 3), (1, 0)]);
    draw(&mut sheet, &[(5, 5), (5, 6), (6, 6), (6, 7), (7, 7), (7, 5)]);
    draw(&mut sheet, &[(12, 12), (12, 9), (11, 12)]);
    draw(&mut sheet, &[(15, 1), (17, 1), (17, 3), (16, 3), (16, 2), (15, 2)]);
    println!("matches: {}", sheet.match_count());
    for (g, members) in sheet.groups().iter().enumerate() {
        let hex = sheet.figures()[members[0]].color.hex();
        println!("group {g} ({hex}): {members:?}");
    }
}

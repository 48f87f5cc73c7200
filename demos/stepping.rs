use grid_wavefront::{steps, GridModel, Point, SearchPhase, StepController};

// Drives the search one round at a time, the way a renderer would when
// animating the two waves, then draws the start wave's arrival directions
// as an overlay.

fn main() {
    let grid = GridModel::from_ascii(
        "
        S....
        .###.
        .#...
        .#.#.
        ...#F
        ",
    )
    .unwrap();
    println!("{}", grid);

    let mut controller = StepController::new(&grid);
    loop {
        let report = controller.advance();
        println!(
            "round {}: start wave {} cells, finish wave {} cells",
            report.round,
            report.wave_start.visited_count(),
            report.wave_finish.visited_count()
        );
        match report.phase {
            SearchPhase::Met(cell) => {
                println!("waves met at {}", cell);
                break;
            }
            SearchPhase::Exhausted => {
                println!("no path");
                break;
            }
            _ => {}
        }
    }

    // Terminal advance() is a no-op, so the final snapshot stays available.
    let report = controller.advance();
    for y in 0..grid.height() {
        let mut line = String::new();
        for x in 0..grid.width() {
            let p = Point::new(x as i32, y as i32);
            line.push(match report.wave_start.record(p).and_then(|r| r.arrival) {
                Some(dir) => dir.glyph(),
                None if p == grid.start() => 'S',
                None => ' ',
            });
        }
        println!("{}", line);
    }

    if let Some(path) = controller.path().unwrap() {
        println!("path ({} steps): {:?}", steps(&path), path);
    }
}

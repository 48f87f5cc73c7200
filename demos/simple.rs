use grid_wavefront::{find_shortest_path, steps, GridModel};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// |# #|
// |  F|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - F marks the finish

fn main() {
    let grid = GridModel::from_rows(&[vec![2, 0, 0], vec![1, 0, 1], vec![0, 0, 3]]).unwrap();
    println!("{}", grid);
    let path = find_shortest_path(&grid).unwrap().unwrap();
    println!("Path ({} steps):", steps(&path));
    for p in path {
        println!("{:?}", p);
    }
}

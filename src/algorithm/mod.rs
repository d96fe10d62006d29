/// Union-find forest used by the generator
pub mod disjoint_set;
/// Dangling wall stub removal
pub mod erosion;
/// Spanning-tree maze generation by randomized edge contraction
pub mod generator;
/// Mazes templated on the rendering of another maze
pub mod meta;
/// Greedy depth-first path search and solution highlighting
pub mod solver;

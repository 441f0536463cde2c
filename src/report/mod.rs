pub mod compare;
pub mod exec;
pub mod graph;
pub mod output;
pub mod single;

pub use compare::render_comparison;
pub use exec::exec;
pub use graph::{intensity_glyph, month_graph, GRAPH_WIDTH};
pub use output::render_machine;
pub use single::render_single;

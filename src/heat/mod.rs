pub mod aggregate;
pub mod color;
pub mod exec;
pub mod fetch;
pub mod output;
pub mod svg;

pub use aggregate::{aggregate_year, by_year, global_max, latest_year};
pub use color::{cell_color, density, Color};
pub use exec::{exec_render, exec_report, exec_report_all, scan};
pub use fetch::{collect_from, collect_records, Collection};
pub use output::{open_sink, select_year, write_all_years, write_year_report};
pub use svg::render_svg;

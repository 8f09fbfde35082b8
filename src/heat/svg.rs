use crate::error::Result;
use crate::heat::color::cell_color;
use crate::model::DailyAggregate;
use std::io::Write;

pub const WEEKS: u32 = 52;
pub const DAYS_PER_WEEK: u32 = 7;
/// Cell edge plus gutter.
const PITCH: u32 = 12;
const CELL: u32 = 10;

// The two entities are unused; older readers of these reports expect them.
const HEADER: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.0//EN" "http://www.w3.org/TR/2001/REC-SVG-20010904/DTD/svg10.dtd" [
  <!ENTITY st0 "fill-rule:evenodd;clip-rule:evenodd;fill:#000000;">
  <!ENTITY st1 "fill:#000000;">
]>
<svg version="1.0" id="Layer_1" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" x="0px" y="0px" width="667px" height="107px" viewBox="-10 -10 667 107" style="enable-background:new 0 0 667 107;" xml:space="preserve">
"#;

const FOOTER: &str = "</svg>\n";

/// Day-of-year drawn at `(week, day)`. Only days 1..=364 fit the grid;
/// days 365 and 366 are never drawn.
pub fn day_of_year(week: u32, day: u32) -> u32 {
    week * DAYS_PER_WEEK + day + 1
}

/// Write a 52x7 heatmap of `data` to `out`, colored against `global_max`.
pub fn render_svg<W: Write + ?Sized>(data: &DailyAggregate, global_max: u32, out: &mut W) -> Result<()> {
    out.write_all(HEADER.as_bytes())?;

    for week in 0..WEEKS {
        write!(out, r#"<g transform="translate({}, 0)">"#, week * PITCH)?;
        for day in 0..DAYS_PER_WEEK {
            let yday = day_of_year(week, day);
            let color = cell_color(data.mine(yday), data.others(yday), global_max);
            write!(
                out,
                r#"<rect class="day" width="{CELL}px" height="{CELL}px" y="{}" style="fill: {color}"/>"#,
                day * PITCH
            )?;
        }
        out.write_all(b"</g>\n")?;
    }

    out.write_all(FOOTER.as_bytes())?;
    out.flush()?;
    Ok(())
}

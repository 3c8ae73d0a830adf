//! HTML rendering of the dashboard page.

use crate::view::{ChartKind, DashboardView};
use bikeshare_common::{format_count, DateRange};
use std::fmt::Write;

const STYLE: &str = "\
body { margin: 0; font-family: sans-serif; display: flex; }
aside { width: 16rem; min-height: 100vh; padding: 1.5rem; background: #f0f2f6; box-sizing: border-box; }
aside label { display: block; margin-top: 0.75rem; font-size: 0.9rem; }
aside input { width: 100%; }
aside button { margin-top: 1rem; }
main { flex: 1; padding: 1.5rem 3rem; }
.metrics { display: flex; gap: 3rem; }
.metric-label { font-size: 0.9rem; color: #555; }
.metric-value { font-size: 2rem; }
.pair { display: flex; gap: 1rem; flex-wrap: wrap; }
img { max-width: 100%; }
";

/// Query string that reproduces the selected range.
pub fn range_query(range: DateRange) -> String {
    format!("start={}&end={}", range.start, range.end)
}

/// Renders the full dashboard page for `view`.
pub fn render_page(view: &DashboardView) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Dashboard for Bike Rental</title>\n");
    let _ = writeln!(html, "<style>\n{STYLE}</style>\n</head>\n<body>");

    render_sidebar(&mut html, view);

    html.push_str("<main>\n<h1>Dashboard for Bike Rental</h1>\n");
    render_metrics(&mut html, view);

    let query = range_query(view.range);
    render_section(&mut html, "Yearly Rentals:", &[ChartKind::Yearly], &query);
    render_section(&mut html, "Monthly Rentals:", &[ChartKind::Monthly], &query);
    render_section(
        &mut html,
        "Weekday and Holiday Rentals:",
        &[ChartKind::WorkingDay, ChartKind::Holiday],
        &query,
    );
    render_section(&mut html, "Hour Rentals:", &[ChartKind::Hourly], &query);

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn render_sidebar(html: &mut String, view: &DashboardView) {
    let (min, max) = (view.bounds.start, view.bounds.end);
    let _ = write!(
        html,
        "<aside>\n<form method=\"get\" action=\"/\">\n<h3>Date Range</h3>\n\
         <label for=\"start\">Start</label>\n\
         <input type=\"date\" id=\"start\" name=\"start\" min=\"{min}\" max=\"{max}\" value=\"{start}\">\n\
         <label for=\"end\">End</label>\n\
         <input type=\"date\" id=\"end\" name=\"end\" min=\"{min}\" max=\"{max}\" value=\"{end}\">\n\
         <button type=\"submit\">Apply</button>\n</form>\n</aside>\n",
        start = view.range.start,
        end = view.range.end,
    );
}

fn render_metrics(html: &mut String, view: &DashboardView) {
    html.push_str("<h2>Daily Rentals:</h2>\n<div class=\"metrics\">\n");
    for (label, value) in [
        ("Casual Users", view.summary.casual),
        ("Registered Users", view.summary.registered),
        ("Total Users", view.summary.total),
    ] {
        let _ = writeln!(
            html,
            "<div class=\"metric\"><div class=\"metric-label\">{label}</div>\
             <div class=\"metric-value\">{}</div></div>",
            format_count(value)
        );
    }
    html.push_str("</div>\n");
}

fn render_section(html: &mut String, heading: &str, charts: &[ChartKind], query: &str) {
    let _ = writeln!(html, "<h2>{heading}</h2>\n<div class=\"pair\">");
    for kind in charts {
        let _ = writeln!(
            html,
            "<img src=\"/charts/{kind}?{query}\" alt=\"{kind} chart\">"
        );
    }
    html.push_str("</div>\n");
}

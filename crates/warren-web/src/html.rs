//! HTML pages for the single-ticker form.

use crate::Analysis;
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write as _;
use warren_traits::format_metric;

const STYLE: &str = "body{font-family:Georgia,serif;max-width:42rem;margin:2rem auto;padding:0 1rem;color:#222}\
h1{margin-bottom:.2rem}.score{font-size:2.5rem;font-weight:bold}\
table{border-collapse:collapse}td{padding:.2rem 1rem .2rem 0}\
.error{color:#a00}.for{color:#060}.against{color:#a00}";

/// Writing to a String cannot fail.
fn line(body: &mut String, text: &str) {
    let _ = writeln!(body, "{text}");
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        encode_text(title)
    )
}

fn form(value: &str) -> String {
    format!(
        "<form action=\"/analyze\" method=\"get\">\n\
         <label for=\"ticker\">Ticker</label>\n\
         <input id=\"ticker\" name=\"ticker\" type=\"text\" maxlength=\"10\" value=\"{}\" autofocus>\n\
         <button type=\"submit\">Ask Warren</button>\n</form>\n",
        encode_double_quoted_attribute(value)
    )
}

/// Landing page with an empty form.
pub(crate) fn index() -> String {
    let mut body = String::from("<h1>Uncle Warren Says</h1>\n");
    body.push_str("<p>Enter a ticker to see how it stacks up against Buffett's principles.</p>\n");
    body.push_str(&form(""));
    page("Uncle Warren Says", &body)
}

/// Result page for a successful analysis.
pub(crate) fn analysis(analysis: &Analysis) -> String {
    let metrics = &analysis.metrics;
    let mut body = String::new();
    line(
        &mut body,
        &format!(
            "<h1>{} <small>{}</small></h1>",
            encode_text(analysis.ticker.as_str()),
            encode_text(&analysis.company_name)
        ),
    );
    line(&mut body, &format!("<p class=\"score\">{}/100</p>", analysis.score));
    line(&mut body, &format!("<p><strong>{}</strong></p>", analysis.verdict));
    line(&mut body, &format!("<p>{}</p>", encode_text(&analysis.summary)));

    body.push_str("<table>\n");
    for (label, value) in [
        ("P/E Ratio", format_metric(metrics.pe_ratio, 1, "")),
        ("EPS Growth", format_metric(metrics.eps_growth_pct, 1, "%")),
        ("ROE", format_metric(metrics.roe_pct, 1, "%")),
        ("Debt/Equity", format_metric(metrics.debt_to_equity, 2, "")),
        ("Profit Margin", format_metric(metrics.profit_margin_pct, 1, "%")),
    ] {
        line(&mut body, &format!("<tr><td>{label}</td><td>{value}</td></tr>"));
    }
    body.push_str("</table>\n");

    reasons(&mut body, "Why Warren likes it", "for", &analysis.reasons_for);
    reasons(&mut body, "What gives him pause", "against", &analysis.reasons_against);

    body.push_str(&form(analysis.ticker.as_str()));
    page(&format!("{} - Uncle Warren Says", analysis.ticker), &body)
}

/// Page shown when a ticker cannot be analyzed.
pub(crate) fn error(input: &str, message: &str) -> String {
    let mut body = String::from("<h1>Uncle Warren Says</h1>\n");
    line(&mut body, &format!("<p class=\"error\">{}</p>", encode_text(message)));
    body.push_str(&form(input.trim()));
    page("Uncle Warren Says", &body)
}

fn reasons(body: &mut String, heading: &str, class: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    line(body, &format!("<h2>{heading}</h2>\n<ul class=\"{class}\">"));
    for item in items {
        line(body, &format!("<li>{}</li>", encode_text(item)));
    }
    body.push_str("</ul>\n");
}

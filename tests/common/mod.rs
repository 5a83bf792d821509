//! Shared test fixtures for the vegmarket SDK integration tests.
//!
//! Provides builders for market-page HTML in the shape the live site serves:
//! one data table whose rows are `[serial, vegetable, unit, "₹min - max"]`,
//! wrapped in enough surrounding markup to exercise the tolerant scanner.

#![allow(dead_code)] // not every test binary uses every fixture

/// A full market page with one data row per `(vegetable, price_range)` pair.
///
/// The range string goes into the 4th cell verbatim, so tests can feed
/// well-formed (`"₹20 - 30"`) and malformed (`"₹20"`) ranges alike.
pub fn price_page(rows: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (i, (vegetable, range)) in rows.iter().enumerate() {
        body.push_str(&format!(
            "<tr>\n  <td>{}</td>\n  <td><a href=\"/veg/{}\">{}</a></td>\n  \
             <td>1 kg</td>\n  <td>{}</td>\n</tr>\n",
            i + 1,
            i + 1,
            vegetable,
            range
        ));
    }
    page_with_table(&format!(
        "<thead>\n<tr><th>No.</th><th>Vegetable</th><th>Unit</th><th>Price Range</th></tr>\n\
         </thead>\n<tbody>\n{}</tbody>",
        body
    ))
}

/// A page whose table has only the header row.
pub fn header_only_page() -> String {
    page_with_table("<tr><th>No.</th><th>Vegetable</th><th>Unit</th><th>Price Range</th></tr>")
}

/// A page with navigation chrome but no table element at all.
pub fn page_without_table() -> String {
    wrap_page("<div class=\"content\"><p>Prices are temporarily unavailable.</p></div>")
}

/// Wrap table inner markup in a `<table>` element plus page chrome.
pub fn page_with_table(table_inner: &str) -> String {
    wrap_page(&format!(
        "<TABLE class=\"table table-striped\" id=\"todayprice\">\n{}\n</TABLE>",
        table_inner
    ))
}

fn wrap_page(content: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Vegetable Market Price</title></head>\n\
         <body>\n<nav><a href=\"/\">Home</a> &gt; <a href=\"/market\">Markets</a></nav>\n\
         {}\n<footer>&copy; vegetablemarketprice.com</footer>\n</body>\n</html>\n",
        content
    )
}

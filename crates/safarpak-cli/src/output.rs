//! Output formatting for command results.
//!
//! Routes render through the library's [`RouteSummary`] renderers; listings
//! and reports are formatted here.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use safarpak_lib::{Location, RouteRenderMode, RouteSummary};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text suitable for saving as an offline route sheet.
    #[default]
    Text,
    /// Markdown.
    Rich,
    /// Pretty-printed JSON.
    Json,
}

/// Render a route summary in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_route(summary: &RouteSummary, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => print!("{}", summary.render(RouteRenderMode::PlainText)),
        OutputFormat::Rich => print!("{}", summary.render(RouteRenderMode::RichText)),
        OutputFormat::Json => render_json(summary)?,
    }
    Ok(())
}

/// Render any serialisable value as pretty JSON on stdout.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

/// One line per location: name, coordinates and kind.
pub fn format_location_line(location: &Location, format: OutputFormat) -> String {
    match format {
        OutputFormat::Rich => format!(
            "* **{}** `{:.4}, {:.4}` _{}_",
            location.name, location.lat, location.lon, location.kind
        ),
        _ => format!(
            "{} ({:.4}, {:.4}) [{}]",
            location.name, location.lat, location.lon, location.kind
        ),
    }
}

/// Render a list of locations, optionally under a heading.
pub fn render_locations(
    heading: Option<&str>,
    locations: &[&Location],
    format: OutputFormat,
) -> io::Result<()> {
    if format == OutputFormat::Json {
        return render_json(locations);
    }

    if let Some(heading) = heading {
        match format {
            OutputFormat::Rich => println!("**{heading}**"),
            _ => println!("{heading}:"),
        }
    }
    for location in locations {
        println!("{}", format_location_line(location, format));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_lines_include_kind() {
        let lahore = Location::city("Lahore", 31.5497, 74.3436);
        assert_eq!(
            format_location_line(&lahore, OutputFormat::Text),
            "Lahore (31.5497, 74.3436) [city]"
        );
        assert_eq!(
            format_location_line(&lahore, OutputFormat::Rich),
            "* **Lahore** `31.5497, 74.3436` _city_"
        );
    }
}

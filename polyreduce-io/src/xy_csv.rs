//! XY/CSV polyline format support
//!
//! One point per line, with the x and y coordinates in delimited columns:
//! - Auto-detection of delimiters (comma, space, tab, semicolon)
//! - Header detection, including `lon`/`lat` and `time`/`value` column names
//! - Line-numbered parse errors
//! - Streaming support for large files

use polyreduce_core::{Error, Point2d, Polyline, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Lines, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Supported delimiters for XY/CSV files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Space,
    Tab,
    Semicolon,
}

impl Delimiter {
    /// Get the character representation of the delimiter
    pub fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Space => ' ',
            Delimiter::Tab => '\t',
            Delimiter::Semicolon => ';',
        }
    }

    /// Detect delimiter from a line of text.
    ///
    /// Spaces are only chosen when no other delimiter appears, so padded
    /// records like `1.5, 2.5` are still read as comma separated.
    pub fn detect_from_line(line: &str) -> Option<Self> {
        let line = line.trim();
        let mut best: Option<(usize, Delimiter)> = None;

        for delimiter in [Delimiter::Comma, Delimiter::Tab, Delimiter::Semicolon] {
            let count = line.matches(delimiter.as_char()).count();
            if count > best.map_or(0, |(max, _)| max) {
                best = Some((count, delimiter));
            }
        }

        best.map(|(_, delimiter)| delimiter).or_else(|| {
            line.contains(' ').then_some(Delimiter::Space)
        })
    }

    /// Split a record into trimmed fields. Runs of spaces count as one separator.
    fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self {
            Delimiter::Space => line.split_whitespace().collect(),
            _ => line.split(self.as_char()).map(str::trim).collect(),
        }
    }
}

/// Column types that can be parsed from XY/CSV files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    X,
    Y,
    Unknown,
}

impl ColumnType {
    /// Parse column type from header name
    pub fn from_header(header: &str) -> Self {
        match header.trim().to_lowercase().as_str() {
            "x" | "px" | "pos_x" | "lon" | "lng" | "long" | "longitude" | "easting" | "t" | "time"
            | "timestamp" => ColumnType::X,
            "y" | "py" | "pos_y" | "lat" | "latitude" | "northing" | "v" | "value" => ColumnType::Y,
            _ => ColumnType::Unknown,
        }
    }

    fn header_name(&self) -> &'static str {
        match self {
            ColumnType::X => "x",
            ColumnType::Y => "y",
            ColumnType::Unknown => "unknown",
        }
    }
}

/// Schema definition for parsing XY/CSV files
#[derive(Debug, Clone, PartialEq)]
pub struct XyCsvSchema {
    pub columns: Vec<ColumnType>,
    pub has_header: bool,
    pub delimiter: Delimiter,
}

impl XyCsvSchema {
    pub fn new(columns: Vec<ColumnType>, has_header: bool, delimiter: Delimiter) -> Self {
        Self {
            columns,
            has_header,
            delimiter,
        }
    }

    /// Headerless x,y columns with the given delimiter
    pub fn xy(delimiter: Delimiter) -> Self {
        Self::new(vec![ColumnType::X, ColumnType::Y], false, delimiter)
    }

    /// Position of the x column
    pub fn x_index(&self) -> Option<usize> {
        self.columns.iter().position(|column| *column == ColumnType::X)
    }

    /// Position of the y column
    pub fn y_index(&self) -> Option<usize> {
        self.columns.iter().position(|column| *column == ColumnType::Y)
    }

    /// Auto-detect schema from the first non-blank line of a file
    pub fn detect_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        for line in reader.lines() {
            let line = line?;
            if !line.trim().is_empty() {
                return Self::detect_from_line(&line);
            }
        }
        Ok(Self::xy(Delimiter::Comma))
    }

    /// Auto-detect schema from in-memory text
    pub fn detect_from_str(text: &str) -> Result<Self> {
        match text.lines().find(|line| !line.trim().is_empty()) {
            Some(line) => Self::detect_from_line(line),
            None => Ok(Self::xy(Delimiter::Comma)),
        }
    }

    fn detect_from_line(first_line: &str) -> Result<Self> {
        let delimiter = Delimiter::detect_from_line(first_line)
            .ok_or_else(|| Error::InvalidData("Could not detect delimiter".to_string()))?;

        let fields = delimiter.split(first_line);
        let has_header = Self::is_header_line(&fields);

        let columns = if has_header {
            Self::parse_columns(&fields)?
        } else {
            // Without a header the first two columns are x and y
            let mut columns = vec![ColumnType::Unknown; fields.len().max(2)];
            columns[0] = ColumnType::X;
            columns[1] = ColumnType::Y;
            columns
        };

        debug!(?delimiter, has_header, columns = columns.len(), "detected xy/csv schema");
        Ok(Self::new(columns, has_header, delimiter))
    }

    /// Parse columns from header fields
    fn parse_columns(fields: &[&str]) -> Result<Vec<ColumnType>> {
        let columns: Vec<ColumnType> = fields.iter().map(|header| ColumnType::from_header(header)).collect();

        if !columns.contains(&ColumnType::X) || !columns.contains(&ColumnType::Y) {
            return Err(Error::InvalidData(format!(
                "XY/CSV header must name x and y columns, found {:?}",
                fields
            )));
        }

        Ok(columns)
    }

    /// A line is a header when any of its fields is not a number
    fn is_header_line(fields: &[&str]) -> bool {
        fields.iter().any(|field| field.parse::<f64>().is_err())
    }
}

/// XY/CSV reader implementation
pub struct XyCsvReader;

impl XyCsvReader {
    /// Read a polyline from an XY/CSV file with auto-detection
    pub fn read_polyline<P: AsRef<Path>>(path: P) -> Result<Polyline> {
        let schema = XyCsvSchema::detect_from_file(&path)?;
        Self::read_polyline_with_schema(path, &schema)
    }

    /// Read a polyline with a specific schema
    pub fn read_polyline_with_schema<P: AsRef<Path>>(path: P, schema: &XyCsvSchema) -> Result<Polyline> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let polyline = Self::parse_lines(reader.lines(), schema)?;
        debug!(path = %path.display(), points = polyline.len(), "read polyline");
        Ok(polyline)
    }

    /// Parse in-memory XY/CSV text with a specific schema
    pub fn parse_str(text: &str, schema: &XyCsvSchema) -> Result<Polyline> {
        Self::parse_lines(text.lines().map(Ok), schema)
    }

    fn parse_lines<I, S>(lines: I, schema: &XyCsvSchema) -> Result<Polyline>
    where
        I: IntoIterator<Item = std::io::Result<S>>,
        S: AsRef<str>,
    {
        let mut polyline = Polyline::new();
        let mut header_pending = schema.has_header;

        for (index, line) in lines.into_iter().enumerate() {
            let line = line?;
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }
            if header_pending {
                header_pending = false;
                continue;
            }

            polyline.push(Self::parse_line(line, index + 1, schema)?);
        }

        Ok(polyline)
    }

    /// Parse a single record. `line_number` is 1-based and only used for errors.
    fn parse_line(line: &str, line_number: usize, schema: &XyCsvSchema) -> Result<Point2d> {
        let fail = |message: String| {
            warn!(line = line_number, message = message.as_str(), "rejecting xy/csv record");
            Error::Parse {
                line: line_number,
                message,
            }
        };

        let fields = schema.delimiter.split(line);
        let x_index = schema
            .x_index()
            .ok_or_else(|| Error::InvalidData("Schema has no x column".to_string()))?;
        let y_index = schema
            .y_index()
            .ok_or_else(|| Error::InvalidData("Schema has no y column".to_string()))?;

        let field = |index: usize, name: &str| -> Result<f64> {
            let raw = fields
                .get(index)
                .ok_or_else(|| fail(format!("Missing {} coordinate", name)))?;
            raw.parse::<f64>()
                .map_err(|_| fail(format!("Invalid {} coordinate {:?}", name, raw)))
        };

        Ok(Point2d::new(field(x_index, "x")?, field(y_index, "y")?))
    }
}

/// XY/CSV streaming reader for large files
pub struct XyCsvStreamingReader {
    lines: Lines<BufReader<File>>,
    schema: XyCsvSchema,
    line_number: usize,
    header_pending: bool,
}

impl XyCsvStreamingReader {
    /// Create a new streaming reader with an auto-detected schema
    pub fn new<P: AsRef<Path>>(path: P, chunk_size: usize) -> Result<Self> {
        let schema = XyCsvSchema::detect_from_file(&path)?;
        Self::with_schema(path, chunk_size, schema)
    }

    /// Create a new streaming reader with a specific schema
    pub fn with_schema<P: AsRef<Path>>(path: P, chunk_size: usize, schema: XyCsvSchema) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::with_capacity(chunk_size.max(1), file);

        Ok(Self {
            lines: reader.lines(),
            header_pending: schema.has_header,
            schema,
            line_number: 0,
        })
    }

    pub fn schema(&self) -> &XyCsvSchema {
        &self.schema
    }
}

impl Iterator for XyCsvStreamingReader {
    type Item = Result<Point2d>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_number += 1;

            if line.trim().is_empty() {
                continue;
            }
            if self.header_pending {
                self.header_pending = false;
                continue;
            }

            return Some(XyCsvReader::parse_line(&line, self.line_number, &self.schema));
        }
    }
}

/// XY/CSV writer implementation
pub struct XyCsvWriter;

impl XyCsvWriter {
    /// Write a polyline to an XY/CSV file
    pub fn write_polyline<P: AsRef<Path>>(
        polyline: &Polyline,
        path: P,
        options: &XyCsvWriteOptions,
    ) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        Self::write_to(polyline, &mut writer, options)?;
        writer.flush()?;
        debug!(path = %path.display(), points = polyline.len(), "wrote polyline");
        Ok(())
    }

    /// Write a polyline to any writer
    pub fn write_to<W: Write>(polyline: &Polyline, writer: &mut W, options: &XyCsvWriteOptions) -> Result<()> {
        let separator = options.schema.delimiter.as_char().to_string();

        if options.include_header {
            let header: Vec<&str> = options.schema.columns.iter().map(ColumnType::header_name).collect();
            writeln!(writer, "{}", header.join(&separator))?;
        }

        for point in polyline.iter() {
            writeln!(writer, "{}", Self::format_point(point, &options.schema.columns, &separator))?;
        }

        Ok(())
    }

    /// Shortest text that parses back to the same coordinates
    fn format_point(point: &Point2d, columns: &[ColumnType], separator: &str) -> String {
        let values: Vec<String> = columns
            .iter()
            .map(|column| match column {
                ColumnType::X => point.x.to_string(),
                ColumnType::Y => point.y.to_string(),
                ColumnType::Unknown => "0".to_string(),
            })
            .collect();

        values.join(separator)
    }
}

/// Write options for XY/CSV files
#[derive(Debug, Clone, PartialEq)]
pub struct XyCsvWriteOptions {
    pub schema: XyCsvSchema,
    pub include_header: bool,
}

impl Default for XyCsvWriteOptions {
    fn default() -> Self {
        Self::csv()
    }
}

impl XyCsvWriteOptions {
    /// Comma separated `x,y` records without a header
    pub fn csv() -> Self {
        Self {
            schema: XyCsvSchema::xy(Delimiter::Comma),
            include_header: false,
        }
    }

    /// Comma separated records under an `x,y` header
    pub fn csv_with_header() -> Self {
        Self {
            schema: XyCsvSchema::new(vec![ColumnType::X, ColumnType::Y], true, Delimiter::Comma),
            include_header: true,
        }
    }

    /// Space separated `x y` records without a header
    pub fn xy() -> Self {
        Self {
            schema: XyCsvSchema::xy(Delimiter::Space),
            include_header: false,
        }
    }

    /// Same layout with a different delimiter
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.schema.delimiter = delimiter;
        self
    }
}

impl crate::PolylineReader for XyCsvReader {
    fn read_polyline<P: AsRef<Path>>(path: P) -> Result<Polyline> {
        Self::read_polyline(path)
    }
}

impl crate::PolylineWriter for XyCsvWriter {
    fn write_polyline<P: AsRef<Path>>(polyline: &Polyline, path: P) -> Result<()> {
        let options = match path.as_ref().extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("xy") => XyCsvWriteOptions::xy(),
            _ => XyCsvWriteOptions::csv(),
        };
        Self::write_polyline(polyline, path, &options)
    }
}

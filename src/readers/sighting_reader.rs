use crate::error::{Result, SightingError};
use crate::models::{Coordinate, Sighting};
use crate::utils::constants::{SIGHTING_FIELD_COUNT, SIGHTING_TIMESTAMP_FORMAT};
use crate::utils::coordinates::parse_coordinate;
use crate::utils::progress::ProgressReporter;
use chrono::NaiveDateTime;
use csv::{ByteRecord, ReaderBuilder};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

/// How often the progress spinner is refreshed while reading
const PROGRESS_INTERVAL: u64 = 1000;

/// Reads sighting files: one header line, then one record per line.
///
/// Empty lines inside the data are rejected; empty lines after the last
/// record are ignored.
pub struct SightingReader;

impl SightingReader {
    pub fn new() -> Self {
        Self
    }

    /// Read every sighting from a comma-separated file.
    ///
    /// Either the whole file parses or an error is returned; a bad row never
    /// yields a truncated dataset.
    pub fn read_sightings(&self, path: &Path) -> Result<Vec<Sighting>> {
        self.read_sightings_with_progress(path, None)
    }

    pub fn read_sightings_with_progress(
        &self,
        path: &Path,
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<Sighting>> {
        debug!(path = %path.display(), "Reading sightings file");
        let file = File::open(path)?;
        let sightings = self.read_records(BufReader::new(file), progress)?;
        info!(
            path = %path.display(),
            records = sightings.len(),
            "Loaded sightings"
        );
        Ok(sightings)
    }

    /// Parse sightings from any reader with the same rules as a file
    pub fn read_from<R: Read>(&self, reader: R) -> Result<Vec<Sighting>> {
        self.read_records(reader, None)
    }

    fn read_records<R: Read>(
        &self,
        reader: R,
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<Sighting>> {
        // Headers are handled here so the first line goes through the same
        // line accounting as the data
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut sightings = Vec::new();
        let mut record = ByteRecord::new();
        let mut next_line: u64 = 1;
        let mut header_seen = false;

        while csv_reader.read_byte_record(&mut record)? {
            let line = next_line;
            next_line = line + lines_spanned(&record);

            // csv skips empty lines silently; they show up as extra lines consumed
            if csv_reader.position().line() > next_line {
                warn!(line, "Rejecting sightings file with an empty line");
                return Err(SightingError::format(line, "empty line"));
            }

            if !header_seen {
                header_seen = true;
                continue;
            }

            let sighting = self.parse_record(&record, line).map_err(|e| {
                warn!(line, error = %e, "Rejecting sightings file");
                e
            })?;
            sightings.push(sighting);

            if let Some(progress) = progress {
                let rows = sightings.len() as u64;
                if rows % PROGRESS_INTERVAL == 0 {
                    progress.update(rows);
                }
            }
        }

        Ok(sightings)
    }

    /// Parse a single data row
    fn parse_record(&self, record: &ByteRecord, line: u64) -> Result<Sighting> {
        // Expected format: datetime, city, state, shape, duration, comments, latitude, longitude
        if record.len() != SIGHTING_FIELD_COUNT {
            return Err(SightingError::format(
                line,
                format!(
                    "expected {} fields, found {}",
                    SIGHTING_FIELD_COUNT,
                    record.len()
                ),
            ));
        }

        let mut fields = Vec::with_capacity(SIGHTING_FIELD_COUNT);
        for (index, field) in record.iter().enumerate() {
            let text = std::str::from_utf8(field).map_err(|_| {
                SightingError::format(line, format!("invalid UTF-8 in field {}", index + 1))
            })?;
            fields.push(text);
        }

        let timestamp_str = fields[0].trim();
        let timestamp = NaiveDateTime::parse_from_str(timestamp_str, SIGHTING_TIMESTAMP_FORMAT)
            .map_err(|_| {
                SightingError::format(line, format!("Invalid timestamp: '{}'", timestamp_str))
            })?;

        let duration = fields[4].trim().parse::<u64>().map_err(|_| {
            SightingError::format(line, format!("Invalid duration: '{}'", fields[4]))
        })?;

        let latitude = parse_coordinate(fields[6]).map_err(|_| {
            SightingError::format(line, format!("Invalid latitude: '{}'", fields[6]))
        })?;
        let longitude = parse_coordinate(fields[7]).map_err(|_| {
            SightingError::format(line, format!("Invalid longitude: '{}'", fields[7]))
        })?;

        Ok(Sighting::new(
            timestamp,
            fields[1].to_string(),
            fields[2].to_string(),
            fields[3].to_string(),
            duration,
            fields[5].to_string(),
            Coordinate::new(latitude, longitude),
        ))
    }
}

/// Physical lines a record occupies, counting newlines inside quoted fields
fn lines_spanned(record: &ByteRecord) -> u64 {
    let embedded: usize = record
        .iter()
        .map(|field| field.iter().filter(|&&b| b == b'\n').count())
        .sum();
    embedded as u64 + 1
}

impl Default for SightingReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Load a sightings file, skipping its single header line
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Sighting>> {
    SightingReader::new().read_sightings(path.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "datetime,city,state,shape,duration,comments,latitude,longitude";

    fn parse(body: &str) -> Result<Vec<Sighting>> {
        let text = format!("{}\n{}", HEADER, body);
        SightingReader::new().read_from(text.as_bytes())
    }

    #[test]
    fn test_parse_rows() {
        let sightings = parse(
            "1/1/2020 10:00,Reno,NV,circle,60,bright light,39.5,-119.8\n\
             1/1/2020 11:00,Reno,NV,circle,120,steady,39.5,-119.8\n",
        )
        .unwrap();

        assert_eq!(sightings.len(), 2);
        assert_eq!(sightings[0].city, "Reno");
        assert_eq!(sightings[0].state, "NV");
        assert_eq!(sightings[0].shape, "circle");
        assert_eq!(sightings[0].duration, 60);
        assert_eq!(sightings[0].comments, "bright light");
        assert_eq!(sightings[0].location, Coordinate::new(39.5, -119.8));
        assert_eq!(sightings[1].duration, 120);
        assert_eq!(sightings[1].hour(), 11);
    }

    #[test]
    fn test_padded_timestamp() {
        let sightings = parse("10/10/1949 20:30,san marcos,tx,cylinder,2700,long,29.88,-97.94\n")
            .unwrap();
        assert_eq!(sightings[0].year(), 1949);
        assert_eq!(sightings[0].month(), 10);
    }

    #[test]
    fn test_quoted_comment_with_commas() {
        let sightings =
            parse("5/4/2005 22:00,Austin,TX,light,30,\"red, then green, then gone\",30.27,-97.74\n")
                .unwrap();
        assert_eq!(sightings[0].comments, "red, then green, then gone");
    }

    #[test]
    fn test_header_only() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_first_line_always_skipped() {
        // The header is dropped even when it looks like data
        let text = "1/1/2020 10:00,Reno,NV,circle,60,a,39.5,-119.8\n\
                    1/2/2020 10:00,Reno,NV,disk,30,b,39.5,-119.8\n";
        let sightings = SightingReader::new().read_from(text.as_bytes()).unwrap();
        assert_eq!(sightings.len(), 1);
        assert_eq!(sightings[0].shape, "disk");
    }

    #[test]
    fn test_wrong_field_count() {
        let err = parse("1/1/2020 10:00,Reno,NV,circle,60,39.5,-119.8\n").unwrap_err();
        match err {
            SightingError::Format { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("expected 8 fields"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_values() {
        assert!(parse("2020-01-01 10:00,Reno,NV,circle,60,x,39.5,-119.8\n").is_err());
        assert!(parse("1/1/2020,Reno,NV,circle,60,x,39.5,-119.8\n").is_err());
        assert!(parse("1/1/2020 10:00,Reno,NV,circle,sixty,x,39.5,-119.8\n").is_err());
        assert!(parse("1/1/2020 10:00,Reno,NV,circle,-5,x,39.5,-119.8\n").is_err());
        assert!(parse("1/1/2020 10:00,Reno,NV,circle,60,x,north,-119.8\n").is_err());
        assert!(parse("1/1/2020 10:00,Reno,NV,circle,60,x,39.5,\n").is_err());
    }

    #[test]
    fn test_bad_row_fails_whole_load() {
        let result = parse(
            "1/1/2020 10:00,Reno,NV,circle,60,ok,39.5,-119.8\n\
             1/1/2020 11:00,Reno,NV,circle,oops,bad,39.5,-119.8\n\
             1/1/2020 12:00,Reno,NV,circle,60,ok,39.5,-119.8\n",
        );
        assert!(matches!(result, Err(SightingError::Format { line: 3, .. })));
    }

    #[test]
    fn test_empty_line_is_rejected() {
        let result = parse(
            "1/1/2020 10:00,Reno,NV,circle,60,ok,39.5,-119.8\n\
             \n\
             1/1/2020 12:00,Reno,NV,circle,60,ok,39.5,-119.8\n",
        );
        match result {
            Err(SightingError::Format { line, message }) => {
                assert_eq!(line, 3);
                assert_eq!(message, "empty line");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_empty_line_before_header_is_rejected() {
        let text = format!("\n{}\n1/1/2020 10:00,Reno,NV,circle,60,ok,39.5,-119.8\n", HEADER);
        let result = SightingReader::new().read_from(text.as_bytes());
        assert!(matches!(result, Err(SightingError::Format { line: 1, .. })));
    }

    #[test]
    fn test_trailing_empty_lines_are_ignored() {
        let sightings = parse("1/1/2020 10:00,Reno,NV,circle,60,ok,39.5,-119.8\n\n\n").unwrap();
        assert_eq!(sightings.len(), 1);
    }

    #[test]
    fn test_line_numbers_count_multiline_comments() {
        let result = parse(
            "1/1/2020 10:00,Reno,NV,circle,60,\"first\nsecond\",39.5,-119.8\n\
             1/1/2020 11:00,Reno,NV,circle,oops,bad,39.5,-119.8\n",
        );
        assert!(matches!(result, Err(SightingError::Format { line: 4, .. })));
    }

    #[test]
    fn test_invalid_utf8_reports_its_line() {
        let mut bytes = format!("{}\n", HEADER).into_bytes();
        bytes.extend_from_slice(b"1/1/2020 10:00,Reno,NV,circle,60,caf\xe9,39.5,-119.8\n");

        match SightingReader::new().read_from(&bytes[..]) {
            Err(SightingError::Format { line, message }) => {
                assert_eq!(line, 2);
                assert_eq!(message, "invalid UTF-8 in field 6");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_read_sightings_file() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "{}", HEADER)?;
        writeln!(
            temp_file,
            "10/10/1949 20:30,san marcos,tx,cylinder,2700,This event took place in early fall,29.8830556,-97.9411111"
        )?;
        writeln!(
            temp_file,
            "10/10/1956 21:00,edna,tx,circle,20,My older brother and twin sister were leaving,28.9783333,-96.6458333"
        )?;

        let sightings = load(temp_file.path())?;

        assert_eq!(sightings.len(), 2);
        assert_eq!(sightings[0].city, "san marcos");
        assert_eq!(sightings[1].city, "edna");
        assert_eq!(sightings[1].duration, 20);

        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let result = load("does/not/exist.csv");
        assert!(matches!(result, Err(SightingError::Io(_))));
    }
}

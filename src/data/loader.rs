use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{
    Array, AsArray, Float32Array, Float64Array, Int32Array, Int64Array, UInt32Array,
    UInt8Array,
};
use arrow::datatypes::{DataType, Schema};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::error::DataError;
use super::model::{
    LaunchDataset, LaunchRecord, COL_BOOSTER_CATEGORY, COL_BOOSTER_VERSION, COL_CLASS,
    COL_FLIGHT_NUMBER, COL_LAUNCH_SITE, COL_PAYLOAD_MASS, REQUIRED_COLUMNS,
};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row, one launch per row (the lab's `spacex_launch_dash.csv`)
/// * `.json`    – `[{ "Launch Site": "...", "Payload Mass (kg)": 0.0, ... }, ...]`
/// * `.parquet` – flat columns with the same names
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => bail!("Unsupported file extension: .{other}"),
    };

    let dataset = LaunchDataset::from_records(records);
    match dataset.payload_bounds() {
        Some((min, max)) => log::info!(
            "Loaded {} launches from {} sites, payload {min}..={max} kg",
            dataset.len(),
            dataset.sites.len()
        ),
        None => log::warn!("{} contains no launches", path.display()),
    }
    Ok(dataset)
}

/// Outcome class must be binary.
fn check_outcome(records: &[LaunchRecord]) -> Result<(), DataError> {
    match records.iter().position(|r| r.class > 1) {
        Some(row) => Err(DataError::InvalidOutcome {
            row,
            value: i64::from(records[row].class),
        }),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, extra columns are ignored.
fn load_csv(path: &Path) -> Result<Vec<LaunchRecord>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers = reader.headers().context("reading CSV headers")?.clone();

    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(DataError::MissingColumn(col.to_string()).into());
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<LaunchRecord>().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(record);
    }

    check_outcome(&records)?;
    Ok(records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Launch Site": "CCAFS LC-40",
///     "Payload Mass (kg)": 525.0,
///     "class": 0,
///     "Booster Version Category": "v1.0"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<LaunchRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let rows = root.as_array().context("Expected top-level JSON array")?;
    if let Some(first) = rows.first() {
        let obj = first.as_object().context("Row 0 is not a JSON object")?;
        for col in REQUIRED_COLUMNS {
            if !obj.contains_key(col) {
                return Err(DataError::MissingColumn(col.to_string()).into());
            }
        }
    }

    let records: Vec<LaunchRecord> = serde_json::from_value(root).context("parsing JSON records")?;
    check_outcome(&records)?;
    Ok(records)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file written by Pandas (`df.to_parquet()`) or Polars.
///
/// Numeric columns may be any of Int32/Int64/UInt8/UInt32/Float32/Float64,
/// text columns Utf8 or LargeUtf8.
fn load_parquet(path: &Path) -> Result<Vec<LaunchRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let site_col = batch.column(required_index(&schema, COL_LAUNCH_SITE)?);
        let payload_col = batch.column(required_index(&schema, COL_PAYLOAD_MASS)?);
        let class_col = batch.column(required_index(&schema, COL_CLASS)?);
        let category_col = batch.column(required_index(&schema, COL_BOOSTER_CATEGORY)?);
        let flight_col = schema
            .index_of(COL_FLIGHT_NUMBER)
            .ok()
            .map(|i| batch.column(i));
        let version_col = schema
            .index_of(COL_BOOSTER_VERSION)
            .ok()
            .map(|i| batch.column(i));

        for row in 0..batch.num_rows() {
            let global_row = records.len();

            let class = extract_f64(class_col, global_row, row, COL_CLASS)?;
            if class != 0.0 && class != 1.0 {
                return Err(DataError::InvalidOutcome {
                    row: global_row,
                    value: class as i64,
                }
                .into());
            }

            let flight_number = match flight_col {
                Some(col) if !col.is_null(row) => {
                    let value = extract_f64(col, global_row, row, COL_FLIGHT_NUMBER)?;
                    if value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
                        return Err(DataError::InvalidFlightNumber {
                            row: global_row,
                            value,
                        }
                        .into());
                    }
                    Some(value as u32)
                }
                _ => None,
            };
            let booster_version = match version_col {
                Some(col) if !col.is_null(row) => {
                    Some(extract_string(col, global_row, row, COL_BOOSTER_VERSION)?)
                }
                _ => None,
            };

            records.push(LaunchRecord {
                launch_site: extract_string(site_col, global_row, row, COL_LAUNCH_SITE)?,
                payload_mass_kg: extract_f64(payload_col, global_row, row, COL_PAYLOAD_MASS)?,
                class: class as u8,
                booster_version_category: extract_string(
                    category_col,
                    global_row,
                    row,
                    COL_BOOSTER_CATEGORY,
                )?,
                flight_number,
                booster_version,
            });
        }
    }

    Ok(records)
}

// -- Parquet / Arrow helpers --

fn required_index(schema: &Schema, column: &str) -> Result<usize, DataError> {
    schema
        .index_of(column)
        .map_err(|_| DataError::MissingColumn(column.to_string()))
}

/// Read a numeric cell as `f64`. `global_row` is only used for error messages.
fn extract_f64(
    col: &Arc<dyn Array>,
    global_row: usize,
    row: usize,
    column: &str,
) -> Result<f64, DataError> {
    if col.is_null(row) {
        return Err(DataError::NullValue {
            row: global_row,
            column: column.to_string(),
        });
    }
    let value = match col.data_type() {
        DataType::Float64 => col
            .as_any()
            .downcast_ref::<Float64Array>()
            .map(|a| a.value(row)),
        DataType::Float32 => col
            .as_any()
            .downcast_ref::<Float32Array>()
            .map(|a| a.value(row) as f64),
        DataType::Int64 => col
            .as_any()
            .downcast_ref::<Int64Array>()
            .map(|a| a.value(row) as f64),
        DataType::Int32 => col
            .as_any()
            .downcast_ref::<Int32Array>()
            .map(|a| a.value(row) as f64),
        DataType::UInt32 => col
            .as_any()
            .downcast_ref::<UInt32Array>()
            .map(|a| a.value(row) as f64),
        DataType::UInt8 => col
            .as_any()
            .downcast_ref::<UInt8Array>()
            .map(|a| a.value(row) as f64),
        _ => None,
    };
    value.ok_or_else(|| DataError::UnsupportedType {
        row: global_row,
        column: column.to_string(),
        data_type: format!("{:?}", col.data_type()),
    })
}

fn extract_string(
    col: &Arc<dyn Array>,
    global_row: usize,
    row: usize,
    column: &str,
) -> Result<String, DataError> {
    if col.is_null(row) {
        return Err(DataError::NullValue {
            row: global_row,
            column: column.to_string(),
        });
    }
    match col.data_type() {
        DataType::Utf8 => Ok(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(row).to_string()),
        other => Err(DataError::UnsupportedType {
            row: global_row,
            column: column.to_string(),
            data_type: format!("{other:?}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::StringArray;
    use arrow::datatypes::Field;
    use arrow::record_batch::RecordBatch;
    use parquet::arrow::ArrowWriter;
    use tempfile::TempDir;

    const LAB_HEADER: &str =
        ",Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category";

    fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_lab_csv_layout() {
        let dir = TempDir::new().unwrap();
        let body = format!(
            "{LAB_HEADER}\n\
             0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0\n\
             1,2,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0\n\
             2,6,VAFB SLC-4E,0,500.0,F9 v1.1  B1003,v1.1\n\
             3,20,KSC LC-39A,1,9600.0,F9 FT B1029.1,FT\n"
        );
        let path = write(&dir, "launches.csv", &body);

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.sites, vec!["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]);
        assert_eq!(ds.payload_bounds(), Some((0.0, 9600.0)));
        assert_eq!(ds.records[3].flight_number, Some(20));
        assert_eq!(ds.records[3].booster_version.as_deref(), Some("F9 FT B1029.1"));
        assert_eq!(ds.records[3].class, 1);
    }

    #[test]
    fn csv_optional_columns_may_be_absent() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "min.csv",
            "Launch Site,Payload Mass (kg),class,Booster Version Category\nA,100,1,FT\n",
        );
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.records[0].flight_number, None);
        assert_eq!(ds.records[0].booster_version, None);
    }

    #[test]
    fn csv_missing_column_fails() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "bad.csv", "Launch Site,class,Booster Version Category\nA,1,FT\n");
        let err = load_file(&path).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DataError>(),
            Some(&DataError::MissingColumn("Payload Mass (kg)".into()))
        );
    }

    #[test]
    fn csv_non_binary_class_fails() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "bad.csv",
            "Launch Site,Payload Mass (kg),class,Booster Version Category\nA,100,1,FT\nA,200,2,FT\n",
        );
        let err = load_file(&path).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DataError>(),
            Some(&DataError::InvalidOutcome { row: 1, value: 2 })
        );
    }

    #[test]
    fn loads_json_records() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "launches.json",
            r#"[
                {"Launch Site": "A", "Payload Mass (kg)": 2500.5, "class": 1, "Booster Version Category": "FT"},
                {"Launch Site": "B", "Payload Mass (kg)": 300, "class": 0, "Booster Version Category": "v1.1", "Flight Number": 7}
            ]"#,
        );
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.payload_bounds(), Some((300.0, 2500.5)));
        assert_eq!(ds.records[1].flight_number, Some(7));
    }

    #[test]
    fn json_missing_field_fails() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "bad.json",
            r#"[{"Launch Site": "A", "class": 1, "Booster Version Category": "FT"}]"#,
        );
        let err = load_file(&path).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DataError>(),
            Some(&DataError::MissingColumn("Payload Mass (kg)".into()))
        );
    }

    #[test]
    fn empty_json_array_is_an_empty_dataset() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "empty.json", "[]");
        assert!(load_file(&path).unwrap().is_empty());
    }

    #[test]
    fn loads_parquet_columns() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("launches.parquet");

        let schema = Arc::new(Schema::new(vec![
            Field::new(COL_LAUNCH_SITE, DataType::Utf8, false),
            Field::new(COL_PAYLOAD_MASS, DataType::Float64, false),
            Field::new(COL_CLASS, DataType::Int64, false),
            Field::new(COL_BOOSTER_CATEGORY, DataType::Utf8, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["A", "B", "A"])),
                Arc::new(Float64Array::from(vec![1000.0, 4000.0, 2500.0])),
                Arc::new(Int64Array::from(vec![1, 0, 1])),
                Arc::new(StringArray::from(vec!["FT", "B4", "FT"])),
            ],
        )
        .unwrap();
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.sites, vec!["A", "B"]);
        assert_eq!(ds.records[1].class, 0);
        assert_eq!(ds.records[2].booster_version_category, "FT");
        assert_eq!(ds.records[0].flight_number, None);
    }

    fn write_flight_numbers(path: &Path, flights: Vec<f64>) {
        let n = flights.len();
        let schema = Arc::new(Schema::new(vec![
            Field::new(COL_FLIGHT_NUMBER, DataType::Float64, false),
            Field::new(COL_LAUNCH_SITE, DataType::Utf8, false),
            Field::new(COL_PAYLOAD_MASS, DataType::Float64, false),
            Field::new(COL_CLASS, DataType::Int64, false),
            Field::new(COL_BOOSTER_CATEGORY, DataType::Utf8, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(Float64Array::from(flights)),
                Arc::new(StringArray::from(vec!["A"; n])),
                Arc::new(Float64Array::from(vec![1000.0; n])),
                Arc::new(Int64Array::from(vec![1; n])),
                Arc::new(StringArray::from(vec!["FT"; n])),
            ],
        )
        .unwrap();
        let file = std::fs::File::create(path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();
    }

    #[test]
    fn parquet_flight_numbers_must_be_whole() {
        let dir = TempDir::new().unwrap();

        let path = dir.path().join("ok.parquet");
        write_flight_numbers(&path, vec![1.0, 42.0]);
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.records[1].flight_number, Some(42));

        for (name, bad) in [("frac.parquet", 3.5), ("neg.parquet", -1.0), ("nan.parquet", f64::NAN)] {
            let path = dir.path().join(name);
            write_flight_numbers(&path, vec![1.0, bad]);
            let err = load_file(&path).unwrap_err();
            match err.downcast_ref::<DataError>() {
                Some(DataError::InvalidFlightNumber { row, .. }) => assert_eq!(*row, 1),
                other => panic!("unexpected error for {bad}: {other:?}"),
            }
        }
    }

    #[test]
    fn csv_fractional_flight_number_fails() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "bad.csv",
            "Flight Number,Launch Site,Payload Mass (kg),class,Booster Version Category\n3.5,A,100,1,FT\n",
        );
        assert!(load_file(&path).is_err());
    }

    #[test]
    fn unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "launches.xlsx", "");
        let err = load_file(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported file extension"));
    }
}

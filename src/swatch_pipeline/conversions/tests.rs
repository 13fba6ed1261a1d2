use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};

use crate::swatch_pipeline::aco::{Palette, PaletteReader};
use crate::swatch_pipeline::color::Color;
use crate::swatch_pipeline::common::error::{ConversionError, Result};
use crate::swatch_pipeline::conversions::AcoToTiffPipeline;
use crate::swatch_pipeline::grid::{GridImage, GridSize, GridWriter, RenderConfig};

struct MockReader {
    should_fail: bool,
    mock_data: Option<Palette>,
}

impl PaletteReader for MockReader {
    fn read_palette(&self, _data: &[u8]) -> Result<Palette> {
        if self.should_fail {
            return Err(ConversionError::UnsupportedColorSpace(42));
        }
        Ok(self.mock_data.clone().unwrap_or_else(|| Palette::new(vec![Color::WHITE; 4])))
    }
}

struct MockWriter {
    should_fail: bool,
    written_data: Arc<Mutex<Vec<GridImage>>>,
}

impl GridWriter for MockWriter {
    fn write_grid(&self, image: &GridImage, _output: &mut dyn Write, _config: &RenderConfig) -> Result<()> {
        if self.should_fail {
            return Err(ConversionError::EncodeError("Mock encode error".to_string()));
        }
        self.written_data.lock().unwrap().push(image.clone());
        Ok(())
    }
}

fn small_config() -> RenderConfig {
    RenderConfig::builder()
        .canvas(GridSize::new(2, 2))
        .cell(GridSize::new(3, 3))
        .build()
}

fn swatch_bytes(records: &[(u16, [u16; 4])]) -> Vec<u8> {
    let mut data = vec![0x00, 0x01];
    data.extend_from_slice(&(records.len() as u16).to_be_bytes());
    for (id, fields) in records {
        data.extend_from_slice(&id.to_be_bytes());
        for field in fields {
            data.extend_from_slice(&field.to_be_bytes());
        }
    }
    data
}

#[test]
fn test_successful_conversion() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader { should_fail: false, mock_data: None };
    let writer = MockWriter { should_fail: false, written_data: written.clone() };

    let pipeline = AcoToTiffPipeline::with_custom(reader, writer, small_config());

    let mut output = Cursor::new(Vec::new());
    let palette = pipeline.convert(b"fake swatch data", &mut output).unwrap();

    assert_eq!(palette.len(), 4);
    let written = written.lock().unwrap();
    assert_eq!(written.len(), 1);
    assert_eq!(written[0].width, 6);
    assert_eq!(written[0].height, 6);
}

#[test]
fn test_reader_failure() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader { should_fail: true, mock_data: None };
    let writer = MockWriter { should_fail: false, written_data: written.clone() };

    let pipeline = AcoToTiffPipeline::with_custom(reader, writer, small_config());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake swatch data", &mut output);

    assert!(matches!(result.unwrap_err(), ConversionError::UnsupportedColorSpace(42)));
    assert!(written.lock().unwrap().is_empty());
}

#[test]
fn test_writer_failure() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader { should_fail: false, mock_data: None };
    let writer = MockWriter { should_fail: true, written_data: written };

    let pipeline = AcoToTiffPipeline::with_custom(reader, writer, small_config());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake swatch data", &mut output);

    assert!(matches!(result.unwrap_err(), ConversionError::EncodeError(_)));
}

#[test]
fn test_grid_validation_failure() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader { should_fail: false, mock_data: None };
    let writer = MockWriter { should_fail: false, written_data: written.clone() };

    let config = RenderConfig::builder()
        .canvas(GridSize::new(0, 12))
        .build();
    let pipeline = AcoToTiffPipeline::with_custom(reader, writer, config);

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake swatch data", &mut output);

    assert!(matches!(result.unwrap_err(), ConversionError::InvalidGrid { columns: 0, rows: 12 }));
    assert!(written.lock().unwrap().is_empty());
}

#[test]
fn test_cell_validation_failure() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader { should_fail: false, mock_data: None };
    let writer = MockWriter { should_fail: false, written_data: written };

    let config = RenderConfig::builder()
        .cell(GridSize::new(10, 0))
        .build();
    let pipeline = AcoToTiffPipeline::with_custom(reader, writer, config);

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake swatch data", &mut output);

    assert!(matches!(result.unwrap_err(), ConversionError::InvalidCellSize { width: 10, height: 0 }));
}

#[test]
fn test_overflowing_grid_is_rejected() {
    let huge = 1usize << 32;
    let data = swatch_bytes(&[(8, [5000, 0, 0, 0])]);
    let config = RenderConfig::builder()
        .canvas(GridSize::new(huge, 1))
        .cell(GridSize::new(huge, 1))
        .build();

    let pipeline = AcoToTiffPipeline::new(config);
    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(&data, &mut output);

    assert!(matches!(result.unwrap_err(), ConversionError::InvalidGrid { rows: 1, .. }));
    assert!(output.get_ref().is_empty());
}

#[test]
fn test_overflowing_grid_is_rejected_without_validation() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader { should_fail: false, mock_data: None };
    let writer = MockWriter { should_fail: false, written_data: written.clone() };

    let huge = 1usize << 32;
    let config = RenderConfig::builder()
        .canvas(GridSize::new(huge, 1))
        .cell(GridSize::new(huge, 1))
        .validate_grid(false)
        .build();
    let pipeline = AcoToTiffPipeline::with_custom(reader, writer, config);

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake swatch data", &mut output);

    assert!(matches!(result.unwrap_err(), ConversionError::InvalidGrid { .. }));
    assert!(written.lock().unwrap().is_empty());
}

#[test]
fn test_grid_validation_disabled() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader { should_fail: false, mock_data: None };
    let writer = MockWriter { should_fail: false, written_data: written.clone() };

    let config = RenderConfig::builder()
        .canvas(GridSize::new(0, 0))
        .validate_grid(false)
        .build();
    let pipeline = AcoToTiffPipeline::with_custom(reader, writer, config);

    let mut output = Cursor::new(Vec::new());
    assert!(pipeline.convert(b"fake swatch data", &mut output).is_ok());
    assert_eq!(written.lock().unwrap()[0].data.len(), 0);
}

#[test]
fn test_rendered_cells_come_from_decoded_records() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let writer = MockWriter { should_fail: false, written_data: written.clone() };
    let pipeline = AcoToTiffPipeline::with_custom(crate::swatch_pipeline::aco::AcoReader, writer, small_config());

    let data = swatch_bytes(&[
        (0, [0xFF00, 0, 0, 0]),
        (8, [10000, 0, 0, 0]),
        (9, [0, 0, 10000, 0]),
    ]);
    let mut output = Cursor::new(Vec::new());
    pipeline.convert(&data, &mut output).unwrap();

    let written = written.lock().unwrap();
    let image = &written[0];
    assert_eq!(image.pixel(0, 0), Color::new(255, 0, 0));
    assert_eq!(image.pixel(3, 0), Color::WHITE);
    assert_eq!(image.pixel(0, 3), Color::new(255, 255, 0));
    // fourth cell has no record
    assert_eq!(image.pixel(5, 5), Color::BLACK);
}

#[test]
fn test_convert_file() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("colors.aco");
    let output_path = dir.path().join("colors.tiff");
    std::fs::write(&input_path, swatch_bytes(&[(0, [0, 0xFF00, 0, 0]), (1, [0, 0, 0, 0])])).unwrap();

    let pipeline = AcoToTiffPipeline::new(small_config());
    let palette = pipeline.convert_file(&input_path, &output_path).unwrap();
    assert_eq!(palette.colors, vec![Color::new(0, 255, 0), Color::BLACK]);

    let bytes = std::fs::read(&output_path).unwrap();
    let mut decoder = tiff::decoder::Decoder::new(Cursor::new(bytes)).unwrap();
    assert_eq!(decoder.dimensions().unwrap(), (6, 6));
}

#[test]
fn test_convert_file_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let output_path = dir.path().join("out.tiff");

    let pipeline = AcoToTiffPipeline::new(small_config());
    let result = pipeline.convert_file(dir.path().join("missing.aco"), &output_path);

    assert!(matches!(result.unwrap_err(), ConversionError::InputReadError(_)));
    assert!(!output_path.exists());
}

#[test]
fn test_convert_file_bad_data_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("bad.aco");
    let output_path = dir.path().join("bad.tiff");
    std::fs::write(&input_path, swatch_bytes(&[(3, [0, 0, 0, 0])])).unwrap();

    let pipeline = AcoToTiffPipeline::new(small_config());
    let result = pipeline.convert_file(&input_path, &output_path);

    assert!(matches!(result.unwrap_err(), ConversionError::UnsupportedColorSpace(3)));
    assert!(!output_path.exists());
}

#[test]
fn test_set_config() {
    let mut pipeline = AcoToTiffPipeline::new(RenderConfig::default());
    assert_eq!(pipeline.config().layout.columns, 25);
    pipeline.set_config(small_config());
    assert_eq!(pipeline.config().layout.columns, 2);
}

//! Generates QR Code and Micro QR Code symbols from text and byte data, per
//! ISO/IEC 18004.
//!
//! # Features
//!
//! - Encodes all 40 QR versions and all four Micro QR versions (M1-M4)
//! - Supports every error correction level legal for each family
//! - Automatic version/error-level search, or full manual control
//! - Automatic mask selection by penalty score, or a caller-forced mask
//! - Manual segment construction, including ECI headers
//! - Output is the raw module grid; rendering to an image format is left to
//!   the caller
//!
//! # Examples
//!
//! Simple operation:
//!
//! ```
//! use qr::{make_qr_symbol, CodeEcc};
//!
//! let symbol = make_qr_symbol("Hello, world!", CodeEcc::Medium).unwrap();
//! for y in 0..symbol.size() {
//!     for x in 0..symbol.size() {
//!         let _dark = symbol.matrix.is_dark(qr::Position::new(x, y));
//!     }
//! }
//! ```
//!
//! Manual segment construction:
//!
//! ```
//! use qr::{make_qr_symbol_advanced, CodeEcc, QrMask, Segment, Version};
//!
//! let text = "3141592653589793238462643383";
//! let segs = vec![Segment::make_numeric(text)];
//! let symbol = make_qr_symbol_advanced(
//!     &segs, CodeEcc::High, Version::new(5), Version::new(5), Some(QrMask::new(2)), false,
//! ).unwrap();
//! ```

mod bit_buffer;
mod capacity;
mod code_ecc;
mod codewords;
mod designator;
mod eci;
mod error;
mod finder_penalty;
mod format_info;
mod function_patterns;
mod gf;
mod mask;
mod matrix;
mod micro_ecc;
mod micro_symbol;
mod micro_version;
mod optimizer;
mod placement;
mod reed_solomon;
mod segment;
mod segment_mode;
mod symbol;
mod version;
mod views;

pub use bit_buffer::BitBuffer;
pub use capacity::{capacity_of, qr_capacity, CodeCapacity};
pub use code_ecc::CodeEcc;
pub use designator::Designator;
pub use eci::{assignment_bit_count, make_eci_segment, MAX_ASSIGNMENT_NUMBER};
pub use error::QrError;
pub use mask::{MicroMask, QrMask};
pub use matrix::{Dimension, Matrix, Module, Position};
pub use micro_ecc::MicroEcc;
pub use micro_symbol::{make_micro_qr_symbol, make_micro_qr_symbol_advanced};
pub use micro_version::MicroVersion;
pub use optimizer::optimize;
pub use segment::Segment;
pub use segment_mode::SegmentMode;
pub use symbol::{make_qr_symbol, make_qr_symbol_advanced, Symbol};
pub use version::Version;

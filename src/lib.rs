//! Motif Mark: find (possibly overlapping) IUPAC motif hits in genes and lay
//! them out next to the genes' exon structure.
//!
//! The engine modules (`iupac_code` through `layout`) do no I/O. File input
//! lives in [`input_files`]; drawing is done by `motif_mark_render`.

pub mod error;
pub mod exon_spans;
pub mod input_files;
pub mod iupac_code;
pub mod layout;
pub mod motif_colors;
pub mod motif_pattern;
pub mod motif_scan;
pub mod sequence_record;
pub mod settings;

pub use error::{ErrorCode, MotifMarkError};
pub use layout::{annotate, build_layout};
pub use motif_mark_protocol::LayoutDocument;
pub use motif_pattern::{MotifPattern, MotifSet};
pub use sequence_record::SequenceRecord;
pub use settings::LayoutSettings;

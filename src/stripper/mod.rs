pub mod header_stripper;

pub use header_stripper::{
    HeaderStripper, StripOutcome, StripSummary, COPYRIGHT_LINE, SOURCE_EXTENSION,
};

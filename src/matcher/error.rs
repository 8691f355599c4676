use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SegmentError {
    #[error("no input has been scanned; segment groups are unavailable")]
    NoScannedInput,
    #[error("segment group {group} is out of range (0..={max})")]
    GroupOutOfRange { group: isize, max: usize },
}

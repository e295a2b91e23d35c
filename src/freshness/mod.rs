//! Freshness detection: generator-hash marker embedded in each artifact.

mod hash;

pub use hash::{
    GENERATOR_HASH, build_marker, is_valid, is_valid_with, parse_marker, read_marker,
};

//! Statistical analysis utilities for the crunch utilities.
//!
//! This crate provides the descriptive statistics used by the `crunch stats`
//! utility:
//!
//! - **Central tendency**: mean, median, and mode (with tie handling)
//! - **Dispersion**: population variance and standard deviation
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use crunch_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.median, 3.0);
//! ```
//!
//! ## Mode with tied values
//!
//! ```
//! use crunch_stats::descriptive::{DescriptiveStats, Mode};
//!
//! let values = [1.0, 1.0, 2.0, 2.0, 3.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mode, Mode::Multiple(vec![1.0, 2.0]));
//! ```

pub mod descriptive;

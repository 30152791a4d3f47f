//! The osu!mania beatmap parser.
//!
//! `.osu` files are line-oriented and divided into `[Section]`s. This crate scans them once and
//! builds a [`Beatmap`](beatmap::model::Beatmap) with its metadata, timing points and hit objects,
//! maintaining the BPM range, note counts and key positions along the way.
//!
//! # Example
//!
//! ```
//! use mania_rs::beatmap::prelude::*;
//!
//! let source = "[General]\r\nMode: 3\r\n\r\n[HitObjects]\r\n64,192,1000,128,0,1500:0:0:0:0:\r\n";
//! let beatmap = parse_beatmap(source).unwrap();
//! assert_eq!(beatmap.hold_count(), 1);
//! assert_eq!(beatmap.hit_objects()[0].end_time, 1500);
//! ```
//!
//! # Features
//!
//! - `serde` - Serialization of the model types.
//! - `diagnostics` - Rendering parse errors with `ariadne`. Enabled by default.

pub mod beatmap;
#[cfg(feature = "diagnostics")]
pub mod diagnostics;

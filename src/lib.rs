//! # vcxlist - MSBuild to CMake source lists
//!
//! vcxlist reads the `ClCompile` items of a Visual Studio `.vcxproj` and prints
//! the same files as a CMake `set()` declaration, with separators turned into
//! `/` and a known relative root replaced by a CMake variable.
//!
//! ## Quick Start
//!
//! ```bash
//! # Regenerate the 7-Zip source list from the repository root
//! vcxlist > cmake/7za_sources.cmake
//!
//! # Another project and layout
//! vcxlist -i lib/lib.vcxproj -n LIB_SOURCES --prefix '..\lib\' --placeholder '${LIB_ROOT}/'
//! ```
//!
//! ## Module Organization
//!
//! - [`project`] - Loading the document and extracting `Include` paths
//! - [`normalize`] - Separator and prefix rewriting
//! - [`cmake`] - Rendering the `set()` block
//! - [`transcode`] - The load, extract, rewrite, render pipeline
//! - [`config`] - Defaults, `vcxlist.toml`, and CLI overrides

/// CMake source list rendering.
pub mod cmake;

/// Layered run configuration.
pub mod config;

/// Error types.
pub mod error;

/// Path separator and prefix rewriting.
pub mod normalize;

/// MSBuild project loading and item extraction.
pub mod project;

/// End-to-end transcoding pipeline.
pub mod transcode;

//! Application initialization.
//!
//! Sets up the two pieces of ambient state the run needs: the logger and the
//! Public Suffix List extractor.

mod logger;

pub use logger::init_logger_with;

/// Initializes the Public Suffix List extractor.
///
/// `psl::List` carries a compiled-in suffix list, so domain validation never
/// touches the network.
pub fn init_extractor() -> psl::List {
    psl::List
}

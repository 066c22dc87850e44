//! Optional tracing subscriber for hosts that do not install their own.
//!
//! `DTX_LOG` takes an `EnvFilter` directive (falling back to `RUST_LOG`).
//! `DTX_LOG_FORMAT=tree` nests pass events under their tree and pass spans;
//! anything else prints flat lines.
//!
//! ```bash
//! DTX_LOG=dtx_transforms=trace DTX_LOG_FORMAT=tree host-app input.dll
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// How events are rendered on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One line per event.
    Flat,
    /// Indented by span via `tracing-tree`.
    Tree,
}

impl LogFormat {
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("tree") {
            Self::Tree
        } else {
            Self::Flat
        }
    }
}

/// Install a global subscriber when `DTX_LOG` or `RUST_LOG` is set.
///
/// Leaves an already-installed subscriber in place.
pub fn init_tracing() {
    let filter = match std::env::var("DTX_LOG") {
        Ok(directives) => EnvFilter::builder().parse_lossy(directives),
        Err(_) if std::env::var_os("RUST_LOG").is_some() => EnvFilter::from_default_env(),
        Err(_) => return,
    };
    let format = LogFormat::parse(&std::env::var("DTX_LOG_FORMAT").unwrap_or_default());

    let installed = match format {
        LogFormat::Tree => Registry::default()
            .with(filter)
            .with(
                tracing_tree::HierarchicalLayer::new(2)
                    .with_indent_lines(true)
                    .with_targets(true),
            )
            .try_init(),
        LogFormat::Flat => Registry::default()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };

    if installed.is_err() {
        tracing::debug!("global tracing subscriber already set; keeping it");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
        assert_eq!(LogFormat::parse(" TREE "), LogFormat::Tree);
        assert_eq!(LogFormat::parse(""), LogFormat::Flat);
        assert_eq!(LogFormat::parse("json"), LogFormat::Flat);
    }
}

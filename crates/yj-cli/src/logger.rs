use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "yj_engine=info,yj_interpret=info,yj_server=info,tower_http=info,warn";
const VERBOSE_FILTER: &str =
    "yj_engine=debug,yj_interpret=debug,yj_server=debug,tower_http=debug,info";

/// Install the global subscriber. `RUST_LOG` wins over both defaults.
///
/// Logs go to stderr so `--json` output on stdout stays parseable.
pub fn init_cli_logger(verbose: bool, json: bool) {
    let default = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(layer.json()).init();
    } else {
        registry.with(layer.compact()).init();
    }
}
